use crate::{export, status};

pub fn run(locales_dir: &str, output: &str) -> Result<(), String> {
    export::run(locales_dir, output)?;
    println!();
    status::run(locales_dir, false)
}
