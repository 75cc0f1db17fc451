use std::path::Path;

use langsheet::{TranslationTable, typegen, validate};

use crate::locales;
use crate::validation::{validate_dir_path, validate_output_path};

pub fn run(locales_dir: &str, output: &str, reference: Option<&str>) -> Result<(), String> {
    validate_dir_path(locales_dir)?;
    validate_output_path(output)?;

    let flattened = locales::load_flattened(Path::new(locales_dir)).map_err(|e| e.to_string())?;
    validate(&flattened).map_err(|e| e.to_string())?;

    let reference_id = match reference {
        Some(id) if flattened.contains_key(id) => id.to_string(),
        Some(id) => {
            return Err(format!("reference locale `{id}` not found in {locales_dir}"));
        }
        // Post-validation all key sets agree, so any locale works; the
        // lexicographically first one keeps runs deterministic.
        None => flattened
            .keys()
            .next()
            .cloned()
            .ok_or_else(|| format!("no locales found in {locales_dir}"))?,
    };

    let table = TranslationTable::build(&flattened[&reference_id]);
    let contents = typegen::render(&table);
    locales::write_atomically(Path::new(output), &contents).map_err(|e| e.to_string())?;

    println!(
        "Generated {output} from reference locale {reference_id} ({} keys, {} parameterized)",
        table.keys.len(),
        table.param_types.len()
    );
    Ok(())
}
