use std::path::Path;

use langsheet::{export_sheet, validate, workbook};

use crate::locales;
use crate::validation::{validate_dir_path, validate_output_path};

pub fn run(locales_dir: &str, output: &str) -> Result<(), String> {
    validate_dir_path(locales_dir)?;
    validate_output_path(output)?;

    let flattened = locales::load_flattened(Path::new(locales_dir)).map_err(|e| e.to_string())?;
    validate(&flattened).map_err(|e| e.to_string())?;

    let sheet = export_sheet(&flattened);
    workbook::write_sheet_to_path(&sheet, Path::new(output)).map_err(|e| e.to_string())?;

    println!(
        "Exported {} keys across {} locales to {}",
        sheet.rows.len(),
        flattened.len(),
        output
    );
    Ok(())
}
