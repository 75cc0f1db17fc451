use std::collections::BTreeMap;
use std::path::Path;

use langsheet::{import_sheet, unflatten, workbook};

use crate::DEFAULT_WORKBOOK;
use crate::download;
use crate::locales;
use crate::validation::validate_file_path;

pub fn run(source: Option<&str>, locales_dir: &str) -> Result<(), String> {
    let source = source.unwrap_or(DEFAULT_WORKBOOK);

    let sheet = if download::is_url(source) {
        println!("Downloading workbook from {source}");
        let payload = download::fetch_workbook(source).map_err(|e| e.to_string())?;
        workbook::read_xlsx_bytes(payload).map_err(|e| e.to_string())?
    } else {
        validate_file_path(source)?;
        workbook::read_sheet_from_path(Path::new(source)).map_err(|e| e.to_string())?
    };

    let imported = import_sheet(&sheet).map_err(|e| e.to_string())?;

    let mut trees = BTreeMap::new();
    for (locale, flat) in &imported {
        let tree = unflatten(flat).map_err(|e| format!("{locale}: {e}"))?;
        trees.insert(locale.clone(), tree);
    }
    locales::write_trees(Path::new(locales_dir), &trees).map_err(|e| e.to_string())?;

    for (locale, flat) in &imported {
        println!("Wrote {locale}.json ({} keys)", flat.len());
    }
    println!(
        "Imported {} rows into {} locale files in {}",
        sheet.rows.len(),
        imported.len(),
        locales_dir
    );
    Ok(())
}
