//! The on-disk locale store: a flat directory of `<locale-id>.json` files,
//! each holding one locale resource tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use langsheet::{Error, FlatResource, flatten};
use serde_json::{Map, Value};
use unic_langid::LanguageIdentifier;

/// Scans `dir` (non-recursively) for locale JSON files, sorted by locale id.
///
/// Files without a `.json` extension are ignored; a `.json` file whose stem is
/// not a valid BCP 47 locale identifier is skipped with a warning.
pub fn scan_locale_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, Error> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if stem.parse::<LanguageIdentifier>().is_err() {
            eprintln!(
                "Warning: skipping `{}`: `{stem}` is not a valid locale identifier",
                path.display()
            );
            continue;
        }
        files.push((stem.to_string(), path));
    }
    files.sort();
    Ok(files)
}

/// Loads every locale resource tree from `dir`.
pub fn load_trees(dir: &Path) -> Result<BTreeMap<String, Map<String, Value>>, Error> {
    let files = scan_locale_files(dir)?;
    if files.is_empty() {
        return Err(Error::schema_error(format!(
            "no locale JSON files found in `{}`",
            dir.display()
        )));
    }

    let mut trees = BTreeMap::new();
    for (locale, path) in files {
        let text = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&text)?;
        let Value::Object(tree) = value else {
            return Err(Error::schema_error(format!(
                "`{}` does not contain a JSON object at the top level",
                path.display()
            )));
        };
        trees.insert(locale, tree);
    }
    Ok(trees)
}

/// Loads and flattens every locale in `dir`.
pub fn load_flattened(dir: &Path) -> Result<BTreeMap<String, FlatResource>, Error> {
    let mut flattened = BTreeMap::new();
    for (locale, tree) in load_trees(dir)? {
        flattened.insert(locale, flatten(&tree)?);
    }
    Ok(flattened)
}

/// Writes one pretty-printed JSON file per locale, creating `dir` if needed.
pub fn write_trees(dir: &Path, trees: &BTreeMap<String, Map<String, Value>>) -> Result<(), Error> {
    fs::create_dir_all(dir)?;
    for (locale, tree) in trees {
        let mut text = serde_json::to_string_pretty(tree)?;
        text.push('\n');
        fs::write(dir.join(format!("{locale}.json")), text)?;
    }
    Ok(())
}

/// Writes `contents` to `path` atomically: temp file in the same directory,
/// then rename, so a partially written file is never observable.
pub fn write_atomically(path: &Path, contents: &str) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("output");
    let temp_path = dir.join(format!(".{file_name}.tmp"));
    fs::write(&temp_path, contents)?;
    if let Err(error) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::Io(error));
    }
    Ok(())
}
