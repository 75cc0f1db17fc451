//! The tabular interchange model shared by the workbook codecs.
//!
//! One row per key, one column per locale, plus four fixed metadata columns:
//! `Name` (key with `.` replaced by `/`), `Type` (always the literal
//! `STRING`), `Key` (the authoritative dot path), and `Notes` (free text,
//! empty on export). Locale columns are sorted lexicographically.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::{error::Error, keypath::FlatResource};

pub const NAME_COLUMN: &str = "Name";
pub const TYPE_COLUMN: &str = "Type";
pub const KEY_COLUMN: &str = "Key";
pub const NOTES_COLUMN: &str = "Notes";

/// The four fixed columns; every other non-blank header is a locale column.
pub const METADATA_COLUMNS: [&str; 4] = [NAME_COLUMN, TYPE_COLUMN, KEY_COLUMN, NOTES_COLUMN];

/// The constant `Type` cell marker.
pub const TYPE_MARKER: &str = "STRING";

/// The worksheet name used by the workbook codecs.
pub const SHEET_NAME: &str = "Translations";

/// An in-memory translation sheet: a header row plus data rows of text cells,
/// independent of the file format it came from or is headed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Column indices of all locale columns, paired with the locale id.
    /// Blank headers are ignored.
    pub fn locale_columns(&self) -> Vec<(usize, &str)> {
        self.header
            .iter()
            .enumerate()
            .filter(|(_, header)| {
                !METADATA_COLUMNS.contains(&header.as_str()) && !header.trim().is_empty()
            })
            .map(|(index, header)| (index, header.as_str()))
            .collect()
    }
}

/// Builds the export sheet for a set of flattened locales.
///
/// Rows cover the sorted union of all keys. A key absent from some locale
/// (which validation normally rules out) becomes an empty cell rather than an
/// error. Non-string leaves are serialized as compact JSON.
pub fn export_sheet(locales: &BTreeMap<String, FlatResource>) -> Sheet {
    let ids: Vec<&String> = locales.keys().collect();

    let mut header = Vec::with_capacity(ids.len() + METADATA_COLUMNS.len());
    header.push(NAME_COLUMN.to_string());
    header.push(TYPE_COLUMN.to_string());
    header.extend(ids.iter().map(|id| id.to_string()));
    header.push(KEY_COLUMN.to_string());
    header.push(NOTES_COLUMN.to_string());

    let keys: BTreeSet<&String> = locales.values().flat_map(|flat| flat.keys()).collect();

    let rows = keys
        .into_iter()
        .map(|key| {
            let mut row = Vec::with_capacity(header.len());
            row.push(key.replace('.', "/"));
            row.push(TYPE_MARKER.to_string());
            for id in &ids {
                row.push(locales[*id].get(key).map(cell_text).unwrap_or_default());
            }
            row.push(key.clone());
            row.push(String::new());
            row
        })
        .collect();

    Sheet { header, rows }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Reconstructs one flattened resource per locale column from a sheet.
///
/// The `Key` column is the authoritative path; rows with an empty `Key` cell
/// are silently skipped. Cell values are trimmed. Fails with [`Error::Schema`]
/// when the header carries no locale columns or lacks the `Key` column.
pub fn import_sheet(sheet: &Sheet) -> Result<BTreeMap<String, FlatResource>, Error> {
    let locale_columns = sheet.locale_columns();
    if locale_columns.is_empty() {
        return Err(Error::schema_error(
            "no locale columns found; expected headers besides Name, Type, Key and Notes",
        ));
    }
    let key_index = sheet
        .header
        .iter()
        .position(|header| header == KEY_COLUMN)
        .ok_or_else(|| Error::schema_error("missing `Key` column"))?;

    let mut locales: BTreeMap<String, FlatResource> = locale_columns
        .iter()
        .map(|(_, id)| (id.to_string(), FlatResource::new()))
        .collect();

    for row in &sheet.rows {
        let key = row.get(key_index).map(|cell| cell.trim()).unwrap_or("");
        if key.is_empty() {
            continue;
        }
        for (index, id) in &locale_columns {
            let value = row
                .get(*index)
                .map(|cell| cell.trim())
                .unwrap_or("")
                .to_string();
            locales
                .get_mut(*id)
                .expect("locale map is keyed by locale_columns")
                .insert(key.to_string(), Value::String(value));
        }
    }

    Ok(locales)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypath::flatten;
    use serde_json::json;

    fn flat(value: serde_json::Value) -> FlatResource {
        let map = match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        };
        flatten(&map).unwrap()
    }

    fn sample_locales() -> BTreeMap<String, FlatResource> {
        let mut locales = BTreeMap::new();
        locales.insert(
            "en".to_string(),
            flat(json!({"common": {"cancel": "Cancel", "welcome": "Hello {userName}!"}})),
        );
        locales.insert(
            "ko".to_string(),
            flat(json!({"common": {"cancel": "취소", "welcome": "{userName}님 안녕하세요!"}})),
        );
        locales
    }

    #[test]
    fn test_export_header_layout() {
        let sheet = export_sheet(&sample_locales());
        assert_eq!(sheet.header, ["Name", "Type", "en", "ko", "Key", "Notes"]);
    }

    #[test]
    fn test_export_rows() {
        let sheet = export_sheet(&sample_locales());
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(
            sheet.rows[0],
            ["common/cancel", "STRING", "Cancel", "취소", "common.cancel", ""]
        );
        assert_eq!(
            sheet.rows[1],
            [
                "common/welcome",
                "STRING",
                "Hello {userName}!",
                "{userName}님 안녕하세요!",
                "common.welcome",
                ""
            ]
        );
    }

    #[test]
    fn test_export_missing_value_becomes_empty_cell() {
        let mut locales = sample_locales();
        locales.get_mut("ko").unwrap().remove("common.welcome");
        let sheet = export_sheet(&locales);
        assert_eq!(sheet.rows[1][3], "");
    }

    #[test]
    fn test_import_round_trip() {
        let locales = sample_locales();
        let imported = import_sheet(&export_sheet(&locales)).unwrap();
        assert_eq!(imported, locales);
    }

    #[test]
    fn test_import_requires_locale_columns() {
        let sheet = Sheet {
            header: vec![
                "Name".to_string(),
                "Type".to_string(),
                "Key".to_string(),
                "Notes".to_string(),
            ],
            rows: Vec::new(),
        };
        assert!(matches!(import_sheet(&sheet), Err(Error::Schema(_))));
    }

    #[test]
    fn test_import_skips_rows_without_key() {
        let sheet = Sheet {
            header: vec![
                "Name".to_string(),
                "Type".to_string(),
                "en".to_string(),
                "Key".to_string(),
                "Notes".to_string(),
            ],
            rows: vec![
                vec![
                    "a".to_string(),
                    "STRING".to_string(),
                    "kept".to_string(),
                    "a".to_string(),
                    String::new(),
                ],
                vec![
                    "ghost".to_string(),
                    "STRING".to_string(),
                    "dropped".to_string(),
                    "  ".to_string(),
                    String::new(),
                ],
            ],
        };
        let imported = import_sheet(&sheet).unwrap();
        assert_eq!(imported["en"].len(), 1);
        assert_eq!(imported["en"]["a"], json!("kept"));
    }

    #[test]
    fn test_import_trims_cell_values() {
        let sheet = Sheet {
            header: vec!["en".to_string(), "Key".to_string()],
            rows: vec![vec!["  padded  ".to_string(), "k".to_string()]],
        };
        let imported = import_sheet(&sheet).unwrap();
        assert_eq!(imported["en"]["k"], json!("padded"));
    }

    #[test]
    fn test_import_ignores_blank_headers() {
        let sheet = Sheet {
            header: vec![
                "Name".to_string(),
                String::new(),
                "en".to_string(),
                "Key".to_string(),
            ],
            rows: Vec::new(),
        };
        let columns = sheet.locale_columns();
        assert_eq!(columns, vec![(2, "en")]);
    }
}
