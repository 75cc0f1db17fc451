#![forbid(unsafe_code)]
//! Localization resource toolkit for Rust.
//!
//! Round-trips hierarchical per-locale JSON resource trees through a flat
//! translation sheet (an XLSX workbook or CSV file), checks key-set
//! consistency across locales, and compiles one reference locale into a
//! TypeScript type contract of translation keys and their required
//! placeholder parameters.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::collections::BTreeMap;
//! use langsheet::{export_sheet, flatten, validate, workbook};
//!
//! let tree = serde_json::from_str(r#"{"common": {"welcome": "Hello {userName}!"}}"#)?;
//! let mut locales = BTreeMap::new();
//! locales.insert("en".to_string(), flatten(&tree)?);
//!
//! validate(&locales)?;
//! let sheet = export_sheet(&locales);
//! workbook::write_sheet_to_path(&sheet, "translations.xlsx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Pipeline
//!
//! Load all locale trees → [`flatten`] each → [`validate`] the set (fail fast
//! on any key-set mismatch) → build a [`TranslationTable`] from the reference
//! locale → hand off to an emitter: [`export_sheet`] / [`typegen::render`].
//! Importing runs the sheet direction in reverse via [`import_sheet`] and
//! [`unflatten`].
//!
//! All core operations are synchronous pure functions over in-memory data;
//! only the workbook codecs in [`workbook`] touch files.

pub mod error;
pub mod keypath;
pub mod placeholder;
pub mod sheet;
pub mod table;
pub mod typegen;
pub mod validator;
pub mod workbook;

// Re-export most used items for easy consumption
pub use crate::{
    error::Error,
    keypath::{FlatResource, flatten, unflatten},
    placeholder::extract_params,
    sheet::{Sheet, export_sheet, import_sheet},
    table::TranslationTable,
    validator::{ValidationReport, key_set_report, validate},
};
