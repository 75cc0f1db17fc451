//! All error types for the langsheet crate.
//!
//! These are returned from all fallible operations (flattening, validation,
//! workbook I/O, type generation, etc.).

use thiserror::Error;

use crate::validator::ValidationReport;

#[derive(Error, Debug)]
pub enum Error {
    #[error("structural conflict: `{path}` is both a value and a prefix of another key")]
    StructuralConflict { path: String },

    #[error("key `{0}` exceeds the maximum nesting depth")]
    NestingTooDeep(String),

    #[error("cross-locale validation failed:\n{0}")]
    Validation(ValidationReport),

    #[error("schema error: {0}")]
    Schema(String),

    #[error("worksheet `{0}` not found")]
    WorksheetNotFound(String),

    #[error("download failed: {0}")]
    Download(String),

    #[error(
        "the server returned an HTML document instead of a workbook. \
         For Google Sheets, use the export URL form: \
         https://docs.google.com/spreadsheets/d/{{SPREADSHEET_ID}}/export?format=xlsx"
    )]
    GotHtmlInsteadOfFile,

    #[error("not a valid XLSX workbook (bad file signature)")]
    InvalidFileSignature,

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook read error: {0}")]
    SheetRead(#[from] calamine::XlsxError),

    #[error("workbook write error: {0}")]
    SheetWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new schema error.
    pub fn schema_error(message: impl Into<String>) -> Self {
        Error::Schema(message.into())
    }

    /// Creates a new download error.
    pub fn download_error(message: impl Into<String>) -> Self {
        Error::Download(message.into())
    }
}
