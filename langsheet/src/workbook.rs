//! Workbook file codecs for the translation sheet.
//!
//! The sheet travels as a single `Translations` worksheet in an XLSX workbook
//! (calamine for reading, rust_xlsxwriter for writing), or as a plain CSV file
//! with the same header contract. XLSX payloads are signature-checked before
//! parsing so that an HTML error page served in place of a workbook fails
//! with a pointed error rather than a generic parse failure.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Write};
use std::path::Path;

use calamine::{Data, Reader, Xlsx, XlsxError};
use rust_xlsxwriter::{Format, Workbook};

use crate::{
    error::Error,
    sheet::{SHEET_NAME, Sheet},
};

/// Leading bytes of every XLSX workbook (the ZIP local file header).
pub const XLSX_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Supported interchange file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Xlsx,
    Csv,
}

/// Infers the interchange format from a file extension.
pub fn infer_format_from_extension<P: AsRef<Path>>(path: P) -> Option<SheetFormat> {
    match path.as_ref().extension().and_then(|ext| ext.to_str()) {
        Some("xlsx") => Some(SheetFormat::Xlsx),
        Some("csv") => Some(SheetFormat::Csv),
        _ => None,
    }
}

/// Checks the XLSX magic signature on a downloaded or opened payload.
///
/// A payload that fails the check is classified: markup content fails with
/// [`Error::GotHtmlInsteadOfFile`], anything else with
/// [`Error::InvalidFileSignature`].
pub fn verify_xlsx_signature(payload: &[u8]) -> Result<(), Error> {
    if payload.len() >= XLSX_MAGIC.len() && payload[..XLSX_MAGIC.len()] == XLSX_MAGIC {
        return Ok(());
    }
    let head_len = payload.len().min(1000);
    let head = String::from_utf8_lossy(&payload[..head_len]).to_ascii_lowercase();
    if head.contains("<!doctype html") || head.contains("<html") {
        Err(Error::GotHtmlInsteadOfFile)
    } else {
        Err(Error::InvalidFileSignature)
    }
}

/// Reads the `Translations` sheet from an in-memory XLSX payload.
pub fn read_xlsx_bytes(payload: Vec<u8>) -> Result<Sheet, Error> {
    verify_xlsx_signature(&payload)?;
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(payload))?;
    let range = match workbook.worksheet_range(SHEET_NAME) {
        Ok(range) => range,
        Err(XlsxError::WorksheetNotFound(name)) => return Err(Error::WorksheetNotFound(name)),
        Err(error) => return Err(Error::SheetRead(error)),
    };

    let mut rows = range.rows().map(row_to_cells);
    let header = rows.next().unwrap_or_default();
    Ok(Sheet {
        header,
        rows: rows.collect(),
    })
}

fn row_to_cells(row: &[Data]) -> Vec<String> {
    row.iter()
        .map(|cell| match cell {
            Data::Empty => String::new(),
            Data::String(text) => text.clone(),
            other => other.to_string(),
        })
        .collect()
}

/// Serializes the sheet as an XLSX workbook in memory.
pub fn write_xlsx_bytes(sheet: &Sheet) -> Result<Vec<u8>, Error> {
    let mut workbook = build_workbook(sheet)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(sheet: &Sheet) -> Result<Workbook, Error> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, title) in sheet.header.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, title, &bold)?;
    }
    for (index, row) in sheet.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet.write_string((index + 1) as u32, col as u16, cell)?;
        }
    }

    let columns = sheet.header.len();
    if columns > 0 {
        for col in 0..columns {
            worksheet.set_column_width(col as u16, column_width(col, columns))?;
        }
        worksheet.autofilter(0, 0, sheet.rows.len() as u32, (columns - 1) as u16)?;
    }
    Ok(workbook)
}

// Name and Key are wide; Type and Notes narrow; locale columns in between.
fn column_width(col: usize, columns: usize) -> f64 {
    match col {
        0 => 40.0,
        1 => 15.0,
        _ if col == columns - 2 => 40.0,
        _ if col == columns - 1 => 20.0,
        _ => 25.0,
    }
}

/// Reads a sheet from a CSV reader. The first record is the header row.
pub fn read_csv<R: BufRead>(reader: R) -> Result<Sheet, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    let header = if rows.is_empty() {
        Vec::new()
    } else {
        rows.remove(0)
    };
    Ok(Sheet { header, rows })
}

/// Writes a sheet to a CSV writer.
pub fn write_csv<W: Write>(sheet: &Sheet, writer: W) -> Result<(), Error> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(&sheet.header)?;
    for row in &sheet.rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush().map_err(Error::Io)?;
    Ok(())
}

/// Reads a sheet from a file, dispatching on the extension.
pub fn read_sheet_from_path<P: AsRef<Path>>(path: P) -> Result<Sheet, Error> {
    let path = path.as_ref();
    match infer_format_from_extension(path) {
        Some(SheetFormat::Xlsx) => read_xlsx_bytes(std::fs::read(path)?),
        Some(SheetFormat::Csv) => read_csv(BufReader::new(File::open(path)?)),
        None => Err(Error::UnsupportedFormat(format!(
            "cannot infer interchange format from `{}`; expected .xlsx or .csv",
            path.display()
        ))),
    }
}

/// Writes a sheet to a file, dispatching on the extension.
pub fn write_sheet_to_path<P: AsRef<Path>>(sheet: &Sheet, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    match infer_format_from_extension(path) {
        Some(SheetFormat::Xlsx) => {
            let mut workbook = build_workbook(sheet)?;
            workbook.save(path)?;
            Ok(())
        }
        Some(SheetFormat::Csv) => write_csv(sheet, File::create(path)?),
        None => Err(Error::UnsupportedFormat(format!(
            "cannot infer interchange format from `{}`; expected .xlsx or .csv",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sheet() -> Sheet {
        Sheet {
            header: vec![
                "Name".to_string(),
                "Type".to_string(),
                "en".to_string(),
                "ko".to_string(),
                "Key".to_string(),
                "Notes".to_string(),
            ],
            rows: vec![
                vec![
                    "common/cancel".to_string(),
                    "STRING".to_string(),
                    "Cancel".to_string(),
                    "취소".to_string(),
                    "common.cancel".to_string(),
                    String::new(),
                ],
                vec![
                    "common/welcome".to_string(),
                    "STRING".to_string(),
                    "Hello {userName}!".to_string(),
                    "{userName}님 안녕하세요!".to_string(),
                    "common.welcome".to_string(),
                    String::new(),
                ],
            ],
        }
    }

    #[test]
    fn test_signature_accepts_zip_magic() {
        assert!(verify_xlsx_signature(&[0x50, 0x4B, 0x03, 0x04, 0x00]).is_ok());
    }

    #[test]
    fn test_signature_classifies_html() {
        let payload = b"<!DOCTYPE html><html><body>Sign in</body></html>";
        assert!(matches!(
            verify_xlsx_signature(payload),
            Err(Error::GotHtmlInsteadOfFile)
        ));
    }

    #[test]
    fn test_signature_classifies_html_without_doctype() {
        let payload = b"\n  <HTML><head></head></HTML>";
        assert!(matches!(
            verify_xlsx_signature(payload),
            Err(Error::GotHtmlInsteadOfFile)
        ));
    }

    #[test]
    fn test_signature_rejects_other_payloads() {
        assert!(matches!(
            verify_xlsx_signature(b"random bytes"),
            Err(Error::InvalidFileSignature)
        ));
        assert!(matches!(
            verify_xlsx_signature(b""),
            Err(Error::InvalidFileSignature)
        ));
    }

    #[test]
    fn test_xlsx_round_trip_in_memory() {
        let sheet = sample_sheet();
        let bytes = write_xlsx_bytes(&sheet).unwrap();
        let read_back = read_xlsx_bytes(bytes).unwrap();
        assert_eq!(read_back, sheet);
    }

    #[test]
    fn test_xlsx_missing_worksheet() {
        let mut workbook = Workbook::new();
        workbook.add_worksheet().set_name("Other").unwrap();
        workbook
            .add_worksheet()
            .write_string(0, 0, "filler")
            .unwrap();
        let bytes = workbook.save_to_buffer().unwrap();
        assert!(matches!(
            read_xlsx_bytes(bytes),
            Err(Error::WorksheetNotFound(_))
        ));
    }

    #[test]
    fn test_csv_round_trip_in_memory() {
        let sheet = sample_sheet();
        let mut buffer = Vec::new();
        write_csv(&sheet, &mut buffer).unwrap();
        let read_back = read_csv(Cursor::new(buffer)).unwrap();
        assert_eq!(read_back, sheet);
    }

    #[test]
    fn test_extension_dispatch() {
        assert_eq!(
            infer_format_from_extension("translations.xlsx"),
            Some(SheetFormat::Xlsx)
        );
        assert_eq!(
            infer_format_from_extension("translations.csv"),
            Some(SheetFormat::Csv)
        );
        assert_eq!(infer_format_from_extension("translations.ods"), None);
    }

    #[test]
    fn test_unsupported_extension_errors() {
        let sheet = sample_sheet();
        assert!(matches!(
            write_sheet_to_path(&sheet, "out.ods"),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            read_sheet_from_path("in.ods"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_path_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = sample_sheet();

        let xlsx_path = dir.path().join("translations.xlsx");
        write_sheet_to_path(&sheet, &xlsx_path).unwrap();
        assert_eq!(read_sheet_from_path(&xlsx_path).unwrap(), sheet);

        let csv_path = dir.path().join("translations.csv");
        write_sheet_to_path(&sheet, &csv_path).unwrap();
        assert_eq!(read_sheet_from_path(&csv_path).unwrap(), sheet);
    }
}
