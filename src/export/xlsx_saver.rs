//! Spreadsheet output: one header row, one text row per record.

use rust_xlsxwriter::Workbook;
use std::path::Path;

use super::errors::ExportError;
use crate::page_extractor::{RECORD_COLUMNS, Record};

const SHEET_NAME: &str = "Records";

/// Write records as an `.xlsx` workbook to `path`
///
/// # Errors
///
/// Returns an error if the workbook cannot be assembled or saved.
pub fn write_xlsx(path: &Path, records: &[Record]) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in RECORD_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = u32::try_from(index + 1).unwrap_or(u32::MAX);
        for (col, value) in record.to_row().into_iter().enumerate() {
            worksheet.write_string(row, col as u16, value)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
