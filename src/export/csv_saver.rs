//! CSV output with minimal quoting.

use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::errors::ExportError;
use crate::page_extractor::{RECORD_COLUMNS, Record};

/// Write records as CSV to `path`, header row first
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_csv(path: &Path, records: &[Record]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv_to(file, records)
}

/// Write records as CSV to any writer.
///
/// The header is written explicitly so an empty result still produces a
/// well-formed file.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_csv_to<W: Write>(writer: W, records: &[Record]) -> Result<(), ExportError> {
    let mut csv = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    csv.write_record(RECORD_COLUMNS)?;
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}
