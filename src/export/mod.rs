//! Tabular output for scan results
//!
//! Records are written once, at the end of a run, in the fixed column order
//! of `RECORD_COLUMNS`, to a delimited-text file and/or a spreadsheet.

pub mod csv_saver;
pub mod errors;
pub mod xlsx_saver;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use csv_saver::{write_csv, write_csv_to};
pub use errors::ExportError;
pub use xlsx_saver::write_xlsx;

use crate::page_extractor::Record;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Write `records` to `dir/stem.<ext>` for every requested format.
///
/// Creates `dir` if needed and returns the written paths in request order.
///
/// # Errors
///
/// Returns the first I/O, CSV or spreadsheet error encountered.
pub fn export_records(
    dir: &Path,
    stem: &str,
    records: &[Record],
    formats: &[ExportFormat],
) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(formats.len());
    for format in formats {
        let path = dir.join(format!("{stem}.{}", format.extension()));
        match format {
            ExportFormat::Csv => write_csv(&path, records)?,
            ExportFormat::Xlsx => write_xlsx(&path, records)?,
        }
        written.push(path);
    }
    Ok(written)
}
