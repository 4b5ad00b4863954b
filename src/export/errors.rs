//! Error types for result export

/// Error types for export operations
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet generation failed
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Requested format is not supported
    #[error("Unsupported export format: {0}")]
    UnknownFormat(String),
}
