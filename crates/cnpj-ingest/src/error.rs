//! Error types for source loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from discovering and reading spreadsheet sources.
///
/// Directory-level failures are fatal for a run; file-level failures are
/// caught by the loader and downgraded to warnings so the remaining
/// sources still contribute.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The source directory does not exist or is not a directory.
    #[error("source directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The source directory exists but could not be listed.
    #[error("failed to read source directory {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be read from disk.
    #[error("failed to read {origin}")]
    FileRead {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// A CSV source could not be parsed.
    #[error("failed to parse CSV {origin}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    /// An Excel workbook could not be opened or a sheet could not be read.
    #[error("failed to read workbook {origin}: {message}")]
    Excel { origin: String, message: String },

    /// A ZIP archive could not be opened or an entry could not be read.
    #[error("failed to read archive {origin}")]
    Archive {
        origin: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// The file extension is not one of the supported source formats.
    #[error("unsupported source format: {origin}")]
    UnsupportedFormat { origin: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
