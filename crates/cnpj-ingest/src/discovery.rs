//! Source discovery: which files in a directory look like spreadsheets.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Supported source formats, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Plain CSV file.
    Csv,
    /// Excel workbook (`.xlsx` or `.xls`), possibly multi-sheet.
    Excel,
    /// ZIP archive of CSV/Excel entries.
    Archive,
}

/// A spreadsheet-like file found in the source directory.
#[derive(Debug, Clone)]
pub struct DiscoveredSource {
    pub path: PathBuf,
    pub kind: SourceKind,
}

impl DiscoveredSource {
    /// File name used as the provenance source label.
    #[must_use]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Classifies a path by its extension (case-insensitive).
#[must_use]
pub fn source_kind(path: &Path) -> Option<SourceKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "csv" => Some(SourceKind::Csv),
        "xlsx" | "xls" => Some(SourceKind::Excel),
        "zip" => Some(SourceKind::Archive),
        _ => None,
    }
}

/// Lists the supported source files in a directory, sorted by file name.
///
/// The sort fixes the enumeration order, which in turn fixes the
/// concatenation order of the unified table.
///
/// # Errors
///
/// A missing or unreadable directory is fatal for the run
/// ([`IngestError::DirectoryNotFound`] / [`IngestError::DirectoryRead`]).
pub fn discover_sources(dir: &Path) -> Result<Vec<DiscoveredSource>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut sources = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(kind) = source_kind(&path) {
            sources.push(DiscoveredSource { path, kind });
        }
    }

    sources.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(sources)
}
