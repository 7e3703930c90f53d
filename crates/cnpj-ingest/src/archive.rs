//! ZIP archive sources.
//!
//! An uploaded archive is treated as a folder of spreadsheets: each
//! supported entry is loaded like a standalone file, with the entry name
//! (prefixed by the archive name) as its provenance. Entries are visited
//! in name order so the concatenation order stays deterministic.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use cnpj_model::SourceWarning;
use tracing::warn;
use zip::ZipArchive;

use crate::csv_table::parse_csv_bytes;
use crate::discovery::{SourceKind, source_kind};
use crate::error::{IngestError, Result};
use crate::excel::parse_excel_bytes;
use crate::loader::LoadOutcome;

/// Reads every supported entry of a ZIP archive.
///
/// A single unreadable entry is skipped with a warning. Failing to open
/// the archive itself is an error, handled by the loader like any other
/// unreadable source file.
pub fn read_archive_tables(path: &Path) -> Result<LoadOutcome> {
    let origin = file_name(path);
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        origin: origin.clone(),
        source,
    })?;
    let mut archive = ZipArchive::new(file).map_err(|source| IngestError::Archive {
        origin: origin.clone(),
        source,
    })?;

    let mut names: Vec<String> = archive.file_names().map(ToString::to_string).collect();
    names.sort();

    let mut outcome = LoadOutcome::default();
    for entry_name in names {
        let kind = match source_kind(Path::new(&entry_name)) {
            Some(SourceKind::Csv) => SourceKind::Csv,
            Some(SourceKind::Excel) => SourceKind::Excel,
            // Nested archives and unrelated entries are ignored.
            _ => continue,
        };
        let entry_origin = format!("{origin}/{entry_name}");
        match read_entry(&mut archive, &entry_name, &entry_origin, kind) {
            Ok(loaded) => outcome.merge(loaded),
            Err(error) => {
                warn!(entry = %entry_origin, %error, "archive entry skipped");
                outcome
                    .warnings
                    .push(SourceWarning::new(entry_origin, error.to_string()));
            }
        }
    }
    Ok(outcome)
}

fn read_entry(
    archive: &mut ZipArchive<File>,
    entry_name: &str,
    entry_origin: &str,
    kind: SourceKind,
) -> Result<LoadOutcome> {
    let mut entry = archive
        .by_name(entry_name)
        .map_err(|source| IngestError::Archive {
            origin: entry_origin.to_string(),
            source,
        })?;
    let mut bytes = Vec::new();
    entry
        .read_to_end(&mut bytes)
        .map_err(|source| IngestError::FileRead {
            origin: entry_origin.to_string(),
            source,
        })?;

    match kind {
        SourceKind::Csv => parse_csv_bytes(&bytes, entry_origin).map(LoadOutcome::single),
        SourceKind::Excel => parse_excel_bytes(bytes, entry_origin),
        SourceKind::Archive => Err(IngestError::UnsupportedFormat {
            origin: entry_origin.to_string(),
        }),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
