//! Walks a source directory and loads every spreadsheet it can.

use std::path::Path;

use cnpj_model::{RawTable, SourceWarning};
use tracing::{debug, info, warn};

use crate::archive::read_archive_tables;
use crate::csv_table::read_csv_table;
use crate::discovery::{DiscoveredSource, SourceKind, discover_sources};
use crate::error::Result;
use crate::excel::read_excel_tables;

/// Raw tables plus the notices about sources that could not contribute.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Loaded tables, in discovery order.
    pub tables: Vec<RawTable>,
    /// Skipped files, sheets, and archive entries.
    pub warnings: Vec<SourceWarning>,
}

impl LoadOutcome {
    /// Wraps a single table with no warnings.
    #[must_use]
    pub fn single(table: RawTable) -> Self {
        Self {
            tables: vec![table],
            warnings: Vec::new(),
        }
    }

    /// Appends another outcome, keeping order.
    pub fn merge(&mut self, other: LoadOutcome) {
        self.tables.extend(other.tables);
        self.warnings.extend(other.warnings);
    }
}

/// Loads every supported source in `dir`, in file-name order.
///
/// A file that cannot be loaded is skipped with a warning; only the
/// directory itself being missing or unreadable aborts the run.
pub fn load_sources(dir: &Path) -> Result<LoadOutcome> {
    let sources = discover_sources(dir)?;
    info!(dir = %dir.display(), sources = sources.len(), "loading sources");

    let mut outcome = LoadOutcome::default();
    for source in &sources {
        match load_source(source) {
            Ok(loaded) => {
                debug!(source = %source.name(), tables = loaded.tables.len(), "source loaded");
                outcome.merge(loaded);
            }
            Err(error) => {
                warn!(source = %source.name(), %error, "source skipped");
                outcome
                    .warnings
                    .push(SourceWarning::new(source.name(), error.to_string()));
            }
        }
    }
    Ok(outcome)
}

/// Loads one discovered source according to its kind.
pub fn load_source(source: &DiscoveredSource) -> Result<LoadOutcome> {
    match source.kind {
        SourceKind::Csv => read_csv_table(&source.path).map(LoadOutcome::single),
        SourceKind::Excel => read_excel_tables(&source.path),
        SourceKind::Archive => read_archive_tables(&source.path),
    }
}
