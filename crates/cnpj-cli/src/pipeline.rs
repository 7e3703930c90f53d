//! Query pipeline with explicit stages.
//!
//! 1. **Load**: discover and read source spreadsheets
//! 2. **Aggregate**: resolve headers and build the unified contact table
//! 3. **Match**: filter by the normalized CNPJ key
//!
//! Each stage takes the output of the previous one as an explicit
//! parameter; there is no ambient session state.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use cnpj_core::{Aggregation, aggregate, normalize_key, search};
use cnpj_ingest::load_sources;
use cnpj_model::{SourceWarning, UnifiedRecord};

use crate::logging::redact_value;

/// Result of building the unified table from a source folder.
#[derive(Debug)]
pub struct TableOutput {
    /// Unified records in source enumeration order.
    pub records: Vec<UnifiedRecord>,
    /// Skipped sources, sheets, and rows.
    pub warnings: Vec<SourceWarning>,
    /// Number of raw tables that were loaded.
    pub tables_loaded: usize,
}

/// Result of one query over the unified table.
#[derive(Debug)]
pub struct QueryOutput {
    /// Matching records, in table order.
    pub matches: Vec<UnifiedRecord>,
    /// Skipped sources, sheets, and rows.
    pub warnings: Vec<SourceWarning>,
    /// Number of raw tables that were loaded.
    pub tables_loaded: usize,
    /// Total unified records the query ran over.
    pub records_total: usize,
}

/// Loads every source in `source_folder` and aggregates the unified table.
///
/// File-level problems become warnings on the output; only an unreachable
/// source folder is an error.
pub fn build_table(source_folder: &Path) -> Result<TableOutput> {
    let span = info_span!("load", folder = %source_folder.display());
    let outcome = span
        .in_scope(|| load_sources(source_folder))
        .context("load sources")?;
    let tables_loaded = outcome.tables.len();

    let Aggregation {
        records,
        warnings: aggregate_warnings,
    } = aggregate(&outcome.tables);

    let mut warnings = outcome.warnings;
    warnings.extend(aggregate_warnings);

    info!(
        tables = tables_loaded,
        records = records.len(),
        warnings = warnings.len(),
        "unified table built"
    );
    Ok(TableOutput {
        records,
        warnings,
        tables_loaded,
    })
}

/// Runs one query: builds the unified table and filters it by key.
///
/// A query with no digits is rejected up front, before any source is
/// touched; the caller should prompt for a value.
pub fn run_query(source_folder: &Path, query: &str) -> Result<QueryOutput> {
    if normalize_key(query).is_empty() {
        bail!("empty search key: enter at least one digit of a CNPJ");
    }

    let table = build_table(source_folder)?;
    let matches: Vec<UnifiedRecord> = search(&table.records, query)
        .context("search unified table")?
        .into_iter()
        .cloned()
        .collect();
    debug!(
        query = redact_value(query),
        matches = matches.len(),
        "query complete"
    );
    Ok(QueryOutput {
        matches,
        warnings: table.warnings,
        tables_loaded: table.tables_loaded,
        records_total: table.records.len(),
    })
}
