//! Concatenates raw tables into the unified contact table.

use cnpj_map::resolve_header;
use cnpj_model::{RawTable, SourceWarning, UnifiedRecord};
use tracing::{debug, warn};

/// The unified table plus the non-fatal notices produced while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// Unified records, in table enumeration order then original row order.
    pub records: Vec<UnifiedRecord>,
    /// Per-table notices: dropped rows, unrecognizable headers.
    pub warnings: Vec<SourceWarning>,
}

impl Aggregation {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Builds the unified table from a sequence of raw tables.
///
/// Each table's header is resolved once; each data row yields one
/// [`UnifiedRecord`] with cells trimmed, unresolved columns left empty, and
/// provenance taken from the table. Rows that are blank after trimming are
/// dropped, as are rows whose width does not match the header (counted in a
/// warning). A table that resolves to nothing is skipped with a warning.
/// No table ever aborts aggregation of the others.
#[must_use]
pub fn aggregate(tables: &[RawTable]) -> Aggregation {
    let mut aggregation = Aggregation::default();
    for table in tables {
        aggregate_table(table, &mut aggregation);
    }
    debug!(
        tables = tables.len(),
        records = aggregation.records.len(),
        warnings = aggregation.warnings.len(),
        "aggregation complete"
    );
    aggregation
}

fn aggregate_table(table: &RawTable, aggregation: &mut Aggregation) {
    if table.is_empty() {
        return;
    }

    let origin = table_origin(table);
    let resolved = resolve_header(&table.headers);
    if resolved.is_empty() {
        warn!(origin = %origin, "no recognizable columns, table skipped");
        aggregation.warnings.push(SourceWarning::new(
            origin,
            "no recognizable columns, table skipped",
        ));
        return;
    }
    if !resolved.has_key_column() {
        // Still aggregated: an empty key can never match a non-empty query.
        debug!(origin = %origin, "no CNPJ column, rows will not be searchable");
    }

    let mut dropped_ragged = 0usize;
    for row in &table.rows {
        if row.len() != table.headers.len() {
            dropped_ragged += 1;
            continue;
        }
        let mut record = UnifiedRecord {
            source: table.source_name.clone(),
            sheet: table.sheet_name.clone(),
            ..UnifiedRecord::default()
        };
        for (column, idx) in resolved.bindings() {
            record.set(*column, row[*idx].trim());
        }
        if record.is_blank() {
            continue;
        }
        aggregation.records.push(record);
    }

    if dropped_ragged > 0 {
        warn!(origin = %origin, dropped = dropped_ragged, "dropped rows with mismatched width");
        aggregation.warnings.push(SourceWarning::new(
            origin,
            format!("{dropped_ragged} row(s) with mismatched width dropped"),
        ));
    }
}

fn table_origin(table: &RawTable) -> String {
    if table.sheet_name == "-" || table.sheet_name.is_empty() {
        table.source_name.clone()
    } else {
        format!("{} ({})", table.source_name, table.sheet_name)
    }
}
