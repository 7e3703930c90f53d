//! Column resolution: binds raw header columns to canonical columns.

use std::collections::{BTreeMap, BTreeSet};

use cnpj_model::CanonicalColumn;

use crate::aliases::ALIAS_TABLE;
use crate::normalize::normalize_header;

/// The outcome of resolving one table header.
///
/// Bindings are one-to-one: each canonical column binds at most one raw
/// column index, and a raw index claimed by one canonical column is never
/// handed to another (first-claim-wins exclusivity).
#[derive(Debug, Clone, Default)]
pub struct ResolvedHeader {
    bindings: BTreeMap<CanonicalColumn, usize>,
    unmatched: Vec<String>,
}

impl ResolvedHeader {
    /// Raw column index bound to `column`, if any alias matched.
    #[must_use]
    pub fn index_of(&self, column: CanonicalColumn) -> Option<usize> {
        self.bindings.get(&column).copied()
    }

    /// True when the header has a column resolvable to the CNPJ key.
    #[must_use]
    pub fn has_key_column(&self) -> bool {
        self.bindings.contains_key(&CanonicalColumn::Cnpj)
    }

    /// All bindings, keyed by canonical column.
    #[must_use]
    pub fn bindings(&self) -> &BTreeMap<CanonicalColumn, usize> {
        &self.bindings
    }

    /// Raw header cells no canonical column claimed (diagnostics only).
    #[must_use]
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    /// True when nothing in the header matched any alias.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Resolves a raw header row against the shared alias table.
///
/// For each canonical column in priority order, header cells are scanned
/// left to right; the first unclaimed cell whose normalized text contains
/// one of the column's alias patterns is bound. Columns with no match stay
/// absent from the result; aggregation fills them with empty strings.
#[must_use]
pub fn resolve_header(headers: &[String]) -> ResolvedHeader {
    let normalized: Vec<String> = headers.iter().map(|cell| normalize_header(cell)).collect();

    let mut bindings = BTreeMap::new();
    let mut claimed: BTreeSet<usize> = BTreeSet::new();

    for (column, patterns) in ALIAS_TABLE {
        'cells: for (idx, cell) in normalized.iter().enumerate() {
            if cell.is_empty() || claimed.contains(&idx) {
                continue;
            }
            for pattern in *patterns {
                if cell.contains(pattern) {
                    bindings.insert(*column, idx);
                    claimed.insert(idx);
                    break 'cells;
                }
            }
        }
    }

    let unmatched = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| !claimed.contains(idx))
        .map(|(_, cell)| cell.trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect();

    ResolvedHeader {
        bindings,
        unmatched,
    }
}
