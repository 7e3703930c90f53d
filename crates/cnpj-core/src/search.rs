//! Key normalization and substring search over the unified table.

use cnpj_model::UnifiedRecord;
use thiserror::Error;

/// Errors from search operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The query contained no digits to match on.
    #[error("search key is empty: enter at least one digit of a CNPJ")]
    EmptyQuery,
}

/// Strips every non-digit character from a CNPJ value or query.
///
/// The normalized form is used only for matching; the original value stays
/// on the record for display.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Returns the records whose normalized CNPJ contains the normalized query.
///
/// Record keys are normalized at query time, so values arriving already
/// stripped and values with display punctuation match alike. The containment
/// rule makes partial identifiers usable as queries; records without a CNPJ
/// value can never match. Matches keep aggregation order.
///
/// # Errors
///
/// [`SearchError::EmptyQuery`] when the query has no digits left after
/// normalization. Callers are expected to prompt for a value instead of
/// treating this as "match nothing".
pub fn search<'a>(
    records: &'a [UnifiedRecord],
    query: &str,
) -> Result<Vec<&'a UnifiedRecord>, SearchError> {
    let key = normalize_key(query);
    if key.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(records
        .iter()
        .filter(|record| normalize_key(&record.cnpj).contains(&key))
        .collect())
}
