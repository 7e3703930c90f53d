//! Non-fatal warnings surfaced to the user.
//!
//! Individual-table failures never abort a run; they are recorded as
//! warnings and carried alongside the partial result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-blocking notice about a skipped source, sheet, or row set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceWarning {
    /// What the warning refers to, e.g. `"contatos.xlsx"` or
    /// `"contatos.xlsx (Aba 2)"`.
    pub origin: String,
    /// Human-readable description of what was skipped and why.
    pub message: String,
}

impl SourceWarning {
    pub fn new(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SourceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.origin, self.message)
    }
}
