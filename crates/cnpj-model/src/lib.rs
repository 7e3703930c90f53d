#![deny(unsafe_code)]

pub mod column;
pub mod table;
pub mod warning;

pub use column::{CanonicalColumn, SHEET_LABEL, SOURCE_LABEL, output_headers};
pub use table::{RawTable, UnifiedRecord};
pub use warning::SourceWarning;
