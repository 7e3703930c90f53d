//! CSV sources.
//!
//! Circulating spreadsheets exported to CSV are not reliably UTF-8;
//! Windows-1252 exports are common. Bytes are decoded as UTF-8 when valid
//! and transparently re-decoded as Windows-1252 otherwise, so accented
//! headers survive either way.

use std::borrow::Cow;
use std::path::Path;

use csv::ReaderBuilder;

use cnpj_model::RawTable;

use crate::error::{IngestError, Result};

/// Sheet label used for single-table formats.
pub const FLAT_SHEET: &str = "-";

/// Reads one CSV file into a raw table.
///
/// The first row is the header; fully empty rows are skipped. Row widths
/// are taken as-is — the aggregation policy decides what happens to rows
/// that do not match the header width.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let origin = file_name(path);
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        origin: origin.clone(),
        source,
    })?;
    parse_csv_bytes(&bytes, &origin)
}

/// Parses CSV bytes (from a file or an archive entry) into a raw table.
pub fn parse_csv_bytes(bytes: &[u8], origin: &str) -> Result<RawTable> {
    let text = decode_text(bytes);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            origin: origin.to_string(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        match headers {
            None => headers = Some(row),
            Some(_) => rows.push(row),
        }
    }

    Ok(RawTable::new(
        origin,
        FLAT_SHEET,
        headers.unwrap_or_default(),
        rows,
    ))
}

/// Decodes source bytes as UTF-8, falling back to Windows-1252.
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            Cow::Owned(text.into_owned())
        }
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
