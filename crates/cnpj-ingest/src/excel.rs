//! Excel workbook sources.
//!
//! Every non-empty worksheet yields one raw table labeled with the sheet
//! name. A sheet that cannot be read is skipped with a warning; it never
//! takes the rest of the workbook down with it.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Reader, Xls, Xlsx, open_workbook_auto};

use cnpj_model::{RawTable, SourceWarning};
use tracing::warn;

use crate::error::{IngestError, Result};
use crate::loader::LoadOutcome;

/// Reads an Excel workbook from disk, one raw table per non-empty sheet.
pub fn read_excel_tables(path: &Path) -> Result<LoadOutcome> {
    let origin = file_name(path);
    let mut workbook =
        open_workbook_auto(path).map_err(|error| IngestError::Excel {
            origin: origin.clone(),
            message: error.to_string(),
        })?;
    Ok(collect_tables(&mut workbook, &origin))
}

/// Parses workbook bytes from an archive entry.
pub fn parse_excel_bytes(bytes: Vec<u8>, origin: &str) -> Result<LoadOutcome> {
    let cursor = Cursor::new(bytes);
    if origin.to_ascii_lowercase().ends_with(".xls") {
        let mut workbook = Xls::new(cursor).map_err(|error| IngestError::Excel {
            origin: origin.to_string(),
            message: error.to_string(),
        })?;
        Ok(collect_tables(&mut workbook, origin))
    } else {
        let mut workbook = Xlsx::new(cursor).map_err(|error| IngestError::Excel {
            origin: origin.to_string(),
            message: error.to_string(),
        })?;
        Ok(collect_tables(&mut workbook, origin))
    }
}

fn collect_tables<RS, B>(workbook: &mut B, source_name: &str) -> LoadOutcome
where
    RS: Read + Seek,
    B: Reader<RS>,
    B::Error: std::fmt::Display,
{
    let mut outcome = LoadOutcome::default();
    let sheet_names = workbook.sheet_names().to_vec();
    for sheet_name in sheet_names {
        let range = match workbook.worksheet_range(&sheet_name) {
            Ok(range) => range,
            Err(error) => {
                warn!(source = source_name, sheet = %sheet_name, %error, "sheet skipped");
                outcome.warnings.push(SourceWarning::new(
                    format!("{source_name} ({sheet_name})"),
                    format!("sheet could not be read: {error}"),
                ));
                continue;
            }
        };

        let mut rows_iter = range.rows();
        let Some(header_row) = rows_iter.next() else {
            continue;
        };
        let headers: Vec<String> = header_row.iter().map(cell_text).collect();

        let mut rows = Vec::new();
        for data_row in rows_iter {
            let row: Vec<String> = data_row.iter().map(cell_text).collect();
            if row.iter().all(String::is_empty) {
                continue;
            }
            rows.push(row);
        }
        if rows.is_empty() {
            continue;
        }
        outcome
            .tables
            .push(RawTable::new(source_name, sheet_name, headers, rows));
    }
    outcome
}

fn cell_text(cell: &calamine::Data) -> String {
    cell.to_string().trim().to_string()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
