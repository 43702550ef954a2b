//! Table loading: uploaded bytes + filename → [`RawTable`].
//!
//! The parser is chosen by the filename's extension suffix, matched
//! case-insensitively. CSV goes through the `csv` crate; the spreadsheet
//! family goes through `calamine`'s auto-detecting reader. Cell values stay
//! untyped here; coercion happens later in the pipeline.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use tracing::debug;

use board_core::error::{BoardError, Result};
use board_core::models::{RawTable, Scalar};

// ── Format dispatch ───────────────────────────────────────────────────────────

/// The two table formats the uploader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Spreadsheet,
}

/// Pick a parser from the filename's extension, case-insensitively.
/// Returns `None` when the extension maps to no supported format.
pub fn detect_format(filename: &str) -> Option<TableFormat> {
    let ext = std::path::Path::new(filename)
        .extension()?
        .to_str()?
        .to_lowercase();
    match ext.as_str() {
        "csv" => Some(TableFormat::Csv),
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(TableFormat::Spreadsheet),
        _ => None,
    }
}

/// Decode `bytes` into a [`RawTable`] using the parser selected for
/// `filename`.
///
/// Fails with [`BoardError::UnsupportedFormat`] for an unrecognised
/// extension and with [`BoardError::Load`] (carrying the underlying parser
/// message) when the bytes cannot be decoded as the chosen format.
pub fn load_table(bytes: &[u8], filename: &str) -> Result<RawTable> {
    let table = match detect_format(filename) {
        Some(TableFormat::Csv) => load_csv(bytes, filename)?,
        Some(TableFormat::Spreadsheet) => load_spreadsheet(bytes, filename)?,
        None => return Err(BoardError::UnsupportedFormat(filename.to_string())),
    };

    debug!(
        "Loaded {}: {} columns, {} rows",
        filename,
        table.columns.len(),
        table.rows.len()
    );

    Ok(table)
}

// ── CSV ───────────────────────────────────────────────────────────────────────

fn load_csv(bytes: &[u8], filename: &str) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| load_error(filename, e))?
        .iter()
        .map(String::from)
        .collect();

    if columns.is_empty() {
        return Err(BoardError::Load {
            name: filename.to_string(),
            message: "no header row".to_string(),
        });
    }

    let mut rows: Vec<Vec<Scalar>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| load_error(filename, e))?;
        let mut row: Vec<Scalar> = record
            .iter()
            .take(columns.len())
            .map(|field| {
                if field.is_empty() {
                    Scalar::Empty
                } else {
                    Scalar::Text(field.to_string())
                }
            })
            .collect();
        // Ragged rows are padded so every row matches the header width.
        row.resize(columns.len(), Scalar::Empty);
        rows.push(row);
    }

    Ok(RawTable { columns, rows })
}

// ── Spreadsheet (XLSX family) ─────────────────────────────────────────────────

fn load_spreadsheet(bytes: &[u8], filename: &str) -> Result<RawTable> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook =
        open_workbook_auto_from_rs(cursor).map_err(|e| load_error(filename, e))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(result) => result.map_err(|e| load_error(filename, e))?,
        None => {
            return Err(BoardError::Load {
                name: filename.to_string(),
                message: "workbook has no sheets".to_string(),
            })
        }
    };

    let mut row_iter = range.rows();
    let header = match row_iter.next() {
        Some(cells) if !cells.is_empty() => cells,
        _ => {
            return Err(BoardError::Load {
                name: filename.to_string(),
                message: "missing header row".to_string(),
            })
        }
    };

    let columns: Vec<String> = header.iter().map(header_cell).collect();
    let rows: Vec<Vec<Scalar>> = row_iter
        .map(|cells| {
            let mut row: Vec<Scalar> = cells.iter().map(data_cell).collect();
            row.resize(columns.len(), Scalar::Empty);
            row
        })
        .collect();

    Ok(RawTable { columns, rows })
}

/// Header cells become their display string; non-text headers (numbers,
/// dates) are still usable as column names.
fn header_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Map one spreadsheet cell to the untyped [`Scalar`] model.
fn data_cell(cell: &Data) -> Scalar {
    match cell {
        Data::Empty => Scalar::Empty,
        Data::String(s) if s.is_empty() => Scalar::Empty,
        Data::String(s) => Scalar::Text(s.clone()),
        Data::Float(f) => Scalar::Number(*f),
        Data::Int(i) => Scalar::Number(*i as f64),
        Data::Bool(b) => Scalar::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => Scalar::DateTime(naive),
            None => Scalar::Empty,
        },
        Data::DateTimeIso(s) => Scalar::Text(s.clone()),
        Data::DurationIso(s) => Scalar::Text(s.clone()),
        Data::Error(_) => Scalar::Empty,
    }
}

fn load_error(filename: &str, err: impl std::fmt::Display) -> BoardError {
    BoardError::Load {
        name: filename.to_string(),
        message: err.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
