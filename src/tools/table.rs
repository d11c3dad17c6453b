//! Tab-separated column tables
//!
//! The first line names the columns, every following non-blank line holds one
//! float per column.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{AudiolibError, Result};

/// Column name to values, in header order
pub type Table = IndexMap<String, Vec<f64>>;

/// Read and parse a tab-separated table file
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AudiolibError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let text = fs::read_to_string(path)?;
    parse_table(&text)
}

/// Parse tab-separated table text
///
/// # Errors
/// * `MalformedTable` - missing header, duplicate column names, a row with
///   the wrong number of cells or a cell that is not a float
pub fn parse_table(text: &str) -> Result<Table> {
    let mut lines = text.lines().map(|line| line.trim_end_matches('\r'));

    let header = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| AudiolibError::MalformedTable {
            line: 1,
            reason: "missing header line".to_string(),
        })?;

    let mut table = Table::new();
    for name in header.split('\t') {
        if table.insert(name.to_string(), Vec::new()).is_some() {
            return Err(AudiolibError::MalformedTable {
                line: 1,
                reason: format!("duplicate column '{}'", name),
            });
        }
    }

    for (offset, line) in lines.enumerate() {
        let line_number = offset + 2;
        if line.trim().is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split('\t').collect();
        if cells.len() != table.len() {
            return Err(AudiolibError::MalformedTable {
                line: line_number,
                reason: format!("expected {} columns, found {}", table.len(), cells.len()),
            });
        }

        for (column, cell) in table.values_mut().zip(cells) {
            let value = cell.trim().parse::<f64>().map_err(|_| AudiolibError::MalformedTable {
                line: line_number,
                reason: format!("'{}' is not a number", cell),
            })?;
            column.push(value);
        }
    }

    Ok(table)
}
