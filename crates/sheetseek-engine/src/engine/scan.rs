//! Sheet scanning.
//!
//! Walks every row of one sheet in order and collects the rows that match a
//! [`Query`]. The header candidate (first row) is itself eligible to match.

use serde::Serialize;

use super::cell::Row;
use super::matcher::row_matches;
use super::query::Query;

/// A matching row.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub sheet_name: String,
    /// 1-based position of the row in its sheet, header row included.
    pub row_index: usize,
    /// The entire original row, not only the matching cells.
    pub row_data: Row,
}

/// Output of scanning one sheet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetScan {
    /// The sheet's first row, if it has any rows.
    pub header_candidate: Option<Row>,
    pub matches: Vec<Match>,
}

/// Scan all rows of a sheet for the query.
pub fn scan_sheet(sheet_name: &str, rows: &[Row], query: &Query) -> SheetScan {
    let matches = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row_matches(row, query))
        .map(|(idx, row)| Match {
            sheet_name: sheet_name.to_string(),
            row_index: idx + 1,
            row_data: row.clone(),
        })
        .collect();

    SheetScan {
        header_candidate: rows.first().cloned(),
        matches,
    }
}
