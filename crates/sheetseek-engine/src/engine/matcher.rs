//! Row matching.

use super::cell::{CellValue, normalize};
use super::query::Query;

/// Returns true if any cell of `row`, normalised, contains the query as a substring.
pub fn row_matches(row: &[CellValue], query: &Query) -> bool {
    row.iter()
        .filter(|cell| !cell.is_empty())
        .any(|cell| normalize(cell).contains(query.folded()))
}
