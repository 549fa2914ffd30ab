//! Search engine API.
//!
//! This module provides the pure, I/O-free part of the search pipeline:
//!
//! - [`CellValue`], [`Row`] - Data structures for decoded cells
//! - [`normalize`], [`fold_case`] - Comparable string forms
//! - [`Query`] - A trimmed, non-empty, case-folded pattern
//! - [`row_matches`] - Substring containment over a row
//! - [`scan_sheet`] - Ordered scan of one sheet into [`Match`]es
//! - [`split_highlight`] - Matched/unmatched segments for rendering

mod cell;
mod highlight;
mod matcher;
mod query;
mod scan;

pub use cell::{CellValue, Row, fold_case, format_number, normalize};
pub use highlight::{Segment, highlight_cell, split_highlight};
pub use matcher::row_matches;
pub use query::Query;
pub use scan::{Match, SheetScan, scan_sheet};
