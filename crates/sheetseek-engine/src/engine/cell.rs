//! Cell data structures and normalisation.
//!
//! This module provides the core data types for representing decoded cells:
//! - [`CellValue`] - The content of a single cell (empty, text or number)
//! - [`Row`] - One row of a sheet, in column order
//!
//! and the two functions every comparison goes through:
//! - [`fold_case`] - Locale-independent per-char lowercasing
//! - [`normalize`] - The comparable (folded) string form of a cell

use serde::Serialize;
use std::fmt;

/// The content of a decoded cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

/// One row of a sheet. Rows within a sheet may have different widths.
pub type Row = Vec<CellValue>;

impl CellValue {
    /// Create a text cell. Empty text becomes [`CellValue::Empty`].
    pub fn text(s: &str) -> CellValue {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Natural string form of the cell, case preserved.
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

/// Format a number in its natural form.
///
/// Integral values print without a fractional part (`30`, not `30.0`); everything
/// else uses the shortest representation that round-trips (`2.5`, `0.1`).
/// Negative zero prints as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

/// Lowercase every char independently using the Unicode lowercase mapping.
///
/// No locale or context rules are applied: `Σ` always folds to `σ`, even at the
/// end of a word.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Comparable form of a cell: its natural string form, case folded.
/// Empty cells normalise to the empty string.
pub fn normalize(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::new(),
        CellValue::Text(s) => fold_case(s),
        CellValue::Number(n) => fold_case(&format_number(*n)),
    }
}
