//! Highlight span computation.
//!
//! Splits a cell's text into alternating plain and matched segments. Matching
//! is case-insensitive (see [`fold_case`](super::cell::fold_case)) and greedy
//! left-to-right: once an occurrence is taken, scanning resumes after its end,
//! so `"aa"` in `"aaa"` yields `[aa][a]`.

use serde::Serialize;

use super::cell::CellValue;
use super::query::Query;

/// A contiguous piece of cell text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    fn plain(text: &str) -> Segment {
        Segment {
            text: text.to_string(),
            is_match: false,
        }
    }

    fn matched(text: &str) -> Segment {
        Segment {
            text: text.to_string(),
            is_match: true,
        }
    }
}

/// Split `text` on every occurrence of the query.
///
/// Concatenating the `text` of the returned segments gives back `text` exactly.
/// Empty segments are never produced; an empty `text` yields no segments.
pub fn split_highlight(text: &str, query: &Query) -> Vec<Segment> {
    let needle: Vec<char> = query.folded().chars().collect();

    // Folded chars, each tagged with the byte offset of the source char it came
    // from and whether it is the first char that source char folded into.
    let mut folded: Vec<(char, usize, bool)> = Vec::with_capacity(text.len());
    for (offset, ch) in text.char_indices() {
        for (i, lower) in ch.to_lowercase().enumerate() {
            folded.push((lower, offset, i == 0));
        }
    }

    let boundary = |idx: usize| -> Option<usize> {
        match folded.get(idx) {
            None => Some(text.len()),
            Some(&(_, offset, true)) => Some(offset),
            Some(_) => None,
        }
    };

    let mut segments = Vec::new();
    let mut plain_start = 0usize;
    let mut i = 0usize;
    while i + needle.len() <= folded.len() {
        let end = i + needle.len();
        let hit = folded[i..end]
            .iter()
            .zip(&needle)
            .all(|((c, _, _), n)| c == n);
        match (hit, boundary(i), boundary(end)) {
            (true, Some(start_byte), Some(end_byte)) => {
                if start_byte > plain_start {
                    segments.push(Segment::plain(&text[plain_start..start_byte]));
                }
                segments.push(Segment::matched(&text[start_byte..end_byte]));
                plain_start = end_byte;
                i = end;
            }
            _ => i += 1,
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }
    segments
}

/// Highlight segments for a cell's natural string form.
pub fn highlight_cell(cell: &CellValue, query: &Query) -> Vec<Segment> {
    split_highlight(&cell.display(), query)
}
