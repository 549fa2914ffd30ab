use serde::{Serialize, Serializer};
use std::fmt;

use super::cell::fold_case;

/// A validated search pattern.
///
/// The pattern is trimmed once on construction and can never be empty, so
/// everything downstream of [`Query::new`] may assume a non-empty needle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    display: String,
    folded: String,
}

impl Query {
    /// Build a query from user input. Returns `None` if the input is blank.
    pub fn new(raw: &str) -> Option<Query> {
        let display = raw.trim();
        if display.is_empty() {
            return None;
        }
        Some(Query {
            display: display.to_string(),
            folded: fold_case(display),
        })
    }

    /// The trimmed pattern with its original casing.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The case-folded pattern used for matching.
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Serialised as the display pattern.
impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}
