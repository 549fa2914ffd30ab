//! Error types for Sheetseek core.

use thiserror::Error;

/// Errors raised while decoding a single workbook.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("{0}")]
    Workbook(#[from] calamine::Error),

    #[error("Unsupported workbook media type: {0}")]
    UnsupportedFormat(String),
}

/// Errors that can occur while running a search submission.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Search pattern is empty")]
    EmptyPattern,

    #[error("No files to search")]
    NoFiles,

    #[error("Failed to decode {file}: {source}")]
    Decode {
        file: String,
        #[source]
        source: DecodeError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
