//! Error types for the Sheetseek command line

use thiserror::Error;

/// Problems with the command line itself
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Missing search pattern")]
    MissingPattern,

    #[error("No files given")]
    MissingFiles,
}
