//! File search orchestration.
//!
//! - [`search_file`] - Decode one file and scan all of its sheets
//! - [`search_files`] - Fan out over a whole submission, fan back in by policy
//! - [`SearchOptions`], [`FileErrorPolicy`] - What to do when a file fails to decode

mod fanout;
mod file;
mod options;

pub use fanout::search_files;
pub use file::{FileResult, search_file, search_workbook};
pub use options::{FileErrorPolicy, SearchOptions};
