//! sheetseek-core - UI-agnostic search pipeline: decoding, fan-out search, history and reports.

pub mod decode;
pub mod error;
pub mod report;
pub mod search;
pub mod session;
pub mod upload;

pub use decode::{CalamineDecoder, DecodedWorkbook, Sheet, WorkbookDecoder};
pub use error::{DecodeError, Result, SearchError};
pub use search::{FileErrorPolicy, FileResult, SearchOptions};
pub use session::{HistorySnapshot, SearchHistory, SearchRecord, SearchSession};
pub use upload::UploadedFile;

pub use sheetseek_engine::engine::{CellValue, Match, Query, Row, Segment};
