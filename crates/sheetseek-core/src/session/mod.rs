//! Search session state (UI-agnostic).

mod history;
mod state;

pub use history::{HistorySnapshot, SearchHistory};
pub use state::{SearchRecord, SearchSession};
