use super::history::{HistorySnapshot, SearchHistory};
use crate::decode::{CalamineDecoder, WorkbookDecoder};
use crate::error::{Result, SearchError};
use crate::search::{FileResult, SearchOptions, search_files};
use crate::upload::UploadedFile;
use serde::Serialize;
use sheetseek_engine::engine::Query;
use tracing::info;

/// One submission: what was searched for, in which files, and what was found.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    /// Trimmed pattern, casing preserved.
    pub pattern: Query,
    /// Every submitted file name, in submission order.
    pub files: Vec<String>,
    /// Only the files with at least one match, in submission order.
    pub search_results: Vec<FileResult>,
}

impl SearchRecord {
    /// Merge per-file results into a record, dropping files without matches.
    pub fn aggregate(pattern: Query, files: &[UploadedFile], results: Vec<FileResult>) -> Self {
        SearchRecord {
            pattern,
            files: files.iter().map(|f| f.name.clone()).collect(),
            search_results: results.into_iter().filter(FileResult::has_matches).collect(),
        }
    }

    /// Total number of matching rows across all files.
    pub fn match_count(&self) -> usize {
        self.search_results.iter().map(|r| r.matches.len()).sum()
    }
}

/// Owns the decoder, the options and the search history.
///
/// [`SearchSession::submit`] is the only way to add to the history.
pub struct SearchSession<D = CalamineDecoder> {
    decoder: D,
    options: SearchOptions,
    history: SearchHistory,
}

impl SearchSession {
    /// A session using the default `calamine` decoder.
    pub fn new(options: SearchOptions) -> Self {
        Self::with_decoder(CalamineDecoder, options)
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SearchOptions::default())
    }
}

impl<D: WorkbookDecoder> SearchSession<D> {
    pub fn with_decoder(decoder: D, options: SearchOptions) -> Self {
        SearchSession {
            decoder,
            options,
            history: SearchHistory::new(),
        }
    }

    /// Current history, newest first.
    pub fn history(&self) -> HistorySnapshot {
        self.history.snapshot()
    }

    /// Search `files` for `pattern` and prepend the resulting record to the history.
    ///
    /// Blank patterns and empty file sets are rejected before any file is touched.
    /// On any error the history is left as it was.
    pub fn submit(&mut self, pattern: &str, files: Vec<UploadedFile>) -> Result<&SearchRecord> {
        let query = Query::new(pattern).ok_or(SearchError::EmptyPattern)?;
        if files.is_empty() {
            return Err(SearchError::NoFiles);
        }

        info!(pattern = %query, files = files.len(), "starting search");
        let results = search_files(&self.decoder, &files, &query, self.options.on_file_error)?;
        let record = SearchRecord::aggregate(query, &files, results);
        info!(
            pattern = %record.pattern,
            matched_files = record.search_results.len(),
            matches = record.match_count(),
            "search finished"
        );

        Ok(self.history.prepend(record))
    }
}
