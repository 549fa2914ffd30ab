use super::state::SearchRecord;
use std::sync::Arc;

/// An immutable view of the history at one point in time.
///
/// Snapshots are cheap to clone and never change after being handed out.
#[derive(Clone, Debug, Default)]
pub struct HistorySnapshot {
    pub version: u64,
    pub records: Arc<[Arc<SearchRecord>]>,
}

impl HistorySnapshot {
    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&SearchRecord> {
        self.records.first().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Append-only log of search records, newest first.
///
/// Each [`SearchHistory::prepend`] builds a new record list and swaps it in;
/// snapshots taken earlier keep pointing at the old list.
#[derive(Debug, Default)]
pub struct SearchHistory {
    current: HistorySnapshot,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        self.current.clone()
    }

    pub fn version(&self) -> u64 {
        self.current.version
    }

    pub(crate) fn prepend(&mut self, record: SearchRecord) -> &SearchRecord {
        let mut records = Vec::with_capacity(self.current.records.len() + 1);
        records.push(Arc::new(record));
        records.extend(self.current.records.iter().cloned());
        self.current = HistorySnapshot {
            version: self.current.version + 1,
            records: records.into(),
        };
        &self.current.records[0]
    }
}
