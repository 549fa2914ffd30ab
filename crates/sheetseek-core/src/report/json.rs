use crate::error::Result;
use crate::session::SearchRecord;

/// Pretty-printed JSON for one search record.
pub fn to_json(record: &SearchRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}
