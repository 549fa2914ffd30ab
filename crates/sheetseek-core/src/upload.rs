//! Uploaded files and media type classification.

use crate::error::Result;
use std::path::Path;

/// Media type of legacy BIFF workbooks (`.xls`).
pub const XLS_MEDIA_TYPE: &str = "application/vnd.ms-excel";
/// Media type of Office Open XML workbooks (`.xlsx`).
pub const XLSX_MEDIA_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const CSV_MEDIA_TYPE: &str = "text/csv";
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// A file submitted for searching. Its bytes are never modified.
#[derive(Clone, Debug)]
pub struct UploadedFile {
    pub name: String,
    /// Declared media type, as supplied by whoever handed us the file.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        UploadedFile {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Read a file from disk. The media type is derived from the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(UploadedFile::new(name, media_type_for_path(path), bytes))
    }

    pub fn is_tabular_workbook(&self) -> bool {
        is_tabular_workbook(&self.media_type)
    }
}

/// Container formats the default decoder understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkbookFormat {
    Xls,
    Xlsx,
}

impl WorkbookFormat {
    /// Resolve the format a media type names, if it is a supported workbook type.
    pub fn from_media_type(media_type: &str) -> Option<WorkbookFormat> {
        match media_type.trim() {
            XLS_MEDIA_TYPE => Some(WorkbookFormat::Xls),
            XLSX_MEDIA_TYPE => Some(WorkbookFormat::Xlsx),
            _ => None,
        }
    }
}

/// Returns true only for the two tabular workbook media types.
pub fn is_tabular_workbook(media_type: &str) -> bool {
    WorkbookFormat::from_media_type(media_type).is_some()
}

/// Guess the declared media type of a file from its extension.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("xls") => XLS_MEDIA_TYPE,
        Some("xlsx") => XLSX_MEDIA_TYPE,
        Some("csv") => CSV_MEDIA_TYPE,
        _ => FALLBACK_MEDIA_TYPE,
    }
}
