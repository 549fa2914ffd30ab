use crate::decode::{DecodedWorkbook, WorkbookDecoder};
use crate::error::DecodeError;
use crate::upload::UploadedFile;
use serde::Serialize;
use sheetseek_engine::engine::{Match, Query, Row, scan_sheet};
use tracing::debug;

/// Aggregated matches for one uploaded file across all of its sheets.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    pub file_name: String,
    /// First row of the first sheet that has any rows, not necessarily the
    /// sheet a match came from.
    pub headers: Option<Row>,
    /// Sheet order, then row order within each sheet.
    pub matches: Vec<Match>,
}

impl FileResult {
    /// A result with no header and no matches.
    pub fn empty(file_name: &str) -> FileResult {
        FileResult {
            file_name: file_name.to_string(),
            headers: None,
            matches: Vec::new(),
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Search one file.
///
/// Files whose declared type is not a tabular workbook are never decoded and
/// yield an empty result. Decoding failures are returned to the caller.
pub fn search_file<D>(
    decoder: &D,
    file: &UploadedFile,
    query: &Query,
) -> Result<FileResult, DecodeError>
where
    D: WorkbookDecoder + ?Sized,
{
    if !file.is_tabular_workbook() {
        debug!(file = %file.name, media_type = %file.media_type, "skipping non-workbook file");
        return Ok(FileResult::empty(&file.name));
    }

    let workbook = decoder.decode(file)?;
    Ok(search_workbook(&file.name, &workbook, query))
}

/// Scan every sheet of an already decoded workbook, in workbook order.
pub fn search_workbook(file_name: &str, workbook: &DecodedWorkbook, query: &Query) -> FileResult {
    let mut result = FileResult::empty(file_name);

    for sheet in &workbook.sheets {
        let scan = scan_sheet(&sheet.name, &sheet.rows, query);
        debug!(
            file = file_name,
            sheet = %sheet.name,
            rows = sheet.rows.len(),
            matches = scan.matches.len(),
            "scanned sheet"
        );
        if result.headers.is_none() {
            result.headers = scan.header_candidate;
        }
        result.matches.extend(scan.matches);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Sheet;
    use crate::upload::XLSX_MEDIA_TYPE;
    use sheetseek_engine::engine::CellValue;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| CellValue::text(c)).collect()
    }

    fn sheet(name: &str, rows: Vec<Row>) -> Sheet {
        Sheet {
            name: name.to_string(),
            rows,
        }
    }

    struct FixedDecoder(DecodedWorkbook);

    impl WorkbookDecoder for FixedDecoder {
        fn decode(&self, _file: &UploadedFile) -> Result<DecodedWorkbook, DecodeError> {
            Ok(self.0.clone())
        }
    }

    struct PanickingDecoder;

    impl WorkbookDecoder for PanickingDecoder {
        fn decode(&self, file: &UploadedFile) -> Result<DecodedWorkbook, DecodeError> {
            panic!("decoder must not be called for {}", file.name);
        }
    }

    #[test]
    fn test_headers_come_from_first_non_empty_sheet() {
        let workbook = DecodedWorkbook {
            sheets: vec![
                sheet("S0", vec![]),
                sheet("S1", vec![row(&["h1", "h2"]), row(&["a", "b"]), row(&["c", "d"])]),
                sheet(
                    "S2",
                    vec![
                        row(&["x1", "x2"]),
                        row(&["b", "match"]),
                        row(&["e"]),
                        row(&["f"]),
                        row(&["g"]),
                    ],
                ),
            ],
        };
        let result = search_workbook("book.xlsx", &workbook, &Query::new("match").unwrap());
        assert_eq!(result.headers, Some(row(&["h1", "h2"])));
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].sheet_name, "S2");
        assert_eq!(result.matches[0].row_index, 2);
    }

    #[test]
    fn test_matches_follow_sheet_then_row_order() {
        let workbook = DecodedWorkbook {
            sheets: vec![
                sheet("B", vec![row(&["key"]), row(&["other"]), row(&["key 2"])]),
                sheet("A", vec![row(&["key 3"])]),
            ],
        };
        let result = search_workbook("f", &workbook, &Query::new("KEY").unwrap());
        let order: Vec<(&str, usize)> = result
            .matches
            .iter()
            .map(|m| (m.sheet_name.as_str(), m.row_index))
            .collect();
        assert_eq!(order, vec![("B", 1), ("B", 3), ("A", 1)]);
    }

    #[test]
    fn test_workbook_without_rows_has_no_headers() {
        let workbook = DecodedWorkbook {
            sheets: vec![sheet("Empty", vec![]), sheet("AlsoEmpty", vec![])],
        };
        let result = search_workbook("f", &workbook, &Query::new("a").unwrap());
        assert!(result.headers.is_none());
        assert!(!result.has_matches());
    }

    #[test]
    fn test_unsupported_file_is_not_decoded() {
        let file = UploadedFile::new("data.csv", "text/csv", b"Bob,25".to_vec());
        let result = search_file(&PanickingDecoder, &file, &Query::new("bob").unwrap()).unwrap();
        assert_eq!(result, FileResult::empty("data.csv"));
    }

    #[test]
    fn test_supported_file_is_decoded_and_scanned() {
        let decoder = FixedDecoder(DecodedWorkbook {
            sheets: vec![sheet("Sheet1", vec![row(&["Name"]), row(&["Bob"])])],
        });
        let file = UploadedFile::new("Book1.xlsx", XLSX_MEDIA_TYPE, Vec::new());
        let result = search_file(&decoder, &file, &Query::new("bob").unwrap()).unwrap();
        assert_eq!(result.file_name, "Book1.xlsx");
        assert_eq!(result.headers, Some(row(&["Name"])));
        assert_eq!(result.matches.len(), 1);
    }
}
