//! Workbook decoding.
//!
//! The search pipeline only needs "sheet name -> rows of cells". [`WorkbookDecoder`]
//! is the seam; [`CalamineDecoder`] is the default implementation and reads
//! workbooks from memory. The declared media type only gates decoding; the
//! container format itself is detected from the bytes, so an `.xlsx` saved
//! under an `.xls` name still opens.

use crate::error::DecodeError;
use crate::upload::UploadedFile;
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use sheetseek_engine::engine::{CellValue, Row};
use std::io::{Cursor, Read, Seek};

/// One named table of a workbook.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Row>,
}

/// A decoded workbook: its sheets in workbook order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodedWorkbook {
    pub sheets: Vec<Sheet>,
}

/// Turns an uploaded file into a [`DecodedWorkbook`].
///
/// Implementations are shared across the per-file fan-out, hence `Sync`.
pub trait WorkbookDecoder: Sync {
    fn decode(&self, file: &UploadedFile) -> Result<DecodedWorkbook, DecodeError>;
}

/// Decoder backed by `calamine`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CalamineDecoder;

impl WorkbookDecoder for CalamineDecoder {
    fn decode(&self, file: &UploadedFile) -> Result<DecodedWorkbook, DecodeError> {
        if !file.is_tabular_workbook() {
            return Err(DecodeError::UnsupportedFormat(file.media_type.clone()));
        }

        let workbook = open_workbook_auto_from_rs(Cursor::new(file.bytes.as_slice()))?;
        let sheets = read_sheets::<Cursor<&[u8]>, _>(workbook)?;
        Ok(DecodedWorkbook { sheets })
    }
}

fn read_sheets<RS, R>(mut workbook: R) -> Result<Vec<Sheet>, DecodeError>
where
    RS: Read + Seek,
    R: Reader<RS>,
    calamine::Error: From<R::Error>,
{
    let names = workbook.sheet_names();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(calamine::Error::from)?;
        sheets.push(Sheet {
            rows: range_to_rows(&range),
            name,
        });
    }
    Ok(sheets)
}

/// Convert a sheet's used range into rows, top to bottom.
pub fn range_to_rows(range: &Range<Data>) -> Vec<Row> {
    range
        .rows()
        .map(|row| row.iter().map(cell_value).collect())
        .collect()
}

/// Map a decoded spreadsheet cell onto the closed [`CellValue`] set.
pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::text(s),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::text(s),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::{XLS_MEDIA_TYPE, XLSX_MEDIA_TYPE};
    use calamine::CellErrorType;
    use rust_xlsxwriter::Workbook;

    /// An empty first sheet followed by two populated ones.
    fn people_workbook() -> Vec<u8> {
        let mut workbook = Workbook::new();
        workbook.add_worksheet().set_name("Empty").unwrap();

        let people = workbook.add_worksheet();
        people.set_name("People").unwrap();
        people.write_string(0, 0, "Name").unwrap();
        people.write_string(0, 1, "Age").unwrap();
        people.write_string(1, 0, "Alice").unwrap();
        people.write_number(1, 1, 30).unwrap();
        people.write_string(2, 0, "Bob").unwrap();
        people.write_number(2, 1, 25.5).unwrap();

        let more = workbook.add_worksheet();
        more.set_name("More").unwrap();
        more.write_string(0, 0, "Carol").unwrap();
        more.write_string(1, 0, "Bobby").unwrap();
        more.write_number(1, 1, 7).unwrap();

        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_cell_value_mapping() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_value(&Data::String(String::new())), CellValue::Empty);
        assert_eq!(
            cell_value(&Data::String("Bob".to_string())),
            CellValue::Text("Bob".to_string())
        );
        assert_eq!(cell_value(&Data::Int(25)), CellValue::Number(25.0));
        assert_eq!(cell_value(&Data::Float(2.5)), CellValue::Number(2.5));
        assert_eq!(cell_value(&Data::Bool(true)), CellValue::Text("true".to_string()));
        assert_eq!(
            cell_value(&Data::Error(CellErrorType::Div0)),
            CellValue::Text("#DIV/0!".to_string())
        );
    }

    #[test]
    fn test_range_to_rows_keeps_order_and_width() {
        let mut range: Range<Data> = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("Name".to_string()));
        range.set_value((0, 1), Data::String("Age".to_string()));
        range.set_value((1, 0), Data::String("Alice".to_string()));
        range.set_value((1, 1), Data::Int(30));
        range.set_value((2, 0), Data::String("Bob".to_string()));

        let rows = range_to_rows(&range);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![CellValue::text("Name"), CellValue::text("Age")]);
        assert_eq!(rows[1], vec![CellValue::text("Alice"), CellValue::Number(30.0)]);
        assert_eq!(rows[2], vec![CellValue::text("Bob"), CellValue::Empty]);
    }

    #[test]
    fn test_range_to_rows_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(range_to_rows(&range).is_empty());
    }

    #[test]
    fn test_decode_rejects_garbage_xlsx() {
        let file = UploadedFile::new("broken.xlsx", XLSX_MEDIA_TYPE, b"not a zip".to_vec());
        let err = CalamineDecoder.decode(&file).unwrap_err();
        assert!(matches!(err, DecodeError::Workbook(_)));
    }

    #[test]
    fn test_decode_rejects_garbage_xls() {
        let file = UploadedFile::new("broken.xls", XLS_MEDIA_TYPE, vec![0u8; 64]);
        assert!(CalamineDecoder.decode(&file).is_err());
    }

    #[test]
    fn test_decode_unsupported_media_type() {
        let file = UploadedFile::new("notes.csv", "text/csv", b"a,b".to_vec());
        let err = CalamineDecoder.decode(&file).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedFormat(t) if t == "text/csv"));
    }

    #[test]
    fn test_decode_xlsx_sheets_in_workbook_order() {
        let file = UploadedFile::new("people.xlsx", XLSX_MEDIA_TYPE, people_workbook());
        let workbook = CalamineDecoder.decode(&file).unwrap();

        let names: Vec<&str> = workbook.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Empty", "People", "More"]);
        assert!(workbook.sheets[0].rows.is_empty());

        let people = &workbook.sheets[1].rows;
        assert_eq!(people.len(), 3);
        assert_eq!(people[0], vec![CellValue::text("Name"), CellValue::text("Age")]);
        assert_eq!(people[1], vec![CellValue::text("Alice"), CellValue::Number(30.0)]);
        assert_eq!(people[1][1].display(), "30");
        assert_eq!(people[2][1].display(), "25.5");

        let more = &workbook.sheets[2].rows;
        assert_eq!(more[0], vec![CellValue::text("Carol"), CellValue::Empty]);
        assert_eq!(more[1], vec![CellValue::text("Bobby"), CellValue::Number(7.0)]);
    }

    #[test]
    fn test_decode_xlsx_declared_as_xls() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(1, 0, "Bob").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let file = UploadedFile::new("legacy.xls", XLS_MEDIA_TYPE, bytes);
        let decoded = CalamineDecoder.decode(&file).unwrap();
        assert_eq!(decoded.sheets.len(), 1);
        assert_eq!(
            decoded.sheets[0].rows,
            vec![vec![CellValue::text("Name")], vec![CellValue::text("Bob")]]
        );
    }

    #[test]
    fn test_decoded_workbook_feeds_search() {
        use crate::search::search_file;
        use sheetseek_engine::engine::Query;

        let file = UploadedFile::new("people.xlsx", XLSX_MEDIA_TYPE, people_workbook());
        let result = search_file(&CalamineDecoder, &file, &Query::new("bob").unwrap()).unwrap();

        assert_eq!(
            result.headers,
            Some(vec![CellValue::text("Name"), CellValue::text("Age")])
        );
        let found: Vec<(&str, usize)> = result
            .matches
            .iter()
            .map(|m| (m.sheet_name.as_str(), m.row_index))
            .collect();
        assert_eq!(found, vec![("People", 3), ("More", 2)]);
    }
}
