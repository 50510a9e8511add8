// ==========================================
// Employee Registry - file parser
// ==========================================
// Step 0: read the payload and expose the first worksheet
// Supported: Excel (.xlsx)
// ==========================================

use crate::importer::employee_importer_trait::FileParser;
use crate::importer::error::{ImportError, ImportOutcome};
use calamine::{Data, Range, Reader, Xlsx};
use std::io::Cursor;
use std::path::Path;

const XLSX_EXTENSION: &str = "xlsx";

// ==========================================
// RawRow / RawSheet
// ==========================================

/// One data row as cell text, positioned by 1-based file row number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub row_number: usize,
    pub cells: Vec<String>,
}

impl RawRow {
    /// Cell text at `index`, empty when the row is shorter
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Header cells plus a lazy stream of data rows
pub struct RawSheet {
    pub header: Vec<String>,
    pub rows: Box<dyn Iterator<Item = RawRow> + Send>,
}

impl RawSheet {
    /// Build a sheet from in-memory rows; the header is row 1, data starts at row 2
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, cells)| RawRow {
                row_number: idx + 2,
                cells,
            });

        Self {
            header,
            rows: Box::new(rows),
        }
    }

    /// Walk a worksheet range, numbering rows by their absolute position
    ///
    /// The header is always sheet row 1. When the used range starts lower,
    /// row 1 is blank and every used row is data.
    fn from_range(range: Range<Data>) -> ImportOutcome<Self> {
        if range.is_empty() {
            return Err(ImportError::EmptyWorksheet);
        }

        let (height, width) = range.get_size();
        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);

        let (header, data_start) = if first_row == 0 {
            let header = (0..width).map(|col| cell_text(&range, 0, col)).collect();
            (header, 1)
        } else {
            (vec![String::new(); width], 0)
        };

        let rows = (data_start..height).map(move |row| RawRow {
            row_number: first_row + row + 1,
            cells: (0..width).map(|col| cell_text(&range, row, col)).collect(),
        });

        Ok(Self {
            header,
            rows: Box::new(rows),
        })
    }
}

fn cell_text(range: &Range<Data>, row: usize, col: usize) -> String {
    match range.get((row, col)) {
        Some(Data::Empty) | None => String::new(),
        Some(cell) => cell.to_string(),
    }
}

// ==========================================
// ExcelParser
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn supports(&self, file_name: &str) -> bool {
        Path::new(file_name.trim())
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(XLSX_EXTENSION))
    }

    fn parse(&self, bytes: &[u8]) -> ImportOutcome<RawSheet> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(ImportError::NoWorksheet)?;

        let range = workbook.worksheet_range(&sheet_name)?;
        tracing::debug!(
            sheet = %sheet_name,
            rows = range.height(),
            columns = range.width(),
            "worksheet loaded"
        );

        RawSheet::from_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_check_ignores_case() {
        let parser = ExcelParser;
        assert!(parser.supports("staff.xlsx"));
        assert!(parser.supports("STAFF.XLSX"));
        assert!(!parser.supports("staff.xls"));
        assert!(!parser.supports("staff.csv"));
        assert!(!parser.supports("xlsx"));
    }

    #[test]
    fn test_garbage_bytes_are_a_parse_error() {
        let result = ExcelParser.parse(b"definitely not a zip archive");
        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));
    }

    #[test]
    fn test_range_rows_use_absolute_numbers() {
        let mut range: Range<Data> = Range::new((0, 0), (4, 1));
        range.set_value((0, 0), Data::String("Name".to_string()));
        range.set_value((0, 1), Data::String("IsActive".to_string()));
        range.set_value((3, 0), Data::String("Ada".to_string()));
        range.set_value((3, 1), Data::Bool(true));
        range.set_value((4, 0), Data::String("Bob".to_string()));

        let sheet = RawSheet::from_range(range).unwrap();
        assert_eq!(sheet.header, vec!["Name".to_string(), "IsActive".to_string()]);

        let rows: Vec<RawRow> = sheet.rows.collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[0].cell(0), "");
        assert_eq!(rows[2].row_number, 4);
        assert_eq!(rows[2].cell(1), "true");
        assert_eq!(rows[3].row_number, 5);
        assert_eq!(rows[3].cell(1), "");
        assert_eq!(rows[3].cell(7), "");
    }

    #[test]
    fn test_blank_first_row_leaves_header_empty() {
        let mut range: Range<Data> = Range::new((1, 0), (2, 1));
        range.set_value((1, 0), Data::String("Name".to_string()));
        range.set_value((1, 1), Data::String("Email".to_string()));
        range.set_value((2, 0), Data::String("Ada".to_string()));

        let sheet = RawSheet::from_range(range).unwrap();
        assert_eq!(sheet.header, vec![String::new(), String::new()]);

        let rows: Vec<RawRow> = sheet.rows.collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[0].cell(0), "Name");
        assert_eq!(rows[1].row_number, 3);
    }

    #[test]
    fn test_empty_range_is_rejected() {
        let range: Range<Data> = Range::empty();
        assert!(matches!(RawSheet::from_range(range), Err(ImportError::EmptyWorksheet)));
    }
}
