// ==========================================
// Employee Registry - field mapper
// ==========================================
// Header cell -> column index, raw row -> EmployeeRow
// Columns are matched by name, never by position
// ==========================================

use crate::importer::employee_importer_trait::FieldMapper as FieldMapperTrait;
use crate::importer::error::{ImportError, ImportOutcome};
use crate::importer::file_parser::RawRow;
use std::collections::HashMap;

pub const COLUMN_NAME: &str = "name";
pub const COLUMN_DEPARTMENT: &str = "department";
pub const COLUMN_EMAIL: &str = "email";
pub const COLUMN_IS_ACTIVE: &str = "isactive";

/// Checked in this order; the first absent one is reported
pub const REQUIRED_COLUMNS: [&str; 4] =
    [COLUMN_NAME, COLUMN_DEPARTMENT, COLUMN_EMAIL, COLUMN_IS_ACTIVE];

// ==========================================
// ColumnMap
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    name: usize,
    department: usize,
    email: usize,
    is_active: usize,
}

impl ColumnMap {
    pub fn name(&self) -> usize {
        self.name
    }

    pub fn department(&self) -> usize {
        self.department
    }

    pub fn email(&self) -> usize {
        self.email
    }

    pub fn is_active(&self) -> usize {
        self.is_active
    }
}

// ==========================================
// EmployeeRow - mapped, trimmed cell values
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub row_number: usize,
    pub name: String,
    pub department: String,
    pub email: String,
    pub is_active: bool,
}

/// "true" (any case, surrounding spaces ignored) is true; anything else is false
pub fn parse_is_active(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

// ==========================================
// FieldMapper
// ==========================================
pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_header(&self, header: &[String]) -> ImportOutcome<ColumnMap> {
        // later duplicates overwrite earlier ones
        let index: HashMap<String, usize> = header
            .iter()
            .enumerate()
            .map(|(idx, cell)| (cell.trim().to_lowercase(), idx))
            .collect();

        let column = |key: &str| {
            index
                .get(key)
                .copied()
                .ok_or_else(|| ImportError::MissingColumn(key.to_string()))
        };

        for required in REQUIRED_COLUMNS {
            column(required)?;
        }

        Ok(ColumnMap {
            name: column(COLUMN_NAME)?,
            department: column(COLUMN_DEPARTMENT)?,
            email: column(COLUMN_EMAIL)?,
            is_active: column(COLUMN_IS_ACTIVE)?,
        })
    }

    fn map_row(&self, columns: &ColumnMap, row: &RawRow) -> EmployeeRow {
        EmployeeRow {
            row_number: row.row_number,
            name: row.cell(columns.name()).trim().to_string(),
            department: row.cell(columns.department()).trim().to_string(),
            email: row.cell(columns.email()).trim().to_string(),
            is_active: parse_is_active(row.cell(columns.is_active())),
        }
    }
}
