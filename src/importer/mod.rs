// ==========================================
// Employee Registry - import layer
// ==========================================
// Spreadsheet upload -> validated, deduplicated employee rows
// Supported: Excel (.xlsx)
// ==========================================

pub mod employee_importer_impl;
pub mod employee_importer_trait;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod row_validator;

pub use employee_importer_impl::EmployeeImporterImpl;
pub use error::{ImportError, ImportOutcome};
pub use field_mapper::{ColumnMap, EmployeeRow, FieldMapper as FieldMapperImpl, REQUIRED_COLUMNS};
pub use file_parser::{ExcelParser, RawRow, RawSheet};
pub use row_validator::RowValidator as RowValidatorImpl;

pub use employee_importer_trait::{EmployeeImporter, FieldMapper, FileParser, RowValidator};
