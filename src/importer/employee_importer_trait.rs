// ==========================================
// Employee Registry - import traits
// ==========================================
// Interfaces only; implementations live next door
// ==========================================

use crate::domain::employee::{EmployeeDraft, ImportResult};
use crate::importer::error::ImportOutcome;
use crate::importer::field_mapper::{ColumnMap, EmployeeRow};
use crate::importer::file_parser::{RawRow, RawSheet};
use async_trait::async_trait;

// ==========================================
// EmployeeImporter Trait
// ==========================================
// Implemented by: EmployeeImporterImpl
#[async_trait]
pub trait EmployeeImporter: Send + Sync {
    /// Import employees from an uploaded spreadsheet
    ///
    /// # Arguments
    /// - bytes: raw file content
    /// - file_name: original file name (extension check only)
    /// - actor: recorded as created_by / updated_by
    ///
    /// # Returns
    /// - Ok(ImportResult): accepted count plus per-row errors in file order
    /// - Err: structural failure (bad file, missing column) or store failure
    async fn import(&self, bytes: &[u8], file_name: &str, actor: &str)
        -> ImportOutcome<ImportResult>;
}

// ==========================================
// FileParser Trait
// ==========================================
pub trait FileParser: Send + Sync {
    /// Whether the file name carries an extension this parser reads
    fn supports(&self, file_name: &str) -> bool;

    /// Open the payload and return the first worksheet as header + row stream
    fn parse(&self, bytes: &[u8]) -> ImportOutcome<RawSheet>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
pub trait FieldMapper: Send + Sync {
    /// Build the column map, failing when a required column is absent
    fn map_header(&self, header: &[String]) -> ImportOutcome<ColumnMap>;

    /// Pull the known fields out of one raw row
    fn map_row(&self, columns: &ColumnMap, row: &RawRow) -> EmployeeRow;
}

// ==========================================
// RowValidator Trait
// ==========================================
pub trait RowValidator: Send + Sync {
    /// Check one mapped row
    ///
    /// # Returns
    /// - Ok(EmployeeDraft): trimmed values ready for the duplicate check
    /// - Err(String): the row error message, prefixed with the row number
    fn validate(&self, row: &EmployeeRow) -> Result<EmployeeDraft, String>;
}
