// ==========================================
// Employee Registry - row validator
// ==========================================
// Field rules for one mapped row; duplicates are checked by the importer
// ==========================================

use crate::domain::employee::EmployeeDraft;
use crate::importer::employee_importer_trait::RowValidator as RowValidatorTrait;
use crate::importer::field_mapper::EmployeeRow;

pub struct RowValidator;

impl RowValidatorTrait for RowValidator {
    fn validate(&self, row: &EmployeeRow) -> Result<EmployeeDraft, String> {
        let draft = EmployeeDraft::new(
            row.name.as_str(),
            row.department.as_str(),
            row.email.as_str(),
            row.is_active,
        );

        draft
            .check_fields()
            .map_err(|issue| format!("Row {}: {}", row.row_number, issue))?;

        Ok(draft)
    }
}

/// Message for an email already stored or already accepted from this file
pub fn duplicate_email_message(row_number: usize, email: &str) -> String {
    format!("Row {row_number}: Email '{email}' already exists or is duplicated in the file.")
}
