// ==========================================
// Employee Registry - request validator
// ==========================================
// Field checks for create / update payloads
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::employee::EmployeeDraft;

/// Reject a draft that breaks a field rule
///
/// # Returns
/// - Ok(()): every field is acceptable
/// - Err(ApiError::InvalidInput): the first broken rule
pub fn validate_employee_draft(draft: &EmployeeDraft) -> ApiResult<()> {
    draft
        .check_fields()
        .map_err(|issue| ApiError::InvalidInput(issue.to_string()))
}
