// ==========================================
// Employee Registry - employee domain model
// ==========================================
// Employee: persisted record (soft delete via is_deleted)
// EmployeeDraft: create/update payload
// ImportResult: outcome of one bulk import, never persisted
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;

/// Maximum name length (characters)
pub const NAME_MAX_LEN: usize = 100;

/// Maximum department length (characters)
pub const DEPARTMENT_MAX_LEN: usize = 50;

// ==========================================
// Employee - persisted employee record
// ==========================================
// Invariants:
// - employee_id is assigned by the store and never changes
// - email is unique among rows with is_deleted = false
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: i64,
    pub name: String,
    pub department: String,
    pub email: String,
    pub is_active: bool,
    pub is_deleted: bool,

    // ===== audit =====
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl Employee {
    /// Overwrite all mutable fields from a draft and stamp the update metadata.
    pub fn apply_draft(&mut self, draft: &EmployeeDraft, actor: &str, now: DateTime<Utc>) {
        self.name = draft.name.trim().to_string();
        self.department = draft.department.trim().to_string();
        self.email = draft.email.trim().to_string();
        self.is_active = draft.is_active;
        self.touch(actor, now);
    }

    /// Refresh updated_at / updated_by
    pub fn touch(&mut self, actor: &str, now: DateTime<Utc>) {
        self.updated_at = now;
        self.updated_by = actor.to_string();
    }
}

// ==========================================
// NewEmployee - record that has not been assigned an id yet
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub department: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl NewEmployee {
    /// Build a new record with both audit pairs set to `now` / `actor`.
    pub fn from_draft(draft: &EmployeeDraft, actor: &str, now: DateTime<Utc>) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            department: draft.department.trim().to_string(),
            email: draft.email.trim().to_string(),
            is_active: draft.is_active,
            created_at: now,
            created_by: actor.to_string(),
            updated_at: now,
            updated_by: actor.to_string(),
        }
    }
}

// ==========================================
// EmployeeDraft - create/update payload
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub department: String,
    pub email: String,
    pub is_active: bool,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        email: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            email: email.into(),
            is_active,
        }
    }

    /// Check the field rules shared by create, update and import.
    ///
    /// Values are judged after trimming. The first failing rule is returned,
    /// in the order: required fields, email syntax, lengths.
    pub fn check_fields(&self) -> Result<(), FieldIssue> {
        let name = self.name.trim();
        let department = self.department.trim();
        let email = self.email.trim();

        if name.is_empty() {
            return Err(FieldIssue::NameRequired);
        }
        if department.is_empty() {
            return Err(FieldIssue::DepartmentRequired);
        }
        if email.is_empty() {
            return Err(FieldIssue::EmailRequired);
        }
        if !is_valid_email(email) {
            return Err(FieldIssue::EmailInvalid(email.to_string()));
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(FieldIssue::NameTooLong);
        }
        if department.chars().count() > DEPARTMENT_MAX_LEN {
            return Err(FieldIssue::DepartmentTooLong);
        }
        Ok(())
    }
}

/// local-part@domain syntax check
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Comparison key for email uniqueness: trimmed, Unicode lower-cased.
///
/// Stored in `employee.email_key`; every duplicate check compares this value.
pub fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

// ==========================================
// FieldIssue - first broken field rule
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    NameRequired,
    DepartmentRequired,
    EmailRequired,
    EmailInvalid(String),
    NameTooLong,
    DepartmentTooLong,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::NameRequired => write!(f, "Name is required."),
            FieldIssue::DepartmentRequired => write!(f, "Department is required."),
            FieldIssue::EmailRequired => write!(f, "Email is required."),
            FieldIssue::EmailInvalid(email) => write!(f, "'{email}' is not a valid email address."),
            FieldIssue::NameTooLong => write!(f, "Name exceeds {NAME_MAX_LEN} characters."),
            FieldIssue::DepartmentTooLong => {
                write!(f, "Department exceeds {DEPARTMENT_MAX_LEN} characters.")
            }
        }
    }
}

// ==========================================
// DepartmentCount - aggregation row
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub total_employees: usize,
}

// ==========================================
// ImportResult - bulk import outcome
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    /// Rows accepted and written
    pub success_count: usize,
    /// Per-row errors in file order
    pub errors: Vec<String>,
}
