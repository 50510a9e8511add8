// ==========================================
// Employee Registry - domain layer
// ==========================================
// Entities, value types and field rules
// Rule: no data access, no engine logic
// ==========================================

pub mod employee;
pub mod types;

pub use employee::{
    email_key, is_valid_email, DepartmentCount, Employee, EmployeeDraft, FieldIssue, ImportResult,
    NewEmployee, DEPARTMENT_MAX_LEN, NAME_MAX_LEN,
};
pub use types::{EmployeeFilter, EmploymentStatus};
