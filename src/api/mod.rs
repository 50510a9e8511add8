// ==========================================
// Employee Registry - API layer
// ==========================================
// Business entry points for the command-line front end
// ==========================================

pub mod employee_api;
pub mod error;
pub mod import_api;
pub mod validator;

pub use employee_api::EmployeeApi;
pub use error::{ApiError, ApiResult};
pub use import_api::ImportApi;
pub use validator::validate_employee_draft;
