// ==========================================
// Employee Registry - repository layer
// ==========================================
// Rule: repositories hold no business logic
// ==========================================
// Provides data access behind traits and hides the database
// All queries are parameterized
// ==========================================

pub mod employee_repo;
pub mod employee_repo_impl;
pub mod error;

pub use employee_repo::EmployeeRepository;
pub use employee_repo_impl::EmployeeRepositoryImpl;
pub use error::{RepositoryError, RepositoryResult};
