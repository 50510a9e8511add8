// ==========================================
// Employee Registry - employee Repository trait
// ==========================================
// Data access only: no validation, no business rules.
// Every call is atomic on its own; callers never need a multi-call transaction.
// ==========================================

use crate::domain::employee::{Employee, NewEmployee};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;
use std::collections::HashSet;

// ==========================================
// EmployeeRepository Trait
// ==========================================
// Implemented by: EmployeeRepositoryImpl (rusqlite)
//
// "Live" below means is_deleted = false.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    // ===== reads =====

    /// All live employees, ordered by id
    async fn find_all_active(&self) -> RepositoryResult<Vec<Employee>>;

    /// Live employee by id
    ///
    /// # Returns
    /// - Ok(None) when the id is unknown or the row is soft-deleted
    async fn find_by_id(&self, employee_id: i64) -> RepositoryResult<Option<Employee>>;

    /// Live employee by email, compared case-insensitively
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Employee>>;

    /// Distinct department names
    ///
    /// # Arguments
    /// - include_deleted: also return departments only present on deleted rows
    async fn list_departments(&self, include_deleted: bool) -> RepositoryResult<Vec<String>>;

    /// Emails of all live employees, lower-cased (import dedup seed)
    async fn list_active_emails(&self) -> RepositoryResult<HashSet<String>>;

    // ===== writes =====

    /// Insert one employee
    ///
    /// # Returns
    /// - Ok(i64): the assigned employee_id
    async fn insert(&self, employee: NewEmployee) -> RepositoryResult<i64>;

    /// Insert a batch of employees in one transaction
    ///
    /// # Returns
    /// - Ok(usize): rows written
    /// - Err: nothing from this batch is written
    async fn insert_batch(&self, employees: Vec<NewEmployee>) -> RepositoryResult<usize>;

    /// Overwrite the mutable fields of a live employee
    async fn update(&self, employee: &Employee) -> RepositoryResult<()>;

    /// Set is_deleted = true and stamp updated_at / updated_by
    async fn mark_deleted(&self, employee: &Employee) -> RepositoryResult<()>;
}
