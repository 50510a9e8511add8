// ==========================================
// Employee Registry - employee API
// ==========================================
// Listing, lookup, create / update / soft delete, department views
// Persistence only through EmployeeRepository
// ==========================================

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::validate_employee_draft;
use crate::config::RegistryConfigReader;
use crate::domain::employee::{email_key, DepartmentCount, Employee, EmployeeDraft, NewEmployee};
use crate::domain::types::EmployeeFilter;
use crate::engine::EmployeeQueryEngine;
use crate::repository::EmployeeRepository;

// ==========================================
// EmployeeApi
// ==========================================
pub struct EmployeeApi {
    repo: Arc<dyn EmployeeRepository>,
    config: Arc<dyn RegistryConfigReader>,
    query_engine: EmployeeQueryEngine,
}

impl EmployeeApi {
    /// # Arguments
    /// - repo: record store
    /// - config: listing policies
    pub fn new(repo: Arc<dyn EmployeeRepository>, config: Arc<dyn RegistryConfigReader>) -> Self {
        Self {
            repo,
            config,
            query_engine: EmployeeQueryEngine::new(),
        }
    }

    // ==========================================
    // Queries
    // ==========================================

    /// Non-deleted employees matching every supplied filter
    ///
    /// Blank filter values are ignored. An empty match is an empty list unless
    /// `list_empty_as_error` is set, in which case it is `EmptyResult`.
    pub async fn list_employees(
        &self,
        department: Option<&str>,
        status: Option<&str>,
        search: Option<&str>,
    ) -> ApiResult<Vec<Employee>> {
        let filter = EmployeeFilter::from_raw(department, status, search);
        let employees = self.repo.find_all_active().await?;
        let matched = self.query_engine.filter(employees, &filter);

        debug!(?filter, matched = matched.len(), "employees listed");

        if matched.is_empty() && self.config.get_list_empty_as_error().await? {
            return Err(ApiError::EmptyResult);
        }
        Ok(matched)
    }

    pub async fn get_by_id(&self, employee_id: i64) -> ApiResult<Employee> {
        self.require_employee(employee_id).await
    }

    /// Distinct department names, sorted
    ///
    /// Whether deleted employees contribute is set by `departments_include_deleted`.
    pub async fn list_departments(&self) -> ApiResult<Vec<String>> {
        let include_deleted = self.config.get_departments_include_deleted().await?;
        Ok(self.repo.list_departments(include_deleted).await?)
    }

    /// Non-deleted head count per department, case-sensitive buckets
    pub async fn department_counts(&self) -> ApiResult<Vec<DepartmentCount>> {
        let employees = self.repo.find_all_active().await?;
        Ok(self.query_engine.count_by_department(&employees))
    }

    // ==========================================
    // Commands
    // ==========================================

    /// Create an employee
    ///
    /// # Returns
    /// - Ok(i64): the new employee id
    /// - Err(InvalidInput): a field rule failed
    /// - Err(Conflict): a non-deleted employee already uses the email (any case)
    pub async fn create(&self, draft: EmployeeDraft, actor: &str) -> ApiResult<i64> {
        validate_employee_draft(&draft)?;
        self.ensure_email_free(draft.email.trim(), None).await?;

        let record = NewEmployee::from_draft(&draft, actor, Utc::now());
        let employee_id = self.repo.insert(record).await?;

        info!(employee_id, actor, "employee created");
        Ok(employee_id)
    }

    /// Overwrite every mutable field of a non-deleted employee
    ///
    /// The uniqueness check only runs when the email changes (ignoring case).
    pub async fn update(&self, employee_id: i64, draft: EmployeeDraft, actor: &str) -> ApiResult<bool> {
        let mut employee = self.require_employee(employee_id).await?;
        validate_employee_draft(&draft)?;

        let new_email = draft.email.trim();
        if email_key(&employee.email) != email_key(new_email) {
            self.ensure_email_free(new_email, Some(employee_id)).await?;
        }

        employee.apply_draft(&draft, actor, Utc::now());
        self.repo.update(&employee).await?;

        info!(employee_id, actor, "employee updated");
        Ok(true)
    }

    /// Soft delete: the row stays stored with is_deleted set
    pub async fn delete(&self, employee_id: i64, actor: &str) -> ApiResult<bool> {
        let mut employee = self.require_employee(employee_id).await?;

        employee.touch(actor, Utc::now());
        self.repo.mark_deleted(&employee).await?;

        info!(employee_id, actor, "employee deleted");
        Ok(true)
    }

    // ==========================================
    // Helpers
    // ==========================================

    async fn require_employee(&self, employee_id: i64) -> ApiResult<Employee> {
        self.repo
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Employee with id {employee_id} was not found")))
    }

    async fn ensure_email_free(&self, email: &str, owner: Option<i64>) -> ApiResult<()> {
        match self.repo.find_by_email(email).await? {
            Some(existing) if Some(existing.employee_id) != owner => {
                warn!(email, existing_id = existing.employee_id, "email already in use");
                Err(ApiError::Conflict(format!("Email '{email}' already exists")))
            }
            _ => Ok(()),
        }
    }
}
