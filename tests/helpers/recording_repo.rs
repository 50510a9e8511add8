// ==========================================
// Recording repository wrapper
// ==========================================
// Delegates to a real repository and records the calls tests assert on
// ==========================================

use async_trait::async_trait;
use employee_registry::domain::{Employee, NewEmployee};
use employee_registry::repository::{EmployeeRepository, RepositoryError, RepositoryResult};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct RecordingRepository {
    inner: Arc<dyn EmployeeRepository>,
    batch_sizes: Mutex<Vec<usize>>,
    find_by_email_calls: AtomicUsize,
    /// 1-based insert_batch call that fails instead of writing
    fail_on_batch: Option<usize>,
}

impl RecordingRepository {
    pub fn new(inner: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            inner,
            batch_sizes: Mutex::new(Vec::new()),
            find_by_email_calls: AtomicUsize::new(0),
            fail_on_batch: None,
        }
    }

    pub fn failing_on_batch(inner: Arc<dyn EmployeeRepository>, batch: usize) -> Self {
        Self {
            fail_on_batch: Some(batch),
            ..Self::new(inner)
        }
    }

    /// Sizes of every insert_batch call, failed ones included
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batch_sizes.lock().unwrap().clone()
    }

    pub fn find_by_email_calls(&self) -> usize {
        self.find_by_email_calls.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.batch_sizes.lock().unwrap().clear();
        self.find_by_email_calls.store(0, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmployeeRepository for RecordingRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<Employee>> {
        self.inner.find_all_active().await
    }

    async fn find_by_id(&self, employee_id: i64) -> RepositoryResult<Option<Employee>> {
        self.inner.find_by_id(employee_id).await
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Employee>> {
        self.find_by_email_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_email(email).await
    }

    async fn list_departments(&self, include_deleted: bool) -> RepositoryResult<Vec<String>> {
        self.inner.list_departments(include_deleted).await
    }

    async fn list_active_emails(&self) -> RepositoryResult<HashSet<String>> {
        self.inner.list_active_emails().await
    }

    async fn insert(&self, employee: NewEmployee) -> RepositoryResult<i64> {
        self.inner.insert(employee).await
    }

    async fn insert_batch(&self, employees: Vec<NewEmployee>) -> RepositoryResult<usize> {
        let call = {
            let mut sizes = self.batch_sizes.lock().unwrap();
            sizes.push(employees.len());
            sizes.len()
        };

        if self.fail_on_batch == Some(call) {
            return Err(RepositoryError::DatabaseQueryError("disk I/O error".to_string()));
        }
        self.inner.insert_batch(employees).await
    }

    async fn update(&self, employee: &Employee) -> RepositoryResult<()> {
        self.inner.update(employee).await
    }

    async fn mark_deleted(&self, employee: &Employee) -> RepositoryResult<()> {
        self.inner.mark_deleted(employee).await
    }
}
