// ==========================================
// Employee Registry - employee Repository (rusqlite)
// ==========================================
// Data access only: no validation, no business rules.
// ==========================================

use crate::domain::employee::{email_key, Employee, NewEmployee};
use crate::repository::employee_repo::EmployeeRepository;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

const SELECT_COLUMNS: &str = r#"
    SELECT
        employee_id, name, department, email, is_active, is_deleted,
        created_at, created_by, updated_at, updated_by
    FROM employee
"#;

// ==========================================
// EmployeeRepositoryImpl
// ==========================================
pub struct EmployeeRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl EmployeeRepositoryImpl {
    /// Build from a shared connection (schema is assumed initialized)
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn insert_tx(tx: &Transaction, employees: &[NewEmployee]) -> RepositoryResult<usize> {
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO employee (
                name, department, email, email_key, is_active, is_deleted,
                created_at, created_by, updated_at, updated_by
            ) VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7, ?8, ?9)
            "#,
        )?;

        let mut count = 0;
        for employee in employees {
            stmt.execute(params![
                employee.name,
                employee.department,
                employee.email,
                email_key(&employee.email),
                employee.is_active as i32,
                employee.created_at.to_rfc3339(),
                employee.created_by,
                employee.updated_at.to_rfc3339(),
                employee.updated_by,
            ])?;
            count += 1;
        }

        Ok(count)
    }
}

fn parse_timestamp(raw: &str, field: &str) -> RepositoryResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::FieldValueError {
            field: field.to_string(),
            message: format!("{raw}: {e}"),
        })
}

/// Raw row as stored; timestamps are parsed after the rusqlite closure returns.
struct EmployeeRow {
    employee_id: i64,
    name: String,
    department: String,
    email: String,
    is_active: bool,
    is_deleted: bool,
    created_at: String,
    created_by: String,
    updated_at: String,
    updated_by: String,
}

impl EmployeeRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            employee_id: row.get(0)?,
            name: row.get(1)?,
            department: row.get(2)?,
            email: row.get(3)?,
            is_active: row.get::<_, i32>(4)? != 0,
            is_deleted: row.get::<_, i32>(5)? != 0,
            created_at: row.get(6)?,
            created_by: row.get(7)?,
            updated_at: row.get(8)?,
            updated_by: row.get(9)?,
        })
    }

    fn into_employee(self) -> RepositoryResult<Employee> {
        Ok(Employee {
            employee_id: self.employee_id,
            name: self.name,
            department: self.department,
            email: self.email,
            is_active: self.is_active,
            is_deleted: self.is_deleted,
            created_at: parse_timestamp(&self.created_at, "created_at")?,
            created_by: self.created_by,
            updated_at: parse_timestamp(&self.updated_at, "updated_at")?,
            updated_by: self.updated_by,
        })
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeRepositoryImpl {
    async fn find_all_active(&self) -> RepositoryResult<Vec<Employee>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLUMNS} WHERE is_deleted = 0 ORDER BY employee_id"
        ))?;

        let rows = stmt
            .query_map([], EmployeeRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(EmployeeRow::into_employee).collect()
    }

    async fn find_by_id(&self, employee_id: i64) -> RepositoryResult<Option<Employee>> {
        let conn = self.get_conn()?;
        let row = conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE employee_id = ?1 AND is_deleted = 0"),
                params![employee_id],
                EmployeeRow::from_row,
            )
            .optional()?;

        row.map(EmployeeRow::into_employee).transpose()
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Employee>> {
        let conn = self.get_conn()?;
        let row = conn
            .query_row(
                &format!(
                    "{SELECT_COLUMNS} WHERE email_key = ?1 AND is_deleted = 0 LIMIT 1"
                ),
                params![email_key(email)],
                EmployeeRow::from_row,
            )
            .optional()?;

        row.map(EmployeeRow::into_employee).transpose()
    }

    async fn list_departments(&self, include_deleted: bool) -> RepositoryResult<Vec<String>> {
        let conn = self.get_conn()?;
        let sql = if include_deleted {
            "SELECT DISTINCT department FROM employee ORDER BY department"
        } else {
            "SELECT DISTINCT department FROM employee WHERE is_deleted = 0 ORDER BY department"
        };

        let mut stmt = conn.prepare(sql)?;
        let departments = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(departments)
    }

    async fn list_active_emails(&self) -> RepositoryResult<HashSet<String>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT email_key FROM employee WHERE is_deleted = 0")?;

        let emails = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(emails)
    }

    async fn insert(&self, employee: NewEmployee) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        Self::insert_tx(&tx, std::slice::from_ref(&employee))?;
        let employee_id = tx.last_insert_rowid();

        tx.commit()?;
        Ok(employee_id)
    }

    async fn insert_batch(&self, employees: Vec<NewEmployee>) -> RepositoryResult<usize> {
        if employees.is_empty() {
            return Ok(0);
        }

        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let count = Self::insert_tx(&tx, &employees)?;

        tx.commit()?;
        Ok(count)
    }

    async fn update(&self, employee: &Employee) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            UPDATE employee
            SET name = ?1, department = ?2, email = ?3, email_key = ?4, is_active = ?5,
                updated_at = ?6, updated_by = ?7
            WHERE employee_id = ?8 AND is_deleted = 0
            "#,
            params![
                employee.name,
                employee.department,
                employee.email,
                email_key(&employee.email),
                employee.is_active as i32,
                employee.updated_at.to_rfc3339(),
                employee.updated_by,
                employee.employee_id,
            ],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Employee".to_string(),
                id: employee.employee_id.to_string(),
            });
        }
        Ok(())
    }

    async fn mark_deleted(&self, employee: &Employee) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            UPDATE employee
            SET is_deleted = 1, updated_at = ?1, updated_by = ?2
            WHERE employee_id = ?3 AND is_deleted = 0
            "#,
            params![
                employee.updated_at.to_rfc3339(),
                employee.updated_by,
                employee.employee_id,
            ],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Employee".to_string(),
                id: employee.employee_id.to_string(),
            });
        }
        Ok(())
    }
}
