// ==========================================
// Employee Registry - query/filter engine
// ==========================================
// Input: live employees (already loaded by the repository)
// Output: filtered list / department aggregates
// Rule: the engine never builds SQL
// ==========================================

use crate::domain::employee::{DepartmentCount, Employee};
use crate::domain::types::EmployeeFilter;
use std::collections::BTreeMap;
use tracing::instrument;

// ==========================================
// EmployeeQueryEngine
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct EmployeeQueryEngine;

impl EmployeeQueryEngine {
    pub fn new() -> Self {
        Self
    }

    /// Apply the filter to `employees`, keeping input order.
    ///
    /// - department: case-insensitive exact match
    /// - status: Active / Inactive against is_active
    /// - search: case-insensitive substring of name
    ///
    /// Soft-deleted rows are always dropped, whatever the caller passes in.
    #[instrument(skip(self, employees), fields(input = employees.len()))]
    pub fn filter(&self, employees: Vec<Employee>, filter: &EmployeeFilter) -> Vec<Employee> {
        let department = filter.department.as_deref().map(str::to_lowercase);
        let search = filter.search.as_deref().map(str::to_lowercase);

        employees
            .into_iter()
            .filter(|e| !e.is_deleted)
            .filter(|e| {
                department
                    .as_deref()
                    .map_or(true, |d| e.department.to_lowercase() == d)
            })
            .filter(|e| filter.status.map_or(true, |s| s.matches(e.is_active)))
            .filter(|e| {
                search
                    .as_deref()
                    .map_or(true, |s| e.name.to_lowercase().contains(s))
            })
            .collect()
    }

    /// Count live employees per department.
    ///
    /// Department names are bucketed as stored ("Eng" and "eng" are two
    /// buckets). Output is sorted by department name.
    pub fn count_by_department(&self, employees: &[Employee]) -> Vec<DepartmentCount> {
        let mut buckets: BTreeMap<&str, usize> = BTreeMap::new();
        for employee in employees.iter().filter(|e| !e.is_deleted) {
            *buckets.entry(employee.department.as_str()).or_insert(0) += 1;
        }

        buckets
            .into_iter()
            .map(|(department, total_employees)| DepartmentCount {
                department: department.to_string(),
                total_employees,
            })
            .collect()
    }
}
