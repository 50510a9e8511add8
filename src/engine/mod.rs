// ==========================================
// Employee Registry - engine layer
// ==========================================
// Filtering and aggregation over loaded records
// Rule: engines never build SQL
// ==========================================

pub mod employee_query;

pub use employee_query::EmployeeQueryEngine;
