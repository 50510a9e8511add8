// ==========================================
// Employee Registry - core library
// ==========================================
// Stack: Rust + SQLite (rusqlite) + calamine
// Employee records with filtering, soft delete and .xlsx bulk import
// ==========================================

// ==========================================
// Modules
// ==========================================

// domain - entities and field rules
pub mod domain;

// repository - data access
pub mod repository;

// engine - filtering and aggregation
pub mod engine;

// importer - spreadsheet import pipeline
pub mod importer;

// config - settings stored in config_kv
pub mod config;

// database infrastructure (connection setup, schema)
pub mod db;

// logging
pub mod logging;

// API - business entry points
pub mod api;

// application wiring
pub mod app;

// ==========================================
// Re-exports
// ==========================================

pub use domain::{
    DepartmentCount, Employee, EmployeeDraft, EmployeeFilter, EmploymentStatus, ImportResult,
    NewEmployee,
};

pub use engine::EmployeeQueryEngine;

pub use api::{ApiError, ApiResult, EmployeeApi, ImportApi};

pub use app::AppState;

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
