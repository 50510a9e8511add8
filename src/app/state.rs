// ==========================================
// Employee Registry - application state
// ==========================================
// Shared connection, settings and API instances
// ==========================================

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::api::{EmployeeApi, ImportApi};
use crate::config::ConfigManager;
use crate::db::{check_schema_version, init_schema, open_sqlite_connection};
use crate::repository::error::RepositoryResult;
use crate::repository::{EmployeeRepository, EmployeeRepositoryImpl};

/// Environment variable that overrides the database location
pub const DB_PATH_ENV: &str = "EMPLOYEE_REGISTRY_DB_PATH";

const DB_FILE_NAME: &str = "employee_registry.db";
const DATA_DIR_NAME: &str = "employee-registry";

/// Application state
///
/// Every component shares one SQLite connection.
pub struct AppState {
    pub db_path: String,

    /// Settings store, also used by `config set`
    pub config_manager: Arc<ConfigManager>,

    pub employee_api: Arc<EmployeeApi>,

    pub import_api: Arc<ImportApi>,
}

impl AppState {
    /// Open the database, create the schema if needed and wire the APIs
    ///
    /// # Arguments
    /// - db_path: SQLite file path (`:memory:` works too)
    pub fn new(db_path: String) -> RepositoryResult<Self> {
        tracing::info!(db_path = %db_path, "initializing application state");

        let conn = open_sqlite_connection(&db_path)?;
        check_schema_version(&conn)?;
        init_schema(&conn)?;
        let conn = Arc::new(Mutex::new(conn));

        let config_manager = Arc::new(ConfigManager::from_connection(conn.clone())?);
        let employee_repo: Arc<dyn EmployeeRepository> =
            Arc::new(EmployeeRepositoryImpl::from_connection(conn));

        let employee_api = Arc::new(EmployeeApi::new(
            employee_repo.clone(),
            config_manager.clone(),
        ));
        let import_api = Arc::new(ImportApi::new(employee_repo, config_manager.clone()));

        Ok(Self {
            db_path,
            config_manager,
            employee_api,
            import_api,
        })
    }
}

/// Resolve the database path
///
/// 1. `EMPLOYEE_REGISTRY_DB_PATH` when set and non-blank
/// 2. `<data dir>/employee-registry/employee_registry.db`
/// 3. `./employee_registry.db`
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from(".").join(DB_FILE_NAME);

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join(DATA_DIR_NAME);
        match std::fs::create_dir_all(&dir) {
            Ok(()) => path = dir.join(DB_FILE_NAME),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "data directory unavailable, using working directory");
            }
        }
    }

    path.to_string_lossy().to_string()
}
