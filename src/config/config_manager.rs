// ==========================================
// Employee Registry - configuration manager
// ==========================================
// Load, query and override settings
// Storage: config_kv table (key-value + scope)
// ==========================================

use crate::config::registry_config_trait::RegistryConfigReader;
use crate::db::configure_sqlite_connection;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Scope used for every key this crate reads
pub const GLOBAL_SCOPE: &str = "global";

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Build from an existing connection
    ///
    /// The shared PRAGMAs are applied again (idempotent) so connection behavior
    /// does not depend on who opened it.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            configure_sqlite_connection(&guard)?;
        }

        Ok(Self { conn })
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Read a global-scope value
    pub fn get_global_config_value(&self, key: &str) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = ?1 AND key = ?2",
                params![GLOBAL_SCOPE, key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    /// Insert or overwrite a global-scope value
    pub fn set_global_config_value(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?3, updated_at = datetime('now')",
            params![GLOBAL_SCOPE, key, value],
        )?;

        tracing::info!(key, value, "config value updated");
        Ok(())
    }

    /// All global-scope values as a JSON object string
    pub fn get_config_snapshot(&self) -> RepositoryResult<String> {
        let conn = self.get_conn()?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = ?1 ORDER BY key")?;

        let config_map = stmt
            .query_map(params![GLOBAL_SCOPE], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        serde_json::to_string(&json!(config_map))
            .map_err(|e| RepositoryError::InternalError(e.to_string()))
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> RepositoryResult<String> {
        Ok(self
            .get_global_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    fn get_bool_or_default(&self, key: &str, default: bool) -> RepositoryResult<bool> {
        let value = self.get_config_or_default(key, if default { "true" } else { "false" })?;
        Ok(parse_bool(&value).unwrap_or_else(|| {
            tracing::warn!(config_key = key, raw_value = %value, "invalid boolean config value, using default");
            default
        }))
    }
}

/// Accepts true/false, 1/0, yes/no (case-insensitive)
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

// ==========================================
// RegistryConfigReader implementation
// ==========================================
#[async_trait]
impl RegistryConfigReader for ConfigManager {
    async fn get_import_batch_size(&self) -> RepositoryResult<usize> {
        let value = self.get_config_or_default(
            config_keys::IMPORT_BATCH_SIZE,
            &defaults::IMPORT_BATCH_SIZE.to_string(),
        )?;

        match value.trim().parse::<usize>() {
            Ok(size) if size >= 1 => Ok(size),
            _ => {
                tracing::warn!(
                    config_key = config_keys::IMPORT_BATCH_SIZE,
                    raw_value = %value,
                    "invalid import batch size, using default"
                );
                Ok(defaults::IMPORT_BATCH_SIZE)
            }
        }
    }

    async fn get_system_actor(&self) -> RepositoryResult<String> {
        let value = self.get_config_or_default(config_keys::SYSTEM_ACTOR, defaults::SYSTEM_ACTOR)?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Ok(defaults::SYSTEM_ACTOR.to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }

    async fn get_list_empty_as_error(&self) -> RepositoryResult<bool> {
        self.get_bool_or_default(config_keys::LIST_EMPTY_AS_ERROR, defaults::LIST_EMPTY_AS_ERROR)
    }

    async fn get_departments_include_deleted(&self) -> RepositoryResult<bool> {
        self.get_bool_or_default(
            config_keys::DEPARTMENTS_INCLUDE_DELETED,
            defaults::DEPARTMENTS_INCLUDE_DELETED,
        )
    }
}

// ==========================================
// Config keys
// ==========================================
pub mod config_keys {
    // import
    pub const IMPORT_BATCH_SIZE: &str = "import_batch_size";

    // audit
    pub const SYSTEM_ACTOR: &str = "system_actor";

    // listing policies
    pub const LIST_EMPTY_AS_ERROR: &str = "list_empty_as_error";
    pub const DEPARTMENTS_INCLUDE_DELETED: &str = "departments_include_deleted";

    /// Every key accepted by `config set`
    pub const ALL: [&str; 4] = [
        IMPORT_BATCH_SIZE,
        SYSTEM_ACTOR,
        LIST_EMPTY_AS_ERROR,
        DEPARTMENTS_INCLUDE_DELETED,
    ];
}

// ==========================================
// Defaults
// ==========================================
pub mod defaults {
    pub const IMPORT_BATCH_SIZE: usize = 100;
    pub const SYSTEM_ACTOR: &str = "system";
    pub const LIST_EMPTY_AS_ERROR: bool = false;
    pub const DEPARTMENTS_INCLUDE_DELETED: bool = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;

    fn memory_manager() -> ConfigManager {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        ConfigManager::from_connection(Arc::new(Mutex::new(conn))).unwrap()
    }

    #[tokio::test]
    async fn test_defaults_when_table_is_empty() {
        let config = memory_manager();

        assert_eq!(config.get_import_batch_size().await.unwrap(), 100);
        assert_eq!(config.get_system_actor().await.unwrap(), "system");
        assert!(!config.get_list_empty_as_error().await.unwrap());
        assert!(!config.get_departments_include_deleted().await.unwrap());
    }

    #[tokio::test]
    async fn test_overrides_are_read_back() {
        let config = memory_manager();
        config.set_global_config_value(config_keys::IMPORT_BATCH_SIZE, "25").unwrap();
        config.set_global_config_value(config_keys::SYSTEM_ACTOR, "hr-bot").unwrap();
        config.set_global_config_value(config_keys::LIST_EMPTY_AS_ERROR, "TRUE").unwrap();
        config.set_global_config_value(config_keys::DEPARTMENTS_INCLUDE_DELETED, "1").unwrap();

        assert_eq!(config.get_import_batch_size().await.unwrap(), 25);
        assert_eq!(config.get_system_actor().await.unwrap(), "hr-bot");
        assert!(config.get_list_empty_as_error().await.unwrap());
        assert!(config.get_departments_include_deleted().await.unwrap());

        let snapshot: BTreeMap<String, String> =
            serde_json::from_str(&config.get_config_snapshot().unwrap()).unwrap();
        assert_eq!(snapshot.len(), 4);
    }

    #[tokio::test]
    async fn test_invalid_values_fall_back_to_defaults() {
        let config = memory_manager();
        config.set_global_config_value(config_keys::IMPORT_BATCH_SIZE, "0").unwrap();
        config.set_global_config_value(config_keys::LIST_EMPTY_AS_ERROR, "maybe").unwrap();

        assert_eq!(config.get_import_batch_size().await.unwrap(), 100);
        assert!(!config.get_list_empty_as_error().await.unwrap());
    }
}
