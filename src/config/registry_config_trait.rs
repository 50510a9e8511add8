// ==========================================
// Employee Registry - configuration reader trait
// ==========================================
// Read-only view of the settings the API layer depends on.
// No writes, no business logic.
// ==========================================

use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// RegistryConfigReader Trait
// ==========================================
// Implemented by: ConfigManager (config_kv table)
#[async_trait]
pub trait RegistryConfigReader: Send + Sync {
    /// Rows per insert call during bulk import
    ///
    /// # Default
    /// - 100
    async fn get_import_batch_size(&self) -> RepositoryResult<usize>;

    /// Actor recorded when the caller does not name one
    ///
    /// # Default
    /// - "system"
    async fn get_system_actor(&self) -> RepositoryResult<String>;

    /// Whether an empty filtered listing is reported as EmptyResult
    ///
    /// # Default
    /// - false (an empty list is returned)
    async fn get_list_empty_as_error(&self) -> RepositoryResult<bool>;

    /// Whether the department listing includes departments that only appear
    /// on deleted employees
    ///
    /// # Default
    /// - false
    async fn get_departments_include_deleted(&self) -> RepositoryResult<bool>;
}
