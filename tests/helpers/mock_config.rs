// ==========================================
// Mock settings reader for integration tests
// ==========================================

use async_trait::async_trait;
use employee_registry::config::{defaults, RegistryConfigReader};
use employee_registry::repository::RepositoryResult;

#[derive(Debug, Clone)]
pub struct MockConfig {
    pub import_batch_size: usize,
    pub system_actor: String,
    pub list_empty_as_error: bool,
    pub departments_include_deleted: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            import_batch_size: defaults::IMPORT_BATCH_SIZE,
            system_actor: defaults::SYSTEM_ACTOR.to_string(),
            list_empty_as_error: defaults::LIST_EMPTY_AS_ERROR,
            departments_include_deleted: defaults::DEPARTMENTS_INCLUDE_DELETED,
        }
    }
}

impl MockConfig {
    pub fn with_batch_size(size: usize) -> Self {
        Self {
            import_batch_size: size,
            ..Self::default()
        }
    }

    pub fn empty_list_is_error() -> Self {
        Self {
            list_empty_as_error: true,
            ..Self::default()
        }
    }

    pub fn departments_with_deleted() -> Self {
        Self {
            departments_include_deleted: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl RegistryConfigReader for MockConfig {
    async fn get_import_batch_size(&self) -> RepositoryResult<usize> {
        Ok(self.import_batch_size)
    }

    async fn get_system_actor(&self) -> RepositoryResult<String> {
        Ok(self.system_actor.clone())
    }

    async fn get_list_empty_as_error(&self) -> RepositoryResult<bool> {
        Ok(self.list_empty_as_error)
    }

    async fn get_departments_include_deleted(&self) -> RepositoryResult<bool> {
        Ok(self.departments_include_deleted)
    }
}
