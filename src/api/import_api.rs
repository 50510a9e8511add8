// ==========================================
// Employee Registry - import API
// ==========================================
// Wraps the employee importer for callers holding an upload
// ==========================================

use std::sync::Arc;

use tracing::warn;

use crate::api::error::ApiResult;
use crate::config::RegistryConfigReader;
use crate::domain::employee::ImportResult;
use crate::importer::{EmployeeImporter, EmployeeImporterImpl};
use crate::repository::EmployeeRepository;

pub struct ImportApi {
    importer: Box<dyn EmployeeImporter>,
}

impl ImportApi {
    /// Excel importer over the given store and settings
    pub fn new(repo: Arc<dyn EmployeeRepository>, config: Arc<dyn RegistryConfigReader>) -> Self {
        Self::with_importer(Box::new(EmployeeImporterImpl::with_excel(repo, config)))
    }

    pub fn with_importer(importer: Box<dyn EmployeeImporter>) -> Self {
        Self { importer }
    }

    /// Import employees from an uploaded spreadsheet
    ///
    /// # Arguments
    /// - bytes: file content
    /// - file_name: original name, used for the extension check
    /// - actor: written to the audit fields of every accepted row
    ///
    /// # Returns
    /// - Ok(ImportResult): accepted count and per-row errors
    /// - Err(InvalidInput): empty payload, wrong extension, unreadable workbook
    ///   or missing required column
    pub async fn import(&self, bytes: &[u8], file_name: &str, actor: &str) -> ApiResult<ImportResult> {
        self.importer
            .import(bytes, file_name, actor)
            .await
            .map_err(|e| {
                warn!(file_name, error = %e, "import failed");
                e.into()
            })
    }
}
