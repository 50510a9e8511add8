// ==========================================
// API integration-test environment
// ==========================================
// Real SQLite store in a temp file, wrapped by RecordingRepository
// ==========================================

use std::sync::Arc;

use employee_registry::api::{EmployeeApi, ImportApi};
use employee_registry::importer::{
    EmployeeImporterImpl, ExcelParser, FieldMapperImpl, FileParser, ImportOutcome, RawSheet, RowValidatorImpl,
};
use employee_registry::repository::{EmployeeRepository, EmployeeRepositoryImpl};
use tempfile::NamedTempFile;

use super::mock_config::MockConfig;
use super::recording_repo::RecordingRepository;
use crate::test_helpers::{create_test_db, open_shared_connection};

pub struct ApiTestEnv {
    pub _temp_file: NamedTempFile,
    pub db_path: String,
    pub repo: Arc<RecordingRepository>,
    pub config: Arc<MockConfig>,
    pub employee_api: EmployeeApi,
    pub import_api: ImportApi,
}

impl ApiTestEnv {
    pub fn new() -> Self {
        Self::with_config(MockConfig::default())
    }

    pub fn with_config(config: MockConfig) -> Self {
        Self::build(config, None)
    }

    /// Store whose `batch`-th insert_batch call fails
    pub fn failing_on_batch(config: MockConfig, batch: usize) -> Self {
        Self::build(config, Some(batch))
    }

    fn build(config: MockConfig, fail_on_batch: Option<usize>) -> Self {
        let (temp_file, db_path) = create_test_db().expect("create test db");
        let conn = open_shared_connection(&db_path).expect("open test db");

        let inner: Arc<dyn EmployeeRepository> =
            Arc::new(EmployeeRepositoryImpl::from_connection(conn));
        let repo = Arc::new(match fail_on_batch {
            Some(batch) => RecordingRepository::failing_on_batch(inner, batch),
            None => RecordingRepository::new(inner),
        });
        let config = Arc::new(config);

        let employee_api = EmployeeApi::new(repo.clone(), config.clone());
        let import_api = ImportApi::new(repo.clone(), config.clone());

        Self {
            _temp_file: temp_file,
            db_path,
            repo,
            config,
            employee_api,
            import_api,
        }
    }

    /// Import API whose parser serves the given header and rows instead of reading bytes
    pub fn sheet_import_api(&self, header: Vec<String>, rows: Vec<Vec<String>>) -> ImportApi {
        let importer = EmployeeImporterImpl::new(
            self.repo.clone(),
            self.config.clone(),
            Box::new(StaticSheetParser { header, rows }),
            Box::new(FieldMapperImpl),
            Box::new(RowValidatorImpl),
        );
        ImportApi::with_importer(Box::new(importer))
    }
}

// ==========================================
// StaticSheetParser
// ==========================================

/// Same extension rule as ExcelParser, but returns a fixed sheet
pub struct StaticSheetParser {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl FileParser for StaticSheetParser {
    fn supports(&self, file_name: &str) -> bool {
        ExcelParser.supports(file_name)
    }

    fn parse(&self, _bytes: &[u8]) -> ImportOutcome<RawSheet> {
        Ok(RawSheet::from_rows(self.header.clone(), self.rows.clone()))
    }
}
