// ==========================================
// Employee Registry - employee importer
// ==========================================
// Flow: extension check -> parse -> header map -> per-row validate
//       -> duplicate check -> batched insert
// Rejected rows are collected as messages; only structural failures abort.
// ==========================================

use crate::config::RegistryConfigReader;
use crate::domain::employee::{email_key, ImportResult, NewEmployee};
use crate::importer::employee_importer_trait::{
    EmployeeImporter, FieldMapper, FileParser, RowValidator,
};
use crate::importer::error::{ImportError, ImportOutcome};
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::file_parser::ExcelParser;
use crate::importer::row_validator::{duplicate_email_message, RowValidator as RowValidatorImpl};
use crate::repository::EmployeeRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// EmployeeImporterImpl
// ==========================================
pub struct EmployeeImporterImpl {
    // data access
    repo: Arc<dyn EmployeeRepository>,

    // settings (batch size)
    config: Arc<dyn RegistryConfigReader>,

    // pipeline components
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    row_validator: Box<dyn RowValidator>,
}

impl EmployeeImporterImpl {
    /// Build an importer from explicit components
    ///
    /// # Arguments
    /// - repo: record store
    /// - config: settings reader
    /// - file_parser: payload -> worksheet
    /// - field_mapper: header/row mapping
    /// - row_validator: per-row field rules
    pub fn new(
        repo: Arc<dyn EmployeeRepository>,
        config: Arc<dyn RegistryConfigReader>,
        file_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        row_validator: Box<dyn RowValidator>,
    ) -> Self {
        Self {
            repo,
            config,
            file_parser,
            field_mapper,
            row_validator,
        }
    }

    /// Excel parser with the standard mapper and validator
    pub fn with_excel(
        repo: Arc<dyn EmployeeRepository>,
        config: Arc<dyn RegistryConfigReader>,
    ) -> Self {
        Self::new(
            repo,
            config,
            Box::new(ExcelParser),
            Box::new(FieldMapperImpl),
            Box::new(RowValidatorImpl),
        )
    }

    /// Write the pending records with one insert-many call and start a new batch
    async fn flush(
        &self,
        pending: &mut Vec<NewEmployee>,
        batch_size: usize,
        batch_id: &str,
    ) -> ImportOutcome<usize> {
        let batch = std::mem::replace(pending, Vec::with_capacity(batch_size));
        let size = batch.len();

        let written = self.repo.insert_batch(batch).await.map_err(|e| {
            error!(batch_id, size, error = %e, "batch insert failed");
            ImportError::from(e)
        })?;

        debug!(batch_id, written, "batch flushed");
        Ok(written)
    }
}

#[async_trait]
impl EmployeeImporter for EmployeeImporterImpl {
    #[instrument(skip(self, bytes), fields(size = bytes.len(), batch_id))]
    async fn import(
        &self,
        bytes: &[u8],
        file_name: &str,
        actor: &str,
    ) -> ImportOutcome<ImportResult> {
        let started = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        // === step 1: payload checks ===
        if bytes.is_empty() {
            warn!("empty upload rejected");
            return Err(ImportError::EmptyFile);
        }
        if !self.file_parser.supports(file_name) {
            warn!("unsupported file type rejected");
            return Err(ImportError::UnsupportedFormat(file_name.to_string()));
        }

        // === step 2: worksheet + header ===
        let sheet = self.file_parser.parse(bytes)?;
        let columns = self.field_mapper.map_header(&sheet.header).map_err(|e| {
            warn!(error = %e, "header rejected");
            e
        })?;
        debug!(?columns, "header mapped");

        // === step 3: dedup seed ===
        let batch_size = self.config.get_import_batch_size().await?.max(1);
        let mut seen_emails = self.repo.list_active_emails().await?;
        debug!(batch_size, existing = seen_emails.len(), "import state ready");

        // === step 4: rows ===
        let now = Utc::now();
        let mut result = ImportResult::default();
        let mut pending: Vec<NewEmployee> = Vec::with_capacity(batch_size);
        let mut batches = 0usize;

        for raw in sheet.rows {
            let row = self.field_mapper.map_row(&columns, &raw);

            let draft = match self.row_validator.validate(&row) {
                Ok(draft) => draft,
                Err(message) => {
                    warn!(row_number = row.row_number, reason = %message, "row rejected");
                    result.errors.push(message);
                    continue;
                }
            };

            if !seen_emails.insert(email_key(&draft.email)) {
                let message = duplicate_email_message(row.row_number, &draft.email);
                warn!(row_number = row.row_number, reason = %message, "row rejected");
                result.errors.push(message);
                continue;
            }

            pending.push(NewEmployee::from_draft(&draft, actor, now));
            result.success_count += 1;

            if pending.len() >= batch_size {
                self.flush(&mut pending, batch_size, &batch_id).await?;
                batches += 1;
            }
        }

        if !pending.is_empty() {
            self.flush(&mut pending, batch_size, &batch_id).await?;
            batches += 1;
        }

        info!(
            batch_id = %batch_id,
            accepted = result.success_count,
            rejected = result.errors.len(),
            batches,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "employee import finished"
        );

        Ok(result)
    }
}
