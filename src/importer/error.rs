// ==========================================
// Employee Registry - import error type
// ==========================================
// Structural failures only: a rejected row is data, not an error
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    // ===== payload =====
    #[error("Please upload a valid Excel file")]
    EmptyFile,

    #[error("Invalid file type. Please upload an .xlsx file")]
    UnsupportedFormat(String),

    // ===== workbook =====
    #[error("Failed to read Excel file: {0}")]
    ExcelParseError(String),

    #[error("Excel file has no worksheets")]
    NoWorksheet,

    #[error("Excel worksheet is empty")]
    EmptyWorksheet,

    // ===== header =====
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    // ===== store =====
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result alias for the import pipeline
pub type ImportOutcome<T> = Result<T, ImportError>;
