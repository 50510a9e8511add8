// ==========================================
// Employee Registry - logging
// ==========================================
// tracing-subscriber on stderr; stdout carries command output only
// RUST_LOG picks the filter, EMPLOYEE_REGISTRY_LOG_FORMAT the line format
// ==========================================

use std::error::Error;

use tracing_subscriber::{fmt, EnvFilter};

/// Selects plain or JSON log lines
pub const LOG_FORMAT_ENV: &str = "EMPLOYEE_REGISTRY_LOG_FORMAT";

/// Filter used when RUST_LOG is unset or unparsable
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    /// One JSON object per event, for log shippers
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; anything else is plain
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Plain,
        }
    }

    fn from_env() -> Self {
        Self::from_env_value(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }
}

/// Install the global subscriber for the CLI
///
/// # Environment
/// - RUST_LOG: e.g. `debug` or `employee_registry::importer=trace`
/// - EMPLOYEE_REGISTRY_LOG_FORMAT: `json` for structured lines
pub fn init() -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    match LogFormat::from_env() {
        LogFormat::Plain => builder.try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    }
}

/// Debug-level subscriber captured per test; repeated calls are no-ops
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
