// ==========================================
// Employee Registry - application layer
// ==========================================
// Wiring between the front end and the API layer
// ==========================================

pub mod state;

pub use state::{get_default_db_path, AppState, DB_PATH_ENV};
