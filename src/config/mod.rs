// ==========================================
// Employee Registry - configuration layer
// ==========================================
// System settings with scope-based overrides
// Storage: config_kv table
// ==========================================

pub mod config_manager;
pub mod registry_config_trait;

pub use config_manager::{config_keys, defaults, ConfigManager};
pub use registry_config_trait::RegistryConfigReader;
