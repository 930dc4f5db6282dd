//! Configuration management
//!
//! TOML configuration with `${VAR}` substitution and `PHISCAN_*` environment
//! overrides.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_or_default, resolve_config, DEFAULT_CONFIG_FILE};
pub use schema::{
    ApplicationConfig, LoggingConfig, PhiScanConfig, ReportConfig, ReportFormat, ScanConfig,
};
