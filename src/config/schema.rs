//! Configuration schema

use crate::domain::{PhiScanError, Result, ScanContext};
use serde::{Deserialize, Serialize};

/// Top-level phiscan configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhiScanConfig {
    /// Application settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Scan behaviour
    #[serde(default)]
    pub scan: ScanConfig,

    /// Report rendering
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PhiScanConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.scan.validate()?;
        self.report.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in log output
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_app_name() -> String {
    "phiscan".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// Scan behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Context assumed when the caller doesn't pass `--context`
    #[serde(default)]
    pub default_context: ScanContext,

    /// Enable strict mode by default
    #[serde(default)]
    pub strict_mode: bool,

    /// Inputs larger than this are rejected before scanning
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

fn default_max_input_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_context: ScanContext::General,
            strict_mode: false,
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl ScanConfig {
    fn validate(&self) -> Result<()> {
        if self.max_input_bytes == 0 {
            return Err(PhiScanError::Configuration(
                "scan.max_input_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Console-friendly text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Default for ReportFormat {
    fn default() -> Self {
        ReportFormat::Text
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = PhiScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(PhiScanError::Configuration(format!(
                "Unknown report format: {other}"
            ))),
        }
    }
}

/// Report rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format
    #[serde(default)]
    pub format: ReportFormat,

    /// Mask matched values in console output
    #[serde(default = "default_mask_values")]
    pub mask_values: bool,
}

fn default_mask_values() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            mask_values: default_mask_values(),
        }
    }
}

impl ReportConfig {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: daily or hourly
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(PhiScanError::Configuration(format!(
                "Unknown log rotation policy: {other}"
            ))),
        }
    }
}
