//! Validate config command implementation

use crate::config::{load_config, DEFAULT_CONFIG_FILE};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let config_path = config_path.unwrap_or(DEFAULT_CONFIG_FILE);
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Application:     {}", config.application.name);
                println!("  Log Level:       {}", config.application.log_level);
                println!("  Default Context: {}", config.scan.default_context);
                println!("  Strict Mode:     {}", config.scan.strict_mode);
                println!("  Max Input:       {} bytes", config.scan.max_input_bytes);
                println!("  Report Format:   {:?}", config.report.format);
                println!("  Mask Values:     {}", config.report.mask_values);
                println!("  File Logging:    {}", config.logging.local_enabled);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}
