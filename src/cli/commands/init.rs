//! Init command implementation
//!
//! Writes a starter `phiscan.toml` with documented defaults.

use clap::Args;
use std::path::PathBuf;

const TEMPLATE: &str = r#"# phiscan configuration

[application]
name = "phiscan"
# trace, debug, info, warn, error
log_level = "info"

[scan]
# Context assumed when --context is not passed:
# code, filename, comment, data, general
default_context = "general"
# Strict mode rescues borderline-confidence candidates
strict_mode = false
# Inputs larger than this are rejected before scanning
max_input_bytes = 10485760

[report]
# text or json
format = "text"
# Mask matched values in console output
mask_values = true

[logging]
local_enabled = false
local_path = "./logs"
# daily or hourly
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the configuration file
    #[arg(short, long, default_value = "phiscan.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        if self.output.exists() && !self.force {
            println!(
                "❌ {} already exists (use --force to overwrite)",
                self.output.display()
            );
            return Ok(2);
        }

        std::fs::write(&self.output, TEMPLATE)?;
        println!("✅ Wrote starter configuration to {}", self.output.display());
        Ok(0)
    }
}
