//! Scan command implementation

use crate::config::{resolve_config, ReportFormat};
use crate::domain::{PhiScanError, ScanContext};
use crate::engine::PhiScanner;
use crate::report::ScanReport;
use anyhow::Context;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// File to scan, or "-" for stdin
    pub input: String,

    /// Scan context: code, filename, comment, data, general
    #[arg(long)]
    pub context: Option<String>,

    /// Enable strict mode (rescues borderline-confidence candidates)
    #[arg(long)]
    pub strict: bool,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// Show full matched values instead of masking them
    #[arg(long)]
    pub no_mask: bool,

    /// Also write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ScanArgs {
    /// Execute the scan command
    ///
    /// Exit codes: 0 = no PHI found, 1 = findings present,
    /// 2 = configuration error, 5 = fatal error.
    ///
    /// An explicit `config_path` must load; only the implicit default
    /// lookup falls back to built-in defaults.
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let config = match resolve_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(2);
            }
        };

        let context = match &self.context {
            Some(raw) => raw.parse::<ScanContext>()?,
            None => config.scan.default_context,
        };
        let strict_mode = self.strict || config.scan.strict_mode;
        let format = match &self.format {
            Some(raw) => raw.parse::<ReportFormat>()?,
            None => config.report.format,
        };
        let mask_values = config.report.mask_values && !self.no_mask;

        let (text, source) = self.read_input().context("Failed to read scan input")?;

        if text.len() > config.scan.max_input_bytes {
            return Err(PhiScanError::InvalidInput(format!(
                "Input is {} bytes; the configured limit is {} (scan.max_input_bytes)",
                text.len(),
                config.scan.max_input_bytes
            ))
            .into());
        }

        tracing::info!(
            source = %source,
            bytes = text.len(),
            context = %context,
            strict_mode,
            "starting scan"
        );

        let scanner = PhiScanner::new().context("Failed to build the pattern catalog")?;
        let result = scanner.scan(&text, context, strict_mode)?;
        let report = ScanReport::new(&source, result);

        match format {
            ReportFormat::Text => print!("{}", report.format_console(mask_values)),
            ReportFormat::Json => println!("{}", report.format_json()?),
        }

        if let Some(path) = &self.output {
            report
                .write_to_file(path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }

        Ok(if report.result.has_findings() { 1 } else { 0 })
    }

    fn read_input(&self) -> anyhow::Result<(String, String)> {
        if self.input == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok((buffer, "<stdin>".to_string()))
        } else {
            let text = std::fs::read_to_string(&self.input)
                .with_context(|| format!("Failed to read {}", self.input))?;
            Ok((text, self.input.clone()))
        }
    }
}
