//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PhiScanConfig;
use crate::domain::errors::PhiScanError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`PhiScanConfig`]
/// 4. Applies environment variable overrides (`PHISCAN_*` prefix)
/// 5. Validates the configuration
pub fn load_config(path: impl AsRef<Path>) -> Result<PhiScanConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PhiScanError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PhiScanError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PhiScanConfig = toml::from_str(&contents)
        .map_err(|e| PhiScanError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        PhiScanError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Default config file consulted when no `--config` is passed
pub const DEFAULT_CONFIG_FILE: &str = "phiscan.toml";

/// Resolve the configuration for one CLI invocation
///
/// An explicit path must exist and load; without one, the implicit
/// [`DEFAULT_CONFIG_FILE`] lookup falls back to defaults when absent.
pub fn resolve_config(explicit: Option<&str>) -> Result<PhiScanConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => load_or_default(DEFAULT_CONFIG_FILE),
    }
}

/// Load the config at `path`, or fall back to defaults when the default
/// config file is simply absent
///
/// An explicit `--config` pointing at a missing file is still an error; this
/// helper is for the implicit `phiscan.toml` lookup.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<PhiScanConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        let mut config = PhiScanConfig::default();
        apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are passed through untouched. Referencing an unset variable
/// is an error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PhiScanError::Configuration(e.to_string()))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PhiScanError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `PHISCAN_*` prefix
fn apply_env_overrides(config: &mut PhiScanConfig) -> Result<()> {
    if let Ok(val) = std::env::var("PHISCAN_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("PHISCAN_SCAN_DEFAULT_CONTEXT") {
        config.scan.default_context = val.parse()?;
    }
    if let Ok(val) = std::env::var("PHISCAN_SCAN_STRICT_MODE") {
        config.scan.strict_mode = parse_bool_override("PHISCAN_SCAN_STRICT_MODE", &val)?;
    }
    if let Ok(val) = std::env::var("PHISCAN_SCAN_MAX_INPUT_BYTES") {
        config.scan.max_input_bytes = parse_usize_override("PHISCAN_SCAN_MAX_INPUT_BYTES", &val)?;
    }

    if let Ok(val) = std::env::var("PHISCAN_REPORT_FORMAT") {
        config.report.format = val.parse()?;
    }
    if let Ok(val) = std::env::var("PHISCAN_REPORT_MASK_VALUES") {
        config.report.mask_values = parse_bool_override("PHISCAN_REPORT_MASK_VALUES", &val)?;
    }

    if let Ok(val) = std::env::var("PHISCAN_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool_override("PHISCAN_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("PHISCAN_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PHISCAN_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn parse_bool_override(name: &str, val: &str) -> Result<bool> {
    val.parse().map_err(|_| {
        PhiScanError::Configuration(format!("{name} must be true or false, got '{val}'"))
    })
}

fn parse_usize_override(name: &str, val: &str) -> Result<usize> {
    val.parse().map_err(|_| {
        PhiScanError::Configuration(format!("{name} must be a non-negative integer, got '{val}'"))
    })
}
