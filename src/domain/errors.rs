//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types to
//! callers of the library API.

use thiserror::Error;

/// Main phiscan error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum PhiScanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A pattern rule in the catalog failed to compile or execute
    #[error("Catalog error in rule '{rule_id}': {message}")]
    Catalog { rule_id: String, message: String },

    /// Input rejected before scanning (e.g. over the configured size limit)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Report rendering or output errors
    #[error("Report error: {0}")]
    Report(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl PhiScanError {
    /// Build a catalog error for a specific rule
    pub fn catalog(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Catalog {
            rule_id: rule_id.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for PhiScanError {
    fn from(err: std::io::Error) -> Self {
        PhiScanError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PhiScanError {
    fn from(err: serde_json::Error) -> Self {
        PhiScanError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for PhiScanError {
    fn from(err: toml::de::Error) -> Self {
        PhiScanError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PhiScanError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_catalog_error_names_rule() {
        let err = PhiScanError::catalog("ssn", "invalid regex");
        assert_eq!(
            err.to_string(),
            "Catalog error in rule 'ssn': invalid regex"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: PhiScanError = io_err.into();
        assert!(matches!(err, PhiScanError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: PhiScanError = json_err.into();
        assert!(matches!(err, PhiScanError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: PhiScanError = toml_err.into();
        assert!(matches!(err, PhiScanError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_implements_std_error() {
        let err = PhiScanError::InvalidInput("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
