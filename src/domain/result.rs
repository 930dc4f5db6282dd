//! Crate-wide result alias

use super::errors::PhiScanError;

/// Result type used throughout phiscan
pub type Result<T> = std::result::Result<T, PhiScanError>;
