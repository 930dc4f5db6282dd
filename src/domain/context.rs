//! Scan context
//!
//! The context tag describes where the scanned text originates. It only
//! influences confidence arithmetic, never the matching itself.

use crate::domain::errors::PhiScanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structural origin of the text being scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanContext {
    /// Source code (variable assignments, literals)
    Code,
    /// File or path names
    Filename,
    /// Code comments
    Comment,
    /// Structured data (JSON/CSV exports, database dumps)
    Data,
    /// Free text with no structural hints
    General,
}

impl ScanContext {
    /// Every context, in a stable order
    ///
    /// Used to index fixed-size per-context tables and to keep the set of
    /// valid contexts exhaustively enumerable in tests.
    pub const ALL: [ScanContext; 5] = [
        ScanContext::Code,
        ScanContext::Filename,
        ScanContext::Comment,
        ScanContext::Data,
        ScanContext::General,
    ];

    /// Stable index into per-context tables
    pub const fn index(self) -> usize {
        match self {
            ScanContext::Code => 0,
            ScanContext::Filename => 1,
            ScanContext::Comment => 2,
            ScanContext::Data => 3,
            ScanContext::General => 4,
        }
    }

    /// Lowercase name as used in config files and CLI flags
    pub const fn as_str(self) -> &'static str {
        match self {
            ScanContext::Code => "code",
            ScanContext::Filename => "filename",
            ScanContext::Comment => "comment",
            ScanContext::Data => "data",
            ScanContext::General => "general",
        }
    }
}

impl Default for ScanContext {
    fn default() -> Self {
        ScanContext::General
    }
}

impl fmt::Display for ScanContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanContext {
    type Err = PhiScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "code" => Ok(ScanContext::Code),
            "filename" => Ok(ScanContext::Filename),
            "comment" => Ok(ScanContext::Comment),
            "data" => Ok(ScanContext::Data),
            "general" => Ok(ScanContext::General),
            other => Err(PhiScanError::Configuration(format!(
                "Unknown scan context: {other}"
            ))),
        }
    }
}
