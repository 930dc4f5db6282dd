//! PHI category classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifying strength of a detected PHI element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhiCategory {
    /// Uniquely identifies an individual on its own (e.g. SSN, MRN)
    Direct,
    /// Identifying only in combination with other elements (e.g. a name field)
    Quasi,
    /// Contextual or clinical signal, weaker on its own
    Indirect,
}

impl PhiCategory {
    /// Human-readable label for reports
    pub const fn label(self) -> &'static str {
        match self {
            PhiCategory::Direct => "DIRECT",
            PhiCategory::Quasi => "QUASI",
            PhiCategory::Indirect => "INDIRECT",
        }
    }
}

impl fmt::Display for PhiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
