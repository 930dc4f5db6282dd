//! Core domain types for PHI scanning
//!
//! This module contains the data model shared by the engine, the report
//! layer, and the CLI: scan contexts, PHI categories, findings, and the
//! crate-wide error and result types.

pub mod category;
pub mod context;
pub mod errors;
pub mod finding;
pub mod result;

pub use category::PhiCategory;
pub use context::ScanContext;
pub use errors::PhiScanError;
pub use finding::{Finding, ScanResult};
pub use result::Result;
