// phiscan - PHI detection for healthcare compliance
// Licensed under the MIT License

//! # phiscan - PHI Detection for Healthcare Compliance
//!
//! phiscan detects likely Protected Health Information (PHI) in arbitrary
//! text using a deterministic, confidence-scored pattern engine mapped to
//! the HIPAA Safe Harbor identifier enumeration. It is a best-effort
//! advisory tool: deterministic pattern matching, not a statistical NER
//! model, and not a legal certification of de-identification.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`engine`] - Pattern catalog, false-positive filter, confidence
//!   scoring, overlap deduplication
//! - [`domain`] - Core types: contexts, categories, findings, errors
//! - [`report`] - Report rendering and value masking
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use phiscan::engine::PhiScanner;
//! use phiscan::domain::ScanContext;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scanner = PhiScanner::new()?;
//! let result = scanner.scan(
//!     "Patient MRN: 123456789, call (555) 123-4567",
//!     ScanContext::General,
//!     false,
//! )?;
//!
//! for finding in &result.findings {
//!     println!(
//!         "{} [{}] confidence {}",
//!         finding.display_name, finding.regulatory_label, finding.confidence
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## How scanning works
//!
//! One scan is a single pass: every catalog rule is run against the input,
//! each raw match goes through false-positive suppression (canonical
//! placeholder values, nearby marker words like "test" or "example") and
//! confidence scoring (base confidence, per-context adjustment, optional
//! strict-mode rescue of borderline candidates), and surviving candidates
//! are deduplicated so overlapping spans keep only the highest-confidence
//! finding. The result is deterministic for a fixed
//! `(text, context, strict_mode)` triple.

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod logging;
pub mod report;
