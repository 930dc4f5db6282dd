//! PHI detection engine
//!
//! A single-pass, stateless pipeline: the scanner iterates the pattern
//! catalog over the input, the false-positive filter and confidence scorer
//! judge each raw match, and the deduplicator resolves overlapping spans so
//! the final result holds non-overlapping findings ranked by confidence.

pub mod catalog;
pub mod dedup;
pub mod filter;
pub mod matcher;
pub mod scanner;
pub mod scoring;

pub use catalog::{ContextDeltas, PatternCatalog, PhiPatternRule};
pub use filter::FalsePositiveFilter;
pub use matcher::{MatchSpan, PatternMatcher, RegexMatcher};
pub use scanner::PhiScanner;
