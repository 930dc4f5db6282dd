//! False-positive suppression
//!
//! Canonical test values and marker words are the dominant source of false
//! alarms in source code and fixtures, so this cheap check runs before any
//! confidence computation. Two independent checks; either one suppresses:
//!
//! 1. the matched text is a well-known placeholder value or itself contains
//!    a marker word
//! 2. the surrounding 50 bytes on either side contain a marker word

use crate::domain::{PhiScanError, Result};
use regex::Regex;

/// Bytes inspected before and after a match for marker words
const PROXIMITY_WINDOW: usize = 50;

/// Exact placeholder values that are never real PHI
const CANONICAL_LITERALS: &[&str] = &[
    "000-00-0000",
    "078-05-1120",
    "999-99-9999",
    "555-555-5555",
    "(555) 555-5555",
    "123-456-7890",
    "0.0.0.0",
];

/// Suppresses candidate matches that are almost certainly not real PHI
pub struct FalsePositiveFilter {
    marker_words: Regex,
    example_email_domain: Regex,
    reserved_ip: Regex,
}

impl FalsePositiveFilter {
    pub fn new() -> Result<Self> {
        let compile = |name: &str, pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| PhiScanError::catalog(name, format!("invalid filter pattern: {e}")))
        };

        Ok(Self {
            marker_words: compile(
                "fp-marker-words",
                r"(?i)\b(?:test|example|sample|dummy|mock|fake|placeholder)\b",
            )?,
            example_email_domain: compile(
                "fp-example-email",
                r"(?i)@(?:example|test)\.(?:com|org|net)\b",
            )?,
            reserved_ip: compile(
                "fp-reserved-ip",
                r"\b(?:127|10)\.\d{1,3}\.\d{1,3}\.\d{1,3}\b|\b192\.168\.\d{1,3}\.\d{1,3}\b|\b172\.(?:1[6-9]|2\d|3[01])\.\d{1,3}\.\d{1,3}\b",
            )?,
        })
    }

    /// Should this candidate be suppressed?
    ///
    /// `start` is the byte offset of `matched` within `text`.
    pub fn is_false_positive(&self, matched: &str, text: &str, start: usize) -> bool {
        self.is_canonical_placeholder(matched) || self.has_nearby_marker(text, start, matched.len())
    }

    /// Literal/canonical exclusion against the matched text itself
    fn is_canonical_placeholder(&self, matched: &str) -> bool {
        // Substring test: keyword-anchored rules carry their prefix in the
        // match, e.g. "patient_ip: 0.0.0.0"
        CANONICAL_LITERALS.iter().any(|lit| matched.contains(lit))
            || self.marker_words.is_match(matched)
            || self.example_email_domain.is_match(matched)
            || self.reserved_ip.is_match(matched)
    }

    /// Marker-word scan of the text surrounding the match
    fn has_nearby_marker(&self, text: &str, start: usize, match_len: usize) -> bool {
        let mut lo = start.saturating_sub(PROXIMITY_WINDOW);
        let mut hi = (start + match_len + PROXIMITY_WINDOW).min(text.len());
        // Snap to char boundaries; the window is measured in bytes
        while lo > 0 && !text.is_char_boundary(lo) {
            lo -= 1;
        }
        while hi < text.len() && !text.is_char_boundary(hi) {
            hi += 1;
        }
        self.marker_words.is_match(&text[lo..hi])
    }
}
