//! Scan report rendering
//!
//! Wraps a [`ScanResult`] with run metadata and renders it for humans
//! (masked console output) or machines (pretty JSON). Masking is a display
//! convention of this layer; the engine always returns the exact matched
//! text.

use crate::domain::{PhiCategory, Result, ScanResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Fixed-length marker replacing the middle of masked values
const MASK_MARKER: &str = "****";

/// Scan result plus run metadata, ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Unique id for this scan run
    pub scan_id: Uuid,

    /// When the scan completed
    pub timestamp: DateTime<Utc>,

    /// Label of the scanned source (file path or "<stdin>")
    pub source: String,

    /// The scan result itself
    pub result: ScanResult,

    /// Finding counts per PHI category
    pub counts_by_category: HashMap<PhiCategory, usize>,
}

impl ScanReport {
    /// Build a report from a finished scan
    pub fn new(source: impl Into<String>, result: ScanResult) -> Self {
        let mut counts_by_category = HashMap::new();
        for finding in &result.findings {
            *counts_by_category.entry(finding.category).or_insert(0) += 1;
        }

        Self {
            scan_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            source: source.into(),
            result,
            counts_by_category,
        }
    }

    /// Format the report for console output
    ///
    /// With `mask_values`, matched text shows only its first and last two
    /// characters around a fixed redaction marker.
    pub fn format_console(&self, mask_values: bool) -> String {
        let mut output = String::new();

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                      PHI SCAN REPORT                          \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str(&format!("  Source:       {}\n", self.source));
        output.push_str(&format!("  Scan ID:      {}\n", self.scan_id));
        output.push_str(&format!("  Context:      {}\n", self.result.context));
        output.push_str(&format!("  Strict mode:  {}\n", self.result.strict_mode));
        output.push_str(&format!(
            "  Scanned:      {} bytes\n",
            self.result.scanned_length
        ));
        output.push('\n');

        if self.result.findings.is_empty() {
            output.push_str("  ✅ No PHI detected\n");
            output.push_str(
                "═══════════════════════════════════════════════════════════════\n",
            );
            return output;
        }

        output.push_str(&format!(
            "  ⚠️  {} potential PHI finding(s)\n",
            self.result.findings.len()
        ));
        output.push('\n');

        let mut categories: Vec<_> = self.counts_by_category.iter().collect();
        categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.label().cmp(b.0.label())));
        for (category, count) in categories {
            output.push_str(&format!("  {:10} {:>4}\n", category.label(), count));
        }
        output.push('\n');
        output.push_str("───────────────────────────────────────────────────────────────\n");

        for (i, finding) in self.result.findings.iter().enumerate() {
            let shown = if mask_values {
                mask_value(&finding.matched_text)
            } else {
                finding.matched_text.clone()
            };
            output.push_str(&format!("\n  Finding #{}\n", i + 1));
            output.push_str(&format!("    Rule:        {}\n", finding.display_name));
            output.push_str(&format!("    Category:    {}\n", finding.category));
            output.push_str(&format!(
                "    Regulatory:  {}\n",
                finding.regulatory_label
            ));
            output.push_str(&format!("    Confidence:  {}/100\n", finding.confidence));
            output.push_str(&format!(
                "    Location:    bytes {}..{}\n",
                finding.start_offset, finding.end_offset
            ));
            output.push_str(&format!("    Match:       \"{shown}\"\n"));
            output.push_str(&format!("    Note:        {}\n", finding.explanation));
        }

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output
    }

    /// Format the report as pretty JSON
    pub fn format_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to a file
    pub fn write_to_file(&self, path: &std::path::Path) -> Result<()> {
        let json = self.format_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Mask a matched value for display
///
/// Shows the first and last two characters around a fixed-length marker;
/// values of four characters or fewer are fully replaced.
pub fn mask_value(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return MASK_MARKER.to_string();
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{head}{MASK_MARKER}{tail}")
}
