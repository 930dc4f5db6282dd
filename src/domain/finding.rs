//! Finding and scan result models

use crate::domain::{PhiCategory, ScanContext};
use serde::{Deserialize, Serialize};

/// One reported candidate instance of PHI
///
/// Offsets are byte offsets into the original text as a half-open range
/// `[start_offset, end_offset)`, so `matched_text.len()` always equals
/// `end_offset - start_offset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Stable identifier of the originating catalog rule
    pub pattern_id: String,
    /// Human label of the rule
    pub display_name: String,
    /// Identifying strength
    pub category: PhiCategory,
    /// HIPAA Safe Harbor identifier this maps to (report-only)
    pub regulatory_label: String,
    /// Exact substring that matched
    pub matched_text: String,
    /// Final confidence, 0-100
    pub confidence: u8,
    /// Start of the match in the original text
    pub start_offset: usize,
    /// End of the match (exclusive)
    pub end_offset: usize,
    /// Confidence tier plus regulatory basis, for human consumption
    pub explanation: String,
}

impl Finding {
    /// Whether this finding's span overlaps another's
    ///
    /// Half-open ranges: touching spans do not overlap.
    pub fn overlaps(&self, other: &Finding) -> bool {
        self.start_offset < other.end_offset && other.start_offset < self.end_offset
    }

    /// Confidence tier name used in explanations and reports
    pub fn confidence_tier(confidence: u8) -> &'static str {
        match confidence {
            90..=100 => "very high",
            70..=89 => "high",
            50..=69 => "moderate",
            _ => "low",
        }
    }
}

/// Result of one scan invocation
///
/// Findings are sorted descending by confidence and pairwise non-overlapping.
/// Constructed fresh per scan; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Accepted findings, highest confidence first
    pub findings: Vec<Finding>,
    /// Length of the scanned input in bytes
    pub scanned_length: usize,
    /// Context the caller supplied
    pub context: ScanContext,
    /// Whether strict mode was active
    pub strict_mode: bool,
}

impl ScanResult {
    /// Check if any PHI was detected
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Number of findings at or above a confidence threshold
    pub fn count_at_or_above(&self, threshold: u8) -> usize {
        self.findings
            .iter()
            .filter(|f| f.confidence >= threshold)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(start: usize, end: usize, confidence: u8) -> Finding {
        Finding {
            pattern_id: "test-rule".to_string(),
            display_name: "Test Rule".to_string(),
            category: PhiCategory::Direct,
            regulatory_label: "Social Security number".to_string(),
            matched_text: "x".repeat(end - start),
            confidence,
            start_offset: start,
            end_offset: end,
            explanation: String::new(),
        }
    }

    #[test]
    fn test_overlap_detection() {
        let a = finding(0, 5, 80);
        let b = finding(3, 8, 70);
        let c = finding(5, 9, 60);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Touching half-open ranges are disjoint
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(Finding::confidence_tier(95), "very high");
        assert_eq!(Finding::confidence_tier(90), "very high");
        assert_eq!(Finding::confidence_tier(89), "high");
        assert_eq!(Finding::confidence_tier(70), "high");
        assert_eq!(Finding::confidence_tier(69), "moderate");
        assert_eq!(Finding::confidence_tier(50), "moderate");
        assert_eq!(Finding::confidence_tier(49), "low");
    }

    #[test]
    fn test_count_at_or_above() {
        let result = ScanResult {
            findings: vec![finding(0, 3, 90), finding(4, 7, 60), finding(8, 11, 55)],
            scanned_length: 11,
            context: ScanContext::General,
            strict_mode: false,
        };
        assert_eq!(result.count_at_or_above(70), 1);
        assert_eq!(result.count_at_or_above(50), 3);
        assert!(result.has_findings());
    }
}
