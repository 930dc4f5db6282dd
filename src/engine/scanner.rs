//! PHI scanning engine
//!
//! Orchestrates the catalog, the false-positive filter, the confidence
//! scorer, and the deduplicator into a single stateless scan operation.
//!
//! # Thread safety
//!
//! A scanner holds only the immutable catalog and compiled filter patterns;
//! every scan allocates its own candidate list, so a `PhiScanner` can be
//! shared across threads behind an `Arc` and scanned concurrently.

use crate::domain::{Finding, Result, ScanContext, ScanResult};
use crate::engine::catalog::{PatternCatalog, PhiPatternRule};
use crate::engine::dedup::{self, Candidate};
use crate::engine::filter::FalsePositiveFilter;
use crate::engine::matcher::MatchSpan;
use crate::engine::scoring::score_candidate;
use std::sync::Arc;

/// Deterministic, single-pass PHI scanner
pub struct PhiScanner {
    catalog: Arc<PatternCatalog>,
    filter: FalsePositiveFilter,
}

impl PhiScanner {
    /// Create a scanner over the built-in catalog
    pub fn new() -> Result<Self> {
        Ok(Self {
            catalog: Arc::new(PatternCatalog::builtin()?),
            filter: FalsePositiveFilter::new()?,
        })
    }

    /// Create a scanner over a custom catalog
    pub fn with_catalog(catalog: PatternCatalog) -> Result<Self> {
        Ok(Self {
            catalog: Arc::new(catalog),
            filter: FalsePositiveFilter::new()?,
        })
    }

    /// The catalog this scanner consults
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Scan `text` for likely PHI
    ///
    /// A pure function of its inputs: repeated calls with the same
    /// `(text, context, strict_mode)` yield identical results. Empty text
    /// yields an empty result, not an error.
    pub fn scan(
        &self,
        text: &str,
        context: ScanContext,
        strict_mode: bool,
    ) -> Result<ScanResult> {
        let mut candidates: Vec<Candidate> = Vec::new();

        for (rule_index, rule) in self.catalog.rules().iter().enumerate() {
            for span in rule.matcher().find_matches(text) {
                if self.filter.is_false_positive(span.text, text, span.start) {
                    tracing::trace!(
                        rule = rule.id(),
                        offset = span.start,
                        "suppressed false positive"
                    );
                    continue;
                }

                let Some(confidence) = score_candidate(rule, context, strict_mode) else {
                    continue;
                };

                candidates.push(Candidate {
                    finding: build_finding(rule, &span, confidence),
                    rule_index,
                });
            }
        }

        let findings = dedup::resolve(candidates);
        tracing::debug!(
            findings = findings.len(),
            scanned_bytes = text.len(),
            context = %context,
            strict_mode,
            "scan complete"
        );

        Ok(ScanResult {
            findings,
            scanned_length: text.len(),
            context,
            strict_mode,
        })
    }
}

fn build_finding(rule: &PhiPatternRule, span: &MatchSpan<'_>, confidence: u8) -> Finding {
    let tier = Finding::confidence_tier(confidence);
    Finding {
        pattern_id: rule.id().to_string(),
        display_name: rule.display_name().to_string(),
        category: rule.category(),
        regulatory_label: rule.regulatory_label().to_string(),
        matched_text: span.text.to_string(),
        confidence,
        start_offset: span.start,
        end_offset: span.end(),
        explanation: format!(
            "{tier} confidence ({confidence}/100); maps to HIPAA Safe Harbor identifier category: {}",
            rule.regulatory_label()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PhiCategory;
    use crate::engine::catalog::PhiPatternRule;
    use crate::engine::matcher::RegexMatcher;
    use regex::Regex;

    fn scanner() -> PhiScanner {
        PhiScanner::new().unwrap()
    }

    #[test]
    fn test_empty_text_yields_empty_result() {
        let result = scanner().scan("", ScanContext::General, false).unwrap();
        assert!(result.findings.is_empty());
        assert_eq!(result.scanned_length, 0);
        assert_eq!(result.context, ScanContext::General);
        assert!(!result.strict_mode);
    }

    #[test]
    fn test_clean_text_yields_no_findings() {
        let result = scanner()
            .scan(
                "The quick brown fox jumps over the lazy dog.",
                ScanContext::General,
                false,
            )
            .unwrap();
        assert!(!result.has_findings());
    }

    #[test]
    fn test_ssn_detected_in_general_context() {
        let result = scanner()
            .scan("ssn recorded as 123-45-6789", ScanContext::General, false)
            .unwrap();
        assert_eq!(result.findings.len(), 1);
        let f = &result.findings[0];
        assert_eq!(f.pattern_id, "ssn");
        assert_eq!(f.matched_text, "123-45-6789");
        assert_eq!(f.confidence, 85);
        assert_eq!(&"ssn recorded as 123-45-6789"[f.start_offset..f.end_offset], f.matched_text);
    }

    #[test]
    fn test_offsets_match_text_length() {
        let text = "Patient MRN: 123456789 and email carol.w@mercyclinic.org";
        let result = scanner().scan(text, ScanContext::General, false).unwrap();
        assert!(result.has_findings());
        for f in &result.findings {
            assert!(f.start_offset < f.end_offset);
            assert_eq!(f.matched_text.len(), f.end_offset - f.start_offset);
            assert_eq!(&text[f.start_offset..f.end_offset], f.matched_text);
        }
    }

    #[test]
    fn test_findings_sorted_descending_and_non_overlapping() {
        let text = "MRN: 123456789, DOB: 01/15/1985, phone (555) 123-4567, zip code 94110";
        let result = scanner().scan(text, ScanContext::General, false).unwrap();
        assert!(result.findings.len() >= 3);
        for pair in result.findings.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
        for (i, a) in result.findings.iter().enumerate() {
            for b in result.findings.iter().skip(i + 1) {
                assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn test_determinism() {
        let text = "MRN: 123456789, DOB: 01/15/1985, call (555) 123-4567";
        let s = scanner();
        let first = s.scan(text, ScanContext::General, false).unwrap();
        let second = s.scan(text, ScanContext::General, false).unwrap();
        assert_eq!(first.findings.len(), second.findings.len());
        for (a, b) in first.findings.iter().zip(second.findings.iter()) {
            assert_eq!(a.pattern_id, b.pattern_id);
            assert_eq!(a.start_offset, b.start_offset);
            assert_eq!(a.confidence, b.confidence);
        }
    }

    #[test]
    fn test_canonical_placeholder_never_reported() {
        let s = scanner();
        for context in ScanContext::ALL {
            for strict in [false, true] {
                let result = s.scan("000-00-0000", context, strict).unwrap();
                assert!(
                    !result.findings.iter().any(|f| f.pattern_id == "ssn"),
                    "context {context}, strict {strict}"
                );
            }
        }
    }

    #[test]
    fn test_context_sensitivity_code_vs_data() {
        let s = scanner();
        let text = "ssn = \"123-45-6789\"";
        let code = s.scan(text, ScanContext::Code, false).unwrap();
        let data = s.scan(text, ScanContext::Data, false).unwrap();
        let code_conf = code.findings.iter().find(|f| f.pattern_id == "ssn").unwrap().confidence;
        let data_conf = data.findings.iter().find(|f| f.pattern_id == "ssn").unwrap().confidence;
        assert!(data_conf > code_conf);
    }

    #[test]
    fn test_code_context_ssn_stays_below_high_tier() {
        let result = scanner()
            .scan("test_ssn = \"123-45-6789\"", ScanContext::Code, false)
            .unwrap();
        for f in result.findings.iter().filter(|f| f.pattern_id == "ssn") {
            assert!(f.confidence < 70);
        }
    }

    #[test]
    fn test_strict_mode_rescues_borderline_candidate() {
        let s = scanner();
        // service-date in code context: 55 - 15 = 40, dropped non-strict
        let text = "visit 03/04/2021";
        let lax = s.scan(text, ScanContext::Code, false).unwrap();
        assert!(lax.findings.is_empty());
        let strict = s.scan(text, ScanContext::Code, true).unwrap();
        let f = strict
            .findings
            .iter()
            .find(|f| f.pattern_id == "service-date")
            .unwrap();
        assert_eq!(f.confidence, 55);
    }

    #[test]
    fn test_keyword_rule_beats_generic_rule_on_overlap() {
        // The dob rule's span covers the service-date rule's span; only the
        // higher-confidence dob finding survives.
        let result = scanner()
            .scan("DOB: 01/15/1985", ScanContext::General, false)
            .unwrap();
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].pattern_id, "dob");
    }

    #[test]
    fn test_synthetic_overlap_keeps_highest_confidence() {
        let mk = |id: &str, base: u8| {
            PhiPatternRule::new(
                id,
                id,
                PhiCategory::Direct,
                "Other unique identifying numbers",
                base,
                Box::new(RegexMatcher::new(Regex::new(r"\d{3}-\d{2}-\d{4}").unwrap())),
            )
        };
        let catalog = PatternCatalog::from_rules(vec![mk("weak", 60), mk("strong", 90)]);
        let s = PhiScanner::with_catalog(catalog).unwrap();
        let result = s.scan("id 321-54-9876", ScanContext::General, false).unwrap();
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].pattern_id, "strong");
        assert_eq!(result.findings[0].confidence, 90);
    }

    #[test]
    fn test_explanation_mentions_tier_and_label() {
        let result = scanner()
            .scan("reach me at 415-867-5309 today", ScanContext::General, false)
            .unwrap();
        let f = result.findings.iter().find(|f| f.pattern_id == "phone").unwrap();
        assert!(f.explanation.contains("high"));
        assert!(f.explanation.contains("Telephone numbers"));
    }
}
