//! Built-in PHI pattern catalog
//!
//! The catalog is the fixed table of detection rules. It is constructed once
//! (compiling every matcher up front, so a malformed pattern fails loudly and
//! names the offending rule) and is read-only afterwards. There is no runtime
//! registration; the rule set is fixed domain knowledge.

use crate::domain::{PhiCategory, PhiScanError, Result, ScanContext};
use crate::engine::matcher::{PatternMatcher, RegexMatcher};
use regex::Regex;

/// Per-context confidence adjustments for one rule
///
/// A fixed enumerated-key mapping (one optional slot per [`ScanContext`])
/// rather than a free-form map, so every valid context is enumerable and
/// exhaustively testable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextDeltas {
    slots: [Option<i16>; 5],
}

impl ContextDeltas {
    /// Empty delta table (no context affects this rule)
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the adjustment for one context
    pub fn with(mut self, context: ScanContext, delta: i16) -> Self {
        self.slots[context.index()] = Some(delta);
        self
    }

    /// Adjustment for the given context, if any
    pub fn get(&self, context: ScanContext) -> Option<i16> {
        self.slots[context.index()]
    }
}

/// One detection rule: a matcher plus its static metadata
pub struct PhiPatternRule {
    id: String,
    display_name: String,
    category: PhiCategory,
    regulatory_label: String,
    base_confidence: u8,
    context_deltas: ContextDeltas,
    matcher: Box<dyn PatternMatcher>,
}

impl PhiPatternRule {
    /// Create a rule from an already-built matcher
    ///
    /// `base_confidence` is clamped to 100.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        category: PhiCategory,
        regulatory_label: impl Into<String>,
        base_confidence: u8,
        matcher: Box<dyn PatternMatcher>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            category,
            regulatory_label: regulatory_label.into(),
            base_confidence: base_confidence.min(100),
            context_deltas: ContextDeltas::none(),
            matcher,
        }
    }

    /// Attach per-context confidence adjustments
    pub fn with_context_deltas(mut self, deltas: ContextDeltas) -> Self {
        self.context_deltas = deltas;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn category(&self) -> PhiCategory {
        self.category
    }

    pub fn regulatory_label(&self) -> &str {
        &self.regulatory_label
    }

    pub fn base_confidence(&self) -> u8 {
        self.base_confidence
    }

    pub fn context_deltas(&self) -> &ContextDeltas {
        &self.context_deltas
    }

    pub fn matcher(&self) -> &dyn PatternMatcher {
        self.matcher.as_ref()
    }
}

impl std::fmt::Debug for PhiPatternRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhiPatternRule")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("base_confidence", &self.base_confidence)
            .finish()
    }
}

/// Immutable table of detection rules
///
/// Rule declaration order is significant only as the deterministic tie-break
/// when the deduplicator compares equal-confidence candidates.
pub struct PatternCatalog {
    rules: Vec<PhiPatternRule>,
}

impl PatternCatalog {
    /// Build a catalog from an explicit rule list
    pub fn from_rules(rules: Vec<PhiPatternRule>) -> Self {
        Self { rules }
    }

    /// All rules, in declaration order
    pub fn rules(&self) -> &[PhiPatternRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a rule by its stable id
    pub fn rule_by_id(&self, id: &str) -> Option<&PhiPatternRule> {
        self.rules.iter().find(|r| r.id() == id)
    }

    /// The built-in rule set
    ///
    /// Compiles every regex; returns a catalog error naming the rule on the
    /// first failure rather than continuing with a partial table.
    pub fn builtin() -> Result<Self> {
        let mut rules = Vec::new();

        rules.push(
            rule(
                "ssn",
                "Social Security number",
                PhiCategory::Direct,
                "Social Security numbers",
                85,
                r"\b\d{3}[-\s]\d{2}[-\s]\d{4}\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -20)
                    .with(ScanContext::Comment, -10)
                    .with(ScanContext::Filename, -15)
                    .with(ScanContext::Data, 10),
            ),
        );

        rules.push(
            rule(
                "mrn",
                "Medical record number",
                PhiCategory::Direct,
                "Medical record numbers",
                90,
                r"(?i)\b(?:mrn|medical[ _-]?record(?:[ _-]?(?:number|no|num))?)\W{0,4}\d{5,10}\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -15)
                    .with(ScanContext::Data, 5),
            ),
        );

        rules.push(
            rule(
                "dob",
                "Date of birth",
                PhiCategory::Quasi,
                "Dates related to an individual",
                90,
                r"(?i)\b(?:dob|date[ _-]?of[ _-]?birth|birth[ _-]?date)\W{0,4}\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -15)
                    .with(ScanContext::Data, 5),
            ),
        );

        rules.push(
            rule(
                "npi",
                "National Provider Identifier",
                PhiCategory::Direct,
                "Other unique identifying numbers",
                85,
                r"(?i)\bnpi\W{0,4}\d{10}\b",
            )?
            .with_context_deltas(ContextDeltas::none().with(ScanContext::Code, -15)),
        );

        rules.push(
            rule(
                "mbi",
                "Medicare Beneficiary Identifier",
                PhiCategory::Direct,
                "Health plan beneficiary numbers",
                80,
                r"\b[1-9][AC-HJKMNP-RT-Y][AC-HJKMNP-RT-Y0-9]\d[AC-HJKMNP-RT-Y][AC-HJKMNP-RT-Y0-9]\d[AC-HJKMNP-RT-Y]{2}\d{2}\b",
            )?
            .with_context_deltas(ContextDeltas::none().with(ScanContext::Code, -15)),
        );

        rules.push(
            rule(
                "fax",
                "Fax number",
                PhiCategory::Quasi,
                "Fax numbers",
                85,
                r"(?i)\bfax\W{0,4}(?:\(\d{3}\)\s?|\d{3}[-.])\d{3}[-.]\d{4}\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -15)
                    .with(ScanContext::Data, 5),
            ),
        );

        rules.push(
            rule(
                "phone",
                "Phone number",
                PhiCategory::Quasi,
                "Telephone numbers",
                80,
                r"(?:\(\d{3}\)\s?|\b\d{3}[-.])\d{3}[-.]\d{4}\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -15)
                    .with(ScanContext::Data, 5),
            ),
        );

        rules.push(
            rule(
                "email",
                "Email address",
                PhiCategory::Direct,
                "Email addresses",
                85,
                r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -10)
                    .with(ScanContext::Data, 5),
            ),
        );

        rules.push(
            rule(
                "name-field",
                "Explicit name field",
                PhiCategory::Quasi,
                "Names",
                80,
                r"(?i)\b(?:patient[ _-]?name|pt[ _-]?name|full[ _-]?name|first[ _-]?name|last[ _-]?name|surname)\W{0,4}[A-Za-z][A-Za-z'.-]*(?:[ \t][A-Za-z][A-Za-z'.-]*)?",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -15)
                    .with(ScanContext::Data, 5),
            ),
        );

        rules.push(
            rule(
                "name-honorific",
                "Honorific name",
                PhiCategory::Quasi,
                "Names",
                60,
                r"\b(?:Mr|Mrs|Ms|Dr|Prof)\.?[ \t][A-Z][a-z]+(?:[ \t][A-Z][a-z]+)?\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -15)
                    .with(ScanContext::Comment, -5)
                    .with(ScanContext::Data, 5),
            ),
        );

        rules.push(
            rule(
                "street-address",
                "Street address",
                PhiCategory::Quasi,
                "Geographic subdivisions smaller than a state",
                70,
                r"(?i)\b\d{1,5}[ \t](?:[A-Za-z]+[ \t]){1,3}(?:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|court|ct|place|pl|way)\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -15)
                    .with(ScanContext::Data, 5),
            ),
        );

        rules.push(
            rule(
                "postal-code",
                "Postal code",
                PhiCategory::Quasi,
                "Geographic subdivisions smaller than a state",
                70,
                r"(?i)\b(?:zip(?:[ _-]?code)?|postal[ _-]?code)\W{0,4}\d{5}(?:-\d{4})?\b",
            )?
            .with_context_deltas(ContextDeltas::none().with(ScanContext::Data, 5)),
        );

        rules.push(
            rule(
                "health-plan",
                "Health plan member number",
                PhiCategory::Direct,
                "Health plan beneficiary numbers",
                70,
                r"(?i)\b(?:member[ _-]?id|beneficiary[ _-]?(?:id|number)|policy[ _-]?(?:number|no))\W{0,4}[A-Z0-9][A-Z0-9-]{5,13}\b",
            )?
            .with_context_deltas(ContextDeltas::none().with(ScanContext::Data, 5)),
        );

        rules.push(
            rule(
                "account",
                "Account number",
                PhiCategory::Direct,
                "Account numbers",
                70,
                r"(?i)\b(?:account|acct)[ _-]?(?:number|no|num)?\W{0,4}\d{6,14}\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -15)
                    .with(ScanContext::Data, 5),
            ),
        );

        rules.push(
            rule(
                "device-id",
                "Device identifier",
                PhiCategory::Indirect,
                "Device identifiers and serial numbers",
                65,
                r"(?i)\b(?:serial[ _-]?(?:number|no|num)|device[ _-]?id|udi)\W{0,4}[A-Z0-9][A-Z0-9-]{5,}\b",
            )?
            .with_context_deltas(ContextDeltas::none().with(ScanContext::Code, -10)),
        );

        rules.push(
            rule(
                "clinical-ip",
                "IP address in clinical field",
                PhiCategory::Indirect,
                "IP addresses",
                65,
                r"(?i)\b(?:patient|client|session|device)[ _-]?ip(?:[ _-]?address)?\W{0,4}\d{1,3}(?:\.\d{1,3}){3}\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -10)
                    .with(ScanContext::Data, 5),
            ),
        );

        rules.push(
            rule(
                "vehicle",
                "Vehicle identifier",
                PhiCategory::Indirect,
                "Vehicle identifiers and serial numbers",
                65,
                r"(?i)\b(?:license[ _-]?plate|vin)\W{0,4}[A-Z0-9][A-Z0-9-]{4,16}\b",
            )?
            .with_context_deltas(ContextDeltas::none().with(ScanContext::Code, -10)),
        );

        rules.push(
            rule(
                "service-date",
                "Service date",
                PhiCategory::Indirect,
                "Dates related to an individual",
                55,
                r"\b(?:0?[1-9]|1[0-2])[/-](?:0?[1-9]|[12]\d|3[01])[/-](?:19|20)\d{2}\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -15)
                    .with(ScanContext::Comment, -10)
                    .with(ScanContext::Data, 5),
            ),
        );

        rules.push(
            rule(
                "biometric",
                "Biometric data marker",
                PhiCategory::Indirect,
                "Biometric identifiers",
                55,
                r"(?i)\b(?:fingerprint|voice[ _-]?print|retinal[ _-]?scan|iris[ _-]?scan|biometric)\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -10)
                    .with(ScanContext::Data, 10),
            ),
        );

        rules.push(
            rule(
                "photo-ref",
                "Photo reference",
                PhiCategory::Indirect,
                "Full-face photographs and comparable images",
                55,
                r"(?i)\b(?:patient|face|full[ _-]?face)[ _-]?(?:photo(?:graph)?|image|picture)\b",
            )?
            .with_context_deltas(ContextDeltas::none().with(ScanContext::Data, 10)),
        );

        rules.push(
            rule(
                "diagnosis-code",
                "Diagnosis code in context",
                PhiCategory::Indirect,
                "Other unique identifying characteristics or codes",
                60,
                r"(?i)\b(?:diagnosis|dx|icd[ -]?10)(?:[ _-]?code)?\W{0,4}[A-TV-Z]\d{2}(?:\.\d{1,3})?\b",
            )?
            .with_context_deltas(
                ContextDeltas::none()
                    .with(ScanContext::Code, -15)
                    .with(ScanContext::Data, 5),
            ),
        );

        Ok(Self::from_rules(rules))
    }
}

/// Compile one regex-backed rule, naming the rule on failure
fn rule(
    id: &str,
    display_name: &str,
    category: PhiCategory,
    regulatory_label: &str,
    base_confidence: u8,
    pattern: &str,
) -> Result<PhiPatternRule> {
    let regex = Regex::new(pattern)
        .map_err(|e| PhiScanError::catalog(id, format!("invalid pattern: {e}")))?;
    Ok(PhiPatternRule::new(
        id,
        display_name,
        category,
        regulatory_label,
        base_confidence,
        Box::new(RegexMatcher::new(regex)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> PatternCatalog {
        PatternCatalog::builtin().unwrap()
    }

    #[test]
    fn test_builtin_catalog_compiles() {
        let catalog = builtin();
        assert!(catalog.len() >= 18);
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let catalog = builtin();
        let mut ids: Vec<_> = catalog.rules().iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_base_confidence_within_bounds() {
        for r in builtin().rules() {
            assert!(r.base_confidence() <= 100, "rule {}", r.id());
        }
    }

    #[test]
    fn test_ssn_rule_matches_delimited_forms() {
        let catalog = builtin();
        let ssn = catalog.rule_by_id("ssn").unwrap();
        assert_eq!(ssn.matcher().find_matches("ssn 123-45-6789").count(), 1);
        assert_eq!(ssn.matcher().find_matches("ssn 123 45 6789").count(), 1);
        // Plain 9-digit runs are ambiguous with MRNs; the SSN rule requires
        // delimiters.
        assert_eq!(ssn.matcher().find_matches("id 123456789").count(), 0);
    }

    #[test]
    fn test_mrn_rule_requires_keyword() {
        let catalog = builtin();
        let mrn = catalog.rule_by_id("mrn").unwrap();
        assert_eq!(
            mrn.matcher().find_matches("Patient MRN: 123456789").count(),
            1
        );
        assert_eq!(
            mrn.matcher()
                .find_matches("medical record number 54321")
                .count(),
            1
        );
        assert_eq!(mrn.matcher().find_matches("order 123456789").count(), 0);
    }

    #[test]
    fn test_dob_rule() {
        let catalog = builtin();
        let dob = catalog.rule_by_id("dob").unwrap();
        let spans: Vec<_> = dob
            .matcher()
            .find_matches("DOB: 01/15/1985 admitted")
            .collect();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "DOB: 01/15/1985");
    }

    #[test]
    fn test_phone_rule_formats() {
        let catalog = builtin();
        let phone = catalog.rule_by_id("phone").unwrap();
        assert_eq!(
            phone.matcher().find_matches("call (555) 123-4567").count(),
            1
        );
        assert_eq!(phone.matcher().find_matches("call 555-123-4567").count(), 1);
        assert_eq!(phone.matcher().find_matches("call 555.123.4567").count(), 1);
    }

    #[test]
    fn test_mbi_grammar() {
        let catalog = builtin();
        let mbi = catalog.rule_by_id("mbi").unwrap();
        // Valid CMS sample format: C A AN N A AN N A A N N
        assert_eq!(mbi.matcher().find_matches("mbi 1EG4TE5MK73").count(), 1);
        // S, L, O, I, B, Z never appear in letter positions
        assert_eq!(mbi.matcher().find_matches("mbi 1SG4TE5MK73").count(), 0);
    }

    #[test]
    fn test_context_deltas_lookup() {
        let deltas = ContextDeltas::none()
            .with(ScanContext::Code, -20)
            .with(ScanContext::Data, 10);
        assert_eq!(deltas.get(ScanContext::Code), Some(-20));
        assert_eq!(deltas.get(ScanContext::Data), Some(10));
        assert_eq!(deltas.get(ScanContext::General), None);
        assert_eq!(deltas.get(ScanContext::Filename), None);
    }

    #[test]
    fn test_malformed_pattern_names_rule() {
        let err = rule(
            "broken",
            "Broken",
            PhiCategory::Direct,
            "Other unique identifying numbers",
            50,
            r"[unclosed",
        )
        .unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}
