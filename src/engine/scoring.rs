//! Confidence scoring
//!
//! Combines a rule's base confidence with its context adjustment and the
//! strict-mode boost. Order matters and is load-bearing:
//!
//! 1. start from the base confidence
//! 2. apply the context delta, if the rule defines one for this context
//! 3. strict mode: if the running value is below 70, add 15 (strict mode
//!    rescues borderline signals, it does not inflate strong ones)
//! 4. non-strict mode only: discard outright below 50 (hard floor, not a
//!    clamp). The floor never applies in strict mode, and the boost always
//!    runs before any floor logic.
//! 5. clamp to [0, 100]

use crate::domain::ScanContext;
use crate::engine::catalog::PhiPatternRule;

/// Added to sub-70 candidates when strict mode is on
pub const STRICT_BOOST: i16 = 15;

/// Candidates at or above this value get no strict-mode boost
pub const STRICT_RESCUE_CEILING: i16 = 70;

/// Candidates below this value are discarded in non-strict mode
pub const NON_STRICT_FLOOR: i16 = 50;

/// Score one candidate; `None` means the candidate is discarded
pub fn score_candidate(rule: &PhiPatternRule, context: ScanContext, strict_mode: bool) -> Option<u8> {
    let mut confidence = i16::from(rule.base_confidence());

    if let Some(delta) = rule.context_deltas().get(context) {
        confidence += delta;
    }

    if strict_mode {
        if confidence < STRICT_RESCUE_CEILING {
            confidence += STRICT_BOOST;
        }
    } else if confidence < NON_STRICT_FLOOR {
        return None;
    }

    Some(confidence.clamp(0, 100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PhiCategory;
    use crate::engine::catalog::ContextDeltas;
    use crate::engine::matcher::RegexMatcher;
    use regex::Regex;
    use test_case::test_case;

    fn rule_with(base: u8, deltas: ContextDeltas) -> PhiPatternRule {
        PhiPatternRule::new(
            "scoring-test",
            "Scoring Test",
            PhiCategory::Direct,
            "Other unique identifying numbers",
            base,
            Box::new(RegexMatcher::new(Regex::new(r"x").unwrap())),
        )
        .with_context_deltas(deltas)
    }

    #[test_case(85, ScanContext::General, false, Some(85); "base only")]
    #[test_case(85, ScanContext::Code, false, Some(65); "negative delta applies")]
    #[test_case(85, ScanContext::Data, false, Some(95); "positive delta applies")]
    #[test_case(95, ScanContext::Data, false, Some(100); "clamped at 100")]
    #[test_case(50, ScanContext::General, false, Some(50); "kept exactly at floor")]
    #[test_case(49, ScanContext::General, false, None; "dropped just below floor")]
    #[test_case(45, ScanContext::General, false, None; "below floor discarded")]
    #[test_case(45, ScanContext::General, true, Some(60); "strict rescues below floor")]
    #[test_case(69, ScanContext::General, true, Some(84); "boost at 69")]
    #[test_case(70, ScanContext::General, true, Some(70); "no boost at 70")]
    #[test_case(85, ScanContext::General, true, Some(85); "strong match unboosted")]
    fn test_scoring(base: u8, context: ScanContext, strict: bool, expected: Option<u8>) {
        let rule = rule_with(
            base,
            ContextDeltas::none()
                .with(ScanContext::Code, -20)
                .with(ScanContext::Data, 10),
        );
        assert_eq!(score_candidate(&rule, context, strict), expected);
    }

    #[test]
    fn test_boost_runs_before_floor_logic() {
        // base 40: non-strict drops it; strict boosts to 55 and keeps it.
        // The floor must never be applied to the boosted value.
        let rule = rule_with(40, ContextDeltas::none());
        assert_eq!(score_candidate(&rule, ScanContext::General, false), None);
        assert_eq!(score_candidate(&rule, ScanContext::General, true), Some(55));
    }

    #[test]
    fn test_strict_mode_never_decreases_confidence() {
        for base in 0..=100u8 {
            let rule = rule_with(base, ContextDeltas::none());
            let strict = score_candidate(&rule, ScanContext::General, true).unwrap();
            if let Some(lax) = score_candidate(&rule, ScanContext::General, false) {
                assert!(strict >= lax, "base {base}");
            }
        }
    }

    #[test]
    fn test_negative_delta_clamps_at_zero() {
        let rule = rule_with(5, ContextDeltas::none().with(ScanContext::Code, -30));
        // Strict: -25 running value, boosted to -10, clamped to 0.
        assert_eq!(score_candidate(&rule, ScanContext::Code, true), Some(0));
        assert_eq!(score_candidate(&rule, ScanContext::Code, false), None);
    }

    #[test]
    fn test_missing_delta_leaves_base_untouched() {
        let rule = rule_with(75, ContextDeltas::none().with(ScanContext::Code, -20));
        assert_eq!(
            score_candidate(&rule, ScanContext::Comment, false),
            Some(75)
        );
    }
}
