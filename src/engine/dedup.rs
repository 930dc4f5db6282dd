//! Overlap resolution between candidates from different rules
//!
//! Greedy interval selection by weight: sort candidates descending by
//! confidence, then accept each one whose span is disjoint from everything
//! already accepted. Overlapping losers are discarded outright; there is no
//! merging or trimming. This is optimal for simple overlap chains, which is
//! what short PHI matches produce in practice.
//!
//! Tie-break at equal confidence: catalog declaration order, then start
//! offset. This keeps results deterministic instead of leaning on incidental
//! sort stability.

use crate::domain::Finding;

/// A scored finding that has not yet survived overlap resolution
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub finding: Finding,
    /// Index of the originating rule in the catalog, for the tie-break
    pub rule_index: usize,
}

/// Resolve overlaps; returns accepted findings sorted descending by confidence
pub(crate) fn resolve(mut candidates: Vec<Candidate>) -> Vec<Finding> {
    candidates.sort_by(|a, b| {
        b.finding
            .confidence
            .cmp(&a.finding.confidence)
            .then_with(|| a.rule_index.cmp(&b.rule_index))
            .then_with(|| a.finding.start_offset.cmp(&b.finding.start_offset))
    });

    let mut accepted: Vec<Finding> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let overlaps = accepted.iter().any(|f| f.overlaps(&candidate.finding));
        if !overlaps {
            accepted.push(candidate.finding);
        }
    }
    accepted
}
