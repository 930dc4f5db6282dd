//! Pattern matcher abstraction
//!
//! The engine never talks to `regex` directly. A matcher is any capability
//! that, given text, produces a finite sequence of non-overlapping
//! occurrences, so regular expressions can later be swapped for hand-written
//! scanners without touching the engine contract.

use regex::Regex;

/// One occurrence reported by a matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan<'t> {
    /// The matched substring
    pub text: &'t str,
    /// Byte offset of the match start in the scanned text
    pub start: usize,
}

impl<'t> MatchSpan<'t> {
    /// Exclusive end offset of the match
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Capability of finding occurrences of a pattern in text
///
/// Implementations must report non-overlapping occurrences in left-to-right
/// order; overlap between *different* rules is resolved downstream by the
/// deduplicator.
pub trait PatternMatcher: Send + Sync {
    /// Find all occurrences in `text`
    fn find_matches<'t>(&'t self, text: &'t str) -> Box<dyn Iterator<Item = MatchSpan<'t>> + 't>;
}

/// Regex-backed matcher using standard greedy left-to-right semantics
#[derive(Debug)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Wrap a compiled regex
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// The underlying pattern source, for catalog listings
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl PatternMatcher for RegexMatcher {
    fn find_matches<'t>(&'t self, text: &'t str) -> Box<dyn Iterator<Item = MatchSpan<'t>> + 't> {
        Box::new(self.regex.find_iter(text).map(|m| MatchSpan {
            text: m.as_str(),
            start: m.start(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_matcher_finds_all_occurrences() {
        let matcher = RegexMatcher::new(Regex::new(r"\d{3}").unwrap());
        let spans: Vec<_> = matcher.find_matches("abc 123 def 456").collect();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "123");
        assert_eq!(spans[0].start, 4);
        assert_eq!(spans[1].text, "456");
        assert_eq!(spans[1].start, 12);
    }

    #[test]
    fn test_match_span_end() {
        let span = MatchSpan {
            text: "123-45-6789",
            start: 10,
        };
        assert_eq!(span.end(), 21);
    }

    #[test]
    fn test_matcher_is_restartable() {
        let matcher = RegexMatcher::new(Regex::new(r"\d+").unwrap());
        let first: Vec<_> = matcher.find_matches("a1 b22").collect();
        let second: Vec<_> = matcher.find_matches("a1 b22").collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let matcher = RegexMatcher::new(Regex::new(r"\d+").unwrap());
        assert_eq!(matcher.find_matches("no digits here").count(), 0);
    }
}
