// regexkit-core/src/match_set.rs
//! Provides the match data model returned by extraction, plus helpers that keep
//! matched text out of debug logs unless explicitly allowed.

use lazy_static::lazy_static;
use log::debug;
use regex::Captures;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// A static boolean that is initialized once to determine if matched text is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("REGEXKIT_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One occurrence of a pattern, decomposed into capture slots.
///
/// Slot 0 is the full occurrence; slots 1..n are the capture groups in
/// declaration order. A slot is `None` when its group did not participate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Capture slots, full occurrence first.
    pub groups: Vec<Option<String>>,
    /// Byte offset where the occurrence starts.
    pub start: usize,
    /// Byte offset just past the end of the occurrence.
    pub end: usize,
}

impl MatchResult {
    pub(crate) fn from_captures(caps: &Captures<'_>) -> Self {
        let (start, end) = caps.get(0).map_or((0, 0), |m| (m.start(), m.end()));
        Self {
            groups: caps
                .iter()
                .map(|slot| slot.map(|m| m.as_str().to_string()))
                .collect(),
            start,
            end,
        }
    }

    /// The full text of the occurrence.
    pub fn full(&self) -> &str {
        self.groups
            .first()
            .and_then(|slot| slot.as_deref())
            .unwrap_or_default()
    }

    /// Text of slot `index`, or `None` if the group is absent or out of range.
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index).and_then(|slot| slot.as_deref())
    }

    pub fn slot_count(&self) -> usize {
        self.groups.len()
    }
}

/// Ordered occurrences of one pattern in one input, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchSet {
    matches: Vec<MatchResult>,
}

impl MatchSet {
    pub fn new(matches: Vec<MatchResult>) -> Self {
        Self { matches }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchResult> {
        self.matches.iter()
    }

    pub fn get(&self, index: usize) -> Option<&MatchResult> {
        self.matches.get(index)
    }

    /// Full-match text (slot 0) of every occurrence.
    pub fn full_matches(&self) -> Vec<String> {
        self.matches.iter().map(|m| m.full().to_string()).collect()
    }

    pub fn into_vec(self) -> Vec<MatchResult> {
        self.matches
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.matches.truncate(len);
    }
}

impl IntoIterator for MatchSet {
    type Item = MatchResult;
    type IntoIter = std::vec::IntoIter<MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a MatchResult;
    type IntoIter = std::slice::Iter<'a, MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

pub(crate) fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub(crate) fn log_category_match_debug(module_path: &str, category: &str, matched: &str) {
    debug!(
        "{} Category '{}' matched: '{}'",
        module_path,
        category,
        get_loggable_content(matched)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_absent_group_is_distinct_from_empty() {
        let result = MatchResult {
            groups: vec![Some("ab".to_string()), None, Some(String::new())],
            start: 0,
            end: 2,
        };
        assert_eq!(result.full(), "ab");
        assert_eq!(result.group(1), None);
        assert_eq!(result.group(2), Some(""));
        assert_eq!(result.group(3), None);
        assert_eq!(result.slot_count(), 3);
    }

    #[test]
    fn test_match_set_serializes_as_list() {
        let set = MatchSet::new(vec![MatchResult {
            groups: vec![Some("7".to_string())],
            start: 3,
            end: 4,
        }]);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json[0]["groups"][0], "7");
        assert_eq!(json[0]["start"], 3);
    }
}
