//! extract.rs - Grouped match extraction with limit semantics.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::errors::{RegexKitError, Result};
use crate::match_set::{MatchResult, MatchSet};
use crate::options::PatternOptions;
use crate::pattern::validate_and_compile;

/// Sentinel limit meaning "every occurrence".
pub const UNBOUNDED: i64 = -1;

/// How many occurrences an extraction may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLimit {
    Unbounded,
    AtMost(usize),
}

impl TryFrom<i64> for MatchLimit {
    type Error = RegexKitError;

    fn try_from(limit: i64) -> Result<Self> {
        match limit {
            UNBOUNDED => Ok(MatchLimit::Unbounded),
            n if n < UNBOUNDED => Err(RegexKitError::InvalidArgument(format!(
                "match limit must be -1 or greater, got {n}"
            ))),
            n => usize::try_from(n)
                .map(MatchLimit::AtMost)
                .map_err(|_| RegexKitError::InvalidArgument(format!("match limit {n} is too large"))),
        }
    }
}

/// Extracts the first `limit` occurrences of `pattern` in `input`.
///
/// `-1` returns every occurrence and `0` returns nothing after validating the
/// pattern. The full result is computed before it is truncated.
pub fn extract(pattern: &str, options: PatternOptions, limit: i64, input: &str) -> Result<MatchSet> {
    let compiled = validate_and_compile(pattern, options)?;
    let limit = MatchLimit::try_from(limit)?;

    if limit == MatchLimit::AtMost(0) {
        return Ok(MatchSet::default());
    }

    let mut set = MatchSet::new(
        compiled
            .captures_iter(input)
            .map(|caps| MatchResult::from_captures(&caps))
            .collect(),
    );
    debug!(
        "Pattern {:?} produced {} occurrence(s) with {} slot(s) each.",
        pattern,
        set.len(),
        compiled.slot_count()
    );

    if let MatchLimit::AtMost(n) = limit {
        set.truncate(n);
    }
    Ok(set)
}

/// Extracts every occurrence of `pattern` in `input`.
pub fn extract_all(pattern: &str, options: PatternOptions, input: &str) -> Result<MatchSet> {
    extract(pattern, options, UNBOUNDED, input)
}

/// True if `pattern` matches the whole of `input`.
pub fn matches(pattern: &str, options: PatternOptions, input: &str) -> Result<bool> {
    validate_and_compile(pattern, options)?.is_full_match(input)
}

/// True if `pattern` occurs anywhere in `input`.
pub fn find(pattern: &str, options: PatternOptions, input: &str) -> Result<bool> {
    Ok(validate_and_compile(pattern, options)?.find(input))
}
