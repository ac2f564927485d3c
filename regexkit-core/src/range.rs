//! range.rs - Regex alternatives describing integers that satisfy a comparison.
//!
//! For a bound with decimal digits `d[0..k]` the LESSER family is covered by:
//!
//! * every shorter length `1..k` (`^` + filler × L + `$`),
//! * a smaller leading digit with the same length (only when `d[0] > 1`),
//! * for each later position `i` with `d[i] > 0`, the prefix `d[0..i]`, a
//!   smaller digit at `i`, and free trailing digits.
//!
//! Membership is "fully matches at least one alternative"; the alternatives are
//! never joined into a single pattern.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{RegexKitError, Result};
use crate::options::PatternOptions;
use crate::pattern::Pattern;

/// Filler class for the general-purpose dialect.
pub const DIGIT_CLASS: &str = r"\d";
/// Filler class for SQL regex dialects, which lack `\d`.
pub const SQL_DIGIT_CLASS: &str = "[0-9]";

/// A comparison between a candidate and a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Equal,
    Lesser,
    LesserOrEqual,
    Greater,
    GreaterOrEqual,
    Unequal,
}

impl Comparison {
    pub const ALL: [Comparison; 6] = [
        Comparison::Equal,
        Comparison::Lesser,
        Comparison::LesserOrEqual,
        Comparison::Greater,
        Comparison::GreaterOrEqual,
        Comparison::Unequal,
    ];

    pub fn evaluate<T: PartialOrd>(self, candidate: T, bound: T) -> bool {
        match self {
            Comparison::Equal => candidate == bound,
            Comparison::Lesser => candidate < bound,
            Comparison::LesserOrEqual => candidate <= bound,
            Comparison::Greater => candidate > bound,
            Comparison::GreaterOrEqual => candidate >= bound,
            Comparison::Unequal => candidate != bound,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Comparison::Equal => "equal",
            Comparison::Lesser => "lesser",
            Comparison::LesserOrEqual => "lesser_or_equal",
            Comparison::Greater => "greater",
            Comparison::GreaterOrEqual => "greater_or_equal",
            Comparison::Unequal => "unequal",
        }
    }

    fn includes_bound(self) -> bool {
        matches!(self, Comparison::Equal | Comparison::LesserOrEqual)
    }

    fn includes_smaller(self) -> bool {
        matches!(self, Comparison::Lesser | Comparison::LesserOrEqual)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Comparison {
    type Err = RegexKitError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Comparison::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| RegexKitError::InvalidArgument(format!("unknown comparison '{s}'")))
    }
}

/// Regex sources whose union describes a set of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegexAlternativeSet {
    alternatives: Vec<String>,
}

impl RegexAlternativeSet {
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.alternatives
    }

    /// Compiles every alternative once for repeated membership tests.
    pub fn compile(&self) -> Result<Vec<Pattern>> {
        self.alternatives
            .iter()
            .map(|alt| Pattern::compile(alt, PatternOptions::default()))
            .collect()
    }

    /// True if `candidate` fully matches at least one alternative.
    pub fn accepts(&self, candidate: &str) -> Result<bool> {
        for pattern in self.compile()? {
            if pattern.is_full_match(candidate)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Emits the alternatives matching exactly the non-negative integers `n` for
/// which `comparison.evaluate(n, bound)` holds.
///
/// Only `Equal`, `Lesser` and `LesserOrEqual` are supported.
pub fn range_regex(bound: i64, comparison: Comparison, sql_dialect: bool) -> Result<RegexAlternativeSet> {
    if bound < 0 {
        return Err(RegexKitError::InvalidArgument(format!(
            "bound must be non-negative, got {bound}"
        )));
    }
    if !comparison.includes_bound() && !comparison.includes_smaller() {
        return Err(RegexKitError::InvalidArgument(format!(
            "comparison '{comparison}' is not supported for range synthesis"
        )));
    }

    let filler = if sql_dialect { SQL_DIGIT_CLASS } else { DIGIT_CLASS };
    let literal = bound.to_string();
    let digits: Vec<u8> = literal.bytes().map(|b| b - b'0').collect();
    let k = digits.len();
    let mut alternatives = Vec::new();

    if comparison.includes_bound() {
        alternatives.push(literal.clone());
    }

    if comparison.includes_smaller() {
        // Same length, smaller leading digit. A leading 0 would be a shorter
        // number, which the length clause below already covers.
        if k >= 2 && digits[0] > 1 {
            alternatives.push(format!("[1-{}]{}", digits[0] - 1, filler.repeat(k - 1)));
        }

        for i in 1..k.saturating_sub(1) {
            if digits[i] > 0 {
                alternatives.push(format!(
                    "{}[0-{}]{}",
                    &literal[..i],
                    digits[i] - 1,
                    filler.repeat(k - 1 - i)
                ));
            }
        }

        if digits[k - 1] > 0 {
            alternatives.push(format!("{}[0-{}]", &literal[..k - 1], digits[k - 1] - 1));
        }

        for length in 1..k {
            alternatives.push(format!("^{}$", filler.repeat(length)));
        }
    }

    debug!(
        "Synthesized {} alternative(s) for {} {} (sql dialect: {}).",
        alternatives.len(),
        comparison,
        bound,
        sql_dialect
    );
    Ok(RegexAlternativeSet { alternatives })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks exactness against every integer up to `bound + slack`.
    fn assert_exact(bound: i64, comparison: Comparison, sql_dialect: bool, slack: i64) {
        let set = range_regex(bound, comparison, sql_dialect).unwrap();
        let compiled = set.compile().unwrap();
        for n in 0..=bound + slack {
            let candidate = n.to_string();
            let accepted = compiled
                .iter()
                .any(|p| p.is_full_match(&candidate).unwrap());
            assert_eq!(
                accepted,
                comparison.evaluate(n, bound),
                "{n} vs {comparison} {bound}: alternatives {:?}",
                set.alternatives()
            );
        }
    }

    #[test]
    fn test_lesser_than_1125() {
        let set = range_regex(1125, Comparison::Lesser, false).unwrap();
        assert!(set.accepts("0").unwrap());
        assert!(set.accepts("1124").unwrap());
        assert!(!set.accepts("1125").unwrap());
        assert!(!set.accepts("1126").unwrap());
        assert_exact(1125, Comparison::Lesser, false, 50);
        assert_exact(1125, Comparison::Lesser, true, 50);
    }

    #[test]
    fn test_alternatives_for_1125() {
        let set = range_regex(1125, Comparison::LesserOrEqual, false).unwrap();
        assert_eq!(
            set.alternatives(),
            &[
                "1125".to_string(),
                r"1[0-0]\d\d".to_string(),
                r"11[0-1]\d".to_string(),
                "112[0-4]".to_string(),
                r"^\d$".to_string(),
                r"^\d\d$".to_string(),
                r"^\d\d\d$".to_string(),
            ]
        );
    }

    #[test]
    fn test_sql_dialect_uses_bracket_filler() {
        let set = range_regex(30, Comparison::Lesser, true).unwrap();
        assert_eq!(set.alternatives(), &["[1-2][0-9]".to_string(), "^[0-9]$".to_string()]);
    }

    #[test]
    fn test_equal_is_single_literal() {
        let set = range_regex(14000, Comparison::Equal, false).unwrap();
        assert_eq!(set.alternatives(), &["14000".to_string()]);
        assert_exact(14000, Comparison::Equal, false, 10);
    }

    #[test]
    fn test_lesser_or_equal_large_bounds() {
        assert_exact(14000, Comparison::LesserOrEqual, false, 10);
        assert_exact(2500, Comparison::LesserOrEqual, false, 10);
        assert_exact(9099, Comparison::Lesser, true, 10);
    }

    #[test]
    fn test_small_bounds_exhaustively() {
        for bound in 0..=300 {
            for comparison in [Comparison::Equal, Comparison::Lesser, Comparison::LesserOrEqual] {
                assert_exact(bound, comparison, false, 5);
            }
        }
    }

    #[test]
    fn test_lesser_than_zero_is_empty() {
        assert!(range_regex(0, Comparison::Lesser, false).unwrap().is_empty());
        assert_eq!(
            range_regex(0, Comparison::LesserOrEqual, false).unwrap().alternatives(),
            &["0".to_string()]
        );
    }

    #[test]
    fn test_invalid_inputs() {
        for comparison in [Comparison::Greater, Comparison::GreaterOrEqual, Comparison::Unequal] {
            assert!(matches!(
                range_regex(14000, comparison, false),
                Err(RegexKitError::InvalidArgument(_))
            ));
        }
        for comparison in Comparison::ALL {
            assert!(matches!(
                range_regex(-14000, comparison, false),
                Err(RegexKitError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_comparison_evaluate_and_parse() {
        assert!(Comparison::Unequal.evaluate(1, 2));
        assert!(Comparison::GreaterOrEqual.evaluate(2, 2));
        assert!(!Comparison::Greater.evaluate(2, 2));
        assert_eq!("LESSER_OR_EQUAL".parse::<Comparison>().unwrap(), Comparison::LesserOrEqual);
        assert_eq!("greater-or-equal".parse::<Comparison>().unwrap(), Comparison::GreaterOrEqual);
        assert!("bigger".parse::<Comparison>().is_err());
        assert_eq!(Comparison::Lesser.to_string(), "lesser");
    }
}
