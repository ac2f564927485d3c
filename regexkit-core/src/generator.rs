//! generator.rs - Synthesizes example strings for a restricted regex grammar.
//!
//! The pattern text is rewritten by a fixed sequence of stages. Each stage takes
//! the current text, replaces every occurrence of one quantified token with
//! random characters from that token's alphabet, and hands the new text to the
//! next stage:
//!
//! 1. `[set]*`, `[set]+`, `[set]` (plain bracket classes: no ranges, negation or escapes)
//! 2. `.*`, `.+`, `.`
//! 3. `\w*`, `\w+`, `\w`
//! 4. `\d*`, `\d+`, `\d`
//! 5. `\s*`, `\s+`, `\s`
//! 6. `\.` becomes a literal dot
//!
//! Later stages see text injected by earlier ones. Anything outside the
//! grammar is passed through untouched, so the output of an unsupported
//! pattern is not guaranteed to match it.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, trace};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::{Captures, Regex};
use std::collections::HashMap;

use crate::errors::{RegexKitError, Result};
use crate::extract::extract_all;
use crate::options::PatternOptions;
use crate::pattern::validate_and_compile;

/// Characters matched by `\w` (ASCII subset).
pub const WORD_CHARACTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";
/// Characters matched by `\d` (ASCII subset).
pub const DIGIT_CHARACTERS: &str = "0123456789";
/// Largest accepted `max_random_length`.
pub const MAX_RANDOM_LENGTH: i64 = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Quantifier {
    ZeroOrMore,
    OneOrMore,
    ExactlyOne,
}

impl Quantifier {
    const ORDER: [Quantifier; 3] = [
        Quantifier::ZeroOrMore,
        Quantifier::OneOrMore,
        Quantifier::ExactlyOne,
    ];

    fn literal(self) -> &'static str {
        match self {
            Quantifier::ZeroOrMore => "*",
            Quantifier::OneOrMore => "+",
            Quantifier::ExactlyOne => "",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Quantifier::ZeroOrMore => r"\*",
            Quantifier::OneOrMore => r"\+",
            Quantifier::ExactlyOne => "",
        }
    }

    /// `*` draws a random length while `+` always uses the maximum. The
    /// asymmetry is observable output and is kept as is. `+` never produces
    /// an empty string, even when the maximum is zero.
    fn length<R: Rng>(self, rng: &mut R, max: usize) -> usize {
        match self {
            Quantifier::ZeroOrMore => rng.random_range(0..=max),
            Quantifier::OneOrMore => max.max(1),
            Quantifier::ExactlyOne => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Token {
    Dot,
    Word,
    Digit,
    Whitespace,
}

impl Token {
    const ORDER: [Token; 4] = [Token::Dot, Token::Word, Token::Digit, Token::Whitespace];

    fn source(self) -> &'static str {
        match self {
            Token::Dot => r"\.",
            Token::Word => r"\\w",
            Token::Digit => r"\\d",
            Token::Whitespace => r"\\s",
        }
    }

    fn alphabet(self) -> &'static str {
        match self {
            Token::Dot | Token::Word => WORD_CHARACTERS,
            Token::Digit => DIGIT_CHARACTERS,
            Token::Whitespace => " ",
        }
    }
}

/// Bracket class token per quantifier, capturing the class body in group 1.
fn class_token_pattern(quantifier: Quantifier) -> String {
    format!(r"\[([^\[\]\\^-]+)\]{}", quantifier.suffix())
}

/// Unescaped `.`, `\w`, `\d`, `\s` tokens. Group 1 holds the preceding
/// character (or nothing at the start), which must not be a backslash.
static TOKEN_REGEXES: Lazy<HashMap<(Token, Quantifier), Regex>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for token in Token::ORDER {
        for quantifier in Quantifier::ORDER {
            let source = format!(r"(^|[^\\]){}{}", token.source(), quantifier.suffix());
            let regex = Regex::new(&source).expect("built-in token pattern is valid");
            map.insert((token, quantifier), regex);
        }
    }
    map
});

/// Builds strings that satisfy a pattern, drawing randomness from `R`.
#[derive(Debug)]
pub struct Generator<R = StdRng> {
    rng: R,
}

impl Generator<StdRng> {
    /// A generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A generator whose output is reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Generator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Rewrites `pattern` into a string it fully matches.
    ///
    /// `max_random_length` bounds the length of every quantified replacement
    /// and may not exceed [`MAX_RANDOM_LENGTH`].
    pub fn synthesize(&mut self, pattern: &str, max_random_length: i64) -> Result<String> {
        validate_and_compile(pattern, PatternOptions::default())?;
        if max_random_length > MAX_RANDOM_LENGTH {
            return Err(RegexKitError::InvalidArgument(format!(
                "random value length must be at most {MAX_RANDOM_LENGTH}, got {max_random_length}"
            )));
        }
        let max = usize::try_from(max_random_length).map_err(|_| {
            RegexKitError::InvalidArgument(format!(
                "random value length must be non-negative, got {max_random_length}"
            ))
        })?;

        let mut text = pattern.to_string();
        for quantifier in Quantifier::ORDER {
            text = self.rewrite_classes(&text, quantifier, max)?;
        }
        for token in Token::ORDER {
            for quantifier in Quantifier::ORDER {
                text = self.rewrite_token(&text, token, quantifier, max);
            }
        }
        text = unescape_dots(&text);

        debug!("Synthesized {} chars for pattern {:?}.", text.len(), pattern);
        Ok(text)
    }

    /// One random string per distinct class body, substituted at every
    /// occurrence of that class.
    fn rewrite_classes(&mut self, text: &str, quantifier: Quantifier, max: usize) -> Result<String> {
        let found = extract_all(&class_token_pattern(quantifier), PatternOptions::default(), text)?;

        let mut bodies: Vec<String> = Vec::new();
        for m in &found {
            if let Some(body) = m.group(1) {
                if !bodies.iter().any(|b| b == body) {
                    bodies.push(body.to_string());
                }
            }
        }

        let mut result = text.to_string();
        for body in bodies {
            let length = quantifier.length(&mut self.rng, max);
            let replacement = self.generate(length, &body);
            let token = format!("[{}]{}", body, quantifier.literal());
            result = result.replace(&token, &replacement);
        }
        Ok(result)
    }

    /// One random string per stage, substituted at every occurrence of the
    /// token. Adjacent tokens share a preceding character, so the scan is
    /// repeated until none is left.
    fn rewrite_token(&mut self, text: &str, token: Token, quantifier: Quantifier, max: usize) -> String {
        let regex = &TOKEN_REGEXES[&(token, quantifier)];
        if !regex.is_match(text) {
            return text.to_string();
        }

        let length = quantifier.length(&mut self.rng, max);
        let replacement = self.generate(length, token.alphabet());
        let mut result = text.to_string();
        while regex.is_match(&result) {
            result = regex
                .replace_all(&result, |caps: &Captures<'_>| format!("{}{}", &caps[1], replacement))
                .into_owned();
        }
        result
    }

    fn generate(&mut self, length: usize, character_set: &str) -> String {
        let chars: Vec<char> = character_set.chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        let generated: String = (0..length)
            .map(|_| chars[self.rng.random_range(0..chars.len())])
            .collect();
        trace!(
            "Generated {} chars from character set {:?}.",
            generated.chars().count(),
            character_set
        );
        generated
    }
}

fn unescape_dots(text: &str) -> String {
    text.replace(r"\.", ".")
}

/// Synthesizes a matching string with a freshly seeded generator.
pub fn synthesize(pattern: &str, max_random_length: i64) -> Result<String> {
    Generator::new().synthesize(pattern, max_random_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::matches;

    const SUPPORTED: &[&str] = &[
        r"\w", r"\w+", r"\w*", r"\s", r"\s+", r"\s*", r"\d", r"\d+", r"\d*",
        "[abz]", "[abz]*", "[abz]+", "hello.*", ".*", "hello.+", ".+", "hello.", ".",
        r"\w+\d+", r"\w\d+", r"\w\d", r"\w+[123]", r"\d*[abc]+", "a[avc]", ".[12345]+",
        r"\d+\.\d+", r"\d\d\d-\w\w", "[xy][xy]*", "..",
    ];

    fn assert_matches(pattern: &str, generated: &str) {
        assert!(
            matches(pattern, PatternOptions::default(), generated).unwrap(),
            "generated {generated:?} does not match {pattern:?}"
        );
    }

    #[test]
    fn test_supported_patterns_produce_matching_strings() {
        let mut generator = Generator::seeded(7);
        for pattern in SUPPORTED {
            for max in [0, 1, 5, 100] {
                let generated = generator.synthesize(pattern, max).unwrap();
                assert_matches(pattern, &generated);
            }
        }
    }

    #[test]
    fn test_one_or_more_uses_fixed_length() {
        let mut generator = Generator::seeded(1);
        assert_eq!(generator.synthesize(r"\d+", 12).unwrap().len(), 12);
        assert_eq!(generator.synthesize("[ab]+", 9).unwrap().len(), 9);
        assert_eq!(generator.synthesize(r"\s+", 4).unwrap(), "    ");
        assert_eq!(generator.synthesize(r"\w+", 0).unwrap().len(), 1);
    }

    #[test]
    fn test_zero_or_more_is_bounded() {
        let mut generator = Generator::seeded(3);
        for _ in 0..50 {
            assert!(generator.synthesize(r"\w*", 6).unwrap().len() <= 6);
            assert!(generator.synthesize("[q]*", 3).unwrap().len() <= 3);
        }
    }

    #[test]
    fn test_distinct_class_is_broadcast_to_every_occurrence() {
        let mut generator = Generator::seeded(11);
        let generated = generator.synthesize("[abc]+-[abc]+", 8).unwrap();
        let (left, right) = generated.split_once('-').unwrap();
        assert_eq!(left, right);
        assert_eq!(left.len(), 8);
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let a = Generator::seeded(42).synthesize(r"\w*[xyz]+\d*", 20).unwrap();
        let b = Generator::seeded(42).synthesize(r"\w*[xyz]+\d*", 20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_literals_and_escaped_dot_survive() {
        let mut generator = Generator::seeded(5);
        let generated = generator.synthesize(r"v\d\.\d", 3).unwrap();
        assert_eq!(generated.len(), 4);
        assert!(generated.starts_with('v'));
        assert_eq!(&generated[2..3], ".");
    }

    #[test]
    fn test_unsupported_class_is_left_untouched() {
        let mut generator = Generator::seeded(9);
        assert_eq!(generator.synthesize("[a-z]+", 4).unwrap(), "[a-z]+");
        assert_eq!(generator.synthesize("[^q]", 4).unwrap(), "[^q]");
    }

    #[test]
    fn test_length_cap_is_inclusive() {
        let generated = Generator::seeded(2).synthesize(r"\d+", MAX_RANDOM_LENGTH).unwrap();
        assert_eq!(generated.len() as i64, MAX_RANDOM_LENGTH);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut generator = Generator::seeded(0);
        assert!(matches!(
            generator.synthesize("(", 1),
            Err(RegexKitError::InvalidPattern { .. })
        ));
        assert!(matches!(
            generator.synthesize(r"\w", -1),
            Err(RegexKitError::InvalidArgument(_))
        ));
        assert!(matches!(
            generator.synthesize(r"\w+", i64::MAX),
            Err(RegexKitError::InvalidArgument(_))
        ));
        assert!(matches!(
            generator.synthesize(r"\w+", MAX_RANDOM_LENGTH + 1),
            Err(RegexKitError::InvalidArgument(_))
        ));
    }
}
