//! options.rs - Match option flags shared by every pattern-accepting operation.
//!
//! The bit values follow the conventional regex flag numbering so that raw
//! integers coming from configuration or the command line can be passed
//! through unchanged.
//!
//! License: MIT OR APACHE 2.0

use bitflags::bitflags;
use regex::RegexBuilder;

use crate::errors::{RegexKitError, Result};

bitflags! {
    /// Option bitset applied when compiling a pattern.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PatternOptions: u32 {
        /// Case-insensitive matching.
        const CASE_INSENSITIVE = 0x02;
        /// Whitespace in the pattern is ignored and `#` starts a comment.
        const COMMENTS = 0x04;
        /// `^` and `$` match at line boundaries.
        const MULTILINE = 0x08;
        /// The pattern text is matched literally.
        const LITERAL = 0x10;
        /// `.` also matches `\n`.
        const DOTALL = 0x20;
    }
}

impl PatternOptions {
    /// Converts a raw flag integer into a validated option set.
    ///
    /// Negative values and unknown bits are rejected rather than truncated.
    pub fn from_raw(raw: i64) -> Result<Self> {
        let bits = u32::try_from(raw).map_err(|_| {
            RegexKitError::InvalidArgument(format!("pattern options must be non-negative, got {raw}"))
        })?;
        Self::from_bits(bits).ok_or_else(|| {
            RegexKitError::InvalidArgument(format!("unknown pattern option bits: {bits:#x}"))
        })
    }

    /// Flags that still apply after `LITERAL` is taken into account. A literal
    /// pattern keeps case-insensitivity and nothing else.
    fn active(&self) -> Self {
        if self.contains(PatternOptions::LITERAL) {
            *self & (PatternOptions::LITERAL | PatternOptions::CASE_INSENSITIVE)
        } else {
            *self
        }
    }

    /// Pattern source as it should be handed to the regex engine.
    pub(crate) fn effective_source(&self, source: &str) -> String {
        if self.contains(PatternOptions::LITERAL) {
            regex::escape(source)
        } else {
            source.to_string()
        }
    }

    /// Wraps `source` so the compiled regex must cover the whole haystack.
    ///
    /// `\A`/`\z` are used instead of `^`/`$` so the anchoring does not change
    /// under `MULTILINE`. Under `COMMENTS` a trailing `#` comment would swallow
    /// the closing group, hence the newline.
    pub(crate) fn anchored_source(&self, source: &str) -> String {
        let inner = self.effective_source(source);
        if self.active().contains(PatternOptions::COMMENTS) {
            format!("\\A(?:{inner}\n)\\z")
        } else {
            format!("\\A(?:{inner})\\z")
        }
    }

    pub(crate) fn builder(&self, source: &str) -> RegexBuilder {
        let active = self.active();
        let mut builder = RegexBuilder::new(source);
        builder
            .case_insensitive(active.contains(PatternOptions::CASE_INSENSITIVE))
            .ignore_whitespace(active.contains(PatternOptions::COMMENTS))
            .multi_line(active.contains(PatternOptions::MULTILINE))
            .dot_matches_new_line(active.contains(PatternOptions::DOTALL))
            .size_limit(10 * (1 << 20)); // 10 MB limit for compiled regex
        builder
    }
}
