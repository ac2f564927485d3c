//! pattern.rs - Compilation and validation of caller-supplied patterns.
//!
//! Every public operation that accepts raw pattern text goes through
//! [`Pattern::compile`]. Patterns are compiled per call and never cached, so
//! a failed compilation is always reported to the caller that asked for it.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, trace};
use once_cell::sync::OnceCell;
use regex::{CaptureMatches, Regex};

use crate::errors::{RegexKitError, Result};
use crate::options::PatternOptions;

/// A successfully compiled pattern together with its source and options.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    options: PatternOptions,
    regex: Regex,
    /// Whole-input variant, built the first time a full match is requested.
    anchored: OnceCell<Regex>,
}

impl Pattern {
    /// Compiles `source` under `options`.
    pub fn compile(source: &str, options: PatternOptions) -> Result<Self> {
        trace!("Compiling pattern {:?} with options {:?}", source, options);
        let regex = options
            .builder(&options.effective_source(source))
            .build()
            .map_err(|e| {
                debug!("Pattern {:?} failed to compile: {}", source, e);
                RegexKitError::invalid_pattern(source, e)
            })?;

        Ok(Self {
            source: source.to_string(),
            options,
            regex,
            anchored: OnceCell::new(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn options(&self) -> PatternOptions {
        self.options
    }

    /// Number of capture slots, including slot 0 for the full occurrence.
    pub fn slot_count(&self) -> usize {
        self.regex.captures_len()
    }

    /// True if at least one occurrence exists anywhere in `input`.
    pub fn find(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// True if the whole of `input` is matched by the pattern.
    pub fn is_full_match(&self, input: &str) -> Result<bool> {
        let anchored = self.anchored.get_or_try_init(|| {
            self.options
                .builder(&self.options.anchored_source(&self.source))
                .build()
                .map_err(|e| RegexKitError::invalid_pattern(&self.source, e))
        })?;
        Ok(anchored.is_match(input))
    }

    /// Iterates over the non-overlapping occurrences in document order.
    pub fn captures_iter<'r, 'h>(&'r self, input: &'h str) -> CaptureMatches<'r, 'h> {
        self.regex.captures_iter(input)
    }

    /// Iterates over the full-match text of each occurrence.
    pub fn full_matches<'r, 'h>(&'r self, input: &'h str) -> impl Iterator<Item = &'h str> + 'r
    where
        'h: 'r,
    {
        self.regex.find_iter(input).map(|m| m.as_str())
    }
}

/// Reports whether `pattern` compiles with the default options.
///
/// Never fails; a syntax error simply yields `false`.
pub fn is_valid(pattern: &str) -> bool {
    match Pattern::compile(pattern, PatternOptions::default()) {
        Ok(_) => true,
        Err(e) => {
            debug!("Rejected invalid pattern: {}", e);
            false
        }
    }
}

/// Validates `pattern` and compiles it under `options`.
///
/// The validation always uses the default options, so a pattern that only
/// compiles because of `LITERAL` is still rejected.
pub(crate) fn validate_and_compile(pattern: &str, options: PatternOptions) -> Result<Pattern> {
    Pattern::compile(pattern, PatternOptions::default())?;
    Pattern::compile(pattern, options)
}
