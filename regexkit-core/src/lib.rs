// regexkit-core/src/lib.rs
//! # regexkit Core Library
//!
//! `regexkit-core` builds higher-level pattern tooling on top of the `regex`
//! crate. Given a pattern and an input it can validate and evaluate the
//! pattern, extract ordered, group-decomposed matches, sweep the input with a
//! named catalog of patterns, synthesize strings that satisfy a pattern, and
//! synthesize regex alternatives describing integers below a bound.
//!
//! The library is stateless between calls: patterns are compiled per call,
//! catalogs are owned by the caller, and the only mutable state is the random
//! source owned by a [`Generator`].
//!
//! ## Modules
//!
//! * `options`: The [`PatternOptions`] bitset applied when compiling patterns.
//! * `pattern`: Compilation and validation ([`Pattern`], [`is_valid`]).
//! * `match_set`: The [`MatchResult`] / [`MatchSet`] data model.
//! * `extract`: [`extract`], [`extract_all`], [`matches`] and [`find`].
//! * `catalog`: [`PatternCatalog`] loading and merging, and the catalog [`sweep`].
//! * `generator`: [`Generator`], which rewrites a pattern into a matching string.
//! * `range`: [`range_regex`] and the [`Comparison`] operators.
//! * `headless`: One-shot identifiable-information scans with the built-in catalog.
//! * `errors`: The [`RegexKitError`] taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use regexkit_core::{extract, range_regex, Comparison, PatternCatalog, PatternOptions, sweep};
//!
//! fn main() -> Result<(), regexkit_core::RegexKitError> {
//!     let found = extract(r"(\w+)@(\w+)\.com", PatternOptions::default(), -1, "a@b.com c@d.com")?;
//!     assert_eq!(found.len(), 2);
//!     assert_eq!(found.get(1).and_then(|m| m.group(2)), Some("d"));
//!
//!     let catalog: PatternCatalog = [("ip", r"\d{1,3}(?:\.\d{1,3}){3}")].into_iter().collect();
//!     let flagged = sweep(&catalog, "host 10.0.0.1")?;
//!     assert_eq!(flagged["ip"], vec!["10.0.0.1"]);
//!
//!     let below = range_regex(1125, Comparison::Lesser, false)?;
//!     assert!(below.accepts("1124")?);
//!     assert!(!below.accepts("1125")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`RegexKitError`]: `InvalidPattern` for
//! patterns that do not compile, `InvalidArgument` for out-of-range limits,
//! lengths, bounds, option bits or comparisons, `MissingInput` for absent
//! input at the text boundaries, and `Catalog` for unreadable catalog files.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod catalog;
pub mod errors;
pub mod extract;
pub mod generator;
pub mod headless;
pub mod match_set;
pub mod options;
pub mod pattern;
pub mod range;

/// Re-exports the custom error type for clear error reporting.
pub use errors::{RegexKitError, Result};

/// Re-exports the option bitset.
pub use options::PatternOptions;

/// Re-exports pattern compilation and validation.
pub use pattern::{is_valid, Pattern};

/// Re-exports the match data model and the PII-safe log helper.
pub use match_set::{redact_sensitive, MatchResult, MatchSet};

/// Re-exports the extraction operations.
pub use extract::{extract, extract_all, find, matches, MatchLimit, UNBOUNDED};

/// Re-exports catalog types and the sweep.
pub use catalog::{merge_catalogs, sweep, PatternCatalog, SweepResult};

/// Re-exports the pattern-constrained generator.
pub use generator::{synthesize, Generator, DIGIT_CHARACTERS, MAX_RANDOM_LENGTH, WORD_CHARACTERS};

/// Re-exports the numeric range synthesizer.
pub use range::{range_regex, Comparison, RegexAlternativeSet, DIGIT_CLASS, SQL_DIGIT_CLASS};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{find_identifiable_information, find_identifiable_information_with};
