//! errors.rs - Custom error types for the regexkit-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `regexkit-core` library.
///
/// `#[non_exhaustive]` keeps room for new variants without breaking
/// downstream `match` expressions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RegexKitError {
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    #[error("Failed to load pattern catalog: {0}")]
    Catalog(String),
}

impl RegexKitError {
    pub(crate) fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        RegexKitError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, RegexKitError>;
