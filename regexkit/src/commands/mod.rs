// regexkit/src/commands/mod.rs
//! Command implementations. Each runner writes its result to the supplied
//! writer so the output can be captured in tests.

pub mod generate;
pub mod pattern;
pub mod range;
pub mod sweep;
