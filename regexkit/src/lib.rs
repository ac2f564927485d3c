// regexkit/src/lib.rs
//! # regexkit CLI Application
//!
//! Command-line front end for `regexkit-core`. The binary parses arguments
//! with `clap`, resolves input from an argument, a file or stdin, and hands
//! off to one runner per subcommand.
//!
//! License: MIT OR Apache-2.0

pub mod cli;
pub mod commands;
pub mod logger;
pub mod utils;
