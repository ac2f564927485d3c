// regexkit/src/cli.rs
//! This file defines the command-line interface (CLI) for the regexkit application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use regexkit_core::Comparison;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "regexkit",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate, extract, sweep and synthesize with regular expressions",
    long_about = "regexkit validates regular expressions, extracts grouped matches, sweeps text against a catalog of identifiable-information patterns, generates example strings for simple patterns, and emits regex alternatives that match integers below a bound.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `regexkit` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reports whether a pattern compiles.
    #[command(about = "Report whether a pattern compiles (exit code 1 when it does not).")]
    Validate {
        #[arg(value_name = "PATTERN")]
        pattern: String,
    },

    /// Extracts grouped matches as JSON.
    #[command(about = "Extract the occurrences of a pattern, with capture groups, as JSON.")]
    Extract(ExtractCommand),

    /// Tests whether the whole input matches a pattern.
    #[command(about = "Print whether the whole input matches a pattern.")]
    Matches(MatchCommand),

    /// Tests whether a pattern occurs anywhere in the input.
    #[command(about = "Print whether a pattern occurs anywhere in the input.")]
    Find(MatchCommand),

    /// Sweeps the input with a pattern catalog.
    #[command(about = "Flag which catalog categories occur in the input, as JSON.")]
    Sweep(SweepCommand),

    /// Generates a string matching a simple pattern.
    #[command(about = "Generate a string that matches a simple pattern.")]
    Generate(GenerateCommand),

    /// Emits regex alternatives for integers compared against a bound.
    #[command(about = "Print regex alternatives matching the non-negative integers that satisfy a comparison.")]
    Range(RangeCommand),
}

/// Input shared by the matching commands.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Text to operate on (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "TEXT", help = "Text to operate on instead of stdin.")]
    pub input: Option<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long = "input-file", short = 'f', value_name = "FILE", conflicts_with = "input", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}

/// Arguments for the `extract` command.
#[derive(Args, Debug)]
pub struct ExtractCommand {
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Maximum number of occurrences; -1 returns all.
    #[arg(long, short = 'l', default_value_t = -1, allow_negative_numbers = true, help = "Maximum number of occurrences to return (-1 for all).")]
    pub limit: i64,

    /// Raw option bits.
    #[arg(long, short = 'o', default_value_t = 0, allow_negative_numbers = true, help = "Pattern option bits (2 = case-insensitive, 4 = comments, 8 = multiline, 16 = literal, 32 = dotall).")]
    pub options: i64,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `matches` and `find` commands.
#[derive(Args, Debug)]
pub struct MatchCommand {
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    #[arg(long, short = 'o', default_value_t = 0, allow_negative_numbers = true, help = "Pattern option bits.")]
    pub options: i64,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `sweep` command.
#[derive(Args, Debug)]
pub struct SweepCommand {
    /// Path to a catalog file (YAML).
    #[arg(long = "catalog", short = 'c', value_name = "FILE", help = "Path to a pattern catalog file (YAML), merged over the built-in catalog.")]
    pub catalog: Option<PathBuf>,

    /// Ignore the built-in catalog.
    #[arg(long = "no-defaults", requires = "catalog", help = "Use only the entries of --catalog.")]
    pub no_defaults: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateCommand {
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Maximum length of each random value.
    #[arg(long, short = 'l', default_value_t = 8, allow_negative_numbers = true, help = "Maximum length of each generated value.")]
    pub length: i64,

    /// Seed for reproducible output.
    #[arg(long, short = 's', value_name = "SEED", help = "Seed the generator for reproducible output.")]
    pub seed: Option<u64>,

    /// Number of strings to generate.
    #[arg(long, short = 'n', default_value_t = 1, help = "Number of strings to generate.")]
    pub count: usize,
}

/// Arguments for the `range` command.
#[derive(Args, Debug)]
pub struct RangeCommand {
    #[arg(value_name = "BOUND", allow_negative_numbers = true)]
    pub bound: i64,

    #[arg(long, short = 'c', value_enum, default_value = "lesser", help = "Comparison against the bound.")]
    pub comparison: ComparisonChoice,

    /// Emit SQL-compatible filler classes.
    #[arg(long, help = "Use [0-9] instead of \\d so the output works with SQL regex dialects.")]
    pub sql: bool,
}

/// Comparison operators accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum ComparisonChoice {
    Equal,
    Lesser,
    LesserOrEqual,
    Greater,
    GreaterOrEqual,
    Unequal,
}

impl From<ComparisonChoice> for Comparison {
    fn from(choice: ComparisonChoice) -> Self {
        match choice {
            ComparisonChoice::Equal => Comparison::Equal,
            ComparisonChoice::Lesser => Comparison::Lesser,
            ComparisonChoice::LesserOrEqual => Comparison::LesserOrEqual,
            ComparisonChoice::Greater => Comparison::Greater,
            ComparisonChoice::GreaterOrEqual => Comparison::GreaterOrEqual,
            ComparisonChoice::Unequal => Comparison::Unequal,
        }
    }
}
