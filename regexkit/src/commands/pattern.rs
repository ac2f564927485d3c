//! Pattern commands: `validate`, `extract`, `matches` and `find`.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use regexkit_core::{PatternOptions, extract, find, is_valid, matches};

use crate::cli::{ExtractCommand, MatchCommand};
use crate::utils::input::resolve_input;

/// Prints `valid` or `invalid` and returns whether the pattern compiles.
pub fn run_validate(pattern: &str, out: &mut impl Write) -> Result<bool> {
    let valid = is_valid(pattern);
    writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
    Ok(valid)
}

/// Prints the extracted `MatchSet` as pretty JSON.
pub fn run_extract(cmd: &ExtractCommand, out: &mut impl Write) -> Result<()> {
    let options = PatternOptions::from_raw(cmd.options)?;
    let input = resolve_input(&cmd.input)?;
    info!("Extracting {:?} (limit {}) from {} bytes.", cmd.pattern, cmd.limit, input.len());

    let found = extract(&cmd.pattern, options, cmd.limit, &input)
        .with_context(|| format!("Extraction with pattern {:?} failed", cmd.pattern))?;
    debug!("Extraction returned {} occurrence(s).", found.len());

    serde_json::to_writer_pretty(&mut *out, &found).context("Failed to serialize matches")?;
    writeln!(out)?;
    Ok(())
}

/// Prints whether the whole input matches.
pub fn run_matches(cmd: &MatchCommand, out: &mut impl Write) -> Result<bool> {
    let options = PatternOptions::from_raw(cmd.options)?;
    let input = resolve_input(&cmd.input)?;
    let result = matches(&cmd.pattern, options, &input)?;
    writeln!(out, "{result}")?;
    Ok(result)
}

/// Prints whether the pattern occurs anywhere in the input.
pub fn run_find(cmd: &MatchCommand, out: &mut impl Write) -> Result<bool> {
    let options = PatternOptions::from_raw(cmd.options)?;
    let input = resolve_input(&cmd.input)?;
    let result = find(&cmd.pattern, options, &input)?;
    writeln!(out, "{result}")?;
    Ok(result)
}
