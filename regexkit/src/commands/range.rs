//! `range` command: prints one regex alternative per line.

use anyhow::Result;
use std::io::Write;

use regexkit_core::{Comparison, range_regex};

use crate::cli::RangeCommand;

pub fn run_range(cmd: &RangeCommand, out: &mut impl Write) -> Result<()> {
    let comparison = Comparison::from(cmd.comparison);
    let alternatives = range_regex(cmd.bound, comparison, cmd.sql)?;
    for alternative in alternatives.alternatives() {
        writeln!(out, "{alternative}")?;
    }
    Ok(())
}
