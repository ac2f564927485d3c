//! `generate` command: prints strings that satisfy a simple pattern.

use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use regexkit_core::Generator;

use crate::cli::GenerateCommand;

pub fn run_generate(cmd: &GenerateCommand, out: &mut impl Write) -> Result<()> {
    let mut generator = match cmd.seed {
        Some(seed) => {
            debug!("Seeding generator with {seed}.");
            Generator::seeded(seed)
        }
        None => Generator::new(),
    };

    for _ in 0..cmd.count {
        let generated = generator
            .synthesize(&cmd.pattern, cmd.length)
            .with_context(|| format!("Could not generate a string for {:?}", cmd.pattern))?;
        writeln!(out, "{generated}")?;
    }
    Ok(())
}
