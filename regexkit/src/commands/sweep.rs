//! `sweep` command: flags the catalog categories present in the input.

use anyhow::{Context, Result};
use log::info;
use std::io::Write;

use regexkit_core::{PatternCatalog, merge_catalogs, sweep};

use crate::cli::SweepCommand;
use crate::utils::input::resolve_input;

pub fn run_sweep(cmd: &SweepCommand, out: &mut impl Write) -> Result<()> {
    let catalog = load_catalog(cmd)?;
    let input = resolve_input(&cmd.input)?;
    info!(
        "Sweeping {} bytes with {} catalog entries.",
        input.len(),
        catalog.len()
    );

    let found = sweep(&catalog, &input).context("Catalog sweep failed")?;
    serde_json::to_writer_pretty(&mut *out, &found).context("Failed to serialize sweep result")?;
    writeln!(out)?;
    Ok(())
}

fn load_catalog(cmd: &SweepCommand) -> Result<PatternCatalog> {
    let user = match &cmd.catalog {
        Some(path) => Some(
            PatternCatalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        ),
        None => None,
    };

    if cmd.no_defaults {
        return Ok(user.unwrap_or_default());
    }
    let defaults = PatternCatalog::load_default().context("Failed to load built-in catalog")?;
    Ok(merge_catalogs(defaults, user))
}
