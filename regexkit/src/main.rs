// regexkit/src/main.rs
//! regexkit entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::{debug, error};

use regexkit::cli::{Cli, Commands};
use regexkit::commands::{generate, pattern, range, sweep};
use regexkit::logger;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));
    debug!("Parsed arguments: {:?}", cli.command);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Dispatches a subcommand. Predicates that come out false exit with code 1.
fn run(command: Commands) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let success = match command {
        Commands::Validate { pattern } => pattern::run_validate(&pattern, &mut out)?,
        Commands::Extract(cmd) => {
            pattern::run_extract(&cmd, &mut out)?;
            true
        }
        Commands::Matches(cmd) => pattern::run_matches(&cmd, &mut out)?,
        Commands::Find(cmd) => pattern::run_find(&cmd, &mut out)?,
        Commands::Sweep(cmd) => {
            sweep::run_sweep(&cmd, &mut out)?;
            true
        }
        Commands::Generate(cmd) => {
            generate::run_generate(&cmd, &mut out)?;
            true
        }
        Commands::Range(cmd) => {
            range::run_range(&cmd, &mut out)?;
            true
        }
    };
    out.flush()?;

    Ok(if success { ExitCode::SUCCESS } else { ExitCode::from(1) })
}
