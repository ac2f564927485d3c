// regexkit/src/logger.rs
//! Logger initialisation for the regexkit CLI.
//!
//! `RUST_LOG` is honoured unless an explicit level is passed, in which case the
//! explicit level wins. Safe to call more than once; later calls are ignored.

use env_logger::{Builder, Env};
use log::LevelFilter;

pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(true);
    let _ = builder.try_init();
}

/// Picks the level override from the global CLI flags.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
