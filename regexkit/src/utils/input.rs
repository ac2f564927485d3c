// regexkit/src/utils/input.rs
//! Resolves the text a command operates on: an inline argument, a file, or stdin.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::fs;
use std::io::{self, Read};

use regexkit_core::RegexKitError;

use crate::cli::InputArgs;

/// Returns the command input, reading stdin only when it is not a terminal.
pub fn resolve_input(args: &InputArgs) -> Result<String> {
    if let Some(text) = &args.input {
        debug!("Using inline input ({} bytes).", text.len());
        return Ok(text.clone());
    }

    if let Some(path) = &args.input_file {
        debug!("Reading input from file: {}", path.display());
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(RegexKitError::MissingInput("no --input, --input-file or piped stdin").into());
    }

    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .context("Failed to read input from stdin")?;
    debug!("Read {} bytes from stdin.", buffer.len());
    Ok(strip_trailing_newline(buffer))
}

/// Drops the single line terminator that `echo` and friends append.
fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
