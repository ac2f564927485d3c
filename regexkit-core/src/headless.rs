// regexkit-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use of the catalog sweep.

use crate::catalog::{merge_catalogs, sweep, PatternCatalog, SweepResult};
use crate::errors::Result;

/// Sweeps `input` with the built-in identifiable-information catalog.
pub fn find_identifiable_information(input: &str) -> Result<SweepResult> {
    find_identifiable_information_with(None, input)
}

/// Sweeps `input` with the built-in catalog merged with optional overrides.
///
/// # Arguments
///
/// * `overrides` - Extra or replacement catalog entries; an empty pattern disables a built-in category.
/// * `input` - The text to inspect.
pub fn find_identifiable_information_with(
    overrides: Option<PatternCatalog>,
    input: &str,
) -> Result<SweepResult> {
    let catalog = merge_catalogs(PatternCatalog::load_default()?, overrides);
    sweep(&catalog, input)
}
