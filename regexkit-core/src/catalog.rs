//! Pattern catalog management and the catalog sweep for `regexkit-core`.
//!
//! A catalog maps a category name (e.g. `email_address`) to the pattern that
//! identifies it. The sweep runs every non-empty entry against one input and
//! reports which categories occur, with their full-match text in document
//! order. Catalogs are normally produced by the caller; the YAML loaders here
//! cover the built-in catalog and user-supplied catalog files.
//!
//! License: MIT OR Apache-2.0

use anyhow::Context;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::{RegexKitError, Result};
use crate::match_set::log_category_match_debug;
use crate::options::PatternOptions;
use crate::pattern::Pattern;

/// Result of a sweep: category name to the ordered full-match text of every occurrence.
pub type SweepResult = BTreeMap<String, Vec<String>>;

/// On-disk representation of a catalog file.
#[derive(Debug, Default, Deserialize, Serialize)]
struct CatalogFile {
    #[serde(default)]
    patterns: BTreeMap<String, Option<String>>,
}

/// A named collection of patterns representing semantic categories.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternCatalog {
    entries: BTreeMap<String, String>,
}

impl PatternCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry. Empty pattern text makes the entry inert.
    pub fn insert(&mut self, name: impl Into<String>, pattern: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), pattern.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries that take part in a sweep.
    pub fn active_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, pattern)| !pattern.is_empty())
    }

    /// Parses a catalog from YAML of the form `patterns: { name: 'regex' }`.
    ///
    /// `null` values are kept as inert entries.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_yml::from_str(text).map_err(|e| RegexKitError::Catalog(e.to_string()))?;
        Ok(file
            .patterns
            .into_iter()
            .map(|(name, pattern)| (name, pattern.unwrap_or_default()))
            .collect())
    }

    /// Loads a catalog from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading pattern catalog from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))
            .map_err(|e| RegexKitError::Catalog(format!("{e:#}")))?;
        let catalog = Self::from_yaml_str(&text)?;
        info!("Loaded {} catalog entries from file {}.", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Loads the built-in identifiable-information catalog.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default catalog from embedded string...");
        let default_yaml = include_str!("../config/default_catalog.yaml");
        let catalog = Self::from_yaml_str(default_yaml)?;
        debug!("Loaded {} default catalog entries.", catalog.len());
        Ok(catalog)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PatternCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Merges `overrides` over `base`.
///
/// An override replaces the base entry of the same name; an override with
/// empty text therefore disables that category.
pub fn merge_catalogs(base: PatternCatalog, overrides: Option<PatternCatalog>) -> PatternCatalog {
    debug!("merge_catalogs called. Base entries: {}", base.len());
    let mut merged = base;
    if let Some(user) = overrides {
        debug!("Override catalog provided. Merging {} entries.", user.len());
        for (name, pattern) in user.entries {
            if pattern.is_empty() && merged.entries.contains_key(&name) {
                warn!("Catalog entry '{}' disabled by an empty override.", name);
            }
            merged.entries.insert(name, pattern);
        }
    }
    debug!("Final catalog entries after merge: {}", merged.len());
    merged
}

/// Sweeps `input` with every non-empty catalog entry.
///
/// Categories without an occurrence are left out. Entries are evaluated in
/// parallel; the result is keyed by category name and each list keeps the
/// document order of its occurrences.
pub fn sweep(catalog: &PatternCatalog, input: &str) -> Result<SweepResult> {
    let entries: Vec<(&str, &str)> = catalog.active_entries().collect();
    debug!(
        "Sweeping input of {} bytes with {} active catalog entries ({} inert).",
        input.len(),
        entries.len(),
        catalog.len() - entries.len()
    );

    let hits = entries
        .par_iter()
        .map(|&(name, pattern)| sweep_entry(name, pattern, input))
        .collect::<Result<Vec<_>>>()?;

    let result: SweepResult = hits.into_iter().flatten().collect();
    debug!("Sweep flagged {} categories.", result.len());
    Ok(result)
}

fn sweep_entry(name: &str, pattern: &str, input: &str) -> Result<Option<(String, Vec<String>)>> {
    let compiled = Pattern::compile(pattern, PatternOptions::default())?;
    if !compiled.find(input) {
        return Ok(None);
    }

    let found: Vec<String> = compiled.full_matches(input).map(str::to_string).collect();
    for m in &found {
        log_category_match_debug("[regexkit_core::catalog]", name, m);
    }
    Ok(Some((name.to_string(), found)))
}
