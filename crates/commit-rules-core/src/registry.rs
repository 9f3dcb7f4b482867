//! Registry of named base configurations
//!
//! `extends` entries are resolved against this registry. No base rule sets
//! ship with the crate; they are registered by the caller or loaded from a
//! directory of documents:
//!
//! ```text
//! .commitlint/bases/
//!   config-conventional.toml
//!   team-defaults.yaml
//! ```
//!
//! Each file is registered under its file stem.

use crate::document::{ConfigDocument, DocumentFormat};
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Named base documents available to `extends`
#[derive(Debug, Clone, Default)]
pub struct BaseRegistry {
    bases: BTreeMap<String, ConfigDocument>,
}

impl BaseRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base under `name`, replacing any previous entry.
    ///
    /// The stored document is renamed to `name` so that errors raised
    /// while resolving it point at the base.
    pub fn register(&mut self, name: impl Into<String>, mut document: ConfigDocument) {
        let name = name.into();
        document.name = name.clone();
        self.bases.insert(name, document);
    }

    /// Register every `*.toml`, `*.json`, `*.yaml` and `*.yml` file in `dir`
    /// under its file stem.
    ///
    /// A missing directory registers nothing. A file that fails to parse or
    /// a directory entry that cannot be read is a hard error. When two files
    /// share a stem the later one in path order wins and a warning is logged.
    /// Returns the number of distinct bases registered.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            tracing::debug!(?dir, "No base directory found, skipping");
            return Ok(0);
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let path = entry.map_err(|e| Error::io(dir, e))?.path();
            let supported = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(DocumentFormat::from_extension)
                .is_some();
            if supported && path.is_file() {
                paths.push(path);
            }
        }
        // Deterministic winner when two files share a stem
        paths.sort();

        let mut loaded: BTreeMap<String, PathBuf> = BTreeMap::new();
        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let document = ConfigDocument::load(&path)?;
            if let Some(shadowed) = loaded.insert(stem.to_string(), path.clone()) {
                tracing::warn!(base = stem, ?shadowed, winner = ?path, "Base defined by more than one file");
            }
            tracing::debug!(base = stem, ?path, "Registered base configuration");
            self.register(stem.to_string(), document);
        }
        Ok(loaded.len())
    }

    /// Look up a base by the name used in `extends`.
    ///
    /// Tries the exact name, then its last `/`-separated segment, so
    /// `@commitlint/config-conventional` finds `config-conventional`.
    pub fn get(&self, name: &str) -> Option<&ConfigDocument> {
        self.bases.get(name).or_else(|| {
            let short = name.rsplit('/').next()?;
            if short == name {
                None
            } else {
                self.bases.get(short)
            }
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.bases.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}
