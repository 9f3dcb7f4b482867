//! Discovery of configuration layers on disk
//!
//! Documents are collected from these sources, earliest first, so that a
//! later layer overrides an earlier one when resolved:
//!
//! 1. **Global defaults** - `<config_dir>/commit-rules/config.{toml,json,yaml,yml}`
//! 2. **Repository config** - `.commitlintrc.{toml,json,yaml,yml}` or
//!    `commitlint.config.toml` in the repository root
//! 3. **Local overrides** - `.commitlintrc.local.toml` (git-ignored)

use crate::document::ConfigDocument;
use crate::Result;
use std::path::{Path, PathBuf};

/// Repository config file names, in lookup order
pub const REPO_CONFIG_NAMES: &[&str] = &[
    ".commitlintrc.toml",
    ".commitlintrc.json",
    ".commitlintrc.yaml",
    ".commitlintrc.yml",
    "commitlint.config.toml",
];

/// Local override file name
pub const LOCAL_CONFIG_NAME: &str = ".commitlintrc.local.toml";

/// Default base directory, relative to the repository root
pub const BASE_DIR: &str = ".commitlint/bases";

const GLOBAL_CONFIG_NAMES: &[&str] = &["config.toml", "config.json", "config.yaml", "config.yml"];

/// Finds and loads the configuration layers for a repository
pub struct LayeredLoader {
    root: PathBuf,

    /// Override for the global config directory (used for testing).
    /// When `None`, `dirs::config_dir()/commit-rules` is used.
    global_dir_override: Option<PathBuf>,
}

impl LayeredLoader {
    /// Create a loader for a repository.
    ///
    /// The global layer is read from `<config_dir>/commit-rules`.
    ///
    /// # Arguments
    ///
    /// * `root` - The repository root holding `.commitlintrc.*` and `.commitlint/bases`
    ///
    /// # Example
    ///
    /// ```
    /// use commit_rules_core::LayeredLoader;
    /// use std::path::Path;
    ///
    /// let loader = LayeredLoader::new("/work/project");
    /// assert_eq!(loader.root(), Path::new("/work/project"));
    /// ```
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            global_dir_override: None,
        }
    }

    /// Create a loader with a custom global config directory.
    ///
    /// This keeps the real user config out of tests and lets the CLI
    /// honour `--global-dir`.
    ///
    /// # Arguments
    ///
    /// * `root` - The repository root holding `.commitlintrc.*` and `.commitlint/bases`
    /// * `global_dir` - Directory searched for `config.{toml,json,yaml,yml}`
    ///
    /// # Example
    ///
    /// ```
    /// use commit_rules_core::LayeredLoader;
    ///
    /// let empty = tempfile::TempDir::new().unwrap();
    /// let loader = LayeredLoader::with_global_dir(empty.path(), empty.path().join("global"));
    /// assert!(loader.discover().is_empty());
    /// ```
    pub fn with_global_dir(root: impl Into<PathBuf>, global_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            global_dir_override: Some(global_dir.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn global_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.global_dir_override {
            return Some(dir.clone());
        }
        dirs::config_dir().map(|d| d.join("commit-rules"))
    }

    /// Directory scanned for base configurations
    pub fn base_dir(&self) -> PathBuf {
        self.root.join(BASE_DIR)
    }

    /// The repository config file, if one exists
    pub fn repo_config_path(&self) -> Option<PathBuf> {
        first_existing(&self.root, REPO_CONFIG_NAMES)
    }

    pub fn has_config(&self) -> bool {
        self.repo_config_path().is_some()
    }

    pub fn has_local_overrides(&self) -> bool {
        self.root.join(LOCAL_CONFIG_NAME).is_file()
    }

    /// Paths of every layer that exists, earliest first
    pub fn discover(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Layer 1 - Global defaults
        match self.global_dir().and_then(|dir| first_existing(&dir, GLOBAL_CONFIG_NAMES)) {
            Some(path) => {
                tracing::debug!(?path, "Found global config (layer 1)");
                paths.push(path);
            }
            None => tracing::debug!("No global config found (layer 1) - skipping"),
        }

        // Layer 2 - Repository config
        match self.repo_config_path() {
            Some(path) => {
                tracing::debug!(?path, "Found repo config (layer 2)");
                paths.push(path);
            }
            None => tracing::debug!(root = ?self.root, "No repo config found (layer 2) - skipping"),
        }

        // Layer 3 - Local overrides
        let local = self.root.join(LOCAL_CONFIG_NAME);
        if local.is_file() {
            tracing::debug!(path = ?local, "Found local config (layer 3)");
            paths.push(local);
        }

        paths
    }

    /// Load every discovered layer, root-last, ready for resolution
    pub fn load(&self) -> Result<Vec<ConfigDocument>> {
        self.discover()
            .iter()
            .map(|path| ConfigDocument::load(path))
            .collect()
    }
}

fn first_existing(dir: &Path, names: &[&str]) -> Option<PathBuf> {
    names
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
