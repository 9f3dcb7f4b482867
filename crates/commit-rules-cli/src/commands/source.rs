//! Collecting documents and bases from command-line sources

use std::path::Path;

use commit_rules_core::{
    BaseRegistry, ConfigDocument, ConfigResolver, EffectiveConfig, LayeredLoader, ResolveOptions,
};

use crate::cli::SourceArgs;
use crate::error::{CliError, Result};

/// Load the documents selected by `source`, root last.
///
/// An explicit profile comes first, then each `--config` file in order.
/// Without either, the configuration layers under `cwd` are discovered.
pub fn load_documents(cwd: &Path, source: &SourceArgs) -> Result<Vec<ConfigDocument>> {
    let mut documents = Vec::new();

    if let Some(profile) = source.profile {
        tracing::debug!(%profile, "Using bundled profile");
        documents.push(profile.document()?);
    }
    for path in &source.configs {
        documents.push(ConfigDocument::load(&cwd.join(path))?);
    }

    if documents.is_empty() {
        documents = layered_loader(cwd, source).load()?;
        if documents.is_empty() {
            return Err(CliError::user(format!(
                "No configuration found in {}. Add .commitlintrc.toml or pass --config / --profile.",
                cwd.display()
            )));
        }
    }
    Ok(documents)
}

/// Layer discovery rooted at `cwd`, honouring `--global-dir`
fn layered_loader(cwd: &Path, source: &SourceArgs) -> LayeredLoader {
    match &source.global_dir {
        Some(dir) => LayeredLoader::with_global_dir(cwd, cwd.join(dir)),
        None => LayeredLoader::new(cwd),
    }
}

/// Build the base registry from `--base-dir` or the default base directory
pub fn load_registry(cwd: &Path, source: &SourceArgs) -> Result<BaseRegistry> {
    let dir = match &source.base_dir {
        Some(dir) => cwd.join(dir),
        None => layered_loader(cwd, source).base_dir(),
    };

    let mut registry = BaseRegistry::new();
    let count = registry.load_dir(&dir)?;
    tracing::debug!(?dir, count, "Loaded base configurations");
    Ok(registry)
}

/// Load and resolve everything `source` selects
pub fn resolve_sources(cwd: &Path, source: &SourceArgs) -> Result<EffectiveConfig> {
    let documents = load_documents(cwd, source)?;
    let registry = load_registry(cwd, source)?;
    let options = ResolveOptions {
        deny_unknown_rules: source.deny_unknown_rules,
    };
    let config = ConfigResolver::with_options(&registry, options).resolve(&documents)?;
    Ok(config)
}
