//! Error types for commit-rules-core

use std::path::PathBuf;

/// Result type for commit-rules-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or resolving rule configuration
///
/// Every resolution error is fatal: the resolver never hands back a
/// partially merged configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An `extends` entry names a base that is not registered
    #[error("{document}: extends unknown base configuration '{target}'")]
    UnknownExtendsTarget { document: String, target: String },

    /// A rule entry has an invalid severity, condition, or value shape
    #[error("{document}: malformed rule '{rule}': {reason}")]
    MalformedRuleDefinition {
        document: String,
        rule: String,
        reason: String,
    },

    /// A base configuration extends itself, directly or transitively
    #[error("extends cycle detected: {chain}")]
    ExtendsCycle { chain: String },

    /// A rule name is not in the catalogue and unknown rules are denied
    #[error("{document}: unknown rule '{rule}'")]
    UnknownRule { document: String, rule: String },

    /// A configuration file could not be parsed
    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// A configuration file has an extension we cannot read
    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    /// A configuration file was requested but does not exist
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(
        document: impl Into<String>,
        rule: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRuleDefinition {
            document: document.into(),
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}
