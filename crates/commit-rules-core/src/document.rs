//! Configuration documents
//!
//! A document declares the bases it inherits from and its own rules:
//!
//! ```toml
//! extends = ["@commitlint/config-conventional"]
//!
//! [rules]
//! scope-empty = [2, "never"]
//! body-max-line-length = [1, "always", 100]
//! ```
//!
//! The same structure is accepted as JSON or YAML. `extends` may also be a
//! single string. Other top-level keys are ignored.

use crate::rule::RuleDefinition;
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Text formats a document can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        Self::from_extension(extension).ok_or_else(|| Error::UnsupportedFormat {
            extension: extension.to_string(),
        })
    }

    fn label(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum RawExtends {
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(default)]
    extends: RawExtends,
    #[serde(default)]
    rules: BTreeMap<String, Value>,
}

/// A single configuration document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigDocument {
    /// Identifies the document in error messages (file path or base name)
    pub name: String,

    /// Bases to inherit from, merged in order before local rules
    pub extends: Vec<String>,

    /// Local rules, overriding anything inherited
    pub rules: BTreeMap<String, RuleDefinition>,
}

impl ConfigDocument {
    /// Create an empty document
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: Vec::new(),
            rules: BTreeMap::new(),
        }
    }

    /// Append a base to the `extends` list
    pub fn extend(mut self, base: impl Into<String>) -> Self {
        self.extends.push(base.into());
        self
    }

    /// Add or replace a local rule
    pub fn rule(mut self, name: impl Into<String>, definition: RuleDefinition) -> Self {
        self.rules.insert(name.into(), definition);
        self
    }

    /// Parse a document from text in the given format.
    ///
    /// Syntax errors are reported as [`Error::ConfigParse`]; rule tuples
    /// with a bad structure are reported as
    /// [`Error::MalformedRuleDefinition`] naming this document.
    pub fn parse(name: impl Into<String>, content: &str, format: DocumentFormat) -> Result<Self> {
        let name = name.into();
        let parse_error = |message: String| Error::ConfigParse {
            path: name.clone().into(),
            format: format.label().into(),
            message,
        };

        let raw: RawDocument = match format {
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
            DocumentFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
            DocumentFormat::Yaml => {
                // An empty YAML file deserializes to null rather than an empty map
                if content.trim().is_empty() {
                    RawDocument::default()
                } else {
                    serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
                }
            }
        };

        Self::from_raw(name, raw)
    }

    /// Read and parse a document from disk, detecting the format from the
    /// file extension. The document is named after the path.
    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(?path, "Loading config document");
        Self::parse(path.display().to_string(), &content, format)
    }

    fn from_raw(name: String, raw: RawDocument) -> Result<Self> {
        let extends = match raw.extends {
            RawExtends::None => Vec::new(),
            RawExtends::One(base) => vec![base],
            RawExtends::Many(bases) => bases,
        };

        let mut rules = BTreeMap::new();
        for (rule, value) in raw.rules {
            let definition = RuleDefinition::from_json(&value)
                .map_err(|reason| Error::malformed(&name, &rule, reason))?;
            rules.insert(rule, definition);
        }

        Ok(Self {
            name,
            extends,
            rules,
        })
    }
}
