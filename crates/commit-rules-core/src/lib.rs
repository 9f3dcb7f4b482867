//! Configuration resolution for commit-message convention rules
//!
//! This crate turns declarative rule documents into the effective rule
//! table a commit-message linter evaluates. It does not parse commit
//! messages or run rules itself; see [`engine::RuleEngine`] for the
//! contract an external engine implements.
//!
//! # Architecture
//!
//! ```text
//!   LayeredLoader / Profile / ConfigDocument::load
//!                     |
//!               ConfigDocument*  ---- extends ---->  BaseRegistry
//!                     |
//!               ConfigResolver  (schema checks per rule)
//!                     |
//!               EffectiveConfig  ---->  RuleEngine (external)
//! ```
//!
//! # Example
//!
//! ```
//! use commit_rules_core::{BaseRegistry, ConfigDocument, ConfigResolver, DocumentFormat, RuleSeverity};
//!
//! let mut registry = BaseRegistry::new();
//! registry.register(
//!     "config-conventional",
//!     ConfigDocument::parse("base", "[rules]\nscope-empty = [0]\n", DocumentFormat::Toml).unwrap(),
//! );
//!
//! let root = ConfigDocument::parse(
//!     "root",
//!     "extends = [\"@commitlint/config-conventional\"]\n[rules]\nscope-empty = [2, \"never\"]\n",
//!     DocumentFormat::Toml,
//! )
//! .unwrap();
//!
//! let config = ConfigResolver::new(&registry).resolve(&[root]).unwrap();
//! assert_eq!(config.severity_of("scope-empty"), Some(RuleSeverity::Error));
//! ```

pub mod document;
pub mod engine;
pub mod error;
pub mod layers;
pub mod profile;
pub mod registry;
pub mod resolver;
pub mod rule;
pub mod schema;

pub use document::{ConfigDocument, DocumentFormat};
pub use engine::{CommitMessage, Finding, RuleEngine, ValidationResult};
pub use error::{Error, Result};
pub use layers::LayeredLoader;
pub use profile::Profile;
pub use registry::BaseRegistry;
pub use resolver::{ConfigResolver, EffectiveConfig, ResolveOptions, RuleConflict};
pub use rule::{RuleCondition, RuleDefinition, RuleSeverity, RuleValue};
pub use schema::ValueKind;
