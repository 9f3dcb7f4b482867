//! Configuration resolution with `extends` inheritance
//!
//! The `ConfigResolver` merges an ordered sequence of documents (root last)
//! into a single [`EffectiveConfig`]. For each document, its `extends`
//! targets are resolved first, depth-first and left to right, then the
//! document's own rules are laid on top. Every write fully replaces the
//! previous definition of that rule; lists are never unioned.

use crate::document::ConfigDocument;
use crate::registry::BaseRegistry;
use crate::rule::{RuleDefinition, RuleSeverity};
use crate::schema;
use crate::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// A rule name written by more than one document.
///
/// Informational only: the later document wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleConflict {
    pub rule: String,
    /// Document whose definition was replaced
    pub previous: String,
    /// Document whose definition now applies
    pub winner: String,
}

/// The fully resolved rule table
///
/// Produced once by [`ConfigResolver::resolve`] and read-only afterwards.
/// Rules are stored in a `BTreeMap`, so iteration order is by rule name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EffectiveConfig {
    rules: BTreeMap<String, RuleDefinition>,
    origins: BTreeMap<String, String>,
    conflicts: Vec<RuleConflict>,
}

impl EffectiveConfig {
    pub fn get(&self, rule: &str) -> Option<&RuleDefinition> {
        self.rules.get(rule)
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.rules.contains_key(rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules, including disabled ones
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleDefinition)> {
        self.rules.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Rules a rule engine should evaluate (severity other than `Off`)
    pub fn enforced(&self) -> impl Iterator<Item = (&str, &RuleDefinition)> {
        self.iter().filter(|(_, def)| def.is_enforced())
    }

    pub fn severity_of(&self, rule: &str) -> Option<RuleSeverity> {
        self.rules.get(rule).map(|def| def.severity)
    }

    /// The string list of a list-valued rule, e.g. permitted types
    pub fn allowed_values(&self, rule: &str) -> Option<&[String]> {
        self.rules.get(rule).and_then(|def| def.value.as_list())
    }

    /// Name of the document that last wrote `rule`
    pub fn origin(&self, rule: &str) -> Option<&str> {
        self.origins.get(rule).map(String::as_str)
    }

    /// Rule names that were overridden during resolution, in merge order
    pub fn conflicts(&self) -> &[RuleConflict] {
        &self.conflicts
    }

    /// Write `rule`, recording a conflict when a different document wrote it
    /// before. A base reached twice through a diamond rewrites its own rules
    /// and is not a conflict.
    fn insert(&mut self, rule: &str, definition: RuleDefinition, document: &str) {
        self.rules.insert(rule.to_string(), definition);
        if let Some(previous) = self.origins.insert(rule.to_string(), document.to_string()) {
            if previous == document {
                return;
            }
            tracing::debug!(rule, %previous, winner = document, "Rule overridden");
            self.conflicts.push(RuleConflict {
                rule: rule.to_string(),
                previous,
                winner: document.to_string(),
            });
        }
    }
}

/// Options controlling resolution
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Fail on rule names that are not in the catalogue instead of
    /// accepting them unchecked
    pub deny_unknown_rules: bool,
}

/// Resolves documents against a registry of base configurations
pub struct ConfigResolver<'a> {
    registry: &'a BaseRegistry,
    options: ResolveOptions,
}

impl<'a> ConfigResolver<'a> {
    /// Create a resolver with default options.
    ///
    /// Unknown rule names are accepted with a warning.
    ///
    /// # Arguments
    ///
    /// * `registry` - Bases that `extends` entries are looked up in
    ///
    /// # Example
    ///
    /// ```
    /// use commit_rules_core::{BaseRegistry, ConfigDocument, ConfigResolver};
    ///
    /// let registry = BaseRegistry::new();
    /// let config = ConfigResolver::new(&registry)
    ///     .resolve(&[ConfigDocument::new("root")])
    ///     .unwrap();
    /// assert!(config.is_empty());
    /// ```
    pub fn new(registry: &'a BaseRegistry) -> Self {
        Self::with_options(registry, ResolveOptions::default())
    }

    /// Create a resolver with explicit options.
    ///
    /// # Arguments
    ///
    /// * `registry` - Bases that `extends` entries are looked up in
    /// * `options` - Resolution options, e.g. rejecting uncatalogued rules
    ///
    /// # Example
    ///
    /// ```
    /// use commit_rules_core::{BaseRegistry, ConfigResolver, ResolveOptions};
    ///
    /// let registry = BaseRegistry::new();
    /// let resolver = ConfigResolver::with_options(
    ///     &registry,
    ///     ResolveOptions { deny_unknown_rules: true },
    /// );
    /// assert!(resolver.resolve(&[]).unwrap().is_empty());
    /// ```
    pub fn with_options(registry: &'a BaseRegistry, options: ResolveOptions) -> Self {
        Self { registry, options }
    }

    /// Merge `documents` (root last) into an effective configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownExtendsTarget`] if an `extends` name is not registered
    /// - [`Error::MalformedRuleDefinition`] if a rule's value does not fit its rule
    /// - [`Error::ExtendsCycle`] if a base extends itself
    /// - [`Error::UnknownRule`] for uncatalogued rules when denied by options
    ///
    /// No partial configuration is returned on error.
    pub fn resolve(&self, documents: &[ConfigDocument]) -> Result<EffectiveConfig> {
        let mut effective = EffectiveConfig::default();
        for document in documents {
            let mut chain = Vec::new();
            self.apply(document, &mut effective, &mut chain)?;
        }
        tracing::debug!(
            documents = documents.len(),
            rules = effective.len(),
            overrides = effective.conflicts.len(),
            "Resolved effective configuration"
        );
        Ok(effective)
    }

    fn apply(
        &self,
        document: &ConfigDocument,
        effective: &mut EffectiveConfig,
        chain: &mut Vec<String>,
    ) -> Result<()> {
        for target in &document.extends {
            let base = self
                .registry
                .get(target)
                .ok_or_else(|| Error::UnknownExtendsTarget {
                    document: document.name.clone(),
                    target: target.clone(),
                })?;

            if chain.contains(&base.name) {
                let mut names = chain.clone();
                names.push(base.name.clone());
                return Err(Error::ExtendsCycle {
                    chain: names.join(" -> "),
                });
            }

            tracing::debug!(document = %document.name, base = %base.name, "Resolving base");
            chain.push(base.name.clone());
            self.apply(base, effective, chain)?;
            chain.pop();
        }

        for (rule, definition) in &document.rules {
            self.validate(document, rule, definition)?;
            effective.insert(rule, definition.clone(), &document.name);
        }
        Ok(())
    }

    fn validate(&self, document: &ConfigDocument, rule: &str, definition: &RuleDefinition) -> Result<()> {
        match schema::kind_of(rule) {
            Some(kind) => schema::check(kind, definition)
                .map_err(|reason| Error::malformed(&document.name, rule, reason)),
            None if self.options.deny_unknown_rules => Err(Error::UnknownRule {
                document: document.name.clone(),
                rule: rule.to_string(),
            }),
            None => {
                tracing::warn!(document = %document.name, rule, "Unknown rule accepted without value checks");
                Ok(())
            }
        }
    }
}
