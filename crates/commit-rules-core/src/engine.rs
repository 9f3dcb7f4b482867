//! Contract between an effective configuration and a rule engine
//!
//! This crate does not evaluate commit messages. An external engine
//! implements [`RuleEngine`], walks [`EffectiveConfig::enforced`] and reports
//! one [`Finding`] per violated rule.

use crate::resolver::EffectiveConfig;
use crate::rule::RuleSeverity;
use serde::Serialize;

/// A raw commit message as handed over by a commit-msg hook or CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First line of the message
    pub fn header(&self) -> &str {
        self.0.lines().next().unwrap_or("")
    }
}

/// One violated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule: String,
    pub severity: RuleSeverity,
    pub message: String,
}

/// All findings for one commit message, in engine order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == RuleSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == RuleSeverity::Warning)
    }

    /// A message is valid when no finding has error severity
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }
}

/// Evaluates commit messages against an effective configuration.
///
/// Implementations must skip rules whose severity is `Off` and report
/// findings with the severity taken from the configuration.
pub trait RuleEngine {
    fn validate_commit(&self, message: &CommitMessage, config: &EffectiveConfig) -> ValidationResult;
}
