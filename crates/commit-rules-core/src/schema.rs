//! Rule catalogue: the value shape each known rule name expects
//!
//! Rule values are loosely typed on the wire. The catalogue pins each known
//! rule name to a [`ValueKind`] so that a scalar handed to a list rule (or
//! the reverse) is caught while the configuration is resolved, not when an
//! engine later evaluates it.

use crate::rule::{RuleCondition, RuleDefinition, RuleValue};

/// Expected value shape for a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Allow-/deny-list of strings; must be non-empty when enforced with `always`
    List,
    /// Case name or list of case names
    Case,
    /// No value at all
    Empty,
    /// Non-negative integer threshold
    Length,
    /// Single string
    Text,
}

impl ValueKind {
    pub fn describe(self) -> &'static str {
        match self {
            Self::List => "a list of strings",
            Self::Case => "a case name or list of case names",
            Self::Empty => "no value",
            Self::Length => "a non-negative integer",
            Self::Text => "a string",
        }
    }
}

const CATALOGUE: &[(&str, ValueKind)] = &[
    ("type-enum", ValueKind::List),
    ("scope-enum", ValueKind::List),
    ("type-case", ValueKind::Case),
    ("scope-case", ValueKind::Case),
    ("subject-case", ValueKind::Case),
    ("header-case", ValueKind::Case),
    ("body-case", ValueKind::Case),
    ("type-empty", ValueKind::Empty),
    ("scope-empty", ValueKind::Empty),
    ("subject-empty", ValueKind::Empty),
    ("body-empty", ValueKind::Empty),
    ("footer-empty", ValueKind::Empty),
    ("body-leading-blank", ValueKind::Empty),
    ("footer-leading-blank", ValueKind::Empty),
    ("subject-exclamation-mark", ValueKind::Empty),
    ("header-max-length", ValueKind::Length),
    ("header-min-length", ValueKind::Length),
    ("body-max-length", ValueKind::Length),
    ("body-min-length", ValueKind::Length),
    ("body-max-line-length", ValueKind::Length),
    ("footer-max-length", ValueKind::Length),
    ("footer-min-length", ValueKind::Length),
    ("footer-max-line-length", ValueKind::Length),
    ("type-max-length", ValueKind::Length),
    ("type-min-length", ValueKind::Length),
    ("scope-max-length", ValueKind::Length),
    ("scope-min-length", ValueKind::Length),
    ("subject-max-length", ValueKind::Length),
    ("subject-min-length", ValueKind::Length),
    ("subject-full-stop", ValueKind::Text),
    ("header-full-stop", ValueKind::Text),
];

/// Look up the expected value kind for a rule name
pub fn kind_of(rule: &str) -> Option<ValueKind> {
    CATALOGUE
        .iter()
        .find(|(name, _)| *name == rule)
        .map(|(_, kind)| *kind)
}

/// All catalogued rules in declaration order
pub fn known_rules() -> impl Iterator<Item = (&'static str, ValueKind)> {
    CATALOGUE.iter().copied()
}

/// Check a definition against the shape its rule name expects.
///
/// Disabled rules may omit their value and skip the non-empty check, but a
/// value that is present must still have the right shape.
pub fn check(kind: ValueKind, def: &RuleDefinition) -> Result<(), String> {
    let enforced = def.is_enforced();

    if def.value.is_unit() {
        return if !enforced || kind == ValueKind::Empty {
            Ok(())
        } else {
            Err(format!("expected {}, found no value", kind.describe()))
        };
    }

    let shape_ok = match (kind, &def.value) {
        (ValueKind::List, RuleValue::List(_)) => true,
        (ValueKind::Case, RuleValue::Text(_) | RuleValue::List(_)) => true,
        (ValueKind::Length, RuleValue::Integer(_)) => true,
        (ValueKind::Text, RuleValue::Text(_)) => true,
        _ => false,
    };
    if !shape_ok {
        return Err(format!(
            "expected {}, found {}",
            kind.describe(),
            def.value.kind_name()
        ));
    }

    if enforced
        && kind == ValueKind::List
        && def.condition == RuleCondition::Always
        && def.value.as_list().is_some_and(|items| items.is_empty())
    {
        return Err("allow-list must not be empty when the rule is enforced".into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleSeverity;
    use rstest::rstest;

    fn rule_def(severity: RuleSeverity, condition: RuleCondition, value: RuleValue) -> RuleDefinition {
        RuleDefinition::new(severity, condition, value)
    }

    fn list(items: &[&str]) -> RuleValue {
        RuleValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn catalogue_covers_observed_rules() {
        for rule in [
            "type-enum",
            "scope-enum",
            "scope-empty",
            "subject-case",
            "body-max-line-length",
            "subject-empty",
            "type-empty",
        ] {
            assert!(kind_of(rule).is_some(), "{} should be catalogued", rule);
        }
        assert_eq!(kind_of("no-such-rule"), None);
    }

    #[test]
    fn catalogue_has_no_duplicate_names() {
        let mut names: Vec<_> = known_rules().map(|(name, _)| name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[rstest]
    #[case(ValueKind::List, rule_def(RuleSeverity::Error, RuleCondition::Always, list(&["feat"])))]
    #[case(ValueKind::List, rule_def(RuleSeverity::Error, RuleCondition::Never, list(&[])))]
    #[case(ValueKind::List, rule_def(RuleSeverity::Off, RuleCondition::Always, list(&[])))]
    #[case(ValueKind::Case, rule_def(RuleSeverity::Off, RuleCondition::Always, list(&[])))]
    #[case(ValueKind::Case, rule_def(RuleSeverity::Error, RuleCondition::Never, RuleValue::Text("upper-case".into())))]
    #[case(ValueKind::Empty, rule_def(RuleSeverity::Error, RuleCondition::Never, RuleValue::Unit))]
    #[case(ValueKind::Length, rule_def(RuleSeverity::Warning, RuleCondition::Always, RuleValue::Integer(100)))]
    #[case(ValueKind::Length, RuleDefinition::off())]
    #[case(ValueKind::Text, rule_def(RuleSeverity::Error, RuleCondition::Never, RuleValue::Text(".".into())))]
    fn accepts_well_shaped_definitions(#[case] kind: ValueKind, #[case] def: RuleDefinition) {
        assert_eq!(check(kind, &def), Ok(()));
    }

    #[rstest]
    #[case(ValueKind::List, rule_def(RuleSeverity::Error, RuleCondition::Always, RuleValue::Text("feat".into())), "expected a list")]
    #[case(ValueKind::List, rule_def(RuleSeverity::Error, RuleCondition::Always, list(&[])), "must not be empty")]
    #[case(ValueKind::List, rule_def(RuleSeverity::Error, RuleCondition::Always, RuleValue::Unit), "found no value")]
    #[case(ValueKind::Length, rule_def(RuleSeverity::Error, RuleCondition::Always, list(&["100"])), "non-negative integer")]
    #[case(ValueKind::Length, rule_def(RuleSeverity::Off, RuleCondition::Always, RuleValue::Text("x".into())), "found a string")]
    #[case(ValueKind::Empty, rule_def(RuleSeverity::Error, RuleCondition::Never, RuleValue::Integer(1)), "expected no value")]
    fn rejects_mismatched_definitions(
        #[case] kind: ValueKind,
        #[case] def: RuleDefinition,
        #[case] expected: &str,
    ) {
        let err = check(kind, &def).unwrap_err();
        assert!(err.contains(expected), "'{}' should mention '{}'", err, expected);
    }
}
