//! A single named constraint: severity, condition and value

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{RuleCondition, RuleSeverity, RuleValue};

/// One rule entry, e.g. `type-enum = [2, "always", ["feat", "fix"]]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDefinition {
    pub severity: RuleSeverity,
    pub condition: RuleCondition,
    pub value: RuleValue,
}

impl RuleDefinition {
    pub fn new(severity: RuleSeverity, condition: RuleCondition, value: RuleValue) -> Self {
        Self {
            severity,
            condition,
            value,
        }
    }

    /// A disabled rule with no condition or value, i.e. `[0]`
    pub fn off() -> Self {
        Self::new(RuleSeverity::Off, RuleCondition::Always, RuleValue::Unit)
    }

    /// Parse the `[level, condition?, value?]` tuple.
    ///
    /// The condition may only be left out when the level is `0`. Returns a
    /// human-readable reason on failure; callers attach the document and
    /// rule names.
    pub fn from_json(raw: &Value) -> Result<Self, String> {
        let items = raw
            .as_array()
            .ok_or_else(|| format!("expected [level, condition, value], found {}", raw))?;

        if items.is_empty() || items.len() > 3 {
            return Err(format!(
                "expected 1 to 3 entries [level, condition, value], found {}",
                items.len()
            ));
        }

        let severity = match &items[0] {
            Value::Number(n) => n
                .as_u64()
                .and_then(RuleSeverity::from_level)
                .ok_or_else(|| format!("severity {} is not 0, 1 or 2", n))?,
            other => return Err(format!("severity {} is not 0, 1 or 2", other)),
        };

        let condition = match items.get(1) {
            Some(Value::String(s)) => RuleCondition::parse(s)
                .ok_or_else(|| format!("condition '{}' is not \"always\" or \"never\"", s))?,
            Some(other) => {
                return Err(format!(
                    "condition {} is not \"always\" or \"never\"",
                    other
                ));
            }
            None if severity.is_off() => RuleCondition::Always,
            None => {
                return Err(format!(
                    "condition is required when severity is {}",
                    severity.level()
                ));
            }
        };

        let value = match items.get(2) {
            Some(v) => RuleValue::from_json(v)?,
            None => RuleValue::Unit,
        };

        Ok(Self {
            severity,
            condition,
            value,
        })
    }

    pub fn is_enforced(&self) -> bool {
        !self.severity.is_off()
    }
}

impl Serialize for RuleDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.value.is_unit() { 2 } else { 3 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        seq.serialize_element(&self.condition)?;
        if !self.value.is_unit() {
            seq.serialize_element(&self.value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_json(&raw).map_err(serde::de::Error::custom)
    }
}
