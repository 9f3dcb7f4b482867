//! Rule values

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// The value attached to a rule
///
/// Which variant a rule accepts depends on the rule name; see
/// [`crate::schema::ValueKind`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RuleValue {
    /// No value supplied
    #[default]
    Unit,
    /// Numeric threshold, e.g. a maximum line length
    Integer(u64),
    /// Single string, e.g. a case name or full-stop character
    Text(String),
    /// Set of strings, e.g. permitted commit types
    List(Vec<String>),
}

impl RuleValue {
    /// Convert a loosely typed value into a rule value.
    ///
    /// `null` maps to [`RuleValue::Unit`]. Floats, negative numbers,
    /// booleans, objects and arrays holding non-strings are rejected.
    pub fn from_json(value: &Value) -> Result<Self, String> {
        match value {
            Value::Null => Ok(Self::Unit),
            Value::Number(n) => n
                .as_u64()
                .map(Self::Integer)
                .ok_or_else(|| format!("value {} is not a non-negative integer", n)),
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(format!("list entry {} is not a string", other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Bool(b) => Err(format!("value {} is not a string, integer, or list", b)),
            Value::Object(_) => Err("value must be a string, integer, or list, not a table".into()),
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Unit => "no value",
            Self::Integer(_) => "an integer",
            Self::Text(_) => "a string",
            Self::List(_) => "a list",
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => Ok(()),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl Serialize for RuleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unit => serializer.serialize_unit(),
            Self::Integer(n) => serializer.serialize_u64(*n),
            Self::Text(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
        }
    }
}
