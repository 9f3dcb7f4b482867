//! Rule definition types
//!
//! A rule entry in a configuration document has the wire form
//! `[level, condition?, value?]`:
//!
//! ```toml
//! [rules]
//! type-enum = [2, "always", ["feat", "fix"]]
//! scope-empty = [2, "never"]
//! subject-case = [0]
//! ```
//!
//! This module only checks the structure of that tuple. Whether a value
//! fits the named rule is decided by [`crate::schema`].

mod condition;
mod definition;
mod severity;
mod value;

pub use condition::RuleCondition;
pub use definition::RuleDefinition;
pub use severity::RuleSeverity;
pub use value::RuleValue;
