//! Rule severity levels

use serde::{Serialize, Serializer};
use std::fmt;

/// Enforcement level of a rule
///
/// Levels map to the integers `0`, `1` and `2` used by configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleSeverity {
    /// Rule is disabled; condition and value are kept but never evaluated
    Off,
    Warning,
    Error,
}

impl RuleSeverity {
    /// Integer level used in configuration files
    pub fn level(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Warning => 1,
            Self::Error => 2,
        }
    }

    /// Parse an integer level, returning `None` for anything but 0, 1 or 2
    pub fn from_level(level: u64) -> Option<Self> {
        match level {
            0 => Some(Self::Off),
            1 => Some(Self::Warning),
            2 => Some(Self::Error),
            _ => None,
        }
    }

    pub fn is_off(self) -> bool {
        self == Self::Off
    }
}

impl fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

impl Serialize for RuleSeverity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_both_ways() {
        for severity in [RuleSeverity::Off, RuleSeverity::Warning, RuleSeverity::Error] {
            assert_eq!(
                RuleSeverity::from_level(severity.level() as u64),
                Some(severity)
            );
        }
        assert_eq!(RuleSeverity::from_level(3), None);
    }

    #[test]
    fn severities_order_by_strength() {
        assert!(RuleSeverity::Off < RuleSeverity::Warning);
        assert!(RuleSeverity::Warning < RuleSeverity::Error);
    }
}
