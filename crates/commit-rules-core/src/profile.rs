//! Bundled rule profiles
//!
//! Two alternative profiles ship with the crate. Both extend
//! `@commitlint/config-conventional`, which must be supplied through a
//! [`crate::BaseRegistry`] before they can be resolved.
//!
//! - `strict`: types and scopes are enumerated and enforced as errors,
//!   and a scope is required.
//! - `lenient`: types, empty subjects and empty types are warnings, and
//!   body lines up to 100 characters are allowed.
//!
//! The profiles are never merged with each other; callers pick one.

use crate::document::{ConfigDocument, DocumentFormat};
use crate::Result;
use std::fmt;
use std::str::FromStr;

const STRICT: &str = include_str!("../profiles/strict.toml");
const LENIENT: &str = include_str!("../profiles/lenient.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Strict,
    Lenient,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Strict, Profile::Lenient];

    pub fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Strict => "enumerated types and scopes as errors, scope required",
            Self::Lenient => "type and subject checks as warnings, subject case free",
        }
    }

    /// Raw TOML source of the profile
    pub fn source(self) -> &'static str {
        match self {
            Self::Strict => STRICT,
            Self::Lenient => LENIENT,
        }
    }

    /// Parse the profile into a document named `profile:<name>`
    pub fn document(self) -> Result<ConfigDocument> {
        ConfigDocument::parse(format!("profile:{}", self.name()), self.source(), DocumentFormat::Toml)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown profile '{}' (expected strict or lenient)", other)),
        }
    }
}
