//! Command implementations for commit-rules-cli

pub mod catalogue;
pub mod check;
pub mod resolve;
pub mod source;

pub use catalogue::{run_profiles, run_rules};
pub use check::run_check;
pub use resolve::run_resolve;
