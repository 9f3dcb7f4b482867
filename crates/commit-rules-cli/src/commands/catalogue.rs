//! Listing bundled profiles and catalogued rules

use colored::Colorize;
use commit_rules_core::{schema, Profile};

use crate::error::Result;

/// Run the profiles command
pub fn run_profiles() -> Result<()> {
    println!("{}", "Bundled Profiles".bold());
    println!();
    for profile in Profile::ALL {
        println!("  {:<10} {}", profile.name().green(), profile.description());
    }
    println!();
    println!(
        "Use {} to resolve one.",
        "commit-rules resolve --profile <name>".cyan()
    );
    Ok(())
}

/// Run the rules command
pub fn run_rules() -> Result<()> {
    println!("{}", "Known Rules".bold());
    println!();
    for (name, kind) in schema::known_rules() {
        println!("  {:<26} {}", name.green(), kind.describe().dimmed());
    }
    Ok(())
}
