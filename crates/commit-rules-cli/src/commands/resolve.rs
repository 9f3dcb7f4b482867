//! Print the effective configuration

use std::path::Path;

use colored::Colorize;
use commit_rules_core::{EffectiveConfig, RuleSeverity};

use crate::cli::SourceArgs;
use crate::commands::source::resolve_sources;
use crate::error::Result;

/// Resolve the configuration and print it as a table or JSON
pub fn run_resolve(cwd: &Path, source: &SourceArgs, json: bool) -> Result<()> {
    let config = resolve_sources(cwd, source)?;

    if json {
        println!("{}", render_json(&config)?);
        return Ok(());
    }

    println!("{}", "Effective Configuration".bold());
    println!();

    if config.is_empty() {
        println!("  {}", "(no rules)".dimmed());
        return Ok(());
    }

    for (name, def) in config.iter() {
        let severity = match def.severity {
            RuleSeverity::Error => "error".red().bold(),
            RuleSeverity::Warning => "warning".yellow().bold(),
            RuleSeverity::Off => "off".dimmed(),
        };
        println!(
            "  {:<24} {:<9} {:<7} {} {}",
            name,
            severity,
            def.condition.as_str(),
            def.value,
            format!("({})", config.origin(name).unwrap_or("?")).dimmed()
        );
    }

    if !config.conflicts().is_empty() {
        println!();
        println!("  {}:", "Overrides".dimmed());
        for conflict in config.conflicts() {
            println!(
                "    {} {} {} -> {}",
                "~".yellow(),
                conflict.rule,
                conflict.previous.dimmed(),
                conflict.winner
            );
        }
    }

    Ok(())
}

/// JSON form: `{"rules": {...}, "origins": {...}, "conflicts": [...]}`
pub fn render_json(config: &EffectiveConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use commit_rules_core::{BaseRegistry, ConfigDocument, ConfigResolver, DocumentFormat};

    #[test]
    fn json_uses_tuple_form_for_rules() {
        let doc = ConfigDocument::parse(
            "root",
            "[rules]\nbody-max-line-length = [1, \"always\", 100]\nscope-empty = [2, \"never\"]\n",
            DocumentFormat::Toml,
        )
        .unwrap();
        let config = ConfigResolver::new(&BaseRegistry::new())
            .resolve(&[doc])
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&render_json(&config).unwrap()).unwrap();
        assert_eq!(value["rules"]["body-max-line-length"], serde_json::json!([1, "always", 100]));
        assert_eq!(value["rules"]["scope-empty"], serde_json::json!([2, "never"]));
        assert_eq!(value["origins"]["scope-empty"], "root");
        assert_eq!(value["conflicts"], serde_json::json!([]));
    }
}
