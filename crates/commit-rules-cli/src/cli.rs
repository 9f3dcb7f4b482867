//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use commit_rules_core::Profile;

/// commit-rules - Resolve and inspect commit-message rule configuration
#[derive(Parser, Debug)]
#[command(name = "commit-rules")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where configuration documents come from
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceArgs {
    /// Configuration document(s) to resolve, root last (.toml, .json, .yaml)
    ///
    /// When neither --config nor --profile is given, the global,
    /// repository and local layers are discovered in the current directory.
    #[arg(short, long = "config", value_name = "FILE")]
    pub configs: Vec<PathBuf>,

    /// Bundled profile to resolve before any --config documents
    #[arg(short, long, value_parser = parse_profile)]
    pub profile: Option<Profile>,

    /// Directory of base configurations available to `extends`
    /// [default: .commitlint/bases]
    #[arg(short, long, value_name = "DIR", env = "COMMIT_RULES_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Directory holding the global config layer
    /// [default: <config dir>/commit-rules]
    #[arg(long, value_name = "DIR", env = "COMMIT_RULES_GLOBAL_DIR")]
    pub global_dir: Option<PathBuf>,

    /// Fail on rule names that are not in the rule catalogue
    #[arg(long)]
    pub deny_unknown_rules: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the effective rule configuration
    ///
    /// Examples:
    ///   commit-rules resolve
    ///   commit-rules resolve --profile strict --base-dir bases/
    ///   commit-rules resolve -c base.toml -c .commitlintrc.toml --json
    Resolve {
        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Verify that the configuration resolves without errors
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List bundled profiles
    Profiles,

    /// List catalogued rules and the value each expects
    Rules,
}

fn parse_profile(s: &str) -> Result<Profile, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_resolve_with_sources() {
        let cli = Cli::try_parse_from([
            "commit-rules",
            "resolve",
            "-c",
            "base.toml",
            "--config",
            "root.yaml",
            "--profile",
            "lenient",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Resolve { source, json }) => {
                assert!(json);
                assert_eq!(source.profile, Some(Profile::Lenient));
                assert_eq!(
                    source.configs,
                    vec![PathBuf::from("base.toml"), PathBuf::from("root.yaml")]
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_global_dir() {
        let cli =
            Cli::try_parse_from(["commit-rules", "check", "--global-dir", "/tmp/global"]).unwrap();

        match cli.command {
            Some(Commands::Check { source }) => {
                assert_eq!(source.global_dir, Some(PathBuf::from("/tmp/global")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let result = Cli::try_parse_from(["commit-rules", "check", "--profile", "relaxed"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["commit-rules", "rules", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.command, Some(Commands::Rules));
    }
}
