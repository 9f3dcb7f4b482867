//! commit-rules CLI
//!
//! Resolves commit-message rule configuration and prints the result.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{} tracing subscriber already set", "warning:".yellow().bold());
        }
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} commit rule configuration", "commit-rules".green().bold());
            println!();
            println!("Run {} for available commands.", "commit-rules --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { source, json } => {
            let cwd = std::env::current_dir()?;
            commands::run_resolve(&cwd, &source, json)
        }
        Commands::Check { source } => {
            let cwd = std::env::current_dir()?;
            commands::run_check(&cwd, &source)
        }
        Commands::Profiles => commands::run_profiles(),
        Commands::Rules => commands::run_rules(),
    }
}
