//! Check that a configuration resolves

use std::path::Path;

use colored::Colorize;

use crate::cli::SourceArgs;
use crate::commands::source::resolve_sources;
use crate::error::Result;

/// Resolve the configuration and report a one-line summary.
///
/// Any resolution error is returned to the caller, which exits non-zero.
pub fn run_check(cwd: &Path, source: &SourceArgs) -> Result<()> {
    let config = resolve_sources(cwd, source)?;

    println!(
        "{} configuration ok: {} rules ({} enforced), {} overridden",
        "✓".green().bold(),
        config.len(),
        config.enforced().count(),
        config.conflicts().len()
    );
    Ok(())
}
