use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::core::{filter_file, MatchMode};

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let filter_path = matches
        .get_one::<PathBuf>("filter_file")
        .context("FILTER_FILE argument is required")?;
    let target_path = matches
        .get_one::<PathBuf>("target_file")
        .context("TARGET_FILE argument is required")?;

    let mode = if matches.get_flag("substring") {
        MatchMode::Substring
    } else {
        MatchMode::Exact
    };

    let stats = filter_file(filter_path, target_path, mode)
        .with_context(|| format!("Failed to filter {}", target_path.display()))?;

    println!("{} {}", "Count before :".white(), stats.before);
    println!("{} {}", "Count after  :".white(), stats.after.to_string().green());
    log::debug!("{} lines removed from {}", stats.removed(), target_path.display());

    Ok(())
}
