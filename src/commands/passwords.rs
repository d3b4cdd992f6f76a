use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::core::{generate_password_list, Fetcher, PasswordListConfig};

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let config = match matches.get_one::<PathBuf>("dst_file") {
        Some(path) => PasswordListConfig::with_destination(path.clone()),
        None => PasswordListConfig::new(),
    }
    .context("Invalid password list configuration")?;

    println!(
        "{} {} wordlists...",
        "Downloading".cyan(),
        config.sources.len().to_string().bold()
    );

    let fetcher = Fetcher::new().context("Failed to create HTTP client")?;
    let count = generate_password_list(&fetcher, &config)
        .context("Failed to generate the common password list")?;

    println!(
        "{} {} passwords to {}",
        "Wrote".green(),
        count.to_string().bold(),
        config.destination.display().to_string().yellow()
    );

    Ok(())
}
