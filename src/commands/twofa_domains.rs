use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::core::{generate_domain_list, DomainListConfig, Fetcher};

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let mut config = DomainListConfig::new().context("Invalid 2FA domain list configuration")?;
    if let Some(path) = matches.get_one::<PathBuf>("custom") {
        config.custom_domains_file = path.clone();
    }
    if let Some(path) = matches.get_one::<PathBuf>("exclude") {
        config.excluded_domains_file = path.clone();
    }
    if let Some(path) = matches.get_one::<PathBuf>("dst_file") {
        config.destination = path.clone();
    }

    println!("{} {}", "Fetching".cyan(), config.source.to_string().dimmed());

    let fetcher = Fetcher::new().context("Failed to create HTTP client")?;
    let count =
        generate_domain_list(&fetcher, &config).context("Failed to generate the 2FA domain list")?;

    println!(
        "{} {} domains to {}",
        "Wrote".green(),
        count.to_string().bold(),
        config.destination.display().to_string().yellow()
    );

    Ok(())
}
