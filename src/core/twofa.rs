use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::ordering::order_lexicographic;
use super::source::{Fetcher, Source};
use super::writer::write_lines;
use crate::error::{ListgenError, Result};

/// TOTP section of the 2fa.directory API
pub const TOTP_DIRECTORY_URL: &str = "https://api.2fa.directory/v3/totp.json";

/// Details object of a directory entry. Only the domain matters here.
#[derive(Debug, Deserialize)]
struct DirectoryDetails {
    domain: String,
}

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_destination() -> PathBuf {
    data_dir().join("2faDomains.txt")
}

pub fn default_custom_domains_file() -> PathBuf {
    data_dir().join("custom2faDomains.txt")
}

pub fn default_excluded_domains_file() -> PathBuf {
    data_dir().join("excluded2faDomains.txt")
}

#[derive(Debug, Clone)]
pub struct DomainListConfig {
    pub source: Source,
    pub custom_domains_file: PathBuf,
    pub excluded_domains_file: PathBuf,
    pub destination: PathBuf,
}

impl DomainListConfig {
    /// Directory URL plus the bundled data files
    pub fn new() -> Result<Self> {
        Ok(Self {
            source: Source::remote(TOTP_DIRECTORY_URL)?,
            custom_domains_file: default_custom_domains_file(),
            excluded_domains_file: default_excluded_domains_file(),
            destination: default_destination(),
        })
    }
}

/// Extract domains from the directory body.
///
/// The body is an array of `[name, details]` pairs. Elements that do not have
/// that shape, or whose details lack a string `domain`, are skipped.
pub fn extract_domains(body: &str) -> Result<Vec<String>> {
    let items: Vec<Value> = serde_json::from_str(body)?;

    let domains = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Array(mut pair) if pair.len() > 1 => Some(pair.swap_remove(1)),
            _ => None,
        })
        .filter_map(|details| serde_json::from_value::<DirectoryDetails>(details).ok())
        .map(|details| details.domain)
        .collect();

    Ok(domains)
}

/// Domain list file: trimmed lines, blanks and `#` comments skipped
pub fn parse_domain_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn read_domain_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| ListgenError::read(path, e))?;
    Ok(parse_domain_list(&text))
}

/// Union of fetched and custom domains minus the excluded ones, sorted ascending
pub fn merge_domains(
    fetched: Vec<String>,
    custom: Vec<String>,
    excluded: &HashSet<String>,
) -> Vec<String> {
    let unique: HashSet<String> = fetched
        .into_iter()
        .chain(custom)
        .filter(|domain| !excluded.contains(domain))
        .collect();

    order_lexicographic(unique)
}

pub fn build_domain_list(fetcher: &Fetcher, config: &DomainListConfig) -> Result<Vec<String>> {
    let excluded: HashSet<String> = read_domain_list(&config.excluded_domains_file)?
        .into_iter()
        .collect();
    let custom = read_domain_list(&config.custom_domains_file)?;

    let body = fetcher.fetch_json_text(&config.source)?;
    let fetched = extract_domains(&body)?;
    if fetched.is_empty() {
        return Err(ListgenError::format(format!(
            "no domains found in {}",
            config.source
        )));
    }

    log::info!(
        "{} fetched, {} custom, {} excluded domains",
        fetched.len(),
        custom.len(),
        excluded.len()
    );

    Ok(merge_domains(fetched, custom, &excluded))
}

/// Full run. Returns the number of domains written.
pub fn generate_domain_list(fetcher: &Fetcher, config: &DomainListConfig) -> Result<usize> {
    let domains = build_domain_list(fetcher, config)?;
    write_lines(&config.destination, &domains)?;
    Ok(domains.len())
}
