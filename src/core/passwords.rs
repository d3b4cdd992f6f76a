use std::path::{Path, PathBuf};

use super::normalize::{normalize_text, MIN_ENTRY_LEN};
use super::ordering::{merge_entries, order_entries};
use super::source::{Fetcher, Source};
use super::writer::write_lines;
use crate::error::Result;

/// Raw password lists merged into the common password asset
pub const PASSWORD_WORDLISTS: &[&str] = &[
    "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Passwords/xato-net-10-million-passwords-1000.txt",
    "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Passwords/darkweb2017-top10000.txt",
];

pub fn default_destination() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("passwords.txt")
}

#[derive(Debug, Clone)]
pub struct PasswordListConfig {
    pub sources: Vec<Source>,
    pub destination: PathBuf,
    pub min_len: usize,
}

impl PasswordListConfig {
    /// Default sources and destination. Fails if a wordlist constant is not an http(s) URL.
    pub fn new() -> Result<Self> {
        let sources = PASSWORD_WORDLISTS
            .iter()
            .map(|url| Source::remote(url))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            sources,
            destination: default_destination(),
            min_len: MIN_ENTRY_LEN,
        })
    }

    /// Default sources, custom destination
    pub fn with_destination<P: Into<PathBuf>>(destination: P) -> Result<Self> {
        Ok(Self {
            destination: destination.into(),
            ..Self::new()?
        })
    }
}

/// Fetch and normalize every source, then merge and order.
///
/// Every source is fetched before anything is merged, so a single failing
/// source aborts the run with nothing written.
pub fn build_password_list(fetcher: &Fetcher, config: &PasswordListConfig) -> Result<Vec<String>> {
    let mut per_source = Vec::with_capacity(config.sources.len());

    for source in &config.sources {
        let text = fetcher.fetch_text(source)?;
        let entries = normalize_text(&text, config.min_len);
        log::info!("{} normalized entries from {}", entries.len(), source);
        per_source.push(entries);
    }

    let merged = merge_entries(per_source);
    log::debug!("{} unique entries after merge", merged.len());

    Ok(order_entries(merged))
}

/// Full run: build the list and overwrite the destination. Returns the number of entries written.
pub fn generate_password_list(fetcher: &Fetcher, config: &PasswordListConfig) -> Result<usize> {
    let entries = build_password_list(fetcher, config)?;
    write_lines(&config.destination, &entries)?;
    Ok(entries.len())
}
