use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use url::Url;

use crate::error::{ListgenError, Result};

const USER_AGENT: &str = concat!("listgen/", env!("CARGO_PKG_VERSION"));

/// Where a raw wordlist comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(Url),
    Local(PathBuf),
}

impl Source {
    /// Parse a locator. `http`/`https` URLs are remote, `file://` URLs and
    /// anything that is not a URL are treated as local paths.
    pub fn parse(locator: &str) -> Result<Self> {
        let locator = locator.trim();
        if locator.is_empty() {
            return Err(ListgenError::invalid_source("empty locator"));
        }

        match Url::parse(locator) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Source::Remote(url)),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(Source::Local)
                .map_err(|_| ListgenError::invalid_source(format!("bad file URL: {}", locator))),
            // Anything else (relative paths, Windows drive letters) is a filesystem path
            _ => Ok(Source::Local(PathBuf::from(locator))),
        }
    }

    /// Strict constructor for fixed download locations: anything other than
    /// an `http`/`https` URL is an error instead of a local path.
    pub fn remote(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|e| ListgenError::invalid_source(format!("{}: {}", url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ListgenError::invalid_source(format!(
                "{}: expected an http or https URL",
                url
            )));
        }

        Ok(Source::Remote(parsed))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Source::Remote(url) => write!(f, "{}", url),
            Source::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Blocking fetcher shared by every pipeline. One request per remote source,
/// no retries, transport default timeout.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxy settings, custom timeouts)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Retrieve the full UTF-8 text of a source
    pub fn fetch_text(&self, source: &Source) -> Result<String> {
        self.fetch(source, None)
    }

    /// Same as [`Fetcher::fetch_text`] but asks the server for JSON
    pub fn fetch_json_text(&self, source: &Source) -> Result<String> {
        self.fetch(source, Some("application/json"))
    }

    fn fetch(&self, source: &Source, accept: Option<&str>) -> Result<String> {
        let text = match source {
            Source::Remote(url) => {
                let mut request = self.client.get(url.clone());
                if let Some(accept) = accept {
                    request = request.header(ACCEPT, accept);
                }

                let response = request.send()?;
                if response.status() != StatusCode::OK {
                    return Err(ListgenError::Status {
                        url: url.to_string(),
                        status: response.status(),
                    });
                }

                let bytes = response.bytes()?;
                decode_utf8(bytes.to_vec(), source)?
            }
            Source::Local(path) => {
                let bytes = fs::read(path).map_err(|e| ListgenError::read(path, e))?;
                decode_utf8(bytes, source)?
            }
        };

        log::debug!("Fetched {} bytes from {}", text.len(), source);
        Ok(text)
    }
}

/// Bodies must be valid UTF-8; nothing is replaced lossily.
fn decode_utf8(bytes: Vec<u8>, source: &Source) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| ListgenError::Decode {
        locator: source.to_string(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}
