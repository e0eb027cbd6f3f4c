use std::time::Duration;

use tracing::{debug, info};

use crate::error::GenError;

pub const DEFAULT_USER_AGENT: &str = concat!("pom-gen/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Load the raw HTML for `source`: an http(s) URL, a `file://` URL or a local path.
pub fn load_document(source: &str, options: &FetchOptions) -> Result<String, GenError> {
    if is_remote(source) {
        fetch_url(source, options)
    } else {
        let path = source.strip_prefix("file://").unwrap_or(source);
        debug!(path, "reading local document");
        std::fs::read_to_string(path).map_err(|e| GenError::io(path, e))
    }
}

pub fn is_remote(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn fetch_url(url: &str, options: &FetchOptions) -> Result<String, GenError> {
    let fetch_err = |source| GenError::Fetch {
        url: url.to_string(),
        source,
    };

    info!(url, timeout_secs = options.timeout.as_secs(), "fetching page");

    let client = reqwest::blocking::Client::builder()
        .timeout(options.timeout)
        .user_agent(options.user_agent.as_str())
        .build()
        .map_err(fetch_err)?;

    let response = client.get(url).send().map_err(fetch_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(GenError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().map_err(fetch_err)
}

/// SHA-1 hex digest of the document, recorded in generated file headers.
pub fn source_fingerprint(html: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(html.as_bytes());
    format!("{:x}", hasher.finalize())
}
