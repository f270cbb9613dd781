//! Config files served over HTTP(S)

use super::ConfigSource;
use crate::types::InstallerError;
use reqwest::blocking::Client;

/// Fetches config files relative to a base URL
#[derive(Debug, Clone)]
pub struct RemoteSource {
    base_url: String,
    client: Client,
}

impl RemoteSource {
    /// Create a source rooted at `base_url`; a trailing `/` is added if missing
    pub fn new(base_url: impl Into<String>) -> Result<Self, InstallerError> {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| InstallerError::Network {
                url: base_url.clone(),
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a path under the base URL
    pub fn url_for(&self, relative_path: &str) -> String {
        format!("{}{}", self.base_url, relative_path)
    }
}

impl ConfigSource for RemoteSource {
    fn fetch(&self, relative_path: &str) -> Result<Vec<u8>, InstallerError> {
        let url = self.url_for(relative_path);
        tracing::debug!(%url, "GET");

        let network_error = |message: String| InstallerError::Network {
            url: url.clone(),
            message,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| network_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(network_error(format!("HTTP status {status}")));
        }

        let bytes = response
            .bytes()
            .map_err(|e| network_error(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
