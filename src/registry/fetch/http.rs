//! HTTP fetching.
//!
//! Provides a blocking HTTP client for the tree API and the raw-content
//! endpoint. Each failure mode maps to its own [`GetignoreError`] variant.

use reqwest::blocking::Client;
use std::time::Duration;

use crate::error::{GetignoreError, Result};

/// Fetches response bodies over HTTP/HTTPS.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 30-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("getignore/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(GetignoreError::HttpClient)?;

        Ok(Self { client })
    }

    /// Fetch the full body at `url`.
    ///
    /// `target` names the endpoint in error messages, e.g. `tree api`.
    pub fn fetch(&self, url: &str, target: &str) -> Result<Vec<u8>> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| GetignoreError::Network {
                target: target.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GetignoreError::BadStatus {
                target: target.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .map_err(|source| GetignoreError::BodyRead {
                target: target.to_string(),
                source,
            })?;

        tracing::debug!("{} returned {} bytes", target, body.len());
        Ok(body.to_vec())
    }
}
