//! Template client.
//!
//! Runs one invocation end to end: fetch the listing, then either render it
//! or resolve the requested names and fetch each template in order.

use crate::config::{Endpoints, RunMode};
use crate::error::Result;
use crate::registry::fetch::HttpFetcher;
use crate::registry::listing::TemplateListing;
use crate::registry::render::{render_listing, render_templates};
use crate::registry::resolver::resolve_all;

/// Client for the remote template repository.
///
/// # Example
///
/// ```no_run
/// use getignore::config::{Endpoints, RunMode};
/// use getignore::registry::TemplateClient;
///
/// let client = TemplateClient::new(Endpoints::default()).unwrap();
/// let output = client
///     .run(&RunMode::Templates(vec!["rust".to_string()]))
///     .unwrap();
/// println!("{}", output);
/// ```
#[derive(Debug, Clone)]
pub struct TemplateClient {
    fetcher: HttpFetcher,
    endpoints: Endpoints,
}

impl TemplateClient {
    /// Create a client with a default HTTP fetcher.
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        Ok(Self::with_fetcher(HttpFetcher::new()?, endpoints))
    }

    /// Create a client with a pre-built fetcher.
    pub fn with_fetcher(fetcher: HttpFetcher, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    /// Fetch the template listing.
    pub fn listing(&self) -> Result<TemplateListing> {
        TemplateListing::fetch(&self.fetcher, &self.endpoints)
    }

    /// Fetch the raw content of a resolved template path.
    pub fn fetch_template(&self, path: &str) -> Result<String> {
        let target = format!("content api for \"{}\"", path);
        let body = self.fetcher.fetch(&self.endpoints.content_url(path), &target)?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Execute a run and return the rendered output.
    ///
    /// Nothing is returned unless every step succeeds.
    pub fn run(&self, mode: &RunMode) -> Result<String> {
        let listing = self.listing()?;

        match mode {
            RunMode::List => Ok(render_listing(&listing)),
            RunMode::Templates(names) => {
                let resolved = resolve_all(&listing, names)?;

                let mut fetched = Vec::with_capacity(resolved.len());
                for path in &resolved {
                    let content = self.fetch_template(path)?;
                    fetched.push((path.as_str(), content));
                }

                Ok(render_templates(
                    fetched
                        .iter()
                        .map(|(name, content)| (*name, content.as_str())),
                ))
            }
        }
    }
}
