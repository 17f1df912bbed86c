//! Template listing from the tree API.
//!
//! The listing is built once per run from the recursive tree of the template
//! repository and is not modified afterwards.

use serde::Deserialize;

use crate::config::{Endpoints, TEMPLATE_SUFFIX};
use crate::error::{GetignoreError, Result};
use crate::registry::fetch::HttpFetcher;

const TREE_API: &str = "tree api";

/// Response body of `GET /repos/{owner}/{repo}/git/trees/{ref}?recursive=1`.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeResponse {
    pub sha: String,
    pub url: String,
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

/// One entry of a tree listing.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    pub mode: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub sha: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

impl TreeEntry {
    /// Whether this entry is a file (as opposed to a subtree or submodule).
    pub fn is_blob(&self) -> bool {
        self.kind == "blob"
    }
}

/// Ordered template identifiers, suffix stripped, casing preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateListing {
    paths: Vec<String>,
}

impl TemplateListing {
    /// Build a listing from paths that are already stripped of the suffix.
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    /// Build a listing from a tree response.
    ///
    /// Keeps blobs ending in `.gitignore` in listing order. Logs a warning if
    /// the API reported the tree as truncated.
    pub fn from_tree(response: TreeResponse) -> Self {
        if response.truncated {
            tracing::warn!(
                "tree listing {} was truncated by the API; some templates may be missing",
                response.sha
            );
        }

        let paths = response
            .tree
            .into_iter()
            .filter(TreeEntry::is_blob)
            .filter_map(|entry| {
                entry
                    .path
                    .strip_suffix(TEMPLATE_SUFFIX)
                    .map(str::to_string)
            })
            .collect();

        Self { paths }
    }

    /// Parse a raw tree API body into a listing.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let response: TreeResponse =
            serde_json::from_slice(body).map_err(|source| GetignoreError::MalformedResponse {
                target: TREE_API.to_string(),
                source,
            })?;
        Ok(Self::from_tree(response))
    }

    /// Fetch and parse the listing from the tree API.
    pub fn fetch(fetcher: &HttpFetcher, endpoints: &Endpoints) -> Result<Self> {
        let body = fetcher.fetch(&endpoints.tree_url(), TREE_API)?;
        let listing = Self::parse(&body)?;
        tracing::debug!("listing contains {} templates", listing.len());
        Ok(listing)
    }

    /// Template identifiers in listing order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Iterate over template identifiers in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the listing has no templates.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
