//! Remote endpoint configuration.
//!
//! Templates live in a fixed repository at a fixed ref. Only the two base URLs
//! can be overridden, which lets tests point the client at a mock server.

/// Default base URL of the tree API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default base URL of the raw-content endpoint.
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

/// Organization and repository holding the templates.
pub const TEMPLATE_REPO: &str = "github/gitignore";

/// Branch the templates are read from.
pub const TEMPLATE_REF: &str = "main";

/// File suffix that marks a template in the tree listing.
pub const TEMPLATE_SUFFIX: &str = ".gitignore";

/// Base URLs for the listing and content requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base URL of the tree API.
    pub api_base: String,
    /// Base URL of the raw-content endpoint.
    pub raw_base: String,
}

impl Endpoints {
    /// Create endpoints from explicit base URLs.
    ///
    /// Trailing slashes are dropped so URLs join cleanly.
    pub fn new(api_base: impl Into<String>, raw_base: impl Into<String>) -> Self {
        Self {
            api_base: trim_base(api_base.into()),
            raw_base: trim_base(raw_base.into()),
        }
    }

    /// Use the same base URL for both endpoints.
    pub fn single(base: impl Into<String>) -> Self {
        let base = base.into();
        Self::new(base.clone(), base)
    }

    /// URL of the recursive tree listing.
    pub fn tree_url(&self) -> String {
        format!(
            "{}/repos/{}/git/trees/{}?recursive=1",
            self.api_base, TEMPLATE_REPO, TEMPLATE_REF
        )
    }

    /// URL of the raw content for a template path (suffix already stripped).
    pub fn content_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}{}",
            self.raw_base, TEMPLATE_REPO, TEMPLATE_REF, path, TEMPLATE_SUFFIX
        )
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_RAW_BASE)
    }
}

fn trim_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}
