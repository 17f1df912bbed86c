//! Run configuration for getignore.
//!
//! There are no config files. A run is described by:
//! - [`Endpoints`] - base URLs for the tree API and raw content
//! - [`RunMode`] - whether to list templates or print the requested ones

pub mod endpoints;

pub use endpoints::{
    Endpoints, DEFAULT_API_BASE, DEFAULT_RAW_BASE, TEMPLATE_REF, TEMPLATE_REPO, TEMPLATE_SUFFIX,
};

/// What a run should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Print every template identifier in the listing.
    List,
    /// Resolve and print the named templates, in order.
    Templates(Vec<String>),
}

impl RunMode {
    /// Build the mode from the `--list` flag and positional names.
    ///
    /// Returns `None` when there is nothing to do.
    pub fn from_args(list: bool, names: &[String]) -> Option<Self> {
        if list {
            Some(Self::List)
        } else if names.is_empty() {
            None
        } else {
            Some(Self::Templates(names.to_vec()))
        }
    }
}
