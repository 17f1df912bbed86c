//! Template registry for getignore.
//!
//! This module handles listing and resolving templates from the remote
//! `github/gitignore` repository:
//! - [`listing`] - the tree listing, filtered to `.gitignore` blobs
//! - [`resolver`] - mapping short names onto listing paths
//! - [`render`] - list and template output formats
//! - [`client`] - one full run against the remote endpoints
//!
//! # Example
//!
//! ```
//! use getignore::registry::{resolve, TemplateListing};
//!
//! let listing = TemplateListing::new(vec![
//!     "Go".to_string(),
//!     "community/Golang/Hugo".to_string(),
//! ]);
//!
//! assert_eq!(resolve(&listing, "go").unwrap(), "Go");
//! assert_eq!(resolve(&listing, "hugo").unwrap(), "community/Golang/Hugo");
//! ```

pub mod client;
pub mod fetch;
pub mod listing;
pub mod render;
pub mod resolver;

// Re-exports
pub use client::TemplateClient;
pub use fetch::HttpFetcher;
pub use listing::{TemplateListing, TreeEntry, TreeResponse};
pub use render::{render_block, render_listing, render_templates};
pub use resolver::{resolve, resolve_all};
