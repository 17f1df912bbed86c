//! getignore - print `.gitignore` templates from the terminal.
//!
//! getignore fetches the template listing of the `github/gitignore`
//! repository, resolves short names such as `go` or `hugo` onto template
//! paths, and prints the matching templates wrapped in start/end banners.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Endpoints and run mode
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Template listing, resolution, fetching and rendering
//!
//! # Example
//!
//! ```
//! use getignore::registry::{render_block, resolve, TemplateListing};
//!
//! let listing = TemplateListing::new(vec!["Go".to_string()]);
//! let name = resolve(&listing, "go").unwrap();
//! let block = render_block(&name, "*.exe\n");
//! assert!(block.contains("# --- start Go ---"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;

pub use error::{GetignoreError, Result};
