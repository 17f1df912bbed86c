//! Fetching from the remote template repository.

pub mod http;

pub use http::HttpFetcher;
