//! Error types for getignore operations.
//!
//! This module defines [`GetignoreError`], the error type returned by every
//! fallible operation in the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each way a remote request can fail has its own variant
//! - `target` fields name the endpoint involved (`tree api`, `content api for "Go"`)
//! - Nothing is retried; every error ends the invocation

use thiserror::Error;

/// Core error type for getignore operations.
#[derive(Debug, Error)]
pub enum GetignoreError {
    /// The request could not be sent or the connection failed.
    #[error("error making request to {target}: {source}")]
    Network {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("bad response from {target}: {status}")]
    BadStatus {
        target: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be read to the end.
    #[error("error reading {target} response body: {source}")]
    BodyRead {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not have the expected structure.
    #[error("{target} response contained invalid json: {source}")]
    MalformedResponse {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    /// No listing entry matched the requested name.
    #[error("template \"{name}\" not found")]
    TemplateNotFound { name: String },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for getignore operations.
pub type Result<T> = std::result::Result<T, GetignoreError>;
