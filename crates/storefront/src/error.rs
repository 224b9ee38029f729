//! Failures of a catalog fetch.

use thiserror::Error;

/// Why a pipeline could not produce a product list.
///
/// All three kinds are terminal for the pipeline run that hit them; none is
/// retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not complete (connectivity, DNS, body read).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The body is not a JSON array of products.
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
