//! HTTP transport seam and its `reqwest` implementation.

use async_trait::async_trait;

use crate::error::FetchError;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a plain GET (no body, headers, query or auth).
///
/// Errors are always [`FetchError::Transport`]; status handling is left to the
/// caller.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            // Body of a failed response is never decoded.
            return Ok(HttpResponse::new(status, Vec::new()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
