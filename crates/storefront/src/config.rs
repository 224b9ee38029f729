//! Runtime configuration (environment variables).

use std::path::PathBuf;

use reqwest::Url;
use thiserror::Error;

/// Catalog endpoint used when `SHOPFRONT_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "https://www.course-api.com/javascript-store-products";

pub const API_URL_VAR: &str = "SHOPFRONT_API_URL";
pub const OUTPUT_VAR: &str = "SHOPFRONT_OUTPUT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid catalog endpoint {value:?}: {reason}")]
    InvalidEndpoint { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Absolute http(s) URL of the product catalog.
    pub endpoint: String,
    /// Where to write the rendered page; `None` means stdout.
    pub output: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_API_URL.to_string(),
            output: None,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint = match get(API_URL_VAR) {
            Some(value) => validate_endpoint(value.trim())?,
            None => {
                tracing::info!("{API_URL_VAR} not set; using {DEFAULT_API_URL}");
                DEFAULT_API_URL.to_string()
            }
        };

        let output = get(OUTPUT_VAR).map(PathBuf::from);

        Ok(Self { endpoint, output })
    }
}

fn validate_endpoint(value: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        other => Err(invalid(format!("unsupported scheme {other:?}"))),
    }
}
