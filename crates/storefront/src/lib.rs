//! `shopfront-storefront`
//!
//! **Responsibility:** fetch the product catalog and render it as cards.
//!
//! This crate provides:
//! - An element tree and the [`Page`] seam it renders through
//! - The product card renderer and the fallback error presenter
//! - The HTTP [`Transport`] seam (`reqwest`-backed)
//! - The fetch pipeline and its startup wiring
//!
//! Normalization of catalog records lives in `shopfront-products`.

#[cfg(not(target_arch = "wasm32"))]
pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod page;
pub mod pipeline;
pub mod present;
pub mod render;
pub mod transport;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigError, StorefrontConfig};
pub use dom::{Document, Element};
pub use error::FetchError;
pub use page::{DetachedPage, Page, CONTAINER_ID};
pub use pipeline::{FetchHandler, FetchOutcome, FetchPipeline, FetchReport, NameLogger, PageDisplay};
#[cfg(not(target_arch = "wasm32"))]
pub use pipeline::bootstrap;
pub use present::present_error;
pub use render::{render_products, DISPLAY_LIMIT};
pub use transport::{HttpResponse, HttpTransport, Transport};
