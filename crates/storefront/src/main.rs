//! Native entry point: fetch the catalog once and write the rendered page.

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;

#[cfg(not(target_arch = "wasm32"))]
use shopfront_storefront::{app, FetchPipeline, HttpTransport, StorefrontConfig};

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopfront_observability::init();

    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    tracing::info!(endpoint = %config.endpoint, "fetching product catalog");

    let pipeline = FetchPipeline::new(HttpTransport::new(), config.endpoint.clone());
    let page = app::render_page(&pipeline).await;

    app::write_page(&page, config.output.as_deref())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
