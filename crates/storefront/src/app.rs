//! Native startup: run both pipelines once and write the resulting page.

use std::path::Path;

use anyhow::Context;

use crate::dom::Document;
use crate::pipeline::{bootstrap, FetchPipeline};
use crate::transport::Transport;

/// Run both startup fetches against a fresh storefront page and return it.
pub async fn render_page<T: Transport>(pipeline: &FetchPipeline<T>) -> Document {
    let mut page = Document::storefront();

    let (names_report, display_report) = bootstrap(pipeline, &mut page).await;
    tracing::info!(
        names_ok = names_report.is_success(),
        display_ok = display_report.is_success(),
        "startup fetches finished"
    );

    page
}

/// Write the page as HTML to `output`, or to stdout when `None`.
pub fn write_page(page: &Document, output: Option<&Path>) -> anyhow::Result<()> {
    let html = page.to_html();
    match output {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("failed to write page to {}", path.display()))?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => print!("{html}"),
    }
    Ok(())
}
