//! Fetch → decode → handle.
//!
//! One generic run ([`FetchPipeline::run`]) issues the request, checks the
//! status, decodes the body and hands the result to a [`FetchHandler`]. Two
//! handlers exist:
//!
//! - [`NameLogger`]: logs every product's name (diagnostic only, never renders)
//! - [`PageDisplay`]: renders cards, or presents the fallback message on failure
//!
//! Failures never escape a run; they end up in the returned [`FetchReport`].

use chrono::{DateTime, Utc};

use shopfront_products::{extract_name, RawProduct};

use crate::error::FetchError;
use crate::page::Page;
use crate::present::present_error;
use crate::render::render_products;
use crate::transport::Transport;

/// Label of the diagnostic name-logging run.
pub const NAMES_PIPELINE: &str = "product-names";

/// Label of the card-rendering run.
pub const DISPLAY_PIPELINE: &str = "product-display";

/// What to do with the outcome of one fetch. Exactly one method is called per run.
pub trait FetchHandler {
    fn on_success(&mut self, products: Vec<RawProduct>);
    fn on_failure(&mut self, error: &FetchError);
}

/// Logs each decoded product's normalized name at `info`.
#[derive(Debug, Default)]
pub struct NameLogger {
    names: Vec<String>,
}

impl NameLogger {
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl FetchHandler for NameLogger {
    fn on_success(&mut self, products: Vec<RawProduct>) {
        for product in &products {
            let name = extract_name(product);
            tracing::info!("{name}");
            self.names.push(name);
        }
    }

    fn on_failure(&mut self, error: &FetchError) {
        tracing::error!("Fetching product names failed: {error}");
    }
}

/// Renders cards into a page, or the fallback message on failure.
pub struct PageDisplay<'a, P: Page + ?Sized> {
    page: &'a mut P,
    rendered: usize,
}

impl<'a, P: Page + ?Sized> PageDisplay<'a, P> {
    pub fn new(page: &'a mut P) -> Self {
        Self { page, rendered: 0 }
    }

    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

impl<P: Page + ?Sized> FetchHandler for PageDisplay<'_, P> {
    fn on_success(&mut self, products: Vec<RawProduct>) {
        self.rendered = render_products(&products, self.page);
    }

    fn on_failure(&mut self, error: &FetchError) {
        present_error(error, self.page);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Decoded `items` products (before any display limit).
    Succeeded { items: usize },
    Failed(FetchError),
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    pub pipeline: &'static str,
    pub outcome: FetchOutcome,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl FetchReport {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Succeeded { .. })
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.outcome {
            FetchOutcome::Failed(e) => Some(e),
            FetchOutcome::Succeeded { .. } => None,
        }
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// One catalog endpoint behind one transport.
#[derive(Debug, Clone)]
pub struct FetchPipeline<T> {
    transport: T,
    endpoint: String,
}

impl<T: Transport> FetchPipeline<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the endpoint, require a 2xx status and decode a JSON array.
    pub async fn fetch_products(&self) -> Result<Vec<RawProduct>, FetchError> {
        let resp = self.transport.get(&self.endpoint).await?;
        if !resp.is_success() {
            return Err(FetchError::Status(resp.status));
        }
        serde_json::from_slice(&resp.body).map_err(|e| FetchError::decode(e.to_string()))
    }

    /// Fetch once and hand the outcome to `handler`.
    pub async fn run<H: FetchHandler + ?Sized>(
        &self,
        pipeline: &'static str,
        handler: &mut H,
    ) -> FetchReport {
        let started_at = Utc::now();

        let outcome = match self.fetch_products().await {
            Ok(products) => {
                let items = products.len();
                handler.on_success(products);
                FetchOutcome::Succeeded { items }
            }
            Err(error) => {
                handler.on_failure(&error);
                FetchOutcome::Failed(error)
            }
        };

        let report = FetchReport {
            pipeline,
            outcome,
            started_at,
            finished_at: Utc::now(),
        };

        let elapsed_ms = report.elapsed().num_milliseconds();
        match &report.outcome {
            FetchOutcome::Succeeded { items } => {
                tracing::info!(pipeline, items, elapsed_ms, "pipeline finished");
            }
            FetchOutcome::Failed(error) => {
                tracing::error!(pipeline, error = %error, elapsed_ms, "pipeline failed");
            }
        }

        report
    }

    /// Diagnostic run: log every product name; nothing is rendered.
    pub async fn log_product_names(&self) -> FetchReport {
        let mut logger = NameLogger::default();
        self.run(NAMES_PIPELINE, &mut logger).await
    }

    /// Display run: render cards into `page`, or the fallback message.
    pub async fn display_products<P: Page + ?Sized>(&self, page: &mut P) -> FetchReport {
        let mut display = PageDisplay::new(page);
        self.run(DISPLAY_PIPELINE, &mut display).await
    }
}

/// Start both runs back-to-back and drive them concurrently on the current task.
///
/// The runs share nothing but `page`, which only the display run writes.
/// Returns `(names, display)` reports.
#[cfg(not(target_arch = "wasm32"))]
pub async fn bootstrap<T: Transport, P: Page + ?Sized>(
    pipeline: &FetchPipeline<T>,
    page: &mut P,
) -> (FetchReport, FetchReport) {
    tokio::join!(pipeline.log_product_names(), pipeline.display_products(page))
}
