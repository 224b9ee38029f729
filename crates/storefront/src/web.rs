//! Browser entry point: the same two pipelines against the live DOM.

use wasm_bindgen::prelude::*;

use crate::config::DEFAULT_API_URL;
use crate::dom::Element;
use crate::page::{DetachedPage, Page};
use crate::pipeline::FetchPipeline;
use crate::transport::HttpTransport;

/// [`Page`] over the window's `document`.
pub struct DomPage {
    document: web_sys::Document,
}

impl DomPage {
    /// The current window's document, if running in a window.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    fn build(&self, node: &Element) -> Result<web_sys::Element, JsValue> {
        let el = self.document.create_element(node.tag())?;
        for (name, value) in node.attributes() {
            el.set_attribute(name, value)?;
        }
        if let Some(text) = node.text() {
            el.set_text_content(Some(text));
        }
        for child in node.children() {
            el.append_child(&self.build(child)?)?;
        }
        Ok(el)
    }
}

impl Page for DomPage {
    fn replace_contents(&mut self, container_id: &str, nodes: Vec<Element>) -> bool {
        let Some(container) = self.document.get_element_by_id(container_id) else {
            return false;
        };

        container.set_inner_html("");
        for node in &nodes {
            match self.build(node) {
                Ok(el) => {
                    if let Err(e) = container.append_child(&el) {
                        tracing::warn!("failed to append {}: {:?}", node.tag(), e);
                    }
                }
                Err(e) => tracing::warn!("failed to build {}: {:?}", node.tag(), e),
            }
        }
        true
    }
}

/// Called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let names = FetchPipeline::new(HttpTransport::new(), DEFAULT_API_URL);
    wasm_bindgen_futures::spawn_local(async move {
        names.log_product_names().await;
    });

    let display = FetchPipeline::new(HttpTransport::new(), DEFAULT_API_URL);
    wasm_bindgen_futures::spawn_local(async move {
        match DomPage::current() {
            Some(mut page) => display.display_products(&mut page).await,
            None => {
                tracing::warn!("no window document; product cards will not be rendered");
                display.display_products(&mut DetachedPage).await
            }
        };
    });
}
