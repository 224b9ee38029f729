//! Product cards.

use shopfront_products::{DisplayProduct, RawProduct};

use crate::dom::Element;
use crate::page::{Page, CONTAINER_ID};

/// Maximum number of cards shown, taken from the front of the list.
pub const DISPLAY_LIMIT: usize = 5;

/// Build one card:
///
/// ```text
/// article.product-card
///   img[src][alt]
///   div.product-body
///     h3.product-title
///     div.product-meta
///       span (price)
///       span (short id)
/// ```
pub fn product_card(product: &DisplayProduct) -> Element {
    let image = Element::new("img")
        .with_attr("src", product.image_url.as_str())
        .with_attr("alt", product.name.as_str());

    let title = Element::new("h3")
        .with_class("product-title")
        .with_text(product.name.as_str());

    let meta = Element::new("div")
        .with_class("product-meta")
        .with_child(Element::new("span").with_text(product.price_text()))
        .with_child(Element::new("span").with_text(product.short_id.as_str()));

    let body = Element::new("div")
        .with_class("product-body")
        .with_child(title)
        .with_child(meta);

    Element::new("article")
        .with_class("product-card")
        .with_child(image)
        .with_child(body)
}

/// Replace the container's contents with cards for the first
/// [`DISPLAY_LIMIT`] products, in input order.
///
/// Returns the number of cards rendered; 0 when the container is missing.
pub fn render_products<P: Page + ?Sized>(products: &[RawProduct], page: &mut P) -> usize {
    let cards: Vec<Element> = products
        .iter()
        .take(DISPLAY_LIMIT)
        .map(|raw| product_card(&DisplayProduct::from_raw(raw)))
        .collect();
    let count = cards.len();

    if !page.replace_contents(CONTAINER_ID, cards) {
        tracing::debug!(container = CONTAINER_ID, "render surface not found; skipping render");
        return 0;
    }

    tracing::info!(rendered = count, available = products.len(), "rendered product cards");
    count
}
