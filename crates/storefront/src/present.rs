//! User-visible fallback when products cannot be loaded.

use crate::dom::Element;
use crate::error::FetchError;
use crate::page::{Page, CONTAINER_ID};

/// Text shown in place of the product cards.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, we couldn\u{2019}t load products right now. Please try again later.";

const FALLBACK_STYLE: &str = "color:#fca5a5; background:#1b0f12; padding:.75rem; \
     border:1px solid rgba(255,255,255,.1); border-radius:8px;";

pub fn fallback_message() -> Element {
    Element::new("p")
        .with_class("load-error")
        .with_attr("style", FALLBACK_STYLE)
        .with_text(FALLBACK_MESSAGE)
}

/// Log `error` and replace the container's contents with the fallback message.
///
/// Returns `false` when the container is missing (the error is still logged).
pub fn present_error<P: Page + ?Sized>(error: &FetchError, page: &mut P) -> bool {
    tracing::error!("An error occurred: {error}");
    page.replace_contents(CONTAINER_ID, vec![fallback_message()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn overwrites_surface_with_single_message() {
        let mut doc = Document::storefront();
        doc.replace_contents(
            CONTAINER_ID,
            vec![Element::new("article"), Element::new("article")],
        );

        assert!(present_error(&FetchError::Status(500), &mut doc));

        let children = doc.find_by_id(CONTAINER_ID).unwrap().children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].tag(), "p");
        assert_eq!(children[0].text(), Some(FALLBACK_MESSAGE));
    }

    #[test]
    fn missing_surface_is_silent() {
        let mut doc = Document::new("bare", Vec::new());
        assert!(!present_error(&FetchError::transport("refused"), &mut doc));
        assert!(doc.body().is_empty());
    }
}
