//! The render surface seam.

use crate::dom::{Document, Element};

/// Id of the container that holds product cards or the fallback message.
pub const CONTAINER_ID: &str = "product-container";

/// A page that can have a container's contents swapped out.
///
/// Implemented by the in-memory [`Document`] and, in the browser, by the live
/// DOM. A missing container is not an error.
pub trait Page {
    /// Clear everything inside `container_id`, then append `nodes` in order.
    ///
    /// Returns `false` (and changes nothing) when no such container exists.
    fn replace_contents(&mut self, container_id: &str, nodes: Vec<Element>) -> bool;
}

impl Page for Document {
    fn replace_contents(&mut self, container_id: &str, nodes: Vec<Element>) -> bool {
        match self.find_by_id_mut(container_id) {
            Some(container) => {
                container.replace_children(nodes);
                true
            }
            None => false,
        }
    }
}

/// A page with no containers at all, for runs that have nowhere to render.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedPage;

impl Page for DetachedPage {
    fn replace_contents(&mut self, _container_id: &str, _nodes: Vec<Element>) -> bool {
        false
    }
}
