//! Catalog products as they arrive from the API, and their display form.
//!
//! This crate contains the field normalization rules, implemented purely as
//! deterministic lookups (no IO, no HTTP, no rendering).

pub mod normalize;
pub mod product;

pub use normalize::{
    extract_image_url, extract_name, extract_price, extract_short_id, price_of, short_id_of,
    PLACEHOLDER_IMAGE_URL, UNNAMED_PRODUCT,
};
pub use product::{DisplayProduct, RawProduct};
