//! Field normalization for catalog records of varying shape.
//!
//! Each display field is read by probing an ordered list of JSON pointers. The
//! first usable value wins; when none is usable a fixed fallback is returned.
//! Every extractor is total: any JSON value (including non-objects) is accepted.

use serde_json::Value;

use shopfront_core::{Money, ShortId};

use crate::product::RawProduct;

/// Name shown when a record carries none.
pub const UNNAMED_PRODUCT: &str = "Unnamed Product";

/// Image shown when a record carries none.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/600x400?text=No+Image";

/// Numeric prices above this are taken to be integer cents.
pub const CENTS_THRESHOLD: f64 = 1000.0;

const NAME_PATHS: &[&str] = &["/fields/name", "/name"];

const IMAGE_PATHS: &[&str] = &[
    "/fields/image/0/url",
    "/fields/image/0/thumbnails/large/url",
    "/images/0/url",
    "/image/url",
    "/image",
];

const PRICE_PATHS: &[&str] = &["/fields/price", "/price"];

fn first_match<'a, T>(
    raw: &'a RawProduct,
    paths: &[&str],
    accept: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    paths
        .iter()
        .filter_map(|path| raw.pointer(path))
        .find_map(accept)
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Display name: `fields.name`, then `name`, else [`UNNAMED_PRODUCT`].
///
/// Numeric names are shown by their JSON text.
pub fn extract_name(raw: &RawProduct) -> String {
    first_match(raw, NAME_PATHS, |value| match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
    .unwrap_or_else(|| UNNAMED_PRODUCT.to_string())
}

/// Image URL: first non-empty string among the known image locations, else
/// [`PLACEHOLDER_IMAGE_URL`].
pub fn extract_image_url(raw: &RawProduct) -> String {
    first_match(raw, IMAGE_PATHS, |value| non_empty_str(value).map(str::to_string))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string())
}

/// Price as a [`Money`] value.
///
/// The first non-null of `fields.price` and `price` is used. A JSON number
/// above [`CENTS_THRESHOLD`] is read as cents; strings are never rescaled.
pub fn price_of(raw: &RawProduct) -> Money {
    let amount = first_match(raw, PRICE_PATHS, |value| (!value.is_null()).then_some(value))
        .map(coerce_amount)
        .unwrap_or(0.0);
    Money::from_amount(amount)
}

/// Price formatted as US dollars (`$1,234.56`).
pub fn extract_price(raw: &RawProduct) -> String {
    price_of(raw).to_string()
}

fn coerce_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => {
            let amount = n.as_f64().unwrap_or(0.0);
            if amount > CENTS_THRESHOLD {
                amount / 100.0
            } else {
                amount
            }
        }
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    }
}

/// Leading characters of the record id as a [`ShortId`].
///
/// Non-string ids are stringified first: arrays join their elements with `,`
/// and objects read as `[object Object]`.
pub fn short_id_of(raw: &RawProduct) -> ShortId {
    match raw.pointer("/id") {
        None | Some(Value::Null) => ShortId::empty(),
        Some(id) => ShortId::truncate(&id_text(id)),
    }
}

fn id_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items.iter().map(id_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// First 8 characters of the record id, or `""` when absent.
pub fn extract_short_id(raw: &RawProduct) -> String {
    short_id_of(raw).into()
}
