use serde::{Deserialize, Serialize};
use serde_json::Value;

use shopfront_core::{Money, ShortId, ValueObject};

use crate::normalize;

/// One catalog record exactly as the API returned it.
///
/// No field is guaranteed. Several historical response shapes are in use, so
/// the record is kept as untyped JSON and only read through the extractors in
/// [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProduct(Value);

impl RawProduct {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Look up a nested value by JSON pointer (`/fields/image/0/url`).
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        self.0.pointer(path)
    }
}

impl From<Value> for RawProduct {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Display-ready fields for one product card.
///
/// `name`, `image_url` and the formatted price are never empty. `short_id` is
/// empty when the record had no usable id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayProduct {
    pub name: String,
    pub image_url: String,
    pub price: Money,
    pub short_id: ShortId,
}

impl ValueObject for DisplayProduct {}

impl DisplayProduct {
    /// Normalize a raw record. Never fails.
    pub fn from_raw(raw: &RawProduct) -> Self {
        Self {
            name: normalize::extract_name(raw),
            image_url: normalize::extract_image_url(raw),
            price: normalize::price_of(raw),
            short_id: normalize::short_id_of(raw),
        }
    }

    pub fn price_text(&self) -> String {
        self.price.to_string()
    }
}
