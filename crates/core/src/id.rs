//! Shortened product identifiers shown on cards.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Number of characters kept from a catalog id.
pub const SHORT_ID_LEN: usize = 8;

/// The leading characters of a catalog record id.
///
/// Truncation counts Unicode scalar values, so it never splits a character.
/// An empty `ShortId` means the record carried no usable id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortId(String);

impl ValueObject for ShortId {}

impl ShortId {
    pub fn truncate(raw: &str) -> Self {
        Self(raw.chars().take(SHORT_ID_LEN).collect())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for ShortId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ShortId> for String {
    fn from(value: ShortId) -> Self {
        value.0
    }
}
