//! `shopfront-core` — display value building blocks.
//!
//! This crate contains **pure** value types (no IO, no HTTP, no rendering).

pub mod id;
pub mod value_object;

pub use id::ShortId;
pub use value_object::{Money, ValueObject};
