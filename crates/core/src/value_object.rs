//! Value object trait and the monetary value shown on product cards.
//!
//! Value objects have **no identity**: two values with the same attributes are
//! equal. Everything displayed on a card is derived into one of these before it
//! reaches the renderer.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// let a = Money::from_cents(10999);
/// let b = Money::from_amount(109.99);
/// assert_eq!(a, b); // equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A US dollar amount, stored in cents.
///
/// `Display` renders the en-US currency form: `$` sign, thousands grouping,
/// exactly two decimals, and a leading `-` for negative amounts
/// (`-$5.00`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Build from a dollar amount, rounding half away from zero to the cent.
    ///
    /// Rounding applies to the exact binary value of `amount`, so `1.115`
    /// (stored just below the midpoint) becomes `$1.11`. Non-finite amounts
    /// map to zero.
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::ZERO;
        }
        let cents = Decimal::from_f64_retain(amount)
            .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|d| d.checked_mul(Decimal::ONE_HUNDRED))
            .and_then(|d| d.to_i64());
        // Out of decimal or i64 range: `as` saturates at the i64 bounds.
        Self {
            cents: cents.unwrap_or_else(|| (amount * 100.0).round() as i64),
        }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let abs = self.cents.unsigned_abs();
        let dollars = group_thousands(abs / 100);
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{sign}${dollars}.{:02}", abs % 100)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
