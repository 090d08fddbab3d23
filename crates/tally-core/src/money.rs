//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing commissions as floats:                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  THE ROUNDING PROBLEM                                                   │
//! │    Rounding 99.999 to cents gives 100.00, which crosses a tier.        │
//! │    1% of 123.45 is 1.2345, not 1.23.                                    │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 Decimal                                          │
//! │    The sales file stores `valor` as a JSON number (150.00).             │
//! │    It becomes an exact decimal ONCE at the boundary, using the          │
//! │    shortest digits that round-trip, and every sum and percentage        │
//! │    after that is exact decimal math with overflow checks.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let sale = Money::new(15_000, 2); // 150.00
//! let total = sale.checked_add(Money::new(5_000, 2)).unwrap();
//! assert_eq!(total, Money::new(200, 0));
//! assert_eq!(total.to_major_units(), 200.0);
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::commission::CommissionRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in major units (e.g. `150.25`), stored as an exact
/// base-10 decimal.
///
/// ## Design Decisions
/// - **Decimal, not cents**: the dataset may carry sub-cent amounts and the
///   commission tiers must see them unrounded
/// - **Signed**: the dataset is not trusted to be non-negative
/// - **Checked addition only**: report totals never wrap or panic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a mantissa and a decimal scale.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::new(1099, 2); // 10.99
    /// assert_eq!(price.to_major_units(), 10.99);
    /// ```
    #[inline]
    pub fn new(num: i64, scale: u32) -> Self {
        Money(Decimal::new(num, scale))
    }

    /// Converts a JSON number to Money.
    ///
    /// Uses the shortest decimal digits that round-trip to `value`, so
    /// `99.999` stays `99.999` instead of becoming the nearest binary
    /// fraction. Returns `None` for NaN, infinities and magnitudes beyond
    /// what a decimal can hold.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_units(99.999), Some(Money::new(99_999, 3)));
    /// assert_eq!(Money::from_major_units(f64::NAN), None);
    /// assert_eq!(Money::from_major_units(1e40), None);
    /// ```
    pub fn from_major_units(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Decimal::from_str(&value.to_string()).ok().map(Money)
    }

    /// Returns the value as a JSON-friendly float, the nearest `f64` to
    /// the decimal digits.
    pub fn to_major_units(&self) -> f64 {
        self.0.to_string().parse().unwrap_or_default()
    }

    /// Returns zero money value.
    #[inline]
    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Adds two values, or `None` if the result is out of range.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Calculates the commission owed on this amount at the given rate.
    ///
    /// Exact: no rounding is applied. `None` only on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::commission::CommissionRate;
    /// use tally_core::money::Money;
    ///
    /// let rate = CommissionRate::from_bps(100);  // 1%
    /// let odd = Money::new(12_345, 2);           // 123.45
    /// assert_eq!(odd.calculate_commission(rate), Some(Money::new(12_345, 4)));
    /// ```
    pub fn calculate_commission(&self, rate: CommissionRate) -> Option<Money> {
        self.0.checked_mul(rate.as_fraction()).map(Money)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

// =============================================================================
// Serde Helper: Major Units
// =============================================================================

/// Serde adapter for fields stored as a decimal JSON number (`150.0`).
///
/// Out-of-range and non-finite numbers are rejected, which surfaces as a
/// parse error of the whole file.
///
/// ## Usage
/// ```rust
/// use serde::Deserialize;
/// use tally_core::money::{self, Money};
///
/// #[derive(Deserialize)]
/// struct Row {
///     #[serde(with = "money::major_units")]
///     valor: Money,
/// }
///
/// let row: Row = serde_json::from_str(r#"{"valor": 150.5}"#).unwrap();
/// assert_eq!(row.valor, Money::new(15_050, 2));
/// ```
pub mod major_units {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Money;

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.to_major_units())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Money::from_major_units(value).ok_or_else(|| {
            de::Error::custom(format!("monetary amount out of range: {}", value))
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
