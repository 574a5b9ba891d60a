//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart total computed in floats will eventually display ₹249.99999.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units (paise)                             │
//! │    ₹100.00 = 10000 minor units; all arithmetic stays exact             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The JSON Boundary
//! The remote API serializes prices as decimal numbers (`100.0`). The
//! [`serde_major`] and [`serde_major_opt`] modules convert between wire
//! decimals and `Money` exactly once, at deserialization/serialization
//! time. Nothing else in the codebase touches floats.
//!
//! ## Usage
//! ```rust
//! use shopfront_core::money::Money;
//!
//! // Create from minor units (preferred)
//! let price = Money::from_minor(10_000); // ₹100.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                        // ₹200.00
//! let total = price + Money::from_minor(5_000);   // ₹150.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections/refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let price = Money::from_minor(10_050); // Represents ₹100.50
    /// assert_eq!(price.minor(), 10_050);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from major units (whole rupees).
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(100), Money::from_minor(10_000));
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Converts a wire-format decimal into Money, rounding half away from
    /// zero to the nearest minor unit.
    ///
    /// This exists ONLY for the JSON boundary; see [`serde_major`].
    #[inline]
    pub fn from_major_f64(value: f64) -> Self {
        Money((value * 100.0).round() as i64)
    }

    /// Converts back to the wire-format decimal.
    ///
    /// This exists ONLY for the JSON boundary; see [`serde_major`].
    #[inline]
    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in minor units (smallest currency unit).
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(299); // ₹2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.minor(), 897); // ₹8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Wire Format Conversion (serde helpers)
// =============================================================================

/// Serde adapter: `Money` as a decimal number of major units on the wire.
///
/// ## Usage
/// ```rust,ignore
/// #[derive(Serialize, Deserialize)]
/// struct Product {
///     #[serde(with = "shopfront_core::money::serde_major")]
///     price: Money,
/// }
/// ```
pub mod serde_major {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.as_major_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Money::from_major_f64(value))
    }
}

/// Serde adapter: `Option<Money>` as an optional decimal on the wire.
pub mod serde_major_opt {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        money: &Option<Money>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match money {
            Some(m) => serializer.serialize_some(&m.as_major_f64()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Money>, D::Error> {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(value.map(Money::from_major_f64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logging and debugging. Use frontend formatting for actual
/// UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
