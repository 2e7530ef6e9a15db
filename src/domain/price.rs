//! Informational spot price of a pool.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::AmmError;

/// Ratio of two reserves as an `f64`.
///
/// Used for display and monitoring only. No quote in this crate reads a
/// `Price`; every quantity that can move funds is computed in integers.
///
/// # Examples
///
/// ```
/// use curve_quote::domain::{Amount, Price};
///
/// let p = Price::from_reserves(Amount::new(300), Amount::new(100)).expect("non-zero");
/// assert_eq!(p.get(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(1.0);

    /// Creates a `Price` from a raw ratio.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrice`] if the value is negative, NaN,
    /// or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AmmError::InvalidPrice(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroReserve`] if `denominator` is zero.
    /// - [`AmmError::InvalidPrice`] if the ratio is not finite.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_reserves(numerator: Amount, denominator: Amount) -> crate::error::Result<Self> {
        if denominator.is_zero() {
            return Err(AmmError::ZeroReserve);
        }
        Self::new(numerator.get() as f64 / denominator.get() as f64)
    }

    /// Returns the underlying ratio.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = AmmError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
