//! Raw asset amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Rounding;
use crate::error::AmmError;

/// An unsigned quantity in the smallest denomination of an asset, or a
/// count of LP units.
///
/// `Amount` never interprets decimals. All `u128` values are valid
/// amounts, so "negative reserve" is unrepresentable by construction.
///
/// Addition and subtraction are checked and return `None` instead of
/// wrapping; [`Amount::mul_div`] reports failures as [`AmmError`].
///
/// # Examples
///
/// ```
/// use curve_quote::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.mul_div(&a, &Amount::new(3), Rounding::Up), Ok(Amount::new(6_667)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `floor(self * numerator / denominator)` or its ceiling,
    /// multiplying before dividing.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if `self * numerator` overflows.
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    pub const fn mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
    ) -> crate::error::Result<Self> {
        let Some(product) = self.0.checked_mul(numerator.0) else {
            return Err(AmmError::Overflow("amount mul_div overflow"));
        };
        match crate::math::div_round(product, denominator.0, rounding) {
            Some(v) => Ok(Self(v)),
            None => Err(AmmError::DivisionByZero),
        }
    }

    /// Converts to a signed reserve change, positive direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the amount exceeds `i128::MAX`.
    pub fn to_inflow(self) -> crate::error::Result<i128> {
        i128::try_from(self.0).map_err(|_| AmmError::Overflow("amount exceeds i128 range"))
    }

    /// Converts to a signed reserve change, negative direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the amount exceeds `i128::MAX`.
    pub fn to_outflow(self) -> crate::error::Result<i128> {
        self.to_inflow().map(|v| -v)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
