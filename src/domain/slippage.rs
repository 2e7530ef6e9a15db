//! Slippage tolerance for turning quotes into transaction bounds.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding, PARAMETER_SCALE};
use crate::error::AmmError;

/// Maximum tolerated price movement in parts per million.
///
/// A planner quotes a swap, then widens the quoted amounts by the
/// tolerance before submitting: exact-in swaps carry a minimum output,
/// exact-out swaps a maximum input.
///
/// # Examples
///
/// ```
/// use curve_quote::domain::{Amount, Slippage};
///
/// let s = Slippage::from_basis_points(50).expect("below 100%");
/// assert_eq!(s.min_output(Amount::new(19_743)), Ok(Amount::new(19_644)));
/// assert_eq!(s.max_input(Amount::new(9_998)), Ok(Amount::new(10_048)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Slippage(u64);

impl Slippage {
    /// No tolerance.
    pub const ZERO: Self = Self(0);

    /// Creates a tolerance of `ppm / 1_000_000`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `ppm >= 1_000_000`.
    pub const fn from_ppm(ppm: u64) -> crate::error::Result<Self> {
        if ppm >= PARAMETER_SCALE {
            return Err(AmmError::InvalidQuantity("slippage must be below 100%"));
        }
        Ok(Self(ppm))
    }

    /// Creates a tolerance from basis points (1 bp = 100 ppm).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `bps >= 10_000`.
    pub const fn from_basis_points(bps: u32) -> crate::error::Result<Self> {
        Self::from_ppm(bps as u64 * 100)
    }

    /// Tolerance in parts per million.
    #[must_use]
    pub const fn ppm(&self) -> u64 {
        self.0
    }

    /// Smallest output to accept for a quoted `amount_out`, floored.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Underflow`] if the tolerance is not below 100%.
    /// - [`AmmError::Overflow`] if the scaled amount overflows.
    pub fn min_output(&self, amount_out: Amount) -> crate::error::Result<Amount> {
        let keep = PARAMETER_SCALE
            .checked_sub(self.0)
            .ok_or(AmmError::Underflow("slippage exceeds 100%"))?;
        amount_out.mul_div(
            &Amount::from(keep),
            &Amount::from(PARAMETER_SCALE),
            Rounding::Down,
        )
    }

    /// Largest input to allow for a quoted `amount_in`, ceiled.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the scaled amount overflows.
    pub fn max_input(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        let widened = PARAMETER_SCALE
            .checked_add(self.0)
            .ok_or(AmmError::Overflow("slippage bound overflow"))?;
        amount_in.mul_div(
            &Amount::from(widened),
            &Amount::from(PARAMETER_SCALE),
            Rounding::Up,
        )
    }
}

impl TryFrom<u64> for Slippage {
    type Error = AmmError;

    fn try_from(ppm: u64) -> Result<Self, Self::Error> {
        Self::from_ppm(ppm)
    }
}

impl From<Slippage> for u64 {
    fn from(slippage: Slippage) -> Self {
        slippage.0
    }
}

impl fmt::Display for Slippage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ppm", self.0)
    }
}
