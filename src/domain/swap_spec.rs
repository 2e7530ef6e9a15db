//! Swap constraint: exact input or exact output.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::AmmError;

/// Specifies what constraint drives a swap quote.
///
/// # Invariants
///
/// The contained amount is always non-zero.
///
/// # Examples
///
/// ```
/// use curve_quote::domain::{Amount, SwapSpec};
///
/// let spec = SwapSpec::exact_in(Amount::new(1_000)).expect("non-zero");
/// assert!(matches!(spec, SwapSpec::ExactIn { .. }));
/// assert!(SwapSpec::exact_out(Amount::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapSpec {
    /// The caller sends exactly `amount_in`; the output is quoted.
    ExactIn {
        /// The fixed input amount, fee included.
        amount_in: Amount,
    },
    /// The caller receives exactly `amount_out`; the input is quoted.
    ExactOut {
        /// The desired output amount.
        amount_out: Amount,
    },
}

impl SwapSpec {
    /// Creates an exact-input constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `amount` is zero.
    pub const fn exact_in(amount: Amount) -> crate::error::Result<Self> {
        if amount.is_zero() {
            return Err(AmmError::InvalidQuantity("swap amount must be non-zero"));
        }
        Ok(Self::ExactIn { amount_in: amount })
    }

    /// Creates an exact-output constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `amount` is zero.
    pub const fn exact_out(amount: Amount) -> crate::error::Result<Self> {
        if amount.is_zero() {
            return Err(AmmError::InvalidQuantity("swap amount must be non-zero"));
        }
        Ok(Self::ExactOut { amount_out: amount })
    }
}

impl fmt::Display for SwapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn { amount_in } => write!(f, "ExactIn({amount_in})"),
            Self::ExactOut { amount_out } => write!(f, "ExactOut({amount_out})"),
        }
    }
}
