//! `Result`-returning reserve arithmetic.
//!
//! Quote code adjusts reserves by adding deposits and removing payouts.
//! [`CheckedArithmetic`] turns the `Option`-returning operations on
//! [`Amount`] into `Result`s that carry the caller's reason, so each
//! step can use `?` and still say which sum overflowed.
//!
//! ```
//! use curve_quote::domain::Amount;
//! use curve_quote::error::AmmError;
//! use curve_quote::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000);
//! assert_eq!(
//!     reserve.safe_sub(&Amount::new(1_001), "payout exceeds reserve"),
//!     Err(AmmError::Underflow("payout exceeds reserve"))
//! );
//! assert_eq!(reserve.safe_add(&Amount::new(1), "deposit"), Ok(Amount::new(1_001)));
//! ```

use crate::domain::Amount;
use crate::error::AmmError;

/// Checked addition and subtraction that report `reason` on failure.
pub trait CheckedArithmetic: Sized {
    /// `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] carrying `reason`.
    fn safe_add(&self, other: &Self, reason: &'static str) -> Result<Self, AmmError>;

    /// `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] carrying `reason`.
    fn safe_sub(&self, other: &Self, reason: &'static str) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, reason: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other).ok_or(AmmError::Overflow(reason))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, reason: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::Underflow(reason))
    }
}
