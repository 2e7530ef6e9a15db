//! Rational fee rates.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Denominator of a basis-point fee (1 bp = 0.01%).
const BPS_SCALE: u64 = 10_000;

/// Denominator of the on-chain parameter scale (1e6 = 100%).
pub const PARAMETER_SCALE: u64 = 1_000_000;

/// A fee rate as the exact fraction `numerator / denominator`.
///
/// Fees are never represented as floats: the ceiling of `amount · rate`
/// must match the on-chain program for every amount, and `0.003_f64` is
/// not `3/1000`.
///
/// # Invariants
///
/// - `denominator > 0`
/// - `numerator < denominator` (a fee of 100% or more would leave no
///   input to trade, and makes the exact-out gross-up undefined)
///
/// # Examples
///
/// ```
/// use curve_quote::domain::{Amount, FeeRate};
///
/// let fee = FeeRate::TIER_0_30_PERCENT;
/// assert_eq!(fee.net_of_fee(Amount::new(10_000)).expect("fits"), Amount::new(9_970));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeRate {
    numerator: u64,
    denominator: u64,
}

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// 0.25%: low-fee constant-product pools.
    pub const TIER_0_25_PERCENT: Self = Self {
        numerator: 25,
        denominator: BPS_SCALE,
    };

    /// 0.30%: standard constant-product pools.
    pub const TIER_0_30_PERCENT: Self = Self {
        numerator: 30,
        denominator: BPS_SCALE,
    };

    /// 0.75%: volatile constant-product pools.
    pub const TIER_0_75_PERCENT: Self = Self {
        numerator: 75,
        denominator: BPS_SCALE,
    };

    /// 1.00%: high-fee constant-product pools.
    pub const TIER_1_00_PERCENT: Self = Self {
        numerator: 100,
        denominator: BPS_SCALE,
    };

    /// Creates a fee rate of `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if `denominator` is zero.
    /// - [`AmmError::InvalidFee`] if the rate is 100% or more.
    pub const fn new(numerator: u64, denominator: u64) -> crate::error::Result<Self> {
        let rate = Self {
            numerator,
            denominator,
        };
        match rate.validate() {
            Ok(()) => Ok(rate),
            Err(e) => Err(e),
        }
    }

    /// Creates a fee rate from basis points.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `bps >= 10_000`.
    pub const fn from_basis_points(bps: u32) -> crate::error::Result<Self> {
        Self::new(bps as u64, BPS_SCALE)
    }

    /// Creates a fee rate expressed on the 1e6 parameter scale.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `scaled >= 1_000_000`.
    pub const fn from_parameter_scale(scaled: u64) -> crate::error::Result<Self> {
        Self::new(scaled, PARAMETER_SCALE)
    }

    /// Checks the rate invariants. Needed after deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if an invariant does not hold.
    pub const fn validate(&self) -> crate::error::Result<()> {
        if self.denominator == 0 {
            return Err(AmmError::InvalidFee("fee denominator must be non-zero"));
        }
        if self.numerator >= self.denominator {
            return Err(AmmError::InvalidFee("fee rate must be below 100%"));
        }
        Ok(())
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns `true` for a zero fee.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Computes `amount · rate` with explicit rounding.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if `amount · numerator` overflows.
    /// - [`AmmError::DivisionByZero`] for an unvalidated zero denominator.
    pub const fn fee_on(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        amount.mul_div(
            &Amount::new(self.numerator as u128),
            &Amount::new(self.denominator as u128),
            rounding,
        )
    }

    /// Returns `amount − ceil(amount · rate)`, the input left to trade.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if `amount · numerator` overflows.
    /// - [`AmmError::Underflow`] for an unvalidated rate above 100%.
    pub fn net_of_fee(&self, amount: Amount) -> crate::error::Result<Amount> {
        let fee = self.fee_on(amount, Rounding::Up)?;
        amount.safe_sub(&fee, "fee exceeds amount")
    }

    /// Returns `ceil(net / (1 − rate))`, the smallest gross input whose
    /// fee-free share is at least `net`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if `net · denominator` overflows.
    /// - [`AmmError::InvalidFee`] for an unvalidated rate of 100% or more.
    pub fn gross_up(&self, net: Amount) -> crate::error::Result<Amount> {
        let keep = self
            .denominator
            .checked_sub(self.numerator)
            .filter(|k| *k > 0)
            .ok_or(AmmError::InvalidFee("fee rate must be below 100%"))?;
        net.mul_div(
            &Amount::new(u128::from(self.denominator)),
            &Amount::new(u128::from(keep)),
            Rounding::Up,
        )
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn rate(n: u64, d: u64) -> FeeRate {
        let Ok(r) = FeeRate::new(n, d) else {
            panic!("valid fee rate");
        };
        r
    }

    // -- construction -----------------------------------------------------

    #[test]
    fn zero_denominator_rejected() {
        assert!(matches!(FeeRate::new(0, 0), Err(AmmError::InvalidFee(_))));
    }

    #[test]
    fn full_fee_rejected() {
        assert!(matches!(FeeRate::new(5, 5), Err(AmmError::InvalidFee(_))));
        assert!(matches!(
            FeeRate::from_basis_points(10_000),
            Err(AmmError::InvalidFee(_))
        ));
    }

    #[test]
    fn scale_constructors() {
        assert_eq!(FeeRate::from_basis_points(30), Ok(FeeRate::TIER_0_30_PERCENT));
        assert_eq!(FeeRate::from_parameter_scale(3_000), Ok(rate(3_000, 1_000_000)));
    }

    #[test]
    fn presets_are_valid() {
        for fee in [
            FeeRate::ZERO,
            FeeRate::TIER_0_25_PERCENT,
            FeeRate::TIER_0_30_PERCENT,
            FeeRate::TIER_0_75_PERCENT,
            FeeRate::TIER_1_00_PERCENT,
        ] {
            assert!(fee.validate().is_ok(), "{fee}");
        }
    }

    // -- fee arithmetic ---------------------------------------------------

    #[test]
    fn fee_is_ceiled() {
        let fee = FeeRate::TIER_0_30_PERCENT;
        assert_eq!(fee.fee_on(Amount::new(10_000), Rounding::Up), Ok(Amount::new(30)));
        assert_eq!(fee.fee_on(Amount::new(10_001), Rounding::Up), Ok(Amount::new(31)));
        assert_eq!(fee.fee_on(Amount::new(10_001), Rounding::Down), Ok(Amount::new(30)));
        assert_eq!(fee.fee_on(Amount::new(1), Rounding::Up), Ok(Amount::new(1)));
    }

    #[test]
    fn net_of_fee() {
        assert_eq!(
            FeeRate::TIER_0_30_PERCENT.net_of_fee(Amount::new(10_000)),
            Ok(Amount::new(9_970))
        );
        assert_eq!(FeeRate::ZERO.net_of_fee(Amount::new(7)), Ok(Amount::new(7)));
    }

    #[test]
    fn gross_up_is_ceiled() {
        // 9_970 / 0.997 = 10_000 exactly
        assert_eq!(
            rate(3, 1_000).gross_up(Amount::new(9_970)),
            Ok(Amount::new(10_000))
        );
        // 996 / 0.997 = 998.99… → 999
        assert_eq!(rate(3, 1_000).gross_up(Amount::new(996)), Ok(Amount::new(999)));
        assert_eq!(FeeRate::ZERO.gross_up(Amount::new(5)), Ok(Amount::new(5)));
    }

    #[test]
    fn gross_up_rejects_unvalidated_full_fee() {
        let Ok(bad) = serde_json::from_str::<FeeRate>(r#"{"numerator":4,"denominator":4}"#) else {
            panic!("deserializable");
        };
        assert!(bad.validate().is_err());
        assert!(matches!(bad.gross_up(Amount::new(1)), Err(AmmError::InvalidFee(_))));
    }

    #[test]
    fn fee_overflow() {
        assert!(matches!(
            FeeRate::TIER_1_00_PERCENT.fee_on(Amount::MAX, Rounding::Up),
            Err(AmmError::Overflow(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(FeeRate::TIER_0_30_PERCENT.to_string(), "30/10000");
    }
}
