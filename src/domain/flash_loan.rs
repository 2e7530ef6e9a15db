//! Repayment owed for a flash loan.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Asset, FeeRate, Rounding};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// The amount a borrower must return within the same transaction group.
///
/// The fee is `floor(amount · rate) + 1`: the pool always charges at
/// least one unit, even on a zero-fee pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlashLoanQuote {
    asset: Asset,
    amount: Amount,
    fee: Amount,
    repayment: Amount,
}

impl FlashLoanQuote {
    /// Prices a loan of `amount` of `asset` at `rate`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `amount` is zero.
    /// - [`AmmError::Overflow`] if the fee or repayment overflows.
    pub fn new(asset: Asset, amount: Amount, rate: FeeRate) -> crate::error::Result<Self> {
        if amount.is_zero() {
            return Err(AmmError::InvalidQuantity("flash loan amount must be non-zero"));
        }
        let fee = rate
            .fee_on(amount, Rounding::Down)?
            .safe_add(&Amount::new(1), "flash loan fee overflow")?;
        let repayment = amount.safe_add(&fee, "flash loan repayment overflow")?;
        Ok(Self {
            asset,
            amount,
            fee,
            repayment,
        })
    }

    /// Borrowed asset.
    #[must_use]
    pub const fn asset(&self) -> Asset {
        self.asset
    }

    /// Borrowed amount.
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Fee charged on top of the borrowed amount.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// `amount + fee`.
    pub const fn repayment(&self) -> Amount {
        self.repayment
    }
}

impl fmt::Display for FlashLoanQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "borrow {} of {}, repay {} (fee {})",
            self.amount, self.asset, self.repayment, self.fee
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn fee_is_floored_plus_one() {
        let Ok(rate) = FeeRate::from_parameter_scale(1_000) else {
            panic!("valid rate");
        };
        // 0.1% of 1_000_000 = 1_000, plus one
        let Ok(q) = FlashLoanQuote::new(Asset::A, Amount::new(1_000_000), rate) else {
            panic!("expected Ok");
        };
        assert_eq!(q.fee(), Amount::new(1_001));
        assert_eq!(q.repayment(), Amount::new(1_001_001));
        assert_eq!(q.asset(), Asset::A);

        // 0.1% of 999 = 0.999, floored
        let Ok(small) = FlashLoanQuote::new(Asset::B, Amount::new(999), rate) else {
            panic!("expected Ok");
        };
        assert_eq!(small.fee(), Amount::new(1));
    }

    #[test]
    fn zero_fee_still_charges_one_unit() {
        let Ok(q) = FlashLoanQuote::new(Asset::B, Amount::new(50), FeeRate::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(q.repayment(), Amount::new(51));
    }

    #[test]
    fn zero_amount_rejected() {
        assert!(matches!(
            FlashLoanQuote::new(Asset::A, Amount::ZERO, FeeRate::ZERO),
            Err(AmmError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn display() {
        let Ok(q) = FlashLoanQuote::new(Asset::A, Amount::new(10), FeeRate::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(q.to_string(), "borrow 10 of asset A, repay 11 (fee 1)");
    }
}
