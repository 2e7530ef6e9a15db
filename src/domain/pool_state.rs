//! Immutable pool snapshot consumed by the quoter.

use serde::{Deserialize, Serialize};

use super::{Amount, Asset, BalanceDelta, CurveKind, FeeRate, Price};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Reserves, supply and curve parameters of one pool at one instant.
///
/// A chain-state reader builds a fresh `PoolState` before every decision;
/// quoting never mutates it. [`PoolState::apply`] returns the snapshot a
/// delta would produce, leaving the original untouched.
///
/// # Invariants
///
/// - The curve's fee and amplification ramp are valid.
/// - A pool with issued LP units holds a non-zero reserve of both assets.
/// - `lp_supply == 0` marks an empty pool, which only accepts a first
///   deposit.
///
/// Snapshots built through [`PoolState::new`] uphold these; deserialized
/// snapshots are checked by the quoter via [`PoolState::validate`].
///
/// # Examples
///
/// ```
/// use curve_quote::domain::{Amount, Asset, CurveKind, FeeRate, PoolState};
///
/// let pool = PoolState::new(
///     CurveKind::ConstantProduct { fee: FeeRate::TIER_0_30_PERCENT },
///     Amount::new(1_000_000),
///     Amount::new(2_000_000),
///     Amount::new(1_414_213),
///     0,
/// )
/// .expect("valid snapshot");
/// assert_eq!(pool.balance_of(Asset::B), Amount::new(2_000_000));
/// assert!(!pool.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolState {
    curve: CurveKind,
    reserve_a: Amount,
    reserve_b: Amount,
    lp_supply: Amount,
    as_of_time: u64,
    #[serde(default)]
    flash_loan_fee: Option<FeeRate>,
}

impl PoolState {
    /// Creates a validated snapshot evaluated at unix time `as_of_time`.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found by
    /// [`validate`](Self::validate).
    pub fn new(
        curve: CurveKind,
        reserve_a: Amount,
        reserve_b: Amount,
        lp_supply: Amount,
        as_of_time: u64,
    ) -> crate::error::Result<Self> {
        let state = Self {
            curve,
            reserve_a,
            reserve_b,
            lp_supply,
            as_of_time,
            flash_loan_fee: None,
        };
        state.validate()?;
        Ok(state)
    }

    /// Returns a copy carrying the pool's flash-loan fee.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `fee` is invalid.
    pub fn with_flash_loan_fee(mut self, fee: FeeRate) -> crate::error::Result<Self> {
        fee.validate()?;
        self.flash_loan_fee = Some(fee);
        Ok(self)
    }

    /// Returns a copy evaluated at a different timestamp.
    #[must_use]
    pub const fn at_time(mut self, as_of_time: u64) -> Self {
        self.as_of_time = as_of_time;
        self
    }

    /// Checks all snapshot invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] for an invalid swap or flash-loan fee.
    /// - [`AmmError::InvalidConfiguration`] for an invalid amp ramp.
    /// - [`AmmError::InvalidPoolState`] if LP units exist while a reserve
    ///   is zero.
    pub fn validate(&self) -> crate::error::Result<()> {
        self.curve.validate()?;
        if let Some(fee) = self.flash_loan_fee {
            fee.validate()?;
        }
        if !self.lp_supply.is_zero() && (self.reserve_a.is_zero() || self.reserve_b.is_zero()) {
            return Err(AmmError::InvalidPoolState(
                "issued LP units require both reserves",
            ));
        }
        Ok(())
    }

    /// Bonding curve and its parameters.
    #[must_use]
    pub const fn curve(&self) -> CurveKind {
        self.curve
    }

    /// Reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Total issued LP units.
    pub const fn lp_supply(&self) -> Amount {
        self.lp_supply
    }

    /// Timestamp the snapshot is evaluated at.
    #[must_use]
    pub const fn as_of_time(&self) -> u64 {
        self.as_of_time
    }

    /// Flash-loan fee, if the pool offers flash loans.
    #[must_use]
    pub const fn flash_loan_fee(&self) -> Option<FeeRate> {
        self.flash_loan_fee
    }

    /// Reserve of `asset`.
    pub const fn balance_of(&self, asset: Asset) -> Amount {
        match asset {
            Asset::A => self.reserve_a,
            Asset::B => self.reserve_b,
        }
    }

    /// Reserves as `[a, b]`.
    #[must_use]
    pub const fn balances(&self) -> [u128; 2] {
        [self.reserve_a.get(), self.reserve_b.get()]
    }

    /// Returns `true` if no LP units are issued.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lp_supply.is_zero()
    }

    /// Spot price of `asset` in units of the other asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroReserve`] if the other reserve is zero.
    pub fn price_of(&self, asset: Asset) -> crate::error::Result<Price> {
        Price::from_reserves(self.balance_of(asset), self.balance_of(asset.other()))
    }

    /// Snapshot after `delta` settles, at the same timestamp.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Underflow`] if a reserve or the supply would go
    ///   negative.
    /// - [`AmmError::Overflow`] if a value exceeds `u128`.
    pub fn apply(&self, delta: &BalanceDelta) -> crate::error::Result<Self> {
        let mut next = *self;
        next.reserve_a = shift(self.reserve_a, delta.delta_a())?;
        next.reserve_b = shift(self.reserve_b, delta.delta_b())?;
        next.lp_supply = shift(self.lp_supply, delta.delta_lp())?;
        Ok(next)
    }
}

fn shift(value: Amount, delta: i128) -> crate::error::Result<Amount> {
    let magnitude = Amount::new(delta.unsigned_abs());
    if delta >= 0 {
        value.safe_add(&magnitude, "reserve overflow")
    } else {
        value.safe_sub(&magnitude, "reserve would go negative")
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const CP: CurveKind = CurveKind::ConstantProduct {
        fee: FeeRate::TIER_0_30_PERCENT,
    };

    fn pool(a: u128, b: u128, lp: u128) -> PoolState {
        let Ok(p) = PoolState::new(CP, Amount::new(a), Amount::new(b), Amount::new(lp), 0) else {
            panic!("valid pool");
        };
        p
    }

    #[test]
    fn supply_without_reserves_rejected() {
        assert!(matches!(
            PoolState::new(CP, Amount::ZERO, Amount::new(5), Amount::new(1), 0),
            Err(AmmError::InvalidPoolState(_))
        ));
    }

    #[test]
    fn empty_pool_may_hold_dust() {
        let p = pool(3, 0, 0);
        assert!(p.is_empty());
        assert_eq!(p.balances(), [3, 0]);
    }

    #[test]
    fn price_is_ratio_of_reserves() {
        let p = pool(1_000_000, 2_000_000, 1);
        let Ok(price) = p.price_of(Asset::B) else {
            panic!("expected Ok");
        };
        assert!((price.get() - 2.0).abs() < f64::EPSILON);
        assert_eq!(pool(5, 0, 0).price_of(Asset::A), Err(AmmError::ZeroReserve));
    }

    #[test]
    fn apply_delta() {
        let p = pool(1_000, 2_000, 100);
        let Ok(delta) = BalanceDelta::swap(Asset::A, Amount::new(10), Amount::new(19), 0) else {
            panic!("expected Ok");
        };
        let Ok(next) = p.apply(&delta) else {
            panic!("expected Ok");
        };
        assert_eq!(next.balances(), [1_010, 1_981]);
        assert_eq!(next.lp_supply(), Amount::new(100));
        assert_eq!(p.balances(), [1_000, 2_000]);
    }

    #[test]
    fn apply_overdraw_rejected() {
        let p = pool(1_000, 10, 100);
        let Ok(delta) = BalanceDelta::swap(Asset::A, Amount::new(10), Amount::new(11), 0) else {
            panic!("expected Ok");
        };
        assert!(matches!(p.apply(&delta), Err(AmmError::Underflow(_))));
    }

    #[test]
    fn flash_loan_fee_validated() {
        let p = pool(1, 1, 1);
        let Ok(with_fee) = p.with_flash_loan_fee(FeeRate::TIER_0_25_PERCENT) else {
            panic!("expected Ok");
        };
        assert_eq!(with_fee.flash_loan_fee(), Some(FeeRate::TIER_0_25_PERCENT));
    }

    #[test]
    fn json_snapshot_without_flash_fee() {
        let json = r#"{
            "curve": {"kind":"constant_product","fee":{"numerator":30,"denominator":10000}},
            "reserve_a": 10, "reserve_b": 20, "lp_supply": 14, "as_of_time": 7
        }"#;
        let Ok(p) = serde_json::from_str::<PoolState>(json) else {
            panic!("deserializable");
        };
        assert!(p.validate().is_ok());
        assert_eq!(p.flash_loan_fee(), None);
        assert_eq!(p.at_time(9).as_of_time(), 9);
    }
}
