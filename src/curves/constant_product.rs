//! Closed-form quotes for constant-product (`x · y = k`) pools.
//!
//! # Swap (A → B, exact in)
//!
//! 1. `net_in = amount_in − ceil(amount_in · fee)`
//! 2. `amount_out = floor(reserve_b · net_in / (reserve_a + net_in))`
//!
//! # Swap (A → B, exact out)
//!
//! 1. `net_in = floor(reserve_a · amount_out / (reserve_b − amount_out)) − 1`
//! 2. `amount_in = ceil(net_in / (1 − fee))`
//!
//! The `− 1` in step 1 reproduces the on-chain program bit for bit.
//!
//! # Liquidity
//!
//! Deposits pair at the reserve ratio and mint
//! `floor(amount_a · lp_supply / reserve_a)`. The first deposit mints the
//! geometric mean of the two amounts; see [`empty_pool_lp`].

use super::{
    ensure_empty, ensure_initialized, ensure_non_zero, paired_deposit, proportional_burn,
};
use crate::domain::{Amount, Asset, BalanceDelta, FeeRate, PoolState, Rounding};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::math::isqrt;
use crate::traits::CurveQuoter;

/// Largest product the first-deposit formula takes the root of directly.
const DIRECT_SQRT_LIMIT: u128 = u64::MAX as u128;

/// LP units minted by the first deposit into an empty pool.
///
/// `floor(√(a · b))` while the product fits in 64 bits, and
/// `floor(√a) · floor(√b)` above that. The second branch under-mints
/// relative to the exact root; it is what the on-chain program computes,
/// so both branches are kept separate.
///
/// # Examples
///
/// ```
/// use curve_quote::curves::empty_pool_lp;
///
/// assert_eq!(empty_pool_lp(100, 400), Ok(200));
/// ```
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if `floor(√a) · floor(√b)` overflows,
/// which cannot happen for `u128` inputs.
pub fn empty_pool_lp(amount_a: u128, amount_b: u128) -> Result<u128, AmmError> {
    match amount_a.checked_mul(amount_b) {
        Some(product) if product <= DIRECT_SQRT_LIMIT => Ok(isqrt(product)),
        _ => isqrt(amount_a)
            .checked_mul(isqrt(amount_b))
            .ok_or(AmmError::Overflow("first deposit LP overflow")),
    }
}

/// Quoter for one constant-product pool's fee rate.
///
/// # Examples
///
/// ```
/// use curve_quote::curves::ConstantProductQuoter;
/// use curve_quote::domain::{Amount, Asset, CurveKind, FeeRate, PoolState};
/// use curve_quote::traits::CurveQuoter;
///
/// let fee = FeeRate::new(3, 1_000).expect("valid");
/// let pool = PoolState::new(
///     CurveKind::ConstantProduct { fee },
///     Amount::new(1_000_000),
///     Amount::new(2_000_000),
///     Amount::new(1_000_000),
///     0,
/// )
/// .expect("valid");
///
/// let quote = ConstantProductQuoter::new(fee)
///     .swap_exact_in_quote(&pool, Asset::A, Amount::new(10_000))
///     .expect("quotable");
/// assert_eq!(quote.delta_b(), -19_743);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantProductQuoter {
    fee: FeeRate,
}

impl ConstantProductQuoter {
    /// Creates a quoter charging `fee` on swap inputs.
    #[must_use]
    pub const fn new(fee: FeeRate) -> Self {
        Self { fee }
    }

    /// Swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }
}

impl CurveQuoter for ConstantProductQuoter {
    fn empty_pool_quote(
        &self,
        pool: &PoolState,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<BalanceDelta, AmmError> {
        ensure_empty(pool)?;
        ensure_non_zero(amount_a, "first deposit requires both assets")?;
        ensure_non_zero(amount_b, "first deposit requires both assets")?;
        let lp = empty_pool_lp(amount_a.get(), amount_b.get())?;
        BalanceDelta::deposit(amount_a, amount_b, Amount::new(lp), 0)
    }

    fn pool_quote(
        &self,
        pool: &PoolState,
        asset: Asset,
        amount: Amount,
    ) -> Result<BalanceDelta, AmmError> {
        ensure_initialized(pool)?;
        ensure_non_zero(amount, "deposit amount must be non-zero")?;
        let (amount_a, amount_b) = paired_deposit(pool, asset, amount)?;
        let lp = amount_a.mul_div(&pool.lp_supply(), &pool.reserve_a(), Rounding::Down)?;
        BalanceDelta::deposit(amount_a, amount_b, lp, 0)
    }

    fn burn_quote(&self, pool: &PoolState, lp_amount: Amount) -> Result<BalanceDelta, AmmError> {
        proportional_burn(pool, lp_amount)
    }

    fn swap_exact_in_quote(
        &self,
        pool: &PoolState,
        asset_in: Asset,
        amount_in: Amount,
    ) -> Result<BalanceDelta, AmmError> {
        ensure_initialized(pool)?;
        ensure_non_zero(amount_in, "swap input must be positive")?;
        let balance_in = pool.balance_of(asset_in);
        let balance_out = pool.balance_of(asset_in.other());

        let net_in = self.fee.net_of_fee(amount_in)?;
        let denominator = balance_in.safe_add(&net_in, "exact-in denominator overflow")?;
        let amount_out = balance_out.mul_div(&net_in, &denominator, Rounding::Down)?;

        BalanceDelta::swap(asset_in, amount_in, amount_out, 0)
    }

    fn swap_exact_out_quote(
        &self,
        pool: &PoolState,
        asset_out: Asset,
        amount_out: Amount,
    ) -> Result<BalanceDelta, AmmError> {
        ensure_initialized(pool)?;
        ensure_non_zero(amount_out, "swap output must be positive")?;
        let asset_in = asset_out.other();
        let balance_in = pool.balance_of(asset_in);
        let balance_out = pool.balance_of(asset_out);
        if amount_out >= balance_out {
            return Err(AmmError::InsufficientLiquidity);
        }

        let remaining = balance_out.safe_sub(&amount_out, "exact-out remaining reserve")?;
        let net_in = balance_in
            .mul_div(&amount_out, &remaining, Rounding::Down)?
            .checked_sub(&Amount::new(1))
            .ok_or(AmmError::InvalidQuantity("swap output too small to price"))?;
        let amount_in = self.fee.gross_up(net_in)?;

        BalanceDelta::swap(asset_in, amount_in, amount_out, 0)
    }
}
