//! Bonding-curve implementations of [`CurveQuoter`](crate::traits::CurveQuoter).
//!
//! | Curve | Quoter | Solver |
//! |-------|--------|--------|
//! | `x · y = k` | [`ConstantProductQuoter`] | closed form |
//! | StableSwap | [`StableSwapQuoter`] | Newton-Raphson, see [`crate::math::StableSwapSolver`] |
//!
//! Burning LP units is proportional for every curve and shares one
//! implementation here, as do the pool-state preconditions.

mod amplification;
mod constant_product;
mod stable_swap;

#[cfg(test)]
mod proptest_properties;

pub use amplification::AmplificationSchedule;
pub use constant_product::{empty_pool_lp, ConstantProductQuoter};
pub use stable_swap::StableSwapQuoter;

use crate::domain::{Amount, Asset, BalanceDelta, PoolState, Rounding};
use crate::error::AmmError;

fn ensure_initialized(pool: &PoolState) -> Result<(), AmmError> {
    if pool.is_empty() {
        return Err(AmmError::EmptyPool);
    }
    Ok(())
}

fn ensure_empty(pool: &PoolState) -> Result<(), AmmError> {
    if !pool.is_empty() {
        return Err(AmmError::PoolNotEmpty);
    }
    Ok(())
}

fn ensure_non_zero(amount: Amount, reason: &'static str) -> Result<(), AmmError> {
    if amount.is_zero() {
        return Err(AmmError::InvalidQuantity(reason));
    }
    Ok(())
}

/// Pairs `amount` of `asset` with the other asset at the current reserve
/// ratio, floored. Returns `(amount_a, amount_b)`.
fn paired_deposit(
    pool: &PoolState,
    asset: Asset,
    amount: Amount,
) -> Result<(Amount, Amount), AmmError> {
    let paired = amount.mul_div(
        &pool.balance_of(asset.other()),
        &pool.balance_of(asset),
        Rounding::Down,
    )?;
    Ok(match asset {
        Asset::A => (amount, paired),
        Asset::B => (paired, amount),
    })
}

/// `floor(lp_amount · reserve / lp_supply)` of each asset.
fn proportional_burn(pool: &PoolState, lp_amount: Amount) -> Result<BalanceDelta, AmmError> {
    ensure_initialized(pool)?;
    if lp_amount > pool.lp_supply() {
        return Err(AmmError::BurnExceedsSupply);
    }
    let amount_a = lp_amount.mul_div(&pool.reserve_a(), &pool.lp_supply(), Rounding::Down)?;
    let amount_b = lp_amount.mul_div(&pool.reserve_b(), &pool.lp_supply(), Rounding::Down)?;
    BalanceDelta::withdrawal(amount_a, amount_b, lp_amount)
}
