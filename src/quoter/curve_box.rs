//! Enum dispatch over the curve quoters.

use crate::config::QuoterConfig;
use crate::curves::{ConstantProductQuoter, StableSwapQuoter};
use crate::domain::{Amount, Asset, BalanceDelta, CurveKind, PoolState};
use crate::error::AmmError;
use crate::traits::CurveQuoter;

/// A quoter for whichever curve a pool uses, resolved for one snapshot.
///
/// The StableSwap variant carries the amplification factor in effect at
/// the snapshot's `as_of_time`, so a `CurveBox` must not be reused across
/// snapshots taken at different times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveBox {
    /// `x · y = k`.
    ConstantProduct(ConstantProductQuoter),
    /// StableSwap at a resolved amplification factor.
    StableSwap(StableSwapQuoter),
}

impl CurveBox {
    /// Resolves the quoter for `pool`'s curve at `pool.as_of_time()`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the amplification ramp
    ///   cannot be evaluated at the snapshot time or resolves to zero.
    pub fn for_pool(pool: &PoolState, config: QuoterConfig) -> Result<Self, AmmError> {
        match pool.curve() {
            CurveKind::ConstantProduct { fee } => {
                Ok(Self::ConstantProduct(ConstantProductQuoter::new(fee)))
            }
            CurveKind::StableSwap { fee, amp } => {
                let effective = amp.amp_at(pool.as_of_time())?;
                Ok(Self::StableSwap(StableSwapQuoter::new(fee, effective, config)?))
            }
        }
    }
}

/// Forwards a [`CurveQuoter`] call to the inner quoter of each variant.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            CurveBox::ConstantProduct(q) => q.$method($($arg),*),
            CurveBox::StableSwap(q) => q.$method($($arg),*),
        }
    };
}

impl CurveQuoter for CurveBox {
    fn empty_pool_quote(
        &self,
        pool: &PoolState,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<BalanceDelta, AmmError> {
        delegate!(self, empty_pool_quote(pool, amount_a, amount_b))
    }

    fn pool_quote(
        &self,
        pool: &PoolState,
        asset: Asset,
        amount: Amount,
    ) -> Result<BalanceDelta, AmmError> {
        delegate!(self, pool_quote(pool, asset, amount))
    }

    fn burn_quote(&self, pool: &PoolState, lp_amount: Amount) -> Result<BalanceDelta, AmmError> {
        delegate!(self, burn_quote(pool, lp_amount))
    }

    fn swap_exact_in_quote(
        &self,
        pool: &PoolState,
        asset_in: Asset,
        amount_in: Amount,
    ) -> Result<BalanceDelta, AmmError> {
        delegate!(self, swap_exact_in_quote(pool, asset_in, amount_in))
    }

    fn swap_exact_out_quote(
        &self,
        pool: &PoolState,
        asset_out: Asset,
        amount_out: Amount,
    ) -> Result<BalanceDelta, AmmError> {
        delegate!(self, swap_exact_out_quote(pool, asset_out, amount_out))
    }
}
