//! Per-curve quoting contract.
//!
//! [`CurveQuoter`] is implemented once per bonding-curve family. Each
//! method is a pure function of the supplied [`PoolState`] snapshot: it
//! reads reserves and supply, never mutates them, and reports the change
//! the on-chain program would apply as a [`BalanceDelta`].
//!
//! # Sign convention
//!
//! Deltas are taken from the pool's side: deposits and swap inputs are
//! positive, withdrawals and swap outputs negative, minted LP units
//! positive and burned LP units negative.
//!
//! # Fee placement
//!
//! Swap fees are charged on the input side and ceiled:
//!
//! ```text
//! net_in = amount_in − ceil(amount_in · fee)
//! ```
//!
//! The curve then prices `net_in`; the fee stays in the pool.

use crate::domain::{Amount, Asset, BalanceDelta, PoolState};
use crate::error::AmmError;

/// Quoting operations every bonding curve provides.
///
/// There are no default implementations, so each curve states its own
/// behavior for every action explicitly.
///
/// # Errors
///
/// Common failures across implementors:
///
/// - [`AmmError::EmptyPool`] for any action other than the first deposit
///   on a pool with no LP units.
/// - [`AmmError::PoolNotEmpty`] for a first deposit on an initialized pool.
/// - [`AmmError::InsufficientLiquidity`] when a swap would drain a reserve.
/// - [`AmmError::Overflow`] when an intermediate product exceeds `u128`.
pub trait CurveQuoter {
    /// Quotes the first deposit into an empty pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotEmpty`] if the pool has issued LP units.
    /// - [`AmmError::InvalidQuantity`] if either amount is zero or the
    ///   deposit would mint nothing.
    fn empty_pool_quote(
        &self,
        pool: &PoolState,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<BalanceDelta, AmmError>;

    /// Quotes a deposit of `amount` of `asset`, pairing it with the other
    /// asset at the current reserve ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if the pool has no LP units.
    /// - [`AmmError::InvalidQuantity`] if the deposit would mint nothing.
    fn pool_quote(
        &self,
        pool: &PoolState,
        asset: Asset,
        amount: Amount,
    ) -> Result<BalanceDelta, AmmError>;

    /// Quotes burning `lp_amount` LP units for a proportional, floored
    /// share of both reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if the pool has no LP units.
    /// - [`AmmError::BurnExceedsSupply`] if `lp_amount > lp_supply`.
    fn burn_quote(&self, pool: &PoolState, lp_amount: Amount) -> Result<BalanceDelta, AmmError>;

    /// Quotes the output of selling exactly `amount_in` of `asset_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if the pool has no LP units.
    /// - [`AmmError::InvalidQuantity`] if the output rounds to zero.
    /// - [`AmmError::Underflow`] if a solve stopped at its iteration cap
    ///   leaves the output balance above the reserve.
    fn swap_exact_in_quote(
        &self,
        pool: &PoolState,
        asset_in: Asset,
        amount_in: Amount,
    ) -> Result<BalanceDelta, AmmError>;

    /// Quotes the input needed to buy exactly `amount_out` of `asset_out`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if the pool has no LP units.
    /// - [`AmmError::InsufficientLiquidity`] if `amount_out` is not below
    ///   the reserve of `asset_out`.
    fn swap_exact_out_quote(
        &self,
        pool: &PoolState,
        asset_out: Asset,
        amount_out: Amount,
    ) -> Result<BalanceDelta, AmmError>;
}
