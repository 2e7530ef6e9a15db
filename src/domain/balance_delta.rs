//! Net reserve and LP-supply change implied by a quote.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Asset};
use crate::error::AmmError;

/// The outcome of any quoting operation, seen from the pool's side.
///
/// Positive deltas flow into the pool, negative deltas flow out. For
/// `delta_lp`, positive means minted and negative means burned.
///
/// # Invariants
///
/// - Swaps: `delta_lp == 0`, the input side is positive and the output
///   side negative.
/// - Liquidity actions: `delta_lp != 0` and at least one asset delta is
///   non-zero.
///
/// `solver_iterations` counts every Newton-Raphson iteration performed
/// while computing the quote (0 for constant product). It approximates
/// the compute cost the on-chain program pays for the same action.
///
/// # Examples
///
/// ```
/// use curve_quote::domain::{Amount, Asset, BalanceDelta};
///
/// let delta = BalanceDelta::swap(Asset::A, Amount::new(10_000), Amount::new(19_743), 0)
///     .expect("both legs non-zero");
/// assert_eq!(delta.delta_a(), 10_000);
/// assert_eq!(delta.delta_b(), -19_743);
/// assert_eq!(delta.amount_out(), Some((Asset::B, Amount::new(19_743))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BalanceDelta {
    delta_a: i128,
    delta_b: i128,
    delta_lp: i128,
    solver_iterations: u32,
}

impl BalanceDelta {
    /// Builds a swap delta: `amount_in` of `asset_in` enters the pool and
    /// `amount_out` of the other asset leaves it.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if either amount is zero.
    /// - [`AmmError::Overflow`] if an amount exceeds `i128::MAX`.
    pub fn swap(
        asset_in: Asset,
        amount_in: Amount,
        amount_out: Amount,
        solver_iterations: u32,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("swap input must be positive"));
        }
        if amount_out.is_zero() {
            return Err(AmmError::InvalidQuantity("swap output rounds to zero"));
        }
        let inflow = amount_in.to_inflow()?;
        let outflow = amount_out.to_outflow()?;
        let (delta_a, delta_b) = match asset_in {
            Asset::A => (inflow, outflow),
            Asset::B => (outflow, inflow),
        };
        Ok(Self {
            delta_a,
            delta_b,
            delta_lp: 0,
            solver_iterations,
        })
    }

    /// Builds a deposit delta: both amounts enter the pool and
    /// `lp_minted` LP units are issued.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `lp_minted` is zero or both
    ///   amounts are zero.
    /// - [`AmmError::Overflow`] if an amount exceeds `i128::MAX`.
    pub fn deposit(
        amount_a: Amount,
        amount_b: Amount,
        lp_minted: Amount,
        solver_iterations: u32,
    ) -> crate::error::Result<Self> {
        if amount_a.is_zero() && amount_b.is_zero() {
            return Err(AmmError::InvalidQuantity("deposit moves no assets"));
        }
        if lp_minted.is_zero() {
            return Err(AmmError::InvalidQuantity(
                "deposit too small to mint liquidity",
            ));
        }
        Ok(Self {
            delta_a: amount_a.to_inflow()?,
            delta_b: amount_b.to_inflow()?,
            delta_lp: lp_minted.to_inflow()?,
            solver_iterations,
        })
    }

    /// Builds a withdrawal delta: both amounts leave the pool and
    /// `lp_burned` LP units are destroyed.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `lp_burned` is zero or both
    ///   amounts are zero.
    /// - [`AmmError::Overflow`] if an amount exceeds `i128::MAX`.
    pub fn withdrawal(
        amount_a: Amount,
        amount_b: Amount,
        lp_burned: Amount,
    ) -> crate::error::Result<Self> {
        if lp_burned.is_zero() {
            return Err(AmmError::InvalidQuantity("burn amount must be non-zero"));
        }
        if amount_a.is_zero() && amount_b.is_zero() {
            return Err(AmmError::InvalidQuantity(
                "burn too small to return any asset",
            ));
        }
        Ok(Self {
            delta_a: amount_a.to_outflow()?,
            delta_b: amount_b.to_outflow()?,
            delta_lp: lp_burned.to_outflow()?,
            solver_iterations: 0,
        })
    }

    /// Net change of reserve A.
    #[must_use]
    pub const fn delta_a(&self) -> i128 {
        self.delta_a
    }

    /// Net change of reserve B.
    #[must_use]
    pub const fn delta_b(&self) -> i128 {
        self.delta_b
    }

    /// Net change of LP supply.
    #[must_use]
    pub const fn delta_lp(&self) -> i128 {
        self.delta_lp
    }

    /// Newton-Raphson iterations consumed by the quote.
    #[must_use]
    pub const fn solver_iterations(&self) -> u32 {
        self.solver_iterations
    }

    /// Net change of the reserve of `asset`.
    #[must_use]
    pub const fn delta_of(&self, asset: Asset) -> i128 {
        match asset {
            Asset::A => self.delta_a,
            Asset::B => self.delta_b,
        }
    }

    /// Returns `true` if this delta leaves LP supply unchanged.
    #[must_use]
    pub const fn is_swap(&self) -> bool {
        self.delta_lp == 0
    }

    /// For a swap, the asset and amount the caller sends.
    #[must_use]
    pub fn amount_in(&self) -> Option<(Asset, Amount)> {
        if !self.is_swap() {
            return None;
        }
        Asset::ALL
            .into_iter()
            .find(|a| self.delta_of(*a) > 0)
            .map(|a| (a, Amount::new(self.delta_of(a).unsigned_abs())))
    }

    /// For a swap, the asset and amount the caller receives.
    #[must_use]
    pub fn amount_out(&self) -> Option<(Asset, Amount)> {
        if !self.is_swap() {
            return None;
        }
        Asset::ALL
            .into_iter()
            .find(|a| self.delta_of(*a) < 0)
            .map(|a| (a, Amount::new(self.delta_of(a).unsigned_abs())))
    }
}

impl fmt::Display for BalanceDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Δa={} Δb={} Δlp={} iters={}",
            self.delta_a, self.delta_b, self.delta_lp, self.solver_iterations
        )
    }
}
