//! Newton-Raphson solvers for the two-asset StableSwap invariant.
//!
//! # Invariant (n = 2)
//!
//! ```text
//! A·nⁿ·Σxᵢ + D = A·nⁿ·D + D^(n+1) / (nⁿ · Πxᵢ)
//! ```
//!
//! Both solvers use unsigned integer arithmetic with truncating division
//! at every step, in a fixed operation order. Quotes are compared
//! bit-for-bit against an on-chain program, so reordering a product and
//! a division here is a correctness bug even when it looks harmless.
//!
//! # Iteration accounting
//!
//! Every solve reports how many iterations it consumed. Hitting the cap
//! is not an error: the last iterate is returned with
//! [`Solution::converged`] set to `false`.

use crate::config::{QuoterConfig, N_COINS};
use crate::domain::Asset;
use crate::error::AmmError;

/// Result of a single Newton-Raphson solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solution {
    value: u128,
    iterations: u32,
    converged: bool,
}

impl Solution {
    /// The solved quantity (`D` or `y`).
    #[must_use]
    pub const fn value(&self) -> u128 {
        self.value
    }

    /// Iterations consumed, including the converging one.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// `false` when the iteration cap was reached first.
    #[must_use]
    pub const fn converged(&self) -> bool {
        self.converged
    }
}

/// StableSwap solver bound to one effective amplification factor.
///
/// # Supported range
///
/// Intermediates are `u128`. The invariant step multiplies
/// `Ann · S` by `D` and builds `D_P` from `D³ / (4 · x · y)`, so both
/// must stay below `u128::MAX ≈ 3.4e38`. Balances up to about `1e16` per
/// asset solve at any `A` up to `5_000`; at `A = 5_000` a pool of `1e17`
/// per asset is already out of range. Larger pools fail with
/// [`AmmError::Overflow`] instead of returning a wrapped value.
///
/// # Examples
///
/// ```
/// use curve_quote::config::QuoterConfig;
/// use curve_quote::math::StableSwapSolver;
///
/// let solver = StableSwapSolver::new(100, QuoterConfig::default()).expect("A > 0");
/// let d = solver.compute_invariant([1_000, 1_000]).expect("solvable");
/// assert_eq!(d.value(), 2_000);
/// assert_eq!(d.iterations(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StableSwapSolver {
    amp: u128,
    config: QuoterConfig,
}

impl StableSwapSolver {
    /// Creates a solver for amplification factor `amp`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `amp` is zero.
    pub fn new(amp: u128, config: QuoterConfig) -> Result<Self, AmmError> {
        if amp == 0 {
            return Err(AmmError::InvalidConfiguration(
                "amplification factor must be greater than zero",
            ));
        }
        Ok(Self { amp, config })
    }

    /// Returns the amplification factor `A`.
    #[must_use]
    pub const fn amp(&self) -> u128 {
        self.amp
    }

    /// `Ann = A · nⁿ`.
    fn ann(&self) -> Result<u128, AmmError> {
        let n_pow_n = N_COINS
            .checked_pow(N_COINS as u32)
            .ok_or(AmmError::Overflow("nⁿ overflow"))?;
        self.amp
            .checked_mul(n_pow_n)
            .ok_or(AmmError::Overflow("A·nⁿ overflow"))
    }

    /// Solves for the invariant `D` of `balances`.
    ///
    /// Starts from `D = S` and iterates
    ///
    /// ```text
    /// D_P    = D · D / (n·x₀) · D / (n·x₁)
    /// D_next = (Ann·S + D_P·n) · D / ((Ann − 1)·D + (n + 1)·D_P)
    /// ```
    ///
    /// until two iterates differ by at most the configured tolerance.
    /// An all-zero pool has `D = 0` after zero iterations.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if exactly one balance is zero.
    /// - [`AmmError::Overflow`] if an intermediate product overflows `u128`.
    pub fn compute_invariant(&self, balances: [u128; 2]) -> Result<Solution, AmmError> {
        let s = balances[0]
            .checked_add(balances[1])
            .ok_or(AmmError::Overflow("D: S overflow"))?;
        if s == 0 {
            return Ok(Solution {
                value: 0,
                iterations: 0,
                converged: true,
            });
        }

        let ann = self.ann()?;
        let mut d = s;

        for iteration in 1..=self.config.max_iterations() {
            let mut d_p = d;
            for x in balances {
                let n_x = x
                    .checked_mul(N_COINS)
                    .ok_or(AmmError::Overflow("D: n·x overflow"))?;
                if n_x == 0 {
                    return Err(AmmError::DivisionByZero);
                }
                d_p = d_p
                    .checked_mul(d)
                    .ok_or(AmmError::Overflow("D: D_P·D overflow"))?
                    / n_x;
            }

            let d_prev = d;

            let ann_s = ann
                .checked_mul(s)
                .ok_or(AmmError::Overflow("D: Ann·S overflow"))?;
            let d_p_n = d_p
                .checked_mul(N_COINS)
                .ok_or(AmmError::Overflow("D: D_P·n overflow"))?;
            let numerator = ann_s
                .checked_add(d_p_n)
                .ok_or(AmmError::Overflow("D: numerator sum overflow"))?
                .checked_mul(d)
                .ok_or(AmmError::Overflow("D: numerator overflow"))?;

            let denom_left = (ann - 1)
                .checked_mul(d)
                .ok_or(AmmError::Overflow("D: (Ann−1)·D overflow"))?;
            let denom_right = (N_COINS + 1)
                .checked_mul(d_p)
                .ok_or(AmmError::Overflow("D: (n+1)·D_P overflow"))?;
            let denominator = denom_left
                .checked_add(denom_right)
                .ok_or(AmmError::Overflow("D: denominator overflow"))?;
            if denominator == 0 {
                return Err(AmmError::DivisionByZero);
            }

            d = numerator / denominator;

            if d.abs_diff(d_prev) <= self.config.tolerance() {
                tracing::trace!(d, iterations = iteration, "invariant converged");
                return Ok(Solution {
                    value: d,
                    iterations: iteration,
                    converged: true,
                });
            }
        }

        tracing::warn!(
            d,
            cap = self.config.max_iterations(),
            "invariant solve hit the iteration cap"
        );
        Ok(Solution {
            value: d,
            iterations: self.config.max_iterations(),
            converged: false,
        })
    }

    /// Solves for the balance of `target` that keeps the invariant at `d`
    /// once `other`'s balance becomes `new_other_balance`.
    ///
    /// With every balance except the target substituted in:
    ///
    /// ```text
    /// c = D · D / (n·x_other) · D / (Ann·n)
    /// b = S' + D / Ann
    /// y_next = (y² + c) / (2·y + b − D)
    /// ```
    ///
    /// starting from `y = D`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `target == other`.
    /// - [`AmmError::DivisionByZero`] if `new_other_balance` is zero.
    /// - [`AmmError::Underflow`] if `2·y + b − D` would be negative.
    /// - [`AmmError::Overflow`] if an intermediate product overflows `u128`.
    pub fn compute_balance(
        &self,
        target: Asset,
        other: Asset,
        new_other_balance: u128,
        balances: [u128; 2],
        d: u128,
    ) -> Result<Solution, AmmError> {
        if target == other {
            return Err(AmmError::InvalidConfiguration(
                "target and other asset must differ",
            ));
        }

        let ann = self.ann()?;
        let mut c = d;
        let mut s: u128 = 0;

        for asset in Asset::ALL {
            let x = if asset == other {
                new_other_balance
            } else if asset != target {
                balances[asset.index()]
            } else {
                continue;
            };
            s = s
                .checked_add(x)
                .ok_or(AmmError::Overflow("y: S' overflow"))?;
            let n_x = x
                .checked_mul(N_COINS)
                .ok_or(AmmError::Overflow("y: n·x overflow"))?;
            if n_x == 0 {
                return Err(AmmError::DivisionByZero);
            }
            c = c
                .checked_mul(d)
                .ok_or(AmmError::Overflow("y: c·D overflow"))?
                / n_x;
        }

        let ann_n = ann
            .checked_mul(N_COINS)
            .ok_or(AmmError::Overflow("y: Ann·n overflow"))?;
        c = c
            .checked_mul(d)
            .ok_or(AmmError::Overflow("y: c·D overflow"))?
            / ann_n;

        let b = s
            .checked_add(d / ann)
            .ok_or(AmmError::Overflow("y: b overflow"))?;

        let mut y = d;
        for iteration in 1..=self.config.max_iterations() {
            let y_prev = y;

            let numerator = y
                .checked_mul(y)
                .ok_or(AmmError::Overflow("y: y² overflow"))?
                .checked_add(c)
                .ok_or(AmmError::Overflow("y: y² + c overflow"))?;
            let denominator = y
                .checked_mul(2)
                .ok_or(AmmError::Overflow("y: 2y overflow"))?
                .checked_add(b)
                .ok_or(AmmError::Overflow("y: 2y + b overflow"))?
                .checked_sub(d)
                .ok_or(AmmError::Underflow("y: 2y + b − D underflow"))?;
            if denominator == 0 {
                return Err(AmmError::DivisionByZero);
            }

            y = numerator / denominator;

            if y.abs_diff(y_prev) <= self.config.tolerance() {
                tracing::trace!(y, iterations = iteration, %target, "balance converged");
                return Ok(Solution {
                    value: y,
                    iterations: iteration,
                    converged: true,
                });
            }
        }

        tracing::warn!(
            y,
            cap = self.config.max_iterations(),
            %target,
            "balance solve hit the iteration cap"
        );
        Ok(Solution {
            value: y,
            iterations: self.config.max_iterations(),
            converged: false,
        })
    }
}
