//! StableSwap quotes built on the Newton-Raphson solvers.
//!
//! Every quote starts from the invariant `D` of the current reserves and
//! then solves for whatever the action leaves unknown. Iteration counts
//! from every solve are summed into
//! [`BalanceDelta::solver_iterations`].
//!
//! | Action | Solves |
//! |--------|--------|
//! | first deposit | `D([b, b])` |
//! | deposit | `D(reserves)`, `D(reserves + deposit)` |
//! | exact in | `D(reserves)`, `y(out)` with `x_in + net_in` |
//! | exact out | `D(reserves)`, `y(in)` with `x_out − amount_out` |
//! | burn | none, proportional |

use super::{
    ensure_empty, ensure_initialized, ensure_non_zero, paired_deposit, proportional_burn,
};
use crate::config::QuoterConfig;
use crate::domain::{Amount, Asset, BalanceDelta, FeeRate, PoolState, Rounding};
use crate::error::AmmError;
use crate::math::{CheckedArithmetic, Solution, StableSwapSolver};
use crate::traits::CurveQuoter;

/// Quoter for one StableSwap pool at one effective amplification factor.
///
/// The factor is resolved from the pool's ramp before construction, so
/// a quoter is valid only for the timestamp it was built for.
///
/// # Examples
///
/// ```
/// use curve_quote::config::QuoterConfig;
/// use curve_quote::curves::{AmplificationSchedule, StableSwapQuoter};
/// use curve_quote::domain::{Amount, Asset, CurveKind, FeeRate, PoolState};
/// use curve_quote::traits::CurveQuoter;
///
/// let fee = FeeRate::new(3, 1_000).expect("valid");
/// let amp = AmplificationSchedule::constant(100).expect("valid");
/// let pool = PoolState::new(
///     CurveKind::StableSwap { fee, amp },
///     Amount::new(1_000_000),
///     Amount::new(1_000_000),
///     Amount::new(2_000_000),
///     0,
/// )
/// .expect("valid");
///
/// let quoter = StableSwapQuoter::new(fee, 100, QuoterConfig::default()).expect("A > 0");
/// let quote = quoter
///     .swap_exact_in_quote(&pool, Asset::A, Amount::new(1_000))
///     .expect("quotable");
/// assert_eq!(quote.delta_b(), -997);
/// assert_eq!(quote.solver_iterations(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StableSwapQuoter {
    fee: FeeRate,
    solver: StableSwapSolver,
}

impl StableSwapQuoter {
    /// Creates a quoter for amplification factor `amp`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `amp` is zero.
    pub fn new(fee: FeeRate, amp: u128, config: QuoterConfig) -> Result<Self, AmmError> {
        Ok(Self {
            fee,
            solver: StableSwapSolver::new(amp, config)?,
        })
    }

    /// Swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }

    /// Effective amplification factor.
    #[must_use]
    pub const fn amp(&self) -> u128 {
        self.solver.amp()
    }

    fn invariant(&self, balances: [u128; 2]) -> Result<Solution, AmmError> {
        self.solver.compute_invariant(balances)
    }
}

fn total_iterations(solves: &[Solution]) -> u32 {
    solves
        .iter()
        .fold(0_u32, |acc, s| acc.saturating_add(s.iterations()))
}

impl CurveQuoter for StableSwapQuoter {
    fn empty_pool_quote(
        &self,
        pool: &PoolState,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<BalanceDelta, AmmError> {
        ensure_empty(pool)?;
        ensure_non_zero(amount_a, "first deposit requires both assets")?;
        ensure_non_zero(amount_b, "first deposit requires both assets")?;
        // LP units are the invariant of the B amount on both sides.
        let d = self.invariant([amount_b.get(), amount_b.get()])?;
        BalanceDelta::deposit(
            amount_a,
            amount_b,
            Amount::new(d.value()),
            d.iterations(),
        )
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

        let d0 = self.invariant(pool.balances())?;
        let after = [
            pool.reserve_a()
                .safe_add(&amount_a, "deposit reserve overflow")?
                .get(),
            pool.reserve_b()
                .safe_add(&amount_b, "deposit reserve overflow")?
                .get(),
        ];
        let d1 = self.invariant(after)?;

        let growth = d1
            .value()
            .checked_sub(d0.value())
            .ok_or(AmmError::Underflow("invariant shrank on deposit"))?;
        let lp = pool.lp_supply().mul_div(
            &Amount::new(growth),
            &Amount::new(d0.value()),
            Rounding::Down,
        )?;

        BalanceDelta::deposit(amount_a, amount_b, lp, total_iterations(&[d0, d1]))
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
        let asset_out = asset_in.other();
        let net_in = self.fee.net_of_fee(amount_in)?;
        let new_balance_in = pool
            .balance_of(asset_in)
            .safe_add(&net_in, "exact-in reserve overflow")?;

        let d = self.invariant(pool.balances())?;
        let y = self.solver.compute_balance(
            asset_out,
            asset_in,
            new_balance_in.get(),
            pool.balances(),
            d.value(),
        )?;

        // A solve stopped at the iteration cap can leave y above the reserve.
        let amount_out = pool.balance_of(asset_out).safe_sub(
            &Amount::new(y.value()),
            "solved balance exceeds output reserve",
        )?;

        BalanceDelta::swap(asset_in, amount_in, amount_out, total_iterations(&[d, y]))
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
        let balance_out = pool.balance_of(asset_out);
        if amount_out >= balance_out {
            return Err(AmmError::InsufficientLiquidity);
        }
        let new_balance_out = balance_out.safe_sub(&amount_out, "exact-out remaining reserve")?;

        let d = self.invariant(pool.balances())?;
        let y = self.solver.compute_balance(
            asset_in,
            asset_out,
            new_balance_out.get(),
            pool.balances(),
            d.value(),
        )?;

        let net_in = Amount::new(y.value())
            .checked_sub(&pool.balance_of(asset_in))
            .ok_or(AmmError::InvalidQuantity("swap output too small to price"))?;
        let amount_in = self.fee.gross_up(net_in)?;

        BalanceDelta::swap(asset_in, amount_in, amount_out, total_iterations(&[d, y]))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::curves::AmplificationSchedule;
    use crate::domain::CurveKind;

    fn fee(n: u64, d: u64) -> FeeRate {
        let Ok(f) = FeeRate::new(n, d) else {
            panic!("valid fee");
        };
        f
    }

    fn pool(a: u128, b: u128, lp: u128, amp: u64) -> PoolState {
        let Ok(schedule) = AmplificationSchedule::constant(amp) else {
            panic!("valid amp");
        };
        let Ok(p) = PoolState::new(
            CurveKind::StableSwap {
                fee: fee(3, 1_000),
                amp: schedule,
            },
            Amount::new(a),
            Amount::new(b),
            Amount::new(lp),
            0,
        ) else {
            panic!("valid pool");
        };
        p
    }

    fn quoter(f: FeeRate, amp: u128) -> StableSwapQuoter {
        let Ok(q) = StableSwapQuoter::new(f, amp, QuoterConfig::default()) else {
            panic!("valid quoter");
        };
        q
    }

    // -- swaps ------------------------------------------------------------

    #[test]
    fn balanced_exact_in() {
        let q = quoter(fee(3, 1_000), 100);
        let Ok(d) = q.swap_exact_in_quote(
            &pool(1_000_000, 1_000_000, 2_000_000, 100),
            Asset::A,
            Amount::new(1_000),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!((d.delta_a(), d.delta_b(), d.delta_lp()), (1_000, -997, 0));
        // D: 1, y: 6
        assert_eq!(d.solver_iterations(), 7);
    }

    #[test]
    fn unbalanced_exact_in_both_directions() {
        let q = quoter(fee(4, 10_000), 50);
        let p = pool(1_000_000, 1_500_000, 1_000_000, 50);

        let Ok(a_in) = q.swap_exact_in_quote(&p, Asset::A, Amount::new(10_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(a_in.delta_b(), -10_039);
        assert_eq!(a_in.solver_iterations(), 7);

        let Ok(b_in) = q.swap_exact_in_quote(&p, Asset::B, Amount::new(5_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(b_in.delta_a(), -4_977);
        assert_eq!(b_in.solver_iterations(), 8);
    }

    #[test]
    fn balanced_exact_out() {
        let q = quoter(fee(3, 1_000), 100);
        let Ok(d) = q.swap_exact_out_quote(
            &pool(1_000_000, 1_000_000, 2_000_000, 100),
            Asset::B,
            Amount::new(996),
        ) else {
            panic!("expected Ok");
        };
        // y = 1_000_996, net 996, ceil(996 / 0.997) = 999
        assert_eq!((d.delta_a(), d.delta_b()), (999, -996));
        assert_eq!(d.solver_iterations(), 7);
    }

    #[test]
    fn capped_solver_still_quotes() {
        let Ok(cfg) = QuoterConfig::new(2, 1) else {
            panic!("valid config");
        };
        let Ok(q) = StableSwapQuoter::new(fee(3, 1_000), 100, cfg) else {
            panic!("valid quoter");
        };
        let Ok(d) = q.swap_exact_out_quote(
            &pool(1_000_000, 1_000_000, 2_000_000, 100),
            Asset::B,
            Amount::new(996),
        ) else {
            panic!("expected Ok");
        };
        // y stops at 1_067_070 after two iterations
        assert_eq!(d.delta_a(), 67_272);
        assert_eq!(d.solver_iterations(), 3);
    }

    #[test]
    fn capped_exact_in_overshoot_names_the_cause() {
        let Ok(cfg) = QuoterConfig::new(2, 1) else {
            panic!("valid config");
        };
        let Ok(q) = StableSwapQuoter::new(fee(3, 1_000), 100, cfg) else {
            panic!("valid quoter");
        };
        // y stops at 1_065_509 after two iterations, above the B reserve
        assert_eq!(
            q.swap_exact_in_quote(
                &pool(1_000_000, 1_000_000, 2_000_000, 100),
                Asset::A,
                Amount::new(1_000),
            ),
            Err(AmmError::Underflow("solved balance exceeds output reserve"))
        );
    }

    #[test]
    fn exact_out_draining_reserve_rejected() {
        let q = quoter(fee(3, 1_000), 100);
        assert_eq!(
            q.swap_exact_out_quote(&pool(1_000, 1_000, 1, 100), Asset::A, Amount::new(1_000)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn swaps_on_empty_pool() {
        let q = quoter(fee(3, 1_000), 100);
        assert_eq!(
            q.swap_exact_in_quote(&pool(0, 0, 0, 100), Asset::A, Amount::new(1)),
            Err(AmmError::EmptyPool)
        );
    }

    // -- liquidity --------------------------------------------------------

    #[test]
    fn balanced_deposit() {
        let q = quoter(fee(3, 1_000), 100);
        let Ok(d) = q.pool_quote(
            &pool(1_000_000, 1_000_000, 2_000_000, 100),
            Asset::A,
            Amount::new(1_000),
        ) else {
            panic!("expected Ok");
        };
        // D0 = 2_000_000, D1 = 2_002_000
        assert_eq!((d.delta_a(), d.delta_b(), d.delta_lp()), (1_000, 1_000, 2_000));
        assert_eq!(d.solver_iterations(), 2);
    }

    #[test]
    fn unbalanced_deposit() {
        let q = quoter(fee(3, 1_000), 100);
        let Ok(d) = q.pool_quote(
            &pool(1_000_000, 2_000_000, 1_400_000, 100),
            Asset::A,
            Amount::new(1_000),
        ) else {
            panic!("expected Ok");
        };
        // D0 = 2_999_068, D1 = 3_002_067
        assert_eq!((d.delta_a(), d.delta_b(), d.delta_lp()), (1_000, 2_000, 1_399));
        assert_eq!(d.solver_iterations(), 4);
    }

    #[test]
    fn first_deposit_uses_b_amount_twice() {
        let q = quoter(fee(3, 1_000), 100);
        let Ok(d) = q.empty_pool_quote(&pool(0, 0, 0, 100), Amount::new(100), Amount::new(400))
        else {
            panic!("expected Ok");
        };
        assert_eq!((d.delta_a(), d.delta_b(), d.delta_lp()), (100, 400, 800));
        assert_eq!(d.solver_iterations(), 1);
    }

    #[test]
    fn first_deposit_on_initialized_pool() {
        let q = quoter(fee(3, 1_000), 100);
        assert_eq!(
            q.empty_pool_quote(&pool(5, 5, 5, 100), Amount::new(1), Amount::new(1)),
            Err(AmmError::PoolNotEmpty)
        );
    }

    #[test]
    fn burn_matches_constant_product() {
        let q = quoter(fee(3, 1_000), 100);
        let Ok(d) = q.burn_quote(&pool(500, 800, 1_000, 100), Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!((d.delta_a(), d.delta_b(), d.delta_lp()), (-50, -80, -100));
        assert_eq!(d.solver_iterations(), 0);
    }

    #[test]
    fn zero_amp_rejected() {
        assert!(matches!(
            StableSwapQuoter::new(FeeRate::ZERO, 0, QuoterConfig::default()),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }
}
