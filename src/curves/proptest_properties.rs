//! Property-based tests for the curve quoters.
//!
//! 1. **Deposit round trip**: depositing then burning the minted LP units
//!    never returns more than was deposited.
//! 2. **Exact-out consistency**: re-quoting an exact-in output as exact-out
//!    never asks for more than the original input, and feeding that input
//!    back in never yields more than the original output.
//! 3. **Invariant monotonicity**: raising one balance never lowers `D`.
//! 4. **Ramp endpoints**: the amplification schedule hits both endpoints
//!    exactly and stays between them.
//! 5. **Swap reversibility**: a StableSwap round trip A→B→A loses value.

use proptest::prelude::*;

use super::{AmplificationSchedule, ConstantProductQuoter, StableSwapQuoter};
use crate::config::QuoterConfig;
use crate::domain::{Amount, Asset, CurveKind, FeeRate, PoolState};
use crate::math::StableSwapSolver;
use crate::traits::CurveQuoter;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn fee_30bp() -> FeeRate {
    FeeRate::TIER_0_30_PERCENT
}

fn make_cp(ra: u128, rb: u128, lp: u128) -> PoolState {
    let Ok(pool) = PoolState::new(
        CurveKind::ConstantProduct { fee: fee_30bp() },
        Amount::new(ra),
        Amount::new(rb),
        Amount::new(lp),
        0,
    ) else {
        panic!("valid CP pool");
    };
    pool
}

fn make_stable(ra: u128, rb: u128, amp: u64) -> PoolState {
    let Ok(schedule) = AmplificationSchedule::constant(amp) else {
        panic!("valid amp");
    };
    let Ok(pool) = PoolState::new(
        CurveKind::StableSwap {
            fee: fee_30bp(),
            amp: schedule,
        },
        Amount::new(ra),
        Amount::new(rb),
        Amount::new(ra + rb),
        0,
    ) else {
        panic!("valid stable pool");
    };
    pool
}

fn stable_quoter(amp: u64) -> StableSwapQuoter {
    let Ok(q) = StableSwapQuoter::new(fee_30bp(), u128::from(amp), QuoterConfig::default()) else {
        panic!("valid stable quoter");
    };
    q
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000_000u128
}

/// Amplification values in [1, 5_000].
fn amplification_strategy() -> impl Strategy<Value = u64> {
    1u64..=5_000u64
}

fn asset_strategy() -> impl Strategy<Value = Asset> {
    prop_oneof![Just(Asset::A), Just(Asset::B)]
}

// ---------------------------------------------------------------------------
// Property 1: Deposit round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_deposit_then_burn_returns_at_most_deposit(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        lp in reserve_strategy(),
        asset in asset_strategy(),
        divisor in 1u128..=10_000u128,
    ) {
        let pool = make_cp(ra, rb, lp);
        let quoter = ConstantProductQuoter::new(fee_30bp());
        let amount = (pool.balance_of(asset).get() / divisor).max(1);

        let Ok(deposit) = quoter.pool_quote(&pool, asset, Amount::new(amount)) else {
            return Ok(());
        };
        let Ok(after) = pool.apply(&deposit) else {
            return Ok(());
        };
        let minted = Amount::new(deposit.delta_lp().unsigned_abs());
        let Ok(burn) = quoter.burn_quote(&after, minted) else {
            return Ok(());
        };

        prop_assert!(burn.delta_a().unsigned_abs() <= deposit.delta_a().unsigned_abs());
        prop_assert!(burn.delta_b().unsigned_abs() <= deposit.delta_b().unsigned_abs());
        prop_assert_eq!(burn.delta_lp(), -deposit.delta_lp());
    }
}

// ---------------------------------------------------------------------------
// Property 2: Exact-out consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_exact_out_never_exceeds_exact_in(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        asset_in in asset_strategy(),
        divisor in 1u128..=100_000u128,
    ) {
        let pool = make_cp(ra, rb, 1);
        let quoter = ConstantProductQuoter::new(fee_30bp());
        let amount_in = (pool.balance_of(asset_in).get() / divisor).max(1);

        let Ok(forward) = quoter.swap_exact_in_quote(&pool, asset_in, Amount::new(amount_in)) else {
            return Ok(());
        };
        let Some((asset_out, amount_out)) = forward.amount_out() else {
            return Ok(());
        };
        let Ok(inverse) = quoter.swap_exact_out_quote(&pool, asset_out, amount_out) else {
            return Ok(());
        };
        let Some((_, required_in)) = inverse.amount_in() else {
            return Ok(());
        };

        prop_assert!(
            required_in.get() <= amount_in,
            "exact-out asked {} for an output bought with {}",
            required_in, amount_in
        );

        let Ok(replay) = quoter.swap_exact_in_quote(&pool, asset_in, required_in) else {
            return Ok(());
        };
        let Some((_, replay_out)) = replay.amount_out() else {
            return Ok(());
        };
        prop_assert!(replay_out <= amount_out);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Invariant monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_invariant_monotonic_in_each_balance(
        x in 1u128..=1_000_000_000_000u128,
        y in 1u128..=1_000_000_000_000u128,
        bump in 1u128..=1_000_000_000u128,
        amp in amplification_strategy(),
        asset in asset_strategy(),
    ) {
        let Ok(solver) = StableSwapSolver::new(u128::from(amp), QuoterConfig::default()) else {
            panic!("valid solver");
        };
        let before = [x, y];
        let mut after = before;
        after[asset.index()] += bump;

        let Ok(d0) = solver.compute_invariant(before) else {
            return Ok(());
        };
        let Ok(d1) = solver.compute_invariant(after) else {
            return Ok(());
        };
        prop_assert!(
            d1.value() >= d0.value(),
            "D fell from {} to {} after raising {}",
            d0.value(), d1.value(), asset
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: Ramp endpoints
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_ramp_hits_endpoints(
        initial in 1u64..=10_000u64,
        future in 1u64..=10_000u64,
        t0 in 0u64..=2_000_000_000u64,
        duration in 1u64..=1_000_000u64,
        offset in 0u64..=1_000_000u64,
    ) {
        let Ok(ramp) = AmplificationSchedule::new(initial, future, t0, t0 + duration) else {
            panic!("valid ramp");
        };
        prop_assert_eq!(ramp.amp_at(t0), Ok(u128::from(initial)));
        prop_assert_eq!(ramp.amp_at(t0 + duration + offset), Ok(u128::from(future)));

        let mid = t0 + offset.min(duration);
        let Ok(amp) = ramp.amp_at(mid) else {
            panic!("amp defined inside the ramp");
        };
        let (lo, hi) = (initial.min(future), initial.max(future));
        prop_assert!(amp >= u128::from(lo) && amp <= u128::from(hi));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Swap reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility_stable(
        reserve in 10_000u128..=10_000_000u128,
        amp in 1u64..=500u64,
    ) {
        let swap_in = (reserve / 1_000).max(1);
        let pool = make_stable(reserve, reserve, amp);
        let quoter = stable_quoter(amp);

        let Ok(ab) = quoter.swap_exact_in_quote(&pool, Asset::A, Amount::new(swap_in)) else {
            return Ok(());
        };
        let Some((_, received_b)) = ab.amount_out() else {
            return Ok(());
        };
        let Ok(after) = pool.apply(&ab) else {
            return Ok(());
        };
        let Ok(ba) = quoter.swap_exact_in_quote(&after, Asset::B, received_b) else {
            return Ok(());
        };
        let Some((_, final_a)) = ba.amount_out() else {
            return Ok(());
        };

        prop_assert!(
            final_a.get() <= swap_in,
            "stable round-trip should lose value: final={} > original={}",
            final_a, swap_in
        );
    }
}
