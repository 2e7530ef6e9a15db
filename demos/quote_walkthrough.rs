//! Quote walkthrough for both curve families.
//!
//! Prices a constant-product pool through a full lifecycle, then shows how
//! a StableSwap quote moves while the amplification factor ramps.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=curve_quote=debug cargo run --example quote_walkthrough
//! ```

use curve_quote::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let quoter = BondingCurveQuoter::default();

    println!("=== Constant product ===\n");

    // ── 1. Seed an empty pool ───────────────────────────────────────────
    let pool = PoolState::new(
        CurveKind::ConstantProduct {
            fee: FeeRate::TIER_0_30_PERCENT,
        },
        Amount::ZERO,
        Amount::ZERO,
        Amount::ZERO,
        0,
    )?;
    let seed = QuoteAction::add_liquidity_empty(Amount::new(1_000_000), Amount::new(4_000_000))?;
    let delta = quoter.quote(&pool, seed)?;
    println!("Seed deposit:   {delta}");
    let pool = pool.apply(&delta)?;
    println!("  Price of A:   {}", pool.price_of(Asset::A)?);

    // ── 2. Sell asset A and bound the trade ─────────────────────────────
    let sell = QuoteAction::swap_exact_in(Asset::A, Amount::new(10_000))?;
    let delta = quoter.quote(&pool, sell)?;
    println!("\nSell 10000 A:   {delta}");
    if let Some((asset, out)) = delta.amount_out() {
        let tolerance = Slippage::from_basis_points(50)?;
        println!("  Receive:      {out} of {asset}");
        println!("  Min output:   {} at {tolerance}", tolerance.min_output(out)?);
    }
    let pool = pool.apply(&delta)?;

    // ── 3. Buy a fixed amount back ──────────────────────────────────────
    let buy = QuoteAction::swap_exact_out(Asset::A, Amount::new(5_000))?;
    let delta = quoter.quote(&pool, buy)?;
    println!("\nBuy 5000 A:     {delta}");

    // ── 4. Withdraw a tenth of the LP supply ────────────────────────────
    let burn = QuoteAction::remove_liquidity(Amount::new(200_000))?;
    let delta = quoter.quote(&pool, burn)?;
    println!("\nBurn 200000 LP: {delta}");

    // ── 5. Flash loan on the same snapshot ──────────────────────────────
    let pool = pool.with_flash_loan_fee(FeeRate::from_parameter_scale(1_000)?)?;
    let loan = quoter.flash_loan_quote(&pool, Asset::B, Amount::new(100_000))?;
    println!("\nFlash loan:     {loan}");

    println!("\n=== StableSwap ===\n");

    // ── 6. Same trade at several points of an amplification ramp ───────
    let amp = AmplificationSchedule::new(10, 1_000, 1_000, 2_000)?;
    let pool = PoolState::new(
        CurveKind::StableSwap {
            fee: FeeRate::new(4, 10_000)?,
            amp,
        },
        Amount::new(1_000_000),
        Amount::new(1_500_000),
        Amount::new(2_500_000),
        1_000,
    )?;
    let sell = QuoteAction::swap_exact_in(Asset::A, Amount::new(10_000))?;
    for t in [1_000, 1_250, 1_500, 2_000] {
        let snapshot = pool.at_time(t);
        let delta = quoter.quote(&snapshot, sell)?;
        println!("t={t:>5} amp={:>4}: {delta}", amp.amp_at(t)?);
    }

    // ── 7. Proportional deposit on the unbalanced pool ──────────────────
    let deposit = QuoteAction::add_liquidity(Asset::B, Amount::new(15_000))?;
    let delta = quoter.quote(&pool.at_time(2_000), deposit)?;
    println!("\nDeposit 15000 B: {delta}");

    Ok(())
}
