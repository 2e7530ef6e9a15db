//! # Curve Quote
//!
//! Deterministic client-side quoting for two-asset AMM pools.
//!
//! Given a snapshot of a pool's reserves, LP supply and curve parameters,
//! this crate computes the exact integer outcome the on-chain program
//! would produce for a swap, deposit or withdrawal. A caller uses the
//! result to decide whether to submit a transaction and with which
//! slippage bounds.
//!
//! Two bonding-curve families are supported:
//!
//! - **Constant Product** (`x · y = k`), closed form
//! - **StableSwap** (two-asset Curve invariant), Newton-Raphson with a
//!   time-ramped amplification factor
//!
//! Fetching pool state, building transactions and signing them are left
//! to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use curve_quote::prelude::*;
//!
//! // 1. Snapshot a StableSwap pool at unix time 1_500, halfway through an
//! //    amplification ramp from 100 to 200
//! let fee = FeeRate::new(3, 1_000).expect("valid fee");
//! let amp = AmplificationSchedule::new(100, 200, 1_000, 2_000).expect("valid ramp");
//! let pool = PoolState::new(
//!     CurveKind::StableSwap { fee, amp },
//!     Amount::new(1_000_000),
//!     Amount::new(1_000_000),
//!     Amount::new(2_000_000),
//!     1_500,
//! )
//! .expect("valid snapshot");
//!
//! // 2. Quote selling 1 000 units of asset A
//! let quoter = BondingCurveQuoter::default();
//! let action = QuoteAction::swap_exact_in(Asset::A, Amount::new(1_000)).expect("non-zero");
//! let delta = quoter.quote(&pool, action).expect("quotable");
//!
//! // 3. Bound the transaction with 0.5% slippage
//! let (_, out) = delta.amount_out().expect("swap pays out");
//! let min_out = Slippage::from_basis_points(50).expect("valid").min_output(out).expect("fits");
//! assert!(min_out < out);
//! assert!(delta.solver_iterations() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐
//! │      Caller        │  PoolState snapshot + QuoteAction
//! └─────────┬──────────┘
//!           │ quote(&pool, action)
//!           ▼
//! ┌────────────────────┐
//! │ BondingCurveQuoter │  validates snapshot, resolves CurveBox
//! └─────────┬──────────┘
//!           │ CurveBox (enum dispatch)
//!           ▼
//! ┌────────────────────┐
//! │      Curves        │  ConstantProductQuoter, StableSwapQuoter
//! └─────────┬──────────┘
//!           │ CurveQuoter trait
//!           ▼
//! ┌────────────────────┐
//! │   Math + Domain    │  StableSwapSolver, isqrt, Amount, FeeRate, …
//! └────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`PoolState`](domain::PoolState), [`BalanceDelta`](domain::BalanceDelta), [`FeeRate`](domain::FeeRate), etc. |
//! | [`traits`] | [`CurveQuoter`](traits::CurveQuoter), the per-curve quoting contract |
//! | [`curves`] | Constant-product and StableSwap quoters, [`AmplificationSchedule`](curves::AmplificationSchedule) |
//! | [`quoter`] | [`BondingCurveQuoter`](quoter::BondingCurveQuoter) entry point and [`CurveBox`](quoter::CurveBox) dispatch |
//! | [`math`]   | Checked integer arithmetic and the Newton-Raphson solvers |
//! | [`config`] | [`QuoterConfig`](config::QuoterConfig), loadable from TOML |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber:
//! `debug` per quote, `trace` per solver result, and `warn` when a solver
//! hits its iteration cap.

pub mod config;
pub mod curves;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod quoter;
pub mod traits;
