//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use curve_quote::prelude::*;
//! ```

pub use crate::domain::{
    ActionKind, Amount, Asset, BalanceDelta, CurveKind, FeeRate, FlashLoanQuote, PoolState, Price,
    QuoteAction, Rounding, Slippage, SwapSpec,
};

pub use crate::traits::CurveQuoter;

pub use crate::curves::{AmplificationSchedule, ConstantProductQuoter, StableSwapQuoter};

pub use crate::math::{CheckedArithmetic, StableSwapSolver};

pub use crate::config::QuoterConfig;

pub use crate::quoter::{BondingCurveQuoter, CurveBox};

pub use crate::error::{AmmError, Result};
