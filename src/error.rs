//! Unified error types for the quoting engine.
//!
//! All fallible operations across the crate return `AmmError` as their
//! error type. Each domain violation has its own variant so a caller can
//! tell "pool is empty" apart from "burn exceeds supply" without parsing
//! strings.
//!
//! Solver non-convergence is deliberately absent: a Newton-Raphson solve
//! that hits its iteration cap still yields a usable value and reports the
//! cap through `BalanceDelta::solver_iterations`.

use thiserror::Error;

/// Errors produced while validating pool snapshots or computing quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A configuration parameter is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A fee rate is malformed (zero denominator or rate ≥ 100%).
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A requested quantity is zero or otherwise unusable.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// The supplied pool snapshot violates a structural invariant.
    #[error("invalid pool state: {0}")]
    InvalidPoolState(&'static str),

    /// The action requires issued LP units but the pool has none.
    #[error("pool is empty")]
    EmptyPool,

    /// The empty-pool deposit was requested on a pool that already has LP units.
    #[error("pool is not empty")]
    PoolNotEmpty,

    /// The burn amount exceeds the LP units in circulation.
    #[error("cannot burn more than in circulation")]
    BurnExceedsSupply,

    /// The pool cannot pay out the requested amount.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A reserve required as a divisor is zero.
    #[error("zero reserve")]
    ZeroReserve,

    /// Integer division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Integer overflow in an intermediate product or sum.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Integer underflow in an intermediate difference.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A price ratio is not finite or is negative.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
