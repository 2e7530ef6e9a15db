//! Quoter configuration.
//!
//! Pool-specific parameters (fee rate, amplification ramp) travel with
//! each [`PoolState`](crate::domain::PoolState) snapshot. What lives here
//! is process-wide: the Newton-Raphson budget and tolerance.

mod quoter_config;

pub use quoter_config::{QuoterConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, N_COINS};
