//! Integer arithmetic for the quoting engine.
//!
//! Everything here is exact `u128` arithmetic with explicit rounding; no
//! floating point takes part in a quote.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`div_round`] | Division with explicit [`Rounding`](crate::domain::Rounding) |
//! | [`CheckedArithmetic`] | `Result`-returning arithmetic on [`Amount`](crate::domain::Amount) |
//! | [`isqrt`] | Exact integer square root |
//! | [`StableSwapSolver`] | Newton-Raphson solvers for `D` and `y` |

mod checked;
mod isqrt;
mod rounding;
mod stable_swap;

pub use checked::CheckedArithmetic;
pub use isqrt::isqrt;
pub use rounding::div_round;
pub use stable_swap::{Solution, StableSwapSolver};
