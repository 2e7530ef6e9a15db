//! Dispatch from a pool snapshot and action to the matching curve.
//!
//! [`BondingCurveQuoter`] is the crate's entry point. It validates the
//! snapshot, resolves a [`CurveBox`] for the pool's curve at the
//! snapshot time, and routes each [`QuoteAction`](crate::domain::QuoteAction)
//! variant to the corresponding [`CurveQuoter`](crate::traits::CurveQuoter)
//! method.

mod bonding_curve;
mod curve_box;

pub use bonding_curve::BondingCurveQuoter;
pub use curve_box::CurveBox;
