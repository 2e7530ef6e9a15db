//! Trait abstractions implemented by each bonding curve.

mod curve_quoter;

pub use curve_quoter::CurveQuoter;
