//! Value types shared by every quoting path.
//!
//! Amounts are raw `u128` units, fee rates are exact fractions, and
//! constructors validate their invariants so downstream math can rely on
//! them. [`PoolState`] is the input snapshot and [`BalanceDelta`] the
//! uniform output of every quote.

mod amount;
mod asset;
mod balance_delta;
mod curve_kind;
mod fee_rate;
mod flash_loan;
mod pool_state;
mod price;
mod quote_action;
mod rounding;
mod slippage;
mod swap_spec;

pub use amount::Amount;
pub use asset::Asset;
pub use balance_delta::BalanceDelta;
pub use curve_kind::CurveKind;
pub use fee_rate::{FeeRate, PARAMETER_SCALE};
pub use flash_loan::FlashLoanQuote;
pub use pool_state::PoolState;
pub use price::Price;
pub use quote_action::{ActionKind, QuoteAction};
pub use rounding::Rounding;
pub use slippage::Slippage;
pub use swap_spec::SwapSpec;
