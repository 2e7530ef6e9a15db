//! Bonding-curve family of a pool.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::FeeRate;
use crate::curves::AmplificationSchedule;

/// The bonding curve a pool prices trades with, and its parameters.
///
/// Every quoting path matches on this exhaustively, so adding a curve
/// family is a compile error everywhere a branch is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveKind {
    /// `x · y = k`.
    ConstantProduct {
        /// Swap fee charged on the input side.
        fee: FeeRate,
    },
    /// Two-asset StableSwap invariant with a ramped amplification factor.
    StableSwap {
        /// Swap fee charged on the input side.
        fee: FeeRate,
        /// Amplification ramp.
        amp: AmplificationSchedule,
    },
}

impl CurveKind {
    /// Swap fee of this curve.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        match self {
            Self::ConstantProduct { fee } | Self::StableSwap { fee, .. } => *fee,
        }
    }

    /// Checks the fee and, for StableSwap, the amplification ramp.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`](crate::error::AmmError::InvalidFee) for an
    ///   invalid fee.
    /// - [`AmmError::InvalidConfiguration`](crate::error::AmmError::InvalidConfiguration)
    ///   for an invalid ramp.
    pub const fn validate(&self) -> crate::error::Result<()> {
        match self {
            Self::ConstantProduct { fee } => fee.validate(),
            Self::StableSwap { fee, amp } => match fee.validate() {
                Ok(()) => amp.validate(),
                Err(e) => Err(e),
            },
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantProduct { .. } => f.write_str("constant_product"),
            Self::StableSwap { .. } => f.write_str("stable_swap"),
        }
    }
}
