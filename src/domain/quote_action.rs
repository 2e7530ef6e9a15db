//! Actions a caller can ask the quoter to price.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Asset, SwapSpec};
use crate::error::AmmError;

/// Descriptor for the kind of action, used in logs and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActionKind {
    /// Proportional deposit into a pool with issued LP units.
    AddLiquidity = 0,
    /// First deposit into a pool with no LP units.
    AddLiquidityEmpty = 1,
    /// Proportional withdrawal by burning LP units.
    RemoveLiquidity = 2,
    /// Fixed input, quoted output.
    SwapExactIn = 3,
    /// Fixed output, quoted input.
    SwapExactOut = 4,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AddLiquidity => "add_liquidity",
            Self::AddLiquidityEmpty => "add_liquidity_empty",
            Self::RemoveLiquidity => "remove_liquidity",
            Self::SwapExactIn => "swap_exact_in",
            Self::SwapExactOut => "swap_exact_out",
        };
        f.write_str(name)
    }
}

/// A request to price one pool interaction.
///
/// Constructors reject zero amounts so every quote describes a real
/// transfer.
///
/// # Examples
///
/// ```
/// use curve_quote::domain::{ActionKind, Amount, Asset, QuoteAction};
///
/// let action = QuoteAction::swap_exact_out(Asset::B, Amount::new(500)).expect("non-zero");
/// assert_eq!(action.kind(), ActionKind::SwapExactOut);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteAction {
    /// Deposit `amount` of `asset`; the other side is derived from the
    /// current reserve ratio.
    AddLiquidity {
        /// Asset whose amount is fixed by the caller.
        asset: Asset,
        /// Amount of `asset` to deposit.
        amount: Amount,
    },
    /// Seed an empty pool with both assets.
    AddLiquidityEmpty {
        /// Amount of asset A to deposit.
        amount_a: Amount,
        /// Amount of asset B to deposit.
        amount_b: Amount,
    },
    /// Burn `lp_amount` LP units for a proportional share of reserves.
    RemoveLiquidity {
        /// LP units to burn.
        lp_amount: Amount,
    },
    /// Sell `asset_in` for the other asset.
    Swap {
        /// Asset sent to the pool.
        asset_in: Asset,
        /// Exact-in or exact-out constraint.
        spec: SwapSpec,
    },
}

impl QuoteAction {
    /// Creates an [`AddLiquidity`](Self::AddLiquidity) action.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `amount` is zero.
    pub const fn add_liquidity(asset: Asset, amount: Amount) -> crate::error::Result<Self> {
        if amount.is_zero() {
            return Err(AmmError::InvalidQuantity("deposit amount must be non-zero"));
        }
        Ok(Self::AddLiquidity { asset, amount })
    }

    /// Creates an [`AddLiquidityEmpty`](Self::AddLiquidityEmpty) action.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if either amount is zero.
    pub const fn add_liquidity_empty(
        amount_a: Amount,
        amount_b: Amount,
    ) -> crate::error::Result<Self> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InvalidQuantity(
                "first deposit requires both assets",
            ));
        }
        Ok(Self::AddLiquidityEmpty { amount_a, amount_b })
    }

    /// Creates a [`RemoveLiquidity`](Self::RemoveLiquidity) action.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `lp_amount` is zero.
    pub const fn remove_liquidity(lp_amount: Amount) -> crate::error::Result<Self> {
        if lp_amount.is_zero() {
            return Err(AmmError::InvalidQuantity("burn amount must be non-zero"));
        }
        Ok(Self::RemoveLiquidity { lp_amount })
    }

    /// Creates an exact-in swap selling `asset_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `amount_in` is zero.
    pub const fn swap_exact_in(asset_in: Asset, amount_in: Amount) -> crate::error::Result<Self> {
        match SwapSpec::exact_in(amount_in) {
            Ok(spec) => Ok(Self::Swap { asset_in, spec }),
            Err(e) => Err(e),
        }
    }

    /// Creates an exact-out swap buying `amount_out` of `asset_out`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `amount_out` is zero.
    pub const fn swap_exact_out(
        asset_out: Asset,
        amount_out: Amount,
    ) -> crate::error::Result<Self> {
        match SwapSpec::exact_out(amount_out) {
            Ok(spec) => Ok(Self::Swap {
                asset_in: asset_out.other(),
                spec,
            }),
            Err(e) => Err(e),
        }
    }

    /// Returns the [`ActionKind`] descriptor for this action.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::AddLiquidity { .. } => ActionKind::AddLiquidity,
            Self::AddLiquidityEmpty { .. } => ActionKind::AddLiquidityEmpty,
            Self::RemoveLiquidity { .. } => ActionKind::RemoveLiquidity,
            Self::Swap { spec, .. } => match spec {
                SwapSpec::ExactIn { .. } => ActionKind::SwapExactIn,
                SwapSpec::ExactOut { .. } => ActionKind::SwapExactOut,
            },
        }
    }

    /// Returns `true` for either swap kind.
    #[must_use]
    pub const fn is_swap(&self) -> bool {
        matches!(self, Self::Swap { .. })
    }
}
