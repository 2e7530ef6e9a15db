//! Single entry point for pricing any action on any pool.

use crate::config::QuoterConfig;
use crate::domain::{Amount, Asset, BalanceDelta, FlashLoanQuote, PoolState, QuoteAction, SwapSpec};
use crate::error::AmmError;
use crate::traits::CurveQuoter;

use super::CurveBox;

/// Dispatches quote requests to the right bonding curve.
///
/// The quoter holds only configuration. Every call is a pure function of
/// the snapshot and action passed in, so one instance can serve any
/// number of threads and pools concurrently.
///
/// # Examples
///
/// ```
/// use curve_quote::domain::{Amount, Asset, CurveKind, FeeRate, PoolState, QuoteAction};
/// use curve_quote::quoter::BondingCurveQuoter;
///
/// let pool = PoolState::new(
///     CurveKind::ConstantProduct { fee: FeeRate::new(3, 1_000).expect("valid") },
///     Amount::new(1_000_000),
///     Amount::new(2_000_000),
///     Amount::new(1_000_000),
///     0,
/// )
/// .expect("valid");
///
/// let quoter = BondingCurveQuoter::default();
/// let action = QuoteAction::swap_exact_in(Asset::A, Amount::new(10_000)).expect("non-zero");
/// let delta = quoter.quote(&pool, action).expect("quotable");
/// assert_eq!(delta.amount_out(), Some((Asset::B, Amount::new(19_743))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BondingCurveQuoter {
    config: QuoterConfig,
}

impl BondingCurveQuoter {
    /// Creates a quoter with the given solver configuration.
    #[must_use]
    pub const fn new(config: QuoterConfig) -> Self {
        Self { config }
    }

    /// Creates a quoter from a TOML solver configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the document does not
    /// parse or a value is out of range.
    pub fn from_toml_str(source: &str) -> Result<Self, AmmError> {
        QuoterConfig::from_toml_str(source).map(Self::new)
    }

    /// Solver configuration.
    #[must_use]
    pub const fn config(&self) -> QuoterConfig {
        self.config
    }

    /// Prices `action` against `pool`.
    ///
    /// The snapshot is validated first; for StableSwap pools the
    /// amplification factor is then resolved at `pool.as_of_time()`.
    ///
    /// # Errors
    ///
    /// - Any invariant violation reported by [`PoolState::validate`].
    /// - [`AmmError::InvalidConfiguration`] for an unusable solver config
    ///   or amplification ramp.
    /// - The domain errors of the matching [`CurveQuoter`] method.
    pub fn quote(&self, pool: &PoolState, action: QuoteAction) -> Result<BalanceDelta, AmmError> {
        self.config.validate()?;
        pool.validate()?;
        let curve = CurveBox::for_pool(pool, self.config)?;

        let result = match action {
            QuoteAction::AddLiquidityEmpty { amount_a, amount_b } => {
                curve.empty_pool_quote(pool, amount_a, amount_b)
            }
            QuoteAction::AddLiquidity { asset, amount } => curve.pool_quote(pool, asset, amount),
            QuoteAction::RemoveLiquidity { lp_amount } => curve.burn_quote(pool, lp_amount),
            QuoteAction::Swap {
                asset_in,
                spec: SwapSpec::ExactIn { amount_in },
            } => curve.swap_exact_in_quote(pool, asset_in, amount_in),
            QuoteAction::Swap {
                asset_in,
                spec: SwapSpec::ExactOut { amount_out },
            } => curve.swap_exact_out_quote(pool, asset_in.other(), amount_out),
        };

        match &result {
            Ok(delta) => tracing::debug!(
                curve = %pool.curve(),
                action = %action.kind(),
                %delta,
                "quoted"
            ),
            Err(err) => tracing::debug!(
                curve = %pool.curve(),
                action = %action.kind(),
                error = %err,
                "quote rejected"
            ),
        }
        result
    }

    /// Prices a flash loan of `amount` of `asset` from `pool`.
    ///
    /// # Errors
    ///
    /// - Any invariant violation reported by [`PoolState::validate`].
    /// - [`AmmError::InvalidConfiguration`] if the pool carries no
    ///   flash-loan fee.
    /// - [`AmmError::InvalidQuantity`] if `amount` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if `amount` exceeds the
    ///   reserve of `asset`.
    pub fn flash_loan_quote(
        &self,
        pool: &PoolState,
        asset: Asset,
        amount: Amount,
    ) -> Result<FlashLoanQuote, AmmError> {
        pool.validate()?;
        let rate = pool.flash_loan_fee().ok_or(AmmError::InvalidConfiguration(
            "pool does not offer flash loans",
        ))?;
        if amount > pool.balance_of(asset) {
            return Err(AmmError::InsufficientLiquidity);
        }
        let quote = FlashLoanQuote::new(asset, amount, rate)?;
        tracing::debug!(%asset, %amount, repayment = %quote.repayment(), "flash loan quoted");
        Ok(quote)
    }
}
