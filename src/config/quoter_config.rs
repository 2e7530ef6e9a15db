//! Solver configuration for the quoting engine.

use serde::{Deserialize, Serialize};

use crate::error::AmmError;

/// Number of assets in every invariant this crate solves.
pub const N_COINS: u128 = 2;

/// Default Newton-Raphson iteration cap, matching the on-chain budget.
pub const DEFAULT_MAX_ITERATIONS: u32 = 255;

/// Default convergence tolerance in raw units.
pub const DEFAULT_TOLERANCE: u64 = 1;

/// Tunables shared by every quote a [`BondingCurveQuoter`] computes.
///
/// Both knobs only affect the StableSwap solvers; constant-product quotes
/// are closed-form.
///
/// # Loading
///
/// Missing fields fall back to their defaults, so an empty document is a
/// valid configuration:
///
/// ```
/// use curve_quote::config::QuoterConfig;
///
/// let cfg = QuoterConfig::from_toml_str("max_iterations = 64").expect("valid");
/// assert_eq!(cfg.max_iterations(), 64);
/// assert_eq!(cfg.tolerance(), 1);
/// ```
///
/// [`BondingCurveQuoter`]: crate::quoter::BondingCurveQuoter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoterConfig {
    max_iterations: u32,
    tolerance: u64,
}

impl Default for QuoterConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl QuoterConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if either value is zero.
    pub fn new(max_iterations: u32, tolerance: u64) -> Result<Self, AmmError> {
        let config = Self {
            max_iterations,
            tolerance,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the document does not parse
    ///   or a value is out of range.
    pub fn from_toml_str(source: &str) -> Result<Self, AmmError> {
        let config: Self = toml::from_str(source).map_err(|err| {
            tracing::warn!(error = %err, "rejecting quoter config");
            AmmError::InvalidConfiguration("quoter config is not valid TOML")
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `max_iterations` is zero.
    /// - [`AmmError::InvalidConfiguration`] if `tolerance` is zero.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.max_iterations == 0 {
            return Err(AmmError::InvalidConfiguration(
                "max_iterations must be at least one",
            ));
        }
        if self.tolerance == 0 {
            return Err(AmmError::InvalidConfiguration(
                "tolerance must be at least one unit",
            ));
        }
        Ok(())
    }

    /// Maximum Newton-Raphson iterations per solve.
    #[must_use]
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Largest accepted difference between consecutive iterates.
    #[must_use]
    pub const fn tolerance(&self) -> u128 {
        self.tolerance as u128
    }
}
