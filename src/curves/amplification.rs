//! Time-ramped amplification factor for StableSwap pools.
//!
//! Pool operators retune curve flatness by scheduling a linear ramp from
//! `initial_amp_factor` at `initial_amp_time` to `future_amp_factor` at
//! `future_amp_time`. The effective factor at any instant is the floor of
//! the linear interpolation, computed in integers so the result matches
//! the on-chain program exactly.

use serde::{Deserialize, Serialize};

use crate::error::AmmError;

/// Linear amplification ramp.
///
/// A pool that is not ramping carries a schedule whose `future_amp_time`
/// is in the past, or [`AmplificationSchedule::constant`].
///
/// # Examples
///
/// ```
/// use curve_quote::curves::AmplificationSchedule;
///
/// let ramp = AmplificationSchedule::new(100, 200, 1_000, 2_000).expect("valid");
/// assert_eq!(ramp.amp_at(1_500), Ok(150));
/// assert_eq!(ramp.amp_at(9_999), Ok(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmplificationSchedule {
    initial_amp_factor: u64,
    future_amp_factor: u64,
    initial_amp_time: u64,
    future_amp_time: u64,
}

impl AmplificationSchedule {
    /// Creates a validated ramp.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `future_amp_time`
    /// precedes `initial_amp_time` or `future_amp_factor` is zero.
    pub fn new(
        initial_amp_factor: u64,
        future_amp_factor: u64,
        initial_amp_time: u64,
        future_amp_time: u64,
    ) -> crate::error::Result<Self> {
        let schedule = Self {
            initial_amp_factor,
            future_amp_factor,
            initial_amp_time,
            future_amp_time,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// A schedule that is always `amp`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `amp` is zero.
    pub fn constant(amp: u64) -> crate::error::Result<Self> {
        Self::new(amp, amp, 0, 0)
    }

    /// Checks the schedule invariants. Needed after deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if an invariant does not
    /// hold.
    pub const fn validate(&self) -> crate::error::Result<()> {
        if self.future_amp_time < self.initial_amp_time {
            return Err(AmmError::InvalidConfiguration(
                "amp ramp ends before it starts",
            ));
        }
        if self.future_amp_factor == 0 {
            return Err(AmmError::InvalidConfiguration(
                "amplification factor must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Amplification factor at the start of the ramp.
    #[must_use]
    pub const fn initial_amp_factor(&self) -> u64 {
        self.initial_amp_factor
    }

    /// Amplification factor once the ramp completes.
    #[must_use]
    pub const fn future_amp_factor(&self) -> u64 {
        self.future_amp_factor
    }

    /// Unix timestamp at which the ramp starts.
    #[must_use]
    pub const fn initial_amp_time(&self) -> u64 {
        self.initial_amp_time
    }

    /// Unix timestamp at which the ramp completes.
    #[must_use]
    pub const fn future_amp_time(&self) -> u64 {
        self.future_amp_time
    }

    /// Returns `true` while `as_of` falls before the end of the ramp.
    #[must_use]
    pub const fn is_ramping(&self, as_of: u64) -> bool {
        as_of < self.future_amp_time
    }

    /// Effective amplification factor at `as_of`.
    ///
    /// Once the ramp has completed this is `future_amp_factor`. During the
    /// ramp it is
    ///
    /// ```text
    /// floor(initial + (future − initial) · (as_of − t₀) / (t₁ − t₀))
    /// ```
    ///
    /// where the floor is taken on the signed quotient, so a downward ramp
    /// rounds away from `initial`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the ramp is active and ends
    ///   before it starts or has zero duration, or `as_of` precedes
    ///   `initial_amp_time`.
    /// - [`AmmError::Overflow`] if the interpolation overflows.
    pub fn amp_at(&self, as_of: u64) -> crate::error::Result<u128> {
        let future = u128::from(self.future_amp_factor);
        if !self.is_ramping(as_of) {
            return Ok(future);
        }

        let duration = self
            .future_amp_time
            .checked_sub(self.initial_amp_time)
            .ok_or(AmmError::InvalidConfiguration(
                "amp ramp ends before it starts",
            ))?;
        if duration == 0 {
            return Err(AmmError::InvalidConfiguration(
                "amp ramp has zero duration",
            ));
        }
        let elapsed = as_of
            .checked_sub(self.initial_amp_time)
            .ok_or(AmmError::InvalidConfiguration(
                "quote time precedes the amp ramp",
            ))?;

        let initial = u128::from(self.initial_amp_factor);
        let duration = u128::from(duration);
        let elapsed = u128::from(elapsed);

        if future >= initial {
            let step = (future - initial)
                .checked_mul(elapsed)
                .ok_or(AmmError::Overflow("amp ramp overflow"))?
                / duration;
            initial
                .checked_add(step)
                .ok_or(AmmError::Overflow("amp ramp overflow"))
        } else {
            let step = (initial - future)
                .checked_mul(elapsed)
                .ok_or(AmmError::Overflow("amp ramp overflow"))?
                .div_ceil(duration);
            initial
                .checked_sub(step)
                .ok_or(AmmError::Underflow("amp ramp underflow"))
        }
    }
}
