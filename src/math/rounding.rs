//! Rounding helpers for integer division.
//!
//! [`div_round`] is the single division primitive used by the quoting
//! formulas and by [`Amount`](crate::domain::Amount).
//!
//! # Convention
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Amount paid out by the pool | [`Rounding::Down`] |
//! | LP units minted | [`Rounding::Down`] |
//! | Swap fee | [`Rounding::Up`] |
//! | Gross input grossed up from a net input | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use curve_quote::domain::Rounding;
//! use curve_quote::math::div_round;
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// Integer division of `u128` values with explicit rounding direction.
///
/// Ceiling division is computed as `(n + d - 1) / d` when that sum fits,
/// and as `floor(n / d) + (n % d != 0)` otherwise, so the result never
/// overflows.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    match rounding {
        Rounding::Down => Some(numerator / denominator),
        Rounding::Up => match numerator.checked_add(denominator - 1) {
            Some(adjusted) => Some(adjusted / denominator),
            None => {
                let q = numerator / denominator;
                if numerator % denominator != 0 {
                    Some(q + 1)
                } else {
                    Some(q)
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_by_zero_returns_none() {
        assert_eq!(div_round(100, 0, Rounding::Down), None);
        assert_eq!(div_round(0, 0, Rounding::Up), None);
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(100, 10, Rounding::Down), Some(10));
        assert_eq!(div_round(100, 10, Rounding::Up), Some(10));
    }

    #[test]
    fn ceiling_of_fee_product() {
        // 10_000 * 3 / 1000 = 30 exactly; 10_001 * 3 / 1000 = 30.003 → 31
        assert_eq!(div_round(30_000, 1_000, Rounding::Up), Some(30));
        assert_eq!(div_round(30_003, 1_000, Rounding::Up), Some(31));
    }

    #[test]
    fn ceiling_near_u128_max() {
        assert_eq!(div_round(u128::MAX, 1, Rounding::Up), Some(u128::MAX));
        assert_eq!(
            div_round(u128::MAX, 2, Rounding::Up),
            Some(u128::MAX / 2 + 1)
        );
    }
}
