//! Integer square root.

/// Returns `floor(sqrt(n))` using Newton's method on integers.
///
/// Exact for every `u128`, unlike a round trip through `f64`.
///
/// # Examples
///
/// ```
/// use curve_quote::math::isqrt;
///
/// assert_eq!(isqrt(40_000), 200);
/// assert_eq!(isqrt(99), 9);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
