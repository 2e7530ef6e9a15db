//! Side of a two-asset pool.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the two pooled assets.
///
/// Asset identity (chain ids, decimals, names) is the chain-state
/// provider's concern; the quoting engine only needs to know which
/// reserve an amount refers to.
///
/// # Examples
///
/// ```
/// use curve_quote::domain::Asset;
///
/// assert_eq!(Asset::A.other(), Asset::B);
/// assert_eq!(Asset::B.index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// The first asset of the pair (lower asset id on chain).
    A,
    /// The second asset of the pair.
    B,
}

impl Asset {
    /// Both assets in balance-array order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Returns the opposite side of the pair.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Position of this asset in a `[balance_a, balance_b]` array.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "asset A"),
            Self::B => write!(f, "asset B"),
        }
    }
}
