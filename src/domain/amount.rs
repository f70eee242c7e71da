//! Raw token amount with checked arithmetic.

use core::fmt;

use super::Rounding;

/// A raw token amount in the smallest unit of its token.
///
/// `Amount` never interprets decimal places — that responsibility lies
/// with the caller (see [`Decimals`](super::Decimals)). All `u128` values
/// are valid amounts.
///
/// Arithmetic is checked: operations return `None` on overflow, underflow,
/// or division by zero instead of panicking, and every division names its
/// rounding direction explicitly.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Rounding};
///
/// let a = Amount::new(300);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_sub(&b), Some(Amount::new(100)));
/// assert_eq!(
///     a.checked_mul_div(&b, &Amount::new(7), Rounding::Down),
///     Some(Amount::new(8571)),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with an explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        let q = self.0 / divisor.0;
        match rounding {
            Rounding::Down => Some(Self(q)),
            Rounding::Up => {
                if self.0 % divisor.0 != 0 {
                    // q < u128::MAX here: a non-zero remainder means
                    // self < u128::MAX or divisor > 1, either way q + 1 fits.
                    Some(Self(q + 1))
                } else {
                    Some(Self(q))
                }
            }
        }
    }

    /// Computes `self * mul / div` in one step with explicit rounding.
    ///
    /// Returns `None` if the intermediate product overflows or `div` is
    /// zero. The proportional formulas in the pool (share minting, payout
    /// splitting) all funnel through this.
    #[must_use]
    pub const fn checked_mul_div(&self, mul: &Self, div: &Self, rounding: Rounding) -> Option<Self> {
        match self.checked_mul(mul) {
            Some(product) => product.checked_div(div, rounding),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
