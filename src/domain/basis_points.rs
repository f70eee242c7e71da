//! Basis-point representation for proportional fees.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::ExchangeError;

/// Denominator representing 100%.
const MAX_BPS: u32 = 10_000;

/// A proportion expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Construction accepts any `u32`; [`is_valid_percent`](Self::is_valid_percent)
/// reports whether the value is a meaningful percentage. The pool
/// configuration rejects fee values at or above 100% before a pool is
/// ever built.
///
/// # Examples
///
/// ```
/// use pairswap::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.get(), 30);
/// assert_eq!(bp.complement(), Some(9_970));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range
    /// (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Returns `10_000 − self`, the proportion that remains after this
    /// share is taken, or `None` when the value exceeds 100%.
    ///
    /// The pricing formula multiplies inputs by the complement of the fee.
    #[must_use]
    pub const fn complement(&self) -> Option<u32> {
        MAX_BPS.checked_sub(self.0)
    }

    /// Computes `amount * (self / 10_000)` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Overflow`] if the intermediate
    /// multiplication overflows.
    pub const fn apply(
        &self,
        amount: Amount,
        rounding: Rounding,
    ) -> crate::error::Result<Amount> {
        let product = match amount.checked_mul(&Amount::new(self.0 as u128)) {
            Some(v) => v,
            None => return Err(ExchangeError::Overflow("basis points apply overflow")),
        };
        // Divisor is the constant 10_000, never zero.
        match product.checked_div(&Amount::new(MAX_BPS as u128), rounding) {
            Some(v) => Ok(v),
            None => Err(ExchangeError::DivisionByZero),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(BasisPoints::ZERO.get(), 0);
        assert_eq!(BasisPoints::MAX_PERCENT.get(), 10_000);
        assert_eq!(BasisPoints::default(), BasisPoints::ZERO);
    }

    #[test]
    fn valid_percent_range() {
        assert!(BasisPoints::new(30).is_valid_percent());
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn complement_of_standard_fee() {
        assert_eq!(BasisPoints::new(30).complement(), Some(9_970));
        assert_eq!(BasisPoints::ZERO.complement(), Some(10_000));
        assert_eq!(BasisPoints::MAX_PERCENT.complement(), Some(0));
        assert_eq!(BasisPoints::new(10_001).complement(), None);
    }

    #[test]
    fn apply_round_down() {
        // 30 bp of 1_000_000 = 3_000 exactly
        let Ok(fee) = BasisPoints::new(30).apply(Amount::new(1_000_000), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Amount::new(3_000));
    }

    #[test]
    fn apply_rounding_on_remainder() {
        // 30 bp of 1 = 0.003
        let bp = BasisPoints::new(30);
        let Ok(down) = bp.apply(Amount::new(1), Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(up) = bp.apply(Amount::new(1), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(down, Amount::ZERO);
        assert_eq!(up, Amount::new(1));
    }

    #[test]
    fn apply_full_percent() {
        let Ok(all) = BasisPoints::MAX_PERCENT.apply(Amount::new(1_234), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(all, Amount::new(1_234));
    }

    #[test]
    fn apply_overflow() {
        let result = BasisPoints::new(u32::MAX).apply(Amount::MAX, Rounding::Down);
        assert_eq!(result, Err(ExchangeError::Overflow("basis points apply overflow")));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(30)), "30bp");
    }
}
