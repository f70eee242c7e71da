//! Token decimal places (a caller-side formatting concern).

use crate::error::ExchangeError;

/// Maximum allowed decimal places (EVM convention).
const MAX_DECIMALS: u8 = 18;

/// The number of decimal places a token's human-readable unit carries.
///
/// The engine itself computes on raw smallest-unit amounts and never
/// interprets decimals; this type exists so callers can convert between
/// display units and raw units at the boundary. Valid range is `0..=18`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.scale_up(5), 5_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum standard decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, ExchangeError> {
        if value > MAX_DECIMALS {
            return Err(ExchangeError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Converts a human-readable amount to the smallest raw unit.
    ///
    /// Cannot overflow: `u64::MAX * 10^18 < u128::MAX`.
    #[must_use]
    pub const fn scale_up(&self, amount: u64) -> u128 {
        (amount as u128) * self.factor()
    }

    /// Converts raw units back to a human-readable amount, truncating any
    /// fractional part.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Overflow`] if the result does not fit in
    /// `u64`.
    pub const fn scale_down(&self, raw: u128) -> Result<u64, ExchangeError> {
        let result = raw / self.factor();
        if result > u64::MAX as u128 {
            return Err(ExchangeError::Overflow("scaled amount exceeds u64"));
        }
        Ok(result as u64)
    }

    /// Returns `10^decimals`.
    #[must_use]
    const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}
