//! Swap fee tiers built on [`BasisPoints`].

use core::fmt;

use super::{Amount, BasisPoints, Rounding};

/// The proportional fee a pool takes from every swap input.
///
/// Wraps [`BasisPoints`] with the well-known presets used across major
/// AMM deployments. Any basis-point value below 100% is accepted by the
/// pool configuration; the presets are conveniences, not a closed set.
///
/// # Examples
///
/// ```
/// use pairswap::domain::FeeTier;
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(tier.basis_points().get(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.05% fee — stable pairs (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee — standard volatile pairs (30 bp). The engine default.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee — exotic pairs (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Computes the fee taken from `amount` at this tier.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Overflow`](crate::error::ExchangeError::Overflow)
    /// if the intermediate multiplication overflows.
    pub const fn apply_to_amount(
        &self,
        amount: Amount,
        rounding: Rounding,
    ) -> crate::error::Result<Amount> {
        self.0.apply(amount, rounding)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
