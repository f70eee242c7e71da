//! Pool configuration.

use crate::domain::{FeeTier, TokenPair};
use crate::error::ExchangeError;

/// The immutable parameters of a constant-product pool: its token pair
/// and swap fee.
///
/// Pools are created empty — the first liquidity deposit sets the
/// reserve ratio — so the configuration carries no initial reserves.
///
/// # Validation
///
/// - The fee must be below 100% (a full fee would leave no net input for
///   the pricing formula).
/// - The token pair is validated at [`TokenPair`] construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    token_pair: TokenPair,
    fee_tier: FeeTier,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidFee`] if the fee is 100% or more.
    pub fn new(token_pair: TokenPair, fee_tier: FeeTier) -> Result<Self, ExchangeError> {
        let config = Self {
            token_pair,
            fee_tier,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidFee`] if the fee is 100% or more.
    pub fn validate(&self) -> Result<(), ExchangeError> {
        if self.fee_tier.basis_points().get() >= 10_000 {
            return Err(ExchangeError::InvalidFee("pool fee must be below 100%"));
        }
        Ok(())
    }

    /// Returns the token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}
