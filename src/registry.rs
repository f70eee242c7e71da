//! Pool registry: one pool per unordered token pair.
//!
//! The registry is the factory of the engine. It canonicalizes every
//! pair through [`TokenPair`], keys pools by the canonical identity
//! tuple, and guarantees that a pair is registered at most once. Pools
//! are created empty and are never destroyed.

use std::collections::BTreeMap;

use crate::domain::{FeeTier, Token, TokenId, TokenPair};
use crate::error::ExchangeError;
use crate::pool::{Pool, PoolConfig};

/// Registry mapping canonical token pairs to their pools.
///
/// Lookup deliberately returns `Option` rather than a zero-address
/// sentinel: absence means "no pool", and the mutating entry points
/// return [`ExchangeError::PoolNotFound`] instead of operating on a
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolRegistry {
    fee_tier: FeeTier,
    pools: BTreeMap<(TokenId, TokenId), Pool>,
}

impl PoolRegistry {
    /// Creates an empty registry whose pools all use `fee_tier`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidFee`] if the fee is 100% or more.
    pub fn new(fee_tier: FeeTier) -> Result<Self, ExchangeError> {
        if fee_tier.basis_points().get() >= 10_000 {
            return Err(ExchangeError::InvalidFee("pool fee must be below 100%"));
        }
        Ok(Self {
            fee_tier,
            pools: BTreeMap::new(),
        })
    }

    /// Returns the fee tier applied to every pool in this registry.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Creates the pool for `(token_a, token_b)`.
    ///
    /// The pair is canonicalized first, so argument order does not
    /// matter. The new pool is empty; the first deposit sets its ratio.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidToken`] if both tokens share an identity.
    /// - [`ExchangeError::PoolExists`] if the pair is already registered.
    pub fn create_pool(
        &mut self,
        token_a: Token,
        token_b: Token,
    ) -> Result<&mut Pool, ExchangeError> {
        let pair = TokenPair::new(token_a, token_b)?;
        let key = pair.key();
        if self.pools.contains_key(&key) {
            return Err(ExchangeError::PoolExists);
        }
        let config = PoolConfig::new(pair, self.fee_tier)?;
        let pool = Pool::from_config(&config)?;
        Ok(self.pools.entry(key).or_insert(pool))
    }

    /// Looks up the pool for `(token_a, token_b)`, in either argument
    /// order.
    ///
    /// Returns `None` when the pair is unregistered or malformed; callers
    /// must branch to the pool-creation flow, never operate on a missing
    /// pool.
    #[must_use]
    pub fn get_pool(&self, token_a: &Token, token_b: &Token) -> Option<&Pool> {
        self.pools.get(&Self::key_of(token_a, token_b)?)
    }

    /// Looks up the pool for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::PoolNotFound`] when the pair is
    /// unregistered or malformed.
    pub fn pool_mut(
        &mut self,
        token_a: &Token,
        token_b: &Token,
    ) -> Result<&mut Pool, ExchangeError> {
        let key = Self::key_of(token_a, token_b).ok_or(ExchangeError::PoolNotFound)?;
        self.pools.get_mut(&key).ok_or(ExchangeError::PoolNotFound)
    }

    /// Iterates over all registered pools.
    pub fn pools(&self) -> impl Iterator<Item = &Pool> {
        self.pools.values()
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pool has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Canonical key for an unordered pair, `None` for identical tokens.
    fn key_of(token_a: &Token, token_b: &Token) -> Option<(TokenId, TokenId)> {
        let (a, b) = (token_a.id(), token_b.id());
        match a.cmp(&b) {
            core::cmp::Ordering::Less => Some((a, b)),
            core::cmp::Ordering::Greater => Some((b, a)),
            core::cmp::Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Decimals, TokenAddress};

    fn tok(addr_byte: u8) -> Token {
        let Ok(d) = Decimals::new(18) else {
            panic!("valid decimals");
        };
        Token::contract(TokenAddress::from_bytes([addr_byte; 32]), d)
    }

    fn native() -> Token {
        let Ok(d) = Decimals::new(18) else {
            panic!("valid decimals");
        };
        Token::native(d)
    }

    fn registry() -> PoolRegistry {
        let Ok(r) = PoolRegistry::new(FeeTier::TIER_0_30_PERCENT) else {
            panic!("valid fee");
        };
        r
    }

    #[test]
    fn create_and_lookup() {
        let mut reg = registry();
        let Ok(_) = reg.create_pool(tok(1), tok(2)) else {
            panic!("expected Ok");
        };
        assert!(reg.get_pool(&tok(1), &tok(2)).is_some());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn lookup_order_does_not_matter() {
        let mut reg = registry();
        let Ok(_) = reg.create_pool(tok(1), tok(2)) else {
            panic!("expected Ok");
        };
        assert!(reg.get_pool(&tok(2), &tok(1)).is_some());
    }

    #[test]
    fn duplicate_pair_rejected_in_either_order() {
        let mut reg = registry();
        let Ok(_) = reg.create_pool(tok(1), tok(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(reg.create_pool(tok(1), tok(2)), Err(ExchangeError::PoolExists));
        assert_eq!(reg.create_pool(tok(2), tok(1)), Err(ExchangeError::PoolExists));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn identical_tokens_rejected() {
        let mut reg = registry();
        assert_eq!(
            reg.create_pool(tok(1), tok(1)),
            Err(ExchangeError::InvalidToken("pair requires two distinct tokens"))
        );
    }

    #[test]
    fn missing_pool_is_none_and_not_found() {
        let mut reg = registry();
        assert!(reg.get_pool(&tok(1), &tok(2)).is_none());
        assert_eq!(
            reg.pool_mut(&tok(1), &tok(2)).err(),
            Some(ExchangeError::PoolNotFound)
        );
    }

    #[test]
    fn same_token_lookup_is_none() {
        let reg = registry();
        assert!(reg.get_pool(&tok(1), &tok(1)).is_none());
    }

    #[test]
    fn native_pairs_are_registerable() {
        let mut reg = registry();
        let Ok(pool) = reg.create_pool(tok(1), native()) else {
            panic!("expected Ok");
        };
        // Native sorts first in the canonical pair.
        assert_eq!(pool.token_pair().first(), native());
        assert!(reg.get_pool(&native(), &tok(1)).is_some());
    }

    #[test]
    fn excessive_fee_rejected_at_construction() {
        use crate::domain::BasisPoints;
        assert_eq!(
            PoolRegistry::new(FeeTier::new(BasisPoints::MAX_PERCENT)).err(),
            Some(ExchangeError::InvalidFee("pool fee must be below 100%"))
        );
    }

    #[test]
    fn pools_iterator_covers_all() {
        let mut reg = registry();
        let Ok(_) = reg.create_pool(tok(1), tok(2)) else {
            panic!("expected Ok");
        };
        let Ok(_) = reg.create_pool(tok(2), tok(3)) else {
            panic!("expected Ok");
        };
        assert_eq!(reg.pools().count(), 2);
        assert!(!reg.is_empty());
    }
}
