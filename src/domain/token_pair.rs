//! Canonically ordered pair of distinct tokens.

use core::fmt;

use super::{Token, TokenId};
use crate::error::ExchangeError;

/// An unordered token pair stored in canonical order.
///
/// The canonical ordering sorts by [`TokenId`] (native coin first, then
/// contract addresses lexicographically), so `(A, B)` and `(B, A)` build
/// the same pair. The registry relies on this to guarantee at most one
/// pool per unordered pair.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Decimals, Token, TokenAddress, TokenPair};
///
/// let a = Token::contract(TokenAddress::from_bytes([1u8; 32]), Decimals::new(6).expect("valid"));
/// let b = Token::contract(TokenAddress::from_bytes([2u8; 32]), Decimals::new(18).expect("valid"));
///
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
/// assert_eq!(pair.first(), a);
/// assert_eq!(pair.second(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    token_a: Token,
    token_b: Token,
}

impl TokenPair {
    /// Creates a new canonically ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidToken`] if both tokens have the
    /// same identity.
    pub fn new(token1: Token, token2: Token) -> Result<Self, ExchangeError> {
        if token1.id() == token2.id() {
            return Err(ExchangeError::InvalidToken(
                "pair requires two distinct tokens",
            ));
        }
        let (token_a, token_b) = if token1.id() < token2.id() {
            (token1, token2)
        } else {
            (token2, token1)
        };
        Ok(Self { token_a, token_b })
    }

    /// Returns the first token in canonical order.
    #[must_use]
    pub const fn first(&self) -> Token {
        self.token_a
    }

    /// Returns the second token in canonical order.
    #[must_use]
    pub const fn second(&self) -> Token {
        self.token_b
    }

    /// Returns the canonical `(first, second)` identity key used by the
    /// registry.
    #[must_use]
    pub const fn key(&self) -> (TokenId, TokenId) {
        (self.token_a.id(), self.token_b.id())
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidToken`] if `token` is not in the
    /// pair.
    pub fn other(&self, token: &Token) -> Result<Token, ExchangeError> {
        if *token == self.token_a {
            Ok(self.token_b)
        } else if *token == self.token_b {
            Ok(self.token_a)
        } else {
            Err(ExchangeError::InvalidToken("token is not part of this pair"))
        }
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token_a, self.token_b)
    }
}
