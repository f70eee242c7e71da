//! Token identity types.

use core::fmt;

use super::{Decimals, TokenAddress};

/// What kind of asset a token is: the chain's native coin or a contract
/// token.
///
/// The distinction is resolved once, when a token enters the engine
/// (pool creation, ledger funding) — never re-derived per call. `Native`
/// orders before every contract address, so canonical pair ordering is
/// total across both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenId {
    /// The chain's native coin.
    Native,
    /// A contract-deployed token at the given address.
    Contract(TokenAddress),
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Contract(addr) => write!(f, "{addr}"),
        }
    }
}

/// The full identity of a token: what it is plus its declared decimal
/// count.
///
/// Two tokens are equal only if both identity and decimals match; the
/// pool registry keys pools by [`TokenId`] alone, so a pair cannot be
/// registered twice under conflicting decimal claims.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Decimals, Token, TokenAddress};
///
/// let usdc = Token::contract(
///     TokenAddress::from_bytes([1u8; 32]),
///     Decimals::new(6).expect("valid"),
/// );
/// let coin = Token::native(Decimals::new(18).expect("valid"));
/// assert!(coin.is_native());
/// assert!(!usdc.is_native());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    id: TokenId,
    decimals: Decimals,
}

impl Token {
    /// Creates the native-coin token with the given decimal count.
    #[must_use]
    pub const fn native(decimals: Decimals) -> Self {
        Self {
            id: TokenId::Native,
            decimals,
        }
    }

    /// Creates a contract token at `address` with the given decimal count.
    #[must_use]
    pub const fn contract(address: TokenAddress, decimals: Decimals) -> Self {
        Self {
            id: TokenId::Contract(address),
            decimals,
        }
    }

    /// Returns the token identity.
    #[must_use]
    pub const fn id(&self) -> TokenId {
        self.id
    }

    /// Returns the declared decimal count.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns `true` if this is the native coin.
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self.id, TokenId::Native)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
