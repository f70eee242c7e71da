//! Chain-agnostic contract address.

use core::fmt;

/// A chain-agnostic contract address identifying a token.
///
/// Wraps a fixed-size `[u8; 32]` byte array; shorter native address
/// formats are left-padded by the caller. All byte sequences are valid,
/// so construction is infallible.
///
/// # Examples
///
/// ```
/// use pairswap::domain::TokenAddress;
///
/// let addr = TokenAddress::from_bytes([1u8; 32]);
/// assert_eq!(addr.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for TokenAddress {
    /// Abbreviated hex form: first three and last two bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x}{:02x}{:02x}..{:02x}{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[30], self.0[31]
        )
    }
}
