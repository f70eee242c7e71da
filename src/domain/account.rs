//! Account identity for owners, recipients, and spenders.

use core::fmt;

/// A chain-agnostic account address.
///
/// Identifies liquidity-position owners, swap recipients, and allowance
/// spenders. Like [`TokenAddress`](super::TokenAddress) it wraps a raw
/// 32-byte array with infallible construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
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

impl fmt::Display for AccountId {
    /// Abbreviated hex form: first three and last two bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x}{:02x}{:02x}..{:02x}{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[30], self.0[31]
        )
    }
}
