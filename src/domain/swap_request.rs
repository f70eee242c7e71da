//! Swap operation descriptor.

use core::fmt;

use super::{AccountId, Amount, Deadline, Token};
use crate::error::ExchangeError;

/// A caller's request to swap an exact input for a bounded output.
///
/// Ephemeral — built per call, never persisted. Validation happens at
/// construction: the input amount is non-zero and the two tokens are
/// distinct. The output bound and deadline are enforced by the swap
/// executor at execution time, against live reserves and the live clock.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{
///     AccountId, Amount, Deadline, Decimals, SwapRequest, Timestamp, Token, TokenAddress,
/// };
///
/// let a = Token::contract(TokenAddress::from_bytes([1u8; 32]), Decimals::new(6).expect("valid"));
/// let b = Token::contract(TokenAddress::from_bytes([2u8; 32]), Decimals::new(18).expect("valid"));
/// let request = SwapRequest::new(
///     a,
///     b,
///     Amount::new(1_000),
///     Amount::ZERO,
///     AccountId::from_bytes([9u8; 32]),
///     Deadline::new(Timestamp::new(1_700_000_000)),
/// );
/// assert!(request.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRequest {
    token_in: Token,
    token_out: Token,
    amount_in: Amount,
    amount_out_min: Amount,
    recipient: AccountId,
    deadline: Deadline,
}

impl SwapRequest {
    /// Creates a validated swap request.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidQuantity`] if `amount_in` is zero.
    /// - [`ExchangeError::InvalidToken`] if both tokens share an identity.
    pub fn new(
        token_in: Token,
        token_out: Token,
        amount_in: Amount,
        amount_out_min: Amount,
        recipient: AccountId,
        deadline: Deadline,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(ExchangeError::InvalidQuantity("swap input must be non-zero"));
        }
        if token_in.id() == token_out.id() {
            return Err(ExchangeError::InvalidToken(
                "swap requires two distinct tokens",
            ));
        }
        Ok(Self {
            token_in,
            token_out,
            amount_in,
            amount_out_min,
            recipient,
            deadline,
        })
    }

    /// Returns the token being sold.
    #[must_use]
    pub const fn token_in(&self) -> Token {
        self.token_in
    }

    /// Returns the token being bought.
    #[must_use]
    pub const fn token_out(&self) -> Token {
        self.token_out
    }

    /// Returns the exact input amount.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the caller's minimum acceptable output.
    #[must_use]
    pub const fn amount_out_min(&self) -> Amount {
        self.amount_out_min
    }

    /// Returns the account credited with the output.
    #[must_use]
    pub const fn recipient(&self) -> AccountId {
        self.recipient
    }

    /// Returns the execution deadline.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }
}

impl fmt::Display for SwapRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap {} {} -> {} (min {})",
            self.amount_in, self.token_in, self.token_out, self.amount_out_min
        )
    }
}
