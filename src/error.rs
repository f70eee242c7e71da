//! Unified error types for the exchange engine.
//!
//! All fallible operations across the crate return [`ExchangeError`] as
//! their error type. Every failure is terminal and atomic: the operation
//! that produced it made no state change, and retries (with fresh
//! parameters such as a new deadline) are the caller's responsibility.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, ExchangeError>;

/// Error taxonomy for every public operation of the engine.
///
/// The payload of string-carrying variants names the specific check that
/// failed; equality compares the payload too, so tests can assert on the
/// exact failure site.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeError {
    /// An output or accepted contribution fell below the caller's stated
    /// minimum.
    #[error("slippage exceeded: {0}")]
    SlippageExceeded(&'static str),

    /// The operation was submitted after its deadline passed.
    #[error("deadline expired")]
    DeadlineExpired,

    /// Reserves cannot satisfy the operation: a reserve is zero, an
    /// input or output is zero, or a swap would drain a reserve.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A share burn exceeds the owner's position.
    #[error("insufficient liquidity shares")]
    InsufficientShares,

    /// A pool already exists for this unordered token pair.
    #[error("pool already exists for this pair")]
    PoolExists,

    /// No pool is registered for this unordered token pair.
    #[error("no pool registered for this pair")]
    PoolNotFound,

    /// A ledger debit exceeds the account's balance.
    #[error("insufficient token balance")]
    InsufficientBalance,

    /// A delegated transfer exceeds the approved allowance.
    #[error("insufficient spending allowance")]
    InsufficientAllowance,

    /// A token argument is malformed or not part of the pool's pair.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A quantity argument violates a domain invariant.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A fee parameter is outside the supported range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A swap path is malformed.
    #[error("invalid path: {0}")]
    InvalidPath(&'static str),

    /// A decimal count is outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// An intermediate computation exceeded the 128-bit range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
}
