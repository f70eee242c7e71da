//! Convenience re-exports for common types.
//!
//! A single import brings the frequently used domain types, the error
//! type, and the engine entry points into scope:
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, BasisPoints, Deadline, Decimals, FeeTier, Rounding, Shares, SwapFill,
    SwapRequest, Timestamp, Token, TokenAddress, TokenId, TokenPair,
};

pub use crate::error::{ExchangeError, Result};

pub use crate::exchange::Exchange;
pub use crate::ledger::TokenLedger;
pub use crate::pool::{LiquidityReceipt, Pool, PoolConfig};
pub use crate::pricing::{get_amount_in, get_amount_out};
pub use crate::registry::PoolRegistry;
