//! Fundamental domain value types used throughout the exchange engine.
//!
//! Every quantity the engine touches is wrapped in a newtype with a
//! validated constructor: raw token amounts, liquidity shares, fee tiers,
//! deadlines, account and token identities. Arithmetic on these types is
//! checked and rounding is always explicit.

mod account;
mod amount;
mod basis_points;
mod deadline;
mod decimals;
mod fee_tier;
mod rounding;
mod shares;
mod swap_fill;
mod swap_request;
mod token;
mod token_address;
mod token_pair;

pub use account::AccountId;
pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use deadline::{Deadline, Timestamp};
pub use decimals::Decimals;
pub use fee_tier::FeeTier;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_fill::SwapFill;
pub use swap_request::SwapRequest;
pub use token::{Token, TokenId};
pub use token_address::TokenAddress;
pub use token_pair::TokenPair;
