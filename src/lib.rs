//! # pairswap
//!
//! Constant-product token exchange engine: per-pair reserve pools,
//! liquidity shares, slippage- and deadline-bounded swaps, and a pool
//! registry, behind an ABI-shaped exchange facade.
//!
//! The engine is the on-chain half of a classic factory/exchange token
//! swap deployment, expressed as a plain `&mut self` state machine: the
//! host ledger totally orders operations, so there is no interior
//! mutability and no threading — every operation either commits in full
//! or fails with no state change.
//!
//! # Quick Start
//!
//! ```rust
//! use pairswap::domain::{
//!     AccountId, Amount, Deadline, Decimals, FeeTier, Timestamp, Token, TokenAddress,
//! };
//! use pairswap::exchange::Exchange;
//!
//! // 1. Two tokens and the participants.
//! let usdc = Token::contract(
//!     TokenAddress::from_bytes([1u8; 32]),
//!     Decimals::new(6).expect("valid decimals"),
//! );
//! let weth = Token::contract(
//!     TokenAddress::from_bytes([2u8; 32]),
//!     Decimals::new(18).expect("valid decimals"),
//! );
//! let alice = AccountId::from_bytes([0xA1; 32]);
//!
//! // 2. An exchange at the standard 0.30% fee, with a registered pool.
//! let mut exchange = Exchange::new(
//!     AccountId::from_bytes([0xEE; 32]),
//!     FeeTier::TIER_0_30_PERCENT,
//! )
//! .expect("valid fee");
//! exchange.create_pool(usdc, weth).expect("pool created");
//!
//! // 3. Fund the depositor and approve the exchange.
//! let spender = exchange.id();
//! let ledger = exchange.ledger_mut();
//! ledger.mint(usdc.id(), alice, Amount::new(1_000_000)).expect("mint");
//! ledger.mint(weth.id(), alice, Amount::new(4_000_000)).expect("mint");
//! ledger.approve(usdc.id(), alice, spender, Amount::new(1_000_000));
//! ledger.approve(weth.id(), alice, spender, Amount::new(4_000_000));
//!
//! // 4. First deposit: shares are the geometric mean of the amounts.
//! let now = Timestamp::new(1_700_000_000);
//! let deadline = Deadline::new(now.plus_secs(1_200));
//! let receipt = exchange
//!     .add_liquidity(
//!         alice,
//!         usdc,
//!         weth,
//!         Amount::new(1_000_000),
//!         Amount::new(4_000_000),
//!         Amount::ZERO,
//!         Amount::ZERO,
//!         alice,
//!         deadline,
//!         now,
//!     )
//!     .expect("liquidity added");
//! assert_eq!(receipt.shares().get(), 2_000_000);
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Token`](domain::Token), [`Deadline`](domain::Deadline), … |
//! | [`pricing`] | Pure constant-product quoting: [`get_amount_out`](pricing::get_amount_out), [`get_amount_in`](pricing::get_amount_in) |
//! | [`pool`] | [`Pool`](pool::Pool): reserve ledger, liquidity manager, swap executor |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry): one pool per unordered pair |
//! | [`ledger`] | [`TokenLedger`](ledger::TokenLedger): balances and allowances |
//! | [`exchange`] | [`Exchange`](exchange::Exchange): the ABI-shaped facade |
//! | [`math`] | Integer square root |
//! | [`error`] | [`ExchangeError`](error::ExchangeError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod domain;
pub mod error;
pub mod exchange;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod pricing;
pub mod registry;
