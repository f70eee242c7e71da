//! Constant-product pool: reserve ledger, liquidity manager, and swap
//! executor for one token pair.
//!
//! The swap invariant is `x · y = k` where `x` and `y` are the two
//! reserves. Fees are taken from the input, so `k` never decreases
//! across a swap.
//!
//! # Swap algorithm (token A → token B)
//!
//! 1. `net = amount_in × (10 000 − fee_bps)` (scaled, no early division)
//! 2. `amount_out = ⌊ net × reserve_b / (reserve_a × 10 000 + net) ⌋`
//! 3. require `amount_out ≥ amount_out_min` and `amount_out < reserve_b`
//! 4. `reserve_a += amount_in; reserve_b −= amount_out`
//!
//! # Atomicity
//!
//! Every mutating operation is structured as validate-then-commit: all
//! fallible checks and arithmetic run first, field writes happen last.
//! An error therefore implies the pool is unchanged.
//!
//! # Share accounting invariant
//!
//! The sum of all position balances equals `total_shares` at all times.
//! Shares only come into existence through [`Pool::add_liquidity`] and
//! only leave through [`Pool::remove_liquidity`].

mod config;

#[cfg(test)]
mod proptest_properties;

pub use config::PoolConfig;

use std::collections::BTreeMap;

use crate::domain::{
    AccountId, Amount, Deadline, FeeTier, Rounding, Shares, SwapFill, Timestamp, Token, TokenPair,
};
use crate::error::ExchangeError;
use crate::math::isqrt;
use crate::pricing;

/// Amounts accepted and shares minted by a liquidity deposit.
///
/// `amount_a`/`amount_b` follow the pool's canonical token order and may
/// be less than the desired amounts when the pool clamps the deposit to
/// its current reserve ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityReceipt {
    amount_a: Amount,
    amount_b: Amount,
    shares: Shares,
}

impl LiquidityReceipt {
    /// Builds a receipt. Crate-internal: the exchange facade reorients
    /// receipts into the caller's argument order.
    pub(crate) const fn new(amount_a: Amount, amount_b: Amount, shares: Shares) -> Self {
        Self {
            amount_a,
            amount_b,
            shares,
        }
    }

    /// Returns the accepted amount of the pair's first token.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the accepted amount of the pair's second token.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the liquidity shares minted for the deposit.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }
}

/// A constant-product pool for one canonical token pair.
///
/// Holds the two reserves, the outstanding share supply, and the
/// per-owner positions. Created empty via [`Pool::from_config`]; the
/// first deposit initializes the reserve ratio and mints
/// `⌊√(amount_a · amount_b)⌋` shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    token_pair: TokenPair,
    fee_tier: FeeTier,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    positions: BTreeMap<AccountId, Shares>,
    collected_fees_a: Amount,
    collected_fees_b: Amount,
}

impl Pool {
    /// Creates an empty pool from the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn from_config(config: &PoolConfig) -> Result<Self, ExchangeError> {
        config.validate()?;
        Ok(Self {
            token_pair: *config.token_pair(),
            fee_tier: config.fee_tier(),
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_shares: Shares::ZERO,
            positions: BTreeMap::new(),
            collected_fees_a: Amount::ZERO,
            collected_fees_b: Amount::ZERO,
        })
    }

    /// Returns the pool's canonical token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the pool's fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the current reserves in canonical token order.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Returns the outstanding liquidity-share supply.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns the shares held by `owner` (zero if no position exists).
    #[must_use]
    pub fn shares_of(&self, owner: &AccountId) -> Shares {
        self.positions.get(owner).copied().unwrap_or(Shares::ZERO)
    }

    /// Returns the lifetime fee counters in canonical token order.
    #[must_use]
    pub const fn collected_fees(&self) -> (Amount, Amount) {
        (self.collected_fees_a, self.collected_fees_b)
    }

    /// Returns `true` once the pool has received its first deposit.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        !self.total_shares.is_zero()
    }

    /// Resolves `token_in` to `(reserve_in, reserve_out, a_to_b)`.
    fn oriented_reserves(&self, token_in: &Token) -> Result<(Amount, Amount, bool), ExchangeError> {
        if !self.token_pair.contains(token_in) {
            return Err(ExchangeError::InvalidToken(
                "token is not part of the pool pair",
            ));
        }
        if *token_in == self.token_pair.first() {
            Ok((self.reserve_a, self.reserve_b, true))
        } else {
            Ok((self.reserve_b, self.reserve_a, false))
        }
    }

    /// Quotes a swap against current reserves without executing it.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidToken`] if `token_in` is not in the pair.
    /// - Any error from [`pricing::get_amount_out`].
    pub fn quote_swap(&self, token_in: &Token, amount_in: Amount) -> Result<Amount, ExchangeError> {
        let (reserve_in, reserve_out, _) = self.oriented_reserves(token_in)?;
        pricing::get_amount_out(amount_in, reserve_in, reserve_out, self.fee_tier)
    }

    /// Executes a swap: sells `amount_in` of `token_in` for the pair's
    /// other token.
    ///
    /// All checks run before any state change; reserves and the fee
    /// counter update together.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::DeadlineExpired`] if `now` is past `deadline`.
    /// - [`ExchangeError::InvalidToken`] if `token_in` is not in the pair.
    /// - [`ExchangeError::SlippageExceeded`] if the output is below
    ///   `amount_out_min`.
    /// - [`ExchangeError::InsufficientLiquidity`] if reserves cannot
    ///   satisfy the swap or the swap would drain a reserve.
    /// - [`ExchangeError::Overflow`] if any arithmetic overflows.
    pub fn swap(
        &mut self,
        token_in: Token,
        amount_in: Amount,
        amount_out_min: Amount,
        now: Timestamp,
        deadline: Deadline,
    ) -> Result<SwapFill, ExchangeError> {
        deadline.ensure_not_expired(now)?;
        let (reserve_in, reserve_out, a_to_b) = self.oriented_reserves(&token_in)?;

        let amount_out = pricing::get_amount_out(amount_in, reserve_in, reserve_out, self.fee_tier)?;
        if amount_out < amount_out_min {
            return Err(ExchangeError::SlippageExceeded(
                "swap output below caller minimum",
            ));
        }
        // A reserve may never be drained to zero: the next quote against
        // this pool would have nothing to price.
        if amount_out >= reserve_out {
            return Err(ExchangeError::InsufficientLiquidity);
        }

        let new_reserve_in = reserve_in
            .checked_add(&amount_in)
            .ok_or(ExchangeError::Overflow("reserve overflow after swap"))?;
        let new_reserve_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(ExchangeError::Overflow("reserve underflow after swap"))?;
        let fee = self.fee_tier.apply_to_amount(amount_in, Rounding::Up)?;
        let fill = SwapFill::new(amount_in, amount_out, fee)?;

        if a_to_b {
            let fees = self
                .collected_fees_a
                .checked_add(&fee)
                .ok_or(ExchangeError::Overflow("fee counter overflow"))?;
            self.reserve_a = new_reserve_in;
            self.reserve_b = new_reserve_out;
            self.collected_fees_a = fees;
        } else {
            let fees = self
                .collected_fees_b
                .checked_add(&fee)
                .ok_or(ExchangeError::Overflow("fee counter overflow"))?;
            self.reserve_b = new_reserve_in;
            self.reserve_a = new_reserve_out;
            self.collected_fees_b = fees;
        }
        Ok(fill)
    }

    /// Quotes a deposit against current reserves without executing it.
    ///
    /// For the first deposit the desired amounts are accepted as-is and
    /// shares are `⌊√(amount_a · amount_b)⌋`. Otherwise the deposit is
    /// clamped to the current reserve ratio and shares are the lesser of
    /// the two proportional mint ratios.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidQuantity`] if a required amount is zero
    ///   or the deposit is too small to mint a share.
    /// - [`ExchangeError::SlippageExceeded`] if an accepted amount falls
    ///   below its minimum.
    /// - [`ExchangeError::Overflow`] if any arithmetic overflows.
    pub fn quote_deposit(
        &self,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        amount_a_min: Amount,
        amount_b_min: Amount,
    ) -> Result<LiquidityReceipt, ExchangeError> {
        let (amount_a, amount_b, minted) = if self.total_shares.is_zero() {
            if amount_a_desired.is_zero() || amount_b_desired.is_zero() {
                return Err(ExchangeError::InvalidQuantity(
                    "first deposit requires both tokens",
                ));
            }
            let product = amount_a_desired
                .checked_mul(&amount_b_desired)
                .ok_or(ExchangeError::Overflow("initial deposit product overflow"))?;
            let minted = isqrt(product.get());
            (amount_a_desired, amount_b_desired, minted)
        } else {
            let b_optimal = amount_a_desired
                .checked_mul_div(&self.reserve_b, &self.reserve_a, Rounding::Down)
                .ok_or(ExchangeError::Overflow("ratio derivation overflow"))?;
            let (amount_a, amount_b) = if b_optimal <= amount_b_desired {
                (amount_a_desired, b_optimal)
            } else {
                // b_optimal > b_desired, so the inverse ratio clamps a
                // below a_desired.
                let a_optimal = amount_b_desired
                    .checked_mul_div(&self.reserve_a, &self.reserve_b, Rounding::Down)
                    .ok_or(ExchangeError::Overflow("ratio derivation overflow"))?;
                (a_optimal, amount_b_desired)
            };

            let total = Amount::new(self.total_shares.get());
            let share_a = amount_a
                .checked_mul_div(&total, &self.reserve_a, Rounding::Down)
                .ok_or(ExchangeError::Overflow("share minting overflow"))?;
            let share_b = amount_b
                .checked_mul_div(&total, &self.reserve_b, Rounding::Down)
                .ok_or(ExchangeError::Overflow("share minting overflow"))?;
            (amount_a, amount_b, core::cmp::min(share_a.get(), share_b.get()))
        };

        if minted == 0 {
            return Err(ExchangeError::InvalidQuantity(
                "deposit too small to mint shares",
            ));
        }
        if amount_a < amount_a_min {
            return Err(ExchangeError::SlippageExceeded(
                "token A contribution below minimum",
            ));
        }
        if amount_b < amount_b_min {
            return Err(ExchangeError::SlippageExceeded(
                "token B contribution below minimum",
            ));
        }

        Ok(LiquidityReceipt {
            amount_a,
            amount_b,
            shares: Shares::new(minted),
        })
    }

    /// Deposits liquidity and mints shares to `to`'s position.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::DeadlineExpired`] if `now` is past `deadline`.
    /// - Any error from [`Pool::quote_deposit`].
    /// - [`ExchangeError::Overflow`] if a reserve or the share supply
    ///   overflows.
    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity(
        &mut self,
        to: AccountId,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        amount_a_min: Amount,
        amount_b_min: Amount,
        now: Timestamp,
        deadline: Deadline,
    ) -> Result<LiquidityReceipt, ExchangeError> {
        deadline.ensure_not_expired(now)?;
        let receipt =
            self.quote_deposit(amount_a_desired, amount_b_desired, amount_a_min, amount_b_min)?;

        let new_reserve_a = self
            .reserve_a
            .checked_add(&receipt.amount_a)
            .ok_or(ExchangeError::Overflow("reserve overflow on deposit"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_add(&receipt.amount_b)
            .ok_or(ExchangeError::Overflow("reserve overflow on deposit"))?;
        let new_total = self
            .total_shares
            .checked_add(&receipt.shares)
            .ok_or(ExchangeError::Overflow("share supply overflow"))?;
        let new_held = self
            .shares_of(&to)
            .checked_add(&receipt.shares)
            .ok_or(ExchangeError::Overflow("position overflow"))?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;
        self.positions.insert(to, new_held);
        Ok(receipt)
    }

    /// Quotes a withdrawal against current reserves without executing it.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidQuantity`] if `shares` is zero.
    /// - [`ExchangeError::InsufficientShares`] if `owner` holds fewer
    ///   shares than requested.
    /// - [`ExchangeError::SlippageExceeded`] if a payout falls below its
    ///   minimum.
    /// - [`ExchangeError::Overflow`] if any arithmetic overflows.
    pub fn quote_withdrawal(
        &self,
        owner: &AccountId,
        shares: Shares,
        amount_a_min: Amount,
        amount_b_min: Amount,
    ) -> Result<(Amount, Amount), ExchangeError> {
        if shares.is_zero() {
            return Err(ExchangeError::InvalidQuantity("cannot burn zero shares"));
        }
        if self.shares_of(owner) < shares {
            return Err(ExchangeError::InsufficientShares);
        }

        // total_shares >= held >= shares > 0 here.
        let total = Amount::new(self.total_shares.get());
        let burn = Amount::new(shares.get());
        let out_a = self
            .reserve_a
            .checked_mul_div(&burn, &total, Rounding::Down)
            .ok_or(ExchangeError::Overflow("payout computation overflow"))?;
        let out_b = self
            .reserve_b
            .checked_mul_div(&burn, &total, Rounding::Down)
            .ok_or(ExchangeError::Overflow("payout computation overflow"))?;

        if out_a < amount_a_min {
            return Err(ExchangeError::SlippageExceeded(
                "token A payout below minimum",
            ));
        }
        if out_b < amount_b_min {
            return Err(ExchangeError::SlippageExceeded(
                "token B payout below minimum",
            ));
        }
        Ok((out_a, out_b))
    }

    /// Burns `shares` from `owner`'s position and pays out the
    /// proportional slice of both reserves.
    ///
    /// Burning the entire supply empties the pool and returns it to the
    /// uninitialized state; the next deposit sets a fresh ratio.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::DeadlineExpired`] if `now` is past `deadline`.
    /// - Any error from [`Pool::quote_withdrawal`].
    pub fn remove_liquidity(
        &mut self,
        owner: AccountId,
        shares: Shares,
        amount_a_min: Amount,
        amount_b_min: Amount,
        now: Timestamp,
        deadline: Deadline,
    ) -> Result<(Amount, Amount), ExchangeError> {
        deadline.ensure_not_expired(now)?;
        let (out_a, out_b) = self.quote_withdrawal(&owner, shares, amount_a_min, amount_b_min)?;

        let new_reserve_a = self
            .reserve_a
            .checked_sub(&out_a)
            .ok_or(ExchangeError::Overflow("reserve underflow on withdrawal"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_sub(&out_b)
            .ok_or(ExchangeError::Overflow("reserve underflow on withdrawal"))?;
        let new_total = self
            .total_shares
            .checked_sub(&shares)
            .ok_or(ExchangeError::Overflow("share supply underflow"))?;
        let new_held = self
            .shares_of(&owner)
            .checked_sub(&shares)
            .ok_or(ExchangeError::InsufficientShares)?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;
        if new_held.is_zero() {
            self.positions.remove(&owner);
        } else {
            self.positions.insert(owner, new_held);
        }
        Ok((out_a, out_b))
    }
}
