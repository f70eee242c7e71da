//! Exchange facade: the ABI-shaped surface of the engine.
//!
//! [`Exchange`] owns the pool registry and the token ledger and exposes
//! the operations an external caller (originally a browser front end)
//! drives: `create_pool`, `add_liquidity`, `remove_liquidity`,
//! `swap_exact_tokens_for_tokens`, `get_pool`, and `get_amount_out`.
//!
//! # Funds flow
//!
//! The exchange has an [`AccountId`] of its own. Deposits and swap
//! inputs are pulled from the sender with `transfer_from` (the sender
//! approves the exchange first, as they would a contract), payouts leave
//! through `transfer`. The exchange account therefore always holds
//! exactly the sum of all pool reserves per token.
//!
//! # Atomicity
//!
//! Every operation front-loads all fallible checks — deadline, pool
//! lookup, quote, slippage bound, balance, allowance — before the first
//! ledger or pool mutation. A returned error implies unchanged state.
//! Multi-hop routes are quoted in full against current reserves before
//! any hop commits; a route may not revisit a pair, so the committed
//! hops reproduce the quoted amounts exactly.

use crate::domain::{
    AccountId, Amount, Deadline, FeeTier, Rounding, Shares, SwapFill, SwapRequest, Timestamp,
    Token, TokenId,
};
use crate::error::ExchangeError;
use crate::ledger::TokenLedger;
use crate::pool::{LiquidityReceipt, Pool};
use crate::pricing;
use crate::registry::PoolRegistry;

/// The exchange engine: pool registry plus token ledger behind one
/// transactional surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    id: AccountId,
    registry: PoolRegistry,
    ledger: TokenLedger,
}

impl Exchange {
    /// Creates an exchange with its own account identity and the fee
    /// tier applied to every pool it creates.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidFee`] if the fee is 100% or more.
    pub fn new(id: AccountId, fee_tier: FeeTier) -> Result<Self, ExchangeError> {
        Ok(Self {
            id,
            registry: PoolRegistry::new(fee_tier)?,
            ledger: TokenLedger::new(),
        })
    }

    /// Returns the exchange's own account identity (the allowance
    /// spender users approve).
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the pool registry.
    #[must_use]
    pub const fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    /// Returns the token ledger.
    #[must_use]
    pub const fn ledger(&self) -> &TokenLedger {
        &self.ledger
    }

    /// Returns the token ledger for funding and approvals.
    pub fn ledger_mut(&mut self) -> &mut TokenLedger {
        &mut self.ledger
    }

    /// Creates the pool for `(token_a, token_b)`.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidToken`] if both tokens share an identity.
    /// - [`ExchangeError::PoolExists`] if the pair is already registered.
    pub fn create_pool(&mut self, token_a: Token, token_b: Token) -> Result<&Pool, ExchangeError> {
        let pool = self.registry.create_pool(token_a, token_b)?;
        tracing::debug!(pair = %pool.token_pair(), "pool created");
        Ok(pool)
    }

    /// Looks up the pool for `(token_a, token_b)` in either order.
    ///
    /// `None` means "no pool" — callers branch to the pool-creation
    /// flow, never swap or deposit against a missing pool.
    #[must_use]
    pub fn get_pool(&self, token_a: &Token, token_b: &Token) -> Option<&Pool> {
        self.registry.get_pool(token_a, token_b)
    }

    /// Quotes an exact-input swap against explicit reserves at the
    /// engine's fee tier, without touching any pool.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`pricing::get_amount_out`].
    pub fn get_amount_out(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount, ExchangeError> {
        pricing::get_amount_out(amount_in, reserve_in, reserve_out, self.registry.fee_tier())
    }

    /// Deposits liquidity into the `(token_a, token_b)` pool.
    ///
    /// Pulls the accepted amounts from `sender` (who must hold the funds
    /// and have approved the exchange) and mints the shares to `to`. The
    /// returned receipt reports amounts in the caller's `(token_a,
    /// token_b)` argument order.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::DeadlineExpired`] if `now` is past `deadline`.
    /// - [`ExchangeError::PoolNotFound`] if the pair is unregistered.
    /// - Any error from [`Pool::quote_deposit`].
    /// - [`ExchangeError::InsufficientBalance`] /
    ///   [`ExchangeError::InsufficientAllowance`] if `sender` cannot
    ///   fund the accepted amounts.
    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity(
        &mut self,
        sender: AccountId,
        token_a: Token,
        token_b: Token,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        amount_a_min: Amount,
        amount_b_min: Amount,
        to: AccountId,
        deadline: Deadline,
        now: Timestamp,
    ) -> Result<LiquidityReceipt, ExchangeError> {
        deadline.ensure_not_expired(now)?;
        let pool = self
            .registry
            .get_pool(&token_a, &token_b)
            .ok_or(ExchangeError::PoolNotFound)?;
        let caller_order_is_canonical = token_a.id() == pool.token_pair().first().id();
        let (a_desired, b_desired, a_min, b_min) = if caller_order_is_canonical {
            (amount_a_desired, amount_b_desired, amount_a_min, amount_b_min)
        } else {
            (amount_b_desired, amount_a_desired, amount_b_min, amount_a_min)
        };

        let plan = pool.quote_deposit(a_desired, b_desired, a_min, b_min)?;
        let (first_id, second_id) = pool.token_pair().key();

        self.ledger.ensure_balance(first_id, sender, plan.amount_a())?;
        self.ledger
            .ensure_allowance(first_id, sender, self.id, plan.amount_a())?;
        self.ledger.ensure_balance(second_id, sender, plan.amount_b())?;
        self.ledger
            .ensure_allowance(second_id, sender, self.id, plan.amount_b())?;

        self.ledger
            .transfer_from(first_id, self.id, sender, self.id, plan.amount_a())?;
        self.ledger
            .transfer_from(second_id, self.id, sender, self.id, plan.amount_b())?;
        let pool = self.registry.pool_mut(&token_a, &token_b)?;
        let receipt = pool.add_liquidity(to, a_desired, b_desired, a_min, b_min, now, deadline)?;
        tracing::debug!(
            pair = %pool.token_pair(),
            shares = %receipt.shares(),
            "liquidity added"
        );

        Ok(if caller_order_is_canonical {
            receipt
        } else {
            LiquidityReceipt::new(receipt.amount_b(), receipt.amount_a(), receipt.shares())
        })
    }

    /// Burns `sender`'s shares in the `(token_a, token_b)` pool and pays
    /// the proportional reserves out to `to`.
    ///
    /// The returned amounts follow the caller's `(token_a, token_b)`
    /// argument order.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::DeadlineExpired`] if `now` is past `deadline`.
    /// - [`ExchangeError::PoolNotFound`] if the pair is unregistered.
    /// - Any error from [`Pool::quote_withdrawal`].
    #[allow(clippy::too_many_arguments)]
    pub fn remove_liquidity(
        &mut self,
        sender: AccountId,
        token_a: Token,
        token_b: Token,
        shares: Shares,
        amount_a_min: Amount,
        amount_b_min: Amount,
        to: AccountId,
        deadline: Deadline,
        now: Timestamp,
    ) -> Result<(Amount, Amount), ExchangeError> {
        deadline.ensure_not_expired(now)?;
        let pool = self
            .registry
            .get_pool(&token_a, &token_b)
            .ok_or(ExchangeError::PoolNotFound)?;
        let caller_order_is_canonical = token_a.id() == pool.token_pair().first().id();
        let (a_min, b_min) = if caller_order_is_canonical {
            (amount_a_min, amount_b_min)
        } else {
            (amount_b_min, amount_a_min)
        };

        let (out_a, out_b) = pool.quote_withdrawal(&sender, shares, a_min, b_min)?;
        let (first_id, second_id) = pool.token_pair().key();
        self.ledger.ensure_balance(first_id, self.id, out_a)?;
        self.ledger.ensure_balance(second_id, self.id, out_b)?;

        let pool = self.registry.pool_mut(&token_a, &token_b)?;
        let (out_a, out_b) = pool.remove_liquidity(sender, shares, a_min, b_min, now, deadline)?;
        self.ledger.transfer(first_id, self.id, to, out_a)?;
        self.ledger.transfer(second_id, self.id, to, out_b)?;
        tracing::debug!(shares = %shares, "liquidity removed");

        Ok(if caller_order_is_canonical {
            (out_a, out_b)
        } else {
            (out_b, out_a)
        })
    }

    /// Swaps an exact input along `path`, one registered pool per hop.
    ///
    /// The whole route is quoted against current reserves first; the
    /// final output must meet `amount_out_min` before anything commits.
    /// Returns the amount at each step of the path, starting with
    /// `amount_in`.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidPath`] if the path names fewer than two
    ///   tokens or revisits a pair.
    /// - [`ExchangeError::InvalidQuantity`] if `amount_in` is zero.
    /// - [`ExchangeError::DeadlineExpired`] if `now` is past `deadline`.
    /// - [`ExchangeError::PoolNotFound`] if any hop is unregistered.
    /// - [`ExchangeError::SlippageExceeded`] if the route output is
    ///   below `amount_out_min`.
    /// - [`ExchangeError::InsufficientBalance`] /
    ///   [`ExchangeError::InsufficientAllowance`] if `sender` cannot
    ///   fund the input.
    #[allow(clippy::too_many_arguments)]
    pub fn swap_exact_tokens_for_tokens(
        &mut self,
        sender: AccountId,
        amount_in: Amount,
        amount_out_min: Amount,
        path: &[Token],
        to: AccountId,
        deadline: Deadline,
        now: Timestamp,
    ) -> Result<Vec<Amount>, ExchangeError> {
        if path.len() < 2 {
            return Err(ExchangeError::InvalidPath(
                "path must name at least two tokens",
            ));
        }
        if amount_in.is_zero() {
            return Err(ExchangeError::InvalidQuantity("swap input must be non-zero"));
        }
        deadline.ensure_not_expired(now)?;

        // Quote the whole route against current reserves. A pair may
        // appear once only, so the commit below replays these amounts
        // exactly and cannot fail halfway.
        let mut visited: Vec<(TokenId, TokenId)> = Vec::with_capacity(path.len() - 1);
        let mut amounts = Vec::with_capacity(path.len());
        amounts.push(amount_in);
        let mut hop_in = amount_in;
        for hop in path.windows(2) {
            let pool = self
                .registry
                .get_pool(&hop[0], &hop[1])
                .ok_or(ExchangeError::PoolNotFound)?;
            let key = pool.token_pair().key();
            if visited.contains(&key) {
                return Err(ExchangeError::InvalidPath("path must not revisit a pair"));
            }
            visited.push(key);
            let hop_out = pool.quote_swap(&hop[0], hop_in)?;
            amounts.push(hop_out);
            hop_in = hop_out;
        }
        let final_out = hop_in;
        if final_out < amount_out_min {
            return Err(ExchangeError::SlippageExceeded(
                "route output below caller minimum",
            ));
        }

        let token_in_id = path[0].id();
        let token_out_id = path[path.len() - 1].id();
        self.ledger.ensure_balance(token_in_id, sender, amount_in)?;
        self.ledger
            .ensure_allowance(token_in_id, sender, self.id, amount_in)?;

        // Commit: pull the input, replay the quoted hops, pay the output.
        self.ledger
            .transfer_from(token_in_id, self.id, sender, self.id, amount_in)?;
        let mut hop_in = amount_in;
        for (hop, expected_out) in path.windows(2).zip(amounts.iter().skip(1)) {
            let pool = self.registry.pool_mut(&hop[0], &hop[1])?;
            let fill = pool.swap(hop[0], hop_in, *expected_out, now, deadline)?;
            hop_in = fill.amount_out();
        }
        self.ledger.transfer(token_out_id, self.id, to, final_out)?;
        tracing::debug!(
            hops = path.len() - 1,
            amount_in = %amount_in,
            amount_out = %final_out,
            "swap executed"
        );
        Ok(amounts)
    }

    /// Executes a single-pair swap described by a [`SwapRequest`].
    ///
    /// Convenience over [`Exchange::swap_exact_tokens_for_tokens`] with
    /// a two-token path.
    ///
    /// # Errors
    ///
    /// Propagates errors from the route execution.
    pub fn swap(
        &mut self,
        sender: AccountId,
        request: &SwapRequest,
        now: Timestamp,
    ) -> Result<SwapFill, ExchangeError> {
        let path = [request.token_in(), request.token_out()];
        let amounts = self.swap_exact_tokens_for_tokens(
            sender,
            request.amount_in(),
            request.amount_out_min(),
            &path,
            request.recipient(),
            request.deadline(),
            now,
        )?;
        let amount_out = amounts
            .last()
            .copied()
            .ok_or(ExchangeError::InvalidPath("empty route"))?;
        let fee = self
            .registry
            .fee_tier()
            .apply_to_amount(request.amount_in(), Rounding::Up)?;
        SwapFill::new(request.amount_in(), amount_out, fee)
    }
}
