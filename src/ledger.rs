//! Token balance and allowance ledger.
//!
//! An ERC-20-shaped ledger for every token the engine moves: balances
//! per `(token, account)`, allowances per `(token, owner, spender)`.
//! The exchange facade pulls deposits through [`TokenLedger::transfer_from`]
//! (so users grant it an allowance first, as they would a contract) and
//! pays withdrawals and swap outputs with [`TokenLedger::transfer`].
//!
//! Transfers are validate-then-commit: the `ensure_*` pre-checks let a
//! caller front-load every fallible check before mutating anything.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, TokenId};
use crate::error::ExchangeError;

/// In-memory balances and allowances for any number of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenLedger {
    balances: BTreeMap<(TokenId, AccountId), Amount>,
    allowances: BTreeMap<(TokenId, AccountId, AccountId), Amount>,
}

impl TokenLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `account`'s balance of `token` (zero when unfunded).
    #[must_use]
    pub fn balance_of(&self, token: TokenId, account: AccountId) -> Amount {
        self.balances
            .get(&(token, account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Returns the amount `spender` may move out of `owner`'s balance.
    #[must_use]
    pub fn allowance(&self, token: TokenId, owner: AccountId, spender: AccountId) -> Amount {
        self.allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Credits `amount` of `token` to `to`.
    ///
    /// Token issuance belongs to the host chain, not this engine; `mint`
    /// exists so tests and embedding callers can fund accounts.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Overflow`] if the balance would exceed
    /// `u128`.
    pub fn mint(&mut self, token: TokenId, to: AccountId, amount: Amount) -> Result<(), ExchangeError> {
        let new_balance = self
            .balance_of(token, to)
            .checked_add(&amount)
            .ok_or(ExchangeError::Overflow("minted balance overflow"))?;
        self.balances.insert((token, to), new_balance);
        Ok(())
    }

    /// Sets (not increments) `spender`'s allowance over `owner`'s
    /// balance of `token`.
    pub fn approve(
        &mut self,
        token: TokenId,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) {
        if amount.is_zero() {
            self.allowances.remove(&(token, owner, spender));
        } else {
            self.allowances.insert((token, owner, spender), amount);
        }
    }

    /// Fails unless `owner` holds at least `amount` of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InsufficientBalance`] on shortfall.
    pub fn ensure_balance(
        &self,
        token: TokenId,
        owner: AccountId,
        amount: Amount,
    ) -> Result<(), ExchangeError> {
        if self.balance_of(token, owner) < amount {
            return Err(ExchangeError::InsufficientBalance);
        }
        Ok(())
    }

    /// Fails unless `spender` may move at least `amount` of `owner`'s
    /// `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InsufficientAllowance`] on shortfall.
    pub fn ensure_allowance(
        &self,
        token: TokenId,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<(), ExchangeError> {
        if self.allowance(token, owner, spender) < amount {
            return Err(ExchangeError::InsufficientAllowance);
        }
        Ok(())
    }

    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// A zero-amount transfer is a no-op. All checks precede all writes.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InsufficientBalance`] if `from` cannot cover
    ///   the amount.
    /// - [`ExchangeError::Overflow`] if `to`'s balance would exceed
    ///   `u128`.
    pub fn transfer(
        &mut self,
        token: TokenId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), ExchangeError> {
        if amount.is_zero() {
            return Ok(());
        }
        let new_from = self
            .balance_of(token, from)
            .checked_sub(&amount)
            .ok_or(ExchangeError::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let new_to = self
            .balance_of(token, to)
            .checked_add(&amount)
            .ok_or(ExchangeError::Overflow("credited balance overflow"))?;
        self.balances.insert((token, from), new_from);
        self.balances.insert((token, to), new_to);
        Ok(())
    }

    /// Moves `amount` of `token` from `from` to `to` on behalf of
    /// `spender`, consuming allowance.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InsufficientAllowance`] if `spender`'s
    ///   allowance cannot cover the amount.
    /// - Any error from [`TokenLedger::transfer`].
    pub fn transfer_from(
        &mut self,
        token: TokenId,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), ExchangeError> {
        if amount.is_zero() {
            return Ok(());
        }
        let remaining = self
            .allowance(token, from, spender)
            .checked_sub(&amount)
            .ok_or(ExchangeError::InsufficientAllowance)?;
        // Balance checks happen inside transfer, before any write.
        self.transfer(token, from, to, amount)?;
        self.approve(token, from, spender, remaining);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::TokenAddress;

    fn token() -> TokenId {
        TokenId::Contract(TokenAddress::from_bytes([1u8; 32]))
    }

    fn alice() -> AccountId {
        AccountId::from_bytes([0xA1; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([0xB0; 32])
    }

    fn carol() -> AccountId {
        AccountId::from_bytes([0xC0; 32])
    }

    fn funded_ledger() -> TokenLedger {
        let mut ledger = TokenLedger::new();
        let Ok(()) = ledger.mint(token(), alice(), Amount::new(1_000)) else {
            panic!("mint failed");
        };
        ledger
    }

    #[test]
    fn unfunded_balance_is_zero() {
        let ledger = TokenLedger::new();
        assert_eq!(ledger.balance_of(token(), alice()), Amount::ZERO);
        assert_eq!(ledger.allowance(token(), alice(), bob()), Amount::ZERO);
    }

    #[test]
    fn mint_accumulates() {
        let mut ledger = funded_ledger();
        let Ok(()) = ledger.mint(token(), alice(), Amount::new(500)) else {
            panic!("mint failed");
        };
        assert_eq!(ledger.balance_of(token(), alice()), Amount::new(1_500));
    }

    #[test]
    fn transfer_moves_balance() {
        let mut ledger = funded_ledger();
        let Ok(()) = ledger.transfer(token(), alice(), bob(), Amount::new(300)) else {
            panic!("transfer failed");
        };
        assert_eq!(ledger.balance_of(token(), alice()), Amount::new(700));
        assert_eq!(ledger.balance_of(token(), bob()), Amount::new(300));
    }

    #[test]
    fn transfer_shortfall_rejected_without_state_change() {
        let mut ledger = funded_ledger();
        let before = ledger.clone();
        assert_eq!(
            ledger.transfer(token(), alice(), bob(), Amount::new(1_001)),
            Err(ExchangeError::InsufficientBalance)
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn self_transfer_is_a_no_op() {
        let mut ledger = funded_ledger();
        let Ok(()) = ledger.transfer(token(), alice(), alice(), Amount::new(400)) else {
            panic!("transfer failed");
        };
        assert_eq!(ledger.balance_of(token(), alice()), Amount::new(1_000));
    }

    #[test]
    fn zero_transfer_is_a_no_op() {
        let mut ledger = funded_ledger();
        let Ok(()) = ledger.transfer(token(), bob(), alice(), Amount::ZERO) else {
            panic!("transfer failed");
        };
        assert_eq!(ledger.balance_of(token(), alice()), Amount::new(1_000));
    }

    #[test]
    fn approve_sets_and_clears() {
        let mut ledger = funded_ledger();
        ledger.approve(token(), alice(), bob(), Amount::new(200));
        assert_eq!(ledger.allowance(token(), alice(), bob()), Amount::new(200));
        ledger.approve(token(), alice(), bob(), Amount::new(50));
        assert_eq!(ledger.allowance(token(), alice(), bob()), Amount::new(50));
        ledger.approve(token(), alice(), bob(), Amount::ZERO);
        assert_eq!(ledger.allowance(token(), alice(), bob()), Amount::ZERO);
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut ledger = funded_ledger();
        ledger.approve(token(), alice(), bob(), Amount::new(500));

        let Ok(()) = ledger.transfer_from(token(), bob(), alice(), carol(), Amount::new(300))
        else {
            panic!("transfer_from failed");
        };
        assert_eq!(ledger.balance_of(token(), alice()), Amount::new(700));
        assert_eq!(ledger.balance_of(token(), carol()), Amount::new(300));
        assert_eq!(ledger.allowance(token(), alice(), bob()), Amount::new(200));
    }

    #[test]
    fn transfer_from_without_allowance_rejected() {
        let mut ledger = funded_ledger();
        assert_eq!(
            ledger.transfer_from(token(), bob(), alice(), carol(), Amount::new(1)),
            Err(ExchangeError::InsufficientAllowance)
        );
    }

    #[test]
    fn transfer_from_shortfall_leaves_allowance_intact() {
        let mut ledger = funded_ledger();
        ledger.approve(token(), alice(), bob(), Amount::new(5_000));
        assert_eq!(
            ledger.transfer_from(token(), bob(), alice(), carol(), Amount::new(2_000)),
            Err(ExchangeError::InsufficientBalance)
        );
        assert_eq!(ledger.allowance(token(), alice(), bob()), Amount::new(5_000));
        assert_eq!(ledger.balance_of(token(), alice()), Amount::new(1_000));
    }

    #[test]
    fn ensure_checks_do_not_mutate() {
        let mut ledger = funded_ledger();
        ledger.approve(token(), alice(), bob(), Amount::new(100));
        let before = ledger.clone();

        assert!(ledger.ensure_balance(token(), alice(), Amount::new(1_000)).is_ok());
        assert_eq!(
            ledger.ensure_balance(token(), alice(), Amount::new(1_001)),
            Err(ExchangeError::InsufficientBalance)
        );
        assert!(ledger
            .ensure_allowance(token(), alice(), bob(), Amount::new(100))
            .is_ok());
        assert_eq!(
            ledger.ensure_allowance(token(), alice(), bob(), Amount::new(101)),
            Err(ExchangeError::InsufficientAllowance)
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn balances_are_per_token() {
        let other = TokenId::Contract(TokenAddress::from_bytes([2u8; 32]));
        let mut ledger = funded_ledger();
        let Ok(()) = ledger.mint(other, alice(), Amount::new(7)) else {
            panic!("mint failed");
        };
        assert_eq!(ledger.balance_of(token(), alice()), Amount::new(1_000));
        assert_eq!(ledger.balance_of(other, alice()), Amount::new(7));
    }

    #[test]
    fn native_token_is_a_first_class_balance() {
        let mut ledger = TokenLedger::new();
        let Ok(()) = ledger.mint(TokenId::Native, alice(), Amount::new(42)) else {
            panic!("mint failed");
        };
        assert_eq!(ledger.balance_of(TokenId::Native, alice()), Amount::new(42));
    }
}
