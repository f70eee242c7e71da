//! Outcome of an executed swap.

use core::fmt;

use super::Amount;
use crate::error::ExchangeError;

/// The amounts moved by a completed swap.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in` — the fee is part of the input, never all of it.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, SwapFill};
///
/// let fill = SwapFill::new(Amount::new(1_000), Amount::new(362), Amount::new(3));
/// assert!(fill.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapFill {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapFill {
    /// Creates a new `SwapFill` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidQuantity`] if either amount is zero
    /// or `fee >= amount_in`.
    pub const fn new(
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(ExchangeError::InvalidQuantity("fill input must be positive"));
        }
        if amount_out.is_zero() {
            return Err(ExchangeError::InvalidQuantity("fill output must be positive"));
        }
        if fee.get() >= amount_in.get() {
            return Err(ExchangeError::InvalidQuantity(
                "fee must be less than the input",
            ));
        }
        Ok(Self {
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the input amount taken from the caller.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount credited to the recipient.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the nominal fee portion of the input.
    #[must_use]
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fill(in={}, out={}, fee={})",
            self.amount_in, self.amount_out, self.fee
        )
    }
}
