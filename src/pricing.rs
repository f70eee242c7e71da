//! Pure constant-product pricing.
//!
//! The quoting functions here are stateless: they price a trade against a
//! pair of reserves without touching any pool. The swap executor calls
//! them against live reserves; callers can invoke them directly for a
//! preview, exactly like the contract's `pure` ABI entry.
//!
//! # Formula
//!
//! With the fee taken from the input at `f` basis points:
//!
//! ```text
//! net        = amount_in × (10 000 − f)
//! amount_out = ⌊ net × reserve_out / (reserve_in × 10 000 + net) ⌋
//! ```
//!
//! The fee-adjusted input stays scaled by the basis-point denominator all
//! the way through, so no precision is lost to an early division. Output
//! rounds down — rounding up would let a caller extract value one unit at
//! a time.

use crate::domain::{Amount, FeeTier, Rounding};
use crate::error::ExchangeError;

/// Basis-point denominator (10 000 = 100%).
const BPS_DENOMINATOR: u128 = 10_000;

/// Returns the fee complement in basis points, rejecting fees at or above
/// 100%.
const fn usable_fee_complement(fee: FeeTier) -> crate::error::Result<u128> {
    match fee.basis_points().complement() {
        Some(0) => Err(ExchangeError::InvalidFee("a 100% fee leaves no input")),
        Some(c) => Ok(c as u128),
        None => Err(ExchangeError::InvalidFee("fee must not exceed 100%")),
    }
}

/// Quotes the output of an exact-input swap.
///
/// Pure function: no state is read or written beyond the arguments.
///
/// # Errors
///
/// - [`ExchangeError::InsufficientLiquidity`] if `amount_in` is zero,
///   either reserve is zero (uninitialized pool), or the computed output
///   rounds to zero.
/// - [`ExchangeError::InvalidFee`] if the fee is 100% or more.
/// - [`ExchangeError::Overflow`] if an intermediate product exceeds
///   `u128`.
pub const fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> crate::error::Result<Amount> {
    let fee_complement = match usable_fee_complement(fee) {
        Ok(c) => c,
        Err(e) => return Err(e),
    };
    if amount_in.is_zero() || reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(ExchangeError::InsufficientLiquidity);
    }

    let net_scaled = match amount_in.checked_mul(&Amount::new(fee_complement)) {
        Some(v) => v,
        None => return Err(ExchangeError::Overflow("fee-adjusted input overflow")),
    };
    let numerator = match net_scaled.checked_mul(&reserve_out) {
        Some(v) => v,
        None => return Err(ExchangeError::Overflow("pricing numerator overflow")),
    };
    let scaled_reserve = match reserve_in.checked_mul(&Amount::new(BPS_DENOMINATOR)) {
        Some(v) => v,
        None => return Err(ExchangeError::Overflow("scaled reserve overflow")),
    };
    let denominator = match scaled_reserve.checked_add(&net_scaled) {
        Some(v) => v,
        None => return Err(ExchangeError::Overflow("pricing denominator overflow")),
    };

    // denominator > 0 because reserve_in > 0.
    let amount_out = match numerator.checked_div(&denominator, Rounding::Down) {
        Some(v) => v,
        None => return Err(ExchangeError::DivisionByZero),
    };
    if amount_out.is_zero() {
        return Err(ExchangeError::InsufficientLiquidity);
    }
    Ok(amount_out)
}

/// Quotes the input required to receive an exact output.
///
/// The inverse of [`get_amount_out`], rounded up against the caller.
///
/// # Errors
///
/// - [`ExchangeError::InsufficientLiquidity`] if `amount_out` is zero,
///   either reserve is zero, or `amount_out` would meet or drain
///   `reserve_out`.
/// - [`ExchangeError::InvalidFee`] if the fee is 100% or more.
/// - [`ExchangeError::Overflow`] if an intermediate product exceeds
///   `u128`.
pub const fn get_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> crate::error::Result<Amount> {
    let fee_complement = match usable_fee_complement(fee) {
        Ok(c) => c,
        Err(e) => return Err(e),
    };
    if amount_out.is_zero() || reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(ExchangeError::InsufficientLiquidity);
    }
    if amount_out.get() >= reserve_out.get() {
        return Err(ExchangeError::InsufficientLiquidity);
    }

    let scaled_in = match reserve_in.checked_mul(&Amount::new(BPS_DENOMINATOR)) {
        Some(v) => v,
        None => return Err(ExchangeError::Overflow("scaled reserve overflow")),
    };
    let numerator = match scaled_in.checked_mul(&amount_out) {
        Some(v) => v,
        None => return Err(ExchangeError::Overflow("pricing numerator overflow")),
    };
    let remaining = match reserve_out.checked_sub(&amount_out) {
        Some(v) => v,
        None => return Err(ExchangeError::InsufficientLiquidity),
    };
    let denominator = match remaining.checked_mul(&Amount::new(fee_complement)) {
        Some(v) => v,
        None => return Err(ExchangeError::Overflow("pricing denominator overflow")),
    };

    match numerator.checked_div(&denominator, Rounding::Up) {
        Some(v) => Ok(v),
        None => Err(ExchangeError::DivisionByZero),
    }
}
