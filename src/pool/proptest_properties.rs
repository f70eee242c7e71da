//! Property-based tests for the engine's core invariants.
//!
//! 1. **Invariant preservation** — `reserve_a · reserve_b` never
//!    decreases across a swap.
//! 2. **Round-trip loss** — swapping A→B→A returns at most the original
//!    amount.
//! 3. **Quote monotonicity** — a larger input never yields a smaller
//!    output, and every output stays below the output reserve.
//! 4. **Liquidity round-trip** — adding then removing all minted shares
//!    returns at most the deposited amounts.
//! 5. **Share accounting** — positions always sum to the total supply.
//! 6. **Exact-out inverse** — paying `get_amount_in` always buys at
//!    least the requested output.

use proptest::prelude::*;

use crate::domain::{
    AccountId, Amount, Deadline, Decimals, FeeTier, Timestamp, Token, TokenAddress, TokenPair,
};
use crate::pool::{Pool, PoolConfig};
use crate::pricing;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok_a() -> Token {
    let Ok(d) = Decimals::new(18) else {
        panic!("valid decimals");
    };
    Token::contract(TokenAddress::from_bytes([1u8; 32]), d)
}

fn tok_b() -> Token {
    let Ok(d) = Decimals::new(6) else {
        panic!("valid decimals");
    };
    Token::contract(TokenAddress::from_bytes([2u8; 32]), d)
}

fn make_pair() -> TokenPair {
    let Ok(pair) = TokenPair::new(tok_a(), tok_b()) else {
        panic!("valid pair");
    };
    pair
}

fn depositor() -> AccountId {
    AccountId::from_bytes([0xA1; 32])
}

fn other_depositor() -> AccountId {
    AccountId::from_bytes([0xB0; 32])
}

fn now() -> Timestamp {
    Timestamp::new(1_700_000_000)
}

fn live_deadline() -> Deadline {
    Deadline::new(now().plus_secs(1_200))
}

fn seeded_pool(ra: u128, rb: u128) -> Pool {
    let Ok(cfg) = PoolConfig::new(make_pair(), FeeTier::TIER_0_30_PERCENT) else {
        panic!("valid config");
    };
    let Ok(mut pool) = Pool::from_config(&cfg) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.add_liquidity(
        depositor(),
        Amount::new(ra),
        Amount::new(rb),
        Amount::ZERO,
        Amount::ZERO,
        now(),
        live_deadline(),
    ) else {
        panic!("seed deposit failed");
    };
    pool
}

/// Reserve values in `[10_000, 10_000_000]` to stay clear of dust and
/// overflow extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_invariant_never_decreases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        divisor in 10u128..=1_000u128,
    ) {
        let mut pool = seeded_pool(ra, rb);
        let k_before = ra * rb;
        let amount_in = (ra / divisor).max(1);

        if pool
            .swap(tok_a(), Amount::new(amount_in), Amount::ZERO, now(), live_deadline())
            .is_ok()
        {
            let (new_ra, new_rb) = pool.reserves();
            prop_assert!(
                new_ra.get() * new_rb.get() >= k_before,
                "k decreased: {} < {}",
                new_ra.get() * new_rb.get(),
                k_before
            );
        }
    }

    #[test]
    fn prop_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let mut pool = seeded_pool(ra, rb);

        let Ok(fill_ab) = pool.swap(
            tok_a(),
            Amount::new(swap_in),
            Amount::ZERO,
            now(),
            live_deadline(),
        ) else {
            return Ok(());
        };
        let Ok(fill_ba) = pool.swap(
            tok_b(),
            fill_ab.amount_out(),
            Amount::ZERO,
            now(),
            live_deadline(),
        ) else {
            return Ok(());
        };

        prop_assert!(
            fill_ba.amount_out().get() <= swap_in,
            "round-trip gained value: {} > {}",
            fill_ba.amount_out().get(),
            swap_in
        );
    }

    #[test]
    fn prop_quote_monotonic_and_bounded(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_small in 1u128..=100_000u128,
        extra in 1u128..=100_000u128,
    ) {
        let fee = FeeTier::TIER_0_30_PERCENT;
        let reserve_in = Amount::new(ra);
        let reserve_out = Amount::new(rb);

        let small = pricing::get_amount_out(Amount::new(amount_small), reserve_in, reserve_out, fee);
        let large = pricing::get_amount_out(
            Amount::new(amount_small + extra),
            reserve_in,
            reserve_out,
            fee,
        );

        if let Ok(large_out) = large {
            prop_assert!(large_out.get() < rb, "output reached the reserve");
            if let Ok(small_out) = small {
                prop_assert!(
                    small_out <= large_out,
                    "monotonicity violated: {small_out} > {large_out}"
                );
            }
        }
    }

    #[test]
    fn prop_liquidity_round_trip_never_gains(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in 1_000u128..=1_000_000u128,
        db in 1_000u128..=1_000_000u128,
    ) {
        let mut pool = seeded_pool(ra, rb);

        let Ok(receipt) = pool.add_liquidity(
            other_depositor(),
            Amount::new(da),
            Amount::new(db),
            Amount::ZERO,
            Amount::ZERO,
            now(),
            live_deadline(),
        ) else {
            return Ok(());
        };
        let Ok((out_a, out_b)) = pool.remove_liquidity(
            other_depositor(),
            receipt.shares(),
            Amount::ZERO,
            Amount::ZERO,
            now(),
            live_deadline(),
        ) else {
            return Ok(());
        };

        prop_assert!(out_a <= receipt.amount_a());
        prop_assert!(out_b <= receipt.amount_b());
    }

    #[test]
    fn prop_positions_sum_to_total_shares(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in 1_000u128..=1_000_000u128,
        db in 1_000u128..=1_000_000u128,
        burn_fraction in 1u128..=4u128,
    ) {
        let mut pool = seeded_pool(ra, rb);
        let _ = pool.add_liquidity(
            other_depositor(),
            Amount::new(da),
            Amount::new(db),
            Amount::ZERO,
            Amount::ZERO,
            now(),
            live_deadline(),
        );
        let held = pool.shares_of(&other_depositor());
        if !held.is_zero() {
            let burn = crate::domain::Shares::new((held.get() / burn_fraction).max(1));
            let _ = pool.remove_liquidity(
                other_depositor(),
                burn,
                Amount::ZERO,
                Amount::ZERO,
                now(),
                live_deadline(),
            );
        }

        let sum: u128 = pool.positions.values().map(|s| s.get()).sum();
        prop_assert_eq!(sum, pool.total_shares().get());
    }

    #[test]
    fn prop_exact_out_inverse_covers_output(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        divisor in 10u128..=1_000u128,
    ) {
        let fee = FeeTier::TIER_0_30_PERCENT;
        let reserve_in = Amount::new(ra);
        let reserve_out = Amount::new(rb);
        let want = Amount::new((rb / divisor).max(1));

        let Ok(needed) = pricing::get_amount_in(want, reserve_in, reserve_out, fee) else {
            return Ok(());
        };
        let Ok(got) = pricing::get_amount_out(needed, reserve_in, reserve_out, fee) else {
            return Ok(());
        };
        prop_assert!(
            got >= want,
            "paying {needed} bought {got}, wanted {want}"
        );
    }

    #[test]
    fn prop_deposit_never_exceeds_desired(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in 1_000u128..=1_000_000u128,
        db in 1_000u128..=1_000_000u128,
    ) {
        let pool = seeded_pool(ra, rb);
        let Ok(receipt) = pool.quote_deposit(
            Amount::new(da),
            Amount::new(db),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            return Ok(());
        };
        prop_assert!(receipt.amount_a().get() <= da);
        prop_assert!(receipt.amount_b().get() <= db);
    }
}
