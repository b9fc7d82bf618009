//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Ratio preservation**: a proportional deposit keeps `reserve_a / reserve_b`.
//! 2. **Round trip**: seeding then withdrawing returns the seed, minus the
//!    locked floor under the geometric-mean policy.
//! 3. **Product monotonicity**: every swap strictly grows `reserve_a × reserve_b`.
//! 4. **Share conservation**: share balances always sum to the supply.
//! 5. **Empty pool rejection**: swaps fail with `ZeroLiquidity`, overdrawn
//!    withdrawals with `InsufficientShares`.

use proptest::prelude::*;

use crate::config::{PoolConfig, SeedPolicy, MINIMUM_SHARES};
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, FeeTier, Rounding, Shares, SwapDirection,
};
use crate::error::AmmError;
use crate::ledger::InMemoryLedger;
use crate::math::{mul_div, U256};
use crate::traits::AssetLedger;

use super::PairPool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDING: u128 = u128::MAX / 4;

fn make_pair() -> AssetPair {
    let Ok(pair) = AssetPair::new(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]))
    else {
        panic!("valid pair");
    };
    pair
}

fn pool_account() -> AccountId {
    AccountId::from_bytes([0x77; 32])
}

fn trader(n: u8) -> AccountId {
    AccountId::from_bytes([0xa0 + n; 32])
}

fn make_pool(policy: SeedPolicy) -> PairPool {
    let Ok(cfg) = PoolConfig::new(make_pair(), pool_account(), FeeTier::default(), policy) else {
        panic!("valid config");
    };
    PairPool::new(cfg)
}

fn make_ledger() -> InMemoryLedger {
    let mut ledger = InMemoryLedger::new();
    for n in 0..4 {
        for asset in [make_pair().asset_a(), make_pair().asset_b()] {
            let Ok(()) = ledger.mint(&asset, &trader(n), Amount::new(FUNDING)) else {
                panic!("mint failed");
            };
            ledger.approve(&asset, &trader(n), &pool_account(), Amount::new(FUNDING));
        }
    }
    ledger
}

fn share_sum(pool: &PairPool) -> u128 {
    pool.share_holders().map(|(_, shares)| shares.get()).sum()
}

fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000_000u128..1_000_000_000_000_000_000_000u128
}

#[derive(Debug, Clone)]
enum Op {
    Deposit(u8, u128),
    Withdraw(u8, u128),
    Swap(u8, bool, u128),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..4, 1u128..1_000_000_000_000_000_000u128).prop_map(|(t, a)| Op::Deposit(t, a)),
        (0u8..4, 1u128..1_000u128).prop_map(|(t, permille)| Op::Withdraw(t, permille)),
        (0u8..4, any::<bool>(), 1u128..1_000_000_000_000_000_000u128)
            .prop_map(|(t, a_to_b, amount)| Op::Swap(t, a_to_b, amount)),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Ratio preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_preserves_ratio(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_a in 1_000u128..1_000_000_000_000_000_000u128,
    ) {
        let mut pool = make_pool(SeedPolicy::PairedAmount);
        let mut ledger = make_ledger();
        let Ok(_) = pool.deposit(&mut ledger, trader(0), Amount::new(ra), Amount::new(rb)) else {
            panic!("seed failed");
        };
        let Ok(_) = pool.deposit(&mut ledger, trader(1), Amount::new(amount_a), Amount::new(FUNDING)) else {
            return Ok(());
        };
        let (ra1, rb1) = pool.reserves();
        // reserve_b must track reserve_a at the seed ratio, to one unit of B.
        let Ok(expected) = mul_div(rb, ra1.get(), ra, Rounding::Down) else {
            panic!("mul_div failed");
        };
        prop_assert!(
            rb1.get().abs_diff(expected) <= 1,
            "ratio drifted: reserve_b={} expected={}",
            rb1, expected
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_paired_amount(a in reserve_strategy(), b in reserve_strategy()) {
        let mut pool = make_pool(SeedPolicy::PairedAmount);
        let mut ledger = make_ledger();
        let Ok(receipt) = pool.deposit(&mut ledger, trader(0), Amount::new(a), Amount::new(b)) else {
            panic!("seed failed");
        };
        let Ok(out) = pool.withdraw(&mut ledger, trader(0), receipt.shares) else {
            panic!("withdraw failed");
        };
        prop_assert_eq!((out.amount_a.get(), out.amount_b.get()), (a, b));
        prop_assert_eq!(pool.total_shares(), Shares::ZERO);
    }

    #[test]
    fn prop_round_trip_geometric_mean(a in reserve_strategy(), b in reserve_strategy()) {
        let mut pool = make_pool(SeedPolicy::GeometricMean);
        let mut ledger = make_ledger();
        let Ok(receipt) = pool.deposit(&mut ledger, trader(0), Amount::new(a), Amount::new(b)) else {
            return Ok(());
        };
        let Ok(out) = pool.withdraw(&mut ledger, trader(0), receipt.shares) else {
            panic!("withdraw failed");
        };
        let total = receipt.shares.get() + MINIMUM_SHARES.get();
        // What stays behind is the locked floor's share, rounded up by one.
        let kept_a = a - out.amount_a.get();
        let kept_b = b - out.amount_b.get();
        prop_assert!(kept_a <= a * MINIMUM_SHARES.get() / total + 1);
        prop_assert!(kept_b <= b * MINIMUM_SHARES.get() / total + 1);
        prop_assert_eq!(pool.total_shares(), MINIMUM_SHARES);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Product monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_grows_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in 1u128..1_000_000_000_000_000_000u128,
        a_to_b in any::<bool>(),
    ) {
        let mut pool = make_pool(SeedPolicy::PairedAmount);
        let mut ledger = make_ledger();
        let Ok(_) = pool.deposit(&mut ledger, trader(0), Amount::new(ra), Amount::new(rb)) else {
            panic!("seed failed");
        };
        let (ra0, rb0) = pool.reserves();
        let direction = if a_to_b { SwapDirection::AToB } else { SwapDirection::BToA };
        let Ok(_) = pool.swap_exact_in(&mut ledger, trader(1), direction, Amount::new(amount_in), Amount::ZERO) else {
            return Ok(());
        };
        let (ra1, rb1) = pool.reserves();
        let before = U256::from(ra0.get()) * U256::from(rb0.get());
        let after = U256::from(ra1.get()) * U256::from(rb1.get());
        prop_assert!(after > before, "product shrank: {} -> {}", before, after);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Share conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_share_sum_equals_supply(
        policy_geometric in any::<bool>(),
        ops in proptest::collection::vec(op_strategy(), 1..24),
    ) {
        let policy = if policy_geometric { SeedPolicy::GeometricMean } else { SeedPolicy::PairedAmount };
        let mut pool = make_pool(policy);
        let mut ledger = make_ledger();
        let Ok(_) = pool.deposit(
            &mut ledger,
            trader(0),
            Amount::new(1_000_000_000_000),
            Amount::new(500_000_000_000),
        ) else {
            panic!("seed failed");
        };
        for op in ops {
            let _ = match op {
                Op::Deposit(t, a) => pool
                    .deposit(&mut ledger, trader(t), Amount::new(a), Amount::new(FUNDING))
                    .map(|_| ()),
                Op::Withdraw(t, permille) => {
                    let held = pool.shares_of(&trader(t)).get();
                    pool.withdraw(&mut ledger, trader(t), Shares::new(held * permille / 1_000))
                        .map(|_| ())
                }
                Op::Swap(t, a_to_b, amount) => {
                    let direction = if a_to_b { SwapDirection::AToB } else { SwapDirection::BToA };
                    pool.swap_exact_in(&mut ledger, trader(t), direction, Amount::new(amount), Amount::ZERO)
                        .map(|_| ())
                }
            };
            prop_assert_eq!(share_sum(&pool), pool.total_shares().get());
            // Solvency: the ledger always covers the tracked reserves.
            let (ra, rb) = pool.reserves();
            prop_assert!(ledger.balance_of(&make_pair().asset_a(), &pool_account()) >= ra);
            prop_assert!(ledger.balance_of(&make_pair().asset_b(), &pool_account()) >= rb);
            // Shares and reserves vanish together.
            prop_assert_eq!(pool.total_shares().is_zero(), ra.is_zero() && rb.is_zero());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Empty pool rejection
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_empty_pool_rejects(amount in 1u128..u128::MAX / 2, shares in 1u128..u128::MAX) {
        let mut pool = make_pool(SeedPolicy::PairedAmount);
        let mut ledger = make_ledger();
        prop_assert_eq!(
            pool.swap_exact_in(&mut ledger, trader(0), SwapDirection::AToB, Amount::new(amount), Amount::ZERO),
            Err(AmmError::ZeroLiquidity)
        );
        prop_assert_eq!(
            pool.withdraw(&mut ledger, trader(0), Shares::new(shares)),
            Err(AmmError::InsufficientShares { requested: shares, available: 0 })
        );
    }
}
