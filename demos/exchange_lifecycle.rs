//! Exchange lifecycle example.
//!
//! Seeds a TOKEN/ETH pool, buys and sells TOKEN against ETH, borrows
//! through a flash swap, and redeems all liquidity.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=pair_swap=info cargo run --example exchange_lifecycle
//! ```

use pair_swap::prelude::*;
use tracing_subscriber::EnvFilter;

const E18: u128 = 1_000_000_000_000_000_000;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Constant Product Exchange (x · y = k) ===\n");

    // ── 1. Assets, accounts, and a 1% pool ──────────────────────────────
    let token = AssetId::from_bytes([1u8; 32]);
    let eth = AssetId::from_bytes([2u8; 32]);
    let pool_account = AccountId::from_bytes([0x77; 32]);
    let provider = AccountId::from_bytes([0xa1; 32]);
    let trader = AccountId::from_bytes([0xb0; 32]);

    let mut factory = PoolFactory::new();
    let pool = factory.create_pool_for(token, eth, pool_account)?;
    let Some(pair) = factory.pair_of(&pool_account) else {
        return Err("pool not registered".into());
    };
    println!("Pool {pair} at {pool_account}");

    // ── 2. Fund both participants and approve the pool ──────────────────
    let mut ledger = InMemoryLedger::new();
    for account in [provider, trader] {
        for asset in [token, eth] {
            ledger.mint(&asset, &account, Amount::new(1_000 * E18))?;
            ledger.approve(&asset, &account, &pool_account, Amount::new(1_000 * E18));
        }
    }

    // ── 3. Seed 200 TOKEN / 100 ETH ─────────────────────────────────────
    let seeded = pool.deposit(
        &mut ledger,
        provider,
        Amount::new(200 * E18),
        Amount::new(100 * E18),
    )?;
    println!("\n--- Seed ---");
    println!("  Shares minted: {}", seeded.shares);
    let (reserve_a, reserve_b) = pool.reserves()?;
    println!("  Reserves:      {reserve_a} TOKEN / {reserve_b} ETH");

    // ── 4. Buy TOKEN with 10 ETH ────────────────────────────────────────
    let quoted = pool.with(|p| p.quote_output(SwapDirection::BToA, Amount::new(10 * E18)))?;
    let bought = pool.swap_exact_in(
        &mut ledger,
        trader,
        SwapDirection::BToA,
        Amount::new(10 * E18),
        quoted,
    )?;
    println!("\n--- Buy ---\n  {bought}");

    // ── 5. Sell the TOKEN back ──────────────────────────────────────────
    let sold = pool.swap_exact_in(
        &mut ledger,
        trader,
        SwapDirection::AToB,
        bought.amount_out(),
        Amount::new(1),
    )?;
    println!("\n--- Sell ---\n  {sold}");
    println!(
        "  Round trip cost: {} ETH",
        Amount::new(10 * E18).saturating_sub(&sold.amount_out())
    );

    // ── 6. Flash-borrow 1 TOKEN, repay in ETH ───────────────────────────
    let needed = pool.with(|p| p.quote_input(SwapDirection::BToA, Amount::new(E18)))?;
    let mut repay = |ledger: &mut InMemoryLedger,
                     sender: &AccountId,
                     _: Amount,
                     _: Amount,
                     _: &[u8]|
     -> Result<()> {
        ledger.transfer(&eth, sender, &pool_account, needed)?;
        Ok(())
    };
    let flash = pool.swap(
        &mut ledger,
        Amount::new(E18),
        Amount::ZERO,
        trader,
        Some(&mut repay),
        b"",
    )?;
    println!(
        "\n--- Flash swap ---\n  Borrowed {} TOKEN, repaid {} ETH",
        flash.amount_a_out, flash.amount_b_in
    );

    // ── 7. Redeem all liquidity ─────────────────────────────────────────
    let redeemed = pool.withdraw(&mut ledger, provider, seeded.shares)?;
    println!("\n--- Withdraw ---");
    println!("  TOKEN out: {}", redeemed.amount_a);
    println!("  ETH out:   {}", redeemed.amount_b);
    println!("  Shares left: {}", pool.total_shares()?);

    for event in pool.with(|p| Ok(p.take_events()))? {
        println!("  event: {event}");
    }

    println!("\n=== Done ===");
    Ok(())
}
