//! order-swap - Binary Entry Point
//!
//! Runs one create/fulfil round against in-memory tokens and logs the
//! resulting balances and state root.
//!
//! ```bash
//! RUST_LOG=debug cargo run -- swap.toml
//! ```

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

use order_swap::types::units::{format_units, parse_units};
use order_swap::{Address, Erc20Token, InMemoryLedger, OrderParams, OrderSwap, SwapConfig, TokenLedger};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,order_swap=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("swap.toml"));
    let config = SwapConfig::load_or_default(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let decimals = config.display_decimals;

    // Accounts
    let owner = Address::derive(b"owner");
    let filler = Address::derive(b"filler");
    let swap_address = Address::derive(b"order-swap");

    // Tokens
    let mut ledger = InMemoryLedger::new();
    let mtk = ledger.deploy(Address::derive(b"MTK"), Erc20Token::new("Mock20Token", "MTK", decimals));
    let lw3 = ledger.deploy(Address::derive(b"LW3"), Erc20Token::new("LW3Token", "LW3", decimals));

    let supply = parse_units("1000", decimals).context("supply out of range")?;
    let sell_amount = parse_units("1", decimals).context("sell amount out of range")?;
    let buy_amount = parse_units("2.5", decimals).context("buy amount out of range")?;

    ledger.mint(mtk, owner, supply)?;
    ledger.mint(lw3, filler, supply)?;

    let mut swap = OrderSwap::with_config(swap_address, owner, &config);

    // Maker side
    ledger.approve(mtk, owner, swap.address(), sell_amount)?;
    let id = swap.create_order(&ledger, owner, OrderParams::new(mtk, lw3, sell_amount, buy_amount))?;

    // Filler side
    ledger.approve(lw3, filler, swap.address(), buy_amount)?;
    swap.fulfill_order(&mut ledger, filler, id)?;

    let order = swap.orders(id)?;
    tracing::info!(order_id = order.id, fulfilled = order.fulfilled, "settled");

    for (label, account) in [("owner", owner), ("filler", filler)] {
        for token in [mtk, lw3] {
            let balance = ledger.balance_of(token, account)?;
            let symbol = ledger.erc20(token).map(|t| t.symbol()).unwrap_or("?");
            tracing::info!(
                "{label:>6} {symbol}: {}",
                format_units(balance, decimals).unwrap_or_else(|| balance.to_string())
            );
        }
    }

    for event in swap.events() {
        tracing::info!(event = event.name(), order_id = event.order_id(), "emitted");
    }

    tracing::info!(
        orders = swap.order_count(),
        state_root = %swap.store().state_root_hex()?,
        "done"
    );

    Ok(())
}
