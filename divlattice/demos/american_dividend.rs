//! Price the reference American call on a dividend-paying stock.
//!
//! ```text
//! RUST_LOG=debug cargo run -p divlattice --example american_dividend
//! ```

use divlattice::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let contract = ContractSpec::with_dividends(
        OptionType::Call,
        100.0,
        100.0,
        1.0,
        0.25,
        0.04,
        [(2.0, 0.75)],
    )?;
    println!("\n{contract}");

    let config = LatticeConfig::new(1000);
    info!(steps = config.steps, "pricing");
    let value = LatticePricer::new(&contract, config).price()?;
    println!("\nEstimated contract value: {value}");

    Ok(())
}
