mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise log per-image progress
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "dimfill=info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let report = dimfill::backfill::run(&cli.db_path)?;

    println!("\n{}", report);

    Ok(())
}
