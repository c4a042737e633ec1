mod commands;

use anyhow::{Context, Result};
use bank_account::{Account, Teller};
use clap::Parser;
use commands::Args;

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of info (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Open the account
    let account = Account::new(args.initial_balance).context("Failed to open account")?;
    let mut teller = Teller::new(account);

    // 2. Open and replay the input file
    log::info!("Replaying operations from {}", args.input_file.display());
    let file = std::fs::File::open(&args.input_file)
        .with_context(|| format!("Failed to open input file: {}", args.input_file.display()))?;

    let summary = teller
        .process_operations(file)
        .context("Failed to process operations")?;

    log::info!(
        "Replay finished with {} applied and {} skipped operations",
        summary.applied,
        summary.skipped
    );

    // 3. Export the balance to stdout
    teller
        .export_balance(std::io::stdout())
        .context("Failed to export balance to stdout")?;

    Ok(())
}
