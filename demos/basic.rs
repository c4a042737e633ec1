//! Basic example of driving an `Account` through a `Teller`.
//!
//! Run with: `cargo run --example basic`

use bank_account::{Account, Teller};
use rust_decimal_macros::dec;
use std::io::Cursor;

fn main() {
    // Initialize logger (optional, but shows skipped operations)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let operations = r"type,amount
deposit,500.00
withdrawal,200.00
deposit,1500.75
withdrawal,300.50
deposit,100.25
withdrawal,200000.90
";

    let account = Account::new(dec!(10000.00)).expect("Initial balance is positive");
    let mut teller = Teller::new(account);
    teller
        .process_operations(Cursor::new(operations))
        .expect("Failed to process operations");

    println!("\n=== Final Balance ===");
    teller
        .export_balance(std::io::stdout())
        .expect("Failed to export balance");
}
