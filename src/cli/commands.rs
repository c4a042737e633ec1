use bank_account::Decimal;
pub(crate) use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bank-account",
    author,
    version,
    about = "Replay deposits and withdrawals against a single in-memory account",
    long_about = None,
    after_help = "OUTPUT:\n    The final balance is printed to stdout in CSV format, rounded to cents.\n\n    bank-account --initial-balance 10000.00 operations.csv"
)]
pub struct Args {
    /// Opening balance of the account, must be positive
    #[arg(long, value_name = "DECIMAL")]
    pub initial_balance: Decimal,

    /// Path to the operations CSV file
    #[arg(
        index = 1,
        value_name = "FILE",
        help = "Input CSV file with columns: type, amount"
    )]
    pub input_file: PathBuf,
}
