//! Bank account module.
//!
//! This module contains:
//! - `Account` - The single account entity and its balance rules
//! - `Operation` types - Deposit and Withdrawal as parsed from a replay script
//! - `Teller` - Applies operations to an owned account
//! - `Error` types - Account rule violations and replay errors

mod account;
mod error;
mod operation;
mod teller;

pub use rust_decimal::Decimal;

pub use account::Account;
pub use error::{AccountError, AmountField, Error, ErrorKind, OperationError};
pub use operation::{Operation, OperationRecord, OperationType};
pub use teller::{ReplaySummary, Teller};
