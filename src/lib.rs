//! A minimal in-memory bank account.
//!
//! The [`Account`] keeps a non-negative balance with exact decimal arithmetic
//! and reports it rounded half-up to cents. A [`Teller`] replays a CSV script
//! of deposits and withdrawals against one account.

mod bank;

pub use bank::{
    Account, AccountError, AmountField, Decimal, Error, ErrorKind, Operation, OperationError,
    OperationRecord, OperationType, ReplaySummary, Teller,
};
