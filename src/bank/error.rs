use crate::bank::operation::OperationRecord;
use crate::bank::Decimal;

/// Top-level error type for replaying operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Operation error: {0}")]
    Operation(#[from] OperationError),
}

/// Errors during `OperationRecord` -> `Operation` conversion (hard errors).
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(OperationRecord),
}

/// Which caller-supplied amount failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    InitialBalance,
    Deposit,
    Withdrawal,
}

impl std::fmt::Display for AmountField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmountField::InitialBalance => write!(f, "initial balance"),
            AmountField::Deposit => write!(f, "deposit amount"),
            AmountField::Withdrawal => write!(f, "withdrawal amount"),
        }
    }
}

/// Coarse category of an [`AccountError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    InsufficientFunds,
    BalanceOverflow,
    PrecisionLoss,
}

/// Account rule violations. The balance is never modified when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("{field} must be positive, got {amount}")]
    InvalidArgument { field: AmountField, amount: Decimal },

    #[error("insufficient funds: balance is {available}, requested {requested}")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },

    #[error("balance overflow: {balance} + {amount} exceeds the representable range")]
    BalanceOverflow { balance: Decimal, amount: Decimal },

    #[error("precision loss: applying {amount} to {balance} cannot be represented exactly")]
    PrecisionLoss { balance: Decimal, amount: Decimal },
}

impl AccountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            AccountError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            AccountError::BalanceOverflow { .. } => ErrorKind::BalanceOverflow,
            AccountError::PrecisionLoss { .. } => ErrorKind::PrecisionLoss,
        }
    }
}
