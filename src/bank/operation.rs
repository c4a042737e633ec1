use super::Decimal;
use crate::bank::error::OperationError;
use serde::Deserialize;

/// Raw operation record as parsed from CSV input.
/// The amount is only checked for presence here; the account enforces its sign.
#[derive(Debug, Deserialize, Clone)]
pub struct OperationRecord {
    #[serde(rename = "type")]
    pub op_type: OperationType,
    pub amount: Option<Decimal>,
}

impl std::fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.amount {
            Some(amount) => write!(f, "{} (amount: {})", self.op_type, amount),
            None => write!(f, "{} (no amount)", self.op_type),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Deposit,
    Withdrawal,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationType::Deposit => write!(f, "deposit"),
            OperationType::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// An operation ready to be applied to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit(Decimal),
    Withdrawal(Decimal),
}

impl TryFrom<OperationRecord> for Operation {
    type Error = OperationError;

    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        match record {
            OperationRecord {
                op_type: OperationType::Deposit,
                amount: Some(amount),
            } => Ok(Operation::Deposit(amount)),
            OperationRecord {
                op_type: OperationType::Withdrawal,
                amount: Some(amount),
            } => Ok(Operation::Withdrawal(amount)),
            OperationRecord { amount: None, .. } => Err(OperationError::InvalidOperation(record)),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Deposit(amount) => write!(f, "[deposit] amount={amount}"),
            Operation::Withdrawal(amount) => write!(f, "[withdrawal] amount={amount}"),
        }
    }
}
