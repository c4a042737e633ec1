use super::error::{AccountError, AmountField};
use super::Decimal;
use rust_decimal::RoundingStrategy;
use serde::{Serialize, Serializer};

/// Decimal places used when reporting a balance.
const REPORTED_SCALE: u32 = 2;

/// Serialize the reported balance with exactly 2 decimal places
fn serialize_balance_2dp<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", round_half_up(*value)))
}

fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(REPORTED_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// A single bank account holding a non-negative balance.
///
/// The balance is tracked exactly; rounding to cents only happens when it is
/// reported. Every operation either applies fully or leaves the balance as it was.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Account {
    #[serde(serialize_with = "serialize_balance_2dp")]
    balance: Decimal,
}

impl Account {
    /// Open an account with a strictly positive initial balance.
    /// The value is stored exactly as given.
    pub fn new(initial_balance: Decimal) -> Result<Self, AccountError> {
        ensure_positive(AmountField::InitialBalance, initial_balance)?;
        Ok(Self {
            balance: initial_balance,
        })
    }

    /// Returns the balance rounded half-up to 2 decimal places
    pub fn balance(&self) -> Decimal {
        round_half_up(self.balance)
    }

    /// Returns the tracked balance without rounding
    pub fn exact_balance(&self) -> Decimal {
        self.balance
    }

    /// Credit the account.
    ///
    /// Fails with `BalanceOverflow` past `Decimal::MAX` and with `PrecisionLoss`
    /// when the sum needs more significant digits than `Decimal` holds.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        ensure_positive(AmountField::Deposit, amount)?;
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        // Decimal rounds instead of failing when the scale has to shrink
        if balance.checked_sub(self.balance) != Some(amount) {
            return Err(self.precision_loss(amount));
        }
        self.balance = balance.normalize();
        debug_assert!(self.balance >= Decimal::ZERO);
        Ok(())
    }

    /// Debit the account. The amount may equal but never exceed the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        ensure_positive(AmountField::Withdrawal, amount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }
        let balance = self.balance - amount;
        if self.balance.checked_sub(balance) != Some(amount) {
            return Err(self.precision_loss(amount));
        }
        self.balance = balance.normalize();
        debug_assert!(self.balance >= Decimal::ZERO);
        Ok(())
    }

    fn precision_loss(&self, amount: Decimal) -> AccountError {
        AccountError::PrecisionLoss {
            balance: self.balance,
            amount,
        }
    }
}

fn ensure_positive(field: AmountField, amount: Decimal) -> Result<(), AccountError> {
    if amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(AccountError::InvalidArgument { field, amount })
    }
}
