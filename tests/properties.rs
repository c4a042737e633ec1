//! Property tests for the account balance rules.
use bank_account::{Account, Decimal, ErrorKind};
use proptest::prelude::*;
use rust_decimal::RoundingStrategy;

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Strictly positive amounts with up to 6 decimal places
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000_000, 0u32..=6).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Zero or negative amounts
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000, 0u32..=6).prop_map(|(units, scale)| -Decimal::new(units, scale))
}

proptest! {
    #[test]
    fn construct_reports_rounded_initial_balance(x in positive_amount()) {
        let account = Account::new(x).unwrap();
        prop_assert_eq!(account.balance(), round_cents(x));
        prop_assert_eq!(account.exact_balance(), x);
    }

    #[test]
    fn construct_rejects_non_positive(x in non_positive_amount()) {
        let err = Account::new(x).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn deposit_adds_exactly(x in positive_amount(), d in positive_amount()) {
        let mut account = Account::new(x).unwrap();
        account.deposit(d).unwrap();
        prop_assert_eq!(account.exact_balance(), x + d);
        prop_assert_eq!(account.balance(), round_cents(x + d));
    }

    #[test]
    fn deposit_rejects_non_positive(x in positive_amount(), d in non_positive_amount()) {
        let mut account = Account::new(x).unwrap();
        let err = account.deposit(d).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        prop_assert_eq!(account.exact_balance(), x);
    }

    #[test]
    fn withdraw_within_balance_subtracts_exactly(x in positive_amount(), w in positive_amount()) {
        let (balance, amount) = if w <= x { (x, w) } else { (w, x) };
        let mut account = Account::new(balance).unwrap();
        account.withdraw(amount).unwrap();
        prop_assert_eq!(account.exact_balance(), balance - amount);
        prop_assert!(account.exact_balance() >= Decimal::ZERO);
    }

    #[test]
    fn withdraw_over_balance_is_insufficient_funds(x in positive_amount(), extra in positive_amount()) {
        let mut account = Account::new(x).unwrap();
        let err = account.withdraw(x + extra).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InsufficientFunds);
        prop_assert_eq!(account.exact_balance(), x);
    }

    #[test]
    fn withdraw_rejects_non_positive(x in positive_amount(), w in non_positive_amount()) {
        let mut account = Account::new(x).unwrap();
        let err = account.withdraw(w).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        prop_assert_eq!(account.exact_balance(), x);
    }

    #[test]
    fn withdraw_full_balance_leaves_zero(x in positive_amount()) {
        let mut account = Account::new(x).unwrap();
        account.withdraw(x).unwrap();
        prop_assert_eq!(account.balance(), Decimal::ZERO);
    }
}
