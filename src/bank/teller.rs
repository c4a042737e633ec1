use std::io::{Read, Write};

use super::account::Account;
use super::error::{AccountError, Error};
use super::operation::{Operation, OperationRecord};

/// Counts produced by a replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: u64,
    pub skipped: u64,
}

/// Applies deposits and withdrawals to the single account it owns.
#[derive(Debug)]
pub struct Teller {
    account: Account,
}

impl Teller {
    pub fn new(account: Account) -> Self {
        log::trace!("Teller initialized with balance {}", account.balance());
        Self { account }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn into_account(self) -> Account {
        self.account
    }

    /// Apply a single operation to the account.
    pub fn apply(&mut self, operation: Operation) -> Result<(), AccountError> {
        log::trace!("Applying operation: {operation}");
        match operation {
            Operation::Deposit(amount) => self.account.deposit(amount)?,
            Operation::Withdrawal(amount) => self.account.withdraw(amount)?,
        }
        log::trace!(
            "{operation} -> new_balance={}",
            self.account.exact_balance()
        );
        Ok(())
    }

    /// Primary API: Replay operations from any source (File, `TcpStream`, etc.)
    /// Rows the account rejects are skipped; malformed rows abort the replay.
    /// On abort the rows before the malformed one stay applied to the account
    /// and no `ReplaySummary` is returned.
    /// The CSV reader is buffered, so `reader` should not be wrapped in `io::BufReader`.
    pub fn process_operations<R: Read>(&mut self, reader: R) -> Result<ReplaySummary, Error> {
        log::info!("Starting operation replay");

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut summary = ReplaySummary::default();

        for result in csv_reader.deserialize() {
            let record: OperationRecord = result?;

            let row_num = summary.applied + summary.skipped + 1;
            log::trace!(
                "[row {}] Parsing: type={:?} amount={:?}",
                row_num,
                record.op_type,
                record.amount
            );

            let operation = Operation::try_from(record)?;

            if let Err(e) = self.apply(operation) {
                log::warn!("[row {row_num}] - Skipped: {e}");
                summary.skipped += 1;
            } else {
                summary.applied += 1;
            }
        }

        log::info!(
            "Replay complete: {} applied, {} skipped, balance {}",
            summary.applied,
            summary.skipped,
            self.account.balance()
        );
        Ok(summary)
    }

    /// Secondary API: Write the reported balance to any sink as CSV.
    pub fn export_balance<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.serialize(&self.account)?;
        csv_writer.flush()?;

        log::trace!("Export complete");
        Ok(())
    }
}
