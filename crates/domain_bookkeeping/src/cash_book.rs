//! Cash book of bank transactions
//!
//! # Invariants
//!
//! - Transactions are append-only; nothing is deleted
//! - Amount, GST and direction never change after recording
//! - Every transaction is in the book's currency

use core_kernel::{BankTransactionId, Currency, DateRange, Money};
use tracing::info;

use crate::bank_transaction::{BankTransaction, ClearingStatus};
use crate::error::BookkeepingError;

/// Append-only log of the trust's bank transactions
#[derive(Debug, Clone)]
pub struct CashBook {
    transactions: Vec<BankTransaction>,
    currency: Currency,
}

impl CashBook {
    /// Creates an empty cash book in the given currency
    pub fn new(currency: Currency) -> Self {
        Self {
            transactions: Vec::new(),
            currency,
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Records a transaction
    ///
    /// # Errors
    ///
    /// - `InvalidTransaction` if the transaction is in another currency
    /// - `DuplicateTransaction` if the id was already recorded
    /// - `Money` if the book's income, expense or GST totals would leave
    ///   the representable range
    pub fn record(&mut self, transaction: BankTransaction) -> Result<BankTransactionId, BookkeepingError> {
        if transaction.currency() != self.currency {
            return Err(BookkeepingError::InvalidTransaction(format!(
                "cash book is kept in {}, transaction is in {}",
                self.currency,
                transaction.currency()
            )));
        }
        if self.transactions.iter().any(|t| t.id == transaction.id) {
            return Err(BookkeepingError::DuplicateTransaction(transaction.id.to_string()));
        }
        self.check_totals(&transaction)?;

        let id = transaction.id;
        info!(
            transaction_id = %id,
            kind = ?transaction.transaction_type,
            amount = %transaction.amount.amount(),
            gst = %transaction.gst.amount(),
            "Bank transaction recorded"
        );
        self.transactions.push(transaction);
        Ok(id)
    }

    /// Totals stay summable once `transaction` is added
    fn check_totals(&self, transaction: &BankTransaction) -> Result<(), BookkeepingError> {
        let same_kind = self
            .transactions
            .iter()
            .filter(|t| t.transaction_type == transaction.transaction_type)
            .map(|t| &t.amount);
        Money::sum(same_kind.chain([&transaction.amount]), self.currency)?;

        let gst = self.transactions.iter().map(|t| &t.gst);
        Money::sum(gst.chain([&transaction.gst]), self.currency)?;
        Ok(())
    }

    /// Gets a transaction by ID
    pub fn get(&self, id: BankTransactionId) -> Result<&BankTransaction, BookkeepingError> {
        self.transactions
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| BookkeepingError::TransactionNotFound(id.to_string()))
    }

    /// All transactions in entry order
    pub fn transactions(&self) -> &[BankTransaction] {
        &self.transactions
    }

    /// Transactions whose date falls in the inclusive range, oldest first
    pub fn in_period(&self, period: Option<&DateRange>) -> Vec<&BankTransaction> {
        let mut selected: Vec<&BankTransaction> = self
            .transactions
            .iter()
            .filter(|t| period.map_or(true, |p| p.contains(t.date)))
            .collect();
        selected.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        selected
    }

    /// Moves a transaction's clearing status forward
    pub fn update_status(
        &mut self,
        id: BankTransactionId,
        status: ClearingStatus,
    ) -> Result<&BankTransaction, BookkeepingError> {
        let transaction = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| BookkeepingError::TransactionNotFound(id.to_string()))?;

        if !transaction.status.can_transition_to(status) {
            return Err(BookkeepingError::InvalidStatusChange {
                from: transaction.status.to_string(),
                to: status.to_string(),
            });
        }
        transaction.status = status;
        info!(transaction_id = %id, %status, "Bank transaction status updated");
        Ok(transaction)
    }
}
