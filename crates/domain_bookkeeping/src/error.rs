//! Bookkeeping domain errors

use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the bookkeeping domain
#[derive(Debug, Error)]
pub enum BookkeepingError {
    /// Transaction not found
    #[error("Bank transaction not found: {0}")]
    TransactionNotFound(String),

    /// Transaction id already recorded
    #[error("Bank transaction already recorded: {0}")]
    DuplicateTransaction(String),

    /// Invalid entry
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    /// Illegal clearing status change
    #[error("Invalid status change from {from} to {to}")]
    InvalidStatusChange { from: String, to: String },

    /// Money arithmetic failure
    #[error(transparent)]
    Money(#[from] MoneyError),
}
