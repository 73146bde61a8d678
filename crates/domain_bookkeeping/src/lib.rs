//! Bookkeeping Domain - Bank Transaction Cash Book
//!
//! This crate records the trust's bank transactions as entered by an
//! administrator. Each transaction is either income or an expense and
//! carries the GST component included in its amount.
//!
//! Transactions are never deleted and their amounts are never edited;
//! only the clearing status moves forward as the bank statement is
//! reconciled:
//!
//! ```text
//! Pending -> Cleared -> Reconciled
//! ```

pub mod bank_transaction;
pub mod cash_book;
pub mod error;

pub use bank_transaction::{BankTransaction, ClearingStatus, TransactionType};
pub use cash_book::CashBook;
pub use error::BookkeepingError;
