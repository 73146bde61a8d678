//! Bank transaction types
//!
//! This module defines a single manually-entered bank transaction and
//! its clearing status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{BankTransactionId, Currency, Money};
use crate::error::BookkeepingError;

/// Direction of a bank transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money received (rent, dividends)
    Income,
    /// Money paid out (fees, maintenance)
    Expense,
}

/// Clearing status against the bank statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearingStatus {
    Pending,
    Cleared,
    Reconciled,
}

impl ClearingStatus {
    /// Statuses only move forward; reconciled is final
    pub fn can_transition_to(self, target: ClearingStatus) -> bool {
        use ClearingStatus::*;
        matches!(
            (self, target),
            (Pending, Cleared) | (Pending, Reconciled) | (Cleared, Reconciled)
        )
    }
}

impl fmt::Display for ClearingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClearingStatus::Pending => "pending",
            ClearingStatus::Cleared => "cleared",
            ClearingStatus::Reconciled => "reconciled",
        };
        f.write_str(label)
    }
}

/// A bank transaction
///
/// `amount` is the gross amount; `gst` is the GST component included in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransaction {
    /// Unique identifier
    pub id: BankTransactionId,
    /// Value date
    pub date: NaiveDate,
    /// Free-text description
    pub description: String,
    /// Income or expense
    pub transaction_type: TransactionType,
    /// Gross amount (never negative)
    pub amount: Money,
    /// GST component (never negative)
    pub gst: Money,
    /// Reporting category, e.g. "Rental Income"
    pub category: String,
    /// Bank reference
    pub reference: Option<String>,
    /// Clearing status
    pub status: ClearingStatus,
}

impl BankTransaction {
    /// Creates a new pending transaction
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransaction` if the description is blank, the amount
    /// or GST is negative, GST exceeds the amount, or the two are in
    /// different currencies.
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        transaction_type: TransactionType,
        amount: Money,
        gst: Money,
        category: impl Into<String>,
    ) -> Result<Self, BookkeepingError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(BookkeepingError::InvalidTransaction(
                "description is required".to_string(),
            ));
        }
        if amount.is_negative() || gst.is_negative() {
            return Err(BookkeepingError::InvalidTransaction(
                "amount and GST must not be negative".to_string(),
            ));
        }
        if amount.currency() != gst.currency() {
            return Err(BookkeepingError::InvalidTransaction(format!(
                "amount in {} but GST in {}",
                amount.currency(),
                gst.currency()
            )));
        }
        if gst.amount() > amount.amount() {
            return Err(BookkeepingError::InvalidTransaction(format!(
                "GST {} exceeds amount {}",
                gst.amount(),
                amount.amount()
            )));
        }

        Ok(Self {
            id: BankTransactionId::new_v7(),
            date,
            description,
            transaction_type,
            amount,
            gst,
            category: category.into(),
            reference: None,
            status: ClearingStatus::Pending,
        })
    }

    /// Overrides the generated id (fixture data)
    pub fn with_id(mut self, id: BankTransactionId) -> Self {
        self.id = id;
        self
    }

    /// Sets the bank reference
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Sets the clearing status
    pub fn with_status(mut self, status: ClearingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn currency(&self) -> Currency {
        self.amount.currency()
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Amount signed by direction: income positive, expense negative
    pub fn signed_amount(&self) -> Money {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}
