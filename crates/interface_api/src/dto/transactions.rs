//! Bank transaction DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use core_kernel::{Currency, Money};
use domain_bookkeeping::{BankTransaction, ClearingStatus, TransactionType};

use crate::error::ApiError;

/// Manual bank transaction entry; amounts are in the trust's currency
#[derive(Debug, Deserialize, Validate)]
pub struct RecordTransactionRequest {
    pub date: NaiveDate,
    #[validate(length(min = 1, max = 200, message = "description is required"))]
    pub description: String,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    #[serde(default)]
    pub gst: Decimal,
    #[validate(length(min = 1, max = 100, message = "category is required"))]
    pub category: String,
    pub reference: Option<String>,
}

impl RecordTransactionRequest {
    pub fn into_transaction(self, currency: Currency) -> Result<BankTransaction, ApiError> {
        let transaction = BankTransaction::new(
            self.date,
            self.description,
            self.transaction_type,
            Money::new(self.amount, currency),
            Money::new(self.gst, currency),
            self.category,
        )?;
        Ok(match self.reference {
            Some(reference) if !reference.trim().is_empty() => transaction.with_reference(reference),
            _ => transaction,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTransactionStatusRequest {
    pub status: ClearingStatus,
}
