//! Registry domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the registry domain
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unit class not found: {0}")]
    UnitClassNotFound(String),

    #[error("Investor not found: {0}")]
    InvestorNotFound(String),

    #[error("An investor with email {0} already exists")]
    DuplicateEmail(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Insufficient units: requested {requested}, available {available}")]
    InsufficientUnits {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Invalid unit class: {0}")]
    InvalidUnitClass(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl RegistryError {
    /// True for the lookup failures callers surface as "not found"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::UnitClassNotFound(_) | RegistryError::InvestorNotFound(_)
        )
    }
}
