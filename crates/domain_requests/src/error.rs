//! Request ledger errors

use thiserror::Error;

use core_kernel::MoneyError;
use domain_registry::RegistryError;

/// Errors that can occur in the request ledger
///
/// Every failure is one of three kinds the boundary reports to users.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The draft or approval breaks a business rule
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A request, investor or unit class does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request has already been resolved
    #[error("Invalid status transition for request {id} from {from} to {to}")]
    InvalidTransition { id: String, from: String, to: String },
}

impl RequestError {
    pub fn validation(message: impl Into<String>) -> Self {
        RequestError::Validation(message.into())
    }
}

impl From<RegistryError> for RequestError {
    fn from(err: RegistryError) -> Self {
        if err.is_not_found() {
            RequestError::NotFound(err.to_string())
        } else {
            RequestError::Validation(err.to_string())
        }
    }
}

impl From<MoneyError> for RequestError {
    fn from(err: MoneyError) -> Self {
        RequestError::Validation(err.to_string())
    }
}
