//! Statement errors

use thiserror::Error;

use core_kernel::MoneyError;
use domain_metrics::MetricsError;

#[derive(Debug, Error)]
pub enum StatementError {
    /// The inputs do not fit the requested statement
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error(transparent)]
    Money(#[from] MoneyError),
}
