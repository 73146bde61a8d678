//! Metrics errors

use thiserror::Error;

use core_kernel::MoneyError;

/// Errors raised while aggregating
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A holding or input references a unit class that was not supplied
    #[error("Unknown unit class: {0}")]
    UnknownUnitClass(String),

    #[error(transparent)]
    Money(#[from] MoneyError),
}
