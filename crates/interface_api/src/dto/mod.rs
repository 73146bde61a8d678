//! Request/response data transfer objects

pub mod registry;
pub mod transactions;
pub mod requests;
pub mod metrics;
pub mod statements;

use chrono::NaiveDate;
use serde::Deserialize;

use core_kernel::DateRange;

use crate::error::ApiError;

/// Optional `from`/`to` query or body pair
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PeriodQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl PeriodQuery {
    /// Both bounds or neither
    pub fn to_range(&self) -> Result<Option<DateRange>, ApiError> {
        match (self.from, self.to) {
            (None, None) => Ok(None),
            (Some(from), Some(to)) => Ok(Some(DateRange::new(from, to)?)),
            _ => Err(ApiError::BadRequest(
                "from and to must be given together".to_string(),
            )),
        }
    }
}
