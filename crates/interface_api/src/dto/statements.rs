//! Statement DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{InvestorId, RequestId};
use domain_statements::{Statement, StatementKind};

use super::PeriodQuery;

#[derive(Debug, Deserialize)]
pub struct StatementRequest {
    pub kind: StatementKind,
    /// Portfolio statements
    pub investor_id: Option<InvestorId>,
    /// Purchase statements
    pub request_id: Option<RequestId>,
    /// BAS (required) and transaction history (optional)
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl StatementRequest {
    pub fn period(&self) -> PeriodQuery {
        PeriodQuery {
            from: self.from,
            to: self.to,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatementResponse {
    #[serde(flatten)]
    pub statement: Statement,
    /// Plain-text rendering of the same lines
    pub text: String,
}
