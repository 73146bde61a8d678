//! Request aggregate
//!
//! Four request kinds share one lifecycle. The kind-specific payload is
//! a snapshot taken at submission: unit prices and estimates do not move
//! when the unit class is later repriced.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{InvestorId, Money, MoneyError, RequestId, UnitClassId};
use crate::error::RequestError;

/// Request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting an admin decision
    Pending,
    /// Approved; downstream effects applied
    Approved,
    /// Rejected; nothing applied
    Rejected,
}

impl RequestStatus {
    /// Both resolutions are terminal
    pub fn can_transition_to(self, target: RequestStatus) -> bool {
        use RequestStatus::*;
        matches!((self, target), (Pending, Approved) | (Pending, Rejected))
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

impl FromStr for RequestStatus {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            other => Err(RequestError::validation(format!("unknown request status: {other}"))),
        }
    }
}

/// Request kind, used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Purchase,
    Redemption,
    Transfer,
    SharesPurchase,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestKind::Purchase => "purchase",
            RequestKind::Redemption => "redemption",
            RequestKind::Transfer => "transfer",
            RequestKind::SharesPurchase => "shares_purchase",
        };
        f.write_str(label)
    }
}

impl FromStr for RequestKind {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "purchase" => Ok(RequestKind::Purchase),
            "redemption" => Ok(RequestKind::Redemption),
            "transfer" => Ok(RequestKind::Transfer),
            "shares_purchase" | "shares" => Ok(RequestKind::SharesPurchase),
            other => Err(RequestError::validation(format!("unknown request kind: {other}"))),
        }
    }
}

/// Unit purchase snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDetails {
    pub investor_id: InvestorId,
    pub unit_class_id: UnitClassId,
    /// Investment amount, excluding fees
    pub amount: Money,
    /// Application fee
    pub fees: Money,
    /// Unit price at submission
    pub unit_price: Decimal,
    /// Whole units the amount buys at `unit_price`
    pub estimated_units: u64,
}

impl PurchaseDetails {
    /// Amount plus fees
    pub fn total_amount(&self) -> Result<Money, MoneyError> {
        self.amount.checked_add(&self.fees)
    }
}

/// Unit redemption snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionDetails {
    pub investor_id: InvestorId,
    pub unit_class_id: UnitClassId,
    pub units: Decimal,
    pub unit_price: Decimal,
    /// Units times unit price
    pub estimated_value: Money,
}

/// Unit transfer snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferDetails {
    pub from_investor_id: InvestorId,
    pub to_investor_id: InvestorId,
    pub unit_class_id: UnitClassId,
    pub units: Decimal,
    pub unit_price: Decimal,
    pub estimated_value: Money,
}

/// Listed shares purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharesPurchaseDetails {
    pub investor_id: InvestorId,
    /// Upper-case ticker, e.g. "CBA"
    pub symbol: String,
    pub quantity: Decimal,
    /// Expected price per share
    pub estimated_price: Money,
    /// Quantity times estimated price
    pub total_amount: Money,
}

/// Kind-specific payload of a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestDetails {
    Purchase(PurchaseDetails),
    Redemption(RedemptionDetails),
    Transfer(TransferDetails),
    SharesPurchase(SharesPurchaseDetails),
}

impl RequestDetails {
    pub fn kind(&self) -> RequestKind {
        match self {
            RequestDetails::Purchase(_) => RequestKind::Purchase,
            RequestDetails::Redemption(_) => RequestKind::Redemption,
            RequestDetails::Transfer(_) => RequestKind::Transfer,
            RequestDetails::SharesPurchase(_) => RequestKind::SharesPurchase,
        }
    }

    /// Investors the request touches, source first
    pub fn investor_ids(&self) -> Vec<InvestorId> {
        match self {
            RequestDetails::Purchase(d) => vec![d.investor_id],
            RequestDetails::Redemption(d) => vec![d.investor_id],
            RequestDetails::Transfer(d) => vec![d.from_investor_id, d.to_investor_id],
            RequestDetails::SharesPurchase(d) => vec![d.investor_id],
        }
    }
}

/// A request awaiting or past admin approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Unique identifier
    pub id: RequestId,
    /// Kind-specific payload
    pub details: RequestDetails,
    /// Lifecycle status
    pub status: RequestStatus,
    /// Free-text notes from the submitter
    pub notes: Option<String>,
    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
    /// Resolution timestamp (approval or rejection)
    pub approved_at: Option<DateTime<Utc>>,
    /// Resolving admin
    pub approved_by: Option<String>,
}

impl Request {
    /// Creates a pending request submitted now
    pub fn pending(details: RequestDetails, notes: Option<String>) -> Self {
        Self {
            id: RequestId::new_v7(),
            details,
            status: RequestStatus::Pending,
            notes,
            submitted_at: Utc::now(),
            approved_at: None,
            approved_by: None,
        }
    }

    /// Overrides the id (fixture data)
    pub fn with_id(mut self, id: RequestId) -> Self {
        self.id = id;
        self
    }

    /// Overrides the submission time (fixture data)
    pub fn submitted(mut self, at: DateTime<Utc>) -> Self {
        self.submitted_at = at;
        self
    }

    pub fn kind(&self) -> RequestKind {
        self.details.kind()
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Checks the transition guard without changing anything
    pub fn ensure_can_transition(&self, target: RequestStatus) -> Result<(), RequestError> {
        if self.status.can_transition_to(target) {
            Ok(())
        } else {
            Err(RequestError::InvalidTransition {
                id: self.id.to_string(),
                from: self.status.to_string(),
                to: target.to_string(),
            })
        }
    }

    /// Resolves the request, recording who resolved it and when
    pub fn resolve(
        &mut self,
        status: RequestStatus,
        actor: &str,
        at: DateTime<Utc>,
    ) -> Result<(), RequestError> {
        self.ensure_can_transition(status)?;
        self.status = status;
        self.approved_at = Some(at);
        self.approved_by = Some(actor.to_string());
        Ok(())
    }
}
