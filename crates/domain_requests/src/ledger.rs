//! The request ledger
//!
//! Owns every request and is the only writer of request status.
//!
//! # Invariants
//!
//! - Request ids are unique
//! - Only pending requests can be approved or rejected
//! - An approval's registry effects and its status change land together

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use core_kernel::{InvestorId, RequestId};
use domain_registry::Registry;

use crate::draft::RequestDraft;
use crate::error::RequestError;
use crate::request::{Request, RequestKind, RequestStatus};
use crate::settlement::settle;

/// Optional filters for listing requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFilter {
    pub kind: Option<RequestKind>,
    pub status: Option<RequestStatus>,
    /// Matches either side of a transfer
    pub investor_id: Option<InvestorId>,
}

impl RequestFilter {
    pub fn matches(&self, request: &Request) -> bool {
        self.kind.map_or(true, |k| request.kind() == k)
            && self.status.map_or(true, |s| request.status == s)
            && self
                .investor_id
                .map_or(true, |id| request.details.investor_ids().contains(&id))
    }
}

/// Store of submitted requests
#[derive(Debug, Clone, Default)]
pub struct RequestLedger {
    requests: Vec<Request>,
}

impl RequestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a draft and records it as pending
    ///
    /// The ledger is untouched when validation fails.
    pub fn submit(&mut self, draft: &RequestDraft, registry: &Registry) -> Result<Request, RequestError> {
        let details = draft.prepare(registry)?;
        let request = Request::pending(details, draft.notes());

        info!(
            request_id = %request.id,
            kind = %request.kind(),
            "Request submitted"
        );
        self.requests.push(request.clone());
        Ok(request)
    }

    /// Approves a pending request and applies its registry effects
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is unknown
    /// - `InvalidTransition` if the request is no longer pending
    /// - `Validation` if the actor is blank or the effects cannot be
    ///   applied; the request then stays pending
    pub fn approve(
        &mut self,
        id: RequestId,
        actor: &str,
        registry: &mut Registry,
    ) -> Result<Request, RequestError> {
        let actor = require_actor(actor)?;
        let index = self.index_of(id)?;
        self.requests[index].ensure_can_transition(RequestStatus::Approved)?;

        let settlement = match settle(&self.requests[index].details, registry) {
            Ok(settlement) => settlement,
            Err(err) => {
                warn!(request_id = %id, error = %err, "Approval refused");
                return Err(err);
            }
        };
        if !settlement.is_empty() {
            registry.commit(settlement.unit_classes, settlement.investors)?;
        }

        let request = &mut self.requests[index];
        request.resolve(RequestStatus::Approved, actor, Utc::now())?;
        info!(request_id = %id, kind = %request.kind(), approved_by = actor, "Request approved");
        Ok(request.clone())
    }

    /// Rejects a pending request; nothing else changes
    pub fn reject(&mut self, id: RequestId, actor: &str) -> Result<Request, RequestError> {
        let actor = require_actor(actor)?;
        let index = self.index_of(id)?;

        let request = &mut self.requests[index];
        request.resolve(RequestStatus::Rejected, actor, Utc::now())?;
        info!(request_id = %id, kind = %request.kind(), rejected_by = actor, "Request rejected");
        Ok(request.clone())
    }

    /// Pending requests of every kind, oldest submission first
    pub fn list_pending(&self) -> Vec<&Request> {
        let mut pending: Vec<&Request> = self.requests.iter().filter(|r| r.is_pending()).collect();
        pending.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at).then_with(|| a.id.cmp(&b.id)));
        pending
    }

    pub fn pending_count(&self) -> usize {
        self.requests.iter().filter(|r| r.is_pending()).count()
    }

    pub fn get(&self, id: RequestId) -> Result<&Request, RequestError> {
        self.requests
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RequestError::NotFound(format!("request {id}")))
    }

    /// Requests matching the filter, in submission order
    pub fn list(&self, filter: &RequestFilter) -> Vec<&Request> {
        let mut matching: Vec<&Request> = self.requests.iter().filter(|r| filter.matches(r)).collect();
        matching.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at).then_with(|| a.id.cmp(&b.id)));
        matching
    }

    /// Loads a historical request as-is, without registry effects
    pub fn restore(&mut self, request: Request) -> Result<(), RequestError> {
        if self.requests.iter().any(|r| r.id == request.id) {
            return Err(RequestError::validation(format!(
                "request {} already exists",
                request.id
            )));
        }
        if request.is_pending() != request.approved_at.is_none() {
            return Err(RequestError::validation(format!(
                "request {} must carry a resolution time exactly when resolved",
                request.id
            )));
        }
        self.requests.push(request);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn index_of(&self, id: RequestId) -> Result<usize, RequestError> {
        self.requests
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| RequestError::NotFound(format!("request {id}")))
    }
}

fn require_actor(actor: &str) -> Result<&str, RequestError> {
    let actor = actor.trim();
    if actor.is_empty() {
        return Err(RequestError::validation("approver identity is required"));
    }
    Ok(actor)
}
