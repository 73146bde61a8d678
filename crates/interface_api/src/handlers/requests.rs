//! Request ledger handlers
//!
//! Submissions, approvals and rejections hold the store's write lock for
//! the whole operation.

use axum::{extract::{Path, State}, http::StatusCode, Json};
use uuid::Uuid;

use core_kernel::RequestId;
use domain_requests::{Request, RequestDraft, RequestFilter};

use crate::{AppState, error::ApiError};
use crate::dto::requests::*;
use crate::extract::{ApiQuery, ValidatedJson};

async fn submit(state: &AppState, draft: RequestDraft) -> Result<(StatusCode, Json<Request>), ApiError> {
    let mut store = state.store.write().await;
    let request = store.submit(&draft)?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Submits a unit purchase
pub async fn submit_purchase(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<PurchaseRequestBody>,
) -> Result<(StatusCode, Json<Request>), ApiError> {
    let currency = state.store.read().await.currency();
    submit(&state, body.into_draft(currency)).await
}

/// Submits a unit redemption
pub async fn submit_redemption(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<RedemptionRequestBody>,
) -> Result<(StatusCode, Json<Request>), ApiError> {
    submit(&state, body.into_draft()).await
}

/// Submits a unit transfer
pub async fn submit_transfer(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<TransferRequestBody>,
) -> Result<(StatusCode, Json<Request>), ApiError> {
    submit(&state, body.into_draft()).await
}

/// Submits a listed shares purchase
pub async fn submit_shares(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SharesRequestBody>,
) -> Result<(StatusCode, Json<Request>), ApiError> {
    let currency = state.store.read().await.currency();
    submit(&state, body.into_draft(currency)).await
}

/// Lists requests, optionally filtered by kind, status or investor
pub async fn list_requests(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RequestListQuery>,
) -> Result<Json<Vec<Request>>, ApiError> {
    let filter = RequestFilter::from(query);
    let store = state.store.read().await;
    Ok(Json(store.ledger().list(&filter).into_iter().cloned().collect()))
}

/// Pending requests of every kind, oldest first
pub async fn list_pending(
    State(state): State<AppState>,
) -> Result<Json<Vec<Request>>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.ledger().list_pending().into_iter().cloned().collect()))
}

/// Gets a request by ID
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Request>, ApiError> {
    let store = state.store.read().await;
    let request = store.ledger().get(RequestId::from_uuid(id))?;
    Ok(Json(request.clone()))
}

/// Approves a pending request and applies its effects
pub async fn approve_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<ResolveRequestBody>,
) -> Result<Json<Request>, ApiError> {
    let mut store = state.store.write().await;
    Ok(Json(store.approve(RequestId::from_uuid(id), &body.actor)?))
}

/// Rejects a pending request
pub async fn reject_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<ResolveRequestBody>,
) -> Result<Json<Request>, ApiError> {
    let mut store = state.store.write().await;
    Ok(Json(store.reject(RequestId::from_uuid(id), &body.actor)?))
}
