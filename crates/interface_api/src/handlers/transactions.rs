//! Bank transaction handlers

use axum::{extract::{Path, State}, http::StatusCode, Json};
use uuid::Uuid;

use core_kernel::BankTransactionId;
use domain_bookkeeping::BankTransaction;

use crate::{AppState, error::ApiError};
use crate::dto::PeriodQuery;
use crate::dto::transactions::*;
use crate::extract::{ApiJson, ApiQuery, ValidatedJson};

/// Lists transactions, oldest first, optionally within `from`..=`to`
pub async fn list_transactions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PeriodQuery>,
) -> Result<Json<Vec<BankTransaction>>, ApiError> {
    let period = query.to_range()?;
    let store = state.store.read().await;
    let transactions = store
        .cash_book()
        .in_period(period.as_ref())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(transactions))
}

/// Records a bank transaction
pub async fn record_transaction(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RecordTransactionRequest>,
) -> Result<(StatusCode, Json<BankTransaction>), ApiError> {
    let mut store = state.store.write().await;
    let transaction = request.into_transaction(store.currency())?;
    let recorded = store.record_transaction(transaction)?;
    Ok((StatusCode::CREATED, Json(recorded.clone())))
}

/// Moves a transaction's clearing status forward
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(request): ApiJson<UpdateTransactionStatusRequest>,
) -> Result<Json<BankTransaction>, ApiError> {
    let mut store = state.store.write().await;
    let updated = store.update_transaction_status(BankTransactionId::from_uuid(id), request.status)?;
    Ok(Json(updated.clone()))
}
