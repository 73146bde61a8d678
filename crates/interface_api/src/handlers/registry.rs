//! Unit class, investor and asset handlers

use axum::{extract::{Path, State}, http::StatusCode, Json};
use uuid::Uuid;

use core_kernel::{InvestorId, UnitClassId};

use crate::{AppState, error::ApiError};
use crate::dto::registry::*;
use crate::extract::{ApiJson, ValidatedJson};

/// Lists unit classes with NAV and equity ratio
pub async fn list_unit_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<UnitClassResponse>>, ApiError> {
    let store = state.store.read().await;
    let unit_classes = store
        .registry()
        .unit_classes()
        .iter()
        .map(UnitClassResponse::from_unit_class)
        .collect();
    Ok(Json(unit_classes))
}

/// Sets a unit class's price and revalues its holdings
pub async fn set_unit_price(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(request): ApiJson<UpdateUnitPriceRequest>,
) -> Result<Json<UnitClassResponse>, ApiError> {
    let mut store = state.store.write().await;
    let unit_class = store.set_unit_price(UnitClassId::from_uuid(id), request.unit_price)?;
    Ok(Json(UnitClassResponse::from_unit_class(unit_class)))
}

/// Lists investors with their holdings valued
pub async fn list_investors(
    State(state): State<AppState>,
) -> Result<Json<Vec<InvestorResponse>>, ApiError> {
    let store = state.store.read().await;
    let investors = store
        .registry()
        .investors()
        .iter()
        .map(|investor| Ok(InvestorResponse::new(investor, store.valuation(investor.id)?)))
        .collect::<Result<Vec<_>, ApiError>>()?;
    Ok(Json(investors))
}

/// Gets an investor by ID
pub async fn get_investor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvestorResponse>, ApiError> {
    let id = InvestorId::from_uuid(id);
    let store = state.store.read().await;
    let investor = store.registry().investor(id)?;
    Ok(Json(InvestorResponse::new(investor, store.valuation(id)?)))
}

/// Registers an investor
pub async fn create_investor(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateInvestorRequest>,
) -> Result<(StatusCode, Json<InvestorResponse>), ApiError> {
    let mut store = state.store.write().await;
    let id = store.add_investor(request.into_investor(InvestorId::new_v7()))?.id;
    let investor = store.registry().investor(id)?;
    Ok((StatusCode::CREATED, Json(InvestorResponse::new(investor, store.valuation(id)?))))
}

/// Lists the asset register
pub async fn list_assets(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssetResponse>>, ApiError> {
    let store = state.store.read().await;
    let assets = store
        .registry()
        .assets()
        .iter()
        .map(AssetResponse::from_asset)
        .collect::<Result<Vec<_>, ApiError>>()?;
    Ok(Json(assets))
}
