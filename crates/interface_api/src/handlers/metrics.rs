//! Aggregate figures

use axum::{extract::State, Json};

use domain_metrics::{property_health_score, DashboardSummary, PropertyAssessment, PropertyInputs};

use crate::{AppState, error::ApiError};
use crate::dto::PeriodQuery;
use crate::dto::metrics::*;
use crate::extract::{ApiQuery, ValidatedJson};

/// Dashboard headline figures
pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.summary()?))
}

/// Income, expense and GST totals, optionally within `from`..=`to`
pub async fn gst(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PeriodQuery>,
) -> Result<Json<GstResponse>, ApiError> {
    let period = query.to_range()?;
    let store = state.store.read().await;
    let totals = store.income_expense_gst(period.as_ref())?;
    Ok(Json(GstResponse {
        period,
        net_gst: totals.net_gst()?,
        totals,
    }))
}

/// Scores a property investment scenario
pub async fn property(
    ValidatedJson(request): ValidatedJson<PropertyScenarioRequest>,
) -> Json<PropertyAssessment> {
    Json(property_health_score(&PropertyInputs::from(request)))
}
