//! Statement generation

use axum::{extract::State, Json};

use domain_requests::RequestDetails;
use domain_statements::{render_text, StatementBuilder, StatementKind};

use crate::{AppState, error::ApiError};
use crate::dto::statements::*;
use crate::extract::ApiJson;

/// Generates a statement as labelled lines plus a text rendering
pub async fn generate_statement(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<StatementRequest>,
) -> Result<Json<StatementResponse>, ApiError> {
    let period = request.period().to_range()?;
    let builder = StatementBuilder::new(state.config.branding.clone(), state.config.timezone);
    let store = state.store.read().await;

    let statement = match request.kind {
        StatementKind::Purchase => {
            let id = request
                .request_id
                .ok_or_else(|| ApiError::validation("request_id is required for purchase statements"))?;
            let purchase = store.ledger().get(id)?;
            let RequestDetails::Purchase(details) = &purchase.details else {
                return Err(ApiError::validation(format!(
                    "request {id} is a {}, not a purchase",
                    purchase.kind()
                )));
            };
            builder.purchase(
                purchase,
                store.registry().investor(details.investor_id)?,
                store.registry().unit_class(details.unit_class_id)?,
            )?
        }
        StatementKind::Bas => {
            let period = period
                .ok_or_else(|| ApiError::validation("from and to are required for BAS statements"))?;
            let totals = store.income_expense_gst(Some(&period))?;
            builder.bas(&totals, &period)?
        }
        StatementKind::Portfolio => {
            let id = request
                .investor_id
                .ok_or_else(|| ApiError::validation("investor_id is required for portfolio statements"))?;
            let investor = store.registry().investor(id)?;
            builder.portfolio(investor, &store.valuation(id)?)?
        }
        StatementKind::TransactionHistory => builder.transaction_history(
            store.cash_book().transactions(),
            period.as_ref(),
            store.currency(),
        )?,
    };

    tracing::info!(kind = %statement.kind, "Statement generated");
    let text = render_text(&statement);
    Ok(Json(StatementResponse { statement, text }))
}
