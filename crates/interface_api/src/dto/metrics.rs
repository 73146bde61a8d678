//! Metrics DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{DateRange, Money};
use domain_metrics::{IncomeExpenseGst, PropertyInputs};

#[derive(Debug, Serialize, Deserialize)]
pub struct GstResponse {
    /// Absent when every transaction was included
    pub period: Option<DateRange>,
    #[serde(flatten)]
    pub totals: IncomeExpenseGst,
    pub net_gst: Money,
}

/// Property scenario; all figures in dollars except the rate
#[derive(Debug, Deserialize, Validate)]
pub struct PropertyScenarioRequest {
    #[validate(range(min = 0.0))]
    pub property_value: f64,
    #[validate(range(min = 0.0))]
    pub purchase_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub loan_amount: f64,
    #[validate(range(min = 0.0))]
    pub monthly_rent: f64,
    #[validate(range(min = 0.0))]
    pub monthly_expenses: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub interest_rate: f64,
}

impl From<PropertyScenarioRequest> for PropertyInputs {
    fn from(request: PropertyScenarioRequest) -> Self {
        PropertyInputs {
            property_value: request.property_value,
            purchase_price: request.purchase_price,
            loan_amount: request.loan_amount,
            monthly_rent: request.monthly_rent,
            monthly_expenses: request.monthly_expenses,
            interest_rate: request.interest_rate,
        }
    }
}
