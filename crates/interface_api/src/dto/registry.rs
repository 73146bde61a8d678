//! Registry DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{InvestorId, Money, UnitClassId};
use domain_metrics::{equity_ratio, HoldingValuation, InvestorValuation};
use domain_registry::{Asset, Investor, InvestorStatus, RiskProfile, UnitClass};

use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct UnitClassResponse {
    pub id: UnitClassId,
    pub name: String,
    pub description: Option<String>,
    pub unit_price: Decimal,
    pub total_units: Decimal,
    pub assets: Money,
    pub liabilities: Money,
    pub nav: Money,
    /// Percent of assets not owed
    pub equity_ratio: Decimal,
    pub performance: Decimal,
    pub inception: Option<NaiveDate>,
}

impl UnitClassResponse {
    pub fn from_unit_class(unit_class: &UnitClass) -> Self {
        Self {
            id: unit_class.id,
            name: unit_class.name.clone(),
            description: unit_class.description.clone(),
            unit_price: unit_class.unit_price,
            total_units: unit_class.total_units,
            assets: unit_class.assets(),
            liabilities: unit_class.liabilities(),
            nav: unit_class.nav(),
            equity_ratio: equity_ratio(unit_class),
            performance: unit_class.performance,
            inception: unit_class.inception,
        }
    }
}

/// New investor; starts active with no holdings
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInvestorRequest {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    /// Checked for shape and uniqueness by the registry
    pub email: String,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub risk_profile: Option<RiskProfile>,
}

impl CreateInvestorRequest {
    pub fn into_investor(self, id: InvestorId) -> Investor {
        let mut investor = Investor::new(id, self.name.trim(), self.email.trim());
        if let Some(phone) = self.phone.filter(|p| !p.trim().is_empty()) {
            investor = investor.with_phone(phone);
        }
        if let Some(join_date) = self.join_date {
            investor = investor.with_join_date(join_date);
        }
        if let Some(risk_profile) = self.risk_profile {
            investor = investor.with_risk_profile(risk_profile);
        }
        investor
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUnitPriceRequest {
    pub unit_price: Decimal,
}

/// Investor with holdings valued at current unit prices
#[derive(Debug, Serialize, Deserialize)]
pub struct InvestorResponse {
    pub id: InvestorId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub risk_profile: RiskProfile,
    pub status: InvestorStatus,
    pub holdings: Vec<HoldingValuation>,
    pub total_value: Money,
}

impl InvestorResponse {
    pub fn new(investor: &Investor, valuation: InvestorValuation) -> Self {
        Self {
            id: investor.id,
            name: investor.name.clone(),
            email: investor.email.clone(),
            phone: investor.phone.clone(),
            join_date: investor.join_date,
            risk_profile: investor.risk_profile,
            status: investor.status,
            holdings: valuation.holdings,
            total_value: valuation.total_value,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssetResponse {
    #[serde(flatten)]
    pub asset: Asset,
    pub capital_gain: Money,
    pub net_equity: Money,
}

impl AssetResponse {
    pub fn from_asset(asset: &Asset) -> Result<Self, ApiError> {
        let internal = |e: core_kernel::MoneyError| ApiError::Internal(e.to_string());
        Ok(Self {
            asset: asset.clone(),
            capital_gain: asset.capital_gain().map_err(internal)?,
            net_equity: asset.net_equity().map_err(internal)?,
        })
    }
}
