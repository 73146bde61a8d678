//! Investor valuations and the dashboard summary

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, InvestorId, Money, UnitClassId};
use domain_bookkeeping::BankTransaction;
use domain_registry::{Investor, UnitClass};

use crate::error::MetricsError;
use crate::gst::income_expense_gst;
use crate::nav::{total_assets, total_liabilities, total_nav};

/// One holding valued at the current unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingValuation {
    pub unit_class_id: UnitClassId,
    pub unit_class_name: String,
    pub units: Decimal,
    pub unit_price: Decimal,
    /// Units times current unit price
    pub value: Money,
}

/// An investor's portfolio at current prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorValuation {
    pub investor_id: InvestorId,
    pub holdings: Vec<HoldingValuation>,
    pub total_value: Money,
}

/// Values every holding of an investor at the current unit prices
///
/// # Errors
///
/// `UnknownUnitClass` if a holding refers to a class missing from
/// `unit_classes`.
pub fn investor_valuation(
    investor: &Investor,
    unit_classes: &[UnitClass],
) -> Result<InvestorValuation, MetricsError> {
    let mut holdings = Vec::with_capacity(investor.holdings.len());
    let mut currency = Currency::default();

    for holding in &investor.holdings {
        let unit_class = unit_classes
            .iter()
            .find(|uc| uc.id == holding.unit_class_id)
            .ok_or_else(|| MetricsError::UnknownUnitClass(holding.unit_class_id.to_string()))?;
        currency = unit_class.currency();

        holdings.push(HoldingValuation {
            unit_class_id: unit_class.id,
            unit_class_name: unit_class.name.clone(),
            units: holding.units,
            unit_price: unit_class.unit_price,
            value: Money::product(holding.units, unit_class.unit_price, unit_class.currency())?,
        });
    }

    let total_value = Money::sum(holdings.iter().map(|h| &h.value), currency)?;
    Ok(InvestorValuation {
        investor_id: investor.id,
        holdings,
        total_value,
    })
}

/// Headline figures for the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_nav: Money,
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub investor_count: usize,
    pub unit_class_count: usize,
    pub pending_requests: usize,
    pub total_income: Money,
    pub total_expenses: Money,
}

/// Builds the dashboard summary
///
/// `pending_requests` comes from the request ledger, which sits above
/// this crate.
pub fn dashboard_summary<'a, I>(
    unit_classes: &[UnitClass],
    investors: &[Investor],
    transactions: I,
    pending_requests: usize,
    currency: Currency,
) -> Result<DashboardSummary, MetricsError>
where
    I: IntoIterator<Item = &'a BankTransaction>,
{
    let cash = income_expense_gst(transactions, None, currency)?;
    Ok(DashboardSummary {
        total_nav: total_nav(unit_classes, currency)?,
        total_assets: total_assets(unit_classes, currency)?,
        total_liabilities: total_liabilities(unit_classes, currency)?,
        investor_count: investors.len(),
        unit_class_count: unit_classes.len(),
        pending_requests,
        total_income: cash.income,
        total_expenses: cash.expenses,
    })
}
