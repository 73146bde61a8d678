//! Request drafts and submission checks
//!
//! A draft carries what the submitter typed. Preparing it against the
//! registry validates it and snapshots prices and estimates into the
//! request details.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{InvestorId, Money, UnitClassId};
use domain_metrics::{estimated_units, estimated_value};
use domain_registry::{Registry, UnitClass};

use crate::error::RequestError;
use crate::request::{
    PurchaseDetails, RedemptionDetails, RequestDetails, SharesPurchaseDetails, TransferDetails,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDraft {
    pub investor_id: InvestorId,
    pub unit_class_id: UnitClassId,
    pub amount: Money,
    /// Application fee; zero when absent
    pub fees: Option<Money>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionDraft {
    pub investor_id: InvestorId,
    pub unit_class_id: UnitClassId,
    pub units: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferDraft {
    pub from_investor_id: InvestorId,
    pub to_investor_id: InvestorId,
    pub unit_class_id: UnitClassId,
    pub units: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharesPurchaseDraft {
    pub investor_id: InvestorId,
    pub symbol: String,
    pub quantity: Decimal,
    pub estimated_price: Money,
    pub notes: Option<String>,
}

/// A request as submitted, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestDraft {
    Purchase(PurchaseDraft),
    Redemption(RedemptionDraft),
    Transfer(TransferDraft),
    SharesPurchase(SharesPurchaseDraft),
}

impl RequestDraft {
    /// Submitter notes, trimmed; blank notes are dropped
    pub fn notes(&self) -> Option<String> {
        let notes = match self {
            RequestDraft::Purchase(d) => &d.notes,
            RequestDraft::Redemption(d) => &d.notes,
            RequestDraft::Transfer(d) => &d.notes,
            RequestDraft::SharesPurchase(d) => &d.notes,
        };
        notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
    }

    /// Validates the draft and snapshots it into request details
    ///
    /// # Errors
    ///
    /// - `NotFound` for an unknown investor or unit class
    /// - `Validation` for non-positive quantities, negative fees, a
    ///   redemption or transfer above the held units, a self-transfer,
    ///   a blank symbol, or a currency that differs from the unit class
    pub fn prepare(&self, registry: &Registry) -> Result<RequestDetails, RequestError> {
        match self {
            RequestDraft::Purchase(d) => prepare_purchase(d, registry),
            RequestDraft::Redemption(d) => prepare_redemption(d, registry),
            RequestDraft::Transfer(d) => prepare_transfer(d, registry),
            RequestDraft::SharesPurchase(d) => prepare_shares(d, registry),
        }
    }
}

fn require_positive(value: Decimal, field: &str) -> Result<(), RequestError> {
    if value <= Decimal::ZERO {
        return Err(RequestError::validation(format!("{field} must be greater than zero")));
    }
    Ok(())
}

fn require_class_currency(unit_class: &UnitClass, money: &Money) -> Result<(), RequestError> {
    if money.currency() != unit_class.currency() {
        return Err(RequestError::validation(format!(
            "{} is priced in {}, got {}",
            unit_class.name,
            unit_class.currency(),
            money.currency()
        )));
    }
    Ok(())
}

fn require_units_held(
    registry: &Registry,
    investor_id: InvestorId,
    unit_class_id: UnitClassId,
    units: Decimal,
) -> Result<(), RequestError> {
    let held = registry.investor(investor_id)?.units_in(unit_class_id);
    if units > held {
        return Err(RequestError::validation(format!(
            "requested {units} units but investor {investor_id} holds {held}"
        )));
    }
    Ok(())
}

fn quoted_value(units: Decimal, unit_class: &UnitClass) -> Result<Money, RequestError> {
    let value = estimated_value(units, unit_class.unit_price).ok_or_else(|| {
        RequestError::validation(format!(
            "{units} units at {} is out of range",
            unit_class.unit_price
        ))
    })?;
    Ok(Money::new(value, unit_class.currency()))
}

fn prepare_purchase(d: &PurchaseDraft, registry: &Registry) -> Result<RequestDetails, RequestError> {
    require_positive(d.amount.amount(), "amount")?;
    let fees = d.fees.unwrap_or_else(|| Money::zero(d.amount.currency()));
    if fees.is_negative() {
        return Err(RequestError::validation("fees must not be negative"));
    }
    if fees.currency() != d.amount.currency() {
        return Err(RequestError::validation("fees must be in the purchase currency"));
    }

    registry.investor(d.investor_id)?;
    let unit_class = registry.unit_class(d.unit_class_id)?;
    require_class_currency(unit_class, &d.amount)?;

    // Fees on top of the amount must still be a representable total
    d.amount.checked_add(&fees)?;

    let units = estimated_units(d.amount.amount(), unit_class.unit_price);
    if units == 0 {
        return Err(RequestError::validation(format!(
            "amount {} buys no whole units at {}",
            d.amount.amount(),
            unit_class.unit_price
        )));
    }

    Ok(RequestDetails::Purchase(PurchaseDetails {
        investor_id: d.investor_id,
        unit_class_id: d.unit_class_id,
        amount: d.amount,
        fees,
        unit_price: unit_class.unit_price,
        estimated_units: units,
    }))
}

fn prepare_redemption(d: &RedemptionDraft, registry: &Registry) -> Result<RequestDetails, RequestError> {
    require_positive(d.units, "units")?;
    let unit_class = registry.unit_class(d.unit_class_id)?;
    require_units_held(registry, d.investor_id, d.unit_class_id, d.units)?;

    Ok(RequestDetails::Redemption(RedemptionDetails {
        investor_id: d.investor_id,
        unit_class_id: d.unit_class_id,
        units: d.units,
        unit_price: unit_class.unit_price,
        estimated_value: quoted_value(d.units, unit_class)?,
    }))
}

fn prepare_transfer(d: &TransferDraft, registry: &Registry) -> Result<RequestDetails, RequestError> {
    if d.from_investor_id == d.to_investor_id {
        return Err(RequestError::validation("cannot transfer units to the same investor"));
    }
    require_positive(d.units, "units")?;
    let unit_class = registry.unit_class(d.unit_class_id)?;
    registry.investor(d.to_investor_id)?;
    require_units_held(registry, d.from_investor_id, d.unit_class_id, d.units)?;

    Ok(RequestDetails::Transfer(TransferDetails {
        from_investor_id: d.from_investor_id,
        to_investor_id: d.to_investor_id,
        unit_class_id: d.unit_class_id,
        units: d.units,
        unit_price: unit_class.unit_price,
        estimated_value: quoted_value(d.units, unit_class)?,
    }))
}

fn prepare_shares(d: &SharesPurchaseDraft, registry: &Registry) -> Result<RequestDetails, RequestError> {
    let symbol = d.symbol.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return Err(RequestError::validation("symbol is required"));
    }
    require_positive(d.quantity, "quantity")?;
    require_positive(d.estimated_price.amount(), "estimated price")?;
    registry.investor(d.investor_id)?;

    Ok(RequestDetails::SharesPurchase(SharesPurchaseDetails {
        investor_id: d.investor_id,
        symbol,
        quantity: d.quantity,
        estimated_price: d.estimated_price,
        total_amount: d.estimated_price.multiply(d.quantity)?,
    }))
}
