//! Registry effects of an approved request
//!
//! Effects are worked out on copies of the affected unit class and
//! investors. The ledger commits the copies only once every step has
//! succeeded, so a failed approval leaves the registry as it was.

use rust_decimal::Decimal;

use domain_registry::{Investor, Registry, UnitClass};

use crate::error::RequestError;
use crate::request::{PurchaseDetails, RedemptionDetails, RequestDetails, TransferDetails};

/// Updated copies to commit alongside the status change
#[derive(Debug, Default)]
pub struct Settlement {
    pub unit_classes: Vec<UnitClass>,
    pub investors: Vec<Investor>,
}

impl Settlement {
    pub fn is_empty(&self) -> bool {
        self.unit_classes.is_empty() && self.investors.is_empty()
    }
}

/// Computes the registry changes an approval would make
///
/// Holdings are checked again here because they may have shrunk since
/// submission.
pub fn settle(details: &RequestDetails, registry: &Registry) -> Result<Settlement, RequestError> {
    match details {
        RequestDetails::Purchase(d) => settle_purchase(d, registry),
        RequestDetails::Redemption(d) => settle_redemption(d, registry),
        RequestDetails::Transfer(d) => settle_transfer(d, registry),
        RequestDetails::SharesPurchase(_) => Ok(Settlement::default()),
    }
}

fn settle_purchase(d: &PurchaseDetails, registry: &Registry) -> Result<Settlement, RequestError> {
    let units = Decimal::from(d.estimated_units);
    let mut unit_class = registry.unit_class(d.unit_class_id)?.clone();
    let mut investor = registry.investor(d.investor_id)?.clone();

    unit_class.issue_units(units, d.amount)?;
    investor.credit_units(d.unit_class_id, units, d.unit_price, unit_class.currency())?;
    investor.revalue(d.unit_class_id, unit_class.unit_price)?;

    Ok(Settlement {
        unit_classes: vec![unit_class],
        investors: vec![investor],
    })
}

fn settle_redemption(d: &RedemptionDetails, registry: &Registry) -> Result<Settlement, RequestError> {
    let mut unit_class = registry.unit_class(d.unit_class_id)?.clone();
    let mut investor = registry.investor(d.investor_id)?.clone();

    let held = investor.units_in(d.unit_class_id);
    if d.units > held {
        return Err(RequestError::validation(format!(
            "investor {} now holds {held} units, cannot redeem {}",
            d.investor_id, d.units
        )));
    }

    investor.debit_units(d.unit_class_id, d.units, unit_class.unit_price)?;
    unit_class.redeem_units(d.units, d.estimated_value)?;

    Ok(Settlement {
        unit_classes: vec![unit_class],
        investors: vec![investor],
    })
}

fn settle_transfer(d: &TransferDetails, registry: &Registry) -> Result<Settlement, RequestError> {
    let unit_class = registry.unit_class(d.unit_class_id)?;
    let mut from = registry.investor(d.from_investor_id)?.clone();
    let mut to = registry.investor(d.to_investor_id)?.clone();

    let held = from.units_in(d.unit_class_id);
    if d.units > held {
        return Err(RequestError::validation(format!(
            "investor {} now holds {held} units, cannot transfer {}",
            d.from_investor_id, d.units
        )));
    }

    from.debit_units(d.unit_class_id, d.units, unit_class.unit_price)?;
    to.credit_units(d.unit_class_id, d.units, unit_class.unit_price, unit_class.currency())?;

    Ok(Settlement {
        unit_classes: Vec::new(),
        investors: vec![from, to],
    })
}
