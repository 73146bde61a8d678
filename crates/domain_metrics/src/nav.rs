//! Net asset value aggregates

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_registry::UnitClass;

use crate::error::MetricsError;

/// Sum of NAV (assets minus liabilities) across unit classes
///
/// # Errors
///
/// Returns `MoneyError::CurrencyMismatch` if a class is not in `currency`.
pub fn total_nav(unit_classes: &[UnitClass], currency: Currency) -> Result<Money, MetricsError> {
    let navs: Vec<Money> = unit_classes.iter().map(UnitClass::nav).collect();
    Ok(Money::sum(navs.iter(), currency)?)
}

/// Sum of gross assets across unit classes
pub fn total_assets(unit_classes: &[UnitClass], currency: Currency) -> Result<Money, MetricsError> {
    let assets: Vec<Money> = unit_classes.iter().map(UnitClass::assets).collect();
    Ok(Money::sum(assets.iter(), currency)?)
}

/// Sum of liabilities across unit classes
pub fn total_liabilities(unit_classes: &[UnitClass], currency: Currency) -> Result<Money, MetricsError> {
    let liabilities: Vec<Money> = unit_classes.iter().map(UnitClass::liabilities).collect();
    Ok(Money::sum(liabilities.iter(), currency)?)
}

/// Equity ratio of a unit class as a percentage
///
/// `(assets - liabilities) / assets * 100`, or zero when the class holds
/// no assets. Unit classes never carry liabilities above assets, so the
/// ratio lies in `0..=100`.
pub fn equity_ratio(unit_class: &UnitClass) -> Decimal {
    let assets = unit_class.assets().amount();
    if assets.is_zero() {
        return Decimal::ZERO;
    }
    unit_class
        .nav()
        .amount()
        .checked_div(assets)
        .map_or(Decimal::ZERO, |ratio| ratio * dec!(100))
}
