//! Unit class definition and balance-sheet movements
//!
//! A unit class is a named pool with its own unit price. Its NAV is the
//! difference between the pool's assets and liabilities.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, MoneyError, UnitClassId};
use crate::error::RegistryError;
use crate::round_units;

/// A unit class (fund) units are issued against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitClass {
    /// Unique identifier
    pub id: UnitClassId,
    /// Display name, e.g. "Growth Fund A"
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Current price per unit
    pub unit_price: Decimal,
    /// Units on issue
    pub total_units: Decimal,
    /// Gross assets held by the class
    assets: Money,
    /// Liabilities of the class
    liabilities: Money,
    /// Trailing performance in percent
    pub performance: Decimal,
    /// Inception date
    pub inception: Option<NaiveDate>,
}

impl UnitClass {
    /// Creates a new unit class
    ///
    /// # Errors
    ///
    /// Returns `InvalidUnitClass` when the price, units or liabilities are
    /// negative, when assets and liabilities are in different currencies,
    /// or when liabilities exceed assets.
    pub fn new(
        id: UnitClassId,
        name: impl Into<String>,
        unit_price: Decimal,
        total_units: Decimal,
        assets: Money,
        liabilities: Money,
    ) -> Result<Self, RegistryError> {
        if unit_price < Decimal::ZERO {
            return Err(RegistryError::InvalidUnitClass(format!(
                "unit price must not be negative, got {unit_price}"
            )));
        }
        if total_units < Decimal::ZERO {
            return Err(RegistryError::InvalidUnitClass(format!(
                "total units must not be negative, got {total_units}"
            )));
        }
        check_balance_sheet(&assets, &liabilities)?;

        Ok(Self {
            id,
            name: name.into(),
            description: None,
            unit_price,
            total_units,
            assets,
            liabilities,
            performance: Decimal::ZERO,
            inception: None,
        })
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the trailing performance and inception date
    pub fn with_history(mut self, performance: Decimal, inception: NaiveDate) -> Self {
        self.performance = performance;
        self.inception = Some(inception);
        self
    }

    pub fn assets(&self) -> Money {
        self.assets
    }

    pub fn liabilities(&self) -> Money {
        self.liabilities
    }

    pub fn currency(&self) -> Currency {
        self.assets.currency()
    }

    /// Net asset value: assets minus liabilities
    pub fn nav(&self) -> Money {
        Money::new(self.assets.amount() - self.liabilities.amount(), self.currency())
    }

    /// Issues units against incoming consideration
    pub fn issue_units(&mut self, units: Decimal, consideration: Money) -> Result<(), RegistryError> {
        if units <= Decimal::ZERO {
            return Err(RegistryError::InvalidQuantity(format!(
                "units to issue must be positive, got {units}"
            )));
        }
        let assets = self.assets.checked_add(&consideration)?;
        let total_units = self.total_units.checked_add(units).ok_or(MoneyError::Overflow)?;
        self.assets = assets;
        self.total_units = round_units(total_units);
        Ok(())
    }

    /// Cancels redeemed units and pays the proceeds out of assets
    ///
    /// Fails without changing anything when fewer units are on issue than
    /// requested, or when the payout would leave liabilities above assets.
    pub fn redeem_units(&mut self, units: Decimal, payout: Money) -> Result<(), RegistryError> {
        if units <= Decimal::ZERO {
            return Err(RegistryError::InvalidQuantity(format!(
                "units to redeem must be positive, got {units}"
            )));
        }
        if units > self.total_units {
            return Err(RegistryError::InsufficientUnits {
                requested: units,
                available: self.total_units,
            });
        }
        let assets = self.assets.checked_sub(&payout)?;
        check_balance_sheet(&assets, &self.liabilities)?;

        self.assets = assets;
        self.total_units = round_units(self.total_units - units);
        Ok(())
    }
}

fn check_balance_sheet(assets: &Money, liabilities: &Money) -> Result<(), RegistryError> {
    if assets.currency() != liabilities.currency() {
        return Err(RegistryError::InvalidUnitClass(format!(
            "assets in {} but liabilities in {}",
            assets.currency(),
            liabilities.currency()
        )));
    }
    if liabilities.is_negative() {
        return Err(RegistryError::InvalidUnitClass(format!(
            "liabilities must not be negative, got {}",
            liabilities.amount()
        )));
    }
    if liabilities.amount() > assets.amount() {
        return Err(RegistryError::InvalidUnitClass(format!(
            "liabilities {} exceed assets {}",
            liabilities.amount(),
            assets.amount()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn growth_fund() -> UnitClass {
        UnitClass::new(
            UnitClassId::from_u128(1),
            "Growth Fund A",
            dec!(1.25),
            dec!(10000),
            Money::aud(dec!(15000000)),
            Money::aud(dec!(2500000)),
        )
        .unwrap()
    }

    #[test]
    fn test_nav_is_assets_minus_liabilities() {
        assert_eq!(growth_fund().nav().amount(), dec!(12500000));
    }

    #[test]
    fn test_liabilities_above_assets_rejected() {
        let result = UnitClass::new(
            UnitClassId::new(),
            "Broken",
            dec!(1),
            dec!(0),
            Money::aud(dec!(10)),
            Money::aud(dec!(11)),
        );
        assert!(matches!(result, Err(RegistryError::InvalidUnitClass(_))));
    }

    #[test]
    fn test_negative_liabilities_rejected() {
        let result = UnitClass::new(
            UnitClassId::new(),
            "Broken",
            dec!(1),
            dec!(0),
            Money::aud(dec!(70000000000000000000000000000)),
            Money::aud(dec!(-70000000000000000000000000000)),
        );
        assert!(matches!(result, Err(RegistryError::InvalidUnitClass(_))));
    }

    #[test]
    fn test_issue_units_out_of_range_leaves_class_untouched() {
        let mut fund = growth_fund();
        let before = fund.clone();

        let result = fund.issue_units(dec!(1), Money::aud(Decimal::MAX));

        assert!(matches!(result, Err(RegistryError::Money(MoneyError::Overflow))));
        assert_eq!(fund, before);
    }

    #[test]
    fn test_issue_units_grows_assets() {
        let mut fund = growth_fund();
        fund.issue_units(dec!(40000), Money::aud(dec!(50000))).unwrap();

        assert_eq!(fund.total_units, dec!(50000));
        assert_eq!(fund.assets().amount(), dec!(15050000));
    }

    #[test]
    fn test_redeem_more_than_issued_leaves_class_untouched() {
        let mut fund = growth_fund();
        let before = fund.clone();

        let result = fund.redeem_units(dec!(10001), Money::aud(dec!(1)));

        assert!(matches!(result, Err(RegistryError::InsufficientUnits { .. })));
        assert_eq!(fund, before);
    }
}
