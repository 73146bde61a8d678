//! Investor records and their holdings

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, InvestorId, UnitClassId};
use crate::error::RegistryError;
use crate::holding::Holding;

/// Investor risk appetite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

/// Investor account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorStatus {
    Active,
    Inactive,
    Suspended,
}

/// A unit holder of the trust
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investor {
    /// Unique identifier
    pub id: InvestorId,
    /// Full name
    pub name: String,
    /// Contact email, unique across the registry
    pub email: String,
    /// Contact phone
    pub phone: Option<String>,
    /// Date the investor joined the trust
    pub join_date: Option<NaiveDate>,
    /// Risk profile
    pub risk_profile: RiskProfile,
    /// Account status
    pub status: InvestorStatus,
    /// Holdings in registry order
    pub holdings: Vec<Holding>,
}

impl Investor {
    /// Creates an active investor with a moderate risk profile and no holdings
    pub fn new(id: InvestorId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: None,
            join_date: None,
            risk_profile: RiskProfile::Moderate,
            status: InvestorStatus::Active,
            holdings: Vec::new(),
        }
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the join date
    pub fn with_join_date(mut self, join_date: NaiveDate) -> Self {
        self.join_date = Some(join_date);
        self
    }

    /// Sets the risk profile
    pub fn with_risk_profile(mut self, risk_profile: RiskProfile) -> Self {
        self.risk_profile = risk_profile;
        self
    }

    /// Adds an opening holding
    pub fn with_holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Gets the holding in a unit class, if any
    pub fn holding(&self, unit_class_id: UnitClassId) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.unit_class_id == unit_class_id)
    }

    /// Units held in a unit class; zero when there is no holding
    pub fn units_in(&self, unit_class_id: UnitClassId) -> Decimal {
        self.holding(unit_class_id).map_or(Decimal::ZERO, |h| h.units)
    }

    /// Credits units, opening a new holding when needed
    pub fn credit_units(
        &mut self,
        unit_class_id: UnitClassId,
        units: Decimal,
        price: Decimal,
        currency: Currency,
    ) -> Result<(), RegistryError> {
        match self.holdings.iter_mut().find(|h| h.unit_class_id == unit_class_id) {
            Some(holding) => holding.credit(units, price),
            None => {
                let mut holding = Holding::new(unit_class_id, currency);
                holding.credit(units, price)?;
                self.holdings.push(holding);
                Ok(())
            }
        }
    }

    /// Debits units from an existing holding
    pub fn debit_units(
        &mut self,
        unit_class_id: UnitClassId,
        units: Decimal,
        price: Decimal,
    ) -> Result<(), RegistryError> {
        let holding = self
            .holdings
            .iter_mut()
            .find(|h| h.unit_class_id == unit_class_id)
            .ok_or(RegistryError::InsufficientUnits {
                requested: units,
                available: Decimal::ZERO,
            })?;
        holding.debit(units, price)
    }

    /// Revalues the holding in a unit class at a new price
    pub fn revalue(&mut self, unit_class_id: UnitClassId, price: Decimal) -> Result<(), RegistryError> {
        for holding in self.holdings.iter_mut().filter(|h| h.unit_class_id == unit_class_id) {
            holding.revalue(price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_units_in_missing_holding_is_zero() {
        let investor = Investor::new(InvestorId::new(), "Jane", "jane@example.com");
        assert_eq!(investor.units_in(UnitClassId::new()), Decimal::ZERO);
    }

    #[test]
    fn test_credit_opens_holding() {
        let class = UnitClassId::from_u128(3);
        let mut investor = Investor::new(InvestorId::new(), "Jane", "jane@example.com");
        investor.credit_units(class, dec!(400), dec!(1.25), Currency::AUD).unwrap();

        assert_eq!(investor.units_in(class), dec!(400));
        assert_eq!(investor.holdings.len(), 1);
    }

    #[test]
    fn test_debit_without_holding_fails() {
        let mut investor = Investor::new(InvestorId::new(), "Jane", "jane@example.com");
        let result = investor.debit_units(UnitClassId::new(), dec!(1), dec!(1));
        assert!(matches!(result, Err(RegistryError::InsufficientUnits { .. })));
    }
}
