//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{BankTransactionId, Currency, InvestorId, Money, UnitClassId};
use domain_bookkeeping::{BankTransaction, ClearingStatus, TransactionType};
use domain_registry::{Holding, Investor, Registry, UnitClass};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::TemporalFixtures;

/// Builder for unit classes
pub struct TestUnitClassBuilder {
    id: UnitClassId,
    name: String,
    unit_price: Decimal,
    total_units: Decimal,
    assets: Decimal,
    liabilities: Decimal,
}

impl Default for TestUnitClassBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUnitClassBuilder {
    /// A $1.00 class with 100,000 units, $100,000 of assets and no debt
    pub fn new() -> Self {
        Self {
            id: UnitClassId::new_v7(),
            name: "Test Fund".to_string(),
            unit_price: dec!(1),
            total_units: dec!(100000),
            assets: dec!(100000),
            liabilities: Decimal::ZERO,
        }
    }

    pub fn with_id(mut self, id: UnitClassId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_unit_price(mut self, price: Decimal) -> Self {
        self.unit_price = price;
        self
    }

    pub fn with_total_units(mut self, units: Decimal) -> Self {
        self.total_units = units;
        self
    }

    /// Sets assets and liabilities together
    pub fn with_balance_sheet(mut self, assets: Decimal, liabilities: Decimal) -> Self {
        self.assets = assets;
        self.liabilities = liabilities;
        self
    }

    pub fn build(self) -> UnitClass {
        UnitClass::new(
            self.id,
            self.name,
            self.unit_price,
            self.total_units,
            Money::aud(self.assets),
            Money::aud(self.liabilities),
        )
        .expect("builder produced an invalid unit class")
    }
}

/// Builder for investors
pub struct TestInvestorBuilder {
    id: InvestorId,
    name: String,
    email: Option<String>,
    holdings: Vec<Holding>,
}

impl Default for TestInvestorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvestorBuilder {
    pub fn new() -> Self {
        Self {
            id: InvestorId::new_v7(),
            name: "Test Investor".to_string(),
            email: None,
            holdings: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: InvestorId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Adds an opening holding valued at `price`
    pub fn holding(mut self, unit_class_id: UnitClassId, units: Decimal, price: Decimal) -> Self {
        self.holdings
            .push(Holding::opening(unit_class_id, units, price, Currency::AUD).unwrap());
        self
    }

    pub fn build(self) -> Investor {
        // Unique per investor so several builders can share a registry
        let email = self
            .email
            .unwrap_or_else(|| format!("investor-{}@example.com", self.id.as_uuid().simple()));
        self.holdings
            .into_iter()
            .fold(Investor::new(self.id, self.name, email), Investor::with_holding)
    }
}

/// Builder for bank transactions
pub struct TestTransactionBuilder {
    id: BankTransactionId,
    date: NaiveDate,
    description: String,
    transaction_type: TransactionType,
    amount: Decimal,
    gst: Decimal,
    category: String,
    status: ClearingStatus,
}

impl Default for TestTransactionBuilder {
    fn default() -> Self {
        Self::income(dec!(1000))
    }
}

impl TestTransactionBuilder {
    pub fn income(amount: Decimal) -> Self {
        Self {
            id: BankTransactionId::new_v7(),
            date: TemporalFixtures::date(2024, 1, 15),
            description: "Test income".to_string(),
            transaction_type: TransactionType::Income,
            amount,
            gst: Decimal::ZERO,
            category: "Other Income".to_string(),
            status: ClearingStatus::Pending,
        }
    }

    pub fn expense(amount: Decimal) -> Self {
        Self {
            description: "Test expense".to_string(),
            transaction_type: TransactionType::Expense,
            category: "Other Expenses".to_string(),
            ..Self::income(amount)
        }
    }

    pub fn with_id(mut self, id: BankTransactionId) -> Self {
        self.id = id;
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_gst(mut self, gst: Decimal) -> Self {
        self.gst = gst;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: ClearingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> BankTransaction {
        BankTransaction::new(
            self.date,
            self.description,
            self.transaction_type,
            Money::aud(self.amount),
            Money::aud(self.gst),
            self.category,
        )
        .expect("builder produced an invalid transaction")
        .with_id(self.id)
        .with_status(self.status)
    }
}

/// Builder for a registry of unit classes and investors
#[derive(Default)]
pub struct TestRegistryBuilder {
    unit_classes: Vec<UnitClass>,
    investors: Vec<Investor>,
}

impl TestRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit_class(mut self, unit_class: UnitClass) -> Self {
        self.unit_classes.push(unit_class);
        self
    }

    pub fn investor(mut self, investor: Investor) -> Self {
        self.investors.push(investor);
        self
    }

    pub fn build(self) -> Registry {
        let mut registry = Registry::new();
        for unit_class in self.unit_classes {
            registry.add_unit_class(unit_class).expect("unit class should register");
        }
        for investor in self.investors {
            registry.add_investor(investor).expect("investor should register");
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_class_defaults() {
        let class = TestUnitClassBuilder::new().build();
        assert_eq!(class.nav().amount(), dec!(100000));
    }

    #[test]
    fn test_investors_get_distinct_emails() {
        let class = TestUnitClassBuilder::new().build();
        let registry = TestRegistryBuilder::new()
            .investor(TestInvestorBuilder::new().holding(class.id, dec!(10), dec!(1)).build())
            .investor(TestInvestorBuilder::new().build())
            .unit_class(class)
            .build();
        assert_eq!(registry.investors().len(), 2);
    }

    #[test]
    fn test_expense_builder() {
        let tx = TestTransactionBuilder::expense(dec!(800)).with_gst(dec!(80)).build();
        assert!(!tx.is_income());
        assert_eq!(tx.gst.amount(), dec!(80));
    }
}
