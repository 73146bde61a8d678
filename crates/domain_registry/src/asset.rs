//! Asset register (static reference data)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AssetId, Money, MoneyError};

/// Kind of asset held by the trust
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Property,
    Shares,
    Cash,
}

/// An asset on the trust's register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub asset_type: AssetType,
    pub name: String,
    /// Current carrying value
    pub value: Money,
    pub purchase_price: Money,
    pub purchase_date: NaiveDate,
    /// Debt secured against the asset (property loans)
    pub liability: Option<Money>,
    /// Street address for property
    pub location: Option<String>,
    /// Ticker for listed shares
    pub symbol: Option<String>,
    /// Share count for listed shares
    pub quantity: Option<Decimal>,
}

impl Asset {
    pub fn new(
        asset_type: AssetType,
        name: impl Into<String>,
        value: Money,
        purchase_price: Money,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            id: AssetId::new_v7(),
            asset_type,
            name: name.into(),
            value,
            purchase_price,
            purchase_date,
            liability: None,
            location: None,
            symbol: None,
            quantity: None,
        }
    }

    pub fn with_liability(mut self, liability: Money) -> Self {
        self.liability = Some(liability);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_listing(mut self, symbol: impl Into<String>, quantity: Decimal) -> Self {
        self.symbol = Some(symbol.into());
        self.quantity = Some(quantity);
        self
    }

    /// Value minus purchase price
    pub fn capital_gain(&self) -> Result<Money, MoneyError> {
        self.value.checked_sub(&self.purchase_price)
    }

    /// Value minus any secured liability
    pub fn net_equity(&self) -> Result<Money, MoneyError> {
        match &self.liability {
            Some(liability) => self.value.checked_sub(liability),
            None => Ok(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_property_equity_and_gain() {
        let property = Asset::new(
            AssetType::Property,
            "Unit 4, 12 Harbour St",
            Money::aud(dec!(850000)),
            Money::aud(dec!(750000)),
            NaiveDate::from_ymd_opt(2021, 5, 1).unwrap(),
        )
        .with_liability(Money::aud(dec!(600000)));

        assert_eq!(property.capital_gain().unwrap().amount(), dec!(100000));
        assert_eq!(property.net_equity().unwrap().amount(), dec!(250000));
    }
}
