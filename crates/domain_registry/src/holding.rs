//! Unit holdings for investors

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, MoneyError, UnitClassId};
use crate::error::RegistryError;
use crate::{round_units, unit_value};

/// An investor's units in one unit class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unit class the units belong to
    pub unit_class_id: UnitClassId,
    /// Number of units held
    pub units: Decimal,
    /// Value at the last valuation
    pub value: Money,
    /// Average acquisition price per unit
    pub average_price: Decimal,
}

impl Holding {
    /// Creates an empty holding
    pub fn new(unit_class_id: UnitClassId, currency: Currency) -> Self {
        Self {
            unit_class_id,
            units: Decimal::ZERO,
            value: Money::zero(currency),
            average_price: Decimal::ZERO,
        }
    }

    /// Creates a holding with an opening balance valued at `price`
    pub fn opening(
        unit_class_id: UnitClassId,
        units: Decimal,
        price: Decimal,
        currency: Currency,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            unit_class_id,
            units,
            value: unit_value(units, price, currency)?,
            average_price: price,
        })
    }

    /// Adds units acquired at `price`, blending the average price
    ///
    /// Leaves the holding untouched when the result is out of range.
    pub fn credit(&mut self, units: Decimal, price: Decimal) -> Result<(), RegistryError> {
        let new_units = self.units.checked_add(units).ok_or(MoneyError::Overflow)?;
        let average_price = if new_units.is_zero() {
            self.average_price
        } else {
            let cost = self
                .units
                .checked_mul(self.average_price)
                .zip(units.checked_mul(price))
                .and_then(|(held, added)| held.checked_add(added))
                .ok_or(MoneyError::Overflow)?;
            cost.checked_div(new_units).ok_or(MoneyError::Overflow)?
        };
        let new_units = round_units(new_units);
        let value = unit_value(new_units, price, self.value.currency())?;

        self.units = new_units;
        self.average_price = average_price;
        self.value = value;
        Ok(())
    }

    /// Removes units, revaluing the remainder at `price`
    pub fn debit(&mut self, units: Decimal, price: Decimal) -> Result<(), RegistryError> {
        if units > self.units {
            return Err(RegistryError::InsufficientUnits {
                requested: units,
                available: self.units,
            });
        }
        let units = round_units(self.units - units);
        self.value = unit_value(units, price, self.value.currency())?;
        self.units = units;
        Ok(())
    }

    /// Recomputes the value at the given unit price
    pub fn revalue(&mut self, price: Decimal) -> Result<(), RegistryError> {
        self.value = unit_value(self.units, price, self.value.currency())?;
        Ok(())
    }
}
