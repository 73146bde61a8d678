//! The unit registry
//!
//! Holds unit classes, investors and the asset register in insertion
//! order, and is the only place investor uniqueness is enforced.
//!
//! # Invariants
//!
//! - Investor emails are unique (case-insensitive)
//! - Every holding references a registered unit class
//! - Holding values are refreshed whenever a unit price changes

use rust_decimal::Decimal;
use tracing::info;
use validator::ValidateEmail;

use core_kernel::{InvestorId, UnitClassId};
use crate::asset::Asset;
use crate::error::RegistryError;
use crate::investor::Investor;
use crate::unit_class::UnitClass;

/// Register of unit classes, investors and assets
#[derive(Debug, Clone, Default)]
pub struct Registry {
    unit_classes: Vec<UnitClass>,
    investors: Vec<Investor>,
    assets: Vec<Asset>,
}

impl Registry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a unit class
    ///
    /// # Errors
    ///
    /// Returns `InvalidUnitClass` if the id is already registered
    pub fn add_unit_class(&mut self, unit_class: UnitClass) -> Result<(), RegistryError> {
        if self.unit_classes.iter().any(|uc| uc.id == unit_class.id) {
            return Err(RegistryError::InvalidUnitClass(format!(
                "unit class {} already registered",
                unit_class.id
            )));
        }
        info!(unit_class_id = %unit_class.id, name = %unit_class.name, "Unit class registered");
        self.unit_classes.push(unit_class);
        Ok(())
    }

    /// Registers an investor
    ///
    /// # Errors
    ///
    /// - `InvalidEmail` if the email is malformed
    /// - `DuplicateEmail` if another investor uses the same email
    /// - `UnitClassNotFound` if an opening holding references an unknown class
    pub fn add_investor(&mut self, investor: Investor) -> Result<(), RegistryError> {
        if !investor.email.validate_email() {
            return Err(RegistryError::InvalidEmail(investor.email));
        }
        if self
            .investors
            .iter()
            .any(|i| i.email.eq_ignore_ascii_case(&investor.email))
        {
            return Err(RegistryError::DuplicateEmail(investor.email));
        }
        for holding in &investor.holdings {
            self.unit_class(holding.unit_class_id)?;
        }

        info!(investor_id = %investor.id, "Investor registered");
        self.investors.push(investor);
        Ok(())
    }

    /// Adds an asset to the register
    pub fn add_asset(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    pub fn unit_classes(&self) -> &[UnitClass] {
        &self.unit_classes
    }

    pub fn investors(&self) -> &[Investor] {
        &self.investors
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Gets a unit class by ID
    pub fn unit_class(&self, id: UnitClassId) -> Result<&UnitClass, RegistryError> {
        self.unit_classes
            .iter()
            .find(|uc| uc.id == id)
            .ok_or_else(|| RegistryError::UnitClassNotFound(id.to_string()))
    }

    /// Gets an investor by ID
    pub fn investor(&self, id: InvestorId) -> Result<&Investor, RegistryError> {
        self.investors
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| RegistryError::InvestorNotFound(id.to_string()))
    }

    /// Replaces a unit class with an updated copy
    pub fn replace_unit_class(&mut self, unit_class: UnitClass) -> Result<(), RegistryError> {
        let slot = self
            .unit_classes
            .iter_mut()
            .find(|uc| uc.id == unit_class.id)
            .ok_or_else(|| RegistryError::UnitClassNotFound(unit_class.id.to_string()))?;
        *slot = unit_class;
        Ok(())
    }

    /// Replaces an investor with an updated copy
    ///
    /// The email uniqueness rule still applies to the replacement.
    pub fn replace_investor(&mut self, investor: Investor) -> Result<(), RegistryError> {
        if self
            .investors
            .iter()
            .any(|i| i.id != investor.id && i.email.eq_ignore_ascii_case(&investor.email))
        {
            return Err(RegistryError::DuplicateEmail(investor.email));
        }
        let slot = self
            .investors
            .iter_mut()
            .find(|i| i.id == investor.id)
            .ok_or_else(|| RegistryError::InvestorNotFound(investor.id.to_string()))?;
        *slot = investor;
        Ok(())
    }

    /// Replaces several records in one step
    ///
    /// Every id is checked before anything is written, so either all
    /// replacements land or none do.
    pub fn commit(
        &mut self,
        unit_classes: Vec<UnitClass>,
        investors: Vec<Investor>,
    ) -> Result<(), RegistryError> {
        for unit_class in &unit_classes {
            self.unit_class(unit_class.id)?;
        }
        for investor in &investors {
            self.investor(investor.id)?;
            if self
                .investors
                .iter()
                .any(|i| i.id != investor.id && i.email.eq_ignore_ascii_case(&investor.email))
            {
                return Err(RegistryError::DuplicateEmail(investor.email.clone()));
            }
        }

        for unit_class in unit_classes {
            self.replace_unit_class(unit_class)?;
        }
        for investor in investors {
            self.replace_investor(investor)?;
        }
        Ok(())
    }

    /// Sets a new unit price and revalues every holding in the class
    pub fn set_unit_price(&mut self, id: UnitClassId, price: Decimal) -> Result<(), RegistryError> {
        if price < Decimal::ZERO {
            return Err(RegistryError::InvalidUnitClass(format!(
                "unit price must not be negative, got {price}"
            )));
        }
        let mut unit_class = self.unit_class(id)?.clone();
        unit_class.unit_price = price;

        // Revalue copies first so an out-of-range value changes nothing
        let mut investors = Vec::new();
        for investor in self.investors.iter().filter(|i| i.holding(id).is_some()) {
            let mut revalued = investor.clone();
            revalued.revalue(id, price)?;
            investors.push(revalued);
        }
        self.commit(vec![unit_class], investors)?;
        info!(unit_class_id = %id, %price, "Unit price updated");
        Ok(())
    }
}
