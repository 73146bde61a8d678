//! Unit Registry Domain
//!
//! This crate holds the static side of the trust: unit classes, the
//! investors who hold units in them, and the asset register.
//!
//! # Key Concepts
//!
//! - **Unit class**: a named pool with its own unit price
//! - **NAV**: assets minus liabilities of a unit class
//! - **Holding**: an investor's units in one unit class
//!
//! # Unit Precision
//!
//! Units are stored with 6 decimal places; values at 4 (see `Money`).

pub mod unit_class;
pub mod investor;
pub mod holding;
pub mod asset;
pub mod registry;
pub mod error;

pub use unit_class::UnitClass;
pub use investor::{Investor, InvestorStatus, RiskProfile};
pub use holding::Holding;
pub use asset::{Asset, AssetType};
pub use registry::Registry;
pub use error::RegistryError;

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal::Decimal;

/// Standard unit precision (6 decimal places)
pub const UNIT_PRECISION: u32 = 6;

/// Rounds a value to standard unit precision
pub fn round_units(value: Decimal) -> Decimal {
    value.round_dp(UNIT_PRECISION)
}

/// Values a number of units at a unit price
pub fn unit_value(units: Decimal, price: Decimal, currency: Currency) -> Result<Money, MoneyError> {
    Money::product(units, price, currency)
}
