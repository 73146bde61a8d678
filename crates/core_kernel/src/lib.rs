//! Core Kernel - Foundational types and utilities for the unit trust system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Calendar types for reporting periods and statement time zones
//! - Strongly-typed identifiers

pub mod money;
pub mod temporal;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{DateRange, Timezone, TemporalError};
pub use identifiers::{
    UnitClassId, InvestorId, RequestId, BankTransactionId, AssetId,
};
