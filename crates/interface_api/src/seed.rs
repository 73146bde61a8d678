//! Demonstration data set
//!
//! Two unit classes, two investors, three January 2024 bank
//! transactions and a handful of requests in mixed states. Ids are
//! fixed so clients and tests can address the records directly.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use core_kernel::{BankTransactionId, Currency, InvestorId, Money, MoneyError, RequestId, UnitClassId};
use domain_bookkeeping::{BankTransaction, BookkeepingError, CashBook, ClearingStatus, TransactionType};
use domain_metrics::estimated_units;
use domain_registry::{Asset, AssetType, Holding, Investor, Registry, RegistryError, RiskProfile, UnitClass};
use domain_requests::{
    PurchaseDetails, Request, RequestDetails, RequestError, RequestLedger, RequestStatus,
    SharesPurchaseDetails,
};

use crate::state::TrustStore;

pub const GROWTH_FUND_A: UnitClassId = UnitClassId::from_u128(0x0001);
pub const INCOME_FUND_B: UnitClassId = UnitClassId::from_u128(0x0002);

pub const JOHN_SMITH: InvestorId = InvestorId::from_u128(0x0101);
pub const SARAH_JOHNSON: InvestorId = InvestorId::from_u128(0x0102);

pub const RENTAL_INCOME: BankTransactionId = BankTransactionId::from_u128(0x0201);
pub const MANAGEMENT_FEE: BankTransactionId = BankTransactionId::from_u128(0x0202);
pub const CBA_DIVIDEND: BankTransactionId = BankTransactionId::from_u128(0x0203);

/// John's pending Growth Fund A purchase
pub const PENDING_PURCHASE: RequestId = RequestId::from_u128(0x0301);
/// Sarah's approved Income Fund B purchase
pub const APPROVED_PURCHASE: RequestId = RequestId::from_u128(0x0302);
/// John's pending CBA shares purchase
pub const PENDING_SHARES: RequestId = RequestId::from_u128(0x0303);

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Bookkeeping(#[from] BookkeepingError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error("Invalid fixture date {0}")]
    Date(String),

    #[error("Invalid fixture timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Builds the demonstration trust
pub fn demo_store() -> Result<TrustStore, SeedError> {
    let registry = demo_registry()?;
    let cash_book = demo_cash_book()?;
    let ledger = demo_ledger(&registry)?;
    Ok(TrustStore::from_parts(registry, cash_book, ledger))
}

pub fn demo_registry() -> Result<Registry, SeedError> {
    let mut registry = Registry::new();

    registry.add_unit_class(
        UnitClass::new(
            GROWTH_FUND_A,
            "Growth Fund A",
            dec!(1.25),
            dec!(10000),
            Money::aud(dec!(15000000)),
            Money::aud(dec!(2500000)),
        )?
        .with_description("High-growth investment focused on property and equity")
        .with_history(dec!(8.75), date(2020, 1, 15)?),
    )?;
    registry.add_unit_class(
        UnitClass::new(
            INCOME_FUND_B,
            "Income Fund B",
            dec!(1.15),
            dec!(8000),
            Money::aud(dec!(11000000)),
            Money::aud(dec!(1800000)),
        )?
        .with_description("Stable income-generating investments")
        .with_history(dec!(5.25), date(2019, 6, 1)?),
    )?;

    registry.add_investor(
        Investor::new(JOHN_SMITH, "John Smith", "john.smith@email.com")
            .with_phone("+61 400 123 456")
            .with_join_date(date(2023, 3, 15)?)
            .with_risk_profile(RiskProfile::Moderate)
            .with_holding(Holding::opening(GROWTH_FUND_A, dec!(1500), dec!(1.25), Currency::AUD)?)
            .with_holding(Holding::opening(INCOME_FUND_B, dec!(800), dec!(1.15), Currency::AUD)?),
    )?;
    registry.add_investor(
        Investor::new(SARAH_JOHNSON, "Sarah Johnson", "sarah.johnson@email.com")
            .with_phone("+61 400 987 654")
            .with_join_date(date(2022, 11, 20)?)
            .with_risk_profile(RiskProfile::Aggressive)
            .with_holding(Holding::opening(GROWTH_FUND_A, dec!(1000), dec!(1.25), Currency::AUD)?)
            .with_holding(Holding::opening(INCOME_FUND_B, dec!(500), dec!(1.15), Currency::AUD)?),
    )?;

    registry.add_asset(
        Asset::new(
            AssetType::Property,
            "Investment Property A",
            Money::aud(dec!(850000)),
            Money::aud(dec!(750000)),
            date(2021, 3, 1)?,
        )
        .with_liability(Money::aud(dec!(600000)))
        .with_location("Parramatta NSW"),
    );
    registry.add_asset(
        Asset::new(
            AssetType::Shares,
            "Commonwealth Bank of Australia",
            Money::aud(dec!(52750)),
            Money::aud(dec!(45000)),
            date(2022, 7, 1)?,
        )
        .with_listing("CBA", dec!(500)),
    );

    Ok(registry)
}

pub fn demo_cash_book() -> Result<CashBook, SeedError> {
    let mut cash_book = CashBook::new(Currency::AUD);

    cash_book.record(
        BankTransaction::new(
            date(2024, 1, 15)?,
            "Rental Income - Property A",
            TransactionType::Income,
            Money::aud(dec!(5000)),
            Money::aud(dec!(500)),
            "Rental Income",
        )?
        .with_id(RENTAL_INCOME),
    )?;
    cash_book.record(
        BankTransaction::new(
            date(2024, 1, 14)?,
            "Property Management Fee",
            TransactionType::Expense,
            Money::aud(dec!(800)),
            Money::aud(dec!(80)),
            "Property Management",
        )?
        .with_id(MANAGEMENT_FEE)
        .with_status(ClearingStatus::Cleared),
    )?;
    cash_book.record(
        BankTransaction::new(
            date(2024, 1, 13)?,
            "Dividend Income - ASX:CBA",
            TransactionType::Income,
            Money::aud(dec!(2500)),
            Money::aud(Decimal::ZERO),
            "Dividends",
        )?
        .with_id(CBA_DIVIDEND)
        .with_status(ClearingStatus::Reconciled),
    )?;

    Ok(cash_book)
}

/// Requests are restored as recorded; none of them touch the registry
pub fn demo_ledger(registry: &Registry) -> Result<RequestLedger, SeedError> {
    let mut ledger = RequestLedger::new();

    let growth = registry.unit_class(GROWTH_FUND_A)?;
    ledger.restore(
        Request::pending(purchase(JOHN_SMITH, growth, dec!(50000)), None)
            .with_id(PENDING_PURCHASE)
            .submitted(timestamp("2024-01-15T10:30:00Z")?),
    )?;

    let income = registry.unit_class(INCOME_FUND_B)?;
    let mut approved = Request::pending(purchase(SARAH_JOHNSON, income, dec!(25000)), None)
        .with_id(APPROVED_PURCHASE)
        .submitted(timestamp("2024-01-14T14:20:00Z")?);
    approved.resolve(
        RequestStatus::Approved,
        "Admin User",
        timestamp("2024-01-14T16:45:00Z")?,
    )?;
    ledger.restore(approved)?;

    let price = Money::aud(dec!(105.50));
    ledger.restore(
        Request::pending(
            RequestDetails::SharesPurchase(SharesPurchaseDetails {
                investor_id: JOHN_SMITH,
                symbol: "CBA".to_string(),
                quantity: dec!(100),
                estimated_price: price,
                total_amount: price.multiply(dec!(100))?,
            }),
            None,
        )
        .with_id(PENDING_SHARES)
        .submitted(timestamp("2024-01-15T11:00:00Z")?),
    )?;

    Ok(ledger)
}

fn purchase(investor_id: InvestorId, unit_class: &UnitClass, amount: Decimal) -> RequestDetails {
    RequestDetails::Purchase(PurchaseDetails {
        investor_id,
        unit_class_id: unit_class.id,
        amount: Money::aud(amount),
        fees: Money::zero(Currency::AUD),
        unit_price: unit_class.unit_price,
        estimated_units: estimated_units(amount, unit_class.unit_price),
    })
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, SeedError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| SeedError::Date(format!("{year}-{month:02}-{day:02}")))
}

fn timestamp(value: &str) -> Result<DateTime<Utc>, SeedError> {
    Ok(value.parse::<DateTime<Utc>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_store_loads() {
        let store = demo_store().unwrap();
        assert_eq!(store.registry().unit_classes().len(), 2);
        assert_eq!(store.registry().investors().len(), 2);
        assert_eq!(store.cash_book().transactions().len(), 3);
        assert_eq!(store.ledger().len(), 3);
        assert_eq!(store.ledger().pending_count(), 2);
    }

    #[test]
    fn test_purchase_estimates_follow_snapshot_price() {
        let store = demo_store().unwrap();
        let request = store.ledger().get(PENDING_PURCHASE).unwrap();
        let RequestDetails::Purchase(details) = &request.details else {
            panic!("expected a purchase");
        };
        assert_eq!(details.estimated_units, 40000);
        assert_eq!(details.unit_price, dec!(1.25));
    }

    #[test]
    fn test_approved_purchase_keeps_its_history() {
        let store = demo_store().unwrap();
        let request = store.ledger().get(APPROVED_PURCHASE).unwrap();
        assert_eq!(request.status, RequestStatus::Approved);
        assert_eq!(request.approved_by.as_deref(), Some("Admin User"));
        assert_eq!(request.approved_at, Some(timestamp("2024-01-14T16:45:00Z").unwrap()));
    }
}
