//! Pre-built Test Fixtures
//!
//! The demonstration trust served by the API binary, plus small values
//! tests reach for repeatedly. Fixture ids are the seed's fixed ids.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{Currency, DateRange, InvestorId, Money, UnitClassId};
use domain_requests::{PurchaseDraft, RedemptionDraft, RequestDraft, SharesPurchaseDraft, TransferDraft};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub use interface_api::seed::{
    APPROVED_PURCHASE, CBA_DIVIDEND, GROWTH_FUND_A, INCOME_FUND_B, JOHN_SMITH, MANAGEMENT_FEE,
    PENDING_PURCHASE, PENDING_SHARES, RENTAL_INCOME, SARAH_JOHNSON,
};
use interface_api::seed::demo_store;
use interface_api::TrustStore;

/// Fixture for the demonstration trust
pub struct TrustFixtures;

impl TrustFixtures {
    /// Registry, cash book and ledger as the API server seeds them
    pub fn demo() -> TrustStore {
        demo_store().expect("demonstration data set should load")
    }

    /// A store with nothing in it
    pub fn empty() -> TrustStore {
        TrustStore::new(Currency::AUD)
    }
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn aud(amount: Decimal) -> Money {
        Money::aud(amount)
    }

    /// The reference purchase amount
    pub fn fifty_thousand() -> Money {
        Money::aud(dec!(50000))
    }

    pub fn aud_zero() -> Money {
        Money::zero(Currency::AUD)
    }

    /// An amount in a currency the trust does not report in
    pub fn nzd_100() -> Money {
        Money::new(dec!(100), Currency::NZD)
    }
}

/// Fixture for dates and reporting periods
pub struct TemporalFixtures;

impl TemporalFixtures {
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
    }

    /// January 2024, the month of the fixture transactions
    pub fn january_2024() -> DateRange {
        DateRange::new(Self::date(2024, 1, 1), Self::date(2024, 1, 31)).expect("valid period")
    }

    /// The BAS quarter holding the fixture transactions
    pub fn q1_2024() -> DateRange {
        DateRange::new(Self::date(2024, 1, 1), Self::date(2024, 3, 31)).expect("valid period")
    }

    /// 15 January 2024, 10:30 in Sydney
    pub fn statement_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 14, 23, 30, 0).unwrap()
    }
}

/// Fixture for request drafts against the demonstration trust
pub struct DraftFixtures;

impl DraftFixtures {
    pub fn purchase(investor_id: InvestorId, unit_class_id: UnitClassId, amount: Decimal) -> RequestDraft {
        RequestDraft::Purchase(PurchaseDraft {
            investor_id,
            unit_class_id,
            amount: Money::aud(amount),
            fees: None,
            notes: None,
        })
    }

    pub fn redemption(investor_id: InvestorId, unit_class_id: UnitClassId, units: Decimal) -> RequestDraft {
        RequestDraft::Redemption(RedemptionDraft {
            investor_id,
            unit_class_id,
            units,
            notes: None,
        })
    }

    pub fn transfer(
        from: InvestorId,
        to: InvestorId,
        unit_class_id: UnitClassId,
        units: Decimal,
    ) -> RequestDraft {
        RequestDraft::Transfer(TransferDraft {
            from_investor_id: from,
            to_investor_id: to,
            unit_class_id,
            units,
            notes: None,
        })
    }

    pub fn shares(investor_id: InvestorId, symbol: &str, quantity: Decimal, price: Decimal) -> RequestDraft {
        RequestDraft::SharesPurchase(SharesPurchaseDraft {
            investor_id,
            symbol: symbol.to_string(),
            quantity,
            estimated_price: Money::aud(price),
            notes: None,
        })
    }
}
