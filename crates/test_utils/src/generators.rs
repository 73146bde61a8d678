//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Duration, NaiveDate};
use core_kernel::{Currency, DateRange, InvestorId, Money, UnitClassId};
use domain_bookkeeping::{BankTransaction, TransactionType};
use domain_metrics::PropertyInputs;
use domain_registry::UnitClass;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for positive AUD amounts with cents, up to $10m
pub fn aud_money_strategy() -> impl Strategy<Value = Money> {
    (1i64..1_000_000_000i64).prop_map(|cents| Money::from_minor(cents, Currency::AUD))
}

/// Strategy for unit prices between $0.0100 and $99.9999
pub fn unit_price_strategy() -> impl Strategy<Value = Decimal> {
    (100i64..1_000_000i64).prop_map(|n| Decimal::new(n, 4))
}

/// Strategy for unit quantities with up to 6 decimal places
pub fn units_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000_000i64).prop_map(|n| Decimal::new(n, 6))
}

/// Strategy for dates in 2024
pub fn date_2024_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..366i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(days)
    })
}

/// Strategy for reporting periods within 2024
pub fn period_2024_strategy() -> impl Strategy<Value = DateRange> {
    (date_2024_strategy(), 0i64..120i64).prop_map(|(start, length)| {
        DateRange::new(start, start + Duration::days(length)).expect("Generated invalid period")
    })
}

/// Strategy for valid unit classes; liabilities never exceed assets
pub fn unit_class_strategy() -> impl Strategy<Value = UnitClass> {
    (unit_price_strategy(), units_strategy(), 0i64..1_000_000_000i64, 0u32..=100u32).prop_map(
        |(price, units, asset_cents, debt_percent)| {
            let assets = Money::from_minor(asset_cents, Currency::AUD);
            let liabilities = assets.multiply(Decimal::new(debt_percent as i64, 2)).unwrap();
            UnitClass::new(UnitClassId::new_v7(), "Generated Fund", price, units, assets, liabilities)
                .expect("Generated invalid unit class")
        },
    )
}

/// Strategy for AUD bank transactions with GST at most the amount
pub fn bank_transaction_strategy() -> impl Strategy<Value = BankTransaction> {
    (
        date_2024_strategy(),
        prop_oneof![Just(TransactionType::Income), Just(TransactionType::Expense)],
        1i64..100_000_000i64,
        0u32..=10u32,
    )
        .prop_map(|(date, kind, cents, gst_tenths)| {
            let amount = Money::from_minor(cents, Currency::AUD);
            let gst = amount.multiply(Decimal::new(gst_tenths as i64, 2)).unwrap();
            BankTransaction::new(date, "Generated entry", kind, amount, gst, "Generated")
                .expect("Generated invalid transaction")
        })
}

/// Strategy for a cash book's worth of transactions
pub fn transactions_strategy(max: usize) -> impl Strategy<Value = Vec<BankTransaction>> {
    proptest::collection::vec(bank_transaction_strategy(), 0..=max)
}

/// Strategy for property scenarios in the ranges the calculator is used with
pub fn property_inputs_strategy() -> impl Strategy<Value = PropertyInputs> {
    (
        100_000u32..5_000_000u32,
        0u32..=100u32,
        0u32..20_000u32,
        0u32..5_000u32,
        0u32..1_500u32,
    )
        .prop_map(|(value, loan_percent, rent, expenses, rate_bp)| {
            let property_value = f64::from(value);
            PropertyInputs {
                property_value,
                purchase_price: None,
                loan_amount: property_value * f64::from(loan_percent) / 100.0,
                monthly_rent: f64::from(rent),
                monthly_expenses: f64::from(expenses),
                interest_rate: f64::from(rate_bp) / 100.0,
            }
        })
}

/// Strategy for InvestorId
pub fn investor_id_strategy() -> impl Strategy<Value = InvestorId> {
    any::<[u8; 16]>().prop_map(|bytes| InvestorId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for ASX-style tickers
pub fn symbol_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{3,4}".prop_map(|s| s)
}
