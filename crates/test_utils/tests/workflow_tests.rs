//! Cross-crate workflow tests
//!
//! Drive the demonstration trust through submit, approve and reporting
//! the way the API does, without HTTP in between.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_bookkeeping::{CashBook, TransactionType};
use domain_metrics::{estimated_units, income_expense_gst, property_health_score, total_nav};
use domain_requests::{RequestDetails, RequestStatus};
use domain_statements::{Branding, StatementBuilder};
use interface_api::error::ApiError;

use test_utils::*;

fn statements() -> StatementBuilder {
    StatementBuilder::new(Branding::default(), Default::default())
        .generated_at(TemporalFixtures::statement_time())
}

fn units_held(store: &interface_api::TrustStore, investor: core_kernel::InvestorId, class: core_kernel::UnitClassId) -> Decimal {
    store.registry().investor(investor).unwrap().units_in(class)
}

// ============================================================================
// Approval Workflows
// ============================================================================

mod approval_workflows {
    use super::*;

    #[test]
    fn test_purchase_flows_into_portfolio_statement() {
        let mut store = TrustFixtures::demo();

        let request = assert_ok!(store.approve(PENDING_PURCHASE, "Admin User"));
        assert_request_status(&request, RequestStatus::Approved);
        assert_eq!(units_held(&store, JOHN_SMITH, GROWTH_FUND_A), dec!(41500));

        let investor = store.registry().investor(JOHN_SMITH).unwrap();
        let valuation = store.valuation(JOHN_SMITH).unwrap();
        // 41,500 x $1.25 + 800 x $1.15
        assert_money_eq(&valuation.total_value, dec!(52795));
        assert_valuation_balances(&valuation);

        let statement = statements().portfolio(investor, &valuation).unwrap();
        assert_statement_line(&statement, "Holdings", "Total Portfolio Value", "$52,795.00");
    }

    #[test]
    fn test_redemption_pays_out_snapshot_value() {
        let mut store = TrustFixtures::demo();
        let nav_before = store.registry().unit_class(INCOME_FUND_B).unwrap().nav();

        let request = store
            .submit(&DraftFixtures::redemption(SARAH_JOHNSON, INCOME_FUND_B, dec!(200)))
            .unwrap();
        let RequestDetails::Redemption(details) = &request.details else {
            panic!("expected a redemption");
        };
        assert_money_eq(&details.estimated_value, dec!(230));

        store.approve(request.id, "Admin User").unwrap();

        let income = store.registry().unit_class(INCOME_FUND_B).unwrap();
        assert_eq!(income.total_units, dec!(7800));
        assert_money_within_cent(&income.nav(), &Money::aud(nav_before.amount() - dec!(230)));
        assert_eq!(units_held(&store, SARAH_JOHNSON, INCOME_FUND_B), dec!(300));
    }

    #[test]
    fn test_transfer_keeps_class_totals() {
        let mut store = TrustFixtures::demo();
        let total_before = store.registry().unit_class(GROWTH_FUND_A).unwrap().total_units;

        let request = store
            .submit(&DraftFixtures::transfer(JOHN_SMITH, SARAH_JOHNSON, GROWTH_FUND_A, dec!(500)))
            .unwrap();
        store.approve(request.id, "Admin User").unwrap();

        assert_eq!(units_held(&store, JOHN_SMITH, GROWTH_FUND_A), dec!(1000));
        assert_eq!(units_held(&store, SARAH_JOHNSON, GROWTH_FUND_A), dec!(1500));
        assert_eq!(
            store.registry().unit_class(GROWTH_FUND_A).unwrap().total_units,
            total_before
        );
    }

    #[test]
    fn test_shares_purchase_has_no_registry_effect() {
        let mut store = TrustFixtures::demo();
        let registry_before = store.registry().clone();

        store.approve(PENDING_SHARES, "Admin User").unwrap();

        assert_eq!(store.registry().investors(), registry_before.investors());
        assert_eq!(store.registry().unit_classes(), registry_before.unit_classes());
    }

    #[test]
    fn test_stale_redemption_fails_and_changes_nothing() {
        let mut store = TrustFixtures::demo();

        let redemption = store
            .submit(&DraftFixtures::redemption(JOHN_SMITH, GROWTH_FUND_A, dec!(1500)))
            .unwrap();
        let transfer = store
            .submit(&DraftFixtures::transfer(JOHN_SMITH, SARAH_JOHNSON, GROWTH_FUND_A, dec!(1000)))
            .unwrap();
        store.approve(transfer.id, "Admin User").unwrap();

        let registry_before = store.registry().clone();
        assert_err_variant!(store.approve(redemption.id, "Admin User"), ApiError::Validation { .. });

        assert_eq!(store.registry().investors(), registry_before.investors());
        assert_eq!(store.registry().unit_classes(), registry_before.unit_classes());
        assert_request_status(store.ledger().get(redemption.id).unwrap(), RequestStatus::Pending);
    }

    #[test]
    fn test_resolved_requests_are_final() {
        let mut store = TrustFixtures::demo();
        assert_err_variant!(
            store.approve(APPROVED_PURCHASE, "Admin User"),
            ApiError::InvalidTransition(_)
        );
        assert_err_variant!(
            store.reject(APPROVED_PURCHASE, "Admin User"),
            ApiError::InvalidTransition(_)
        );
    }

    #[test]
    fn test_pending_count_tracks_submissions() {
        let mut store = TrustFixtures::demo();
        store
            .submit(&DraftFixtures::shares(SARAH_JOHNSON, "nab", dec!(50), dec!(32.10)))
            .unwrap();
        assert_eq!(store.summary().unwrap().pending_requests, 3);

        store.reject(PENDING_PURCHASE, "Admin User").unwrap();
        assert_eq!(store.summary().unwrap().pending_requests, 2);
    }
}

// ============================================================================
// Reporting
// ============================================================================

mod reporting {
    use super::*;

    #[test]
    fn test_bas_for_first_quarter() {
        let store = TrustFixtures::demo();
        let period = TemporalFixtures::q1_2024();
        let totals = store.income_expense_gst(Some(&period)).unwrap();

        let statement = statements().bas(&totals, &period).unwrap();
        assert_statement_line(&statement, "Reporting Period", "Quarter", "Q1 2024");
        assert_statement_line(&statement, "BAS Summary", "7A Net amount of GST", "$420.00");
        assert_statement_line(&statement, "Income Summary", "Net Income", "$6,700.00");
    }

    #[test]
    fn test_empty_store_reports_zeroes() {
        let store = TrustFixtures::empty();
        let summary = store.summary().unwrap();
        assert!(summary.total_nav.is_zero());
        assert_eq!(summary.pending_requests, 0);
    }

    #[test]
    fn test_builder_registry_nav() {
        let registry = TestRegistryBuilder::new()
            .unit_class(TestUnitClassBuilder::new().with_balance_sheet(dec!(500), dec!(100)).build())
            .unit_class(TestUnitClassBuilder::new().with_balance_sheet(dec!(300), dec!(300)).build())
            .build();
        let nav = total_nav(registry.unit_classes(), Currency::AUD).unwrap();
        assert_money_eq(&nav, dec!(400));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod proptests {
    use super::*;

    proptest! {
        #[test]
        fn gst_totals_match_the_cash_book(transactions in transactions_strategy(20)) {
            let mut book = CashBook::new(Currency::AUD);
            for tx in transactions.iter().cloned() {
                book.record(tx).unwrap();
            }

            let totals = income_expense_gst(book.transactions(), None, Currency::AUD).unwrap();
            let income: Decimal = transactions
                .iter()
                .filter(|t| t.transaction_type == TransactionType::Income)
                .map(|t| t.amount.amount())
                .sum();
            let gst: Decimal = transactions.iter().map(|t| t.gst.amount()).sum();

            prop_assert_eq!(totals.income.amount(), income);
            prop_assert_eq!(totals.gst.amount(), gst);
            prop_assert_eq!(
                totals.net_income.amount(),
                totals.income.amount() - totals.expenses.amount()
            );
        }

        #[test]
        fn period_totals_never_exceed_all_time(
            transactions in transactions_strategy(20),
            period in period_2024_strategy(),
        ) {
            let all = income_expense_gst(&transactions, None, Currency::AUD).unwrap();
            let some = income_expense_gst(&transactions, Some(&period), Currency::AUD).unwrap();
            prop_assert!(some.income.amount() <= all.income.amount());
            prop_assert!(some.expenses.amount() <= all.expenses.amount());
        }

        #[test]
        fn estimated_units_never_overspend(amount in aud_money_strategy(), price in unit_price_strategy()) {
            let units = estimated_units(amount.amount(), price);
            prop_assert!(Decimal::from(units) * price <= amount.amount());
            prop_assert!(Decimal::from(units + 1) * price > amount.amount());
        }

        #[test]
        fn health_score_is_banded(inputs in property_inputs_strategy()) {
            let assessment = property_health_score(&inputs);
            prop_assert!(assessment.score <= 100);
            prop_assert_eq!(assessment.score % 25, 0);
        }

        #[test]
        fn unit_class_equity_stays_in_range(class in unit_class_strategy()) {
            let ratio = domain_metrics::equity_ratio(&class);
            prop_assert!(ratio >= Decimal::ZERO && ratio <= dec!(100));
        }

        #[test]
        fn approved_purchase_adds_exactly_the_estimate(amount in 100u32..100_000u32) {
            let mut store = TrustFixtures::demo();
            let draft = DraftFixtures::purchase(SARAH_JOHNSON, GROWTH_FUND_A, Decimal::from(amount));
            let request = store.submit(&draft).unwrap();
            let RequestDetails::Purchase(details) = &request.details else {
                panic!("expected a purchase");
            };

            let before = units_held(&store, SARAH_JOHNSON, GROWTH_FUND_A);
            store.approve(request.id, "Admin User").unwrap();
            let after = units_held(&store, SARAH_JOHNSON, GROWTH_FUND_A);

            prop_assert_eq!(after - before, Decimal::from(details.estimated_units));
            prop_assert_eq!(
                store.registry().unit_class(GROWTH_FUND_A).unwrap().assets(),
                Money::aud(dec!(15000000) + Decimal::from(amount))
            );
        }
    }
}
