//! Tests for domain_registry

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{Currency, InvestorId, Money, MoneyError, UnitClassId};
use domain_registry::{Holding, Investor, Registry, RegistryError, UnitClass};

const GROWTH: UnitClassId = UnitClassId::from_u128(1);
const INCOME: UnitClassId = UnitClassId::from_u128(2);

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .add_unit_class(
            UnitClass::new(GROWTH, "Growth Fund A", dec!(1.25), dec!(10000),
                Money::aud(dec!(15000000)), Money::aud(dec!(2500000)))
                .unwrap()
                .with_history(dec!(8.75), NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()),
        )
        .unwrap();
    registry
        .add_unit_class(
            UnitClass::new(INCOME, "Income Fund B", dec!(1.15), dec!(8000),
                Money::aud(dec!(11000000)), Money::aud(dec!(1800000)))
                .unwrap(),
        )
        .unwrap();
    registry
}

// ============================================================================
// Investor registration
// ============================================================================

mod investor_registration {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut registry = registry();
        let id = InvestorId::new_v7();
        registry
            .add_investor(
                Investor::new(id, "John Smith", "john.smith@email.com")
                    .with_holding(Holding::opening(GROWTH, dec!(1500), dec!(1.25), Currency::AUD).unwrap()),
            )
            .unwrap();

        let investor = registry.investor(id).unwrap();
        assert_eq!(investor.units_in(GROWTH), dec!(1500));
        assert_eq!(investor.holding(GROWTH).unwrap().value.amount(), dec!(1875));
    }

    #[test]
    fn test_duplicate_email_is_case_insensitive() {
        let mut registry = registry();
        registry
            .add_investor(Investor::new(InvestorId::new(), "A", "sarah@email.com"))
            .unwrap();

        let result = registry.add_investor(Investor::new(InvestorId::new(), "B", "Sarah@Email.com"));
        assert!(matches!(result, Err(RegistryError::DuplicateEmail(_))));
        assert_eq!(registry.investors().len(), 1);
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut registry = registry();
        let result = registry.add_investor(Investor::new(InvestorId::new(), "A", "not-an-email"));
        assert!(matches!(result, Err(RegistryError::InvalidEmail(_))));
    }

    #[test]
    fn test_holding_in_unknown_class_rejected() {
        let mut registry = registry();
        let investor = Investor::new(InvestorId::new(), "A", "a@example.com")
            .with_holding(Holding::opening(UnitClassId::new(), dec!(1), dec!(1), Currency::AUD).unwrap());

        let err = registry.add_investor(investor).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unknown_investor_lookup() {
        let registry = registry();
        assert!(matches!(
            registry.investor(InvestorId::new()),
            Err(RegistryError::InvestorNotFound(_))
        ));
    }
}

// ============================================================================
// Unit prices and replacement
// ============================================================================

mod pricing {
    use super::*;

    #[test]
    fn test_set_unit_price_revalues_holdings() {
        let mut registry = registry();
        let id = InvestorId::new();
        registry
            .add_investor(
                Investor::new(id, "Sarah", "sarah@email.com")
                    .with_holding(Holding::opening(INCOME, dec!(500), dec!(1.15), Currency::AUD).unwrap()),
            )
            .unwrap();

        registry.set_unit_price(INCOME, dec!(1.20)).unwrap();

        assert_eq!(registry.unit_class(INCOME).unwrap().unit_price, dec!(1.20));
        let holding = registry.investor(id).unwrap().holding(INCOME).unwrap().clone();
        assert_eq!(holding.value.amount(), dec!(600));
        assert_eq!(holding.average_price, dec!(1.15));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut registry = registry();
        assert!(registry.set_unit_price(GROWTH, dec!(-1)).is_err());
        assert_eq!(registry.unit_class(GROWTH).unwrap().unit_price, dec!(1.25));
    }

    #[test]
    fn test_out_of_range_price_changes_nothing() {
        let mut registry = registry();
        let id = InvestorId::new();
        registry
            .add_investor(
                Investor::new(id, "Sarah", "sarah@email.com")
                    .with_holding(Holding::opening(INCOME, dec!(500), dec!(1.15), Currency::AUD).unwrap()),
            )
            .unwrap();

        let result = registry.set_unit_price(INCOME, dec!(1000000000000000000000000000));

        assert!(matches!(result, Err(RegistryError::Money(MoneyError::Overflow))));
        assert_eq!(registry.unit_class(INCOME).unwrap().unit_price, dec!(1.15));
        let holding = registry.investor(id).unwrap().holding(INCOME).unwrap();
        assert_eq!(holding.value.amount(), dec!(575));
    }

    #[test]
    fn test_replace_investor_keeps_email_unique() {
        let mut registry = registry();
        let a = InvestorId::new();
        let b = InvestorId::new();
        registry.add_investor(Investor::new(a, "A", "a@example.com")).unwrap();
        registry.add_investor(Investor::new(b, "B", "b@example.com")).unwrap();

        let mut clash = registry.investor(b).unwrap().clone();
        clash.email = "a@example.com".to_string();

        assert!(matches!(
            registry.replace_investor(clash),
            Err(RegistryError::DuplicateEmail(_))
        ));
    }

    #[test]
    fn test_duplicate_unit_class_rejected() {
        let mut registry = registry();
        let again = registry.unit_class(GROWTH).unwrap().clone();
        assert!(registry.add_unit_class(again).is_err());
        assert_eq!(registry.unit_classes().len(), 2);
    }
}

// ============================================================================
// Commit
// ============================================================================

mod commit {
    use super::*;

    #[test]
    fn test_commit_replaces_class_and_investor_together() {
        let mut registry = registry();
        let id = InvestorId::from_u128(10);
        registry
            .add_investor(Investor::new(id, "John Smith", "john.smith@email.com"))
            .unwrap();

        let mut class = registry.unit_class(GROWTH).unwrap().clone();
        class.issue_units(dec!(100), Money::aud(dec!(125))).unwrap();
        let mut investor = registry.investor(id).unwrap().clone();
        investor.credit_units(GROWTH, dec!(100), dec!(1.25), Currency::AUD).unwrap();

        registry.commit(vec![class], vec![investor]).unwrap();

        assert_eq!(registry.unit_class(GROWTH).unwrap().total_units, dec!(10100));
        assert_eq!(registry.investor(id).unwrap().units_in(GROWTH), dec!(100));
    }

    #[test]
    fn test_commit_with_unknown_investor_writes_nothing() {
        let mut registry = registry();
        let mut class = registry.unit_class(GROWTH).unwrap().clone();
        class.issue_units(dec!(100), Money::aud(dec!(125))).unwrap();
        let stranger = Investor::new(InvestorId::new(), "Nobody", "nobody@example.com");

        let result = registry.commit(vec![class], vec![stranger]);

        assert!(matches!(result, Err(RegistryError::InvestorNotFound(_))));
        assert_eq!(registry.unit_class(GROWTH).unwrap().total_units, dec!(10000));
    }
}
