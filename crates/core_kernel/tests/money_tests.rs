//! Unit tests for the Money module
//!
//! Tests cover money creation, checked arithmetic, summation,
//! currency handling, and edge cases.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::AUD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_aud_constructor() {
        let m = Money::aud(dec!(5000));
        assert_eq!(m.currency(), Currency::AUD);
        assert_eq!(m.amount(), dec!(5000));
    }

    #[test]
    fn test_default_currency_is_aud() {
        assert_eq!(Currency::default(), Currency::AUD);
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::aud(dec!(-100.00));
        assert!(m.is_negative());
        assert!(!m.is_positive());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_sub() {
        let nav = Money::aud(dec!(15000000))
            .checked_sub(&Money::aud(dec!(2500000)))
            .unwrap();
        assert_eq!(nav.amount(), dec!(12500000));
    }

    #[test]
    fn test_multiply_by_unit_price() {
        let value = Money::aud(dec!(1500)).multiply(dec!(1.25)).unwrap();
        assert_eq!(value.amount(), dec!(1875));
    }

    #[test]
    fn test_divide_by_zero() {
        let result = Money::aud(dec!(10)).divide(dec!(0));
        assert_eq!(result, Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_sum_rejects_mixed_currencies() {
        let amounts = vec![Money::aud(dec!(1)), Money::new(dec!(1), Currency::NZD)];
        let result = Money::sum(amounts.iter(), Currency::AUD);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_negation() {
        assert_eq!((-Money::aud(dec!(80))).amount(), dec!(-80));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_uses_symbol_and_two_places() {
        assert_eq!(Money::aud(dec!(1234.5)).to_string(), "$ 1234.50");
        assert_eq!(Money::new(dec!(10), Currency::NZD).to_string(), "NZ$ 10.00");
    }
}
