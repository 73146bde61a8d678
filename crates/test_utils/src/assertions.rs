//! Assertions for trust records
//!
//! Panic messages name the record involved so a failing workflow test
//! points at the request, investor or statement line.

use core_kernel::Money;
use domain_metrics::InvestorValuation;
use domain_requests::{Request, RequestStatus};
use domain_statements::Statement;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Asserts two amounts agree to the cent
///
/// Unit arithmetic keeps four decimals, so values that print the same on
/// a statement may still differ in the last two places.
pub fn assert_money_within_cent(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "{actual} and {expected} are in different currencies"
    );
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(diff < dec!(0.01), "{actual} differs from {expected} by {diff}");
}

/// Asserts a Money value holds exactly `amount`, whatever its scale
pub fn assert_money_eq(actual: &Money, amount: Decimal) {
    assert_eq!(
        actual.amount().normalize(),
        amount.normalize(),
        "expected {} {}, got {}",
        actual.currency().symbol(),
        amount,
        actual
    );
}

/// Asserts that the holdings of a valuation add up to its total
pub fn assert_valuation_balances(valuation: &InvestorValuation) {
    let sum = Money::sum(
        valuation.holdings.iter().map(|h| &h.value),
        valuation.total_value.currency(),
    )
    .expect("holdings should share the total's currency");
    assert_eq!(
        sum, valuation.total_value,
        "holdings of {} sum to {sum}, total says {}",
        valuation.investor_id, valuation.total_value
    );
}

/// Asserts a request's status and that its resolution fields agree with it
pub fn assert_request_status(request: &Request, expected: RequestStatus) {
    assert_eq!(
        request.status, expected,
        "Request {} is {}, expected {}",
        request.id, request.status, expected
    );
    assert_eq!(
        request.approved_at.is_some(),
        expected != RequestStatus::Pending,
        "Request {} resolution time does not match status {}",
        request.id,
        request.status
    );
}

/// Asserts the value printed against a label in a statement section
pub fn assert_statement_line(statement: &Statement, heading: &str, label: &str, expected: &str) {
    let section = statement
        .section(heading)
        .unwrap_or_else(|| panic!("Statement has no section {heading:?}"));
    assert_eq!(
        section.value_of(label),
        Some(expected),
        "Unexpected value for {heading:?} / {label:?}"
    );
}

/// Unwraps an `Ok`, printing the error otherwise
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(err) => panic!("operation failed: {err:?}"),
        }
    };
}

/// Checks that an operation failed with the given error variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Err(err) => assert!(
                matches!(err, $pattern),
                "{err:?} is not {}",
                stringify!($pattern)
            ),
            Ok(value) => panic!("expected {}, operation succeeded with {value:?}", stringify!($pattern)),
        }
    };
}
