//! Unit estimates for request quotes

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Whole units an amount buys at a unit price
///
/// `floor(amount / unit_price)`; zero when either input is not positive
/// or the quotient does not fit in a `u64`.
pub fn estimated_units(amount: Decimal, unit_price: Decimal) -> u64 {
    if unit_price <= Decimal::ZERO || amount <= Decimal::ZERO {
        return 0;
    }
    amount
        .checked_div(unit_price)
        .and_then(|units| units.floor().to_u64())
        .unwrap_or(0)
}

/// Value of a number of units at a unit price, without truncation
///
/// `None` when the product is out of range.
pub fn estimated_value(units: Decimal, unit_price: Decimal) -> Option<Decimal> {
    units.checked_mul(unit_price)
}
