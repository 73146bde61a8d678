//! Display formatting for statement values
//!
//! Rounding happens here and nowhere else; stored values keep their
//! full precision.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use core_kernel::Money;

/// Currency amount to the cent with thousands separators
///
/// `12345.675` renders as `$12,345.68`, `-800` as `-$800.00`.
pub fn format_money(money: &Money) -> String {
    format_currency(money.amount(), money.currency().symbol())
}

/// Like `format_money` for a bare amount in dollars
pub fn format_dollars(amount: Decimal) -> String {
    format_currency(amount, "$")
}

fn format_currency(amount: Decimal, symbol: &str) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}{symbol}{}", group_digits(&rounded.abs().to_string()))
}

/// Unit price with exactly four decimals, e.g. `$1.2500`
pub fn format_unit_price(price: Decimal) -> String {
    let mut rounded = price.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(4);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}${}", group_digits(&rounded.abs().to_string()))
}

/// Unit count with thousands separators and no rounding
///
/// Trailing zeros are dropped: `15420.50` renders as `15,420.5`.
pub fn format_units(units: Decimal) -> String {
    let normalized = units.normalize();
    let sign = if normalized.is_sign_negative() && !normalized.is_zero() { "-" } else { "" };
    format!("{sign}{}", group_digits(&normalized.abs().to_string()))
}

/// Percentage to two decimals, e.g. `83.33%`
pub fn format_percent(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("{rounded}%")
}

/// Day/month/year, e.g. `15/01/2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Inserts a comma every three digits of the integer part
fn group_digits(plain: &str) -> String {
    let (integer, fraction) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}
