//! Property investment health check
//!
//! Scores a property scenario out of 100 using four equally weighted
//! gates. Figures are computed in `f64` because the repayment formula
//! needs a fractional power; nothing here feeds back into the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Loan term used for the repayment formula (25 years of months)
pub const LOAN_TERM_MONTHS: i32 = 300;

/// Points awarded per passed gate
const GATE_POINTS: u8 = 25;

/// Scenario inputs, all in dollars except the rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyInputs {
    /// Current market value
    pub property_value: f64,
    /// Original purchase price, for capital gain
    #[serde(default)]
    pub purchase_price: Option<f64>,
    /// Outstanding loan principal
    pub loan_amount: f64,
    /// Monthly rental income
    pub monthly_rent: f64,
    /// Monthly running costs excluding loan repayments
    pub monthly_expenses: f64,
    /// Annual interest rate in percent, e.g. 6.5
    pub interest_rate: f64,
}

/// Banded reading of a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthStatus {
    /// Band for a score: 75+ excellent, 50+ good, 25+ fair
    pub fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => HealthStatus::Excellent,
            50..=74 => HealthStatus::Good,
            25..=49 => HealthStatus::Fair,
            _ => HealthStatus::Poor,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Fair => "Fair",
            HealthStatus::Poor => "Poor",
        };
        f.write_str(label)
    }
}

/// Derived figures and score for a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyAssessment {
    pub monthly_repayment: f64,
    pub equity: f64,
    /// Equity as a percentage of value
    pub equity_ratio: f64,
    pub monthly_cash_flow: f64,
    /// Gross rental yield in percent
    pub annual_yield: f64,
    /// Annual cash flow as a percentage of equity
    pub roi: f64,
    pub capital_gain: Option<f64>,
    pub capital_gain_percent: Option<f64>,
    /// 0, 25, 50, 75 or 100
    pub score: u8,
    pub status: HealthStatus,
}

/// Monthly repayment on an amortising loan over `LOAN_TERM_MONTHS`
///
/// `P r / (1 - (1 + r)^-n)` with `r` the monthly rate. A zero rate
/// repays the principal in equal instalments. The power is taken with
/// `powf`, not repeated multiplication, so results match a browser's
/// `Math.pow` to the last bit.
pub fn monthly_repayment(principal: f64, annual_rate_percent: f64) -> f64 {
    let r = annual_rate_percent / 100.0 / 12.0;
    if r == 0.0 {
        return principal / f64::from(LOAN_TERM_MONTHS);
    }
    let denominator = 1.0 - (1.0 + r).powf(-f64::from(LOAN_TERM_MONTHS));
    if denominator == 0.0 {
        return 0.0;
    }
    principal * r / denominator
}

fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator * 100.0
    }
}

/// Runs the health check
///
/// Gates: equity ratio at least 20%, non-negative monthly cash flow,
/// annual yield at least 4%, ROI at least 8%.
pub fn property_health_score(inputs: &PropertyInputs) -> PropertyAssessment {
    let monthly_repayment = monthly_repayment(inputs.loan_amount, inputs.interest_rate);
    let equity = inputs.property_value - inputs.loan_amount;
    let equity_ratio = ratio_percent(equity, inputs.property_value);
    let monthly_cash_flow = inputs.monthly_rent - inputs.monthly_expenses - monthly_repayment;
    let annual_yield = ratio_percent(inputs.monthly_rent * 12.0, inputs.property_value);
    let roi = ratio_percent(monthly_cash_flow * 12.0, equity);

    let gates = [
        equity_ratio >= 20.0,
        monthly_cash_flow >= 0.0,
        annual_yield >= 4.0,
        roi >= 8.0,
    ];
    let score = gates.iter().filter(|passed| **passed).count() as u8 * GATE_POINTS;

    let capital_gain = inputs.purchase_price.map(|price| inputs.property_value - price);
    let capital_gain_percent = inputs
        .purchase_price
        .zip(capital_gain)
        .map(|(price, gain)| ratio_percent(gain, price));

    PropertyAssessment {
        monthly_repayment,
        equity,
        equity_ratio,
        monthly_cash_flow,
        annual_yield,
        roi,
        capital_gain,
        capital_gain_percent,
        score,
        status: HealthStatus::from_score(score),
    }
}
