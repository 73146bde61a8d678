//! Aggregation Engine
//!
//! Pure functions that derive the dashboard figures from registry and
//! bookkeeping data. Nothing here is cached or mutates its inputs, so
//! every function is safe to call from concurrent readers.
//!
//! # Modules
//!
//! - `nav`: total NAV, assets, liabilities and equity ratio
//! - `gst`: income / expense / GST sums over an optional period
//! - `units`: unit estimates for purchase and redemption quotes
//! - `property`: property investment health check
//! - `valuation`: investor portfolio valuation and dashboard summary

pub mod nav;
pub mod gst;
pub mod units;
pub mod property;
pub mod valuation;
pub mod error;

pub use nav::{equity_ratio, total_assets, total_liabilities, total_nav};
pub use gst::{income_expense_gst, IncomeExpenseGst};
pub use units::{estimated_units, estimated_value};
pub use property::{property_health_score, HealthStatus, PropertyAssessment, PropertyInputs};
pub use valuation::{dashboard_summary, investor_valuation, DashboardSummary, HoldingValuation, InvestorValuation};
pub use error::MetricsError;
