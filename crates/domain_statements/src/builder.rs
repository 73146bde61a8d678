//! Statement builders
//!
//! Each builder takes already-loaded domain records and lays them out in
//! a fixed order. Builders never touch the registry or ledgers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use core_kernel::{Currency, DateRange, Timezone};
use domain_bookkeeping::BankTransaction;
use domain_metrics::{income_expense_gst, IncomeExpenseGst, InvestorValuation};
use domain_registry::{Investor, UnitClass};
use domain_requests::{Request, RequestDetails};

use crate::branding::Branding;
use crate::error::StatementError;
use crate::format::{format_date, format_money, format_unit_price, format_units};
use crate::statement::{Statement, StatementHeader, StatementKind, StatementSection};

const NOT_AVAILABLE: &str = "N/A";

/// Builds statements stamped with one generation time
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    branding: Branding,
    timezone: Timezone,
    generated_at: DateTime<Utc>,
}

impl StatementBuilder {
    pub fn new(branding: Branding, timezone: Timezone) -> Self {
        Self {
            branding,
            timezone,
            generated_at: Utc::now(),
        }
    }

    /// Fixes the generation time (tests and reprints)
    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = at;
        self
    }

    /// Unit purchase confirmation
    ///
    /// # Errors
    ///
    /// `Validation` if the request is not a purchase or does not belong
    /// to the given investor and unit class.
    pub fn purchase(
        &self,
        request: &Request,
        investor: &Investor,
        unit_class: &UnitClass,
    ) -> Result<Statement, StatementError> {
        let RequestDetails::Purchase(details) = &request.details else {
            return Err(StatementError::Validation(format!(
                "purchase statements need a purchase request, {} is a {}",
                request.id,
                request.kind()
            )));
        };
        if details.investor_id != investor.id || details.unit_class_id != unit_class.id {
            return Err(StatementError::Validation(format!(
                "request {} does not match the investor and unit class supplied",
                request.id
            )));
        }
        let total = details.total_amount()?;

        let purchase = StatementSection::new("Purchase Details")
            .line("Request ID", request.id.to_string())
            .line("Unit Class", unit_class.name.clone())
            .line("Purchase Date", format_date(self.timezone.local_date(request.submitted_at)))
            .line("Unit Price", format_unit_price(details.unit_price))
            .line("Units Purchased", format_units(Decimal::from(details.estimated_units)))
            .line("Investment Amount", format_money(&details.amount))
            .line("Fees", format_money(&details.fees))
            .total("Total Amount", format_money(&total))
            .line("Status", capitalize(&request.status.to_string()))
            .line(
                "Approved By",
                request.approved_by.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            );

        let breakdown = StatementSection::new("Calculation Breakdown")
            .line("Investment Amount", format_money(&details.amount))
            .line("Application Fee", format_money(&details.fees))
            .total("Total Amount Due", format_money(&total));

        Ok(self.finish(
            StatementKind::Purchase,
            vec![investor_section(investor), purchase, breakdown],
        ))
    }

    /// Business Activity Statement for a reporting period
    pub fn bas(&self, totals: &IncomeExpenseGst, period: &DateRange) -> Result<Statement, StatementError> {
        let reporting = StatementSection::new("Reporting Period")
            .line("Period", format_period(period))
            .line("Quarter", period.quarter_label());

        let summary = StatementSection::new("BAS Summary")
            .line("1A GST on sales and other supplies", format_money(&totals.gst_on_income))
            .line("1B GST on purchases and other acquisitions", format_money(&totals.gst_on_expenses))
            .total("7A Net amount of GST", format_money(&totals.net_gst()?));

        Ok(self.finish(StatementKind::Bas, vec![reporting, summary, income_summary(totals)]))
    }

    /// Holdings valued at current unit prices
    pub fn portfolio(
        &self,
        investor: &Investor,
        valuation: &InvestorValuation,
    ) -> Result<Statement, StatementError> {
        if valuation.investor_id != investor.id {
            return Err(StatementError::Validation(format!(
                "valuation is for {}, not {}",
                valuation.investor_id, investor.id
            )));
        }

        let mut holdings = StatementSection::new("Holdings");
        if valuation.holdings.is_empty() {
            holdings = holdings.line("Holdings", "None");
        }
        for holding in &valuation.holdings {
            holdings = holdings.line(
                holding.unit_class_name.clone(),
                format!(
                    "{} units @ {} = {}",
                    format_units(holding.units),
                    format_unit_price(holding.unit_price),
                    format_money(&holding.value)
                ),
            );
        }
        holdings = holdings.total("Total Portfolio Value", format_money(&valuation.total_value));

        Ok(self.finish(StatementKind::Portfolio, vec![investor_section(investor), holdings]))
    }

    /// Bank transactions in date order with totals
    pub fn transaction_history<'a, I>(
        &self,
        transactions: I,
        period: Option<&DateRange>,
        currency: Currency,
    ) -> Result<Statement, StatementError>
    where
        I: IntoIterator<Item = &'a BankTransaction>,
    {
        let mut selected: Vec<&BankTransaction> = transactions
            .into_iter()
            .filter(|t| period.map_or(true, |p| p.contains(t.date)))
            .collect();
        selected.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        let totals = income_expense_gst(selected.iter().copied(), None, currency)?;

        let heading = StatementSection::new("Period")
            .line("Period", period.map_or_else(|| "All dates".to_string(), format_period))
            .line("Transactions", selected.len().to_string());

        let mut lines = StatementSection::new("Transactions");
        for tx in &selected {
            lines = lines.line(
                format!("{}  {}", format_date(tx.date), tx.description),
                format!("{} (GST {})", format_money(&tx.signed_amount()), format_money(&tx.gst)),
            );
        }

        Ok(self.finish(
            StatementKind::TransactionHistory,
            vec![heading, lines, income_summary(&totals).renamed("Totals")],
        ))
    }

    fn header(&self) -> StatementHeader {
        StatementHeader {
            company_name: self.branding.company_name.clone(),
            subtitle: self.branding.subtitle.clone(),
            abn: format!("ABN: {}", self.branding.abn),
            afsl: format!("AFSL: {}", self.branding.afsl),
            generated_date: format_date(self.timezone.local_date(self.generated_at)),
            generated_time: self.timezone.local_time(self.generated_at).format("%H:%M:%S").to_string(),
            timezone: self.timezone.name().to_string(),
        }
    }

    fn finish(&self, kind: StatementKind, sections: Vec<StatementSection>) -> Statement {
        Statement {
            kind,
            title: kind.title().to_string(),
            generated_at: self.generated_at,
            header: self.header(),
            sections,
            footer: self.branding.footer(),
        }
    }
}

impl StatementSection {
    fn renamed(mut self, heading: &str) -> Self {
        self.heading = heading.to_string();
        self
    }
}

fn investor_section(investor: &Investor) -> StatementSection {
    StatementSection::new("Investor Details")
        .line("Name", investor.name.clone())
        .line("Email", investor.email.clone())
        .line("Investor ID", investor.id.to_string())
}

fn income_summary(totals: &IncomeExpenseGst) -> StatementSection {
    StatementSection::new("Income Summary")
        .line("Total Income", format_money(&totals.income))
        .line("Total Expenses", format_money(&totals.expenses))
        .total("Net Income", format_money(&totals.net_income))
        .line("Total GST", format_money(&totals.gst))
}

fn format_period(period: &DateRange) -> String {
    format!("{} to {}", format_date(period.start), format_date(period.end))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
