//! Tests for domain_statements

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use core_kernel::{Currency, DateRange, InvestorId, Money, RequestId, Timezone, UnitClassId};
use domain_bookkeeping::{BankTransaction, TransactionType};
use domain_metrics::{income_expense_gst, investor_valuation};
use domain_registry::{Holding, Investor, UnitClass};
use domain_requests::{
    PurchaseDetails, Request, RequestDetails, RequestStatus, SharesPurchaseDetails,
};

use domain_statements::*;

const GROWTH: UnitClassId = UnitClassId::from_u128(1);
const JOHN: InvestorId = InvestorId::from_u128(1);

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn builder() -> StatementBuilder {
    // 23:30 UTC on the 14th is 10:30 on the 15th in Sydney (AEDT)
    StatementBuilder::new(Branding::default(), Timezone::default())
        .generated_at(Utc.with_ymd_and_hms(2024, 1, 14, 23, 30, 0).unwrap())
}

fn growth() -> UnitClass {
    UnitClass::new(GROWTH, "Growth Fund A", dec!(1.25), dec!(10000),
        Money::aud(dec!(15000000)), Money::aud(dec!(2500000)))
        .unwrap()
}

fn john() -> Investor {
    Investor::new(JOHN, "John Smith", "john.smith@email.com")
        .with_holding(Holding::opening(GROWTH, dec!(15420.5), dec!(1.25), Currency::AUD).unwrap())
}

fn approved_purchase() -> Request {
    let mut request = Request::pending(
        RequestDetails::Purchase(PurchaseDetails {
            investor_id: JOHN,
            unit_class_id: GROWTH,
            amount: Money::aud(dec!(50000)),
            fees: Money::aud(dec!(250)),
            unit_price: dec!(1.25),
            estimated_units: 40000,
        }),
        None,
    )
    .with_id(RequestId::from_u128(1))
    .submitted(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
    request
        .resolve(RequestStatus::Approved, "Admin User", Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap())
        .unwrap();
    request
}

fn transactions() -> Vec<BankTransaction> {
    vec![
        BankTransaction::new(date(2024, 1, 15), "Rental Income - Property A", TransactionType::Income,
            Money::aud(dec!(5000)), Money::aud(dec!(500)), "Rental Income").unwrap(),
        BankTransaction::new(date(2024, 1, 14), "Property Management Fee", TransactionType::Expense,
            Money::aud(dec!(800)), Money::aud(dec!(80)), "Property Management").unwrap(),
        BankTransaction::new(date(2024, 1, 13), "Dividend Income - ASX:CBA", TransactionType::Income,
            Money::aud(dec!(2500)), Money::aud(dec!(0)), "Dividends").unwrap(),
    ]
}

// ============================================================================
// Header and Footer
// ============================================================================

mod header_tests {
    use super::*;

    #[test]
    fn test_header_uses_local_time() {
        let statement = builder().purchase(&approved_purchase(), &john(), &growth()).unwrap();

        assert_eq!(statement.header.company_name, "TrustWise Capital");
        assert_eq!(statement.header.subtitle, "Unit Trust Management");
        assert_eq!(statement.header.abn, "ABN: 12 345 678 901");
        assert_eq!(statement.header.afsl, "AFSL: 123456");
        assert_eq!(statement.header.generated_date, "15/01/2024");
        assert_eq!(statement.header.generated_time, "10:30:00");
    }

    #[test]
    fn test_footer() {
        let statement = builder().purchase(&approved_purchase(), &john(), &growth()).unwrap();
        assert_eq!(
            statement.footer,
            vec![
                "This statement is confidential and intended for the named investor only.".to_string(),
                "TrustWise Capital Pty Ltd | Phone: +61 2 9000 0000 | Email: info@trustwise.com.au".to_string(),
                "Page 1 of 1".to_string(),
            ]
        );
    }

    #[test]
    fn test_custom_branding() {
        let branding = Branding {
            company_name: "Harbour Trust".to_string(),
            ..Branding::default()
        };
        let statement = StatementBuilder::new(branding, Timezone::default())
            .bas(&income_expense_gst(&transactions(), None, Currency::AUD).unwrap(),
                &DateRange::quarter_containing(date(2024, 1, 15)).unwrap())
            .unwrap();
        assert_eq!(statement.header.company_name, "Harbour Trust");
    }
}

// ============================================================================
// Purchase Statement
// ============================================================================

mod purchase_tests {
    use super::*;

    #[test]
    fn test_purchase_layout() {
        let statement = builder().purchase(&approved_purchase(), &john(), &growth()).unwrap();

        assert_eq!(statement.kind, StatementKind::Purchase);
        assert_eq!(statement.title, "Unit Purchase Statement");
        let headings: Vec<&str> = statement.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["Investor Details", "Purchase Details", "Calculation Breakdown"]);

        let labels: Vec<&str> = statement.sections[1].lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Request ID", "Unit Class", "Purchase Date", "Unit Price", "Units Purchased",
                "Investment Amount", "Fees", "Total Amount", "Status", "Approved By",
            ]
        );
    }

    #[test]
    fn test_purchase_values() {
        let statement = builder().purchase(&approved_purchase(), &john(), &growth()).unwrap();
        let details = statement.section("Purchase Details").unwrap();

        assert_eq!(details.value_of("Unit Class"), Some("Growth Fund A"));
        assert_eq!(details.value_of("Purchase Date"), Some("15/01/2024"));
        assert_eq!(details.value_of("Unit Price"), Some("$1.2500"));
        assert_eq!(details.value_of("Units Purchased"), Some("40,000"));
        assert_eq!(details.value_of("Investment Amount"), Some("$50,000.00"));
        assert_eq!(details.value_of("Total Amount"), Some("$50,250.00"));
        assert_eq!(details.value_of("Status"), Some("Approved"));
        assert_eq!(details.value_of("Approved By"), Some("Admin User"));

        let breakdown = statement.section("Calculation Breakdown").unwrap();
        assert_eq!(breakdown.value_of("Application Fee"), Some("$250.00"));
        assert!(breakdown.lines[2].emphasis);
    }

    #[test]
    fn test_pending_purchase_has_no_approver() {
        let mut request = approved_purchase();
        request.status = RequestStatus::Pending;
        request.approved_by = None;
        request.approved_at = None;

        let statement = builder().purchase(&request, &john(), &growth()).unwrap();
        let details = statement.section("Purchase Details").unwrap();
        assert_eq!(details.value_of("Status"), Some("Pending"));
        assert_eq!(details.value_of("Approved By"), Some("N/A"));
    }

    #[test]
    fn test_non_purchase_request_rejected() {
        let shares = Request::pending(
            RequestDetails::SharesPurchase(SharesPurchaseDetails {
                investor_id: JOHN,
                symbol: "CBA".to_string(),
                quantity: dec!(100),
                estimated_price: Money::aud(dec!(105.50)),
                total_amount: Money::aud(dec!(10550)),
            }),
            None,
        );
        assert!(matches!(
            builder().purchase(&shares, &john(), &growth()),
            Err(StatementError::Validation(_))
        ));
    }

    #[test]
    fn test_mismatched_investor_rejected() {
        let other = Investor::new(InvestorId::from_u128(2), "Sarah Johnson", "sarah.johnson@email.com");
        assert!(builder().purchase(&approved_purchase(), &other, &growth()).is_err());
    }
}

// ============================================================================
// BAS Statement
// ============================================================================

mod bas_tests {
    use super::*;

    #[test]
    fn test_bas_lines() {
        let totals = income_expense_gst(&transactions(), None, Currency::AUD).unwrap();
        let period = DateRange::quarter_containing(date(2024, 1, 15)).unwrap();

        let statement = builder().bas(&totals, &period).unwrap();

        let reporting = statement.section("Reporting Period").unwrap();
        assert_eq!(reporting.value_of("Period"), Some("01/01/2024 to 31/03/2024"));
        assert_eq!(reporting.value_of("Quarter"), Some("Q1 2024"));

        let summary = statement.section("BAS Summary").unwrap();
        assert_eq!(summary.value_of("1A GST on sales and other supplies"), Some("$500.00"));
        assert_eq!(summary.value_of("1B GST on purchases and other acquisitions"), Some("$80.00"));
        assert_eq!(summary.value_of("7A Net amount of GST"), Some("$420.00"));

        let income = statement.section("Income Summary").unwrap();
        assert_eq!(income.value_of("Total Income"), Some("$7,500.00"));
        assert_eq!(income.value_of("Total Expenses"), Some("$800.00"));
        assert_eq!(income.value_of("Net Income"), Some("$6,700.00"));
        assert_eq!(income.value_of("Total GST"), Some("$580.00"));
    }
}

// ============================================================================
// Portfolio and Transaction History
// ============================================================================

mod portfolio_tests {
    use super::*;

    #[test]
    fn test_portfolio_lines() {
        let investor = john();
        let valuation = investor_valuation(&investor, &[growth()]).unwrap();

        let statement = builder().portfolio(&investor, &valuation).unwrap();
        let holdings = statement.section("Holdings").unwrap();

        assert_eq!(
            holdings.value_of("Growth Fund A"),
            Some("15,420.5 units @ $1.2500 = $19,275.63")
        );
        assert_eq!(holdings.value_of("Total Portfolio Value"), Some("$19,275.63"));
    }

    #[test]
    fn test_transaction_history_in_date_order() {
        let txs = transactions();
        let period = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();

        let statement = builder().transaction_history(&txs, Some(&period), Currency::AUD).unwrap();
        let lines = &statement.section("Transactions").unwrap().lines;

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].label, "13/01/2024  Dividend Income - ASX:CBA");
        assert_eq!(lines[1].value, "-$800.00 (GST $80.00)");
        assert_eq!(lines[2].value, "$5,000.00 (GST $500.00)");

        let totals = statement.section("Totals").unwrap();
        assert_eq!(totals.value_of("Net Income"), Some("$6,700.00"));
    }

    #[test]
    fn test_render_text_contains_every_line() {
        let statement = builder().purchase(&approved_purchase(), &john(), &growth()).unwrap();
        let text = render_text(&statement);

        assert!(text.starts_with("TrustWise Capital\n"));
        assert!(text.contains("Unit Purchase Statement\n"));
        assert!(text.contains("Units Purchased: 40,000\n"));
        assert!(text.contains("Total Amount Due: $50,250.00\n"));
        assert!(text.trim_end().ends_with("Page 1 of 1"));
    }

    #[test]
    fn test_statement_kind_parses() {
        assert_eq!("bas".parse::<StatementKind>().unwrap(), StatementKind::Bas);
        assert_eq!("transaction".parse::<StatementKind>().unwrap(), StatementKind::TransactionHistory);
        assert!("invoice".parse::<StatementKind>().is_err());
    }
}
