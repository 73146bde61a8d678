//! Income, expense and GST aggregation over the cash book

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, DateRange, Money};
use domain_bookkeeping::{BankTransaction, TransactionType};

use crate::error::MetricsError;

/// Income / expense / GST totals for a set of bank transactions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeExpenseGst {
    /// Sum of income amounts
    pub income: Money,
    /// Sum of expense amounts
    pub expenses: Money,
    /// GST over every included transaction
    pub gst: Money,
    /// GST collected on income (BAS label 1A)
    pub gst_on_income: Money,
    /// GST paid on expenses (BAS label 1B)
    pub gst_on_expenses: Money,
    /// Income minus expenses
    pub net_income: Money,
}

impl IncomeExpenseGst {
    fn zero(currency: Currency) -> Self {
        Self {
            income: Money::zero(currency),
            expenses: Money::zero(currency),
            gst: Money::zero(currency),
            gst_on_income: Money::zero(currency),
            gst_on_expenses: Money::zero(currency),
            net_income: Money::zero(currency),
        }
    }

    /// GST payable: collected minus paid
    pub fn net_gst(&self) -> Result<Money, MetricsError> {
        Ok(self.gst_on_income.checked_sub(&self.gst_on_expenses)?)
    }
}

/// Sums income, expenses and GST
///
/// When `period` is given, only transactions dated inside it (both ends
/// inclusive) are counted.
pub fn income_expense_gst<'a, I>(
    transactions: I,
    period: Option<&DateRange>,
    currency: Currency,
) -> Result<IncomeExpenseGst, MetricsError>
where
    I: IntoIterator<Item = &'a BankTransaction>,
{
    let mut totals = IncomeExpenseGst::zero(currency);

    for tx in transactions {
        if let Some(period) = period {
            if !period.contains(tx.date) {
                continue;
            }
        }
        match tx.transaction_type {
            TransactionType::Income => {
                totals.income = totals.income.checked_add(&tx.amount)?;
                totals.gst_on_income = totals.gst_on_income.checked_add(&tx.gst)?;
            }
            TransactionType::Expense => {
                totals.expenses = totals.expenses.checked_add(&tx.amount)?;
                totals.gst_on_expenses = totals.gst_on_expenses.checked_add(&tx.gst)?;
            }
        }
        totals.gst = totals.gst.checked_add(&tx.gst)?;
    }

    totals.net_income = totals.income.checked_sub(&totals.expenses)?;
    Ok(totals)
}
