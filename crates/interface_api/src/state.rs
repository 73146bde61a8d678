//! Shared application state
//!
//! The whole trust lives in one `TrustStore` behind a single lock.
//! Handlers that change anything take the write lock for the full
//! operation, so two approvals of the same request run one after the
//! other and the second sees the first's result.

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::RwLock;

use core_kernel::{BankTransactionId, Currency, DateRange, InvestorId, RequestId, UnitClassId};
use domain_bookkeeping::{BankTransaction, CashBook, ClearingStatus};
use domain_metrics::{
    dashboard_summary, income_expense_gst, investor_valuation, DashboardSummary, IncomeExpenseGst,
    InvestorValuation,
};
use domain_registry::{Investor, Registry, UnitClass};
use domain_requests::{Request, RequestDraft, RequestLedger};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Registry, cash book and request ledger of one trust
#[derive(Debug, Clone)]
pub struct TrustStore {
    registry: Registry,
    cash_book: CashBook,
    ledger: RequestLedger,
}

impl TrustStore {
    /// Creates an empty store reporting in `currency`
    pub fn new(currency: Currency) -> Self {
        Self {
            registry: Registry::new(),
            cash_book: CashBook::new(currency),
            ledger: RequestLedger::new(),
        }
    }

    pub fn from_parts(registry: Registry, cash_book: CashBook, ledger: RequestLedger) -> Self {
        Self {
            registry,
            cash_book,
            ledger,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn cash_book(&self) -> &CashBook {
        &self.cash_book
    }

    pub fn ledger(&self) -> &RequestLedger {
        &self.ledger
    }

    /// Reporting currency
    pub fn currency(&self) -> Currency {
        self.cash_book.currency()
    }

    pub fn submit(&mut self, draft: &RequestDraft) -> Result<Request, ApiError> {
        Ok(self.ledger.submit(draft, &self.registry)?)
    }

    pub fn approve(&mut self, id: RequestId, actor: &str) -> Result<Request, ApiError> {
        Ok(self.ledger.approve(id, actor, &mut self.registry)?)
    }

    pub fn reject(&mut self, id: RequestId, actor: &str) -> Result<Request, ApiError> {
        Ok(self.ledger.reject(id, actor)?)
    }

    /// Registers a new investor
    pub fn add_investor(&mut self, investor: Investor) -> Result<&Investor, ApiError> {
        let id = investor.id;
        self.registry.add_investor(investor)?;
        Ok(self.registry.investor(id)?)
    }

    /// Reprices a unit class; holdings in it are revalued
    pub fn set_unit_price(&mut self, id: UnitClassId, price: Decimal) -> Result<&UnitClass, ApiError> {
        self.registry.set_unit_price(id, price)?;
        Ok(self.registry.unit_class(id)?)
    }

    pub fn record_transaction(&mut self, transaction: BankTransaction) -> Result<&BankTransaction, ApiError> {
        let id = self.cash_book.record(transaction)?;
        Ok(self.cash_book.get(id)?)
    }

    pub fn update_transaction_status(
        &mut self,
        id: BankTransactionId,
        status: ClearingStatus,
    ) -> Result<&BankTransaction, ApiError> {
        Ok(self.cash_book.update_status(id, status)?)
    }

    pub fn summary(&self) -> Result<DashboardSummary, ApiError> {
        Ok(dashboard_summary(
            self.registry.unit_classes(),
            self.registry.investors(),
            self.cash_book.transactions(),
            self.ledger.pending_count(),
            self.currency(),
        )?)
    }

    pub fn income_expense_gst(&self, period: Option<&DateRange>) -> Result<IncomeExpenseGst, ApiError> {
        Ok(income_expense_gst(self.cash_book.transactions(), period, self.currency())?)
    }

    pub fn valuation(&self, investor_id: InvestorId) -> Result<InvestorValuation, ApiError> {
        let investor = self.registry.investor(investor_id)?;
        Ok(investor_valuation(investor, self.registry.unit_classes())?)
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<TrustStore>>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(store: TrustStore, config: ApiConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}
