//! Request ledger DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use core_kernel::{Currency, InvestorId, Money, UnitClassId};
use domain_requests::{
    PurchaseDraft, RedemptionDraft, RequestDraft, RequestFilter, RequestKind, RequestStatus,
    SharesPurchaseDraft, TransferDraft,
};

#[derive(Debug, Deserialize, Validate)]
pub struct PurchaseRequestBody {
    pub investor_id: InvestorId,
    pub unit_class_id: UnitClassId,
    pub amount: Decimal,
    pub fees: Option<Decimal>,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RedemptionRequestBody {
    pub investor_id: InvestorId,
    pub unit_class_id: UnitClassId,
    pub units: Decimal,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TransferRequestBody {
    pub from_investor_id: InvestorId,
    pub to_investor_id: InvestorId,
    pub unit_class_id: UnitClassId,
    pub units: Decimal,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SharesRequestBody {
    pub investor_id: InvestorId,
    #[validate(length(min = 1, max = 12, message = "symbol is required"))]
    pub symbol: String,
    pub quantity: Decimal,
    pub estimated_price: Decimal,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl PurchaseRequestBody {
    pub fn into_draft(self, currency: Currency) -> RequestDraft {
        RequestDraft::Purchase(PurchaseDraft {
            investor_id: self.investor_id,
            unit_class_id: self.unit_class_id,
            amount: Money::new(self.amount, currency),
            fees: self.fees.map(|fees| Money::new(fees, currency)),
            notes: self.notes,
        })
    }
}

impl RedemptionRequestBody {
    pub fn into_draft(self) -> RequestDraft {
        RequestDraft::Redemption(RedemptionDraft {
            investor_id: self.investor_id,
            unit_class_id: self.unit_class_id,
            units: self.units,
            notes: self.notes,
        })
    }
}

impl TransferRequestBody {
    pub fn into_draft(self) -> RequestDraft {
        RequestDraft::Transfer(TransferDraft {
            from_investor_id: self.from_investor_id,
            to_investor_id: self.to_investor_id,
            unit_class_id: self.unit_class_id,
            units: self.units,
            notes: self.notes,
        })
    }
}

impl SharesRequestBody {
    pub fn into_draft(self, currency: Currency) -> RequestDraft {
        RequestDraft::SharesPurchase(SharesPurchaseDraft {
            investor_id: self.investor_id,
            symbol: self.symbol,
            quantity: self.quantity,
            estimated_price: Money::new(self.estimated_price, currency),
            notes: self.notes,
        })
    }
}

/// Approve or reject body
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveRequestBody {
    #[validate(length(min = 1, max = 100, message = "actor is required"))]
    pub actor: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RequestListQuery {
    pub kind: Option<RequestKind>,
    pub status: Option<RequestStatus>,
    pub investor_id: Option<InvestorId>,
}

impl From<RequestListQuery> for RequestFilter {
    fn from(query: RequestListQuery) -> Self {
        RequestFilter {
            kind: query.kind,
            status: query.status,
            investor_id: query.investor_id,
        }
    }
}
