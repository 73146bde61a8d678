//! Request Ledger Domain
//!
//! Investors submit purchase, redemption, transfer and shares purchase
//! requests; an admin approves or rejects each one.
//!
//! # Request Lifecycle
//!
//! ```text
//! Pending -> Approved
//!         -> Rejected
//! ```
//!
//! Approval applies the request's effect on the registry: purchases
//! issue units, redemptions cancel them, transfers move them between
//! investors. Shares purchases are recorded only.

pub mod request;
pub mod draft;
pub mod settlement;
pub mod ledger;
pub mod error;

pub use request::{
    PurchaseDetails, RedemptionDetails, Request, RequestDetails, RequestKind, RequestStatus,
    SharesPurchaseDetails, TransferDetails,
};
pub use draft::{PurchaseDraft, RedemptionDraft, RequestDraft, SharesPurchaseDraft, TransferDraft};
pub use ledger::{RequestFilter, RequestLedger};
pub use error::RequestError;
