//! Golden Client - redemption workflow for the Lista Golden benefits API
//!
//! Implements the scan-to-redeem workflow: membership snapshots, promotion
//! selection, the QR scan session state machine, and redemption
//! confirmation against a pluggable backend (REST or Supabase).

pub mod backend;
pub mod config;
pub mod error;
pub mod flow;
pub mod payment;
pub mod promotions;
pub mod provider;
pub mod scan;

pub use backend::{Backend, RestBackend, SupabaseBackend};
pub use config::{BackendKind, ClientConfig};
pub use error::{ClientError, ClientResult};
pub use flow::{FlowState, RedemptionFlow, RedemptionOutcome};
pub use payment::PaymentMethod;
pub use promotions::{ExtendedPromotion, list_promotions};
pub use provider::{MembershipProvider, MembershipStore};
pub use scan::{CompanyQr, ScanInput, ScanOutput, ScanSession, ScanState};

#[cfg(feature = "in-process")]
pub use backend::InProcessBackend;

// Re-export shared types for convenience
pub use shared::client::{MembershipsResponse, RedeemPromotionRequest, RedeemPromotionResponse};
pub use shared::models::{Company, KeyUsedCompany, Membership, Promotion, Province, Service};
