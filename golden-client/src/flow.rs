//! Redemption flow
//!
//! Orchestrates one redemption end to end: pick a promotion, pick a
//! payment method, scan the company QR, confirm against the server.
//! The flow holds a tagged state so stale scans and double confirms are
//! unrepresentable rather than guarded by flags.

use crate::error::ClientError;
use crate::payment::PaymentMethod;
use crate::promotions::ExtendedPromotion;
use crate::provider::MembershipProvider;
use crate::scan::{CompanyQr, ScanInput, ScanOutput, ScanSession};
use shared::client::RedeemPromotionRequest;
use shared::models::Membership;

/// Where the flow currently stands
#[derive(Debug)]
pub enum FlowState {
    /// Nothing in progress
    Idle,
    /// Promotion picked, waiting on a payment method
    ChoosingPayment {
        membership_id: i64,
        promotion: ExtendedPromotion,
    },
    /// Scanner open, waiting on a company QR
    Scanning {
        membership_id: i64,
        promotion_id: i64,
        payment: PaymentMethod,
        session: ScanSession,
    },
    /// Company scanned, ready to submit
    Confirming {
        membership_id: i64,
        promotion_id: i64,
        payment: PaymentMethod,
        company: CompanyQr,
    },
}

/// Terminal result of a confirm attempt, already mapped to product copy
#[derive(Debug)]
pub enum RedemptionOutcome {
    /// Server accepted the redemption
    Success { message: String },
    /// No matching membership, company and promotion triple
    NotFound { message: String },
    /// The promotion was already redeemed on this membership
    AlreadyRedeemed { message: String },
    /// The membership has no keys left
    InsufficientKeys { message: String },
    /// Anything else: precondition, transport or server failure
    Failed { message: String },
}

impl RedemptionOutcome {
    /// User-facing copy to show as a toast
    pub fn user_message(&self) -> &str {
        match self {
            RedemptionOutcome::Success { message }
            | RedemptionOutcome::NotFound { message }
            | RedemptionOutcome::AlreadyRedeemed { message }
            | RedemptionOutcome::InsufficientKeys { message }
            | RedemptionOutcome::Failed { message } => message,
        }
    }

    /// Whether the redemption went through
    pub fn is_success(&self) -> bool {
        matches!(self, RedemptionOutcome::Success { .. })
    }

    fn from_error(error: ClientError) -> Self {
        let message = error.user_message();
        match error {
            ClientError::NotFound(_) => RedemptionOutcome::NotFound { message },
            ClientError::Conflict(_) => RedemptionOutcome::AlreadyRedeemed { message },
            ClientError::Validation(_) => RedemptionOutcome::InsufficientKeys { message },
            _ => RedemptionOutcome::Failed { message },
        }
    }
}

/// Driver for the scan-to-redeem workflow
#[derive(Debug, Default)]
pub struct RedemptionFlow {
    state: FlowState,
}

impl Default for FlowState {
    fn default() -> Self {
        FlowState::Idle
    }
}

impl RedemptionFlow {
    /// Create an idle flow
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Start a redemption by picking a promotion from a membership
    ///
    /// Rejected locally when the promotion is already marked used or the
    /// membership is inactive; the server re-checks both on confirm.
    pub fn select_promotion(
        &mut self,
        membership: &Membership,
        promotion: ExtendedPromotion,
    ) -> Result<(), ClientError> {
        if !membership.is_active {
            return Err(ClientError::Validation(
                "Tu membresia no esta activa.".to_string(),
            ));
        }
        if promotion.is_used {
            return Err(ClientError::Conflict(format!(
                "promotion {} already redeemed",
                promotion.id
            )));
        }

        tracing::debug!(membership_id = membership.id, promotion_id = promotion.id, "promotion selected");
        self.state = FlowState::ChoosingPayment {
            membership_id: membership.id,
            promotion,
        };
        Ok(())
    }

    /// Pick a payment method and open the scanner
    ///
    /// Returns the scanner's first output, normally a permission request.
    pub fn select_payment(&mut self, payment: PaymentMethod) -> ScanOutput {
        let (membership_id, promotion) = match std::mem::take(&mut self.state) {
            FlowState::ChoosingPayment {
                membership_id,
                promotion,
            } => (membership_id, promotion),
            other => {
                self.state = other;
                return ScanOutput::Ignored;
            }
        };

        let mut session = ScanSession::new();
        let output = session.handle(ScanInput::Open);
        self.state = FlowState::Scanning {
            membership_id,
            promotion_id: promotion.id,
            payment,
            session,
        };
        output
    }

    /// Feed a scanner event into the flow
    ///
    /// An accepted code moves the flow to confirming. A denied or closed
    /// session drops the flow back to idle.
    pub fn scan_input(&mut self, input: ScanInput) -> ScanOutput {
        let (membership_id, promotion_id, payment, mut session) =
            match std::mem::take(&mut self.state) {
                FlowState::Scanning {
                    membership_id,
                    promotion_id,
                    payment,
                    session,
                } => (membership_id, promotion_id, payment, session),
                other => {
                    self.state = other;
                    return ScanOutput::Ignored;
                }
            };

        let output = session.handle(input);
        self.state = match &output {
            ScanOutput::CodeAccepted(company) => FlowState::Confirming {
                membership_id,
                promotion_id,
                payment,
                company: company.clone(),
            },
            ScanOutput::SessionDenied | ScanOutput::Closed => FlowState::Idle,
            _ => FlowState::Scanning {
                membership_id,
                promotion_id,
                payment,
                session,
            },
        };
        output
    }

    /// Abort the flow and return to idle
    pub fn cancel(&mut self) {
        self.state = FlowState::Idle;
    }

    /// Submit the redemption to the server
    ///
    /// Only valid in the confirming state; the flow returns to idle once
    /// the call settles, success or not. On success the provider's
    /// snapshot is refreshed so the ledger reflects the new redemption.
    pub async fn confirm(&mut self, provider: &mut MembershipProvider) -> RedemptionOutcome {
        let (membership_id, promotion_id, payment, company) =
            match std::mem::take(&mut self.state) {
                FlowState::Confirming {
                    membership_id,
                    promotion_id,
                    payment,
                    company,
                } => (membership_id, promotion_id, payment, company),
                other => {
                    self.state = other;
                    return RedemptionOutcome::Failed {
                        message: ClientError::MissingData("no redemption in progress")
                            .user_message(),
                    };
                }
            };

        // Legacy name-only codes cannot be redeemed; no request is sent
        let Some(company_id) = company.company_id else {
            return RedemptionOutcome::from_error(ClientError::MissingData("company_id"));
        };

        let request = RedeemPromotionRequest {
            membership_id,
            company_id,
            promotion_id,
        };

        // The scanner UI is dismissed before the server answers
        tracing::info!(
            membership_id,
            company_id,
            promotion_id,
            payment = %payment,
            "submitting redemption"
        );

        let backend = provider.backend().clone();
        match backend.redeem_promotion(&request).await {
            Ok(response) => {
                // Snapshot refresh failure does not undo the redemption
                if let Err(e) = provider.refresh().await {
                    tracing::warn!(error = %e, "snapshot refresh after redemption failed");
                }
                RedemptionOutcome::Success {
                    message: response.message,
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "redemption rejected");
                RedemptionOutcome::from_error(e)
            }
        }
    }
}
