//! Backend abstraction for the benefits API
//!
//! The original app carried duplicate REST and Supabase implementations of
//! the same data hooks. Here both live behind one [`Backend`] trait and a
//! concrete adapter is chosen at composition time; workflow code never
//! branches on backend identity.

use async_trait::async_trait;

use crate::error::{ClientError, ClientResult};
use shared::client::{RedeemPromotionRequest, RedeemPromotionResponse};
use shared::models::{Company, Membership, Province};

mod rest;
mod supabase;

#[cfg(feature = "in-process")]
mod in_process;

pub use rest::RestBackend;
pub use supabase::SupabaseBackend;

#[cfg(feature = "in-process")]
pub use in_process::InProcessBackend;

/// Data-access interface for the benefits API
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch the authenticated user's memberships (full snapshot)
    async fn fetch_memberships(&self, user_id: &str) -> ClientResult<Vec<Membership>>;

    /// Submit a redemption request
    async fn redeem_promotion(
        &self,
        request: &RedeemPromotionRequest,
    ) -> ClientResult<RedeemPromotionResponse>;

    /// Fetch all provinces
    async fn fetch_provinces(&self) -> ClientResult<Vec<Province>>;

    /// Fetch all adhered companies
    async fn fetch_companies(&self) -> ClientResult<Vec<Company>>;
}

/// Map a non-success HTTP status and response body to a client error
///
/// Shared by the network and in-process backends. The body message is
/// preserved so server-provided copy (e.g. insufficient keys) reaches
/// the user.
pub(crate) fn map_error_status(status: http::StatusCode, body: &str) -> ClientError {
    let message = message_from_body(body);
    match status {
        http::StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        http::StatusCode::FORBIDDEN => ClientError::Forbidden(message),
        http::StatusCode::NOT_FOUND => ClientError::NotFound(message),
        http::StatusCode::CONFLICT => ClientError::Conflict(message),
        http::StatusCode::BAD_REQUEST | http::StatusCode::UNPROCESSABLE_ENTITY => {
            ClientError::Validation(message)
        }
        _ => ClientError::Internal(message),
    }
}

/// Extract the `message` field from a JSON error body, falling back to
/// the raw text
fn message_from_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}
