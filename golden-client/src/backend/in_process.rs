//! In-process backend (tower oneshot)
//!
//! Calls an axum `Router` directly, zero network overhead. This is the
//! primary test harness: integration tests mount a fake benefits API and
//! drive the full workflow against it.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{Backend, map_error_status};
use crate::error::{ClientError, ClientResult};
use shared::client::{MembershipsResponse, RedeemPromotionRequest, RedeemPromotionResponse};
use shared::models::{Company, Membership, Province};

/// Backend that dispatches requests to an in-process axum Router
#[derive(Clone)]
pub struct InProcessBackend {
    router: axum::Router,
    token: Option<String>,
}

impl InProcessBackend {
    /// Create an in-process backend over the given router
    pub fn new(router: axum::Router) -> Self {
        Self {
            router,
            token: None,
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<T> {
        use axum::body::Body;
        use tower::ServiceExt;

        let mut builder = http::Request::builder().method(method).uri(path);

        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }

        let request = builder
            .body(Body::from(body.unwrap_or_default()))
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).to_string();
            return Err(map_error_status(status, &text));
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl Backend for InProcessBackend {
    async fn fetch_memberships(&self, user_id: &str) -> ClientResult<Vec<Membership>> {
        let response: MembershipsResponse = self
            .request(
                http::Method::GET,
                &format!("/user/{}/memberships", user_id),
                None,
            )
            .await?;
        Ok(response.memberships)
    }

    async fn redeem_promotion(
        &self,
        request: &RedeemPromotionRequest,
    ) -> ClientResult<RedeemPromotionResponse> {
        let body = serde_json::to_vec(request)?;
        self.request(
            http::Method::POST,
            "/memberships/use-promotion",
            Some(body),
        )
        .await
    }

    async fn fetch_provinces(&self) -> ClientResult<Vec<Province>> {
        self.request(http::Method::GET, "/provinces", None).await
    }

    async fn fetch_companies(&self) -> ClientResult<Vec<Company>> {
        self.request(http::Method::GET, "/companies", None).await
    }
}
