//! REST backend (Laravel-style benefits API)

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{Backend, map_error_status};
use crate::config::ClientConfig;
use crate::error::ClientResult;
use shared::client::{MembershipsResponse, RedeemPromotionRequest, RedeemPromotionResponse};
use shared::models::{Company, Membership, Province};

/// HTTP backend for the custom REST API
#[derive(Debug, Clone)]
pub struct RestBackend {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RestBackend {
    /// Create a new REST backend from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "benefits API request failed");
            return Err(map_error_status(status, &text));
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl Backend for RestBackend {
    async fn fetch_memberships(&self, user_id: &str) -> ClientResult<Vec<Membership>> {
        let response: MembershipsResponse = self
            .get(&format!("/user/{}/memberships", user_id))
            .await?;
        Ok(response.memberships)
    }

    async fn redeem_promotion(
        &self,
        request: &RedeemPromotionRequest,
    ) -> ClientResult<RedeemPromotionResponse> {
        self.post("/memberships/use-promotion", request).await
    }

    async fn fetch_provinces(&self) -> ClientResult<Vec<Province>> {
        self.get("/provinces").await
    }

    async fn fetch_companies(&self) -> ClientResult<Vec<Company>> {
        self.get("/companies").await
    }
}
