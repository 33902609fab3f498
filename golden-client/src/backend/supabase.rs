//! Supabase backend (PostgREST)
//!
//! Adapter for the in-progress Supabase migration. Collections are read
//! through PostgREST embedded selects; redemption goes through an RPC so
//! the uniqueness check stays server-side.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{Backend, map_error_status};
use crate::error::ClientResult;
use shared::client::{RedeemPromotionRequest, RedeemPromotionResponse};
use shared::models::{Company, Membership, Province};

/// PostgREST embedded select for membership snapshots
const MEMBERSHIP_SELECT: &str = "*,keys_used_companies(*,promotion:promotions(*)),\
location_info:locations(*,province:provinces(*)),\
company_info:companies(*,services(*,promotions(*)))";

/// HTTP backend for a Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseBackend {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    token: Option<String>,
}

impl SupabaseBackend {
    /// Create a new Supabase backend
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            token: None,
        }
    }

    /// Set the user's access token (falls back to the anon key)
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token.as_deref().unwrap_or(&self.anon_key))
    }

    async fn get<T: DeserializeOwned>(&self, path_and_query: &str) -> ClientResult<T> {
        let url = format!("{}/rest/v1{}", self.base_url, path_and_query);
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .header(reqwest::header::AUTHORIZATION, self.bearer())
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn rpc<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        function: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/rest/v1/rpc/{}", self.base_url, function);
        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .header(reqwest::header::AUTHORIZATION, self.bearer())
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "PostgREST request failed");
            return Err(map_error_status(status, &text));
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl Backend for SupabaseBackend {
    async fn fetch_memberships(&self, user_id: &str) -> ClientResult<Vec<Membership>> {
        self.get(&format!(
            "/memberships?user_id=eq.{}&select={}",
            user_id, MEMBERSHIP_SELECT
        ))
        .await
    }

    async fn redeem_promotion(
        &self,
        request: &RedeemPromotionRequest,
    ) -> ClientResult<RedeemPromotionResponse> {
        self.rpc("use_promotion", request).await
    }

    async fn fetch_provinces(&self) -> ClientResult<Vec<Province>> {
        self.get("/provinces?select=*").await
    }

    async fn fetch_companies(&self) -> ClientResult<Vec<Company>> {
        self.get("/companies?select=*,services(*,promotions(*))")
            .await
    }
}
