//! Client configuration

use std::sync::Arc;

use crate::backend::{Backend, RestBackend, SupabaseBackend};

/// Backend selection for the benefits API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Custom REST API (Laravel)
    #[default]
    Rest,
    /// Supabase project (PostgREST)
    Supabase,
}

/// Client configuration for connecting to the benefits API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g. "http://localhost:8000/api/v1")
    pub base_url: String,

    /// Which backend to talk to
    pub kind: BackendKind,

    /// Access token for authentication
    pub token: Option<String>,

    /// Supabase anon key (Supabase backend only)
    pub anon_key: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration for the REST backend
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            kind: BackendKind::Rest,
            token: None,
            anon_key: None,
            timeout: 30,
        }
    }

    /// Use the REST backend
    pub fn rest(base_url: impl Into<String>) -> Self {
        Self::new(base_url)
    }

    /// Use the Supabase backend
    pub fn supabase(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let mut config = Self::new(base_url);
        config.kind = BackendKind::Supabase;
        config.anon_key = Some(anon_key.into());
        config
    }

    /// Set the access token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Build the configured backend
    ///
    /// This is the single composition point for backend selection;
    /// workflow code only ever sees `Arc<dyn Backend>`.
    pub fn build_backend(&self) -> Arc<dyn Backend> {
        match self.kind {
            BackendKind::Rest => Arc::new(RestBackend::new(self)),
            BackendKind::Supabase => {
                let mut backend = SupabaseBackend::new(
                    self.base_url.clone(),
                    self.anon_key.clone().unwrap_or_default(),
                );
                if let Some(token) = &self.token {
                    backend = backend.with_token(token.clone());
                }
                Arc::new(backend)
            }
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000/api/v1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rest() {
        let config = ClientConfig::new("http://api.example.com");
        assert_eq!(config.kind, BackendKind::Rest);
        assert_eq!(config.timeout, 30);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_supabase_config() {
        let config = ClientConfig::supabase("https://proj.supabase.co", "anon-key")
            .with_token("user-token")
            .with_timeout(10);
        assert_eq!(config.kind, BackendKind::Supabase);
        assert_eq!(config.anon_key.as_deref(), Some("anon-key"));
        assert_eq!(config.token.as_deref(), Some("user-token"));
        assert_eq!(config.timeout, 10);
    }
}
