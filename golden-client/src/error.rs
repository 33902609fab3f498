//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404: no matching redemption triple)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict (409: promotion already redeemed)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation error (400: insufficient keys, carries server copy)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A redemption precondition failed before any network call
    #[error("Missing data: {0}")]
    MissingData(&'static str),

    /// QR payload could not be parsed into a company
    #[error("Invalid QR payload: {0}")]
    InvalidQr(String),

    /// Camera permission was denied by the platform
    #[error("Camera permission denied")]
    PermissionDenied,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// User-facing copy for this error (product copy is Spanish)
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(_) | ClientError::Internal(_) | ClientError::InvalidResponse(_) => {
                "Ocurrio un error. Intenta nuevamente.".to_string()
            }
            ClientError::Serialization(_) => "Ocurrio un error. Intenta nuevamente.".to_string(),
            ClientError::Unauthorized => "Tu sesion expiro. Volve a iniciar sesion.".to_string(),
            ClientError::Forbidden(_) => "No tenes acceso a este beneficio.".to_string(),
            ClientError::NotFound(_) => "Beneficio no encontrado.".to_string(),
            ClientError::Conflict(_) => "Este beneficio ya fue utilizado.".to_string(),
            ClientError::Validation(msg) => msg.clone(),
            ClientError::MissingData(_) => "Faltan datos para canjear el beneficio.".to_string(),
            ClientError::InvalidQr(_) => "QR no valido. Intenta nuevamente.".to_string(),
            ClientError::PermissionDenied => {
                "Necesitamos acceso a la camara para escanear el QR.".to_string()
            }
        }
    }

    /// Whether retrying the same action may succeed
    ///
    /// Server-rejected redemptions require a fresh scan; transport
    /// failures and malformed QR payloads may be retried as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::Http(_)
                | ClientError::Internal(_)
                | ClientError::InvalidResponse(_)
                | ClientError::InvalidQr(_)
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ClientError::NotFound("no triple".into()).user_message(),
            "Beneficio no encontrado."
        );
        assert_eq!(
            ClientError::Conflict("dup".into()).user_message(),
            "Este beneficio ya fue utilizado."
        );
        // Insufficient-keys copy comes from the server
        assert_eq!(
            ClientError::Validation("No te quedan llaves en esta membresia.".into()).user_message(),
            "No te quedan llaves en esta membresia."
        );
    }

    #[test]
    fn test_retryability() {
        assert!(ClientError::Internal("boom".into()).is_retryable());
        assert!(ClientError::InvalidQr("garbage".into()).is_retryable());
        assert!(!ClientError::Conflict("used".into()).is_retryable());
        assert!(!ClientError::NotFound("missing".into()).is_retryable());
        assert!(!ClientError::MissingData("promotion_id").is_retryable());
    }
}
