//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,

            // 400 Bad Request
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::InvalidFormat
            | ErrorCode::RequiredField
            | ErrorCode::InsufficientKeys
            | ErrorCode::QrInvalid
            | ErrorCode::QrIncomplete => StatusCode::BAD_REQUEST,

            // 401 Unauthorized
            ErrorCode::NotAuthenticated | ErrorCode::TokenExpired | ErrorCode::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }

            // 403 Forbidden
            ErrorCode::CameraPermissionDenied => StatusCode::FORBIDDEN,

            // 404 Not Found
            ErrorCode::NotFound
            | ErrorCode::MembershipNotFound
            | ErrorCode::ProvinceNotFound
            | ErrorCode::CompanyNotFound
            | ErrorCode::BenefitNotFound
            | ErrorCode::PromotionNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            ErrorCode::AlreadyExists | ErrorCode::PromotionAlreadyUsed => StatusCode::CONFLICT,

            // 422 Unprocessable Entity
            ErrorCode::MembershipInactive => StatusCode::UNPROCESSABLE_ENTITY,

            // 5xx
            ErrorCode::Unknown
            | ErrorCode::InternalError
            | ErrorCode::NetworkError
            | ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::TimeoutError => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}
