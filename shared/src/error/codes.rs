//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Membership errors
//! - 3xxx: Redemption errors
//! - 4xxx: Scan errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1002,
    /// Token is invalid
    TokenInvalid = 1003,

    // ==================== 2xxx: Membership ====================
    /// Membership not found
    MembershipNotFound = 2001,
    /// Membership is inactive
    MembershipInactive = 2002,
    /// No remaining keys on the membership
    InsufficientKeys = 2003,
    /// Province not found
    ProvinceNotFound = 2101,
    /// Company not found
    CompanyNotFound = 2102,

    // ==================== 3xxx: Redemption ====================
    /// No matching membership/company/promotion triple
    BenefitNotFound = 3001,
    /// Promotion has already been redeemed
    PromotionAlreadyUsed = 3002,
    /// Promotion not found
    PromotionNotFound = 3003,

    // ==================== 4xxx: Scan ====================
    /// QR payload could not be parsed
    QrInvalid = 4001,
    /// QR payload is missing required fields
    QrIncomplete = 4002,
    /// Camera permission was denied
    CameraPermissionDenied = 4003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Operation timeout
    TimeoutError = 9003,
    /// Configuration error
    ConfigError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Membership
            ErrorCode::MembershipNotFound => "Membership not found",
            ErrorCode::MembershipInactive => "Membership is inactive",
            ErrorCode::InsufficientKeys => "No remaining keys on the membership",
            ErrorCode::ProvinceNotFound => "Province not found",
            ErrorCode::CompanyNotFound => "Company not found",

            // Redemption
            ErrorCode::BenefitNotFound => "Benefit not found",
            ErrorCode::PromotionAlreadyUsed => "Promotion has already been redeemed",
            ErrorCode::PromotionNotFound => "Promotion not found",

            // Scan
            ErrorCode::QrInvalid => "QR payload could not be parsed",
            ErrorCode::QrIncomplete => "QR payload is missing required fields",
            ErrorCode::CameraPermissionDenied => "Camera permission was denied",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::TokenExpired),
            1003 => Ok(ErrorCode::TokenInvalid),

            // Membership
            2001 => Ok(ErrorCode::MembershipNotFound),
            2002 => Ok(ErrorCode::MembershipInactive),
            2003 => Ok(ErrorCode::InsufficientKeys),
            2101 => Ok(ErrorCode::ProvinceNotFound),
            2102 => Ok(ErrorCode::CompanyNotFound),

            // Redemption
            3001 => Ok(ErrorCode::BenefitNotFound),
            3002 => Ok(ErrorCode::PromotionAlreadyUsed),
            3003 => Ok(ErrorCode::PromotionNotFound),

            // Scan
            4001 => Ok(ErrorCode::QrInvalid),
            4002 => Ok(ErrorCode::QrIncomplete),
            4003 => Ok(ErrorCode::CameraPermissionDenied),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::TimeoutError),
            9004 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::InsufficientKeys.code(), 2003);
        assert_eq!(ErrorCode::BenefitNotFound.code(), 3001);
        assert_eq!(ErrorCode::PromotionAlreadyUsed.code(), 3002);
        assert_eq!(ErrorCode::QrInvalid.code(), 4001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::BenefitNotFound.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(2003), Ok(ErrorCode::InsufficientKeys));
        assert_eq!(ErrorCode::try_from(3002), Ok(ErrorCode::PromotionAlreadyUsed));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::NotAuthenticated,
            ErrorCode::InsufficientKeys,
            ErrorCode::BenefitNotFound,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::NotFound).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&ErrorCode::BenefitNotFound).unwrap(),
            "3001"
        );
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::BenefitNotFound.message(), "Benefit not found");
        assert_eq!(
            ErrorCode::PromotionAlreadyUsed.message(),
            "Promotion has already been redeemed"
        );
    }
}
