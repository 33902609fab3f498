//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.
//! These types are shared between the benefits API and golden-client.

use serde::{Deserialize, Serialize};

use crate::models::{Company, Membership, Province};

// =============================================================================
// Membership API DTOs
// =============================================================================

/// Response of `GET /user/{user_id}/memberships`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipsResponse {
    pub memberships: Vec<Membership>,
}

/// Response of `GET /provinces`
pub type ProvincesResponse = Vec<Province>;

/// Response of `GET /companies`
pub type CompaniesResponse = Vec<Company>;

// =============================================================================
// Redemption API DTOs
// =============================================================================

/// Body of `POST /memberships/use-promotion`
///
/// Constructed only once membership, company and promotion are all
/// known; the server enforces uniqueness of the redemption.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedeemPromotionRequest {
    pub membership_id: i64,
    pub company_id: i64,
    pub promotion_id: i64,
}

/// Success payload of `POST /memberships/use-promotion`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemPromotionResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redeem_request_wire_format() {
        let request = RedeemPromotionRequest {
            membership_id: 42,
            company_id: 5,
            promotion_id: 7,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "membership_id": 42,
                "company_id": 5,
                "promotion_id": 7
            })
        );
    }

    #[test]
    fn test_memberships_response_deserialize() {
        let json = r#"{"memberships":[]}"#;
        let response: MembershipsResponse = serde_json::from_str(json).unwrap();
        assert!(response.memberships.is_empty());
    }
}
