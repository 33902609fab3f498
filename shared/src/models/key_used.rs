//! Key Usage Ledger
//!
//! Authoritative record of redeemed keys. Entries are created
//! server-side and are never mutated by the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::company::Promotion;

/// One redemption ledger entry for a membership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyUsedCompany {
    pub id: i64,
    pub company_id: i64,
    pub membership_id: i64,
    pub promotion_id: i64,
    pub is_used: bool,
    pub date_of_use: Option<DateTime<Utc>>,
    /// Redeemed promotion, when the backend eager-loads it
    #[serde(default)]
    pub promotion: Option<Promotion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_promotion() {
        let json = r#"{
            "id": 1,
            "company_id": 5,
            "membership_id": 42,
            "promotion_id": 7,
            "is_used": true,
            "date_of_use": "2025-11-03T14:30:00Z"
        }"#;
        let entry: KeyUsedCompany = serde_json::from_str(json).unwrap();
        assert_eq!(entry.promotion_id, 7);
        assert!(entry.is_used);
        assert!(entry.promotion.is_none());
        assert!(entry.date_of_use.is_some());
    }
}
