//! Membership Model
//!
//! A membership grants a user a fixed number of keys for one location.
//! The client only ever holds a read-only, possibly-stale snapshot; the
//! backend owns the entity and its redemption ledger.

use serde::{Deserialize, Serialize};

use super::company::Company;
use super::key_used::KeyUsedCompany;
use super::province::Province;

/// Membership entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub id: i64,
    /// Amount paid for the membership in currency unit
    pub total: f64,
    pub total_keys: i32,
    pub remaining_keys: i32,
    pub is_active: bool,
    #[serde(default)]
    pub location_info: Option<LocationInfo>,
    #[serde(default)]
    pub company_info: Option<Company>,
    #[serde(default)]
    pub pivot_info: Option<PivotInfo>,
    #[serde(default)]
    pub keys_used_companies: Vec<KeyUsedCompany>,
}

/// Location the membership was purchased for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInfo {
    pub id: i64,
    pub description: String,
    pub price: f64,
    pub province: Province,
}

/// Pivot row linking the member to the location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PivotInfo {
    pub people_id: i64,
    pub location_id: i64,
}

impl Membership {
    /// Number of keys recorded as used in the ledger
    pub fn used_key_count(&self) -> usize {
        self.keys_used_companies.iter().filter(|k| k.is_used).count()
    }

    /// Check the ledger invariant:
    /// `remaining_keys == total_keys - |{k : k.is_used}|`
    pub fn ledger_is_consistent(&self) -> bool {
        i64::from(self.remaining_keys)
            == i64::from(self.total_keys) - self.used_key_count() as i64
    }

    /// Whether the membership still has redeemable keys
    pub fn has_remaining_keys(&self) -> bool {
        self.remaining_keys > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ledger_entry(id: i64, promotion_id: i64, is_used: bool) -> KeyUsedCompany {
        KeyUsedCompany {
            id,
            company_id: 5,
            membership_id: 42,
            promotion_id,
            is_used,
            date_of_use: None,
            promotion: None,
        }
    }

    fn make_membership(total_keys: i32, remaining_keys: i32) -> Membership {
        Membership {
            id: 42,
            total: 10000.0,
            total_keys,
            remaining_keys,
            is_active: true,
            location_info: None,
            company_info: None,
            pivot_info: None,
            keys_used_companies: vec![],
        }
    }

    #[test]
    fn test_ledger_invariant_holds() {
        let mut membership = make_membership(3, 2);
        membership.keys_used_companies = vec![make_ledger_entry(1, 7, true)];
        assert_eq!(membership.used_key_count(), 1);
        assert!(membership.ledger_is_consistent());
    }

    #[test]
    fn test_ledger_invariant_ignores_unused_entries() {
        let mut membership = make_membership(3, 2);
        membership.keys_used_companies = vec![
            make_ledger_entry(1, 7, true),
            make_ledger_entry(2, 8, false),
        ];
        assert_eq!(membership.used_key_count(), 1);
        assert!(membership.ledger_is_consistent());
    }

    #[test]
    fn test_ledger_invariant_detects_stale_counter() {
        let mut membership = make_membership(3, 3);
        membership.keys_used_companies = vec![make_ledger_entry(1, 7, true)];
        assert!(!membership.ledger_is_consistent());
    }

    #[test]
    fn test_has_remaining_keys() {
        assert!(make_membership(3, 1).has_remaining_keys());
        assert!(!make_membership(3, 0).has_remaining_keys());
    }

    #[test]
    fn test_deserialize_snake_case() {
        let json = r#"{
            "id": 42,
            "total": 10000,
            "total_keys": 3,
            "remaining_keys": 2,
            "is_active": true,
            "keys_used_companies": [
                {
                    "id": 1,
                    "company_id": 5,
                    "membership_id": 42,
                    "promotion_id": 7,
                    "is_used": true,
                    "date_of_use": null
                }
            ]
        }"#;
        let membership: Membership = serde_json::from_str(json).unwrap();
        assert_eq!(membership.id, 42);
        assert_eq!(membership.remaining_keys, 2);
        assert!(membership.ledger_is_consistent());
    }
}
