//! Membership data provider
//!
//! Owns the local membership snapshot. The snapshot is read-only for the
//! rest of the workflow and is always replaced wholesale on refresh;
//! there are no partial writes and no ambient singletons.

use std::sync::Arc;

use crate::backend::Backend;
use crate::error::ClientResult;
use shared::models::Membership;

/// Explicitly owned membership snapshot store
#[derive(Debug, Default)]
pub struct MembershipStore {
    memberships: Vec<Membership>,
}

impl MembershipStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot
    pub fn replace_all(&mut self, memberships: Vec<Membership>) {
        self.memberships = memberships;
    }

    /// All memberships in the current snapshot
    pub fn memberships(&self) -> &[Membership] {
        &self.memberships
    }

    /// Look up a membership by id
    pub fn get(&self, membership_id: i64) -> Option<&Membership> {
        self.memberships.iter().find(|m| m.id == membership_id)
    }

    /// Whether the snapshot holds no memberships
    pub fn is_empty(&self) -> bool {
        self.memberships.is_empty()
    }
}

/// Fetches membership snapshots for one user from the backend
pub struct MembershipProvider {
    backend: Arc<dyn Backend>,
    user_id: String,
    store: MembershipStore,
}

impl MembershipProvider {
    /// Create a provider for the given user
    pub fn new(backend: Arc<dyn Backend>, user_id: impl Into<String>) -> Self {
        Self {
            backend,
            user_id: user_id.into(),
            store: MembershipStore::new(),
        }
    }

    /// Re-fetch the user's memberships and replace the snapshot
    ///
    /// Always a full re-fetch, never an incremental patch; the server
    /// ledger is the source of truth.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let memberships = self.backend.fetch_memberships(&self.user_id).await?;
        tracing::info!(count = memberships.len(), "membership snapshot refreshed");
        self.store.replace_all(memberships);
        Ok(())
    }

    /// Read access to the current snapshot
    pub fn store(&self) -> &MembershipStore {
        &self.store
    }

    /// The backend this provider talks to
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_membership(id: i64) -> Membership {
        Membership {
            id,
            total: 10000.0,
            total_keys: 3,
            remaining_keys: 3,
            is_active: true,
            location_info: None,
            company_info: None,
            pivot_info: None,
            keys_used_companies: vec![],
        }
    }

    #[test]
    fn test_store_replace_is_wholesale() {
        let mut store = MembershipStore::new();
        store.replace_all(vec![make_membership(1), make_membership(2)]);
        assert_eq!(store.memberships().len(), 2);

        store.replace_all(vec![make_membership(3)]);
        assert_eq!(store.memberships().len(), 1);
        assert!(store.get(1).is_none());
        assert!(store.get(3).is_some());
    }

    #[test]
    fn test_store_lookup() {
        let mut store = MembershipStore::new();
        assert!(store.is_empty());
        store.replace_all(vec![make_membership(42)]);
        assert_eq!(store.get(42).map(|m| m.id), Some(42));
        assert!(store.get(7).is_none());
    }
}
