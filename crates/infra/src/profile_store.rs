//! Profile storage implementations.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use orgdesk_auth::{PrincipalId, UserProfile};

/// Profile store abstraction.
///
/// Keyed by the provider-issued principal id. Absence is `None`, never an
/// error: a missing profile is the ordinary state while asynchronous
/// provisioning completes.
pub trait ProfileStore: Send + Sync {
    /// Insert or replace a profile.
    fn upsert(&self, profile: UserProfile);

    /// Look up a profile by principal id.
    fn get(&self, principal_id: &PrincipalId) -> Option<UserProfile>;

    /// Remove a profile, if present.
    fn remove(&self, principal_id: &PrincipalId);
}

/// In-memory profile store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<PrincipalId, UserProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
        }
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn upsert(&self, profile: UserProfile) {
        tracing::debug!(principal_id = %profile.principal_id, "upserting profile");
        let mut profiles = self.profiles.write().unwrap();
        profiles.insert(profile.principal_id.clone(), profile);
    }

    fn get(&self, principal_id: &PrincipalId) -> Option<UserProfile> {
        let profiles = self.profiles.read().unwrap();
        profiles.get(principal_id).cloned()
    }

    fn remove(&self, principal_id: &PrincipalId) {
        let mut profiles = self.profiles.write().unwrap();
        profiles.remove(principal_id);
    }
}

impl ProfileStore for Arc<InMemoryProfileStore> {
    fn upsert(&self, profile: UserProfile) {
        (**self).upsert(profile)
    }

    fn get(&self, principal_id: &PrincipalId) -> Option<UserProfile> {
        (**self).get(principal_id)
    }

    fn remove(&self, principal_id: &PrincipalId) {
        (**self).remove(principal_id)
    }
}
