//! Organization-request storage implementations.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use orgdesk_onboarding::{OrganizationRequest, RequestId, RequestStatus};

/// Organization-request store abstraction.
///
/// Pure pass-through persistence: review decisions are made by the aggregate,
/// the store only keeps the latest state.
pub trait OrganizationRequestStore: Send + Sync {
    /// Persist a newly submitted request.
    fn create(&self, request: OrganizationRequest) -> Result<RequestId, RequestStoreError>;

    /// Get a request by id.
    fn get(&self, request_id: RequestId) -> Result<Option<OrganizationRequest>, RequestStoreError>;

    /// List requests, optionally filtered by status, newest first.
    fn list_by_status(
        &self,
        status: Option<RequestStatus>,
    ) -> Result<Vec<OrganizationRequest>, RequestStoreError>;

    /// Replace a stored request with its evolved state.
    fn update(&self, request: &OrganizationRequest) -> Result<(), RequestStoreError>;
}

/// Request store error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestStoreError {
    #[error("request not found: {0}")]
    NotFound(RequestId),
    #[error("request already exists: {0}")]
    AlreadyExists(RequestId),
    #[error("storage error: {0}")]
    Storage(String),
}

/// In-memory request store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryOrganizationRequestStore {
    requests: RwLock<HashMap<RequestId, OrganizationRequest>>,
}

impl InMemoryOrganizationRequestStore {
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(HashMap::new()),
        }
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl OrganizationRequestStore for InMemoryOrganizationRequestStore {
    fn create(&self, request: OrganizationRequest) -> Result<RequestId, RequestStoreError> {
        let mut requests = self.requests.write().unwrap();
        let id = request.id_typed();
        if requests.contains_key(&id) {
            return Err(RequestStoreError::AlreadyExists(id));
        }
        tracing::debug!(request_id = %id, "storing organization request");
        requests.insert(id, request);
        Ok(id)
    }

    fn get(&self, request_id: RequestId) -> Result<Option<OrganizationRequest>, RequestStoreError> {
        let requests = self.requests.read().unwrap();
        Ok(requests.get(&request_id).cloned())
    }

    fn list_by_status(
        &self,
        status: Option<RequestStatus>,
    ) -> Result<Vec<OrganizationRequest>, RequestStoreError> {
        let requests = self.requests.read().unwrap();
        let mut result: Vec<_> = requests
            .values()
            .filter(|r| status.map_or(true, |s| r.status() == s))
            .cloned()
            .collect();

        // Newest first for review queues.
        result.sort_by_key(|r| std::cmp::Reverse(r.submitted_at()));
        Ok(result)
    }

    fn update(&self, request: &OrganizationRequest) -> Result<(), RequestStoreError> {
        let mut requests = self.requests.write().unwrap();
        let id = request.id_typed();
        if !requests.contains_key(&id) {
            return Err(RequestStoreError::NotFound(id));
        }
        requests.insert(id, request.clone());
        Ok(())
    }
}

impl OrganizationRequestStore for Arc<InMemoryOrganizationRequestStore> {
    fn create(&self, request: OrganizationRequest) -> Result<RequestId, RequestStoreError> {
        (**self).create(request)
    }

    fn get(&self, request_id: RequestId) -> Result<Option<OrganizationRequest>, RequestStoreError> {
        (**self).get(request_id)
    }

    fn list_by_status(
        &self,
        status: Option<RequestStatus>,
    ) -> Result<Vec<OrganizationRequest>, RequestStoreError> {
        (**self).list_by_status(status)
    }

    fn update(&self, request: &OrganizationRequest) -> Result<(), RequestStoreError> {
        (**self).update(request)
    }
}
