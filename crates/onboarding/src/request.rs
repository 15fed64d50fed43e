use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orgdesk_core::{Aggregate, AggregateId, AggregateRoot, DomainError};
use orgdesk_events::Event;

/// Organization-request identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub AggregateId);

impl RequestId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for RequestId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Request review lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Aggregate root: a public submission asking for a new organization.
///
/// Requests are never deleted by this domain; they move from `Pending` to a
/// terminal `Approved`/`Rejected` decision exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationRequest {
    id: RequestId,
    organization_name: String,
    contact_email: String,
    contact_name: String,
    business_type: String,
    country: String,
    message: Option<String>,
    status: RequestStatus,
    submitted_at: DateTime<Utc>,
    version: u64,
    created: bool,
}

impl OrganizationRequest {
    /// Create an empty, not-yet-created aggregate instance for rehydration.
    pub fn empty(id: RequestId) -> Self {
        Self {
            id,
            organization_name: String::new(),
            contact_email: String::new(),
            contact_name: String::new(),
            business_type: String::new(),
            country: String::new(),
            message: None,
            status: RequestStatus::Pending,
            submitted_at: DateTime::<Utc>::UNIX_EPOCH,
            version: 0,
            created: false,
        }
    }

    pub fn id_typed(&self) -> RequestId {
        self.id
    }

    pub fn organization_name(&self) -> &str {
        &self.organization_name
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    pub fn business_type(&self) -> &str {
        &self.business_type
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Invariant helper: whether this request is still awaiting review.
    ///
    /// Decided requests cannot be reviewed again.
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

impl AggregateRoot for OrganizationRequest {
    type Id = RequestId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: SubmitRequest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub request_id: RequestId,
    pub organization_name: String,
    pub contact_email: String,
    pub contact_name: String,
    pub business_type: String,
    pub country: String,
    pub message: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ApproveRequest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveRequest {
    pub request_id: RequestId,
    /// Whether the acting reviewer holds elevated access.
    pub actor_is_super_admin: bool,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RejectRequest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectRequest {
    pub request_id: RequestId,
    /// Whether the acting reviewer holds elevated access.
    pub actor_is_super_admin: bool,
    /// Optional human-readable reason for rejection.
    pub reason: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestCommand {
    SubmitRequest(SubmitRequest),
    ApproveRequest(ApproveRequest),
    RejectRequest(RejectRequest),
}

/// Event: RequestSubmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSubmitted {
    pub request_id: RequestId,
    pub organization_name: String,
    /// Normalized (trimmed, lowercased) contact email.
    pub contact_email: String,
    pub contact_name: String,
    pub business_type: String,
    pub country: String,
    pub message: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: RequestApproved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestApproved {
    pub request_id: RequestId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: RequestRejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRejected {
    pub request_id: RequestId,
    pub reason: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestEvent {
    RequestSubmitted(RequestSubmitted),
    RequestApproved(RequestApproved),
    RequestRejected(RequestRejected),
}

impl Event for RequestEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RequestEvent::RequestSubmitted(_) => "onboarding.request.submitted",
            RequestEvent::RequestApproved(_) => "onboarding.request.approved",
            RequestEvent::RequestRejected(_) => "onboarding.request.rejected",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            RequestEvent::RequestSubmitted(e) => e.occurred_at,
            RequestEvent::RequestApproved(e) => e.occurred_at,
            RequestEvent::RequestRejected(e) => e.occurred_at,
        }
    }
}

impl Aggregate for OrganizationRequest {
    type Command = RequestCommand;
    type Event = RequestEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            RequestEvent::RequestSubmitted(e) => {
                self.id = e.request_id;
                self.organization_name = e.organization_name.clone();
                self.contact_email = e.contact_email.clone();
                self.contact_name = e.contact_name.clone();
                self.business_type = e.business_type.clone();
                self.country = e.country.clone();
                self.message = e.message.clone();
                self.status = RequestStatus::Pending;
                self.submitted_at = e.occurred_at;
                self.created = true;
            }
            RequestEvent::RequestApproved(_) => {
                self.status = RequestStatus::Approved;
            }
            RequestEvent::RequestRejected(_) => {
                self.status = RequestStatus::Rejected;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            RequestCommand::SubmitRequest(cmd) => self.handle_submit(cmd),
            RequestCommand::ApproveRequest(cmd) => self.handle_approve(cmd),
            RequestCommand::RejectRequest(cmd) => self.handle_reject(cmd),
        }
    }
}

impl OrganizationRequest {
    fn ensure_request_id(&self, request_id: RequestId) -> Result<(), DomainError> {
        if self.id != request_id {
            return Err(DomainError::invariant("request_id mismatch"));
        }
        Ok(())
    }

    fn ensure_reviewer(&self, actor_is_super_admin: bool) -> Result<(), DomainError> {
        if !actor_is_super_admin {
            return Err(DomainError::Unauthorized);
        }
        Ok(())
    }

    fn ensure_pending(&self) -> Result<(), DomainError> {
        if self.status != RequestStatus::Pending {
            return Err(DomainError::invariant("request has already been decided"));
        }
        Ok(())
    }

    fn handle_submit(&self, cmd: &SubmitRequest) -> Result<Vec<RequestEvent>, DomainError> {
        if self.created {
            return Err(DomainError::conflict("request already exists"));
        }

        if cmd.organization_name.trim().is_empty() {
            return Err(DomainError::validation("organization name cannot be empty"));
        }

        if cmd.contact_name.trim().is_empty() {
            return Err(DomainError::validation("contact name cannot be empty"));
        }

        let contact_email = cmd.contact_email.trim().to_lowercase();
        if contact_email.is_empty() || !contact_email.contains('@') {
            return Err(DomainError::validation("contact email is not valid"));
        }

        Ok(vec![RequestEvent::RequestSubmitted(RequestSubmitted {
            request_id: cmd.request_id,
            organization_name: cmd.organization_name.clone(),
            contact_email,
            contact_name: cmd.contact_name.clone(),
            business_type: cmd.business_type.clone(),
            country: cmd.country.clone(),
            message: cmd.message.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_approve(&self, cmd: &ApproveRequest) -> Result<Vec<RequestEvent>, DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        self.ensure_request_id(cmd.request_id)?;
        self.ensure_reviewer(cmd.actor_is_super_admin)?;
        self.ensure_pending()?;

        Ok(vec![RequestEvent::RequestApproved(RequestApproved {
            request_id: cmd.request_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_reject(&self, cmd: &RejectRequest) -> Result<Vec<RequestEvent>, DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        self.ensure_request_id(cmd.request_id)?;
        self.ensure_reviewer(cmd.actor_is_super_admin)?;
        self.ensure_pending()?;

        Ok(vec![RequestEvent::RequestRejected(RequestRejected {
            request_id: cmd.request_id,
            reason: cmd.reason.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }
}
