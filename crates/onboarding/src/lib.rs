//! Onboarding domain module (organization provisioning requests, event-sourced).
//!
//! This crate contains business rules for public organization requests,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod request;

pub use request::{
    ApproveRequest, OrganizationRequest, RejectRequest, RequestApproved, RequestCommand,
    RequestEvent, RequestId, RequestRejected, RequestStatus, RequestSubmitted, SubmitRequest,
};
