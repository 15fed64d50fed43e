//! `orgdesk-auth` — pure session/role resolution boundary (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP, storage and the external
//! auth provider's SDK. It turns an externally-verified identity assertion
//! plus an optional profile record into a classified session, and maps that
//! classification to the canonical route the hosting UI should show.

pub mod policy;
pub mod principal;
pub mod profile;
pub mod provider;
pub mod roles;
pub mod session;

pub use policy::{
    classify, explain_classification, navigation_target, route_for, ClassificationExplanation,
    SessionState,
};
pub use principal::{ExternalPrincipal, PrincipalId};
pub use profile::UserProfile;
pub use provider::{translate_provider_error, ProviderError};
pub use roles::Role;
pub use session::{resolve, ResolvedSession};
