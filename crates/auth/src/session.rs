use serde::{Deserialize, Serialize};

use crate::{ExternalPrincipal, UserProfile};

/// A resolved session: the external identity assertion joined with the
/// application's profile record.
///
/// Derived on every render/poll, never persisted. Both fields are explicit
/// optionals because both absences are ordinary states the UI must render
/// (signed out, and signed in while provisioning completes), not failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSession {
    /// The authenticated identity, if any.
    pub principal: Option<ExternalPrincipal>,

    /// The application profile, if provisioned. Always `None` when
    /// `principal` is `None`.
    pub profile: Option<UserProfile>,
}

impl ResolvedSession {
    /// The signed-out session.
    pub fn unauthenticated() -> Self {
        Self {
            principal: None,
            profile: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }
}

/// Join an identity assertion with a profile lookup result.
///
/// Pure mapping, no IO and no failure path: the calling UI layer polls this
/// repeatedly while waiting for asynchronous profile provisioning, so absence
/// is represented as explicit optional fields, never as an error.
///
/// A profile supplied without a principal is discarded: an unauthenticated
/// session carries no application state, whatever a stale cache may hold.
pub fn resolve(
    principal: Option<ExternalPrincipal>,
    profile: Option<UserProfile>,
) -> ResolvedSession {
    match principal {
        None => ResolvedSession::unauthenticated(),
        Some(principal) => ResolvedSession {
            principal: Some(principal),
            profile,
        },
    }
}
