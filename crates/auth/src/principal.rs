use serde::{Deserialize, Serialize};

/// Identity of an authenticated principal as issued by the external auth
/// provider.
///
/// Provider subject identifiers are opaque strings at this layer; no format
/// is assumed beyond being non-empty in practice. Keeping the id opaque lets
/// the provider rotate its id scheme without touching domain code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(String);

impl PrincipalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PrincipalId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PrincipalId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The identity assertion supplied by the external auth provider after it has
/// verified credentials.
///
/// This is an *input* to session resolution, not an application record: the
/// application's own view of the user (role, activation, org binding) lives in
/// [`crate::UserProfile`] and may not exist yet when this assertion arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalPrincipal {
    /// Provider-issued subject identifier.
    pub id: PrincipalId,

    /// Email address the provider authenticated.
    pub email: String,

    /// Whether the provider has verified the email address.
    pub email_verified: bool,
}

impl ExternalPrincipal {
    pub fn new(id: impl Into<PrincipalId>, email: impl Into<String>, email_verified: bool) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            email_verified,
        }
    }
}
