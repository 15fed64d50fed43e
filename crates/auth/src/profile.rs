use serde::{Deserialize, Serialize};

use orgdesk_core::{Entity, OrgId};

use crate::{PrincipalId, Role};

/// The application's own record for a principal.
///
/// Provisioned asynchronously after first sign-in, so any caller must be
/// prepared for it to be absent. Carries the dual super-admin signal the
/// schema accumulated over time: the `SUPER_ADMIN` role *and* the legacy
/// `is_super_admin` flag both grant elevated access (the flag wins ties, see
/// [`crate::policy::classify`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Provider subject this profile belongs to.
    pub principal_id: PrincipalId,

    /// Email recorded at provisioning time.
    pub email: String,

    /// Application role.
    pub role: Role,

    /// Legacy elevated-access flag, independent of `role`.
    pub is_super_admin: bool,

    /// Activation gate: inactive profiles never reach a dashboard.
    pub active: bool,

    /// Organization binding, if the user belongs to one.
    pub org_id: Option<OrgId>,
}

impl UserProfile {
    /// A freshly provisioned, not-yet-activated member profile.
    pub fn provisioned(
        principal_id: impl Into<PrincipalId>,
        email: impl Into<String>,
        role: Role,
        org_id: Option<OrgId>,
    ) -> Self {
        Self {
            principal_id: principal_id.into(),
            email: email.into(),
            role,
            is_super_admin: false,
            active: false,
            org_id,
        }
    }

    pub fn activated(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn with_super_admin_flag(mut self) -> Self {
        self.is_super_admin = true;
        self
    }

    /// Elevated access by either signal (role enum or legacy flag).
    pub fn has_super_admin_access(&self) -> bool {
        self.is_super_admin || self.role.is_super_admin()
    }
}

impl Entity for UserProfile {
    type Id = PrincipalId;

    fn id(&self) -> &Self::Id {
        &self.principal_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provisioned_profiles_start_inactive() {
        let profile = UserProfile::provisioned("uid-1", "a@acme.com", Role::OrgMember, None);
        assert!(!profile.active);
        assert!(!profile.has_super_admin_access());
    }

    #[test]
    fn either_signal_grants_super_admin_access() {
        let by_role =
            UserProfile::provisioned("uid-1", "root@acme.com", Role::SuperAdmin, None).activated();
        assert!(by_role.has_super_admin_access());

        let by_flag = UserProfile::provisioned("uid-2", "ops@acme.com", Role::OrgAdmin, None)
            .activated()
            .with_super_admin_flag();
        assert!(by_flag.has_super_admin_access());
    }
}
