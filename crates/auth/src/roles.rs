use serde::{Deserialize, Serialize};

/// Application role attached to a user profile.
///
/// The wire format is the profile store's role code (e.g. `"ORG_ADMIN"`).
/// Codes that are not recognized are carried verbatim as [`Role::Unknown`]
/// rather than rejected: profiles are written by an evolving admin surface and
/// an unreadable profile must still resolve to a (non-dashboard) session
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    SuperAdmin,
    OrgAdmin,
    OrgMember,
    OrgFinance,
    OrgAuditor,
    OrgUser,
    /// Role code this version of the application does not recognize.
    Unknown(String),
}

impl Role {
    /// Parse a role code. Total: unrecognized codes become [`Role::Unknown`].
    pub fn parse(code: &str) -> Self {
        match code {
            "SUPER_ADMIN" => Role::SuperAdmin,
            "ORG_ADMIN" => Role::OrgAdmin,
            "ORG_MEMBER" => Role::OrgMember,
            "ORG_FINANCE" => Role::OrgFinance,
            "ORG_AUDITOR" => Role::OrgAuditor,
            "ORG_USER" => Role::OrgUser,
            other => Role::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::OrgAdmin => "ORG_ADMIN",
            Role::OrgMember => "ORG_MEMBER",
            Role::OrgFinance => "ORG_FINANCE",
            Role::OrgAuditor => "ORG_AUDITOR",
            Role::OrgUser => "ORG_USER",
            Role::Unknown(code) => code,
        }
    }

    /// Whether this is the dedicated super-admin role.
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }

    /// Whether this is one of the recognized organization-scoped roles.
    pub fn is_org_role(&self) -> bool {
        matches!(
            self,
            Role::OrgAdmin | Role::OrgMember | Role::OrgFinance | Role::OrgAuditor | Role::OrgUser
        )
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::parse(&value)
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognized_codes() {
        assert_eq!(Role::parse("SUPER_ADMIN"), Role::SuperAdmin);
        assert_eq!(Role::parse("ORG_ADMIN"), Role::OrgAdmin);
        assert_eq!(Role::parse("ORG_MEMBER"), Role::OrgMember);
        assert_eq!(Role::parse("ORG_FINANCE"), Role::OrgFinance);
        assert_eq!(Role::parse("ORG_AUDITOR"), Role::OrgAuditor);
        assert_eq!(Role::parse("ORG_USER"), Role::OrgUser);
    }

    #[test]
    fn unknown_codes_are_carried_verbatim() {
        let role = Role::parse("ORG_WIZARD");
        assert_eq!(role, Role::Unknown("ORG_WIZARD".to_string()));
        assert_eq!(role.as_str(), "ORG_WIZARD");
        assert!(!role.is_org_role());
        assert!(!role.is_super_admin());
    }

    #[test]
    fn serde_round_trips_through_the_wire_code() {
        let json = serde_json::to_string(&Role::OrgFinance).unwrap();
        assert_eq!(json, "\"ORG_FINANCE\"");

        let role: Role = serde_json::from_str("\"SUPER_ADMIN\"").unwrap();
        assert_eq!(role, Role::SuperAdmin);

        let role: Role = serde_json::from_str("\"LEGACY_ROLE\"").unwrap();
        assert_eq!(role, Role::Unknown("LEGACY_ROLE".to_string()));
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"LEGACY_ROLE\"");
    }

    #[test]
    fn org_role_family() {
        assert!(Role::OrgAdmin.is_org_role());
        assert!(Role::OrgUser.is_org_role());
        assert!(!Role::SuperAdmin.is_org_role());
    }
}
