use serde::Serialize;

use crate::{ResolvedSession, Role};

/// Classified session state, as consumed by every guarded page.
///
/// `classify` maps each reachable [`ResolvedSession`] to exactly one of these
/// states; the canonical route for each state is given by [`route_for`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// No authenticated principal.
    Unauthenticated,
    /// Authenticated, but the application profile has not been provisioned yet.
    Provisioning,
    /// Profile exists but has not been activated by an administrator.
    PendingActivation,
    /// Active profile with elevated access (role or legacy flag).
    ActiveSuperAdmin,
    /// Active profile with a recognized organization role.
    ActiveOrg { role: Role },
    /// Active profile whose role this application version does not recognize.
    /// Deliberately routed to a neutral page, never to a dashboard.
    UnknownRole,
}

/// Classify a resolved session.
///
/// - No IO
/// - No panics
/// - Total: every session maps to exactly one state
///
/// The super-admin check runs **before** the org-role check, so a profile with
/// `role = ORG_ADMIN` and the legacy `is_super_admin` flag set classifies as
/// [`SessionState::ActiveSuperAdmin`]. This ordering is load-bearing for
/// compatibility with profiles written by earlier schema versions.
pub fn classify(session: &ResolvedSession) -> SessionState {
    if session.principal.is_none() {
        return SessionState::Unauthenticated;
    }

    let Some(profile) = &session.profile else {
        return SessionState::Provisioning;
    };

    if !profile.active {
        return SessionState::PendingActivation;
    }

    if profile.has_super_admin_access() {
        return SessionState::ActiveSuperAdmin;
    }

    if profile.role.is_org_role() {
        return SessionState::ActiveOrg {
            role: profile.role.clone(),
        };
    }

    SessionState::UnknownRole
}

/// Canonical route for a session state.
pub fn route_for(state: &SessionState) -> &'static str {
    match state {
        SessionState::Unauthenticated => "/",
        SessionState::Provisioning => "/setup-status",
        SessionState::PendingActivation => "/setup-status",
        SessionState::ActiveSuperAdmin => "/super-admin/dashboard",
        SessionState::ActiveOrg { .. } => "/org/dashboard",
        SessionState::UnknownRole => "/setup-status",
    }
}

/// Compute the navigation a guarded page should issue, if any.
///
/// Returns `Some(route)` when the session's canonical route differs from the
/// route the caller is currently rendering, `None` otherwise. Because
/// `classify` is pure, re-invoking this with an unchanged session yields the
/// same answer, so pollers never issue duplicate navigations.
pub fn navigation_target(current_route: &str, session: &ResolvedSession) -> Option<&'static str> {
    let target = route_for(&classify(session));
    if target == current_route {
        None
    } else {
        Some(target)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Classification Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of a classification decision.
///
/// Answers "why did this session land on that page?" for support and audit
/// tooling, including whether access was granted by the role enum or by the
/// legacy flag.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationExplanation {
    /// The state the session classified to.
    pub state: SessionState,

    /// The canonical route for that state.
    pub route: &'static str,

    /// The rule that fired, in evaluation order.
    pub rule: &'static str,

    /// Facts considered, as far as they exist on this session.
    pub facts: SessionFacts,
}

/// Observed session facts at classification time.
#[derive(Debug, Clone, Serialize)]
pub struct SessionFacts {
    pub authenticated: bool,
    pub profile_present: bool,
    pub active: Option<bool>,
    pub role: Option<String>,
    pub legacy_super_admin_flag: Option<bool>,
}

impl SessionFacts {
    fn observe(session: &ResolvedSession) -> Self {
        Self {
            authenticated: session.principal.is_some(),
            profile_present: session.profile.is_some(),
            active: session.profile.as_ref().map(|p| p.active),
            role: session.profile.as_ref().map(|p| p.role.as_str().to_string()),
            legacy_super_admin_flag: session.profile.as_ref().map(|p| p.is_super_admin),
        }
    }
}

/// Explain a classification decision.
///
/// Same evaluation order as [`classify`]; the returned state always equals
/// `classify(session)`.
pub fn explain_classification(session: &ResolvedSession) -> ClassificationExplanation {
    let state = classify(session);
    let rule = match &state {
        SessionState::Unauthenticated => "no authenticated principal",
        SessionState::Provisioning => "principal present, profile not yet provisioned",
        SessionState::PendingActivation => "profile present but not activated",
        SessionState::ActiveSuperAdmin => {
            match session.profile.as_ref() {
                Some(p) if p.role.is_super_admin() && p.is_super_admin => {
                    "super-admin by role and legacy flag"
                }
                Some(p) if p.is_super_admin => "super-admin by legacy flag only",
                _ => "super-admin by role",
            }
        }
        SessionState::ActiveOrg { .. } => "active profile with recognized organization role",
        SessionState::UnknownRole => "active profile with unrecognized role",
    };

    ClassificationExplanation {
        route: route_for(&state),
        rule,
        facts: SessionFacts::observe(session),
        state,
    }
}
