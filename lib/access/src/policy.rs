//! Access policy evaluation.
//!
//! Given a view's access policy and the resolved authentication state, the
//! evaluator produces a routing decision. It is total (every input yields a
//! decision, denial included), pure, and side-effect-free; re-evaluating the
//! same inputs always yields the same decision. Acting on the decision —
//! rendering the view or performing the redirect, hard or soft — is the
//! host's concern.

use crate::role::{Role, role_home};
use crate::session::AuthState;

/// Access requirements for a single view.
///
/// Role sets are explicit per view rather than derived from a hierarchy:
/// an employee-tier view lists employee, HR manager, and admin; an HR-tier
/// view lists HR manager and admin. The route table is the single source of
/// truth for who may reach what.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// No authentication required; shown to everyone.
    Public,
    /// Shown to anonymous visitors; authenticated users are redirected to
    /// their role home instead (login, register, password recovery).
    AnonymousPreferred,
    /// Any authenticated identity suffices, role not considered.
    AnyAuthenticated,
    /// Only the listed roles may enter.
    Roles(&'static [Role]),
}

/// The outcome of evaluating a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested view.
    Allow,
    /// Not authenticated; send the user to the login view.
    RedirectToLogin,
    /// Send the user elsewhere: their role home on a denied role check, or
    /// the landing page for unmatched paths.
    Redirect(&'static str),
}

impl RouteDecision {
    /// Returns true if the navigation may proceed to the requested view.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the redirect target, if the decision is a redirect.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(crate::routes::LOGIN_PATH),
            Self::Redirect(path) => Some(path),
        }
    }
}

/// Evaluates a view's access policy against the authentication state.
///
/// Decision order:
/// 1. Public views allow everyone.
/// 2. Anonymous-preferred views allow anonymous visitors and redirect
///    authenticated ones to their default landing path.
/// 3. Anything else requires authentication; anonymous users go to login.
/// 4. Role-agnostic views allow any authenticated identity, even one whose
///    role is missing or unrecognized.
/// 5. Role-gated views allow listed roles and redirect everyone else to
///    their role home (unknown roles fall back to the profile view).
#[must_use]
pub fn evaluate(policy: AccessPolicy, auth: &AuthState) -> RouteDecision {
    match policy {
        AccessPolicy::Public => RouteDecision::Allow,
        AccessPolicy::AnonymousPreferred => {
            if auth.is_authenticated() {
                RouteDecision::Redirect(default_landing_path(auth))
            } else {
                RouteDecision::Allow
            }
        }
        AccessPolicy::AnyAuthenticated | AccessPolicy::Roles(_) if !auth.is_authenticated() => {
            RouteDecision::RedirectToLogin
        }
        AccessPolicy::AnyAuthenticated => RouteDecision::Allow,
        AccessPolicy::Roles(allowed) => match auth.role() {
            Some(role) if allowed.contains(&role) => RouteDecision::Allow,
            role => RouteDecision::Redirect(role_home(role)),
        },
    }
}

/// Returns where an authenticated user should land by default.
///
/// Used as the post-login destination and as the redirect target when an
/// authenticated user visits an anonymous-preferred view. Anonymous callers
/// get the profile fallback, matching the role-home table.
#[must_use]
pub fn default_landing_path(auth: &AuthState) -> &'static str {
    role_home(auth.role())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Identity;

    fn anonymous() -> AuthState {
        AuthState::Anonymous
    }

    fn authed(role: Role) -> AuthState {
        AuthState::Authenticated {
            identity: Some(Identity::with_role("test", role)),
        }
    }

    fn authed_raw(role: &str) -> AuthState {
        AuthState::Authenticated {
            identity: Some(Identity::new("test", role)),
        }
    }

    fn authed_no_identity() -> AuthState {
        AuthState::Authenticated { identity: None }
    }

    #[test]
    fn public_allows_everyone() {
        assert_eq!(
            evaluate(AccessPolicy::Public, &anonymous()),
            RouteDecision::Allow
        );
        assert_eq!(
            evaluate(AccessPolicy::Public, &authed(Role::Admin)),
            RouteDecision::Allow
        );
        assert_eq!(
            evaluate(AccessPolicy::Public, &authed_raw("guest")),
            RouteDecision::Allow
        );
    }

    #[test]
    fn anonymous_preferred_shows_form_to_anonymous() {
        assert_eq!(
            evaluate(AccessPolicy::AnonymousPreferred, &anonymous()),
            RouteDecision::Allow
        );
    }

    #[test]
    fn anonymous_preferred_redirects_authenticated_to_role_home() {
        assert_eq!(
            evaluate(AccessPolicy::AnonymousPreferred, &authed(Role::Admin)),
            RouteDecision::Redirect("/admin/dashboard")
        );
        assert_eq!(
            evaluate(AccessPolicy::AnonymousPreferred, &authed(Role::Employee)),
            RouteDecision::Redirect("/employee/dashboard")
        );
        assert_eq!(
            evaluate(AccessPolicy::AnonymousPreferred, &authed_raw("guest")),
            RouteDecision::Redirect("/profile")
        );
    }

    #[test]
    fn anonymous_user_hits_login_on_gated_views() {
        assert_eq!(
            evaluate(AccessPolicy::AnyAuthenticated, &anonymous()),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(
            evaluate(AccessPolicy::Roles(&[Role::Admin]), &anonymous()),
            RouteDecision::RedirectToLogin
        );
    }

    #[test]
    fn any_authenticated_ignores_role() {
        assert_eq!(
            evaluate(AccessPolicy::AnyAuthenticated, &authed(Role::Employee)),
            RouteDecision::Allow
        );
        // Unknown role still counts as authenticated for role-agnostic views.
        assert_eq!(
            evaluate(AccessPolicy::AnyAuthenticated, &authed_raw("guest")),
            RouteDecision::Allow
        );
        // Token present, identity record missing: same treatment.
        assert_eq!(
            evaluate(AccessPolicy::AnyAuthenticated, &authed_no_identity()),
            RouteDecision::Allow
        );
    }

    #[test]
    fn listed_role_is_allowed() {
        let hr_tier = AccessPolicy::Roles(&[Role::HrManager, Role::Admin]);
        assert_eq!(evaluate(hr_tier, &authed(Role::HrManager)), RouteDecision::Allow);
        assert_eq!(evaluate(hr_tier, &authed(Role::Admin)), RouteDecision::Allow);
    }

    #[test]
    fn unlisted_role_redirects_to_its_own_home() {
        let hr_tier = AccessPolicy::Roles(&[Role::HrManager, Role::Admin]);
        assert_eq!(
            evaluate(hr_tier, &authed(Role::Employee)),
            RouteDecision::Redirect("/employee/dashboard")
        );
    }

    #[test]
    fn unknown_role_redirects_to_profile_fallback() {
        let hr_tier = AccessPolicy::Roles(&[Role::HrManager, Role::Admin]);
        assert_eq!(
            evaluate(hr_tier, &authed_raw("guest")),
            RouteDecision::Redirect("/profile")
        );
        assert_eq!(
            evaluate(hr_tier, &authed_no_identity()),
            RouteDecision::Redirect("/profile")
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let cases = [
            (AccessPolicy::Public, anonymous()),
            (AccessPolicy::AnonymousPreferred, authed(Role::Admin)),
            (AccessPolicy::AnyAuthenticated, authed_raw("guest")),
            (AccessPolicy::Roles(&[Role::Admin]), authed(Role::Employee)),
        ];
        for (policy, auth) in cases {
            assert_eq!(evaluate(policy, &auth), evaluate(policy, &auth));
        }
    }

    #[test]
    fn default_landing_path_follows_role() {
        assert_eq!(default_landing_path(&authed(Role::Admin)), "/admin/dashboard");
        assert_eq!(default_landing_path(&authed(Role::HrManager)), "/hr/dashboard");
        assert_eq!(
            default_landing_path(&authed(Role::Employee)),
            "/employee/dashboard"
        );
        assert_eq!(default_landing_path(&authed_raw("guest")), "/profile");
        assert_eq!(default_landing_path(&anonymous()), "/profile");
    }

    #[test]
    fn redirect_target_accessor() {
        assert_eq!(RouteDecision::Allow.redirect_target(), None);
        assert_eq!(
            RouteDecision::RedirectToLogin.redirect_target(),
            Some("/login")
        );
        assert_eq!(
            RouteDecision::Redirect("/profile").redirect_target(),
            Some("/profile")
        );
    }
}
