//! Role-based access control, as plain data and a pure guard function.
//!
//! The route table itself lives next to the route enum in the `web` crate;
//! this module only knows how to turn a policy plus the current session into
//! a decision. No network, no navigation, no framework types — the router
//! layer interprets the [`AccessDecision`].

use api::models::Role;

use crate::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Declarative permission entry for one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Reachable without a session.
    Public,
    /// Requires a session; `allowed: None` means any authenticated role.
    /// Membership is exact-match against the role enumeration, never
    /// hierarchical.
    Protected { allowed: Option<&'static [Role]> },
}

impl RoutePolicy {
    pub const fn any_role() -> Self {
        RoutePolicy::Protected { allowed: None }
    }

    pub const fn roles(allowed: &'static [Role]) -> Self {
        RoutePolicy::Protected {
            allowed: Some(allowed),
        }
    }
}

/// Outcome of evaluating one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// Unauthenticated on a protected route. The original destination is
    /// discarded; there is no return-to-path memory.
    RedirectLogin,
    /// Authenticated but the role is not in the allow-list.
    RedirectUnauthorized,
}

/// Gate one navigation attempt. Pure: callers issue the actual redirect.
pub fn evaluate(policy: RoutePolicy, session: &SessionState) -> AccessDecision {
    match policy {
        RoutePolicy::Public => AccessDecision::Allow,
        RoutePolicy::Protected { allowed } => {
            let Some(user) = &session.user else {
                return AccessDecision::RedirectLogin;
            };
            match allowed {
                None => AccessDecision::Allow,
                Some(roles) if roles.contains(&user.role) => AccessDecision::Allow,
                Some(_) => AccessDecision::RedirectUnauthorized,
            }
        }
    }
}

/// Canonical landing path per role, used by the `/` and `/dashboard`
/// pseudo-routes. An unknown role falls back to the login redirect rather
/// than crashing.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Scout => "/my-progress",
        Role::Foreman | Role::Liaison => "/my-groups",
        Role::Admin => "/admin-dashboard",
        Role::Unknown => LOGIN_PATH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::User;

    fn session_with(role: Role) -> SessionState {
        SessionState {
            user: Some(User {
                id: "u1".to_string(),
                email: "u@plast.org".to_string(),
                name: "U".to_string(),
                picture: None,
                role,
                group_id: None,
                kurin: None,
                sex: None,
            }),
            token: None,
            loading: false,
            ready: true,
        }
    }

    fn anonymous() -> SessionState {
        SessionState {
            loading: false,
            ready: true,
            ..SessionState::default()
        }
    }

    const ALL_ROLES: [Role; 5] = [
        Role::Scout,
        Role::Foreman,
        Role::Liaison,
        Role::Admin,
        Role::Unknown,
    ];

    #[test]
    fn public_routes_never_redirect() {
        assert_eq!(evaluate(RoutePolicy::Public, &anonymous()), AccessDecision::Allow);
        for role in ALL_ROLES {
            assert_eq!(
                evaluate(RoutePolicy::Public, &session_with(role)),
                AccessDecision::Allow
            );
        }
    }

    #[test]
    fn unauthenticated_protected_always_redirects_login() {
        // Regardless of the allow-list.
        for policy in [
            RoutePolicy::any_role(),
            RoutePolicy::roles(&[Role::Admin]),
            RoutePolicy::roles(&[Role::Scout, Role::Foreman]),
        ] {
            assert_eq!(evaluate(policy, &anonymous()), AccessDecision::RedirectLogin);
        }
    }

    #[test]
    fn role_mismatch_redirects_unauthorized() {
        let policy = RoutePolicy::roles(&[Role::Liaison, Role::Admin]);
        for role in ALL_ROLES {
            let expected = if role == Role::Liaison || role == Role::Admin {
                AccessDecision::Allow
            } else {
                AccessDecision::RedirectUnauthorized
            };
            assert_eq!(evaluate(policy, &session_with(role)), expected, "role {role:?}");
        }
    }

    #[test]
    fn missing_allow_list_admits_any_authenticated_role() {
        for role in ALL_ROLES {
            assert_eq!(
                evaluate(RoutePolicy::any_role(), &session_with(role)),
                AccessDecision::Allow
            );
        }
    }

    #[test]
    fn landing_paths_per_role() {
        assert_eq!(landing_path(Role::Scout), "/my-progress");
        assert_eq!(landing_path(Role::Foreman), "/my-groups");
        assert_eq!(landing_path(Role::Liaison), "/my-groups");
        assert_eq!(landing_path(Role::Admin), "/admin-dashboard");
        assert_eq!(landing_path(Role::Unknown), LOGIN_PATH);
    }
}
