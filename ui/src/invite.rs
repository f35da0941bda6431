//! Invite redemption reconciliation.
//!
//! A token may belong to either of two server operations with different side
//! effects and response shapes: "join an existing group" or "accept a
//! role-scoped invitation". The client cannot tell which before trying, so
//! redemption always attempts join first and falls back to accept on *any*
//! join failure, without discriminating error causes. The order matters: the
//! operations are not guaranteed idempotent on partial failure, so it is
//! preserved exactly and the fallback only starts after the primary attempt
//! has rejected.

use std::future::Future;

use api::models::{AcceptInviteResponse, JoinGroupResponse};
use api::{ApiClient, ApiError};

use crate::pending::store_pending;
use crate::session::SessionState;

pub const DEFAULT_SUCCESS: &str = "Invitation accepted successfully!";
pub const DEFAULT_FAILURE: &str = "Failed to accept invitation";

/// Unified success payload of either redemption operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RedeemOutcome {
    pub message: Option<String>,
    pub group_name: Option<String>,
    pub kurin_name: Option<String>,
}

impl RedeemOutcome {
    /// Notification text: group name, else kurin name, else the server
    /// message, else a hardcoded default.
    pub fn success_message(&self) -> String {
        if let Some(group) = &self.group_name {
            return format!("Successfully joined {group}!");
        }
        if let Some(kurin) = &self.kurin_name {
            return format!("Successfully joined {kurin}!");
        }
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_SUCCESS)
            .to_string()
    }
}

impl From<JoinGroupResponse> for RedeemOutcome {
    fn from(resp: JoinGroupResponse) -> Self {
        RedeemOutcome {
            message: resp.message,
            group_name: resp.group_name,
            kurin_name: None,
        }
    }
}

impl From<AcceptInviteResponse> for RedeemOutcome {
    fn from(resp: AcceptInviteResponse) -> Self {
        RedeemOutcome {
            message: resp.message,
            group_name: resp.group_name,
            kurin_name: resp.kurin_name,
        }
    }
}

/// The two redemption operations, behind a seam so the flow is testable
/// without a server.
pub trait InviteRedeemer {
    fn join_group(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<JoinGroupResponse, ApiError>>;
    fn accept_invite(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<AcceptInviteResponse, ApiError>>;
}

impl InviteRedeemer for ApiClient {
    async fn join_group(&self, token: &str) -> Result<JoinGroupResponse, ApiError> {
        api::invites::join_group(self, token).await
    }

    async fn accept_invite(&self, token: &str) -> Result<AcceptInviteResponse, ApiError> {
        api::invites::accept_invite(self, token).await
    }
}

/// Gate for the invite landing page. An unauthenticated visitor never gets a
/// redemption attempt: the token is parked for the post-login pass and `None`
/// is returned so the caller can route to login.
pub async fn redeem_or_defer<R: InviteRedeemer>(
    redeemer: &R,
    session: &SessionState,
    token: &str,
) -> Option<Result<RedeemOutcome, ApiError>> {
    if !session.is_authenticated() {
        store_pending(token);
        return None;
    }
    Some(redeem(redeemer, token).await)
}

/// Redeem a token: join first, accept as the unconditional fallback. On a
/// double failure the *second* error is surfaced; no further automatic retry.
pub async fn redeem<R: InviteRedeemer>(redeemer: &R, token: &str) -> Result<RedeemOutcome, ApiError> {
    match redeemer.join_group(token).await {
        Ok(resp) => Ok(resp.into()),
        Err(join_err) => {
            tracing::debug!(error = %join_err, "group join rejected, trying invitation accept");
            match redeemer.accept_invite(token).await {
                Ok(resp) => Ok(resp.into()),
                Err(accept_err) => Err(accept_err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pending::take_pending;
    use api::models::{Role, User};
    use std::cell::RefCell;

    /// Scripted redeemer recording call order.
    struct MockRedeemer {
        join: Result<JoinGroupResponse, String>,
        accept: Result<AcceptInviteResponse, String>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl MockRedeemer {
        fn new(
            join: Result<JoinGroupResponse, String>,
            accept: Result<AcceptInviteResponse, String>,
        ) -> Self {
            Self {
                join,
                accept,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }
    }

    impl InviteRedeemer for MockRedeemer {
        async fn join_group(&self, _token: &str) -> Result<JoinGroupResponse, ApiError> {
            self.calls.borrow_mut().push("join");
            self.join.clone().map_err(|message| ApiError::Status {
                status: 400,
                message,
            })
        }

        async fn accept_invite(&self, _token: &str) -> Result<AcceptInviteResponse, ApiError> {
            self.calls.borrow_mut().push("accept");
            self.accept.clone().map_err(|message| ApiError::Status {
                status: 400,
                message,
            })
        }
    }

    fn join_ok(group: &str) -> Result<JoinGroupResponse, String> {
        Ok(JoinGroupResponse {
            message: Some("ok".to_string()),
            group_id: Some("g1".to_string()),
            group_name: Some(group.to_string()),
        })
    }

    fn accept_ok_kurin(kurin: &str) -> Result<AcceptInviteResponse, String> {
        Ok(AcceptInviteResponse {
            message: Some("accepted".to_string()),
            kurin_name: Some(kurin.to_string()),
            ..AcceptInviteResponse::default()
        })
    }

    #[tokio::test]
    async fn join_success_skips_fallback() {
        let mock = MockRedeemer::new(join_ok("Eagles"), Err("unused".to_string()));
        let outcome = redeem(&mock, "abc123").await.unwrap();
        assert_eq!(outcome.success_message(), "Successfully joined Eagles!");
        assert_eq!(mock.calls(), vec!["join"]);
    }

    #[tokio::test]
    async fn join_failure_falls_back_to_accept() {
        let mock = MockRedeemer::new(Err("not a group token".to_string()), accept_ok_kurin("Hawks"));
        let outcome = redeem(&mock, "abc123").await.unwrap();
        assert_eq!(outcome.success_message(), "Successfully joined Hawks!");
        // Sequential, join strictly first.
        assert_eq!(mock.calls(), vec!["join", "accept"]);
    }

    #[tokio::test]
    async fn double_failure_surfaces_second_error() {
        let mock = MockRedeemer::new(
            Err("join says no".to_string()),
            Err("Invite expired".to_string()),
        );
        let err = redeem(&mock, "abc123").await.unwrap_err();
        assert_eq!(err.user_message(DEFAULT_FAILURE), "Invite expired");
        assert_eq!(mock.calls(), vec!["join", "accept"]);
    }

    fn authenticated_session() -> SessionState {
        SessionState {
            user: Some(User {
                id: "u1".to_string(),
                email: "u@plast.org".to_string(),
                name: "U".to_string(),
                picture: None,
                role: Role::Scout,
                group_id: None,
                kurin: None,
                sex: None,
            }),
            token: None,
            loading: false,
            ready: true,
        }
    }

    fn anonymous_session() -> SessionState {
        SessionState {
            loading: false,
            ready: true,
            ..SessionState::default()
        }
    }

    #[tokio::test]
    async fn unauthenticated_visit_defers_without_attempting() {
        let mock = MockRedeemer::new(join_ok("Eagles"), Err("unused".to_string()));
        let result = redeem_or_defer(&mock, &anonymous_session(), "abc123").await;

        // No redemption attempt, token parked for after login.
        assert!(result.is_none());
        assert!(mock.calls().is_empty());
        assert_eq!(take_pending(), Some("abc123".to_string()));
    }

    #[tokio::test]
    async fn authenticated_visit_redeems_in_place() {
        let mock = MockRedeemer::new(join_ok("Eagles"), Err("unused".to_string()));
        let result = redeem_or_defer(&mock, &authenticated_session(), "abc123").await;

        let outcome = result.unwrap().unwrap();
        assert_eq!(outcome.success_message(), "Successfully joined Eagles!");
        assert_eq!(mock.calls(), vec!["join"]);
        // Nothing was parked on the in-place path.
        assert_eq!(take_pending(), None);
    }

    #[test]
    fn success_message_preference_order() {
        let both = RedeemOutcome {
            message: Some("msg".to_string()),
            group_name: Some("Eagles".to_string()),
            kurin_name: Some("Hawks".to_string()),
        };
        assert_eq!(both.success_message(), "Successfully joined Eagles!");

        let kurin_only = RedeemOutcome {
            message: Some("msg".to_string()),
            group_name: None,
            kurin_name: Some("Hawks".to_string()),
        };
        assert_eq!(kurin_only.success_message(), "Successfully joined Hawks!");

        let message_only = RedeemOutcome {
            message: Some("Welcome aboard".to_string()),
            ..RedeemOutcome::default()
        };
        assert_eq!(message_only.success_message(), "Welcome aboard");

        assert_eq!(RedeemOutcome::default().success_message(), DEFAULT_SUCCESS);
    }
}
