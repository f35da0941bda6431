//! Invite generation and redemption endpoints.
//!
//! Redemption is deliberately split across two operations with different
//! server-side effects: `join` attaches the caller to an existing group,
//! `accept` grants a role-scoped invitation (foreman, liaison, co-foreman).
//! Which one a given token belongs to is not knowable client-side; the
//! reconciliation order lives in `ui::invite`, not here.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    AcceptInviteResponse, GenerateInviteRequest, GenerateInviteResponse, InviteType,
    JoinGroupResponse,
};

pub async fn generate_invite(
    client: &ApiClient,
    invite_type: InviteType,
    context_id: &str,
) -> Result<GenerateInviteResponse, ApiError> {
    client
        .post_json(
            "/invites/generate",
            &GenerateInviteRequest {
                invite_type,
                context_id: context_id.to_string(),
            },
        )
        .await
}

pub async fn join_group(client: &ApiClient, token: &str) -> Result<JoinGroupResponse, ApiError> {
    client.post_empty(&format!("/invites/join/{token}")).await
}

pub async fn accept_invite(
    client: &ApiClient,
    token: &str,
) -> Result<AcceptInviteResponse, ApiError> {
    client.post_empty(&format!("/invites/accept/{token}")).await
}
