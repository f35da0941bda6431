//! Group endpoints.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Group, GroupDetails, InviteLinkResponse};

#[derive(Debug, Clone, Serialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

/// Groups visible to the caller; admins and liaisons can scope by foreman.
pub async fn get_my_groups(
    client: &ApiClient,
    foreman_id: Option<&str>,
) -> Result<Vec<Group>, ApiError> {
    match foreman_id {
        Some(id) => client.get_json(&format!("/groups?foremanId={id}")).await,
        None => client.get_json("/groups").await,
    }
}

pub async fn get_group(client: &ApiClient, id: &str) -> Result<Group, ApiError> {
    client.get_json(&format!("/groups/{id}")).await
}

pub async fn get_group_details(client: &ApiClient, id: &str) -> Result<GroupDetails, ApiError> {
    client.get_json(&format!("/groups/{id}/details")).await
}

pub async fn create_group(client: &ApiClient, name: &str) -> Result<Group, ApiError> {
    client
        .post_json(
            "/groups",
            &CreateGroupRequest {
                name: name.to_string(),
            },
        )
        .await
}

pub async fn rename_group(client: &ApiClient, id: &str, name: &str) -> Result<(), ApiError> {
    #[derive(Serialize)]
    struct Body<'a> {
        name: &'a str,
    }
    let _: serde_json::Value = client
        .patch_json(&format!("/groups/{id}"), &Body { name })
        .await?;
    Ok(())
}

/// A reusable join token for the group's standing invite link.
pub async fn get_invite_link(client: &ApiClient, id: &str) -> Result<InviteLinkResponse, ApiError> {
    client.get_json(&format!("/groups/{id}/invite-link")).await
}

#[derive(Debug, Deserialize)]
pub struct RemoveMemberResponse {
    #[serde(default)]
    pub message: Option<String>,
}

pub async fn remove_member(
    client: &ApiClient,
    group_id: &str,
    user_id: &str,
) -> Result<RemoveMemberResponse, ApiError> {
    client
        .delete_json(&format!("/groups/{group_id}/members/{user_id}"))
        .await
}
