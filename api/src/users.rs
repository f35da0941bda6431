//! User listing and profile endpoints (admin/liaison views, onboarding).

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ForemanDetails, ForemanWithStats, LiaisonWithStats};

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

pub async fn get_foreman_list(client: &ApiClient) -> Result<Vec<ForemanWithStats>, ApiError> {
    client.get_json("/users/foremen").await
}

pub async fn get_foreman_details(client: &ApiClient, id: &str) -> Result<ForemanDetails, ApiError> {
    client.get_json(&format!("/users/foremen/{id}")).await
}

pub async fn get_liaison_list(client: &ApiClient) -> Result<Vec<LiaisonWithStats>, ApiError> {
    client.get_json("/users/liaisons").await
}

pub async fn get_liaison_details(
    client: &ApiClient,
    id: &str,
) -> Result<LiaisonWithStats, ApiError> {
    client.get_json(&format!("/users/liaison/{id}")).await
}

/// Users are keyed by email for profile updates.
pub async fn update_user(
    client: &ApiClient,
    email: &str,
    req: &UpdateUserRequest,
) -> Result<(), ApiError> {
    let _: serde_json::Value = client.patch_json(&format!("/users/{email}"), req).await?;
    Ok(())
}
