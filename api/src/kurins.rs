//! Kurin (organizational unit) endpoints.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Kurin, KurinDetails, KurinForeman};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKurinRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liaison_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKurinRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liaison_id: Option<String>,
}

pub async fn get_kurins(client: &ApiClient) -> Result<Vec<Kurin>, ApiError> {
    client.get_json("/kurins").await
}

pub async fn get_kurin_details(client: &ApiClient, id: &str) -> Result<KurinDetails, ApiError> {
    client.get_json(&format!("/kurins/{id}")).await
}

pub async fn get_kurin_foremen(
    client: &ApiClient,
    id: &str,
) -> Result<Vec<KurinForeman>, ApiError> {
    client.get_json(&format!("/kurins/{id}/foremen")).await
}

pub async fn create_kurin(client: &ApiClient, req: &CreateKurinRequest) -> Result<Kurin, ApiError> {
    client.post_json("/kurins", req).await
}

pub async fn update_kurin(
    client: &ApiClient,
    id: &str,
    req: &UpdateKurinRequest,
) -> Result<Kurin, ApiError> {
    client.patch_json(&format!("/kurins/{id}"), req).await
}

pub async fn delete_kurin(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = client.delete_json(&format!("/kurins/{id}")).await?;
    Ok(())
}
