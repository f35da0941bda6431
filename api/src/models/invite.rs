use serde::{Deserialize, Serialize};

/// What a generated invite grants when redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InviteType {
    Liaison,
    Foreman,
    Scout,
    CoForeman,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInviteRequest {
    #[serde(rename = "type")]
    pub invite_type: InviteType,
    pub context_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInviteResponse {
    pub token: String,
    #[serde(default)]
    pub invite_link: Option<String>,
    #[serde(rename = "type")]
    pub invite_type: InviteType,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Success payload of `POST /invites/accept/{token}`. Which of the optional
/// fields is present depends on what the invite granted.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInviteResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub kurin_id: Option<String>,
    #[serde(default)]
    pub kurin_name: Option<String>,
}

/// Success payload of `POST /invites/join/{token}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGroupResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
}
