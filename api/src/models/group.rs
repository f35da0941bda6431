use serde::Deserialize;

/// A scout as listed inside a group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutInGroup {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub completed_probas_count: u32,
    #[serde(default)]
    pub total_probas_count: u32,
    #[serde(default)]
    pub completed_items: Option<u32>,
    #[serde(default)]
    pub total_items: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub foreman_id: Option<String>,
    #[serde(default)]
    pub scouts: Vec<ScoutInGroup>,
    #[serde(default)]
    pub scout_count: Option<u32>,
    #[serde(default)]
    pub average_progress: Option<f64>,
}

/// Foreman summary embedded in a group detail payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupForeman {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetails {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub foreman_id: Option<String>,
    #[serde(default)]
    pub foreman: Option<GroupForeman>,
    #[serde(default)]
    pub scout_count: u32,
    #[serde(default)]
    pub average_progress: Option<f64>,
    #[serde(default)]
    pub scouts: Vec<ScoutInGroup>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteLinkResponse {
    pub invite_token: String,
}
