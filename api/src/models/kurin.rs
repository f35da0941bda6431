use serde::Deserialize;

/// Liaison summary embedded in kurin payloads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KurinLiaison {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kurin {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub liaison_id: Option<String>,
    #[serde(default)]
    pub liaison: Option<KurinLiaison>,
    #[serde(default)]
    pub foreman_count: Option<u32>,
    #[serde(default)]
    pub group_count: Option<u32>,
    #[serde(default)]
    pub scout_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KurinForeman {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub group_count: u32,
    #[serde(default)]
    pub scout_count: u32,
    #[serde(default)]
    pub average_progress: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KurinDetails {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub liaison_id: Option<String>,
    #[serde(default)]
    pub liaison: Option<KurinLiaison>,
    #[serde(default)]
    pub foreman_count: u32,
    #[serde(default)]
    pub group_count: u32,
    #[serde(default)]
    pub scout_count: u32,
    #[serde(default)]
    pub foremen: Vec<KurinForeman>,
}
