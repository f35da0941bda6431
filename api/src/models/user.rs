use serde::{Deserialize, Serialize};

/// Closed role enumeration. Authorization is exact-match against these
/// variants, never hierarchical.
///
/// `Unknown` absorbs role strings this client has never heard of so a newer
/// backend cannot crash deserialization; an unknown role is treated as having
/// no landing page and no allow-list membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Scout,
    Foreman,
    Liaison,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Scout => "Scout",
            Role::Foreman => "Foreman",
            Role::Liaison => "Liaison",
            Role::Admin => "Admin",
            Role::Unknown => "Unknown",
        }
    }
}

/// The kurin a user belongs to, as embedded in the identity payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KurinRef {
    pub id: String,
    pub name: String,
}

/// Identity snapshot returned by `GET /users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub kurin: Option<KurinRef>,
    #[serde(default)]
    pub sex: Option<String>,
}

/// Foreman row in admin/liaison listings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForemanWithStats {
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

/// Foreman detail view including their groups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForemanDetails {
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
    #[serde(default)]
    pub groups: Vec<super::Group>,
}

/// Liaison row in admin listings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiaisonWithStats {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub foreman_count: u32,
    #[serde(default)]
    pub total_scouts: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_identity() {
        let json = r#"{
            "id": "u1",
            "email": "scout@plast.org",
            "name": "Orysia",
            "role": "SCOUT",
            "groupId": "g1",
            "kurin": {"id": "k1", "name": "Hawks"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Scout);
        assert_eq!(user.group_id.as_deref(), Some("g1"));
        assert_eq!(user.kurin.unwrap().name, "Hawks");
        assert!(user.sex.is_none());
    }

    #[test]
    fn unknown_role_does_not_fail() {
        let json = r#"{"id":"u2","email":"x@y.z","name":"X","role":"SUPERVISOR"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Unknown);
    }
}
