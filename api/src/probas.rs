//! Proba (achievement checklist) endpoints and payload normalization.
//!
//! The backend returns per-user proba progress as a nested object keyed by
//! proba tier, each tier an object of section name → progress rows:
//!
//! ```json
//! {
//!   "zeroProba":  { "Знання": [ { "progress_id": "...", "proba_item": {...}, ... } ] },
//!   "firstProba": { ... },
//!   "secondProba": { ... }
//! }
//! ```
//!
//! The UI wants a flat `Vec<Proba>` of sections and items, so everything is
//! normalized here at the API boundary. Some deployments already return the
//! normalized array; that shape is passed through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Proba, ProbaItem, ProbaNote, ProbaSection, Signer};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignProbaItemRequest {
    pub user_id: String,
    pub item_id: String,
    pub foreman_id: String,
    pub status: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProbaNoteRequest {
    pub progress_id: String,
    pub content: String,
}

/// Fetch and normalize all probas for a user.
pub async fn get_user_probas(client: &ApiClient, user_id: &str) -> Result<Vec<Proba>, ApiError> {
    let raw: Value = client.get_json(&format!("/probas/{user_id}")).await?;
    Ok(normalize_probas(raw))
}

/// Mark or unmark a proba item; `foreman_id` is the signer.
pub async fn sign_proba_item(
    client: &ApiClient,
    req: &SignProbaItemRequest,
) -> Result<(), ApiError> {
    let _: Value = client.post_json("/probas/sign", req).await?;
    Ok(())
}

/// Create or update the foreman's note on one progress row.
pub async fn upsert_proba_note(
    client: &ApiClient,
    req: &UpsertProbaNoteRequest,
) -> Result<(), ApiError> {
    let _: Value = client.post_json("/probas/notes", req).await?;
    Ok(())
}

// -- normalization -----------------------------------------------------------

/// One progress row as the nested shape delivers it.
#[derive(Debug, Deserialize)]
struct RawProgressRow {
    progress_id: String,
    #[serde(default)]
    proba_item: Option<RawProbaItem>,
    #[serde(default)]
    is_completed: bool,
    #[serde(default)]
    completed_at: Option<String>,
    #[serde(default)]
    signed_by: Option<Signer>,
    #[serde(default)]
    notes: Vec<ProbaNote>,
}

#[derive(Debug, Deserialize)]
struct RawProbaItem {
    id: String,
    #[serde(default)]
    text: Option<String>,
}

fn normalize_probas(raw: Value) -> Vec<Proba> {
    // Already-normalized array: pass through.
    if raw.is_array() {
        return serde_json::from_value(raw).unwrap_or_default();
    }

    let Value::Object(map) = raw else {
        return Vec::new();
    };

    let tiers = [
        ("zeroProba", "Прихильник (Zero Proba)", "zero-proba"),
        ("firstProba", "Перша Проба (First Proba)", "first-proba"),
        ("secondProba", "Друга Проба (Second Proba)", "second-proba"),
    ];

    let mut probas = Vec::new();
    for (key, name, id) in tiers {
        let Some(Value::Object(sections)) = map.get(key) else {
            continue;
        };
        if sections.is_empty() {
            continue;
        }
        probas.push(Proba {
            id: id.to_string(),
            name: name.to_string(),
            sections: normalize_sections(sections, id),
        });
    }
    probas
}

fn normalize_sections(sections: &serde_json::Map<String, Value>, proba_id: &str) -> Vec<ProbaSection> {
    sections
        .iter()
        .map(|(section_name, rows)| {
            let items = rows
                .as_array()
                .map(|rows| {
                    rows.iter()
                        .filter(|r| !r.is_null())
                        .filter_map(|r| {
                            serde_json::from_value::<RawProgressRow>(r.clone()).ok()
                        })
                        .map(normalize_item)
                        .collect()
                })
                .unwrap_or_default();
            ProbaSection {
                id: format!("{proba_id}-{}", slugify(section_name)),
                name: section_name.clone(),
                items,
            }
        })
        .collect()
}

fn normalize_item(row: RawProgressRow) -> ProbaItem {
    let (id, text) = match row.proba_item {
        // Items missing a definition keep the (always present) progress id.
        Some(item) => (item.id, item.text.unwrap_or_else(|| "No description".to_string())),
        None => (row.progress_id.clone(), "No description".to_string()),
    };
    ProbaItem {
        id,
        progress_id: row.progress_id,
        text,
        is_completed: row.is_completed,
        completed_at: row.completed_at,
        completed_by: row.signed_by,
        notes: row.notes,
    }
}

fn slugify(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_nested_shape() {
        let raw = json!({
            "zeroProba": {
                "First Steps": [
                    {
                        "progress_id": "p1",
                        "proba_item": { "id": "i1", "text": "Tie a knot" },
                        "is_completed": true,
                        "completed_at": "2026-01-10",
                        "signed_by": { "id": "f1", "name": "Taras", "email": "t@plast.org" }
                    },
                    null,
                    {
                        "progress_id": "p2",
                        "proba_item": { "id": "i2", "text": "First aid" },
                        "is_completed": false
                    }
                ]
            },
            "firstProba": {},
            "secondProba": { "Scouting Craft": [] }
        });

        let probas = normalize_probas(raw);
        assert_eq!(probas.len(), 2);

        let zero = &probas[0];
        assert_eq!(zero.id, "zero-proba");
        assert_eq!(zero.sections.len(), 1);
        let section = &zero.sections[0];
        assert_eq!(section.id, "zero-proba-first-steps");
        assert_eq!(section.items.len(), 2);
        assert!(section.items[0].is_completed);
        assert_eq!(section.items[0].completed_by.as_ref().unwrap().name, "Taras");
        assert_eq!(zero.progress(), (1, 2));

        assert_eq!(probas[1].id, "second-proba");
    }

    #[test]
    fn item_without_definition_falls_back_to_progress_id() {
        let raw = json!({
            "firstProba": {
                "Misc": [ { "progress_id": "p9", "is_completed": false } ]
            }
        });
        let probas = normalize_probas(raw);
        let item = &probas[0].sections[0].items[0];
        assert_eq!(item.id, "p9");
        assert_eq!(item.text, "No description");
    }

    #[test]
    fn passes_through_already_normalized_array() {
        let raw = json!([
            {
                "id": "zero-proba",
                "name": "Zero",
                "sections": [
                    {
                        "id": "s1",
                        "name": "Basics",
                        "items": [
                            { "id": "i1", "progressId": "p1", "text": "x", "isCompleted": true }
                        ]
                    }
                ]
            }
        ]);
        let probas = normalize_probas(raw);
        assert_eq!(probas.len(), 1);
        assert_eq!(probas[0].progress(), (1, 1));
    }

    #[test]
    fn non_object_payload_yields_empty() {
        assert!(normalize_probas(json!("nope")).is_empty());
        assert!(normalize_probas(json!({})).is_empty());
    }
}
