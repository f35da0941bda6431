use serde::Deserialize;

/// Who signed off a proba item or wrote a note.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Signer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbaNote {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<Signer>,
}

/// A single checklist item, flattened from the backend's nested progress rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbaItem {
    pub id: String,
    pub progress_id: String,
    pub text: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub completed_by: Option<Signer>,
    #[serde(default)]
    pub notes: Vec<ProbaNote>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProbaSection {
    pub id: String,
    pub name: String,
    pub items: Vec<ProbaItem>,
}

/// One achievement checklist (e.g. the First Proba) with its sections.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Proba {
    pub id: String,
    pub name: String,
    pub sections: Vec<ProbaSection>,
}

impl Proba {
    /// (completed, total) across all sections.
    pub fn progress(&self) -> (usize, usize) {
        let mut done = 0;
        let mut total = 0;
        for section in &self.sections {
            total += section.items.len();
            done += section.items.iter().filter(|i| i.is_completed).count();
        }
        (done, total)
    }
}
