use api::models::Role;
use dioxus::prelude::*;

use ui::{use_session, MainLayout};

use super::proba_board::ProbaBoard;

/// A scout's checklist as seen by their foreman (who can sign items) or by
/// a liaison/admin drilling down (read-only).
#[component]
pub fn ScoutProgress(scout_id: String) -> Element {
    rsx! {
        ScoutProgressView { scout_id }
    }
}

#[component]
pub fn AdminScoutProgress(
    kurin_id: String,
    foreman_id: String,
    group_id: String,
    scout_id: String,
) -> Element {
    rsx! {
        ScoutProgressView { scout_id }
    }
}

#[component]
pub fn LiaisonScoutProgress(
    kurin_id: String,
    foreman_id: String,
    group_id: String,
    scout_id: String,
) -> Element {
    rsx! {
        ScoutProgressView { scout_id }
    }
}

#[component]
fn ScoutProgressView(scout_id: String) -> Element {
    let session = use_session();
    // Only foremen countersign items; everyone else observes.
    let can_sign = session().role() == Some(Role::Foreman);

    rsx! {
        MainLayout {
            div { class: "page",
                h1 { class: "page-title", "Прогрес пластуна" }
                ProbaBoard { user_id: scout_id, can_sign }
            }
        }
    }
}
