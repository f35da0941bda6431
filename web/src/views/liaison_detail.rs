use api::models::LiaisonWithStats;
use dioxus::prelude::*;

use ui::{use_api_client, ErrorMessage, LoadingSpinner, MainLayout};

/// Admin view of a single liaison.
#[component]
pub fn LiaisonDetail(liaison_id: String) -> Element {
    let mut id_signal = use_signal(|| liaison_id.clone());
    if *id_signal.peek() != liaison_id {
        id_signal.set(liaison_id.clone());
    }

    let client = use_api_client();
    let mut details = use_signal(|| Option::<LiaisonWithStats>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let id = id_signal();
        let client = client.clone();
        async move {
            loading.set(true);
            error.set(None);
            match api::users::get_liaison_details(&client, &id).await {
                Ok(fetched) => details.set(Some(fetched)),
                Err(err) => error.set(Some(err.user_message("Failed to load liaison"))),
            }
            loading.set(false);
        }
    });

    rsx! {
        MainLayout {
            div { class: "page",
                if loading() {
                    LoadingSpinner { message: "Loading liaison..." }
                } else if let Some(message) = error() {
                    ErrorMessage { message }
                } else if let Some(liaison) = details() {
                    div { class: "page-header",
                        h1 { class: "page-title", "{liaison.name}" }
                        span { class: "card-subtitle", "{liaison.email}" }
                    }
                    div { class: "stat-row",
                        div { class: "stat-card",
                            span { class: "stat-value", "{liaison.foreman_count}" }
                            span { class: "stat-label", "Foremen" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{liaison.total_scouts}" }
                            span { class: "stat-label", "Scouts" }
                        }
                    }
                }
            }
        }
    }
}
