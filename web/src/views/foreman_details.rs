use api::models::ForemanDetails;
use dioxus::prelude::*;

use ui::{use_api_client, use_session, EmptyState, ErrorMessage, LoadingSpinner, MainLayout};

use crate::Route;

/// Foreman page reached from the liaison's kurin overview. A liaison can
/// drill into the foreman's groups inside their own kurin; an admin landing
/// here without a kurin in the path sees the list without links.
#[component]
pub fn ForemanDetail(foreman_id: String) -> Element {
    let session = use_session();
    let nav = use_navigator();

    let own_kurin = session().user.and_then(|u| u.kurin).map(|k| k.id);
    let on_open_group = own_kurin.map(|kurin_id| {
        let foreman = foreman_id.clone();
        Callback::new(move |group_id: String| {
            nav.push(Route::LiaisonGroupDetails {
                kurin_id: kurin_id.clone(),
                foreman_id: foreman.clone(),
                group_id,
            });
        })
    });

    rsx! {
        ForemanDetailsView { foreman_id, on_open_group }
    }
}

#[component]
pub fn AdminForemanDetails(kurin_id: String, foreman_id: String) -> Element {
    let nav = use_navigator();
    let kurin = kurin_id.clone();
    let foreman = foreman_id.clone();
    let on_open_group = use_callback(move |group_id: String| {
        nav.push(Route::AdminGroupDetails {
            kurin_id: kurin.clone(),
            foreman_id: foreman.clone(),
            group_id,
        });
    });

    rsx! {
        ForemanDetailsView { foreman_id, on_open_group: Some(on_open_group) }
    }
}

#[component]
pub fn LiaisonForemanDetails(kurin_id: String, foreman_id: String) -> Element {
    let nav = use_navigator();
    let kurin = kurin_id.clone();
    let foreman = foreman_id.clone();
    let on_open_group = use_callback(move |group_id: String| {
        nav.push(Route::LiaisonGroupDetails {
            kurin_id: kurin.clone(),
            foreman_id: foreman.clone(),
            group_id,
        });
    });

    rsx! {
        ForemanDetailsView { foreman_id, on_open_group: Some(on_open_group) }
    }
}

#[component]
fn ForemanDetailsView(
    foreman_id: String,
    on_open_group: Option<Callback<String>>,
) -> Element {
    let mut id_signal = use_signal(|| foreman_id.clone());
    if *id_signal.peek() != foreman_id {
        id_signal.set(foreman_id.clone());
    }

    let client = use_api_client();
    let mut details = use_signal(|| Option::<ForemanDetails>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let id = id_signal();
        let client = client.clone();
        async move {
            loading.set(true);
            error.set(None);
            match api::users::get_foreman_details(&client, &id).await {
                Ok(fetched) => details.set(Some(fetched)),
                Err(err) => error.set(Some(err.user_message("Failed to load foreman"))),
            }
            loading.set(false);
        }
    });

    rsx! {
        MainLayout {
            div { class: "page",
                if loading() {
                    LoadingSpinner { message: "Loading foreman..." }
                } else if let Some(message) = error() {
                    ErrorMessage { message }
                } else if let Some(foreman) = details() {
                    div { class: "page-header",
                        h1 { class: "page-title", "{foreman.name}" }
                        span { class: "card-subtitle", "{foreman.email}" }
                    }
                    div { class: "stat-row",
                        div { class: "stat-card",
                            span { class: "stat-value", "{foreman.group_count}" }
                            span { class: "stat-label", "Groups" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{foreman.scout_count}" }
                            span { class: "stat-label", "Scouts" }
                        }
                        if let Some(avg) = foreman.average_progress {
                            {
                                let percent = avg.round().clamp(0.0, 100.0) as u32;
                                rsx! {
                                    div { class: "stat-card",
                                        span { class: "stat-value", "{percent}%" }
                                        span { class: "stat-label", "Avg. progress" }
                                    }
                                }
                            }
                        }
                    }

                    h2 { class: "section-title", "Гуртки" }
                    if foreman.groups.is_empty() {
                        EmptyState { title: "This foreman has no groups yet" }
                    } else {
                        div { class: "card-grid",
                            for group in foreman.groups.iter().cloned() {
                                {
                                    let scout_count = group
                                        .scout_count
                                        .map(|c| c as usize)
                                        .unwrap_or(group.scouts.len());
                                    let clickable = on_open_group.is_some();
                                    rsx! {
                                        div {
                                            key: "{group.id}",
                                            class: if clickable { "card card-clickable" } else { "card" },
                                            onclick: {
                                                let id = group.id.clone();
                                                move |_| {
                                                    if let Some(open) = on_open_group {
                                                        open.call(id.clone());
                                                    }
                                                }
                                            },
                                            h3 { class: "card-title", "{group.name}" }
                                            span { class: "card-stat", "{scout_count} scouts" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
