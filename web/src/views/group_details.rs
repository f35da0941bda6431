use api::models::GroupDetails;
use dioxus::prelude::*;

use ui::toast::{push_toast, use_toasts, ToastLevel};
use ui::{use_api_client, EmptyState, ErrorMessage, Icon, LoadingSpinner, MainLayout};

use crate::Route;

#[component]
pub fn AdminGroupDetails(kurin_id: String, foreman_id: String, group_id: String) -> Element {
    let nav = use_navigator();
    let kurin = kurin_id.clone();
    let foreman = foreman_id.clone();
    let group = group_id.clone();
    let on_open_scout = use_callback(move |scout_id: String| {
        nav.push(Route::AdminScoutProgress {
            kurin_id: kurin.clone(),
            foreman_id: foreman.clone(),
            group_id: group.clone(),
            scout_id,
        });
    });

    rsx! {
        GroupDetailsView { group_id, on_open_scout }
    }
}

#[component]
pub fn LiaisonGroupDetails(kurin_id: String, foreman_id: String, group_id: String) -> Element {
    let nav = use_navigator();
    let kurin = kurin_id.clone();
    let foreman = foreman_id.clone();
    let group = group_id.clone();
    let on_open_scout = use_callback(move |scout_id: String| {
        nav.push(Route::LiaisonScoutProgress {
            kurin_id: kurin.clone(),
            foreman_id: foreman.clone(),
            group_id: group.clone(),
            scout_id,
        });
    });

    rsx! {
        GroupDetailsView { group_id, on_open_scout }
    }
}

#[component]
fn GroupDetailsView(group_id: String, on_open_scout: Callback<String>) -> Element {
    let mut id_signal = use_signal(|| group_id.clone());
    if *id_signal.peek() != group_id {
        id_signal.set(group_id.clone());
    }

    let client = use_api_client();
    let mut toasts = use_toasts();
    let mut details = use_signal(|| Option::<GroupDetails>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);

    let _loader = use_resource(move || {
        let id = id_signal();
        let _tick = reload();
        let client = client.clone();
        async move {
            loading.set(true);
            error.set(None);
            match api::groups::get_group_details(&client, &id).await {
                Ok(fetched) => details.set(Some(fetched)),
                Err(err) => error.set(Some(err.user_message("Failed to load group"))),
            }
            loading.set(false);
        }
    });

    let remove_client = use_api_client();
    let on_remove = use_callback(move |user_id: String| {
        let client = remove_client.clone();
        let group_id = id_signal.peek().clone();
        spawn(async move {
            match api::groups::remove_member(&client, &group_id, &user_id).await {
                Ok(resp) => {
                    let message = resp.message.unwrap_or_else(|| "Member removed".to_string());
                    push_toast(&mut toasts, ToastLevel::Success, &message);
                    let next = reload.peek().wrapping_add(1);
                    reload.set(next);
                }
                Err(err) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &err.user_message("Failed to remove member"),
                    );
                }
            }
        });
    });

    rsx! {
        MainLayout {
            div { class: "page",
                if loading() {
                    LoadingSpinner { message: "Loading group..." }
                } else if let Some(message) = error() {
                    ErrorMessage { message }
                } else if let Some(group) = details() {
                    div { class: "page-header",
                        h1 { class: "page-title", "{group.name}" }
                        if let Some(foreman) = &group.foreman {
                            span { class: "card-subtitle", "Виховник: {foreman.name}" }
                        }
                    }
                    div { class: "stat-row",
                        div { class: "stat-card",
                            span { class: "stat-value", "{group.scout_count}" }
                            span { class: "stat-label", "Scouts" }
                        }
                        if let Some(avg) = group.average_progress {
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

                    h2 { class: "section-title", "Пластуни" }
                    if group.scouts.is_empty() {
                        EmptyState { title: "This group has no scouts yet" }
                    } else {
                        ul { class: "member-list",
                            for scout in group.scouts.iter().cloned() {
                                li { key: "{scout.id}", class: "member-row",
                                    button {
                                        class: "member-link",
                                        onclick: {
                                            let id = scout.id.clone();
                                            move |_| on_open_scout.call(id.clone())
                                        },
                                        "{scout.name}"
                                    }
                                    span { class: "member-progress",
                                        "{scout.completed_probas_count}/{scout.total_probas_count}"
                                    }
                                    button {
                                        class: "btn btn-icon btn-danger",
                                        aria_label: "Remove member",
                                        onclick: {
                                            let id = scout.id.clone();
                                            move |_| on_remove.call(id.clone())
                                        },
                                        Icon { icon: ui::icons::FaTrash, width: 14, height: 14 }
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
