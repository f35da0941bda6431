use api::models::{InviteType, KurinDetails};
use dioxus::prelude::*;

use ui::browser::current_origin;
use ui::toast::{push_toast, use_toasts, ToastLevel};
use ui::{
    use_api_client, EmptyState, ErrorMessage, Icon, InviteLinkModal, LoadingSpinner, MainLayout,
};

use crate::Route;

/// Kurin drill-down entered from the admin dashboard.
#[component]
pub fn AdminKurinDetails(kurin_id: String) -> Element {
    let nav = use_navigator();
    let id_for_links = kurin_id.clone();
    let on_open_foreman = use_callback(move |foreman_id: String| {
        nav.push(Route::AdminForemanDetails {
            kurin_id: id_for_links.clone(),
            foreman_id,
        });
    });

    rsx! {
        KurinDetailsView { kurin_id, on_open_foreman }
    }
}

/// The same drill-down scoped under the liaison's own tree.
#[component]
pub fn LiaisonKurinDetails(kurin_id: String) -> Element {
    let nav = use_navigator();
    let id_for_links = kurin_id.clone();
    let on_open_foreman = use_callback(move |foreman_id: String| {
        nav.push(Route::LiaisonForemanDetails {
            kurin_id: id_for_links.clone(),
            foreman_id,
        });
    });

    rsx! {
        KurinDetailsView { kurin_id, on_open_foreman }
    }
}

#[component]
fn KurinDetailsView(kurin_id: String, on_open_foreman: Callback<String>) -> Element {
    let mut id_signal = use_signal(|| kurin_id.clone());
    if *id_signal.peek() != kurin_id {
        id_signal.set(kurin_id.clone());
    }

    let client = use_api_client();
    let mut toasts = use_toasts();
    let mut details = use_signal(|| Option::<KurinDetails>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut invite_link = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let id = id_signal();
        let client = client.clone();
        async move {
            loading.set(true);
            error.set(None);
            match api::kurins::get_kurin_details(&client, &id).await {
                Ok(fetched) => details.set(Some(fetched)),
                Err(err) => error.set(Some(err.user_message("Failed to load kurin"))),
            }
            loading.set(false);
        }
    });

    let invite_client = use_api_client();
    let on_invite_foreman = use_callback(move |_: ()| {
        let client = invite_client.clone();
        let kurin_id = id_signal.peek().clone();
        spawn(async move {
            match api::invites::generate_invite(&client, InviteType::Foreman, &kurin_id).await {
                Ok(resp) => {
                    let link = resp
                        .invite_link
                        .unwrap_or_else(|| format!("{}/join/{}", current_origin(), resp.token));
                    invite_link.set(Some(link));
                }
                Err(err) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &err.user_message("Failed to generate invite"),
                    );
                }
            }
        });
    });

    rsx! {
        MainLayout {
            div { class: "page",
                if loading() {
                    LoadingSpinner { message: "Loading kurin..." }
                } else if let Some(message) = error() {
                    ErrorMessage { message }
                } else if let Some(kurin) = details() {
                    div { class: "page-header",
                        h1 { class: "page-title", "{kurin.name}" }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_invite_foreman.call(()),
                            Icon { icon: ui::icons::FaUserPlus, width: 14, height: 14 }
                            "Invite foreman"
                        }
                    }
                    if let Some(liaison) = &kurin.liaison {
                        p { class: "card-subtitle", "Зв'язковий: {liaison.name}" }
                    }
                    div { class: "stat-row",
                        div { class: "stat-card",
                            span { class: "stat-value", "{kurin.foreman_count}" }
                            span { class: "stat-label", "Foremen" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{kurin.group_count}" }
                            span { class: "stat-label", "Groups" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{kurin.scout_count}" }
                            span { class: "stat-label", "Scouts" }
                        }
                    }

                    h2 { class: "section-title", "Виховники" }
                    if kurin.foremen.is_empty() {
                        EmptyState { title: "No foremen in this kurin" }
                    } else {
                        div { class: "card-grid",
                            for foreman in kurin.foremen.iter().cloned() {
                                div {
                                    key: "{foreman.id}",
                                    class: "card card-clickable",
                                    onclick: {
                                        let id = foreman.id.clone();
                                        move |_| on_open_foreman.call(id.clone())
                                    },
                                    h3 { class: "card-title", "{foreman.name}" }
                                    p { class: "card-subtitle", "{foreman.email}" }
                                    span { class: "card-stat",
                                        "{foreman.group_count} groups, {foreman.scout_count} scouts"
                                    }
                                }
                            }
                        }
                    }
                }

                if let Some(link) = invite_link() {
                    InviteLinkModal {
                        invite_link: link,
                        title: "Invite a foreman",
                        description: "The link grants the foreman role in this kurin.",
                        on_close: move |_| invite_link.set(None),
                    }
                }
            }
        }
    }
}
