use api::models::{InviteType, KurinDetails};
use dioxus::prelude::*;

use ui::browser::current_origin;
use ui::toast::{push_toast, use_toasts, ToastLevel};
use ui::{
    use_api_client, use_session, EmptyState, ErrorMessage, Icon, InviteLinkModal, LoadingSpinner,
    MainLayout,
};

use crate::Route;

/// The liaison's own kurin: headline stats, the foremen roster and the
/// foreman invite link.
#[component]
pub fn MyKurin() -> Element {
    let session = use_session();
    let client = use_api_client();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut details = use_signal(|| Option::<KurinDetails>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut invite_link = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let kurin = session().user.and_then(|u| u.kurin);
        let client = client.clone();
        async move {
            let Some(kurin) = kurin else {
                loading.set(false);
                return;
            };
            loading.set(true);
            match api::kurins::get_kurin_details(&client, &kurin.id).await {
                Ok(fetched) => details.set(Some(fetched)),
                Err(err) => error.set(Some(err.user_message("Failed to load kurin"))),
            }
            loading.set(false);
        }
    });

    let invite_client = use_api_client();
    let on_invite_foreman = use_callback(move |_: ()| {
        let Some(kurin) = session.peek().user.clone().and_then(|u| u.kurin) else {
            return;
        };
        let client = invite_client.clone();
        spawn(async move {
            match api::invites::generate_invite(&client, InviteType::Foreman, &kurin.id).await {
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

    let has_kurin = session().user.and_then(|u| u.kurin).is_some();

    rsx! {
        MainLayout {
            div { class: "page",
                div { class: "page-header",
                    h1 { class: "page-title", "Мій Курінь" }
                    if has_kurin {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_invite_foreman.call(()),
                            Icon { icon: ui::icons::FaUserPlus, width: 14, height: 14 }
                            "Invite foreman"
                        }
                    }
                }

                if !has_kurin {
                    EmptyState {
                        title: "No kurin assigned",
                        hint: "Ask an administrator to assign you to a kurin.",
                    }
                } else if loading() {
                    LoadingSpinner { message: "Loading kurin..." }
                } else if let Some(message) = error() {
                    ErrorMessage { message }
                } else if let Some(kurin) = details() {
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
                        EmptyState {
                            title: "No foremen yet",
                            hint: "Share the invite link to bring foremen into the kurin.",
                        }
                    } else {
                        div { class: "card-grid",
                            for foreman in kurin.foremen.iter().cloned() {
                                div {
                                    key: "{foreman.id}",
                                    class: "card card-clickable",
                                    onclick: {
                                        let id = foreman.id.clone();
                                        move |_| {
                                            nav.push(Route::ForemanDetail { foreman_id: id.clone() });
                                        }
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

/// Alias kept for bookmarked liaison dashboards; redirects so the canonical
/// URL lands in the address bar.
#[component]
pub fn LiaisonDashboard() -> Element {
    let nav = use_navigator();
    nav.replace(Route::MyKurin {});
    rsx! {}
}
