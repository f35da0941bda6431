use api::kurins::CreateKurinRequest;
use api::models::{InviteType, Kurin, LiaisonWithStats};
use dioxus::prelude::*;

use ui::browser::current_origin;
use ui::toast::{push_toast, use_toasts, ToastLevel};
use ui::{
    use_api_client, EmptyState, ErrorMessage, Icon, InviteLinkModal, LoadingSpinner, MainLayout,
    ModalOverlay,
};

use crate::Route;

/// Top-level admin view: every kurin and every liaison in the organization.
#[component]
pub fn AdminDashboard() -> Element {
    let client = use_api_client();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut kurins = use_signal(Vec::<Kurin>::new);
    let mut liaisons = use_signal(Vec::<LiaisonWithStats>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);

    let mut show_create = use_signal(|| false);
    let mut new_kurin_name = use_signal(String::new);
    let mut invite_link = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let _tick = reload();
        let client = client.clone();
        async move {
            loading.set(true);
            error.set(None);
            // Kurins are the page's backbone; the liaison list is auxiliary
            // and its failure only logs.
            match api::kurins::get_kurins(&client).await {
                Ok(fetched) => kurins.set(fetched),
                Err(err) => error.set(Some(err.user_message("Failed to load kurins"))),
            }
            match api::users::get_liaison_list(&client).await {
                Ok(fetched) => liaisons.set(fetched),
                Err(err) => tracing::warn!(error = %err, "liaison list failed"),
            }
            loading.set(false);
        }
    });

    let create_client = use_api_client();
    let on_create = use_callback(move |_: ()| {
        let name = new_kurin_name.peek().trim().to_string();
        if name.is_empty() {
            return;
        }
        let client = create_client.clone();
        spawn(async move {
            let req = CreateKurinRequest {
                name: name.clone(),
                liaison_id: None,
            };
            match api::kurins::create_kurin(&client, &req).await {
                Ok(kurin) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        &format!("Created kurin {}", kurin.name),
                    );
                    show_create.set(false);
                    new_kurin_name.set(String::new());
                    let next = reload.peek().wrapping_add(1);
                    reload.set(next);
                }
                Err(err) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &err.user_message("Failed to create kurin"),
                    );
                }
            }
        });
    });

    let delete_client = use_api_client();
    let on_delete = use_callback(move |kurin_id: String| {
        let client = delete_client.clone();
        spawn(async move {
            match api::kurins::delete_kurin(&client, &kurin_id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Kurin deleted");
                    let next = reload.peek().wrapping_add(1);
                    reload.set(next);
                }
                Err(err) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &err.user_message("Failed to delete kurin"),
                    );
                }
            }
        });
    });

    let invite_client = use_api_client();
    let on_invite_liaison = use_callback(move |kurin_id: String| {
        let client = invite_client.clone();
        spawn(async move {
            match api::invites::generate_invite(&client, InviteType::Liaison, &kurin_id).await {
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
                div { class: "page-header",
                    h1 { class: "page-title", "Адмін Панель" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create.set(true),
                        Icon { icon: ui::icons::FaPlus, width: 14, height: 14 }
                        "New Kurin"
                    }
                }

                if loading() {
                    LoadingSpinner { message: "Loading organization..." }
                } else if let Some(message) = error() {
                    ErrorMessage { message }
                } else {
                    h2 { class: "section-title", "Курені" }
                    if kurins().is_empty() {
                        EmptyState {
                            title: "No kurins yet",
                            hint: "Create the first kurin to start the organization tree.",
                        }
                    } else {
                        div { class: "card-grid",
                            for kurin in kurins().iter().cloned() {
                                KurinCard {
                                    key: "{kurin.id}",
                                    kurin,
                                    on_delete,
                                    on_invite_liaison,
                                }
                            }
                        }
                    }

                    h2 { class: "section-title", "Зв'язкові" }
                    if liaisons().is_empty() {
                        EmptyState {
                            title: "No liaisons yet",
                            hint: "Invite a liaison from a kurin card above.",
                        }
                    } else {
                        ul { class: "member-list",
                            for liaison in liaisons().iter().cloned() {
                                li { key: "{liaison.id}", class: "member-row",
                                    button {
                                        class: "member-link",
                                        onclick: {
                                            let id = liaison.id.clone();
                                            move |_| {
                                                nav.push(Route::LiaisonDetail { liaison_id: id.clone() });
                                            }
                                        },
                                        "{liaison.name}"
                                    }
                                    span { class: "member-progress",
                                        "{liaison.foreman_count} foremen, {liaison.total_scouts} scouts"
                                    }
                                }
                            }
                        }
                    }
                }

                if show_create() {
                    ModalOverlay { on_close: move |_| show_create.set(false),
                        div { class: "modal-header",
                            h2 { "New Kurin" }
                        }
                        div { class: "modal-body",
                            input {
                                class: "input",
                                placeholder: "Назва куреня",
                                value: new_kurin_name(),
                                oninput: move |evt| new_kurin_name.set(evt.value()),
                            }
                            div { class: "modal-actions",
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| on_create.call(()),
                                    "Create"
                                }
                                button {
                                    class: "btn btn-ghost",
                                    onclick: move |_| show_create.set(false),
                                    "Cancel"
                                }
                            }
                        }
                    }
                }

                if let Some(link) = invite_link() {
                    InviteLinkModal {
                        invite_link: link,
                        title: "Invite a liaison",
                        description: "The link grants the liaison role for this kurin.",
                        on_close: move |_| invite_link.set(None),
                    }
                }
            }
        }
    }
}

#[component]
fn KurinCard(
    kurin: Kurin,
    on_delete: Callback<String>,
    on_invite_liaison: Callback<String>,
) -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                button {
                    class: "member-link card-title",
                    onclick: {
                        let id = kurin.id.clone();
                        move |_| {
                            nav.push(Route::AdminKurinDetails { kurin_id: id.clone() });
                        }
                    },
                    "{kurin.name}"
                }
                button {
                    class: "btn btn-icon btn-danger",
                    aria_label: "Delete kurin",
                    onclick: {
                        let id = kurin.id.clone();
                        move |_| on_delete.call(id.clone())
                    },
                    Icon { icon: ui::icons::FaTrash, width: 14, height: 14 }
                }
            }
            if let Some(liaison) = &kurin.liaison {
                p { class: "card-subtitle", "Зв'язковий: {liaison.name}" }
            } else {
                button {
                    class: "btn btn-ghost",
                    onclick: {
                        let id = kurin.id.clone();
                        move |_| on_invite_liaison.call(id.clone())
                    },
                    Icon { icon: ui::icons::FaUserPlus, width: 14, height: 14 }
                    "Invite liaison"
                }
            }
            div { class: "card-stats",
                if let Some(count) = kurin.foreman_count {
                    span { class: "card-stat", "{count} foremen" }
                }
                if let Some(count) = kurin.group_count {
                    span { class: "card-stat", "{count} groups" }
                }
                if let Some(count) = kurin.scout_count {
                    span { class: "card-stat", "{count} scouts" }
                }
            }
        }
    }
}
