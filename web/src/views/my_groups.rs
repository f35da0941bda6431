use api::models::{Group, Role};
use dioxus::prelude::*;

use ui::browser::current_origin;
use ui::toast::{push_toast, use_toasts, ToastLevel};
use ui::{
    use_api_client, use_session, EmptyState, ErrorMessage, Icon, InviteLinkModal, LoadingSpinner,
    MainLayout, ModalOverlay,
};

use crate::Route;

/// Each foreman runs at most this many groups; enforced client-side before
/// the create call.
const MAX_GROUPS_PER_FOREMAN: usize = 2;

/// Groups the caller runs (foreman) or oversees (liaison). Foremen can
/// create groups, share join links and remove members.
#[component]
pub fn MyGroups() -> Element {
    let session = use_session();
    let client = use_api_client();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut groups = use_signal(Vec::<Group>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);

    let mut show_create = use_signal(|| false);
    let mut new_group_name = use_signal(String::new);
    // (link, group name) for the share modal.
    let mut invite_modal = use_signal(|| Option::<(String, String)>::None);

    let is_foreman = session().role() == Some(Role::Foreman);

    let _loader = use_resource(move || {
        let _tick = reload();
        let client = client.clone();
        async move {
            loading.set(true);
            error.set(None);
            match api::groups::get_my_groups(&client, None).await {
                Ok(fetched) => groups.set(fetched),
                Err(err) => error.set(Some(err.user_message("Failed to load groups"))),
            }
            loading.set(false);
        }
    });

    let create_client = use_api_client();
    let on_create = use_callback(move |_: ()| {
        let name = new_group_name.peek().trim().to_string();
        if name.is_empty() {
            return;
        }
        if groups.peek().len() >= MAX_GROUPS_PER_FOREMAN {
            push_toast(
                &mut toasts,
                ToastLevel::Error,
                "A foreman can run at most 2 groups",
            );
            return;
        }
        let client = create_client.clone();
        spawn(async move {
            match api::groups::create_group(&client, &name).await {
                Ok(group) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        &format!("Created group {}", group.name),
                    );
                    show_create.set(false);
                    new_group_name.set(String::new());
                    let next = reload.peek().wrapping_add(1);
                    reload.set(next);
                }
                Err(err) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &err.user_message("Failed to create group"),
                    );
                }
            }
        });
    });

    let link_client = use_api_client();
    let on_share = use_callback(move |(group_id, group_name): (String, String)| {
        let client = link_client.clone();
        spawn(async move {
            match api::groups::get_invite_link(&client, &group_id).await {
                Ok(resp) => {
                    let link = format!("{}/join/{}", current_origin(), resp.invite_token);
                    invite_modal.set(Some((link, group_name)));
                }
                Err(err) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &err.user_message("Failed to get invite link"),
                    );
                }
            }
        });
    });

    let remove_client = use_api_client();
    let on_remove = use_callback(move |(group_id, user_id): (String, String)| {
        let client = remove_client.clone();
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

    let on_open_scout = use_callback(move |scout_id: String| {
        nav.push(Route::ScoutProgress { scout_id });
    });

    rsx! {
        MainLayout {
            div { class: "page",
                div { class: "page-header",
                    h1 { class: "page-title", "Мої Гуртки" }
                    if is_foreman {
                        button {
                            class: "btn btn-primary",
                            disabled: groups().len() >= MAX_GROUPS_PER_FOREMAN,
                            onclick: move |_| show_create.set(true),
                            Icon { icon: ui::icons::FaPlus, width: 14, height: 14 }
                            "New Group"
                        }
                    }
                }

                if loading() {
                    LoadingSpinner { message: "Loading groups..." }
                } else if let Some(message) = error() {
                    ErrorMessage { message }
                } else if groups().is_empty() {
                    {
                        let hint = if is_foreman {
                            "Create a group and share its invite link with scouts."
                        } else {
                            "Groups appear once your foremen create them."
                        };
                        rsx! {
                            EmptyState { title: "No groups yet", hint: "{hint}" }
                        }
                    }
                } else {
                    div { class: "card-grid",
                        for group in groups().iter().cloned() {
                            GroupCard {
                                key: "{group.id}",
                                group,
                                can_manage: is_foreman,
                                on_share,
                                on_remove,
                                on_open_scout,
                            }
                        }
                    }
                }

                if show_create() {
                    ModalOverlay { on_close: move |_| show_create.set(false),
                        div { class: "modal-header",
                            h2 { "New Group" }
                        }
                        div { class: "modal-body",
                            input {
                                class: "input",
                                placeholder: "Назва гуртка",
                                value: new_group_name(),
                                oninput: move |evt| new_group_name.set(evt.value()),
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

                if let Some((link, name)) = invite_modal() {
                    InviteLinkModal {
                        invite_link: link,
                        title: "Invite scouts",
                        description: format!("Share this link to invite scouts into {name}."),
                        on_close: move |_| invite_modal.set(None),
                    }
                }
            }
        }
    }
}

#[component]
fn GroupCard(
    group: Group,
    can_manage: bool,
    on_share: Callback<(String, String)>,
    on_remove: Callback<(String, String)>,
    on_open_scout: Callback<String>,
) -> Element {
    let scout_count = group
        .scout_count
        .map(|c| c as usize)
        .unwrap_or(group.scouts.len());

    rsx! {
        div { class: "card group-card",
            div { class: "card-header",
                h2 { class: "card-title", "{group.name}" }
                span { class: "card-stat", "{scout_count} scouts" }
            }
            if let Some(avg) = group.average_progress {
                {
                    let percent = avg.round().clamp(0.0, 100.0) as u32;
                    rsx! {
                        div { class: "progress-bar",
                            div { class: "progress-bar-fill", style: "width: {percent}%" }
                        }
                    }
                }
            }
            if group.scouts.is_empty() {
                p { class: "card-hint", "This group has no scouts yet." }
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
                            if can_manage {
                                button {
                                    class: "btn btn-icon btn-danger",
                                    aria_label: "Remove member",
                                    onclick: {
                                        let group_id = group.id.clone();
                                        let user_id = scout.id.clone();
                                        move |_| on_remove.call((group_id.clone(), user_id.clone()))
                                    },
                                    Icon { icon: ui::icons::FaTrash, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
            }
            if can_manage {
                button {
                    class: "btn btn-ghost",
                    onclick: {
                        let id = group.id.clone();
                        let name = group.name.clone();
                        move |_| on_share.call((id.clone(), name.clone()))
                    },
                    Icon { icon: ui::icons::FaLink, width: 14, height: 14 }
                    "Invite link"
                }
            }
        }
    }
}
