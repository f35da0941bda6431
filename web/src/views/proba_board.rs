use api::models::Proba;
use api::probas::{SignProbaItemRequest, UpsertProbaNoteRequest};
use dioxus::prelude::*;

use ui::toast::{push_toast, use_toasts, ToastLevel};
use ui::{use_api_client, use_session, EmptyState, ErrorMessage, LoadingSpinner};

/// Achievement checklist for one user, shared between the personal progress
/// page and the foreman/liaison/admin scout views. `can_sign` enables the
/// completion checkboxes and note editing; the current session user is
/// recorded as the signer.
#[component]
pub fn ProbaBoard(user_id: String, #[props(default = false)] can_sign: bool) -> Element {
    // Mirror the id in a signal so the resource re-runs when the route
    // param changes.
    let mut user_signal = use_signal(|| user_id.clone());
    if *user_signal.peek() != user_id {
        user_signal.set(user_id.clone());
    }

    let session = use_session();
    let client = use_api_client();
    let mut toasts = use_toasts();

    let mut probas = use_signal(Vec::<Proba>::new);
    let mut active_proba = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    // Progress row whose note editor is open, with the draft text.
    let mut note_draft = use_signal(|| Option::<(String, String)>::None);

    let _loader = use_resource(move || {
        let id = user_signal();
        let client = client.clone();
        async move {
            loading.set(true);
            error.set(None);
            match api::probas::get_user_probas(&client, &id).await {
                Ok(fetched) => {
                    if active_proba.peek().is_none() {
                        active_proba.set(fetched.first().map(|p| p.id.clone()));
                    }
                    probas.set(fetched);
                }
                Err(err) => error.set(Some(err.user_message("Failed to load probas"))),
            }
            loading.set(false);
        }
    });

    let sign_client = use_api_client();
    let on_toggle = use_callback(move |(item_id, currently_done): (String, bool)| {
        let Some(signer) = session.peek().user.clone() else {
            return;
        };
        let client = sign_client.clone();
        let user_id = user_signal.peek().clone();
        spawn(async move {
            let req = SignProbaItemRequest {
                user_id: user_id.clone(),
                item_id,
                foreman_id: signer.id,
                status: !currently_done,
            };
            match api::probas::sign_proba_item(&client, &req).await {
                Ok(()) => {
                    if let Ok(fetched) = api::probas::get_user_probas(&client, &user_id).await {
                        probas.set(fetched);
                    }
                }
                Err(err) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &err.user_message("Failed to update item"),
                    );
                }
            }
        });
    });

    let note_client = use_api_client();
    let on_save_note = use_callback(move |_: ()| {
        let Some((progress_id, content)) = note_draft.peek().clone() else {
            return;
        };
        if content.trim().is_empty() {
            return;
        }
        let client = note_client.clone();
        let user_id = user_signal.peek().clone();
        spawn(async move {
            let req = UpsertProbaNoteRequest {
                progress_id,
                content: content.trim().to_string(),
            };
            match api::probas::upsert_proba_note(&client, &req).await {
                Ok(()) => {
                    note_draft.set(None);
                    push_toast(&mut toasts, ToastLevel::Success, "Note saved");
                    if let Ok(fetched) = api::probas::get_user_probas(&client, &user_id).await {
                        probas.set(fetched);
                    }
                }
                Err(err) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &err.user_message("Failed to save note"),
                    );
                }
            }
        });
    });

    if loading() {
        return rsx! {
            LoadingSpinner { message: "Loading probas..." }
        };
    }
    if let Some(message) = error() {
        return rsx! {
            ErrorMessage { message }
        };
    }
    let all = probas();
    if all.is_empty() {
        return rsx! {
            EmptyState {
                title: "No probas yet",
                hint: "Proba checklists appear once they are assigned.",
            }
        };
    }

    let active_id = active_proba().unwrap_or_default();
    let active = all.iter().find(|p| p.id == active_id).or(all.first());

    rsx! {
        div { class: "proba-board",
            div { class: "proba-tabs",
                for proba in all.iter() {
                    {
                        let id = proba.id.clone();
                        let selected = active.map(|a| a.id == id).unwrap_or(false);
                        let (done, total) = proba.progress();
                        rsx! {
                            button {
                                key: "{id}",
                                class: if selected { "proba-tab proba-tab-active" } else { "proba-tab" },
                                onclick: move |_| active_proba.set(Some(id.clone())),
                                span { "{proba.name}" }
                                span { class: "proba-tab-count", "{done}/{total}" }
                            }
                        }
                    }
                }
            }

            if let Some(proba) = active {
                {
                    let (done, total) = proba.progress();
                    let percent = if total == 0 { 0 } else { done * 100 / total };
                    rsx! {
                        div { class: "progress-bar",
                            div { class: "progress-bar-fill", style: "width: {percent}%" }
                        }
                        for section in proba.sections.iter() {
                            div { key: "{section.id}", class: "proba-section",
                                h3 { class: "proba-section-name", "{section.name}" }
                                ul { class: "proba-items",
                                    for item in section.items.iter().cloned() {
                                        ProbaItemRow {
                                            key: "{item.progress_id}",
                                            item,
                                            can_sign,
                                            note_draft,
                                            on_toggle,
                                            on_save_note,
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

#[component]
fn ProbaItemRow(
    item: api::models::ProbaItem,
    can_sign: bool,
    note_draft: Signal<Option<(String, String)>>,
    on_toggle: Callback<(String, bool)>,
    on_save_note: Callback<()>,
) -> Element {
    let mut note_draft = note_draft;
    let progress_id = item.progress_id.clone();
    let editing = note_draft()
        .map(|(id, _)| id == progress_id)
        .unwrap_or(false);

    rsx! {
        li { class: "proba-item",
            label { class: "proba-item-row",
                input {
                    r#type: "checkbox",
                    checked: item.is_completed,
                    disabled: !can_sign,
                    onchange: {
                        let item_id = item.id.clone();
                        let done = item.is_completed;
                        move |_| on_toggle.call((item_id.clone(), done))
                    },
                }
                span {
                    class: if item.is_completed { "proba-item-text proba-item-done" } else { "proba-item-text" },
                    "{item.text}"
                }
            }
            if let Some(signer) = &item.completed_by {
                span { class: "proba-item-signer",
                    "Signed by {signer.name}"
                    if let Some(at) = &item.completed_at {
                        " on {at}"
                    }
                }
            }
            for note in item.notes.iter() {
                div { key: "{note.id}", class: "proba-note",
                    p { "{note.content}" }
                    if let Some(author) = &note.created_by {
                        span { class: "proba-note-author", "{author.name}" }
                    }
                }
            }
            if can_sign {
                if editing {
                    div { class: "note-editor",
                        textarea {
                            class: "input",
                            placeholder: "Note for this item...",
                            value: note_draft().map(|(_, c)| c).unwrap_or_default(),
                            oninput: {
                                let progress_id = progress_id.clone();
                                move |evt: Event<FormData>| {
                                    note_draft.set(Some((progress_id.clone(), evt.value())));
                                }
                            },
                        }
                        div { class: "note-editor-actions",
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| on_save_note.call(()),
                                "Save"
                            }
                            button {
                                class: "btn btn-ghost",
                                onclick: move |_| note_draft.set(None),
                                "Cancel"
                            }
                        }
                    }
                } else {
                    button {
                        class: "btn btn-link",
                        onclick: {
                            let progress_id = progress_id.clone();
                            move |_| note_draft.set(Some((progress_id.clone(), String::new())))
                        },
                        "Add note"
                    }
                }
            }
        }
    }
}
