use api::models::Role;
use api::users::UpdateUserRequest;
use dioxus::prelude::*;

use ui::session::refresh_identity;
use ui::toast::{push_toast, use_toasts, ToastLevel};
use ui::{use_api_client, use_session, EmptyState, MainLayout, ModalOverlay};

use super::proba_board::ProbaBoard;

/// The signed-in scout's (or foreman's) own checklist, read-only. First
/// visit asks for the member's sex, which some proba items depend on. A
/// scout not yet in a group gets an empty state and no checklist fetch.
#[component]
pub fn MyProgress() -> Element {
    let session = use_session();

    let Some(user) = session().user else {
        return rsx! {};
    };
    let needs_onboarding = user.sex.is_none();
    let groupless_scout = user.role == Role::Scout && user.group_id.is_none();

    rsx! {
        MainLayout {
            div { class: "page",
                h1 { class: "page-title", "Мій Прогрес" }
                if needs_onboarding {
                    OnboardingModal { email: user.email.clone() }
                }
                if groupless_scout {
                    EmptyState {
                        title: "You're not in a group yet",
                        hint: "Ask your foreman for an invite link to join a group.",
                    }
                } else {
                    ProbaBoard { user_id: user.id.clone(), can_sign: false }
                }
            }
        }
    }
}

#[component]
fn OnboardingModal(email: String) -> Element {
    let session = use_session();
    let client = use_api_client();
    let mut toasts = use_toasts();
    let mut saving = use_signal(|| false);

    let on_pick = use_callback(move |sex: &'static str| {
        if *saving.peek() {
            return;
        }
        saving.set(true);
        let client = client.clone();
        let email = email.clone();
        let mut session = session;
        spawn(async move {
            let req = UpdateUserRequest {
                sex: Some(sex.to_string()),
                name: None,
            };
            match api::users::update_user(&client, &email, &req).await {
                Ok(()) => {
                    refresh_identity(&client, &mut session).await;
                }
                Err(err) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &err.user_message("Failed to save profile"),
                    );
                    saving.set(false);
                }
            }
        });
    });

    rsx! {
        ModalOverlay { on_close: move |_| {},
            div { class: "modal-header",
                h2 { "Майже готово!" }
            }
            div { class: "modal-body",
                p { "Обери стать, щоб ми показали правильні проби." }
                div { class: "onboarding-choices",
                    button {
                        class: "btn btn-primary",
                        disabled: saving(),
                        onclick: move |_| on_pick.call("male"),
                        "Хлопець"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: saving(),
                        onclick: move |_| on_pick.call("female"),
                        "Дівчина"
                    }
                }
            }
        }
    }
}
