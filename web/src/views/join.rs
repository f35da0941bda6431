use dioxus::prelude::*;

use ui::invite::{self, DEFAULT_FAILURE};
use ui::session::refresh_identity;
use ui::toast::{push_toast, use_toasts, ToastLevel};
use ui::{use_api_client, use_session, ErrorMessage, LoadingSpinner};

use crate::Route;

#[derive(Clone, PartialEq)]
enum JoinState {
    Working,
    Failed(String),
}

/// Invite landing page.
///
/// Authenticated visitors redeem the token in place. Unauthenticated ones
/// get the token parked in storage and are sent to login; the session
/// provider redeems it after the next sign-in.
#[component]
pub fn Join(invite_token: String) -> Element {
    // Mirror the route param in a signal so the resource re-runs when the
    // token in the URL changes.
    let mut token_signal = use_signal(|| invite_token.clone());
    if *token_signal.peek() != invite_token {
        token_signal.set(invite_token.clone());
    }

    let session = use_session();
    let client = use_api_client();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut state = use_signal(|| JoinState::Working);

    let _redeemer = use_resource(move || {
        let token = token_signal();
        let client = client.clone();
        let mut session = session;
        async move {
            if token.trim().is_empty() {
                state.set(JoinState::Failed("Invalid invite link".to_string()));
                return;
            }

            let current = session.peek().clone();
            match invite::redeem_or_defer(&client, &current, &token).await {
                None => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Info,
                        "Sign in to accept the invitation",
                    );
                    nav.replace(Route::Login {});
                }
                Some(Ok(outcome)) => {
                    push_toast(&mut toasts, ToastLevel::Success, &outcome.success_message());
                    refresh_identity(&client, &mut session).await;
                    nav.replace(Route::Dashboard {});
                }
                Some(Err(err)) => {
                    state.set(JoinState::Failed(err.user_message(DEFAULT_FAILURE)));
                }
            }
        }
    });

    match state() {
        JoinState::Working => rsx! {
            LoadingSpinner { full_screen: true, message: "Accepting invitation..." }
        },
        JoinState::Failed(message) => rsx! {
            div { class: "auth-page",
                div { class: "auth-card",
                    h1 { class: "auth-title", "Invitation" }
                    ErrorMessage { message }
                    Link { class: "btn btn-primary", to: Route::Dashboard {}, "Go to Dashboard" }
                }
            }
        },
    }
}
