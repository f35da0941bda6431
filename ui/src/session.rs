//! Session store and provider.
//!
//! The session is a process-wide signal provided via context. Exactly two
//! places write it: the identity fetch in [`SessionProvider`] and
//! [`clear_session`] (logout / session-invalidating error). Everything else
//! subscribes through [`use_session`].
//!
//! The `ready` flag is distinct from `loading` on purpose: `ready` flips to
//! true only after the fetched identity has been written into the store, so
//! anything that must observe the final session (the invite reconciliation
//! flow in particular) gates on `ready`, never on `!loading`. The two can
//! disagree for a tick between the fetch resolving and the store write.

use api::models::{Role, User};
use api::ApiClient;
use dioxus::prelude::*;

use crate::invite;
use crate::pending::take_pending;
use crate::toast::{push_toast, use_toasts, ToastLevel};

/// Authenticated principal for this client instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// Bearer token, if the backend ever hands one out. Cookie-based
    /// deployments leave this `None`.
    pub token: Option<String>,
    /// Identity fetch in flight.
    pub loading: bool,
    /// Identity fetch resolved *and* its result written here.
    pub ready: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
            ready: false,
        }
    }
}

impl SessionState {
    /// Holds by construction: authenticated iff an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Subscribe to the session. Panics outside a [`SessionProvider`] subtree.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The shared API client provided alongside the session.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>()
}

/// Lifecycle transition: drop the identity (logout, invalidated session).
pub fn clear_session(session: &mut Signal<SessionState>) {
    session.set(SessionState {
        user: None,
        token: None,
        loading: false,
        ready: true,
    });
}

/// Refetch `/users/me` and write the result into the store. Used after
/// mutations that change the caller's associations (invite redemption,
/// onboarding updates).
pub async fn refresh_identity(client: &ApiClient, session: &mut Signal<SessionState>) {
    match api::auth::get_me(client).await {
        Ok(user) => {
            let token = session.peek().token.clone();
            session.set(SessionState {
                user: Some(user),
                token,
                loading: false,
                ready: true,
            });
        }
        Err(err) => {
            tracing::warn!(error = %err, "identity refresh failed, clearing session");
            clear_session(session);
        }
    }
}

/// Provider component that resolves the session before protected content
/// renders, then redeems a deferred invite token if one was parked before
/// login.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);
    use_context_provider(|| session);
    let client = use_context_provider(ApiClient::new);
    let mut toasts = use_toasts();

    // Initial identity fetch. `ready` is set in the same store write that
    // publishes the user, so the pending-invite step below never observes a
    // half-updated session.
    let _identity = use_resource(move || {
        let client = client.clone();
        async move {
            match api::auth::get_me(&client).await {
                Ok(user) => {
                    session.set(SessionState {
                        user: Some(user),
                        token: None,
                        loading: false,
                        ready: true,
                    });
                }
                Err(err) => {
                    tracing::debug!(error = %err, "no active session");
                    clear_session(&mut session);
                }
            }

            // Deferred invite redemption: only once the store write above has
            // landed, and only for an authenticated session. The token is
            // consumed from storage before the attempt, so a failure cannot
            // loop on reload.
            if !session.peek().is_authenticated() {
                return;
            }
            let Some(token) = take_pending() else {
                return;
            };
            tracing::info!("redeeming deferred invite token");
            match invite::redeem(&client, &token).await {
                Ok(outcome) => {
                    push_toast(&mut toasts, ToastLevel::Success, &outcome.success_message());
                    refresh_identity(&client, &mut session).await;
                }
                Err(err) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &err.user_message(invite::DEFAULT_FAILURE),
                    );
                }
            }
        }
    });

    if session().loading {
        return rsx! {
            crate::components::LoadingSpinner { full_screen: true }
        };
    }

    rsx! {
        {children}
    }
}
