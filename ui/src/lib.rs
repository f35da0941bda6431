//! Shared UI for the Plast-Proba client: the session store, the access
//! control guard, the invite reconciliation flow, and the widgets the page
//! views are assembled from.

pub mod access;
pub mod browser;
pub mod components;
pub mod invite;
pub mod layout;
pub mod pending;
pub mod session;
pub mod toast;

pub use access::{evaluate, landing_path, AccessDecision, RoutePolicy};
pub use components::{EmptyState, ErrorMessage, InviteLinkModal, LoadingSpinner, ModalOverlay};
pub use layout::{LogoutButton, MainLayout};
pub use session::{
    clear_session, refresh_identity, use_api_client, use_session, SessionProvider, SessionState,
};
pub use toast::{push_toast, use_toasts, ToastLevel, ToastProvider};

// Re-export icon library for the views.
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
