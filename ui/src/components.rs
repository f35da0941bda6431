//! Small shared building blocks used across the page views.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleExclamation, FaCopy, FaXmark};
use dioxus_free_icons::Icon;

use crate::browser::copy_to_clipboard;
use crate::toast::{push_toast, use_toasts, ToastLevel};

#[component]
pub fn LoadingSpinner(
    #[props(default = false)] full_screen: bool,
    #[props(default = String::new())] message: String,
) -> Element {
    let container = if full_screen {
        "spinner-container spinner-fullscreen"
    } else {
        "spinner-container"
    };
    rsx! {
        div { class: "{container}",
            div { class: "spinner" }
            if !message.is_empty() {
                p { class: "spinner-message", "{message}" }
            }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "error-message",
            Icon { icon: FaCircleExclamation, width: 18, height: 18 }
            span { "{message}" }
        }
    }
}

#[component]
pub fn EmptyState(title: String, #[props(default = String::new())] hint: String) -> Element {
    rsx! {
        div { class: "empty-state",
            h3 { "{title}" }
            if !hint.is_empty() {
                p { "{hint}" }
            }
        }
    }
}

/// Full-screen overlay centering a modal card; clicking outside closes it.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Shows a freshly generated invite link with a copy action.
#[component]
pub fn InviteLinkModal(
    invite_link: String,
    title: String,
    #[props(default = String::new())] description: String,
    on_close: EventHandler<()>,
) -> Element {
    let mut toasts = use_toasts();
    let link = invite_link.clone();

    let on_copy = move |_| {
        let link = link.clone();
        async move {
            if copy_to_clipboard(&link).await {
                push_toast(&mut toasts, ToastLevel::Success, "Invite link copied to clipboard!");
            } else {
                push_toast(&mut toasts, ToastLevel::Info, "Copy the link manually");
            }
        }
    };

    rsx! {
        ModalOverlay { on_close,
            div { class: "modal-header",
                h2 { "{title}" }
                button {
                    class: "btn btn-icon",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                }
            }
            div { class: "modal-body",
                if !description.is_empty() {
                    p { class: "modal-description", "{description}" }
                }
                div { class: "invite-link-row",
                    input {
                        class: "input invite-link-input",
                        readonly: true,
                        value: "{invite_link}",
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: on_copy,
                        Icon { icon: FaCopy, width: 16, height: 16 }
                        "Copy"
                    }
                }
                p { class: "invite-link-hint",
                    "Anyone with this link can join until it expires."
                }
            }
        }
    }
}
