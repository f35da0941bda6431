//! Application chrome: navbar, role-filtered sidebar, logout.

use api::models::Role;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaRightFromBracket};
use dioxus_free_icons::Icon;

use crate::access::LOGIN_PATH;
use crate::session::{clear_session, use_api_client, use_session};

struct NavItem {
    path: &'static str,
    label: &'static str,
    roles: &'static [Role],
}

/// Same table the original navigation carries; filtered by the session role.
const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        path: "/my-progress",
        label: "Мій Прогрес",
        roles: &[Role::Scout, Role::Foreman],
    },
    NavItem {
        path: "/my-groups",
        label: "Мої Гуртки",
        roles: &[Role::Foreman, Role::Liaison],
    },
    NavItem {
        path: "/my-kurin",
        label: "Мій Курінь",
        roles: &[Role::Liaison],
    },
    NavItem {
        path: "/admin-dashboard",
        label: "Адмін Панель",
        roles: &[Role::Admin],
    },
];

/// Navbar + sidebar shell wrapped around every authenticated page.
#[component]
pub fn MainLayout(children: Element) -> Element {
    let session = use_session();
    let mut sidebar_open = use_signal(|| false);

    let user = session().user;

    rsx! {
        div { class: "app-shell",
            header { class: "navbar",
                button {
                    class: "btn btn-icon",
                    aria_label: "Toggle navigation",
                    onclick: move |_| {
                        let open = *sidebar_open.read();
                        sidebar_open.set(!open);
                    },
                    Icon { icon: FaBars, width: 18, height: 18 }
                }
                span { class: "navbar-brand", "Plast-Proba" }
                div { class: "navbar-user",
                    if let Some(user) = &user {
                        span { class: "navbar-name", "{user.name}" }
                        span { class: "role-chip", "{user.role.label()}" }
                    }
                    LogoutButton {}
                }
            }
            div { class: "app-body",
                if sidebar_open() {
                    Sidebar { on_navigate: move |_| sidebar_open.set(false) }
                }
                main { class: "app-content", {children} }
            }
        }
    }
}

#[component]
fn Sidebar(on_navigate: EventHandler<()>) -> Element {
    let session = use_session();
    let Some(role) = session().role() else {
        return rsx! {};
    };

    rsx! {
        aside { class: "sidebar",
            nav {
                for item in NAV_ITEMS.iter().filter(|i| i.roles.contains(&role)) {
                    Link {
                        class: "sidebar-link",
                        to: item.path,
                        onclick: move |_| on_navigate.call(()),
                        "{item.label}"
                    }
                }
            }
        }
    }
}

/// Invalidates the server session, clears the local one, and lands on login.
/// The local state is cleared even when the server call fails.
#[component]
pub fn LogoutButton() -> Element {
    let mut session = use_session();
    let client = use_api_client();
    let nav = use_navigator();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            if let Err(err) = api::auth::logout(&client).await {
                tracing::warn!(error = %err, "logout request failed");
            }
            clear_session(&mut session);
            nav.replace(LOGIN_PATH);
        }
    };

    rsx! {
        button {
            class: "btn btn-ghost",
            aria_label: "Logout",
            onclick,
            Icon { icon: FaRightFromBracket, width: 16, height: 16 }
            "Logout"
        }
    }
}
