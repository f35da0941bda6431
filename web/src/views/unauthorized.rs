use dioxus::prelude::*;

use ui::Icon;

use crate::Route;

#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                Icon { icon: ui::icons::FaLock, width: 32, height: 32 }
                h1 { class: "auth-title", "Access denied" }
                p { "You don't have permission to view this page." }
                Link { class: "btn btn-primary", to: Route::Dashboard {}, "Go to Dashboard" }
            }
        }
    }
}
