use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "404" }
                p { "Page not found: /{path}" }
                Link { class: "btn btn-primary", to: Route::Dashboard {}, "Go to Dashboard" }
            }
        }
    }
}
