use dioxus::prelude::*;

use ui::browser::set_location;
use ui::use_session;
use ui::{use_api_client, Icon};

use crate::Route;

/// Entry page. The only credential flow is the Google OAuth redirect; an
/// already-authenticated visitor is bounced straight to their dashboard.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let client = use_api_client();
    let nav = use_navigator();

    if session().is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let on_google = move |_| {
        set_location(&api::auth::google_login_url(&client));
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Plast-Proba" }
                p { class: "auth-subtitle", "Трекер проб для пластових гуртків" }
                button {
                    class: "btn btn-primary btn-google",
                    onclick: on_google,
                    Icon { icon: ui::icons::FaRightToBracket, width: 18, height: 18 }
                    "Sign in with Google"
                }
            }
        }
    }
}
