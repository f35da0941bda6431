use dioxus::prelude::*;

use ui::access::landing_path;
use ui::use_session;

use crate::Route;

/// `/` and `/dashboard` never render content. Both resolve the session role
/// to its landing page; an unknown role falls through to login.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();

    match session().role() {
        Some(role) => {
            nav.replace(landing_path(role));
        }
        None => {
            nav.replace(Route::Login {});
        }
    }
    rsx! {}
}

#[component]
pub fn Root() -> Element {
    rsx! {
        Dashboard {}
    }
}
