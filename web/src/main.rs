use api::models::Role;
use dioxus::prelude::*;

use ui::access::{evaluate, AccessDecision, RoutePolicy};
use ui::{use_session, LoadingSpinner, SessionProvider, ToastProvider};
use views::*;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guard)]
        #[route("/login")]
        Login {},
        #[route("/join/:invite_token")]
        Join { invite_token: String },
        #[route("/unauthorized")]
        Unauthorized {},
        #[route("/")]
        Root {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/my-progress")]
        MyProgress {},
        #[route("/my-groups")]
        MyGroups {},
        #[route("/my-kurin")]
        MyKurin {},
        #[route("/scout/:scout_id/progress")]
        ScoutProgress { scout_id: String },
        #[route("/liaison-dashboard")]
        LiaisonDashboard {},
        #[route("/foreman/:foreman_id")]
        ForemanDetail { foreman_id: String },
        #[route("/admin-dashboard")]
        AdminDashboard {},
        #[route("/liaison/:liaison_id")]
        LiaisonDetail { liaison_id: String },
        #[route("/admin/kurins/:kurin_id")]
        AdminKurinDetails { kurin_id: String },
        #[route("/admin/kurins/:kurin_id/foremen/:foreman_id")]
        AdminForemanDetails { kurin_id: String, foreman_id: String },
        #[route("/admin/kurins/:kurin_id/foremen/:foreman_id/groups/:group_id")]
        AdminGroupDetails { kurin_id: String, foreman_id: String, group_id: String },
        #[route("/admin/kurins/:kurin_id/foremen/:foreman_id/groups/:group_id/scouts/:scout_id/progress")]
        AdminScoutProgress { kurin_id: String, foreman_id: String, group_id: String, scout_id: String },
        #[route("/liaison/kurins/:kurin_id")]
        LiaisonKurinDetails { kurin_id: String },
        #[route("/liaison/kurins/:kurin_id/foremen/:foreman_id")]
        LiaisonForemanDetails { kurin_id: String, foreman_id: String },
        #[route("/liaison/kurins/:kurin_id/foremen/:foreman_id/groups/:group_id")]
        LiaisonGroupDetails { kurin_id: String, foreman_id: String, group_id: String },
        #[route("/liaison/kurins/:kurin_id/foremen/:foreman_id/groups/:group_id/scouts/:scout_id/progress")]
        LiaisonScoutProgress { kurin_id: String, foreman_id: String, group_id: String, scout_id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const SCOUT_FOREMAN: &[Role] = &[Role::Scout, Role::Foreman];
const FOREMAN_LIAISON: &[Role] = &[Role::Foreman, Role::Liaison];
const FOREMAN_LIAISON_ADMIN: &[Role] = &[Role::Foreman, Role::Liaison, Role::Admin];
const LIAISON_ONLY: &[Role] = &[Role::Liaison];
const LIAISON_ADMIN: &[Role] = &[Role::Liaison, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// The whole permission surface as one table. The guard below is the only
/// consumer; tests pin every entry.
fn policy_for(route: &Route) -> RoutePolicy {
    match route {
        Route::Login {}
        | Route::Join { .. }
        | Route::Unauthorized {}
        | Route::NotFound { .. } => RoutePolicy::Public,

        // Role-based redirect pseudo-routes: any authenticated role.
        Route::Root {} | Route::Dashboard {} => RoutePolicy::any_role(),

        Route::MyProgress {} => RoutePolicy::roles(SCOUT_FOREMAN),
        Route::MyGroups {} => RoutePolicy::roles(FOREMAN_LIAISON),
        Route::MyKurin {} | Route::LiaisonDashboard {} => RoutePolicy::roles(LIAISON_ONLY),
        Route::ScoutProgress { .. } => RoutePolicy::roles(FOREMAN_LIAISON_ADMIN),
        Route::ForemanDetail { .. } => RoutePolicy::roles(LIAISON_ADMIN),
        Route::AdminDashboard {} | Route::LiaisonDetail { .. } => RoutePolicy::roles(ADMIN_ONLY),

        Route::AdminKurinDetails { .. } => RoutePolicy::roles(ADMIN_ONLY),
        Route::AdminForemanDetails { .. }
        | Route::AdminGroupDetails { .. }
        | Route::AdminScoutProgress { .. } => RoutePolicy::roles(LIAISON_ADMIN),

        Route::LiaisonKurinDetails { .. }
        | Route::LiaisonForemanDetails { .. }
        | Route::LiaisonGroupDetails { .. }
        | Route::LiaisonScoutProgress { .. } => RoutePolicy::roles(LIAISON_ONLY),
    }
}

/// Router-level interpreter of the access table: evaluates the pure guard for
/// the current route and either renders it or issues the redirect.
#[component]
fn Guard() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let state = session();
    if state.loading {
        return rsx! {
            LoadingSpinner { full_screen: true }
        };
    }

    match evaluate(policy_for(&route), &state) {
        AccessDecision::Allow => rsx! {
            Outlet::<Route> {}
        },
        AccessDecision::RedirectLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        AccessDecision::RedirectUnauthorized => {
            nav.replace(Route::Unauthorized {});
            rsx! {}
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ErrorShield {
            ToastProvider {
                SessionProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Last-resort fallback for rendering errors: reset local error state or do a
/// full reload back home.
#[component]
fn ErrorShield(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |errors: ErrorContext| {
                rsx! {
                    div { class: "fatal-error",
                        h1 { "Something went wrong" }
                        p { "An unexpected error occurred. Try again, or go back to the start." }
                        div { class: "fatal-error-actions",
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| errors.clear_errors(),
                                "Try Again"
                            }
                            button {
                                class: "btn btn-ghost",
                                onclick: move |_| ui::browser::set_location("/"),
                                "Go Home"
                            }
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::SessionState;

    fn session_as(role: Role) -> SessionState {
        SessionState {
            user: Some(api::models::User {
                id: "u1".to_string(),
                email: "u@plast.org".to_string(),
                name: "U".to_string(),
                picture: None,
                role,
                group_id: None,
                kurin: None,
                sex: None,
            }),
            token: None,
            loading: false,
            ready: true,
        }
    }

    fn anonymous() -> SessionState {
        SessionState {
            loading: false,
            ready: true,
            ..SessionState::default()
        }
    }

    fn sample_routes() -> Vec<Route> {
        let id = || "x".to_string();
        vec![
            Route::Login {},
            Route::Join { invite_token: "abc123".to_string() },
            Route::Unauthorized {},
            Route::Root {},
            Route::Dashboard {},
            Route::MyProgress {},
            Route::MyGroups {},
            Route::MyKurin {},
            Route::ScoutProgress { scout_id: id() },
            Route::LiaisonDashboard {},
            Route::ForemanDetail { foreman_id: id() },
            Route::AdminDashboard {},
            Route::LiaisonDetail { liaison_id: id() },
            Route::AdminKurinDetails { kurin_id: id() },
            Route::AdminForemanDetails { kurin_id: id(), foreman_id: id() },
            Route::AdminGroupDetails { kurin_id: id(), foreman_id: id(), group_id: id() },
            Route::AdminScoutProgress {
                kurin_id: id(),
                foreman_id: id(),
                group_id: id(),
                scout_id: id(),
            },
            Route::LiaisonKurinDetails { kurin_id: id() },
            Route::LiaisonForemanDetails { kurin_id: id(), foreman_id: id() },
            Route::LiaisonGroupDetails { kurin_id: id(), foreman_id: id(), group_id: id() },
            Route::LiaisonScoutProgress {
                kurin_id: id(),
                foreman_id: id(),
                group_id: id(),
                scout_id: id(),
            },
            Route::NotFound { segments: vec!["nope".to_string()] },
        ]
    }

    #[test]
    fn unauthenticated_access_to_any_protected_route_redirects_login() {
        for route in sample_routes() {
            let policy = policy_for(&route);
            if policy == RoutePolicy::Public {
                continue;
            }
            assert_eq!(
                evaluate(policy, &anonymous()),
                AccessDecision::RedirectLogin,
                "route {route:?}"
            );
        }
    }

    #[test]
    fn public_routes_stay_public() {
        for route in [
            Route::Login {},
            Route::Join { invite_token: "t".to_string() },
            Route::Unauthorized {},
            Route::NotFound { segments: vec![] },
        ] {
            assert_eq!(policy_for(&route), RoutePolicy::Public);
        }
    }

    #[test]
    fn role_gating_matches_the_table() {
        let scout = session_as(Role::Scout);
        let foreman = session_as(Role::Foreman);
        let liaison = session_as(Role::Liaison);
        let admin = session_as(Role::Admin);

        // Scouts and foremen share the personal progress view.
        let p = policy_for(&Route::MyProgress {});
        assert_eq!(evaluate(p, &scout), AccessDecision::Allow);
        assert_eq!(evaluate(p, &foreman), AccessDecision::Allow);
        assert_eq!(evaluate(p, &liaison), AccessDecision::RedirectUnauthorized);
        assert_eq!(evaluate(p, &admin), AccessDecision::RedirectUnauthorized);

        // Admin dashboard is admin-only.
        let p = policy_for(&Route::AdminDashboard {});
        for s in [&scout, &foreman, &liaison] {
            assert_eq!(evaluate(p, s), AccessDecision::RedirectUnauthorized);
        }
        assert_eq!(evaluate(p, &admin), AccessDecision::Allow);

        // Liaison-scoped drill-down paths exclude admins.
        let p = policy_for(&Route::LiaisonKurinDetails { kurin_id: "k".to_string() });
        assert_eq!(evaluate(p, &liaison), AccessDecision::Allow);
        assert_eq!(evaluate(p, &admin), AccessDecision::RedirectUnauthorized);

        // Admin drill-down paths admit liaisons past the kurin root.
        let p = policy_for(&Route::AdminKurinDetails { kurin_id: "k".to_string() });
        assert_eq!(evaluate(p, &liaison), AccessDecision::RedirectUnauthorized);
        let p = policy_for(&Route::AdminForemanDetails {
            kurin_id: "k".to_string(),
            foreman_id: "f".to_string(),
        });
        assert_eq!(evaluate(p, &liaison), AccessDecision::Allow);

        // Unknown roles pass no allow-list.
        let unknown = session_as(Role::Unknown);
        for route in sample_routes() {
            if let RoutePolicy::Protected { allowed: Some(_) } = policy_for(&route) {
                assert_eq!(
                    evaluate(policy_for(&route), &unknown),
                    AccessDecision::RedirectUnauthorized,
                    "route {route:?}"
                );
            }
        }
    }

    #[test]
    fn liaison_dashboard_is_an_alias_for_my_kurin() {
        // The alias route redirects to /my-kurin, so both entries must gate
        // on the same allow-list.
        assert_eq!(
            "/liaison-dashboard".parse::<Route>().unwrap(),
            Route::LiaisonDashboard {}
        );
        assert_eq!(
            policy_for(&Route::LiaisonDashboard {}),
            policy_for(&Route::MyKurin {})
        );
    }

    #[test]
    fn route_paths_render_and_parse() {
        let route = Route::AdminScoutProgress {
            kurin_id: "k1".to_string(),
            foreman_id: "f1".to_string(),
            group_id: "g1".to_string(),
            scout_id: "s1".to_string(),
        };
        let path = route.to_string();
        assert_eq!(path, "/admin/kurins/k1/foremen/f1/groups/g1/scouts/s1/progress");
        assert_eq!(path.parse::<Route>().unwrap(), route);

        assert_eq!(
            "/join/abc123".parse::<Route>().unwrap(),
            Route::Join { invite_token: "abc123".to_string() }
        );
    }
}
