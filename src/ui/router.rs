// src/ui/router.rs
use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::guard::{self, GuardDecision};
use crate::ui::{
    components::FullPageSpinner,
    layout::{Header, Sidebar},
    pages::{
        Ads, AgentDetail, Agents, Analytics, Customers, Landing, Login, NotFound as NotFoundPage,
        Onboarding, Overview, Reports, Settings, Signup, Store,
    },
    state::use_session,
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/onboarding")]
    Onboarding {},
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Overview {},
        #[route("/dashboard/agents")]
        Agents {},
        #[route("/dashboard/agents/:kind")]
        AgentDetail { kind: String },
        #[route("/dashboard/ads")]
        Ads {},
        #[route("/dashboard/store")]
        Store {},
        #[route("/dashboard/customers")]
        Customers {},
        #[route("/dashboard/analytics")]
        Analytics {},
        #[route("/dashboard/reports")]
        Reports {},
        #[route("/dashboard/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        NotFoundPage { path: path }
    }
}

/// Route a guard redirect lands on
pub fn redirect_route(decision: GuardDecision) -> Option<Route> {
    match decision {
        GuardDecision::RedirectLogin => Some(Route::Login {}),
        GuardDecision::RedirectOnboarding => Some(Route::Onboarding {}),
        GuardDecision::RedirectDashboard => Some(Route::Overview {}),
        GuardDecision::ShowLoading | GuardDecision::Render => None,
    }
}

/// Re-runs the guard whenever the session snapshot changes and redirects
/// away from routes the current state may not see.
pub fn use_guard(evaluate: fn(crate::session::SessionState) -> GuardDecision) -> GuardDecision {
    let session = use_session();
    let navigator = use_navigator();
    let snapshot = session.snapshot;

    use_effect(move || {
        let decision = evaluate(snapshot.read().state);
        if let Some(route) = redirect_route(decision) {
            tracing::debug!("Guard redirect: {:?}", decision);
            navigator.replace(route);
        }
    });

    let state = snapshot.read().state;
    evaluate(state)
}

/// Shell for every `/dashboard` route: guard, sidebar, header and outlet
#[component]
fn DashboardLayout() -> Element {
    let decision = use_guard(guard::evaluate);
    let mut mobile_open = use_signal(|| false);

    match decision {
        GuardDecision::ShowLoading => rsx! {
            FullPageSpinner { message: "Loading your workspace...".to_string() }
        },
        GuardDecision::Render => rsx! {
            div {
                class: "min-h-screen bg-gray-50",
                Sidebar {
                    mobile_open: mobile_open(),
                    on_close: move |_| mobile_open.set(false)
                }
                div {
                    class: "lg:pl-64 flex flex-col min-h-screen",
                    Header {
                        on_menu_toggle: move |_| mobile_open.set(!mobile_open())
                    }
                    main {
                        class: "flex-1 p-4 sm:p-6 lg:p-8",
                        Outlet::<Route> {}
                    }
                }
            }
        },
        _ => rsx! {
            FullPageSpinner { message: "Redirecting...".to_string() }
        },
    }
}

pub mod nav {
    use super::*;

    pub fn route_title(route: &Route) -> &'static str {
        match route {
            Route::Landing { .. } => "Reon.ai",
            Route::Login { .. } => "Sign In",
            Route::Signup { .. } => "Create Account",
            Route::Onboarding { .. } => "Set Up Your Workspace",
            Route::Overview { .. } => "Overview",
            Route::Agents { .. } => "AI Agents",
            Route::AgentDetail { .. } => "Agent",
            Route::Ads { .. } => "Ads Manager",
            Route::Store { .. } => "Store",
            Route::Customers { .. } => "Customers",
            Route::Analytics { .. } => "Analytics",
            Route::Reports { .. } => "Reports",
            Route::Settings { .. } => "Settings",
            Route::NotFound { .. } => "Not Found",
        }
    }

    /// Overview matches only itself; other sections also match their
    /// sub-routes, so an agent detail page highlights "AI Agents".
    pub fn is_active(current: &Route, target: &Route) -> bool {
        let current = current.to_string();
        let target = target.to_string();
        if target == "/dashboard" {
            current == target
        } else {
            current == target || current.starts_with(&format!("{}/", target))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Overview {}.to_string(), "/dashboard");
        assert_eq!(
            Route::AgentDetail { kind: "meta-ads".to_string() }.to_string(),
            "/dashboard/agents/meta-ads"
        );
        assert_eq!(Route::from_str("/dashboard/customers").ok(), Some(Route::Customers {}));
        assert!(matches!(Route::from_str("/nope").ok(), Some(Route::NotFound { .. })));
    }

    #[test]
    fn test_route_title() {
        assert_eq!(nav::route_title(&Route::Overview {}), "Overview");
        assert_eq!(nav::route_title(&Route::Ads {}), "Ads Manager");
    }

    #[test]
    fn test_active_matching() {
        let detail = Route::AgentDetail { kind: "seo".to_string() };
        assert!(nav::is_active(&detail, &Route::Agents {}));
        assert!(!nav::is_active(&detail, &Route::Overview {}));
        assert!(nav::is_active(&Route::Overview {}, &Route::Overview {}));
        assert!(!nav::is_active(&Route::Ads {}, &Route::Agents {}));
    }

    #[test]
    fn test_redirect_targets() {
        assert_eq!(redirect_route(GuardDecision::RedirectLogin), Some(Route::Login {}));
        assert_eq!(redirect_route(GuardDecision::RedirectOnboarding), Some(Route::Onboarding {}));
        assert_eq!(redirect_route(GuardDecision::Render), None);
        for decision in [
            GuardDecision::RedirectLogin,
            GuardDecision::RedirectOnboarding,
            GuardDecision::RedirectDashboard,
        ] {
            let route = redirect_route(decision).map(|r| r.to_string());
            assert_eq!(route.as_deref(), decision.redirect_path());
        }
    }
}
