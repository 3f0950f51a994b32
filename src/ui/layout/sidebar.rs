// src/ui/layout/sidebar.rs - Dashboard navigation, plan banner and user block

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::model::Plan;
use crate::ui::{
    components::Avatar,
    router::{nav, Route},
    state::{use_session, use_snapshot},
};

/// Navigation item definition
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

pub fn navigation_items() -> Vec<NavItem> {
    vec![
        NavItem { label: "Overview", icon: "📊", route: Route::Overview {} },
        NavItem { label: "AI Agents", icon: "🤖", route: Route::Agents {} },
        NavItem { label: "Ads Manager", icon: "📣", route: Route::Ads {} },
        NavItem { label: "Store", icon: "🛍️", route: Route::Store {} },
        NavItem { label: "Customers", icon: "👥", route: Route::Customers {} },
        NavItem { label: "Analytics", icon: "📈", route: Route::Analytics {} },
        NavItem { label: "Reports", icon: "📄", route: Route::Reports {} },
        NavItem { label: "Settings", icon: "⚙️", route: Route::Settings {} },
    ]
}

/// Upsell line shown under the plan name
pub fn plan_blurb(plan: Plan) -> &'static str {
    match plan {
        Plan::Starter => "2 agents included. Upgrade to unlock all 8.",
        Plan::Growth => "All 8 agents, 10,000 AI actions/mo.",
        Plan::Pro => "Unlimited AI actions and priority support.",
    }
}

#[component]
pub fn Sidebar(mobile_open: bool, on_close: EventHandler<MouseEvent>) -> Element {
    rsx! {
        // Desktop sidebar
        div {
            class: "hidden lg:flex lg:flex-col lg:fixed lg:inset-y-0 lg:w-64 lg:z-40",
            SidebarContent {}
        }

        // Mobile sidebar
        if mobile_open {
            div {
                class: "lg:hidden fixed inset-0 z-50 flex",
                div {
                    class: "fixed inset-0 bg-gray-600 bg-opacity-75",
                    onclick: move |e| on_close.call(e)
                }
                div {
                    class: "relative flex flex-col w-64",
                    SidebarContent { on_navigate: on_close }
                }
            }
        }
    }
}

#[component]
fn SidebarContent(#[props(default = None)] on_navigate: Option<EventHandler<MouseEvent>>) -> Element {
    let current_route = use_route::<Route>();
    let session = use_session();
    let snapshot = use_snapshot();
    let navigator = use_navigator();

    let plan = snapshot.workspace.as_ref().map(|w| w.plan).unwrap_or(Plan::Starter);
    let user_name = snapshot.user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let user_email = snapshot.user.as_ref().map(|u| u.email.clone()).unwrap_or_default();

    rsx! {
        div {
            class: "flex flex-col flex-grow bg-white border-r border-gray-200 overflow-y-auto",

            // Brand
            Link {
                to: Route::Overview {},
                class: "flex items-center h-16 px-5 border-b border-gray-100",
                div {
                    class: "h-8 w-8 bg-indigo-600 rounded-lg flex items-center justify-center",
                    span { class: "text-white font-bold text-sm", "R" }
                }
                span { class: "ml-2 text-xl font-bold text-gray-900", "Reon.ai" }
            }

            nav {
                class: "flex-1 px-3 py-4 space-y-1",
                for item in navigation_items() {
                    Link {
                        key: "{item.label}",
                        to: item.route.clone(),
                        class: format!(
                            "group flex items-center px-3 py-2 text-sm font-medium rounded-lg {}",
                            if nav::is_active(&current_route, &item.route) {
                                "bg-indigo-50 text-indigo-700"
                            } else {
                                "text-gray-600 hover:bg-gray-50 hover:text-gray-900"
                            }
                        ),
                        onclick: move |e| {
                            if let Some(handler) = &on_navigate {
                                handler.call(e);
                            }
                        },
                        span { class: "text-lg mr-3", "{item.icon}" }
                        span { "{item.label}" }
                    }
                }
            }

            // Plan banner
            div {
                class: "mx-3 mb-4 p-4 rounded-xl bg-gradient-to-br from-indigo-600 to-purple-600 text-white",
                p { class: "text-xs uppercase tracking-wide opacity-80", "Current plan" }
                p { class: "text-lg font-semibold", "{plan.label()}" }
                p { class: "mt-1 text-xs opacity-90", "{plan_blurb(plan)}" }
            }

            // User block
            div {
                class: "flex items-center px-4 py-4 border-t border-gray-100",
                Avatar { name: user_name.clone() }
                div {
                    class: "ml-3 flex-1 min-w-0",
                    p { class: "text-sm font-medium text-gray-900 truncate", "{user_name}" }
                    p { class: "text-xs text-gray-500 truncate", "{user_email}" }
                }
                button {
                    r#type: "button",
                    class: "ml-2 text-sm text-gray-500 hover:text-red-600",
                    title: "Log out",
                    onclick: move |_| {
                        session.logout();
                        navigator.replace(Route::Login {});
                    },
                    "Log out"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_covers_dashboard_sections() {
        let items = navigation_items();
        assert_eq!(items.len(), 8);
        assert_eq!(items[0].route, Route::Overview {});
        assert!(items.iter().all(|i| i.route.to_string().starts_with("/dashboard")));
    }

    #[test]
    fn test_plan_blurb() {
        assert!(plan_blurb(Plan::Growth).contains("All 8"));
        assert!(plan_blurb(Plan::Starter).contains("Upgrade"));
    }
}
