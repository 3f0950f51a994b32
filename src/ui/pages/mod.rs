// src/ui/pages/mod.rs - Page components module

use dioxus::prelude::*;

mod ads;
mod agent_detail;
mod agents;
mod analytics;
mod customers;
mod landing;
mod login;
mod not_found;
mod onboarding;
mod overview;
mod reports;
mod settings;
mod signup;
mod store;

pub use ads::Ads;
pub use agent_detail::AgentDetail;
pub use agents::{AgentCard, Agents};
pub use analytics::Analytics;
pub use customers::Customers;
pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
pub use onboarding::Onboarding;
pub use overview::Overview;
pub use reports::Reports;
pub use settings::Settings;
pub use signup::Signup;
pub use store::Store;

/// Common page wrapper component
#[component]
pub fn PageWrapper(
    #[props(default = "".to_string())] title: String,
    #[props(default = None)] subtitle: Option<String>,
    #[props(default = None)] actions: Option<Element>,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: format!("space-y-6 {}", class),

            if !title.is_empty() {
                div {
                    class: "md:flex md:items-center md:justify-between",
                    div {
                        class: "flex-1 min-w-0",
                        h1 {
                            class: "text-2xl font-bold leading-7 text-gray-900 sm:text-3xl sm:truncate",
                            "{title}"
                        }
                        if let Some(subtitle) = subtitle {
                            p { class: "mt-1 text-sm text-gray-500", "{subtitle}" }
                        }
                    }
                    if let Some(actions) = actions {
                        div { class: "mt-4 flex md:mt-0 md:ml-4", {actions} }
                    }
                }
            }

            {children}
        }
    }
}

/// Centered card used by the sign-in, sign-up and onboarding screens
#[component]
pub fn AuthCard(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gradient-to-br from-indigo-50 via-white to-purple-50 py-12 px-4",
            div {
                class: "max-w-md w-full space-y-8",
                div {
                    class: "text-center",
                    div {
                        class: "mx-auto h-12 w-12 bg-indigo-600 rounded-xl flex items-center justify-center",
                        span { class: "text-white font-bold text-xl", "R" }
                    }
                    h2 { class: "mt-6 text-3xl font-extrabold text-gray-900", "{title}" }
                    p { class: "mt-2 text-sm text-gray-600", "{subtitle}" }
                }
                div {
                    class: "bg-white shadow-lg rounded-2xl p-8",
                    {children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper() {
        let _page = rsx! {
            PageWrapper {
                title: "Customers".to_string(),
                subtitle: Some("8 customers".to_string()),
                div { "content" }
            }
        };
    }
}
