// src/ui/pages/landing.rs - Public marketing page

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::catalog::{
    self,
    content::{HIGHLIGHTS, PRICING_TIERS},
};
use crate::ui::router::Route;

#[component]
pub fn Landing() -> Element {
    let agents = catalog::agents();

    rsx! {
        div {
            class: "min-h-screen bg-white",

            // Nav
            nav {
                class: "max-w-7xl mx-auto flex items-center justify-between px-6 py-5",
                div {
                    class: "flex items-center",
                    div {
                        class: "h-8 w-8 bg-indigo-600 rounded-lg flex items-center justify-center",
                        span { class: "text-white font-bold text-sm", "R" }
                    }
                    span { class: "ml-2 text-xl font-bold text-gray-900", "Reon.ai" }
                }
                div {
                    class: "flex items-center space-x-4",
                    a { href: "#features", class: "hidden sm:block text-sm text-gray-600 hover:text-gray-900", "Features" }
                    a { href: "#pricing", class: "hidden sm:block text-sm text-gray-600 hover:text-gray-900", "Pricing" }
                    Link { to: Route::Login {}, class: "text-sm font-medium text-gray-700 hover:text-gray-900", "Sign in" }
                    Link {
                        to: Route::Signup {},
                        class: "px-4 py-2 text-sm font-medium text-white bg-indigo-600 rounded-lg hover:bg-indigo-700",
                        "Get started"
                    }
                }
            }

            // Hero
            section {
                class: "max-w-5xl mx-auto text-center px-6 pt-16 pb-20",
                span {
                    class: "inline-flex items-center px-3 py-1 rounded-full text-xs font-medium bg-indigo-50 text-indigo-700",
                    "8 AI agents working for your store"
                }
                h1 {
                    class: "mt-6 text-4xl sm:text-6xl font-extrabold tracking-tight text-gray-900",
                    "Your AI marketing team, on autopilot"
                }
                p {
                    class: "mt-6 text-lg text-gray-600 max-w-2xl mx-auto",
                    "Reon.ai runs your ads, social, email, SEO and store funnel around the clock, and tells you exactly what it changed and why."
                }
                div {
                    class: "mt-10 flex justify-center gap-4",
                    Link {
                        to: Route::Signup {},
                        class: "px-6 py-3 text-base font-medium text-white bg-indigo-600 rounded-lg hover:bg-indigo-700",
                        "Start free trial"
                    }
                    Link {
                        to: Route::Login {},
                        class: "px-6 py-3 text-base font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50",
                        "View demo"
                    }
                }
                div {
                    class: "mt-16 grid grid-cols-2 md:grid-cols-4 gap-6",
                    for highlight in HIGHLIGHTS {
                        div {
                            key: "{highlight.id}",
                            class: "p-4 rounded-xl bg-gray-50 text-left",
                            div { class: "text-2xl", "{highlight.icon}" }
                            h3 { class: "mt-2 font-semibold text-gray-900", "{highlight.title}" }
                            p { class: "mt-1 text-sm text-gray-600", "{highlight.description}" }
                        }
                    }
                }
            }

            // Features
            section {
                id: "features",
                class: "bg-gray-50 py-20",
                div {
                    class: "max-w-7xl mx-auto px-6",
                    h2 { class: "text-3xl font-bold text-center text-gray-900", "Meet your AI team" }
                    p { class: "mt-3 text-center text-gray-600", "Each agent owns one channel and reports every action it takes." }
                    div {
                        class: "mt-12 grid sm:grid-cols-2 lg:grid-cols-4 gap-6",
                        for agent in agents {
                            div {
                                key: "{agent.id}",
                                class: "bg-white p-6 rounded-xl shadow-sm border border-gray-100",
                                div { class: "text-3xl", "{agent.icon}" }
                                h3 { class: "mt-3 font-semibold text-gray-900", "{agent.name}" }
                                p { class: "mt-2 text-sm text-gray-600", "{agent.description}" }
                            }
                        }
                    }
                }
            }

            // Pricing
            section {
                id: "pricing",
                class: "py-20",
                div {
                    class: "max-w-6xl mx-auto px-6",
                    h2 { class: "text-3xl font-bold text-center text-gray-900", "Simple pricing" }
                    div {
                        class: "mt-12 grid md:grid-cols-3 gap-8",
                        for tier in PRICING_TIERS {
                            div {
                                key: "{tier.name}",
                                class: format!(
                                    "relative p-8 rounded-2xl border {}",
                                    if tier.popular { "border-indigo-600 shadow-xl" } else { "border-gray-200" }
                                ),
                                if tier.popular {
                                    span {
                                        class: "absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 text-xs font-medium text-white bg-indigo-600 rounded-full",
                                        "Most popular"
                                    }
                                }
                                h3 { class: "text-lg font-semibold text-gray-900", "{tier.name}" }
                                p { class: "mt-1 text-sm text-gray-500", "{tier.description}" }
                                p {
                                    class: "mt-6",
                                    span { class: "text-4xl font-bold text-gray-900", "{tier.price}" }
                                    if !tier.is_custom() {
                                        span { class: "text-gray-500", "/mo" }
                                    }
                                }
                                ul {
                                    class: "mt-6 space-y-3",
                                    for feature in tier.features {
                                        li { key: "{feature}", class: "flex text-sm text-gray-700", span { class: "text-green-500 mr-2", "✓" } "{feature}" }
                                    }
                                }
                                Link {
                                    to: Route::Signup {},
                                    class: "mt-8 block text-center px-4 py-2 rounded-lg font-medium bg-indigo-600 text-white hover:bg-indigo-700",
                                    if tier.is_custom() { "Contact sales" } else { "Get started" }
                                }
                            }
                        }
                    }
                }
            }

            // CTA
            section {
                class: "bg-indigo-600 py-16 text-center",
                h2 { class: "text-3xl font-bold text-white", "Ready to put marketing on autopilot?" }
                Link {
                    to: Route::Signup {},
                    class: "mt-8 inline-block px-6 py-3 text-base font-medium text-indigo-600 bg-white rounded-lg hover:bg-indigo-50",
                    "Create your workspace"
                }
            }

            footer {
                class: "py-8 text-center text-sm text-gray-500",
                "© 2024 Reon.ai. All rights reserved."
            }
        }
    }
}
