// src/ui/pages/reports.rs

use dioxus::prelude::*;

use crate::catalog::content::{AUTOMATED_REPORTS, CUSTOM_REPORTS};
use crate::ui::{
    components::{Badge, Button, Card},
    pages::PageWrapper,
};

#[component]
pub fn Reports() -> Element {
    let mut downloaded = use_signal(|| None::<String>);

    rsx! {
        PageWrapper {
            title: "Reports".to_string(),
            subtitle: Some("Automated summaries generated by your AI team".to_string()),
            actions: Some(rsx! {
                Button { "Create report" }
            }),

            if let Some(name) = downloaded() {
                div {
                    class: "rounded-lg bg-green-50 p-3 text-sm text-green-800",
                    "Preparing \"{name}\" for download"
                }
            }

            Card {
                title: "Automated Reports".to_string(),
                div {
                    class: "grid md:grid-cols-2 gap-4",
                    for report in AUTOMATED_REPORTS {
                        div {
                            key: "{report.name}",
                            class: "p-4 rounded-lg border border-gray-100 flex items-start",
                            span { class: "text-2xl mr-3", "{report.icon}" }
                            div {
                                class: "flex-1",
                                div {
                                    class: "flex items-center justify-between",
                                    p { class: "font-medium text-gray-900", "{report.name}" }
                                    Badge { variant: "indigo".to_string(), "{report.frequency}" }
                                }
                                p { class: "mt-1 text-sm text-gray-500", "{report.description}" }
                                div {
                                    class: "mt-3 flex items-center justify-between text-xs text-gray-400",
                                    span { "Last generated {report.last_generated}" }
                                    button {
                                        class: "text-indigo-600 hover:text-indigo-500 font-medium",
                                        onclick: move |_| {
                                            tracing::debug!("Report download requested: {}", report.name);
                                            downloaded.set(Some(report.name.to_string()));
                                        },
                                        "Download"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                title: "Custom Reports".to_string(),
                ul {
                    class: "divide-y divide-gray-100",
                    for (name, created) in CUSTOM_REPORTS {
                        li {
                            key: "{name}",
                            class: "py-3 flex items-center justify-between",
                            div {
                                p { class: "text-sm font-medium text-gray-900", "{name}" }
                                p { class: "text-xs text-gray-500", "Created {created}" }
                            }
                            button {
                                class: "text-sm text-indigo-600 hover:text-indigo-500",
                                onclick: move |_| downloaded.set(Some(name.to_string())),
                                "Download"
                            }
                        }
                    }
                }
            }
        }
    }
}
