// src/ui/pages/agent_detail.rs - Single agent view addressed by its slug

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::catalog::{
    self,
    content::{agent_details, DetailSection, Tone},
};
use crate::model::{ActionStatus, Agent, AgentType};
use crate::ui::{
    components::{status_variant, Badge, Card, Toggle},
    pages::{agents::toggle_agent, PageWrapper},
    router::Route,
};
use crate::utils::{format::format_relative_time, Time};

/// Text color used for a detail row value
pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "text-green-600",
        Tone::Neutral => "text-gray-900",
        Tone::Warning => "text-yellow-600",
        Tone::Negative => "text-red-600",
    }
}

fn action_status_label(status: ActionStatus) -> &'static str {
    match status {
        ActionStatus::Success => "success",
        ActionStatus::Pending => "pending",
        ActionStatus::Failed => "failed",
    }
}

/// Resolves a route segment to the agent shown on the page
pub fn resolve_agent(kind: &str) -> Option<(AgentType, Agent)> {
    let agent_type = AgentType::from_slug(kind)?;
    catalog::agent(agent_type).map(|agent| (agent_type, agent))
}

#[component]
pub fn AgentDetail(kind: String) -> Element {
    match resolve_agent(&kind) {
        Some((agent_type, agent)) => rsx! {
            AgentPanel {
                key: "{kind}",
                agent: agent,
                sections: agent_details(agent_type).to_vec()
            }
        },
        None => {
            tracing::debug!("Unknown agent kind requested: {}", kind);
            rsx! {
                PageWrapper {
                    title: "Agent not found".to_string(),
                    Card {
                        p { class: "text-sm text-gray-600", "There is no agent called \"{kind}\"." }
                        Link {
                            to: Route::Agents {},
                            class: "mt-4 inline-block text-sm font-medium text-indigo-600 hover:text-indigo-500",
                            "Back to all agents"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AgentPanel(agent: Agent, sections: Vec<DetailSection>) -> Element {
    let mut current = use_signal(|| vec![agent.clone()]);

    let shown = current.read().first().cloned().unwrap_or(agent);
    let id = shown.id.clone();
    let metrics: Vec<(String, String)> = shown
        .metrics
        .iter()
        .map(|(k, v)| (k.clone(), v.to_string()))
        .collect();

    rsx! {
        PageWrapper {
            title: format!("{} {}", shown.icon, shown.name),
            subtitle: Some(shown.description.clone()),
            actions: Some(rsx! {
                div {
                    class: "flex items-center space-x-3",
                    Badge { variant: status_variant(shown.status.label()).to_string(), "{shown.status.label()}" }
                    Toggle {
                        checked: shown.is_active(),
                        on_change: move |_: bool| toggle_agent(&mut current.write(), &id)
                    }
                }
            }),

            Link {
                to: Route::Agents {},
                class: "text-sm text-indigo-600 hover:text-indigo-500",
                "← All agents"
            }

            div {
                class: "grid grid-cols-2 lg:grid-cols-4 gap-5",
                div {
                    class: "bg-white rounded-xl border border-gray-100 p-5",
                    p { class: "text-sm text-gray-500", "Actions today" }
                    p { class: "mt-1 text-2xl font-semibold text-gray-900", "{shown.actions_today}" }
                }
                for (key, value) in metrics {
                    div {
                        key: "{key}",
                        class: "bg-white rounded-xl border border-gray-100 p-5",
                        p { class: "text-sm text-gray-500 capitalize", "{key}" }
                        p { class: "mt-1 text-2xl font-semibold text-gray-900", "{value}" }
                    }
                }
            }

            div {
                class: "grid lg:grid-cols-3 gap-5",
                Card {
                    title: "Last action".to_string(),
                    class: "lg:col-span-2".to_string(),
                    if let Some(action) = shown.last_action.clone() {
                        div {
                            class: "space-y-2",
                            div {
                                class: "flex items-center justify-between",
                                p { class: "font-medium text-gray-900", "{action.action}" }
                                Badge {
                                    variant: status_variant(action_status_label(action.status)).to_string(),
                                    "{action_status_label(action.status)}"
                                }
                            }
                            p { class: "text-sm text-gray-600", "Why: {action.reason}" }
                            p { class: "text-sm text-gray-600", "Result: {action.result}" }
                            p { class: "text-xs text-gray-400", "{format_relative_time(action.timestamp, Time::now())}" }
                        }
                    } else {
                        p { class: "text-sm text-gray-500", "No actions yet" }
                    }
                }
                Card {
                    title: "Permissions".to_string(),
                    ul {
                        class: "space-y-2",
                        for permission in shown.permissions.clone() {
                            li {
                                key: "{permission}",
                                class: "flex items-center text-sm text-gray-700",
                                span { class: "mr-2 text-green-500", "✓" }
                                "{permission}"
                            }
                        }
                    }
                }
            }

            for section in sections {
                Card {
                    key: "{section.title}",
                    title: section.title.to_string(),
                    ul {
                        class: "divide-y divide-gray-100",
                        for row in section.rows.iter() {
                            li {
                                key: "{row.label}",
                                class: "py-3 flex items-center justify-between",
                                div {
                                    p { class: "text-sm font-medium text-gray-900", "{row.label}" }
                                    if !row.note.is_empty() {
                                        p { class: "text-xs text-gray-500", "{row.note}" }
                                    }
                                }
                                span { class: format!("text-sm font-semibold {}", tone_class(row.tone)), "{row.value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_agent_by_slug() {
        let (agent_type, agent) = resolve_agent("meta-ads").expect("meta agent");
        assert_eq!(agent_type, AgentType::MetaAds);
        assert_eq!(agent.agent_type, AgentType::MetaAds);

        for agent_type in AgentType::ALL {
            assert!(resolve_agent(agent_type.slug()).is_some());
        }
    }

    #[test]
    fn test_unknown_kind_resolves_to_none() {
        assert!(resolve_agent("tiktok-ads").is_none());
        assert!(resolve_agent("").is_none());
        assert!(resolve_agent("Meta-Ads").is_none());
    }

    #[test]
    fn test_tone_colors_are_distinct() {
        let classes = [Tone::Positive, Tone::Neutral, Tone::Warning, Tone::Negative].map(tone_class);
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
