// src/ui/pages/agents.rs - AI agent roster with status tabs and local toggles

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::catalog;
use crate::filter::{agent_count, filter_agents, AgentFilter};
use crate::model::Agent;
use crate::ui::{
    components::{status_variant, Badge, TabItem, Tabs, Toggle},
    pages::PageWrapper,
    router::Route,
};
use crate::utils::{format::format_relative_time, Time};

const SELECTED_VIEW: &str = "px-3 py-1.5 text-sm bg-indigo-50 text-indigo-700";
const IDLE_VIEW: &str = "px-3 py-1.5 text-sm text-gray-600";

/// Flips one agent between active and paused. Local view state only.
pub fn toggle_agent(agents: &mut [Agent], id: &str) {
    if let Some(agent) = agents.iter_mut().find(|a| a.id == id) {
        agent.status = agent.status.toggled();
        tracing::debug!("Agent {} toggled to {}", agent.id, agent.status.label());
    }
}

#[component]
pub fn Agents() -> Element {
    let mut agents = use_signal(catalog::agents);
    let mut tab = use_signal(|| "all".to_string());
    let mut grid_view = use_signal(|| true);

    let filter = AgentFilter::from_tab(&tab());
    let all = agents.read().clone();
    let visible: Vec<Agent> = filter_agents(&all, filter).into_iter().cloned().collect();

    let tabs = vec![
        TabItem::new("all", "All").with_count(agent_count(&all, AgentFilter::All)),
        TabItem::new("active", "Active").with_count(agent_count(&all, AgentFilter::Active)),
        TabItem::new("paused", "Paused").with_count(agent_count(&all, AgentFilter::Paused)),
    ];
    let actions_today: u32 = all.iter().map(|a| a.actions_today).sum();
    let (grid_class, list_class) = if grid_view() {
        (SELECTED_VIEW, IDLE_VIEW)
    } else {
        (IDLE_VIEW, SELECTED_VIEW)
    };

    rsx! {
        PageWrapper {
            title: "AI Agents".to_string(),
            subtitle: Some(format!("{} actions taken today across {} agents", actions_today, all.len())),
            actions: Some(rsx! {
                div {
                    class: "inline-flex rounded-lg border border-gray-200 overflow-hidden",
                    button {
                        class: grid_class,
                        onclick: move |_| grid_view.set(true),
                        "Grid"
                    }
                    button {
                        class: list_class,
                        onclick: move |_| grid_view.set(false),
                        "List"
                    }
                }
            }),

            Tabs {
                active_tab: tab(),
                tabs: tabs,
                on_tab_change: move |id: String| tab.set(id)
            }

            if grid_view() {
                div {
                    class: "grid sm:grid-cols-2 xl:grid-cols-4 gap-5",
                    for agent in visible {
                        AgentCard {
                            key: "{agent.id}",
                            agent: agent.clone(),
                            on_toggle: move |id: String| toggle_agent(&mut agents.write(), &id)
                        }
                    }
                }
            } else {
                div {
                    class: "bg-white rounded-xl border border-gray-100 divide-y divide-gray-100",
                    for agent in visible {
                        AgentRow {
                            key: "{agent.id}",
                            agent: agent.clone(),
                            on_toggle: move |id: String| toggle_agent(&mut agents.write(), &id)
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AgentCard(agent: Agent, on_toggle: EventHandler<String>) -> Element {
    let id = agent.id.clone();
    let metrics: Vec<(String, String)> = agent
        .metrics
        .iter()
        .take(2)
        .map(|(k, v)| (k.clone(), v.to_string()))
        .collect();

    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-100 shadow-sm p-5 flex flex-col",
            div {
                class: "flex items-start justify-between",
                span { class: "text-3xl", "{agent.icon}" }
                Toggle {
                    checked: agent.is_active(),
                    on_change: move |_: bool| on_toggle.call(id.clone())
                }
            }
            Link {
                to: Route::AgentDetail { kind: agent.agent_type.slug().to_string() },
                class: "mt-3 font-semibold text-gray-900 hover:text-indigo-600",
                "{agent.name}"
            }
            p { class: "mt-1 text-sm text-gray-500 flex-1", "{agent.description}" }
            div {
                class: "mt-4 grid grid-cols-2 gap-2",
                for (key, value) in metrics {
                    div {
                        key: "{key}",
                        p { class: "text-xs text-gray-400 capitalize", "{key}" }
                        p { class: "text-sm font-semibold text-gray-900", "{value}" }
                    }
                }
            }
            div {
                class: "mt-4 flex items-center justify-between text-xs text-gray-500",
                Badge { variant: status_variant(agent.status.label()).to_string(), "{agent.status.label()}" }
                span { "{agent.actions_today} actions today" }
            }
        }
    }
}

#[component]
fn AgentRow(agent: Agent, on_toggle: EventHandler<String>) -> Element {
    let id = agent.id.clone();
    let last = agent
        .last_action
        .as_ref()
        .map(|a| format!("{} · {}", a.action, format_relative_time(a.timestamp, Time::now())))
        .unwrap_or_else(|| "No actions yet".to_string());

    rsx! {
        div {
            class: "flex items-center px-5 py-4",
            span { class: "text-2xl mr-4", "{agent.icon}" }
            div {
                class: "flex-1 min-w-0",
                Link {
                    to: Route::AgentDetail { kind: agent.agent_type.slug().to_string() },
                    class: "font-medium text-gray-900 hover:text-indigo-600",
                    "{agent.name}"
                }
                p { class: "text-sm text-gray-500 truncate", "{last}" }
            }
            Badge { variant: status_variant(agent.status.label()).to_string(), class: "mr-4".to_string(), "{agent.status.label()}" }
            Toggle {
                checked: agent.is_active(),
                on_change: move |_: bool| on_toggle.call(id.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AgentStatus;

    #[test]
    fn test_toggle_agent_is_local() {
        let mut agents = catalog::agents();
        toggle_agent(&mut agents, "agent_meta");
        assert_eq!(agents[0].status, AgentStatus::Paused);
        toggle_agent(&mut agents, "agent_website");
        assert_eq!(agent_count(&agents, AgentFilter::Active), 7);

        // catalog is untouched
        assert_eq!(catalog::agents()[0].status, AgentStatus::Active);

        toggle_agent(&mut agents, "missing");
        assert_eq!(agents.len(), 8);
    }
}
