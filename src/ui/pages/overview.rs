// src/ui/pages/overview.rs - Dashboard home

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::catalog;
use crate::filter::{campaign_preview, recent_actions};
use crate::ui::{
    components::{status_variant, Badge, BarChart, Card, HorizontalBars, StatCard},
    pages::{agents::toggle_agent, AgentCard, PageWrapper},
    router::Route,
    state::use_snapshot,
};
use crate::utils::{
    format::{format_compact, format_currency, format_percent, format_relative_time, format_roas},
    Time,
};

const RECENT_ACTION_LIMIT: usize = 5;
const CAMPAIGN_PREVIEW_LIMIT: usize = 5;

#[component]
pub fn Overview() -> Element {
    let snapshot = use_snapshot();
    let mut agents = use_signal(catalog::agents);

    let metrics = catalog::dashboard_metrics();
    let series = catalog::revenue_series();
    let traffic: Vec<(String, f64, String)> = catalog::traffic_sources()
        .iter()
        .map(|t| (t.name.clone(), t.value, t.color.clone()))
        .collect();

    let all_agents = agents.read().clone();
    let now = Time::now();
    let recent: Vec<(String, String, String, String)> = recent_actions(&all_agents, RECENT_ACTION_LIMIT)
        .into_iter()
        .map(|(agent, action)| {
            (
                action.id.clone(),
                format!("{} {}", agent.icon, agent.name),
                action.action.clone(),
                format_relative_time(action.timestamp, now),
            )
        })
        .collect();
    let campaigns = campaign_preview(catalog::campaigns(), CAMPAIGN_PREVIEW_LIMIT);

    let greeting = snapshot
        .user
        .as_ref()
        .map(|u| format!("Welcome back, {}", u.first_name()))
        .unwrap_or_else(|| "Welcome back".to_string());

    rsx! {
        PageWrapper {
            title: greeting,
            subtitle: Some("Here's what your AI team did today".to_string()),

            div {
                class: "grid grid-cols-2 lg:grid-cols-4 gap-5",
                StatCard { label: "Revenue".to_string(), value: format_currency(metrics.revenue), change: Some(12.5), icon: "💰".to_string() }
                StatCard { label: "Ad Spend Today".to_string(), value: format_currency(metrics.today_spend), icon: "📣".to_string() }
                StatCard { label: "ROAS".to_string(), value: format_roas(metrics.roas), change: Some(8.2), icon: "📈".to_string() }
                StatCard { label: "Orders".to_string(), value: metrics.orders.to_string(), change: Some(5.1), icon: "🛒".to_string() }
                StatCard { label: "Active Campaigns".to_string(), value: metrics.active_campaigns.to_string() }
                StatCard { label: "AI Actions Today".to_string(), value: metrics.ai_actions_today.to_string() }
                StatCard { label: "Visitors".to_string(), value: format_compact(f64::from(metrics.visitors)) }
                StatCard { label: "Conversion Rate".to_string(), value: format_percent(metrics.conversion_rate) }
            }

            div {
                class: "grid lg:grid-cols-3 gap-5",
                Card {
                    title: "Revenue vs Ad Spend".to_string(),
                    class: "lg:col-span-2".to_string(),
                    BarChart {
                        labels: series.iter().map(|p| p.day.clone()).collect::<Vec<_>>(),
                        primary: series.iter().map(|p| p.revenue).collect::<Vec<_>>(),
                        secondary: series.iter().map(|p| p.spend).collect::<Vec<_>>()
                    }
                }
                Card {
                    title: "Traffic Sources".to_string(),
                    HorizontalBars { rows: traffic }
                }
            }

            div {
                class: "space-y-4",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "text-lg font-semibold text-gray-900", "Your AI Team" }
                    Link { to: Route::Agents {}, class: "text-sm text-indigo-600 hover:text-indigo-500", "View all" }
                }
                div {
                    class: "grid sm:grid-cols-2 xl:grid-cols-4 gap-5",
                    for agent in all_agents {
                        AgentCard {
                            key: "{agent.id}",
                            agent: agent.clone(),
                            on_toggle: move |id: String| toggle_agent(&mut agents.write(), &id)
                        }
                    }
                }
            }

            div {
                class: "grid lg:grid-cols-2 gap-5",
                Card {
                    title: "Recent AI Actions".to_string(),
                    ul {
                        class: "divide-y divide-gray-100",
                        for (id, agent, action, when) in recent {
                            li {
                                key: "{id}",
                                class: "py-3",
                                p { class: "text-sm font-medium text-gray-900", "{action}" }
                                p { class: "text-xs text-gray-500", "{agent} · {when}" }
                            }
                        }
                    }
                }
                Card {
                    title: "Active Campaigns".to_string(),
                    ul {
                        class: "divide-y divide-gray-100",
                        for campaign in campaigns {
                            li {
                                key: "{campaign.id}",
                                class: "py-3 flex items-center justify-between",
                                div {
                                    p { class: "text-sm font-medium text-gray-900", "{campaign.name}" }
                                    p { class: "text-xs text-gray-500", "{campaign.platform} · {format_currency(campaign.spent)} spent" }
                                }
                                div {
                                    class: "text-right",
                                    p { class: "text-sm font-semibold text-gray-900", "{format_roas(campaign.roas)}" }
                                    Badge { variant: status_variant(campaign.status.label()).to_string(), "{campaign.status.label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
