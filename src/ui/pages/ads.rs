// src/ui/pages/ads.rs - Ad accounts and campaign table

use dioxus::prelude::*;

use crate::catalog;
use crate::filter::{ad_totals, campaign_totals, filter_campaigns, CampaignFilter};
use crate::model::{AdAccount, AdPlatform, Campaign};
use crate::ui::{
    components::{status_variant, Badge, Card, ProgressBar, StatCard, TabItem, Tabs},
    pages::PageWrapper,
};
use crate::utils::format::{format_compact, format_currency, format_number, format_percent, format_roas};

fn platform_icon(platform: AdPlatform) -> &'static str {
    match platform {
        AdPlatform::Meta => "📘",
        AdPlatform::Google => "🔍",
    }
}

/// Campaign tabs with per-platform counts
pub fn campaign_tabs(campaigns: &[Campaign]) -> Vec<TabItem> {
    ["all", "meta", "google"]
        .into_iter()
        .map(|id| {
            let label = match id {
                "meta" => "Meta",
                "google" => "Google",
                _ => "All campaigns",
            };
            let count = filter_campaigns(campaigns, &CampaignFilter::from_tab(id)).len();
            TabItem::new(id, label).with_count(count)
        })
        .collect()
}

#[component]
pub fn Ads() -> Element {
    let mut tab = use_signal(|| "all".to_string());

    let accounts = catalog::ad_accounts();
    let all = catalog::campaigns();
    let totals = ad_totals(accounts);
    let visible: Vec<Campaign> = filter_campaigns(all, &CampaignFilter::from_tab(&tab()))
        .into_iter()
        .cloned()
        .collect();
    let visible_totals = campaign_totals(visible.iter());

    rsx! {
        PageWrapper {
            title: "Ads Manager".to_string(),
            subtitle: Some("Meta and Google campaigns managed by your AI agents".to_string()),

            div {
                class: "grid grid-cols-2 lg:grid-cols-4 gap-5",
                StatCard { label: "Total Spend".to_string(), value: format_currency(totals.spend), icon: "💸".to_string() }
                StatCard { label: "Impressions".to_string(), value: format_compact(totals.impressions as f64), icon: "👁".to_string() }
                StatCard { label: "Clicks".to_string(), value: format_number(totals.clicks as f64), icon: "🖱".to_string() }
                StatCard { label: "Conversions".to_string(), value: format_number(totals.conversions as f64), icon: "🎯".to_string() }
            }

            div {
                class: "grid md:grid-cols-2 gap-5",
                for account in accounts.iter().cloned() {
                    AccountCard { key: "{account.id}", account: account }
                }
            }

            Card {
                title: "Campaigns".to_string(),
                subtitle: Some(format!(
                    "{} spent of {} budget, average ROAS {}",
                    format_currency(visible_totals.spent),
                    format_currency(visible_totals.budget),
                    format_roas(visible_totals.average_roas)
                )),

                Tabs {
                    active_tab: tab(),
                    tabs: campaign_tabs(all),
                    on_tab_change: move |id: String| tab.set(id)
                }

                div {
                    class: "mt-4 overflow-x-auto",
                    table {
                        class: "min-w-full divide-y divide-gray-200 text-sm",
                        thead {
                            tr {
                                for heading in ["Campaign", "Status", "Budget", "Spent", "CTR", "CPC", "ROAS"] {
                                    th { key: "{heading}", class: "px-4 py-3 text-left font-medium text-gray-500", "{heading}" }
                                }
                            }
                        }
                        tbody {
                            class: "divide-y divide-gray-100",
                            for campaign in visible {
                                CampaignRow { key: "{campaign.id}", campaign: campaign.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AccountCard(account: AdAccount) -> Element {
    let connection = if account.connected { "Connected" } else { "Disconnected" };
    let connection_variant = if account.connected { "green" } else { "red" };

    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-100 shadow-sm p-5",
            div {
                class: "flex items-center justify-between",
                div {
                    class: "flex items-center",
                    span { class: "text-2xl mr-3", "{platform_icon(account.platform)}" }
                    div {
                        p { class: "font-semibold text-gray-900", "{account.name}" }
                        p { class: "text-xs text-gray-500", "{account.platform} Ads" }
                    }
                }
                Badge { variant: connection_variant.to_string(), "{connection}" }
            }
            div {
                class: "mt-4 grid grid-cols-4 gap-3 text-center",
                div {
                    p { class: "text-xs text-gray-400", "Spend" }
                    p { class: "font-semibold text-gray-900", "{format_currency(account.spend)}" }
                }
                div {
                    p { class: "text-xs text-gray-400", "Impressions" }
                    p { class: "font-semibold text-gray-900", "{format_compact(account.impressions as f64)}" }
                }
                div {
                    p { class: "text-xs text-gray-400", "CTR" }
                    p { class: "font-semibold text-gray-900", "{format_percent(account.ctr())}" }
                }
                div {
                    p { class: "text-xs text-gray-400", "Conversions" }
                    p { class: "font-semibold text-gray-900", "{account.conversions}" }
                }
            }
        }
    }
}

#[component]
fn CampaignRow(campaign: Campaign) -> Element {
    let used = campaign.budget_used_percent();
    let bar = if used >= 90.0 { "bg-red-500" } else { "bg-indigo-600" };

    rsx! {
        tr {
            td {
                class: "px-4 py-3",
                p { class: "font-medium text-gray-900", "{campaign.name}" }
                p { class: "text-xs text-gray-500", "{platform_icon(campaign.platform)} {campaign.platform}" }
            }
            td {
                class: "px-4 py-3",
                Badge { variant: status_variant(campaign.status.label()).to_string(), "{campaign.status.label()}" }
            }
            td { class: "px-4 py-3 text-gray-700", "{format_currency(campaign.budget)}" }
            td {
                class: "px-4 py-3 w-40",
                p { class: "text-gray-700", "{format_currency(campaign.spent)}" }
                ProgressBar { value: used, color: bar.to_string() }
            }
            td { class: "px-4 py-3 text-gray-700", "{format_percent(campaign.ctr)}" }
            td { class: "px-4 py-3 text-gray-700", "{format_currency(campaign.cpc)}" }
            td { class: "px-4 py-3 font-semibold text-gray-900", "{format_roas(campaign.roas)}" }
        }
    }
}
