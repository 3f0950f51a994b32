// src/ui/pages/analytics.rs - Traffic, behavior and conversion views

use dioxus::prelude::*;

use crate::catalog::{
    self,
    content::{ANALYTICS_TABS, BEHAVIOR_STATS, CONVERSION_FUNNEL, TIME_RANGES, TOP_LANDING_PAGES},
};
use crate::model::PerformancePoint;
use crate::ui::{
    components::{Card, HorizontalBars, ProgressBar, StatCard, TabItem, Tabs, TrendLine},
    pages::PageWrapper,
};
use crate::utils::format::{format_compact, format_number, format_percent, format_roas};

const SELECTED_RANGE: &str = "px-3 py-1.5 text-sm bg-indigo-600 text-white";
const IDLE_RANGE: &str = "px-3 py-1.5 text-sm text-gray-600 hover:bg-gray-50";

/// Mean of one metric across the trend, 0 when empty
pub fn trend_average(points: &[PerformancePoint], metric: fn(&PerformancePoint) -> f64) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(metric).sum::<f64>() / points.len() as f64
}

fn range_class(range: &str, selected: &str) -> &'static str {
    if range == selected {
        SELECTED_RANGE
    } else {
        IDLE_RANGE
    }
}

#[component]
pub fn Analytics() -> Element {
    let mut tab = use_signal(|| ANALYTICS_TABS[0].0.to_string());
    let mut range = use_signal(|| TIME_RANGES[0].0.to_string());

    let tabs: Vec<TabItem> = ANALYTICS_TABS.iter().map(|(id, label)| TabItem::new(*id, *label)).collect();
    let selected_range = range();

    let body = match tab().as_str() {
        "acquisition" => rsx! { Acquisition {} },
        "behavior" => rsx! { Behavior {} },
        "conversions" => rsx! { Conversions {} },
        _ => rsx! { Performance {} },
    };

    rsx! {
        PageWrapper {
            title: "Analytics".to_string(),
            subtitle: Some("Insights compiled by the Analytics agent".to_string()),
            actions: Some(rsx! {
                div {
                    class: "inline-flex rounded-lg border border-gray-200 overflow-hidden",
                    for (id, label) in TIME_RANGES {
                        button {
                            key: "{id}",
                            class: range_class(id, &selected_range),
                            onclick: move |_| range.set(id.to_string()),
                            "{label}"
                        }
                    }
                }
            }),

            Tabs {
                active_tab: tab(),
                tabs: tabs,
                on_tab_change: move |id: String| tab.set(id)
            }

            {body}
        }
    }
}

#[component]
fn Performance() -> Element {
    let trend = catalog::performance_trend();
    let metrics = catalog::dashboard_metrics();

    rsx! {
        div {
            class: "grid grid-cols-2 lg:grid-cols-4 gap-5",
            StatCard { label: "Visitors".to_string(), value: format_compact(f64::from(metrics.visitors)), icon: "👀".to_string() }
            StatCard { label: "Avg. ROAS".to_string(), value: format_roas(trend_average(trend, |p| p.roas)) }
            StatCard { label: "Avg. CTR".to_string(), value: format_percent(trend_average(trend, |p| p.ctr)) }
            StatCard { label: "Avg. CVR".to_string(), value: format_percent(trend_average(trend, |p| p.cvr)) }
        }
        div {
            class: "grid lg:grid-cols-3 gap-5",
            TrendCard { title: "ROAS".to_string(), values: trend.iter().map(|p| p.roas).collect::<Vec<_>>(), color: "#6366f1".to_string() }
            TrendCard { title: "CTR".to_string(), values: trend.iter().map(|p| p.ctr).collect::<Vec<_>>(), color: "#10b981".to_string() }
            TrendCard { title: "Conversion rate".to_string(), values: trend.iter().map(|p| p.cvr).collect::<Vec<_>>(), color: "#f59e0b".to_string() }
        }
    }
}

#[component]
fn TrendCard(title: String, values: Vec<f64>, color: String) -> Element {
    let last = values.last().copied().unwrap_or_default();
    rsx! {
        Card {
            title: title,
            subtitle: Some(format!("Latest {}", format_number(last))),
            TrendLine { values: values, color: color }
        }
    }
}

#[component]
fn Acquisition() -> Element {
    let rows: Vec<(String, f64, String)> = catalog::traffic_sources()
        .iter()
        .map(|t| (t.name.clone(), t.value, t.color.clone()))
        .collect();

    rsx! {
        div {
            class: "grid lg:grid-cols-2 gap-5",
            Card {
                title: "Traffic Sources".to_string(),
                HorizontalBars { rows: rows }
            }
            Card {
                title: "Top Landing Pages".to_string(),
                table {
                    class: "min-w-full text-sm",
                    thead {
                        tr {
                            th { class: "py-2 text-left font-medium text-gray-500", "Page" }
                            th { class: "py-2 text-right font-medium text-gray-500", "Sessions" }
                            th { class: "py-2 text-right font-medium text-gray-500", "Bounce" }
                        }
                    }
                    tbody {
                        for (page, sessions, bounce) in TOP_LANDING_PAGES {
                            tr {
                                key: "{page}",
                                td { class: "py-2 font-mono text-gray-700", "{page}" }
                                td { class: "py-2 text-right text-gray-900", "{format_number(f64::from(sessions))}" }
                                td { class: "py-2 text-right text-gray-500", "{bounce}%" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Behavior() -> Element {
    rsx! {
        div {
            class: "grid grid-cols-2 lg:grid-cols-4 gap-5",
            for (title, value) in BEHAVIOR_STATS {
                StatCard { key: "{title}", label: title.to_string(), value: value.to_string() }
            }
        }
    }
}

#[component]
fn Conversions() -> Element {
    rsx! {
        Card {
            title: "Conversion Funnel".to_string(),
            div {
                class: "space-y-4",
                for (step, count, rate) in CONVERSION_FUNNEL {
                    div {
                        key: "{step}",
                        div {
                            class: "flex justify-between text-sm mb-1",
                            span { class: "text-gray-700", "{step}" }
                            span { class: "text-gray-500", "{format_number(f64::from(count))} · {rate}%" }
                        }
                        ProgressBar { value: f64::from(rate) }
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
    fn test_trend_average() {
        let points = vec![
            PerformancePoint { date: "01/01".to_string(), roas: 2.0, ctr: 1.0, cvr: 3.0 },
            PerformancePoint { date: "01/02".to_string(), roas: 4.0, ctr: 3.0, cvr: 3.0 },
        ];
        assert_eq!(trend_average(&points, |p| p.roas), 3.0);
        assert_eq!(trend_average(&points, |p| p.ctr), 2.0);
        assert_eq!(trend_average(&[], |p| p.cvr), 0.0);
    }

    #[test]
    fn test_funnel_is_monotonic() {
        for pair in CONVERSION_FUNNEL.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
            assert!(pair[0].2 >= pair[1].2);
        }
    }

    #[test]
    fn test_range_highlight() {
        assert_eq!(range_class("7d", "7d"), SELECTED_RANGE);
        assert_eq!(range_class("30d", "7d"), IDLE_RANGE);
    }
}
