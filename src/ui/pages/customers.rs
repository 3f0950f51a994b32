// src/ui/pages/customers.rs - Customer list with segment tabs and search

use dioxus::prelude::*;

use crate::catalog;
use crate::filter::{customer_totals, filter_customers, segment_count, CustomerFilter};
use crate::model::{Customer, Segment};
use crate::ui::{
    components::{Avatar, Badge, Card, Input, StatCard, TabItem, Tabs},
    pages::PageWrapper,
};
use crate::utils::format::{format_currency, format_date};

fn segment_variant(segment: Segment) -> &'static str {
    match segment {
        Segment::New => "blue",
        Segment::Returning => "green",
        Segment::Vip => "purple",
        Segment::AtRisk => "red",
    }
}

/// "all" plus one tab per segment, each with its head count
pub fn segment_tabs(customers: &[Customer]) -> Vec<TabItem> {
    std::iter::once(TabItem::new("all", "All").with_count(segment_count(customers, None)))
        .chain(Segment::ALL.into_iter().map(|segment| {
            TabItem::new(segment.slug(), segment.label()).with_count(segment_count(customers, Some(segment)))
        }))
        .collect()
}

#[component]
pub fn Customers() -> Element {
    let mut tab = use_signal(|| "all".to_string());
    let mut query = use_signal(String::new);

    let all = catalog::customers();
    let filter = CustomerFilter::new(Segment::from_slug(&tab()), query());
    let visible: Vec<Customer> = filter_customers(all, &filter).into_iter().cloned().collect();
    let totals = customer_totals(all.iter());

    rsx! {
        PageWrapper {
            title: "Customers".to_string(),
            subtitle: Some("Segments kept up to date by the Email & CRM agent".to_string()),

            div {
                class: "grid grid-cols-2 lg:grid-cols-4 gap-5",
                StatCard { label: "Customers".to_string(), value: totals.customers.to_string(), icon: "👥".to_string() }
                StatCard { label: "Revenue".to_string(), value: format_currency(totals.revenue), icon: "💰".to_string() }
                StatCard { label: "Orders".to_string(), value: totals.orders.to_string(), icon: "🛒".to_string() }
                StatCard { label: "Avg. Lifetime Value".to_string(), value: format_currency(totals.average_lifetime_value), icon: "⭐".to_string() }
            }

            Card {
                div {
                    class: "flex flex-col md:flex-row md:items-end md:justify-between gap-4",
                    Tabs {
                        active_tab: tab(),
                        tabs: segment_tabs(all),
                        on_tab_change: move |id: String| tab.set(id)
                    }
                    Input {
                        id: "customer-search".to_string(),
                        placeholder: "Search by name or email".to_string(),
                        value: query(),
                        class: "md:w-72".to_string(),
                        oninput: move |value: String| query.set(value)
                    }
                }

                if visible.is_empty() {
                    p { class: "py-12 text-center text-sm text-gray-500", "No customers match your filters" }
                } else {
                    div {
                        class: "mt-4 overflow-x-auto",
                        table {
                            class: "min-w-full divide-y divide-gray-200 text-sm",
                            thead {
                                tr {
                                    for heading in ["Customer", "Segment", "Orders", "Total Spent", "Avg. Order", "Last Order"] {
                                        th { key: "{heading}", class: "px-4 py-3 text-left font-medium text-gray-500", "{heading}" }
                                    }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-100",
                                for customer in visible {
                                    tr {
                                        key: "{customer.id}",
                                        td {
                                            class: "px-4 py-3",
                                            div {
                                                class: "flex items-center",
                                                Avatar { name: customer.name.clone() }
                                                div {
                                                    class: "ml-3",
                                                    p { class: "font-medium text-gray-900", "{customer.name}" }
                                                    p { class: "text-xs text-gray-500", "{customer.email}" }
                                                }
                                            }
                                        }
                                        td {
                                            class: "px-4 py-3",
                                            Badge { variant: segment_variant(customer.segment).to_string(), "{customer.segment.label()}" }
                                        }
                                        td { class: "px-4 py-3 text-gray-700", "{customer.orders}" }
                                        td { class: "px-4 py-3 text-gray-700", "{format_currency(customer.total_spent)}" }
                                        td { class: "px-4 py-3 text-gray-700", "{format_currency(customer.average_order_value())}" }
                                        td { class: "px-4 py-3 text-gray-500", "{format_date(customer.last_order)}" }
                                    }
                                }
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
    fn test_segment_tabs_cover_everyone() {
        let customers = catalog::customers();
        let tabs = segment_tabs(customers);
        assert_eq!(tabs.len(), Segment::ALL.len() + 1);
        assert_eq!(tabs[0].count, Some(customers.len()));

        let per_segment: usize = tabs[1..].iter().filter_map(|t| t.count).sum();
        assert_eq!(per_segment, customers.len());
        assert_eq!(tabs[4].id, "at-risk");
    }

    #[test]
    fn test_all_tab_maps_to_no_segment() {
        assert_eq!(Segment::from_slug("all"), None);
        let filter = CustomerFilter::new(Segment::from_slug("all"), "");
        assert_eq!(filter_customers(catalog::customers(), &filter).len(), catalog::customers().len());
    }
}
