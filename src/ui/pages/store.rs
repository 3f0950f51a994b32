// src/ui/pages/store.rs - Connected store summary

use dioxus::prelude::*;

use crate::catalog::{
    self,
    content::{LowStockItem, LOW_STOCK, RECENT_ORDERS},
};
use crate::model::Store as StoreRecord;
use crate::ui::{
    components::{status_variant, Badge, Button, Card, StatCard},
    pages::PageWrapper,
};
use crate::utils::format::{format_currency, format_number};

/// Below this many units an item is flagged as critical
const CRITICAL_STOCK: u32 = 3;

pub fn average_order_value(store: &StoreRecord) -> f64 {
    if store.orders_today == 0 {
        0.0
    } else {
        store.revenue / f64::from(store.orders_today)
    }
}

pub fn is_critical(item: &LowStockItem) -> bool {
    item.stock < CRITICAL_STOCK
}

fn stock_variant(item: &LowStockItem) -> &'static str {
    if is_critical(item) {
        "red"
    } else {
        "yellow"
    }
}

#[component]
pub fn Store() -> Element {
    let store = catalog::store();
    let (connection, connection_variant) = if store.connected {
        ("Connected", "green")
    } else {
        ("Disconnected", "red")
    };

    rsx! {
        PageWrapper {
            title: "Store".to_string(),
            subtitle: Some(format!("{} on {}", store.name, store.platform.label())),
            actions: Some(rsx! {
                Badge { variant: connection_variant.to_string(), "{connection}" }
            }),

            div {
                class: "grid grid-cols-2 lg:grid-cols-4 gap-5",
                StatCard { label: "Revenue Today".to_string(), value: format_currency(store.revenue), icon: "💰".to_string() }
                StatCard { label: "Orders Today".to_string(), value: store.orders_today.to_string(), icon: "📦".to_string() }
                StatCard { label: "Products".to_string(), value: format_number(f64::from(store.products_count)), icon: "🏷".to_string() }
                StatCard { label: "Avg. Order Value".to_string(), value: format_currency(average_order_value(store)), icon: "🧾".to_string() }
            }

            div {
                class: "grid lg:grid-cols-3 gap-5",
                Card {
                    title: "Recent Orders".to_string(),
                    class: "lg:col-span-2".to_string(),
                    ul {
                        class: "divide-y divide-gray-100",
                        for order in RECENT_ORDERS {
                            li {
                                key: "{order.id}",
                                class: "py-3 flex items-center justify-between",
                                div {
                                    p { class: "text-sm font-medium text-gray-900", "{order.id} · {order.customer}" }
                                    p { class: "text-xs text-gray-500", "{order.time}" }
                                }
                                div {
                                    class: "flex items-center space-x-3",
                                    span { class: "text-sm font-semibold text-gray-900", "{format_currency(order.amount)}" }
                                    Badge { variant: status_variant(order.status).to_string(), class: "capitalize".to_string(), "{order.status}" }
                                }
                            }
                        }
                    }
                }
                Card {
                    title: "Low Stock".to_string(),
                    ul {
                        class: "space-y-3",
                        for item in LOW_STOCK {
                            li {
                                key: "{item.sku}",
                                class: "flex items-center justify-between",
                                div {
                                    p { class: "text-sm font-medium text-gray-900", "{item.name}" }
                                    p { class: "text-xs text-gray-500 font-mono", "{item.sku}" }
                                }
                                Badge {
                                    variant: stock_variant(&item).to_string(),
                                    "{item.stock} left"
                                }
                            }
                        }
                    }
                }
            }

            Card {
                title: "Store connection".to_string(),
                div {
                    class: "flex items-center justify-between",
                    div {
                        p { class: "text-sm font-medium text-gray-900", "{store.url}" }
                        p { class: "text-xs text-gray-500", "Orders and inventory sync every 15 minutes" }
                    }
                    Button { variant: "secondary".to_string(), size: "sm".to_string(), "Sync now" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_order_value() {
        let store = catalog::store();
        let aov = average_order_value(store);
        assert!((aov - 8432.0 / 47.0).abs() < 1e-9);

        let empty = StoreRecord {
            orders_today: 0,
            ..store.clone()
        };
        assert_eq!(average_order_value(&empty), 0.0);
    }

    #[test]
    fn test_critical_stock() {
        let critical: Vec<&str> = LOW_STOCK.iter().filter(|i| is_critical(i)).map(|i| i.sku).collect();
        assert_eq!(critical, vec!["LB-B-015"]);
    }
}
