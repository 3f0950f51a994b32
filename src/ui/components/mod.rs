// src/ui/components/mod.rs - Reusable UI components

use dioxus::prelude::*;

use crate::utils::format::initials;

pub mod charts;

pub use charts::{BarChart, HorizontalBars, TrendLine};

/// Button component with consistent styling
#[component]
pub fn Button(
    #[props(default = "button".to_string())] button_type: String,
    #[props(default = "primary".to_string())] variant: String,
    #[props(default = "md".to_string())] size: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] loading: bool,
    #[props(default = "".to_string())] class: String,
    #[props(default = None)] onclick: Option<Callback<MouseEvent>>,
    children: Element,
) -> Element {
    let base_classes = "inline-flex items-center justify-center border font-medium rounded-lg focus:outline-none focus:ring-2 focus:ring-offset-2 transition-colors";

    let variant_classes = match variant.as_str() {
        "primary" => "border-transparent text-white bg-indigo-600 hover:bg-indigo-700 focus:ring-indigo-500",
        "secondary" => "border-gray-300 text-gray-700 bg-white hover:bg-gray-50 focus:ring-indigo-500",
        "danger" => "border-transparent text-white bg-red-600 hover:bg-red-700 focus:ring-red-500",
        "ghost" => "border-transparent text-gray-700 hover:bg-gray-100 focus:ring-indigo-500",
        _ => "border-gray-300 text-gray-700 bg-white hover:bg-gray-50 focus:ring-indigo-500",
    };

    let size_classes = match size.as_str() {
        "sm" => "px-3 py-1.5 text-sm",
        "lg" => "px-6 py-3 text-base",
        _ => "px-4 py-2 text-sm",
    };

    let disabled_classes = if disabled || loading {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        button {
            r#type: "{button_type}",
            class: format!("{} {} {} {} {}", base_classes, variant_classes, size_classes, disabled_classes, class),
            disabled: disabled || loading,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },

            if loading {
                Spinner { size: "sm".to_string(), class: "-ml-1 mr-2".to_string() }
            }

            {children}
        }
    }
}

/// Labelled text input bound to a string value
#[component]
pub fn Input(
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] label: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = "".to_string())] class: String,
    #[props(default = None)] oninput: Option<Callback<String>>,
) -> Element {
    let disabled_classes = if disabled { "bg-gray-50 text-gray-500" } else { "" };

    rsx! {
        div {
            class: format!("space-y-1 {}", class),
            if !label.is_empty() {
                label {
                    r#for: "{id}",
                    class: "block text-sm font-medium text-gray-700",
                    "{label}"
                }
            }
            input {
                r#type: "{input_type}",
                id: "{id}",
                placeholder: "{placeholder}",
                value: "{value}",
                required: required,
                disabled: disabled,
                class: format!(
                    "block w-full px-3 py-2 border border-gray-300 rounded-lg shadow-sm focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm {}",
                    disabled_classes
                ),
                oninput: move |evt| {
                    if let Some(handler) = &oninput {
                        handler.call(evt.value());
                    }
                }
            }
        }
    }
}

/// Native select over `(value, label)` options
#[component]
pub fn Select(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] label: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default = None)] onchange: Option<Callback<String>>,
) -> Element {
    rsx! {
        div {
            class: "space-y-1",
            if !label.is_empty() {
                label {
                    r#for: "{id}",
                    class: "block text-sm font-medium text-gray-700",
                    "{label}"
                }
            }
            select {
                id: "{id}",
                class: "block w-full px-3 py-2 border border-gray-300 rounded-lg bg-white sm:text-sm",
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt.value());
                    }
                },
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}

/// Alert/Banner component
#[component]
pub fn Alert(
    #[props(default = "info".to_string())] variant: String,
    #[props(default = "".to_string())] title: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let (colors, icon) = match variant.as_str() {
        "success" => ("bg-green-50 border-green-200 text-green-700", "✅"),
        "warning" => ("bg-yellow-50 border-yellow-200 text-yellow-700", "⚠️"),
        "error" => ("bg-red-50 border-red-200 text-red-700", "❌"),
        _ => ("bg-blue-50 border-blue-200 text-blue-700", "ℹ️"),
    };

    rsx! {
        div {
            class: format!("rounded-lg border p-4 {} {}", colors, class),
            role: "alert",
            div {
                class: "flex",
                span { class: "text-lg mr-3", "{icon}" }
                div {
                    class: "flex-1 text-sm",
                    if !title.is_empty() {
                        h3 { class: "font-medium", "{title}" }
                    }
                    {children}
                }
            }
        }
    }
}

/// Badge component
#[component]
pub fn Badge(
    #[props(default = "gray".to_string())] variant: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let variant_classes = match variant.as_str() {
        "red" => "bg-red-100 text-red-800",
        "yellow" => "bg-yellow-100 text-yellow-800",
        "green" => "bg-green-100 text-green-800",
        "blue" => "bg-blue-100 text-blue-800",
        "indigo" => "bg-indigo-100 text-indigo-800",
        "purple" => "bg-purple-100 text-purple-800",
        _ => "bg-gray-100 text-gray-800",
    };

    rsx! {
        span {
            class: format!("inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {} {}", variant_classes, class),
            {children}
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    #[props(default = "md".to_string())] size: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let size_classes = match size.as_str() {
        "sm" => "h-4 w-4",
        "lg" => "h-8 w-8",
        "xl" => "h-12 w-12",
        _ => "h-6 w-6",
    };

    rsx! {
        svg {
            class: format!("animate-spin {} {}", size_classes, class),
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            circle {
                class: "opacity-25",
                cx: "12",
                cy: "12",
                r: "10",
                stroke: "currentColor",
                stroke_width: "4"
            }
            path {
                class: "opacity-75",
                fill: "currentColor",
                d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            }
        }
    }
}

/// Centered spinner used while the session restores or a redirect runs
#[component]
pub fn FullPageSpinner(#[props(default = "".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center bg-gray-50",
            Spinner { size: "xl".to_string(), class: "text-indigo-600".to_string() }
            if !message.is_empty() {
                p { class: "mt-4 text-gray-600", "{message}" }
            }
        }
    }
}

/// Card component
#[component]
pub fn Card(
    #[props(default = "".to_string())] title: String,
    #[props(default = None)] subtitle: Option<String>,
    #[props(default = None)] actions: Option<Element>,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: format!("bg-white shadow-sm border border-gray-100 rounded-xl {}", class),

            if !title.is_empty() || actions.is_some() {
                div {
                    class: "px-5 py-4 border-b border-gray-100 flex items-center justify-between",
                    div {
                        h3 { class: "text-base font-semibold text-gray-900", "{title}" }
                        if let Some(sub) = subtitle {
                            p { class: "mt-1 text-sm text-gray-500", "{sub}" }
                        }
                    }
                    if let Some(actions_el) = actions {
                        div { class: "flex space-x-3", {actions_el} }
                    }
                }
            }

            div {
                class: "p-5",
                {children}
            }
        }
    }
}

/// Headline number with an optional signed change
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default = None)] change: Option<f64>,
    #[props(default = "".to_string())] icon: String,
) -> Element {
    let change_class = match change {
        Some(c) if c < 0.0 => "mt-1 text-sm text-red-600",
        _ => "mt-1 text-sm text-green-600",
    };

    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-100 shadow-sm p-5",
            div {
                class: "flex items-center justify-between",
                p { class: "text-sm text-gray-500", "{label}" }
                if !icon.is_empty() {
                    span { class: "text-xl", "{icon}" }
                }
            }
            p { class: "mt-2 text-2xl font-bold text-gray-900", "{value}" }
            if let Some(change) = change {
                p {
                    class: change_class,
                    {crate::utils::format::format_change(change)}
                }
            }
        }
    }
}

/// Tab item data structure
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    pub count: Option<usize>,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Tabs component
#[component]
pub fn Tabs(
    active_tab: String,
    tabs: Vec<TabItem>,
    #[props(default = None)] on_tab_change: Option<Callback<String>>,
    #[props(default = "".to_string())] class: String,
) -> Element {
    rsx! {
        div {
            class: format!("border-b border-gray-200 {}", class),
            nav {
                class: "-mb-px flex space-x-6 overflow-x-auto",
                for tab in tabs {
                    button {
                        key: "{tab.id}",
                        r#type: "button",
                        class: format!(
                            "py-2 px-1 border-b-2 font-medium text-sm whitespace-nowrap {}",
                            if active_tab == tab.id {
                                "border-indigo-500 text-indigo-600"
                            } else {
                                "border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300"
                            }
                        ),
                        onclick: move |_| {
                            if let Some(handler) = &on_tab_change {
                                handler.call(tab.id.clone());
                            }
                        },
                        "{tab.label}"
                        if let Some(count) = tab.count {
                            span {
                                class: "ml-2 inline-flex items-center px-2 py-0.5 rounded-full text-xs bg-gray-100 text-gray-900",
                                "{count}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Toggle/Switch component
#[component]
pub fn Toggle(
    #[props(default = false)] checked: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = None)] on_change: Option<Callback<bool>>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            role: "switch",
            aria_checked: "{checked}",
            class: format!(
                "relative inline-flex h-6 w-11 flex-shrink-0 cursor-pointer rounded-full border-2 border-transparent transition-colors duration-200 {} {}",
                if checked { "bg-indigo-600" } else { "bg-gray-200" },
                if disabled { "opacity-50 cursor-not-allowed" } else { "" }
            ),
            disabled: disabled,
            onclick: move |_| {
                if !disabled {
                    if let Some(handler) = &on_change {
                        handler.call(!checked);
                    }
                }
            },
            span {
                class: format!(
                    "pointer-events-none inline-block h-5 w-5 transform rounded-full bg-white shadow transition duration-200 {}",
                    if checked { "translate-x-5" } else { "translate-x-0" }
                )
            }
        }
    }
}

/// Horizontal progress bar; `value` is a percentage and is clamped
#[component]
pub fn ProgressBar(
    value: f64,
    #[props(default = "bg-indigo-600".to_string())] color: String,
) -> Element {
    let width = value.clamp(0.0, 100.0);

    rsx! {
        div {
            class: "w-full bg-gray-100 rounded-full h-2",
            div {
                class: format!("{} h-2 rounded-full", color),
                style: "width: {width}%"
            }
        }
    }
}

#[component]
pub fn Avatar(name: String, #[props(default = None)] src: Option<String>) -> Element {
    match src {
        Some(src) => rsx! {
            img { class: "h-9 w-9 rounded-full", src: "{src}", alt: "{name}" }
        },
        None => rsx! {
            div {
                class: "h-9 w-9 rounded-full bg-indigo-100 text-indigo-700 flex items-center justify-center text-sm font-semibold",
                "{initials(&name)}"
            }
        },
    }
}

/// Badge color for a status label such as "Active" or "Paused"
pub fn status_variant(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "active" | "success" | "delivered" | "connected" => "green",
        "paused" | "pending" | "processing" => "yellow",
        "error" | "failed" | "cancelled" => "red",
        "completed" | "shipped" => "blue",
        _ => "gray",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_component() {
        let _button = rsx! {
            Button {
                variant: "primary".to_string(),
                "Click me"
            }
        };
    }

    #[test]
    fn test_input_component() {
        let _input = rsx! {
            Input {
                input_type: "email".to_string(),
                label: "Email".to_string(),
                placeholder: "boss@reon.ai".to_string()
            }
        };
    }

    #[test]
    fn test_stat_card_component() {
        let _card = rsx! {
            StatCard {
                label: "Revenue".to_string(),
                value: "$5.2K".to_string(),
                change: Some(12.5)
            }
        };
    }

    #[test]
    fn test_tab_item() {
        let tab = TabItem::new("vip", "VIP").with_count(3);
        assert_eq!(tab.id, "vip");
        assert_eq!(tab.count, Some(3));
    }

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("Active"), "green");
        assert_eq!(status_variant("paused"), "yellow");
        assert_eq!(status_variant("failed"), "red");
        assert_eq!(status_variant("unknown"), "gray");
    }
}
