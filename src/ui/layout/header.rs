// src/ui/layout/header.rs - Dashboard top bar with page title and greeting

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{
    components::{Avatar, Badge},
    router::{nav, Route},
    state::use_snapshot,
};

#[component]
pub fn Header(on_menu_toggle: EventHandler<()>) -> Element {
    let route = use_route::<Route>();
    let snapshot = use_snapshot();

    let first_name = snapshot
        .user
        .as_ref()
        .map(|u| u.first_name().to_string())
        .unwrap_or_default();
    let brand = snapshot
        .workspace
        .as_ref()
        .map(|w| w.brand_name.clone())
        .unwrap_or_default();

    rsx! {
        header {
            class: "sticky top-0 z-30 flex items-center justify-between h-16 px-4 sm:px-6 lg:px-8 bg-white border-b border-gray-200",
            div {
                class: "flex items-center",
                button {
                    r#type: "button",
                    class: "mr-3 p-2 rounded-md text-gray-400 hover:text-gray-500 hover:bg-gray-100 lg:hidden",
                    onclick: move |_| on_menu_toggle.call(()),
                    span { class: "sr-only", "Open main menu" }
                    svg {
                        class: "h-6 w-6",
                        xmlns: "http://www.w3.org/2000/svg",
                        fill: "none",
                        view_box: "0 0 24 24",
                        stroke: "currentColor",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M4 6h16M4 12h16M4 18h16"
                        }
                    }
                }
                h1 { class: "text-lg font-semibold text-gray-900", "{nav::route_title(&route)}" }
            }
            div {
                class: "flex items-center space-x-4",
                if !brand.is_empty() {
                    Badge { variant: "indigo".to_string(), "{brand}" }
                }
                Badge { variant: "green".to_string(), "AI agents running" }
                span { class: "hidden sm:block text-sm text-gray-600", "Hi, {first_name}" }
                Avatar { name: first_name.clone() }
            }
        }
    }
}
