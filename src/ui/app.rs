// src/ui/app.rs - Main application component with routing

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{router::Route, state::SessionProvider};

/// Root component: session context around the router.
///
/// Reads an [`AppConfig`](crate::config::AppConfig) from the launch context
/// when one is provided and falls back to defaults otherwise.
#[component]
pub fn App() -> Element {
    rsx! {
        SessionProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, SessionConfig, StorageBackend, StorageConfig};

    fn memory_config() -> AppConfig {
        AppConfig {
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                ..StorageConfig::default()
            },
            session: SessionConfig::instant(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn app_component_renders() {
        let mut vdom = VirtualDom::new(App).with_root_context(memory_config());
        vdom.rebuild_in_place();
    }
}
