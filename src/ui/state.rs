// src/ui/state.rs - Session context shared by every page

use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::error::Result;
use crate::model::{OnboardingProgress, WorkspacePatch};
use crate::session::{SessionManager, SessionSnapshot, SessionState};

/// The manager plus a signal mirroring its latest snapshot.
///
/// Every mutating call goes through this type so the signal is refreshed
/// right after the manager changes; components re-render from the signal.
#[derive(Clone)]
pub struct SessionContext {
    pub manager: Arc<SessionManager>,
    pub snapshot: Signal<SessionSnapshot>,
    /// Set while a sign-in call is pending; used to disable submit buttons
    pub pending: Signal<bool>,
}

impl SessionContext {
    pub fn new(manager: Arc<SessionManager>) -> Self {
        let snapshot = Signal::new(manager.snapshot());
        Self {
            manager,
            snapshot,
            pending: Signal::new(false),
        }
    }

    pub fn state(&self) -> SessionState {
        self.snapshot.read().state
    }

    pub fn refresh(&self) {
        let mut snapshot = self.snapshot;
        snapshot.set(self.manager.snapshot());
    }

    pub fn restore(&self) -> SessionState {
        let state = self.manager.restore();
        self.refresh();
        state
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<bool> {
        let mut pending = self.pending;
        pending.set(true);
        let result = self.manager.login(email, password).await;
        self.settle();
        result
    }

    pub async fn login_with_google(&self) -> Result<bool> {
        let mut pending = self.pending;
        pending.set(true);
        let result = self.manager.login_with_google().await;
        self.settle();
        result
    }

    /// A call rejected by the in-flight guard must not clear `pending`
    /// while the sign-in that holds the guard is still running.
    fn settle(&self) {
        let mut pending = self.pending;
        pending.set(self.manager.is_busy());
        self.refresh();
    }

    pub fn logout(&self) {
        self.manager.logout();
        self.refresh();
    }

    pub fn update_workspace(&self, patch: WorkspacePatch) -> bool {
        let updated = self.manager.update_workspace(patch);
        self.refresh();
        updated
    }

    pub fn complete_onboarding(&self) -> bool {
        let completed = self.manager.complete_onboarding();
        self.refresh();
        completed
    }

    pub fn set_onboarding_step(&self, step: u8) -> OnboardingProgress {
        let progress = self.manager.set_onboarding_step(step);
        self.refresh();
        progress
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.manager, &other.manager)
    }
}

/// Builds the session manager from the launch config (or defaults), provides
/// it as context and restores persisted state after the first render.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let context = use_context_provider(|| {
        let config = try_consume_context::<AppConfig>().unwrap_or_default();
        let manager = Arc::new(SessionManager::from_config(&config));
        tracing::debug!("Session storage backend: {}", manager.storage_backend());
        SessionContext::new(manager)
    });

    use_effect({
        let context = context.clone();
        move || {
            if context.manager.state() == SessionState::Loading {
                context.restore();
            }
        }
    });

    rsx! {
        {children}
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Current snapshot; subscribes the calling component to session changes
pub fn use_snapshot() -> SessionSnapshot {
    let context = use_session();
    let snapshot = context.snapshot.read().clone();
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SessionConfig, StorageConfig};
    use crate::platform::MemoryStorage;
    use crate::error::SessionOperation;

    fn manager() -> Arc<SessionManager> {
        Arc::new(SessionManager::new(
            Arc::new(MemoryStorage::new()),
            &StorageConfig::default(),
            SessionConfig::instant(),
        ))
    }

    #[test]
    fn test_context_mirrors_manager() {
        let mut dom = VirtualDom::new(|| {
            let context = use_hook(|| SessionContext::new(manager()));
            assert_eq!(context.state(), SessionState::Loading);

            context.restore();
            assert_eq!(context.state(), SessionState::Anonymous);

            context.manager.set_onboarding_step(2);
            assert_eq!(context.snapshot.read().onboarding.step, 1);
            context.refresh();
            assert_eq!(context.snapshot.read().onboarding.step, 2);

            rsx! { div {} }
        });
        dom.rebuild_in_place();
    }

    #[test]
    fn test_rejected_overlapping_login_keeps_pending() {
        let mut dom = VirtualDom::new(|| {
            let context = use_hook(|| SessionContext::new(manager()));
            context.restore();
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            {
                let _first = context.manager.begin(SessionOperation::Login).unwrap();
                let second = runtime.block_on(context.login("boss@reon.ai", "reon123"));
                assert!(second.is_err());
                assert!(*context.pending.read());
                assert_eq!(context.state(), SessionState::Anonymous);
            }

            assert!(runtime.block_on(context.login("boss@reon.ai", "reon123")).unwrap());
            assert!(!*context.pending.read());
            assert_eq!(context.state(), SessionState::Ready);

            rsx! { div {} }
        });
        dom.rebuild_in_place();
    }

    #[test]
    fn test_context_equality_by_manager() {
        let mut dom = VirtualDom::new(|| {
            let shared = manager();
            let a = SessionContext::new(shared.clone());
            let b = SessionContext::new(shared);
            let c = SessionContext::new(manager());
            assert!(a == b);
            assert!(a != c);
            rsx! { div {} }
        });
        dom.rebuild_in_place();
    }
}
