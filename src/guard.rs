// src/guard.rs - Route guard decisions for protected and onboarding routes

//! Pure functions over [`SessionState`]; the UI re-evaluates them whenever
//! the session snapshot signal changes.

use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not restored yet; render a spinner, never the children
    ShowLoading,
    RedirectLogin,
    RedirectOnboarding,
    /// Only returned for routes the current state may see
    Render,
    RedirectDashboard,
}

impl GuardDecision {
    pub fn renders_children(&self) -> bool {
        matches!(self, Self::Render)
    }

    /// Path to navigate to, if this decision is a redirect
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Self::RedirectLogin => Some("/login"),
            Self::RedirectOnboarding => Some("/onboarding"),
            Self::RedirectDashboard => Some("/dashboard"),
            Self::ShowLoading | Self::Render => None,
        }
    }
}

/// Decision for every `/dashboard` route
pub fn evaluate(state: SessionState) -> GuardDecision {
    match state {
        SessionState::Loading => GuardDecision::ShowLoading,
        SessionState::Anonymous => GuardDecision::RedirectLogin,
        SessionState::Onboarding => GuardDecision::RedirectOnboarding,
        SessionState::Ready => GuardDecision::Render,
    }
}

/// Decision for the onboarding wizard: signed in, not yet onboarded
pub fn evaluate_onboarding(state: SessionState) -> GuardDecision {
    match state {
        SessionState::Loading => GuardDecision::ShowLoading,
        SessionState::Anonymous => GuardDecision::RedirectLogin,
        SessionState::Onboarding => GuardDecision::Render,
        SessionState::Ready => GuardDecision::RedirectDashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SessionConfig, StorageConfig};
    use crate::platform::MemoryStorage;
    use crate::session::SessionManager;
    use std::sync::Arc;

    const ALL_STATES: [SessionState; 4] = [
        SessionState::Loading,
        SessionState::Anonymous,
        SessionState::Onboarding,
        SessionState::Ready,
    ];

    #[test]
    fn test_dashboard_decisions() {
        assert_eq!(evaluate(SessionState::Loading), GuardDecision::ShowLoading);
        assert_eq!(evaluate(SessionState::Anonymous), GuardDecision::RedirectLogin);
        assert_eq!(evaluate(SessionState::Onboarding), GuardDecision::RedirectOnboarding);
        assert_eq!(evaluate(SessionState::Ready), GuardDecision::Render);
    }

    #[test]
    fn test_only_ready_renders_dashboard() {
        for state in ALL_STATES {
            assert_eq!(evaluate(state).renders_children(), state == SessionState::Ready);
        }
    }

    #[test]
    fn test_onboarding_route() {
        assert_eq!(evaluate_onboarding(SessionState::Anonymous).redirect_path(), Some("/login"));
        assert!(evaluate_onboarding(SessionState::Onboarding).renders_children());
        assert_eq!(evaluate_onboarding(SessionState::Ready).redirect_path(), Some("/dashboard"));
        assert_eq!(evaluate_onboarding(SessionState::Loading).redirect_path(), None);
    }

    #[tokio::test]
    async fn test_decision_follows_session() {
        let manager = SessionManager::new(
            Arc::new(MemoryStorage::new()),
            &StorageConfig::default(),
            SessionConfig::instant(),
        );
        assert_eq!(evaluate(manager.state()), GuardDecision::ShowLoading);

        manager.restore();
        assert_eq!(evaluate(manager.state()), GuardDecision::RedirectLogin);

        manager.login_with_google().await.unwrap();
        assert_eq!(evaluate(manager.state()), GuardDecision::RedirectOnboarding);

        manager.complete_onboarding();
        assert_eq!(evaluate(manager.state()), GuardDecision::Render);

        manager.logout();
        assert_eq!(evaluate(manager.state()).redirect_path(), Some("/login"));
    }
}
