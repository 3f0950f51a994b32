// src/session/mod.rs - Client-side session and workspace lifecycle

//! The session manager owns the signed-in user and their workspace, persists
//! both as JSON snapshots in a [`StorageProvider`](crate::platform::StorageProvider)
//! and restores them on startup.
//!
//! ```text
//! Loading ──restore──► Anonymous ──login──► Onboarding ──complete──► Ready
//!                   └──────────────────────────┴──────────────────────┘
//!                                   logout ──► Anonymous
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::catalog;
use crate::config::{AppConfig, SessionConfig, StorageConfig};
use crate::error::{Error, Result, SessionOperation};
use crate::model::{OnboardingProgress, User, Workspace, WorkspacePatch};
use crate::platform::{self, StorageArc};
use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Persisted state not consulted yet
    Loading,
    Anonymous,
    /// Signed in, workspace onboarding not finished
    Onboarding,
    /// Signed in with a fully onboarded workspace
    Ready,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Onboarding | Self::Ready)
    }

    fn for_workspace(workspace: &Workspace) -> Self {
        if workspace.onboarding_completed {
            Self::Ready
        } else {
            Self::Onboarding
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Loading => "loading",
            Self::Anonymous => "anonymous",
            Self::Onboarding => "authenticated-onboarding",
            Self::Ready => "authenticated-ready",
        };
        f.write_str(name)
    }
}

/// Point-in-time copy of everything the UI renders from the session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub user: Option<User>,
    pub workspace: Option<Workspace>,
    pub onboarding: OnboardingProgress,
}

impl SessionSnapshot {
    pub fn loading() -> Self {
        Self {
            state: SessionState::Loading,
            user: None,
            workspace: None,
            onboarding: OnboardingProgress::default(),
        }
    }

    fn anonymous() -> Self {
        Self {
            state: SessionState::Anonymous,
            ..Self::loading()
        }
    }

    fn signed_in(user: User, workspace: Workspace, onboarding: OnboardingProgress) -> Self {
        Self {
            state: SessionState::for_workspace(&workspace),
            user: Some(user),
            workspace: Some(workspace),
            onboarding,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Restored(SessionState),
    LoggedIn { email: String, state: SessionState },
    LoggedOut,
    WorkspaceUpdated,
    OnboardingCompleted,
}

/// The four keys a session owns in storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub user: String,
    pub workspace: String,
    pub auth: String,
    pub onboarding: String,
}

impl StorageKeys {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            user: config.key("user"),
            workspace: config.key("workspace"),
            auth: config.key("auth"),
            onboarding: config.key("onboarding"),
        }
    }

    pub fn all(&self) -> [&str; 4] {
        [&self.user, &self.workspace, &self.auth, &self.onboarding]
    }
}

/// Outcome of reading one persisted snapshot
enum Stored<T> {
    Missing,
    Valid(T),
    Malformed(String),
}

pub struct SessionManager {
    storage: StorageArc,
    keys: StorageKeys,
    config: SessionConfig,
    state: RwLock<SessionSnapshot>,
    in_flight: AtomicBool,
    events: broadcast::Sender<SessionEvent>,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("backend", &self.storage.backend_name())
            .field("keys", &self.keys)
            .field("state", &self.state.read().state)
            .finish()
    }
}

/// Clears the in-flight flag when a sign-in call finishes or is dropped
pub(crate) struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SessionManager {
    pub fn new(storage: StorageArc, storage_config: &StorageConfig, config: SessionConfig) -> Self {
        let (events, _) = broadcast::channel(32);

        Self {
            storage,
            keys: StorageKeys::new(storage_config),
            config,
            state: RwLock::new(SessionSnapshot::loading()),
            in_flight: AtomicBool::new(false),
            events,
        }
    }

    /// Opens the configured storage backend and builds a manager over it
    pub fn from_config(config: &AppConfig) -> Self {
        let storage = platform::create_storage(&config.storage);
        Self::new(storage, &config.storage, config.session.clone())
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Cosmetic delays the UI reuses for its own simulated steps
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn storage_backend(&self) -> &'static str {
        self.storage.backend_name()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.read().clone()
    }

    pub fn state(&self) -> SessionState {
        self.state.read().state
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn workspace(&self) -> Option<Workspace> {
        self.state.read().workspace.clone()
    }

    /// Whether a sign-in call is pending
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Reads persisted state and leaves `Loading`. Safe to call again to
    /// simulate a reload.
    pub fn restore(&self) -> SessionState {
        let snapshot = self.read_persisted();
        let state = snapshot.state;
        *self.state.write() = snapshot;

        tracing::debug!("Session restored as {}", state);
        self.emit(SessionEvent::Restored(state));
        state
    }

    fn read_persisted(&self) -> SessionSnapshot {
        match self.read_key::<bool>(&self.keys.auth) {
            Stored::Valid(true) => {}
            Stored::Malformed(reason) => {
                tracing::warn!("Ignoring malformed auth flag: {}", reason);
                return SessionSnapshot::anonymous();
            }
            Stored::Valid(false) | Stored::Missing => return SessionSnapshot::anonymous(),
        }

        let user = match self.read_key::<User>(&self.keys.user) {
            Stored::Valid(user) => match user.validate() {
                Ok(()) => user,
                Err(e) => return self.discard_session(&e.to_string()),
            },
            Stored::Missing => catalog::mock_user(),
            Stored::Malformed(reason) => return self.discard_session(&reason),
        };

        let workspace = match self.read_key::<Workspace>(&self.keys.workspace) {
            Stored::Valid(workspace) => match workspace.validate() {
                Ok(()) => workspace,
                Err(e) => return self.discard_session(&e.to_string()),
            },
            Stored::Missing => catalog::mock_workspace(),
            Stored::Malformed(reason) => return self.discard_session(&reason),
        };

        let onboarding = match self.read_key::<OnboardingProgress>(&self.keys.onboarding) {
            Stored::Valid(progress) => OnboardingProgress::new(progress.step),
            Stored::Missing => OnboardingProgress::default(),
            Stored::Malformed(reason) => {
                tracing::warn!("Resetting malformed onboarding progress: {}", reason);
                OnboardingProgress::default()
            }
        };

        SessionSnapshot::signed_in(user, workspace, onboarding)
    }

    fn discard_session(&self, reason: &str) -> SessionSnapshot {
        tracing::warn!("Discarding persisted session: {}", reason);
        self.purge();
        SessionSnapshot::anonymous()
    }

    /// Email/password sign-in against the demo credential. Invalid
    /// credentials are `Ok(false)` and leave the session untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<bool> {
        let _guard = self.begin(SessionOperation::Login)?;
        utils::sleep(self.config.login_delay()).await;

        if !catalog::validate_credentials(email, password) {
            tracing::warn!("Rejected sign-in for {}", email);
            return Ok(false);
        }

        let user = User {
            email: email.to_string(),
            ..catalog::mock_user()
        };
        self.sign_in(user, catalog::mock_workspace());
        Ok(true)
    }

    /// Simulated OAuth; always succeeds and always starts onboarding over
    pub async fn login_with_google(&self) -> Result<bool> {
        let _guard = self.begin(SessionOperation::LoginWithGoogle)?;
        utils::sleep(self.config.google_delay()).await;

        let user = User {
            email: catalog::GOOGLE_EMAIL.to_string(),
            ..catalog::mock_user()
        };
        let workspace = Workspace {
            onboarding_completed: false,
            ..catalog::mock_workspace()
        };
        self.sign_in(user, workspace);
        Ok(true)
    }

    pub(crate) fn begin(&self, operation: SessionOperation) -> Result<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::session(operation, "a sign-in is already in progress"))?;
        Ok(InFlight(&self.in_flight))
    }

    fn sign_in(&self, user: User, workspace: Workspace) {
        let email = user.email.clone();
        let state = {
            let mut current = self.state.write();
            let onboarding = current.onboarding;
            *current = SessionSnapshot::signed_in(user.clone(), workspace.clone(), onboarding);
            current.state
        };

        self.persist(&self.keys.user, &user);
        self.persist(&self.keys.workspace, &workspace);
        self.persist(&self.keys.auth, &true);

        tracing::info!("Signed in as {} ({})", email, state);
        self.emit(SessionEvent::LoggedIn { email, state });
    }

    /// Clears memory and every owned key. Idempotent.
    pub fn logout(&self) {
        *self.state.write() = SessionSnapshot::anonymous();
        self.purge();

        tracing::info!("Signed out");
        self.emit(SessionEvent::LoggedOut);
    }

    /// Shallow-merges `patch` into the current workspace and persists it.
    /// Returns `false` without touching memory or storage when nobody is
    /// signed in or the merged workspace would fail validation on reload.
    pub fn update_workspace(&self, patch: WorkspacePatch) -> bool {
        let (workspace, completed_now) = {
            let mut current = self.state.write();
            let Some(workspace) = current.workspace.as_mut() else {
                tracing::warn!("Workspace update ignored: no workspace loaded");
                return false;
            };

            let was_completed = workspace.onboarding_completed;
            let mut updated = workspace.clone();
            updated.apply(patch);
            if let Err(e) = updated.validate() {
                tracing::warn!("Workspace update rejected: {}", e);
                return false;
            }

            *workspace = updated.clone();
            current.state = SessionState::for_workspace(&updated);
            let completed_now = !was_completed && updated.onboarding_completed;
            (updated, completed_now)
        };

        self.persist(&self.keys.workspace, &workspace);
        self.emit(SessionEvent::WorkspaceUpdated);

        if completed_now {
            tracing::info!("Onboarding completed for {}", workspace.brand_name);
            self.emit(SessionEvent::OnboardingCompleted);
        }
        true
    }

    pub fn complete_onboarding(&self) -> bool {
        self.update_workspace(WorkspacePatch::completed())
    }

    /// Records the wizard position; step 5 marks the wizard complete
    pub fn set_onboarding_step(&self, step: u8) -> OnboardingProgress {
        let progress = OnboardingProgress::new(step);
        self.state.write().onboarding = progress;
        self.persist(&self.keys.onboarding, &progress);
        progress
    }

    pub fn onboarding_step(&self) -> u8 {
        self.state.read().onboarding.step
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Stored<T> {
        match self.storage.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Stored::Valid(value),
                Err(e) => Stored::Malformed(format!("{}: {}", key, e)),
            },
            Ok(None) => Stored::Missing,
            Err(e) => {
                tracing::warn!("Storage read failed for {}: {}", key, e);
                Stored::Missing
            }
        }
    }

    /// Writes a snapshot; failures only cost persistence, never memory state
    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let written = serde_json::to_string(value)
            .map_err(Error::from)
            .and_then(|json| self.storage.set(key, &json));

        if let Err(e) = written {
            tracing::warn!("Keeping {} in memory only: {}", key, e);
        }
    }

    fn purge(&self) {
        for key in self.keys.all() {
            if let Err(e) = self.storage.delete(key) {
                tracing::warn!("Failed to remove {}: {}", key, e);
            }
        }
    }

    fn emit(&self, event: SessionEvent) {
        let _ = self.events.send(event);
    }
}

/// Shared handle used by the UI and the desktop binary
pub type SessionHandle = Arc<SessionManager>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, StorageOperation};
    use crate::platform::storage::StorageBounds;
    use crate::platform::{MemoryStorage, StorageProvider};

    fn manager_on(storage: StorageArc) -> SessionManager {
        SessionManager::new(storage, &StorageConfig::default(), SessionConfig::instant())
    }

    fn fresh() -> (Arc<MemoryStorage>, SessionManager) {
        let storage = Arc::new(MemoryStorage::new());
        let manager = manager_on(storage.clone());
        manager.restore();
        (storage, manager)
    }

    fn persisted_workspace(storage: &MemoryStorage) -> Workspace {
        let raw = storage.get("reon_workspace").unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    /// Accepts reads, rejects every write
    struct ReadOnlyStorage;

    impl StorageBounds for ReadOnlyStorage {}

    impl StorageProvider for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<()> {
            Err(Error::storage(Some(key), StorageOperation::Write, "quota exceeded"))
        }

        fn delete(&self, key: &str) -> Result<()> {
            Err(Error::storage(Some(key), StorageOperation::Delete, "read only"))
        }

        fn list_keys(&self, _prefix: &str) -> Result<Vec<String>> {
            Ok(Vec::new())
        }

        fn clear(&self) -> Result<()> {
            Ok(())
        }

        fn backend_name(&self) -> &'static str {
            "read_only"
        }
    }

    #[test]
    fn test_starts_loading() {
        let manager = manager_on(Arc::new(MemoryStorage::new()));
        assert!(manager.snapshot().is_loading());
        assert_eq!(manager.restore(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_invalid_credentials_leave_state_unchanged() {
        let (storage, manager) = fresh();
        manager.login_with_google().await.unwrap();
        let before = manager.snapshot();
        let stored_before = storage.get("reon_user").unwrap();

        let attempts = [
            ("boss@reon.ai", "wrong"),
            ("BOSS@reon.ai", "reon123"),
            ("boss@reon.ai ", "reon123"),
            ("someone@else.com", "reon123"),
            ("", ""),
        ];
        for (email, password) in attempts {
            assert!(!manager.login(email, password).await.unwrap());
            assert_eq!(manager.snapshot(), before);
            assert_eq!(storage.get("reon_user").unwrap(), stored_before);
        }
    }

    #[tokio::test]
    async fn test_login_persists_user_with_input_email() {
        let (storage, manager) = fresh();

        assert!(manager.login(catalog::DEMO_EMAIL, catalog::DEMO_PASSWORD).await.unwrap());
        assert_eq!(manager.state(), SessionState::Ready);

        let raw = storage.get("reon_user").unwrap().unwrap();
        let user: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(user.email, catalog::DEMO_EMAIL);
        assert_eq!(storage.get("reon_auth").unwrap().as_deref(), Some("true"));
        assert!(persisted_workspace(&storage).onboarding_completed);
    }

    #[tokio::test]
    async fn test_google_login_always_needs_onboarding() {
        let (storage, manager) = fresh();
        manager.login("boss@reon.ai", "reon123").await.unwrap();
        assert_eq!(manager.state(), SessionState::Ready);

        assert!(manager.login_with_google().await.unwrap());
        assert_eq!(manager.state(), SessionState::Onboarding);
        assert!(!manager.workspace().unwrap().onboarding_completed);
        assert!(!persisted_workspace(&storage).onboarding_completed);
        assert_eq!(manager.user().unwrap().email, catalog::GOOGLE_EMAIL);
    }

    #[tokio::test]
    async fn test_logout_then_restore_is_anonymous() {
        let (storage, manager) = fresh();
        manager.login_with_google().await.unwrap();
        manager.set_onboarding_step(3);

        manager.logout();
        assert_eq!(manager.state(), SessionState::Anonymous);
        assert!(manager.user().is_none());
        assert!(storage.list_keys("reon_").unwrap().is_empty());

        assert_eq!(manager.restore(), SessionState::Anonymous);
        // idempotent
        manager.logout();
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_complete_onboarding_is_idempotent() {
        let (_storage, manager) = fresh();
        manager.login_with_google().await.unwrap();
        let before = manager.workspace().unwrap();

        assert!(manager.complete_onboarding());
        assert!(manager.complete_onboarding());

        let after = manager.workspace().unwrap();
        assert!(after.onboarding_completed);
        assert_eq!(
            Workspace {
                onboarding_completed: before.onboarding_completed,
                ..after
            },
            before
        );
        assert_eq!(manager.state(), SessionState::Ready);
    }

    #[tokio::test]
    async fn test_update_workspace_is_shallow_merge() {
        let (storage, manager) = fresh();
        manager.login("boss@reon.ai", "reon123").await.unwrap();
        let before = manager.workspace().unwrap();

        assert!(manager.update_workspace(WorkspacePatch {
            industry: Some("X".to_string()),
            ..WorkspacePatch::default()
        }));

        let after = manager.workspace().unwrap();
        assert_eq!(after.industry, "X");
        assert_eq!(
            Workspace {
                industry: before.industry.clone(),
                ..after.clone()
            },
            before
        );
        assert_eq!(persisted_workspace(&storage), after);
    }

    #[tokio::test]
    async fn test_invalid_workspace_update_is_rejected() {
        let (storage, manager) = fresh();
        manager.login("boss@reon.ai", "reon123").await.unwrap();
        let before = manager.workspace().unwrap();

        assert!(!manager.update_workspace(WorkspacePatch {
            goals: Some(vec!["sales".to_string(), "sales".to_string()]),
            ..WorkspacePatch::default()
        }));
        assert!(!manager.update_workspace(WorkspacePatch {
            currency: Some(String::new()),
            ..WorkspacePatch::default()
        }));
        assert_eq!(manager.workspace().unwrap(), before);
        assert_eq!(persisted_workspace(&storage), before);

        let reloaded = manager_on(storage.clone());
        assert_eq!(reloaded.restore(), SessionState::Ready);
        assert_eq!(reloaded.workspace().unwrap(), before);
        assert_eq!(storage.get("reon_auth").unwrap().as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn test_completion_does_not_revert() {
        let (_storage, manager) = fresh();
        manager.login("boss@reon.ai", "reon123").await.unwrap();

        manager.update_workspace(WorkspacePatch {
            onboarding_completed: Some(false),
            ..WorkspacePatch::default()
        });
        assert_eq!(manager.state(), SessionState::Ready);
    }

    #[test]
    fn test_update_without_workspace_is_noop() {
        let (storage, manager) = fresh();
        assert!(!manager.update_workspace(WorkspacePatch {
            industry: Some("X".to_string()),
            ..WorkspacePatch::default()
        }));
        assert!(!manager.complete_onboarding());
        assert!(storage.is_empty());
        assert_eq!(manager.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_email_login_from_empty_storage_is_ready() {
        let (_storage, manager) = fresh();
        assert_eq!(manager.state(), SessionState::Anonymous);

        assert!(manager.login("boss@reon.ai", "reon123").await.unwrap());
        assert_ne!(manager.state(), SessionState::Onboarding);
        assert_eq!(manager.state(), SessionState::Ready);
    }

    #[tokio::test]
    async fn test_google_onboarding_survives_reload() {
        let storage = Arc::new(MemoryStorage::new());
        let manager = manager_on(storage.clone());
        manager.restore();
        manager.login_with_google().await.unwrap();
        manager.complete_onboarding();

        let reloaded = manager_on(storage);
        assert_eq!(reloaded.restore(), SessionState::Ready);
        assert_eq!(reloaded.user().unwrap().email, "boss@gmail.com");
    }

    #[test]
    fn test_malformed_workspace_discards_session() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("reon_auth", "true").unwrap();
        storage.set("reon_user", &serde_json::to_string(&catalog::mock_user()).unwrap()).unwrap();
        storage.set("reon_workspace", r#"{"id":"ws_001","plan":"platinum"}"#).unwrap();

        let manager = manager_on(storage.clone());
        assert_eq!(manager.restore(), SessionState::Anonymous);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_invalid_user_discards_session() {
        let storage = Arc::new(MemoryStorage::new());
        let user = User {
            email: "nobody".to_string(),
            ..catalog::mock_user()
        };
        storage.set("reon_auth", "true").unwrap();
        storage.set("reon_user", &serde_json::to_string(&user).unwrap()).unwrap();

        let manager = manager_on(storage.clone());
        assert_eq!(manager.restore(), SessionState::Anonymous);
        assert!(storage.get("reon_auth").unwrap().is_none());
    }

    #[test]
    fn test_missing_snapshots_fall_back_to_templates() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("reon_auth", "true").unwrap();

        let manager = manager_on(storage);
        assert_eq!(manager.restore(), SessionState::Ready);
        assert_eq!(manager.user().unwrap(), catalog::mock_user());
        assert_eq!(manager.workspace().unwrap(), catalog::mock_workspace());
    }

    #[test]
    fn test_non_true_auth_flag_is_anonymous() {
        for flag in ["false", "\"true\"", "1", "{"] {
            let storage = Arc::new(MemoryStorage::new());
            storage.set("reon_auth", flag).unwrap();
            let manager = manager_on(storage);
            assert_eq!(manager.restore(), SessionState::Anonymous, "flag {}", flag);
        }
    }

    #[tokio::test]
    async fn test_concurrent_login_rejected() {
        let storage = Arc::new(MemoryStorage::new());
        let config = SessionConfig {
            login_delay_ms: 20,
            google_delay_ms: 20,
            onboarding_delay_ms: 0,
        };
        let manager = SessionManager::new(storage, &StorageConfig::default(), config);
        manager.restore();

        let (first, second) = tokio::join!(
            manager.login("boss@reon.ai", "reon123"),
            manager.login_with_google()
        );

        assert!(first.unwrap());
        let err = second.unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::Session { operation: SessionOperation::LoginWithGoogle }
        ));
        assert_eq!(manager.state(), SessionState::Ready);
        assert!(!manager.is_busy());

        // the guard is released afterwards
        assert!(manager.login_with_google().await.unwrap());
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_memory_session() {
        let manager = manager_on(Arc::new(ReadOnlyStorage));
        manager.restore();

        assert!(manager.login("boss@reon.ai", "reon123").await.unwrap());
        assert_eq!(manager.state(), SessionState::Ready);
        assert!(manager.update_workspace(WorkspacePatch {
            brand_name: Some("Acme".to_string()),
            ..WorkspacePatch::default()
        }));
        assert_eq!(manager.workspace().unwrap().brand_name, "Acme");

        manager.logout();
        assert_eq!(manager.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_events_follow_lifecycle() {
        let (_storage, manager) = fresh();
        let mut events = manager.subscribe();

        manager.login_with_google().await.unwrap();
        manager.complete_onboarding();
        manager.logout();

        assert_eq!(
            events.recv().await.unwrap(),
            SessionEvent::LoggedIn {
                email: "boss@gmail.com".to_string(),
                state: SessionState::Onboarding
            }
        );
        assert_eq!(events.recv().await.unwrap(), SessionEvent::WorkspaceUpdated);
        assert_eq!(events.recv().await.unwrap(), SessionEvent::OnboardingCompleted);
        assert_eq!(events.recv().await.unwrap(), SessionEvent::LoggedOut);
    }

    #[tokio::test]
    async fn test_onboarding_step_persists() {
        let storage = Arc::new(MemoryStorage::new());
        let manager = manager_on(storage.clone());
        manager.restore();
        manager.login_with_google().await.unwrap();
        assert_eq!(manager.onboarding_step(), 1);

        manager.set_onboarding_step(3);
        let reloaded = manager_on(storage.clone());
        reloaded.restore();
        assert_eq!(reloaded.onboarding_step(), 3);

        let progress = manager.set_onboarding_step(5);
        assert!(progress.completed);
        let raw = storage.get("reon_onboarding").unwrap().unwrap();
        assert_eq!(raw, r#"{"step":5,"completed":true}"#);
    }

    #[test]
    fn test_custom_namespace_keys() {
        let config = StorageConfig {
            namespace: "acme".to_string(),
            ..StorageConfig::default()
        };
        let keys = StorageKeys::new(&config);
        assert_eq!(keys.all(), ["acme_user", "acme_workspace", "acme_auth", "acme_onboarding"]);
    }
}
