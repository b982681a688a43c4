// ABOUTME: Wizard shell owning the session document, navigator, and persistence wiring
// ABOUTME: Autosave runs on a timer with a single-slot guard so saves never overlap

use crate::engine;
use crate::error::{Result, ScopingError};
use crate::navigator::Navigator;
use crate::storage::SessionStore;
use chrono::Utc;
use nacscope_core::{validate_session_name, ScopingSession, SelectedVendor, VendorCategory};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Autosave period used when the caller does not pick one
pub const DEFAULT_AUTOSAVE_INTERVAL: Duration = Duration::from_secs(30);

struct ShellState {
    session: RwLock<ScopingSession>,
    navigator: Mutex<Navigator>,
    store: Arc<dyn SessionStore>,
    dirty: AtomicBool,
    /// Single save slot: autosave skips when occupied, explicit saves wait
    save_slot: Mutex<()>,
    last_save_error: Mutex<Option<String>>,
}

/// Owns one scoping session for its lifetime: the document, the
/// phase/step position, and the persistence collaborator. Dropped when
/// the wizard unmounts; the autosave task dies with it.
pub struct WizardShell {
    state: Arc<ShellState>,
    autosave: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl WizardShell {
    /// Start a fresh session with an all-defaults document and persist
    /// it immediately so it shows up in listings.
    pub async fn new(name: impl Into<String>, store: Arc<dyn SessionStore>) -> Result<Self> {
        let name = name.into();
        let errors = validate_session_name(&name);
        if let Some(error) = errors.first() {
            return Err(ScopingError::InvalidInput(error.message.clone()));
        }

        let session = ScopingSession::new(nanoid::nanoid!(8), name);
        store.save_session(&session).await?;
        info!("Created scoping session: {}", session.id);

        Ok(Self::from_parts(session, Navigator::new(), store))
    }

    /// Resume an existing session; the position is rebuilt from the
    /// persisted completion percentage.
    pub async fn resume(id: &str, store: Arc<dyn SessionStore>) -> Result<Self> {
        let session = store
            .load_session(id)
            .await?
            .ok_or_else(|| ScopingError::SessionNotFound(id.to_string()))?;

        let total = Navigator::total_steps();
        let ordinal = ((session.completion_percentage as f64 / 100.0) * total as f64).round()
            as usize;
        let navigator = Navigator::from_ordinal(ordinal.max(1));
        info!("Resumed scoping session: {}", session.id);

        Ok(Self::from_parts(session, navigator, store))
    }

    fn from_parts(
        session: ScopingSession,
        navigator: Navigator,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        WizardShell {
            state: Arc::new(ShellState {
                session: RwLock::new(session),
                navigator: Mutex::new(navigator),
                store,
                dirty: AtomicBool::new(false),
                save_slot: Mutex::new(()),
                last_save_error: Mutex::new(None),
            }),
            autosave: std::sync::Mutex::new(None),
        }
    }

    pub async fn id(&self) -> String {
        self.state.session.read().await.id.clone()
    }

    /// Clone of the current document
    pub async fn snapshot(&self) -> ScopingSession {
        self.state.session.read().await.clone()
    }

    pub async fn position(&self) -> (usize, usize) {
        let navigator = self.state.navigator.lock().await;
        (navigator.phase_index(), navigator.step_index())
    }

    pub async fn is_last_step(&self) -> bool {
        self.state.navigator.lock().await.is_last_step()
    }

    pub async fn completion_percentage(&self) -> u8 {
        self.state.navigator.lock().await.completion_percentage()
    }

    pub async fn last_save_error(&self) -> Option<String> {
        self.state.last_save_error.lock().await.clone()
    }

    /// Apply a mutation to the document. Bumps `updated_at` and marks
    /// the session dirty for the next save.
    pub async fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut ScopingSession),
    {
        {
            let mut session = self.state.session.write().await;
            mutate(&mut session);
            session.updated_at = Utc::now();
        }
        self.state.dirty.store(true, Ordering::SeqCst);
    }

    /// Route a finished vendor record into its category list
    pub async fn add_vendor(&self, vendor: SelectedVendor) {
        self.update(|session| {
            let env = &mut session.current_environment;
            let list = match vendor.category {
                VendorCategory::WiredSwitching => &mut env.network_infrastructure.wired_vendors,
                VendorCategory::Wireless => &mut env.network_infrastructure.wireless_vendors,
                VendorCategory::Routing => &mut env.network_infrastructure.routing_vendors,
                VendorCategory::Firewall => &mut env.security_ecosystem.firewall_vendors,
                VendorCategory::Nac => &mut env.security_ecosystem.nac_vendors,
                VendorCategory::Siem => &mut env.security_ecosystem.siem_vendors,
                VendorCategory::Edr => &mut env.security_ecosystem.edr_vendors,
                VendorCategory::IdentityProvider => &mut env.identity_access.identity_providers,
                VendorCategory::Mfa => &mut env.identity_access.mfa_vendors,
                VendorCategory::Pki => &mut env.identity_access.pki_vendors,
                VendorCategory::CloudProvider => &mut env.cloud_solutions.cloud_providers,
                VendorCategory::SaasPlatform => &mut env.cloud_solutions.saas_platforms,
            };
            list.push(vendor);
        })
        .await;
    }

    /// Replace the analysis slice wholesale with fresh engine output
    pub async fn regenerate_analysis(&self) {
        let snapshot = self.snapshot().await;
        let pain_points = engine::identify_pain_points(
            &snapshot.business_foundation,
            &snapshot.current_environment,
        );
        let recommendations = engine::run_decision_tree(&snapshot.current_environment);
        let suggested_requirements = engine::suggest_requirements(
            &snapshot.business_foundation,
            &snapshot.current_environment,
        );

        self.update(move |session| {
            session.ai_analysis.pain_points = pain_points;
            session.ai_analysis.recommendations = recommendations;
            session.ai_analysis.suggested_requirements = suggested_requirements;
        })
        .await;
    }

    /// Advance one step; persists on every transition. Returns whether
    /// the position moved.
    pub async fn advance(&self) -> Result<bool> {
        let moved = self.state.navigator.lock().await.next();
        if moved {
            self.state.dirty.store(true, Ordering::SeqCst);
            self.save_now().await?;
        }
        Ok(moved)
    }

    /// Step back one step; persists on every transition
    pub async fn back(&self) -> Result<bool> {
        let moved = self.state.navigator.lock().await.previous();
        if moved {
            self.state.dirty.store(true, Ordering::SeqCst);
            self.save_now().await?;
        }
        Ok(moved)
    }

    /// Explicit save: waits for the save slot, recomputes completion,
    /// and persists. Failures are recorded and returned.
    pub async fn save_now(&self) -> Result<()> {
        let _guard = self.state.save_slot.lock().await;
        Self::persist(&self.state).await.map_err(Into::into)
    }

    /// Autosave-path save: skips (returning false) when a save is
    /// already in flight, and does nothing when the document is clean.
    pub async fn try_save(&self) -> Result<bool> {
        if !self.state.dirty.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let Ok(_guard) = self.state.save_slot.try_lock() else {
            debug!("Save already in flight, skipping autosave");
            return Ok(false);
        };
        Self::persist(&self.state).await?;
        Ok(true)
    }

    async fn persist(state: &ShellState) -> std::result::Result<(), crate::storage::StorageError> {
        let snapshot = {
            let navigator = state.navigator.lock().await;
            let mut session = state.session.write().await;
            session.completion_percentage = navigator.completion_percentage();
            session.clone()
        };
        state.dirty.store(false, Ordering::SeqCst);

        match state.store.save_session(&snapshot).await {
            Ok(()) => {
                *state.last_save_error.lock().await = None;
                Ok(())
            }
            Err(e) => {
                warn!("Session save failed: {}", e);
                *state.last_save_error.lock().await = Some(e.to_string());
                // Leave the document dirty so the next tick retries
                state.dirty.store(true, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    /// Start the periodic autosave task. Replaces any previous task.
    pub fn spawn_autosave(&self, period: Duration) {
        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // The first tick fires immediately; skip it
            interval.tick().await;
            loop {
                interval.tick().await;
                if !state.dirty.load(Ordering::SeqCst) {
                    continue;
                }
                let Ok(_guard) = state.save_slot.try_lock() else {
                    debug!("Save already in flight, skipping autosave");
                    continue;
                };
                // Errors are recorded in last_save_error by persist
                let _ = WizardShell::persist(&state).await;
            }
        });

        if let Ok(mut slot) = self.autosave.lock() {
            if let Some(previous) = slot.replace(handle) {
                previous.abort();
            }
        }
    }

    /// Finish the wizard: only valid at the last step. Sets completion
    /// to 100, persists, and returns the finished document for the
    /// caller to hand to the project-creation collaborator. The
    /// document is not reset.
    pub async fn complete(&self) -> Result<ScopingSession> {
        if !self.is_last_step().await {
            return Err(ScopingError::NotAtFinalStep);
        }

        let _guard = self.state.save_slot.lock().await;
        let snapshot = {
            let mut session = self.state.session.write().await;
            session.completion_percentage = 100;
            session.updated_at = Utc::now();
            session.clone()
        };
        self.state.store.save_session(&snapshot).await?;
        self.state.dirty.store(false, Ordering::SeqCst);
        info!("Completed scoping session: {}", snapshot.id);
        Ok(snapshot)
    }
}

impl Drop for WizardShell {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.autosave.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemorySessionStore, SessionSummary, StorageResult};
    use async_trait::async_trait;

    /// Store whose saves block until released, for exercising the guard
    struct SlowStore {
        inner: MemorySessionStore,
        delay: Duration,
    }

    #[async_trait]
    impl SessionStore for SlowStore {
        async fn save_session(&self, session: &ScopingSession) -> StorageResult<()> {
            tokio::time::sleep(self.delay).await;
            self.inner.save_session(session).await
        }

        async fn load_session(&self, id: &str) -> StorageResult<Option<ScopingSession>> {
            self.inner.load_session(id).await
        }

        async fn list_sessions(&self) -> StorageResult<Vec<SessionSummary>> {
            self.inner.list_sessions().await
        }

        async fn delete_session(&self, id: &str) -> StorageResult<()> {
            self.inner.delete_session(id).await
        }
    }

    #[tokio::test]
    async fn new_shell_persists_immediately() {
        let store = Arc::new(MemorySessionStore::new());
        let shell = WizardShell::new("Acme rollout", store.clone()).await.unwrap();
        let id = shell.id().await;
        assert!(store.load_session(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let store = Arc::new(MemorySessionStore::new());
        assert!(matches!(
            WizardShell::new("  ", store).await,
            Err(ScopingError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn advance_persists_each_transition() {
        let store = Arc::new(MemorySessionStore::new());
        let shell = WizardShell::new("Acme rollout", store.clone()).await.unwrap();
        let id = shell.id().await;

        assert!(shell.advance().await.unwrap());
        let saved = store.load_session(&id).await.unwrap().unwrap();
        assert_eq!(saved.completion_percentage, 13); // step 2 of 15

        assert!(shell.back().await.unwrap());
        let saved = store.load_session(&id).await.unwrap().unwrap();
        assert_eq!(saved.completion_percentage, 7); // back at step 1
    }

    #[tokio::test]
    async fn complete_requires_final_step() {
        let store = Arc::new(MemorySessionStore::new());
        let shell = WizardShell::new("Acme rollout", store.clone()).await.unwrap();
        assert!(matches!(
            shell.complete().await,
            Err(ScopingError::NotAtFinalStep)
        ));

        while shell.advance().await.unwrap() {}
        let finished = shell.complete().await.unwrap();
        assert_eq!(finished.completion_percentage, 100);

        let saved = store.load_session(&finished.id).await.unwrap().unwrap();
        assert_eq!(saved.completion_percentage, 100);
    }

    #[tokio::test]
    async fn resume_restores_position() {
        let store = Arc::new(MemorySessionStore::new());
        let shell = WizardShell::new("Acme rollout", store.clone()).await.unwrap();
        let id = shell.id().await;
        for _ in 0..7 {
            shell.advance().await.unwrap();
        }
        let position = shell.position().await;
        drop(shell);

        let resumed = WizardShell::resume(&id, store).await.unwrap();
        assert_eq!(resumed.position().await, position);
    }

    #[tokio::test]
    async fn resume_missing_session_fails() {
        let store = Arc::new(MemorySessionStore::new());
        assert!(matches!(
            WizardShell::resume("missing", store).await,
            Err(ScopingError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn regenerate_analysis_replaces_wholesale() {
        let store = Arc::new(MemorySessionStore::new());
        let shell = WizardShell::new("Acme rollout", store).await.unwrap();

        shell.regenerate_analysis().await;
        let first = shell.snapshot().await.ai_analysis;
        assert!(first
            .pain_points
            .iter()
            .any(|p| p.title == "No Network Access Control"));
        assert!(first.recommendations.is_empty());

        shell
            .add_vendor(SelectedVendor::new("Cisco", VendorCategory::WiredSwitching))
            .await;
        shell.regenerate_analysis().await;
        let second = shell.snapshot().await.ai_analysis;
        assert_eq!(second.recommendations.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn autosave_persists_dirty_document() {
        let store = Arc::new(MemorySessionStore::new());
        let shell = WizardShell::new("Acme rollout", store.clone()).await.unwrap();
        let id = shell.id().await;

        shell.spawn_autosave(Duration::from_secs(30));
        shell.update(|s| s.name = "Renamed".into()).await;

        tokio::time::sleep(Duration::from_secs(31)).await;
        tokio::task::yield_now().await;

        let saved = store.load_session(&id).await.unwrap().unwrap();
        assert_eq!(saved.name, "Renamed");
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_save_is_skipped() {
        let store = Arc::new(SlowStore {
            inner: MemorySessionStore::new(),
            delay: Duration::from_secs(5),
        });
        // Bypass the initial WizardShell::new save to keep timing simple
        let session = ScopingSession::new("slow0001", "Slow store session");
        let shell = WizardShell::from_parts(session, Navigator::new(), store);

        shell.update(|s| s.name = "edited".into()).await;

        let state = Arc::clone(&shell.state);
        let long_save = tokio::spawn(async move {
            let _guard = state.save_slot.lock().await;
            WizardShell::persist(&state).await
        });
        tokio::task::yield_now().await;

        // A second save while the first holds the slot is skipped
        shell.update(|s| s.name = "edited again".into()).await;
        assert!(!shell.try_save().await.unwrap());

        tokio::time::advance(Duration::from_secs(6)).await;
        long_save.await.unwrap().unwrap();
    }
}
