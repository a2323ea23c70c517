//! Shared application state.
//!
//! Views never touch [`StoreState`] directly. They read through the
//! selectors on [`AppStore`] and write by dispatching an [`Action`].
//! State transitions happen in [`reduce`], which is pure; network side
//! effects are started by [`AppStore::dispatch`].

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::models::{FileEntry, FileList, SessionState};
use crate::utils::{fetch_json, log};

// =============================================================================
// State & Actions
// =============================================================================

/// Everything the store knows.
#[derive(Clone, Debug, Default)]
pub struct StoreState {
    /// Result of the startup login check
    pub session: SessionState,
    /// Number of listing requests still pending
    pub in_flight: usize,
    /// Latest listing per workflow id
    pub workflow_files: HashMap<String, FileList>,
    /// Latest listing failure per workflow id
    pub errors: HashMap<String, String>,
}

impl StoreState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn files_for(&self, workflow_id: &str) -> Option<FileList> {
        self.workflow_files.get(workflow_id).cloned()
    }

    pub fn error_for(&self, workflow_id: &str) -> Option<String> {
        self.errors.get(workflow_id).cloned()
    }
}

/// State transitions accepted by the store.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Request the workspace listing of a workflow
    FetchWorkflowFiles(String),
    /// Listing arrived
    WorkflowFilesLoaded { id: String, files: Vec<FileEntry> },
    /// Listing request failed
    WorkflowFilesFailed { id: String, error: String },
    /// Login check finished
    SessionChecked(SessionState),
}

/// Apply an action to the state.
pub fn reduce(state: &mut StoreState, action: Action) {
    match action {
        Action::FetchWorkflowFiles(id) => {
            state.in_flight += 1;
            state.errors.remove(&id);
        }
        Action::WorkflowFilesLoaded { id, files } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.workflow_files.insert(id, FileList::new(files));
        }
        Action::WorkflowFilesFailed { id, error } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.errors.insert(id, error);
        }
        Action::SessionChecked(session) => {
            state.session = session;
        }
    }
}

// =============================================================================
// AppStore
// =============================================================================

/// Handle to the shared state container.
///
/// `Copy` because it only holds arena-allocated reactive handles.
/// Provided at the root and read with `use_context::<AppStore>()`.
#[derive(Clone, Copy)]
pub struct AppStore {
    state: RwSignal<StoreState>,
    api_base: StoredValue<String>,
}

impl AppStore {
    pub fn new(api_base: String) -> Self {
        Self {
            state: RwSignal::new(StoreState::default()),
            api_base: StoredValue::new(api_base),
        }
    }

    /// API base URL this store talks to.
    pub fn api_base(&self) -> String {
        self.api_base.get_value()
    }

    /// Apply an action and start any request it implies.
    pub fn dispatch(&self, action: Action) {
        let fetch_id = match &action {
            Action::FetchWorkflowFiles(id) => Some(id.clone()),
            _ => None,
        };

        self.state.update(|state| reduce(state, action));

        if let Some(id) = fetch_id {
            self.fetch_workflow_files(id);
        }
    }

    fn fetch_workflow_files(self, id: String) {
        let url = api::listing_url(&self.api_base(), &id);
        log::info(&format!("fetching workspace of workflow {}", id));

        spawn_local(async move {
            match fetch_json::<Vec<FileEntry>>(&url).await {
                Ok(files) => self.dispatch(Action::WorkflowFilesLoaded { id, files }),
                Err(e) => {
                    log::warn(&format!("workspace listing for {} failed: {}", id, e));
                    self.dispatch(Action::WorkflowFilesFailed {
                        id,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    // -------------------------------------------------------------------------
    // Selectors
    // -------------------------------------------------------------------------

    /// Whether any listing request is pending.
    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    /// Listing of the given workflow; changes only when the store replaces it.
    pub fn workflow_files(&self, workflow_id: Signal<String>) -> Memo<Option<FileList>> {
        let state = self.state;
        Memo::new(move |_| {
            let id = workflow_id.get();
            state.with(|s| s.files_for(&id))
        })
    }

    /// Last listing failure of the given workflow.
    pub fn workflow_error(&self, workflow_id: Signal<String>) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || {
            let id = workflow_id.get();
            state.with(|s| s.error_for(&id))
        })
    }

    pub fn session(&self) -> Signal<SessionState> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Modified;

    fn files() -> Vec<FileEntry> {
        vec![
            FileEntry::new("b.txt", Modified::Unix(2), 20),
            FileEntry::new("a.txt", Modified::Unix(1), 10),
        ]
    }

    #[test]
    fn test_fetch_then_load() {
        let mut state = StoreState::default();
        assert!(!state.is_loading());

        reduce(&mut state, Action::FetchWorkflowFiles("w1".into()));
        assert!(state.is_loading());
        assert_eq!(state.files_for("w1"), None);

        reduce(
            &mut state,
            Action::WorkflowFilesLoaded {
                id: "w1".into(),
                files: files(),
            },
        );
        assert!(!state.is_loading());

        let listed = state.files_for("w1").unwrap();
        // Order is kept exactly as delivered
        assert_eq!(listed[0].name, "b.txt");
        assert_eq!(listed[1].name, "a.txt");
    }

    #[test]
    fn test_refetch_replaces_identity() {
        let mut state = StoreState::default();
        reduce(
            &mut state,
            Action::WorkflowFilesLoaded {
                id: "w1".into(),
                files: files(),
            },
        );
        let first = state.files_for("w1").unwrap();
        assert_eq!(state.files_for("w1").unwrap(), first);

        reduce(
            &mut state,
            Action::WorkflowFilesLoaded {
                id: "w1".into(),
                files: files(),
            },
        );
        assert_ne!(state.files_for("w1").unwrap(), first);
    }

    #[test]
    fn test_failure_keeps_previous_listing() {
        let mut state = StoreState::default();
        reduce(
            &mut state,
            Action::WorkflowFilesLoaded {
                id: "w1".into(),
                files: files(),
            },
        );
        reduce(&mut state, Action::FetchWorkflowFiles("w1".into()));
        reduce(
            &mut state,
            Action::WorkflowFilesFailed {
                id: "w1".into(),
                error: "HTTP error: 500".into(),
            },
        );

        assert!(!state.is_loading());
        assert_eq!(state.error_for("w1").as_deref(), Some("HTTP error: 500"));
        assert_eq!(state.files_for("w1").map(|f| f.len()), Some(2));

        reduce(&mut state, Action::FetchWorkflowFiles("w1".into()));
        assert_eq!(state.error_for("w1"), None);
    }

    #[test]
    fn test_concurrent_fetches() {
        let mut state = StoreState::default();
        reduce(&mut state, Action::FetchWorkflowFiles("w1".into()));
        reduce(&mut state, Action::FetchWorkflowFiles("w2".into()));
        reduce(
            &mut state,
            Action::WorkflowFilesLoaded {
                id: "w1".into(),
                files: Vec::new(),
            },
        );
        assert!(state.is_loading());
        reduce(
            &mut state,
            Action::WorkflowFilesLoaded {
                id: "w2".into(),
                files: Vec::new(),
            },
        );
        assert!(!state.is_loading());
    }

    #[test]
    fn test_unmatched_completion_saturates() {
        let mut state = StoreState::default();
        reduce(
            &mut state,
            Action::WorkflowFilesFailed {
                id: "w1".into(),
                error: "late".into(),
            },
        );
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_session_checked() {
        let mut state = StoreState::default();
        assert_eq!(state.session, SessionState::Unknown);
        reduce(&mut state, Action::SessionChecked(SessionState::LoggedOut));
        assert_eq!(state.session, SessionState::LoggedOut);
    }

    // =========================================================================
    // Dispatch Tests
    // =========================================================================

    #[tokio::test]
    async fn test_dispatch_runs_listing_request() {
        let _ = any_spawner::Executor::init_tokio();
        let local = tokio::task::LocalSet::new();

        local
            .run_until(async {
                let store = AppStore::new("http://localhost:8000".into());
                let id = Signal::derive(|| "w1".to_string());

                store.dispatch(Action::FetchWorkflowFiles("w1".into()));
                assert!(store.loading().get_untracked());

                // No browser window natively, so the request fails at once
                for _ in 0..4 {
                    tokio::task::yield_now().await;
                }
                assert!(!store.loading().get_untracked());
                assert_eq!(
                    store.workflow_error(id).get_untracked().as_deref(),
                    Some("Browser window not available")
                );
            })
            .await;
    }
}
