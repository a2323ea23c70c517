//! Startup login check.

use leptos::task::spawn_local;

use super::api;
use super::error::FetchError;
use super::store::{Action, AppStore};
use crate::models::{CurrentUser, SessionState};
use crate::utils::{fetch_json, log};

/// Verify the existing session against the API.
///
/// Fire-and-forget: the result lands in the store as
/// [`Action::SessionChecked`] whenever the request completes.
pub fn check_logged_in(store: AppStore) {
    let url = api::current_user_url(&store.api_base());

    spawn_local(async move {
        let result = fetch_json::<CurrentUser>(&url).await;
        if let Some(session) = session_from_response(result) {
            log::info(&format!("session: {}", session.display_name()));
            store.dispatch(Action::SessionChecked(session));
        }
    });
}

/// Map the current-user response to a session state.
///
/// Returns `None` when the outcome says nothing about the session
/// (network failure, server error); the state then stays `Unknown`.
fn session_from_response(result: Result<CurrentUser, FetchError>) -> Option<SessionState> {
    match result {
        Ok(user) => Some(user.into()),
        Err(e) if e.is_unauthorized() => Some(SessionState::LoggedOut),
        Err(e) => {
            log::warn(&format!("login check failed: {}", e));
            None
        }
    }
}
