//! Login session state.

use serde::Deserialize;

/// Result of the startup login check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Check not finished (or failed for a reason other than authorization)
    #[default]
    Unknown,
    /// Server rejected the session
    LoggedOut,
    /// Authenticated user
    LoggedIn { username: String },
}

impl SessionState {
    /// Name shown in the status bar.
    pub fn display_name(&self) -> String {
        match self {
            Self::Unknown => "…".to_string(),
            Self::LoggedOut => "guest".to_string(),
            Self::LoggedIn { username } => username.clone(),
        }
    }
}

/// Body returned by the current-user endpoint.
#[derive(Debug, Deserialize)]
pub struct CurrentUser {
    pub username: String,
}

impl From<CurrentUser> for SessionState {
    fn from(user: CurrentUser) -> Self {
        Self::LoggedIn {
            username: user.username,
        }
    }
}
