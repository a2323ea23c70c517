//! Hash-based routing.

/// Application routes for hash-based navigation.
/// URL format: `#/workflows/<id>` (e.g., `#/workflows/abc123`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing view: `#/`, empty hash, or anything unrecognized
    Home,
    /// Workspace file browser for one workflow
    Workspace {
        /// Workflow identifier (never empty)
        workflow_id: String,
    },
}

impl AppRoute {
    /// Parse URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path.split_once('/') {
            Some(("workflows", id)) if !id.is_empty() && !id.contains('/') => Self::Workspace {
                workflow_id: id.to_string(),
            },
            _ => Self::Home,
        }
    }

    /// Convert route to URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Workspace { workflow_id } => format!("#/workflows/{}", workflow_id),
        }
    }

    /// Route for a workflow id typed by the user; blank input maps to `Home`.
    pub fn workspace(workflow_id: &str) -> Self {
        Self::from_hash(&format!("#/workflows/{}", workflow_id.trim()))
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Navigate to this route (adds a history entry and fires `hashchange`).
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }

    pub fn workflow_id(&self) -> Option<&str> {
        match self {
            Self::Home => None,
            Self::Workspace { workflow_id } => Some(workflow_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace(id: &str) -> AppRoute {
        AppRoute::Workspace {
            workflow_id: id.to_string(),
        }
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/workflows/abc123"), workspace("abc123"));
        assert_eq!(AppRoute::from_hash("#/workflows/abc123/"), workspace("abc123"));
        assert_eq!(AppRoute::from_hash("/workflows/w-9"), workspace("w-9"));
    }

    #[test]
    fn test_route_rejects_unknown_paths() {
        assert_eq!(AppRoute::from_hash("#/workflows/"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/workflows"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/jobs/abc"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/workflows/a/b"), AppRoute::Home);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Home.to_hash(), "#/");
        assert_eq!(workspace("abc123").to_hash(), "#/workflows/abc123");
        assert_eq!(
            AppRoute::from_hash(&workspace("abc123").to_hash()),
            workspace("abc123")
        );
    }

    #[test]
    fn test_workspace_from_input() {
        assert_eq!(AppRoute::workspace("  abc123 "), workspace("abc123"));
        assert_eq!(AppRoute::workspace("   "), AppRoute::Home);
        assert_eq!(workspace("abc").workflow_id(), Some("abc"));
        assert_eq!(AppRoute::Home.workflow_id(), None);
    }
}
