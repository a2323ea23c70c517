//! REST endpoint construction.
//!
//! File names are appended verbatim; the browser percent-encodes them when
//! the request is made.

/// Workspace listing: `GET {api}/api/workflows/{id}/workspace`.
pub fn listing_url(api_base: &str, workflow_id: &str) -> String {
    format!("{}/api/workflows/{}/workspace", api_base, workflow_id)
}

/// File download: `GET {api}/api/workflows/{id}/workspace/{name}`.
pub fn download_url(api_base: &str, workflow_id: &str, file_name: &str) -> String {
    format!("{}/{}", listing_url(api_base, workflow_id), file_name)
}

/// File preview: the download URL with a `?preview` query.
pub fn preview_url(api_base: &str, workflow_id: &str, file_name: &str) -> String {
    format!("{}?preview", download_url(api_base, workflow_id, file_name))
}

/// Current user: `GET {api}/api/users/me`.
pub fn current_user_url(api_base: &str) -> String {
    format!("{}/api/users/me", api_base)
}
