//! Preview modal state.

/// What the preview modal body currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalContent {
    /// Nothing yet
    #[default]
    Empty,
    /// Preview URL: rendered as an image when server-previewable, otherwise a
    /// placeholder until the fetched text replaces it
    Url(String),
    /// Informational message shown instead of a preview
    Notice(String),
    /// Fetched content, rendered as preformatted text
    Text(String),
}

/// State of the preview modal for the most recently activated file.
///
/// Overwritten on each activation. When `is_server_previewable` is false and
/// `content` is still a [`ModalContent::Url`], the real content is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    /// Activated file
    pub file_name: String,
    /// Modal body
    pub content: ModalContent,
    /// Whether the server response can be shown as-is (images)
    pub is_server_previewable: bool,
    /// Download link for the file
    pub download_url: String,
}

impl PreviewState {
    /// Whether the content still has to be fetched and rendered client-side.
    pub fn needs_fetch(&self) -> bool {
        !self.is_server_previewable && matches!(self.content, ModalContent::Url(_))
    }
}
