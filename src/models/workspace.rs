//! Workspace listing types.
//!
//! A workflow's workspace is a flat list of files served by the REST API.
//! Entries are deserialized straight from the listing endpoint.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::Deserialize;

use crate::utils::format::format_date_iso;

// =============================================================================
// Modification Time
// =============================================================================

/// Last modification time as sent by the server.
///
/// The API reports either a formatted timestamp string or a Unix timestamp
/// in seconds. Ordering compares like with like; numeric timestamps sort
/// before textual ones.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(untagged)]
pub enum Modified {
    /// Unix timestamp (seconds)
    Unix(u64),
    /// Server-formatted timestamp, displayed verbatim
    Text(String),
}

impl Default for Modified {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for Modified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix(ts) => write!(f, "{}", format_date_iso(*ts)),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

// =============================================================================
// File Entry
// =============================================================================

/// One file in a workflow workspace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// File name, unique within a listing
    pub name: String,
    /// Last modification time
    #[serde(default)]
    pub last_modified: Modified,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
}

#[cfg(test)]
impl FileEntry {
    pub fn new(name: impl Into<String>, last_modified: Modified, size: u64) -> Self {
        Self {
            name: name.into(),
            last_modified,
            size,
        }
    }
}

/// Substring after the last `.` in a file name, or `""` if there is no dot.
pub fn file_extension(name: &str) -> &str {
    name.rfind('.').map(|i| &name[i + 1..]).unwrap_or("")
}

// =============================================================================
// File List
// =============================================================================

/// Shared, immutable file listing held by the store.
///
/// Equality is identity: two `FileList`s are equal only when they point at
/// the same allocation. Views compare lists this way to detect a refetch,
/// even when the new listing has identical contents.
#[derive(Clone, Debug, Default)]
pub struct FileList(Arc<Vec<FileEntry>>);

impl FileList {
    pub fn new(files: Vec<FileEntry>) -> Self {
        Self(Arc::new(files))
    }
}

impl PartialEq for FileList {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for FileList {
    type Target = [FileEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Deserialization Tests
    // =========================================================================

    #[test]
    fn test_deserialize_listing() {
        let json = r#"[
            {"name": "report.txt", "lastModified": "2024-03-01T10:00:00Z", "size": 120},
            {"name": "photo.png", "lastModified": 1704067200, "size": 4096}
        ]"#;
        let files: Vec<FileEntry> = serde_json::from_str(json).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(
            files[0].last_modified,
            Modified::Text("2024-03-01T10:00:00Z".into())
        );
        assert_eq!(files[1].last_modified, Modified::Unix(1704067200));
        assert_eq!(files[1].size, 4096);
    }

    #[test]
    fn test_missing_optional_fields() {
        let entry: FileEntry = serde_json::from_str(r#"{"name": "empty"}"#).unwrap();
        assert_eq!(entry.size, 0);
        assert_eq!(entry.last_modified, Modified::default());
    }

    #[test]
    fn test_modified_display() {
        assert_eq!(Modified::Unix(1704067200).to_string(), "2024-01-01");
        assert_eq!(Modified::Text("yesterday".into()).to_string(), "yesterday");
    }

    // =========================================================================
    // Extension / Identity Tests
    // =========================================================================

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("data.csv"), "csv");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("Makefile"), "");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn test_file_list_identity() {
        let files = vec![FileEntry::new("a.txt", Modified::Unix(1), 1)];
        let first = FileList::new(files.clone());
        let same = first.clone();
        let refetched = FileList::new(files);

        assert_eq!(first, same);
        assert_ne!(first, refetched);
        assert_eq!(&*first, &*refetched);
    }
}
