//! Column sorting for the workspace file table.
//!
//! Clicking a new column sorts ascending by that column. Clicking the same
//! column again only reverses the current row order and flips the reported
//! direction; it never re-sorts.

use std::cmp::Ordering;

use crate::models::FileEntry;

/// Sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    LastModified,
    Size,
}

impl SortColumn {
    /// All columns in display order.
    pub const ALL: [SortColumn; 3] = [Self::Name, Self::LastModified, Self::Size];

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::LastModified => "Last Modified",
            Self::Size => "Size",
        }
    }

    /// Ascending order of two entries by this column's value.
    pub fn compare(self, a: &FileEntry, b: &FileEntry) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::LastModified => a.last_modified.cmp(&b.last_modified),
            Self::Size => a.size.cmp(&b.size),
        }
    }
}

/// Reported sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Current sort column and direction; both unset until the first header click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    /// Handle a click on a column header, mutating `files` in place.
    pub fn toggle(&mut self, column: SortColumn, files: &mut [FileEntry]) {
        if self.column == Some(column) {
            files.reverse();
            self.direction = self.direction.map(SortDirection::flipped);
        } else {
            files.sort_by(|a, b| column.compare(a, b));
            self.column = Some(column);
            self.direction = Some(SortDirection::Ascending);
        }
    }

    /// Direction to show on a header, if it is the sorted column.
    pub fn direction_for(&self, column: SortColumn) -> Option<SortDirection> {
        if self.column == Some(column) {
            self.direction
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Modified;

    fn entry(name: &str, modified: u64, size: u64) -> FileEntry {
        FileEntry::new(name, Modified::Unix(modified), size)
    }

    fn names(files: &[FileEntry]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    fn sample() -> Vec<FileEntry> {
        vec![
            entry("b.txt", 300, 20),
            entry("c.txt", 100, 30),
            entry("a.txt", 200, 10),
        ]
    }

    #[test]
    fn test_initial_state_unset() {
        let state = SortState::default();
        assert_eq!(state.column, None);
        assert_eq!(state.direction, None);
        assert_eq!(state.direction_for(SortColumn::Name), None);
    }

    #[test]
    fn test_new_column_sorts_ascending() {
        let mut files = sample();
        let mut state = SortState::default();

        state.toggle(SortColumn::Name, &mut files);
        assert_eq!(names(&files), ["a.txt", "b.txt", "c.txt"]);
        assert_eq!(state.direction, Some(SortDirection::Ascending));

        state.toggle(SortColumn::Size, &mut files);
        assert_eq!(names(&files), ["a.txt", "b.txt", "c.txt"]);
        assert_eq!(state.column, Some(SortColumn::Size));

        state.toggle(SortColumn::LastModified, &mut files);
        assert_eq!(names(&files), ["c.txt", "a.txt", "b.txt"]);
        assert_eq!(state.direction, Some(SortDirection::Ascending));
    }

    #[test]
    fn test_same_column_alternates_direction() {
        let mut files = sample();
        let mut state = SortState::default();

        state.toggle(SortColumn::Size, &mut files);
        state.toggle(SortColumn::Size, &mut files);
        assert_eq!(names(&files), ["c.txt", "b.txt", "a.txt"]);
        assert_eq!(state.direction, Some(SortDirection::Descending));

        state.toggle(SortColumn::Size, &mut files);
        assert_eq!(names(&files), ["a.txt", "b.txt", "c.txt"]);
        assert_eq!(state.direction, Some(SortDirection::Ascending));
        assert_eq!(state.direction_for(SortColumn::Size), Some(SortDirection::Ascending));
        assert_eq!(state.direction_for(SortColumn::Name), None);
    }

    #[test]
    fn test_same_column_only_reverses() {
        // Sorted by name, then the store refreshes the rows in a different
        // order while the sort state persists: a same-column click only
        // reverses what is there.
        let mut state = SortState::default();
        let mut files = sample();
        state.toggle(SortColumn::Name, &mut files);

        let mut refreshed = sample();
        state.toggle(SortColumn::Name, &mut refreshed);
        assert_eq!(names(&refreshed), ["a.txt", "c.txt", "b.txt"]);
        assert_eq!(state.direction, Some(SortDirection::Descending));
    }

    #[test]
    fn test_sort_is_stable() {
        let mut files = vec![
            entry("first", 1, 5),
            entry("second", 2, 1),
            entry("third", 3, 5),
        ];
        let mut state = SortState::default();
        state.toggle(SortColumn::Size, &mut files);
        assert_eq!(names(&files), ["second", "first", "third"]);
    }

    #[test]
    fn test_empty_list() {
        let mut files: Vec<FileEntry> = Vec::new();
        let mut state = SortState::default();
        state.toggle(SortColumn::Name, &mut files);
        state.toggle(SortColumn::Name, &mut files);
        assert!(files.is_empty());
        assert_eq!(state.direction, Some(SortDirection::Descending));
    }
}
