//! Directory, selection and scroll state of the navigator.
//!
//! [`NavigatorState`] follows the immutable-transition style: every
//! mutation consumes `self` and returns a new state, and every transition
//! re-establishes the bounds invariants:
//!
//! - `selected_index < entries.len()`, or `0` when the listing is empty;
//! - after [`NavigatorState::with_viewport`], `scroll_offset <= selected_index
//!   < scroll_offset + rows`.

use std::path::{Path, PathBuf};

use crate::fs::entry::FileEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorState {
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    selected_index: usize,
    scroll_offset: usize,
}

impl NavigatorState {
    /// Creates a state showing `entries` of `current_dir`, cursor at the top.
    pub fn new(current_dir: PathBuf, entries: Vec<FileEntry>) -> Self {
        Self {
            current_dir,
            entries,
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Index of the topmost visible entry.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.selected_index)
    }

    /// Moves the selection up by one. No-op if already at the top.
    pub fn move_up(self) -> Self {
        if self.selected_index == 0 {
            return self;
        }
        let new_index = self.selected_index - 1;
        self.with_selection(new_index)
    }

    /// Moves the selection down by one. No-op if already at the bottom.
    pub fn move_down(self) -> Self {
        if self.selected_index + 1 >= self.entries.len() {
            return self;
        }
        let new_index = self.selected_index + 1;
        self.with_selection(new_index)
    }

    /// Returns a new state with the selection moved to `index` (clamped to bounds).
    pub fn with_selection(self, index: usize) -> Self {
        let selected_index = clamp_index(index, self.entries.len());
        Self {
            selected_index,
            ..self
        }
    }

    /// Replaces the listing of the current directory, keeping the selection
    /// where possible.
    pub fn with_entries(self, entries: Vec<FileEntry>) -> Self {
        let selected_index = clamp_index(self.selected_index, entries.len());
        Self {
            entries,
            selected_index,
            ..self
        }
    }

    /// Switches to another directory with selection and scroll reset.
    pub fn with_directory(self, path: PathBuf, entries: Vec<FileEntry>) -> Self {
        Self::new(path, entries)
    }

    /// Adjusts the scroll offset so the selected row is inside a window of
    /// `rows` lines. A zero-row window is treated as one row.
    pub fn with_viewport(self, rows: usize) -> Self {
        let rows = rows.max(1);
        let mut scroll_offset = self.scroll_offset;
        if self.selected_index < scroll_offset {
            scroll_offset = self.selected_index;
        } else if self.selected_index >= scroll_offset + rows {
            scroll_offset = self.selected_index + 1 - rows;
        }
        Self {
            scroll_offset,
            ..self
        }
    }

    /// Entries inside a window of `rows` lines starting at the scroll offset.
    pub fn visible_entries(&self, rows: usize) -> &[FileEntry] {
        let start = self.scroll_offset.min(self.entries.len());
        let end = (start + rows).min(self.entries.len());
        &self.entries[start..end]
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}
