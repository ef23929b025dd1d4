//! Ordering and filtering of directory listings.

use std::cmp::Ordering;

use crate::fs::entry::FileEntry;

/// Orders entries for display: directories first, then case-insensitive by name.
///
/// Names that differ only in case fall back to a case-sensitive comparison
/// so the order is total and stable across refreshes.
pub fn sort_for_listing(entries: &[FileEntry]) -> Vec<FileEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(compare_for_listing);
    sorted
}

fn compare_for_listing(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
        .then_with(|| a.name().cmp(b.name()))
}

/// Removes dot-prefixed entries unless `show_hidden` is set.
pub fn filter_hidden(entries: Vec<FileEntry>, show_hidden: bool) -> Vec<FileEntry> {
    if show_hidden {
        return entries;
    }
    entries.into_iter().filter(|e| !e.is_hidden()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::ops::read_directory;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_entries(tmp: &TempDir) -> Vec<FileEntry> {
        fs::write(tmp.path().join("banana.txt"), "bb").unwrap();
        fs::write(tmp.path().join("Apple.rs"), "a").unwrap();
        fs::write(tmp.path().join("cherry.md"), "ccc").unwrap();
        fs::write(tmp.path().join(".env"), "").unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();
        fs::create_dir(tmp.path().join("Docs")).unwrap();
        read_directory(tmp.path()).unwrap()
    }

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn directories_first_then_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);

        let sorted = sort_for_listing(&entries);

        assert_eq!(
            names(&sorted),
            vec!["Docs", "src", ".env", "Apple.rs", "banana.txt", "cherry.md"]
        );
    }

    #[test]
    fn filter_hidden_drops_dot_files() {
        let tmp = TempDir::new().unwrap();
        let entries = create_test_entries(&tmp);

        let visible = filter_hidden(entries.clone(), false);
        let all = filter_hidden(entries, true);

        assert_eq!(visible.len(), 5);
        assert!(visible.iter().all(|e| !e.is_hidden()));
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn sort_empty() {
        assert!(sort_for_listing(&[]).is_empty());
    }
}
