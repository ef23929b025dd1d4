//! Directory listing entry.

use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

/// A single row of a directory listing.
///
/// `FileEntry` is immutable; create new instances via [`FileEntry::new`]
/// rather than mutating existing ones.
///
/// # Examples
///
/// ```no_run
/// use cmdfm_core::FileEntry;
/// use std::fs;
///
/// let metadata = fs::metadata("Cargo.toml").unwrap();
/// let entry = FileEntry::new("Cargo.toml".into(), &metadata);
/// assert_eq!(entry.name(), "Cargo.toml");
/// assert!(!entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    is_hidden: bool,
}

impl FileEntry {
    /// Creates a new `FileEntry` from a path and its metadata.
    ///
    /// The name is normalised to NFC so decomposed names (macOS) render
    /// correctly. Hidden files are detected by a leading `.`.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        let is_hidden = name.starts_with('.');

        Self {
            path,
            name,
            is_dir: metadata.is_dir(),
            is_hidden,
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file or directory name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }
}
