//! The filesystem capability set consumed by commands and the navigator.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::CoreResult;
use crate::fs::entry::FileEntry;
use crate::fs::metadata::FileMetadata;

/// Raw filesystem actions and queries.
///
/// Implementations must report precondition violations with the specific
/// [`crate::CoreError`] variant (`NotFound`, `AlreadyExists`,
/// `PermissionDenied`, `NotADirectory`, `InvalidName`) and fall back to
/// `Io` for everything else. None of the mutating methods may overwrite an
/// existing target.
///
/// [`crate::fs::LocalFs`] is the implementation over the host OS.
pub trait FileOperationPort: fmt::Debug {
    /// Moves `source` to `target` (file or directory).
    fn move_file(&self, source: &Path, target: &Path) -> CoreResult<()>;

    /// Copies `source` to `target`, recursively for directories.
    fn copy_file(&self, source: &Path, target: &Path) -> CoreResult<()>;

    /// Renames `source` within its parent directory and returns the new path.
    fn rename_file(&self, source: &Path, new_name: &str) -> CoreResult<PathBuf>;

    /// Deletes `path`, recursively for directories.
    fn delete_file(&self, path: &Path) -> CoreResult<()>;

    /// Writes `<source>.zip` next to `source` and returns the archive path.
    fn compress_file(&self, source: &Path) -> CoreResult<PathBuf>;

    /// Reads a metadata snapshot for `path`.
    fn file_info(&self, path: &Path) -> CoreResult<FileMetadata>;

    /// Reads the immediate children of `path`, unsorted.
    fn list_directory(&self, path: &Path) -> CoreResult<Vec<FileEntry>>;

    /// Returns `true` if something (file, directory or link) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if the current process may write to `path`.
    fn is_writable(&self, path: &Path) -> bool;
}
