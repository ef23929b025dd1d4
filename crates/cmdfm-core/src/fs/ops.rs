//! Filesystem operations over the host OS.
//!
//! The free functions mirror the [`FileOperationPort`] methods; [`LocalFs`]
//! bundles them behind the trait so commands can be tested against other
//! implementations.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::archive;
use crate::fs::entry::FileEntry;
use crate::fs::metadata::FileMetadata;
use crate::fs::port::FileOperationPort;

/// [`FileOperationPort`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileOperationPort for LocalFs {
    fn move_file(&self, source: &Path, target: &Path) -> CoreResult<()> {
        move_file(source, target)
    }

    fn copy_file(&self, source: &Path, target: &Path) -> CoreResult<()> {
        copy_file(source, target)
    }

    fn rename_file(&self, source: &Path, new_name: &str) -> CoreResult<PathBuf> {
        rename_file(source, new_name)
    }

    fn delete_file(&self, path: &Path) -> CoreResult<()> {
        delete_file(path)
    }

    fn compress_file(&self, source: &Path) -> CoreResult<PathBuf> {
        archive::compress_to_zip(source)
    }

    fn file_info(&self, path: &Path) -> CoreResult<FileMetadata> {
        let metadata = std::fs::metadata(path).map_err(|e| map_io_error(e, path))?;
        Ok(FileMetadata::from_std(path.to_path_buf(), &metadata))
    }

    fn list_directory(&self, path: &Path) -> CoreResult<Vec<FileEntry>> {
        read_directory(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path_exists(path)
    }

    fn is_writable(&self, path: &Path) -> bool {
        is_writable(path)
    }
}

/// Reads the immediate contents of a directory and returns them as [`FileEntry`] values.
///
/// The returned entries are **unsorted**. Use [`crate::nav::filter::sort_for_listing`]
/// to order them for display. Entries whose metadata cannot be read are skipped.
///
/// # Errors
///
/// - [`CoreError::NotFound`]: the path does not exist.
/// - [`CoreError::NotADirectory`]: the path is not a directory.
/// - [`CoreError::PermissionDenied`]: read access is denied.
/// - [`CoreError::Io`]: any other I/O error.
pub fn read_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| map_io_error(e, path))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let Ok(dir_entry) = dir_entry else {
            continue;
        };
        // Follow symlinks so linked directories can be entered.
        let Ok(metadata) = std::fs::metadata(dir_entry.path()).or_else(|_| dir_entry.metadata())
        else {
            continue;
        };
        entries.push(FileEntry::new(dir_entry.path(), &metadata));
    }

    Ok(entries)
}

/// Copies a file or directory recursively to `dest`.
///
/// Symlinks are recreated as symlinks rather than followed.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `src` does not exist.
/// - [`CoreError::AlreadyExists`] if `dest` exists.
/// - [`CoreError::Io`] for any I/O failure during copy. A failure part-way
///   through a directory copy leaves the partial tree in place.
pub fn copy_file(src: &Path, dest: &Path) -> CoreResult<()> {
    let meta = std::fs::symlink_metadata(src).map_err(|e| map_io_error(e, src))?;
    ensure_absent(dest)?;
    if meta.is_dir() {
        ensure_not_within(src, dest)?;
    }

    if meta.is_dir() {
        copy_dir_recursive(src, dest, 0)?;
    } else if meta.is_symlink() {
        copy_symlink(src, dest)?;
    } else {
        std::fs::copy(src, dest).map_err(|e| map_io_error(e, dest))?;
    }

    tracing::info!("copied {} -> {}", src.display(), dest.display());
    Ok(())
}

/// Maximum recursion depth for copy_dir_recursive to prevent symlink loops.
const MAX_COPY_DEPTH: usize = 64;

fn copy_dir_recursive(src: &Path, dest: &Path, depth: usize) -> CoreResult<()> {
    if depth > MAX_COPY_DEPTH {
        return Err(CoreError::Io(std::io::Error::other(format!(
            "maximum recursion depth ({MAX_COPY_DEPTH}) exceeded during copy"
        ))));
    }

    std::fs::create_dir(dest).map_err(|e| map_io_error(e, dest))?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let entry_path = entry.path();
        let target = dest.join(entry.file_name());

        // file_type() does not follow symlinks
        let ft = entry.file_type()?;
        if ft.is_symlink() {
            copy_symlink(&entry_path, &target)?;
        } else if ft.is_dir() {
            copy_dir_recursive(&entry_path, &target, depth + 1)?;
        } else {
            std::fs::copy(&entry_path, &target)?;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> CoreResult<()> {
    let link_target = std::fs::read_link(src)?;
    std::os::unix::fs::symlink(&link_target, dest)?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dest: &Path) -> CoreResult<()> {
    std::fs::copy(src, dest)?;
    Ok(())
}

/// Moves a file or directory to `dest`.
///
/// Uses an atomic `rename`. Only a cross-device failure falls back to
/// copy + delete; any other `rename` error is returned with nothing changed.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `src` does not exist.
/// - [`CoreError::AlreadyExists`] if `dest` exists.
/// - [`CoreError::InvalidArgument`] if `dest` lies inside the directory `src`.
/// - [`CoreError::Io`] for any I/O failure.
pub fn move_file(src: &Path, dest: &Path) -> CoreResult<()> {
    let meta = std::fs::symlink_metadata(src).map_err(|e| map_io_error(e, src))?;
    ensure_absent(dest)?;
    if meta.is_dir() {
        ensure_not_within(src, dest)?;
    }

    match std::fs::rename(src, dest) {
        Ok(()) => {}
        Err(e) if is_cross_device(&e) => {
            tracing::debug!("rename crosses devices, falling back to copy + delete");
            copy_file(src, dest)?;
            delete_file(src)?;
        }
        Err(e) => return Err(map_io_error(e, dest)),
    }

    tracing::info!("moved {} -> {}", src.display(), dest.display());
    Ok(())
}

/// Deletes a file or directory (recursively).
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::Io`] for any I/O failure during deletion.
pub fn delete_file(path: &Path) -> CoreResult<()> {
    // symlink_metadata: a link is removed, never its target
    let meta = std::fs::symlink_metadata(path).map_err(|e| map_io_error(e, path))?;

    let result = if meta.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };
    result.map_err(|e| map_io_error(e, path))?;

    tracing::info!("deleted {}", path.display());
    Ok(())
}

/// Renames a file or directory within the same parent directory.
///
/// The `new_name` must be a valid file name (no path separators, not empty,
/// not `.` or `..`). Returns the new path.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::InvalidName`] if `new_name` is invalid.
/// - [`CoreError::AlreadyExists`] if a sibling named `new_name` exists.
/// - [`CoreError::Io`] for any I/O failure.
pub fn rename_file(path: &Path, new_name: &str) -> CoreResult<PathBuf> {
    std::fs::symlink_metadata(path).map_err(|e| map_io_error(e, path))?;

    if !is_valid_filename(new_name) {
        return Err(CoreError::InvalidName(new_name.to_string()));
    }

    let parent = path
        .parent()
        .ok_or_else(|| CoreError::InvalidName("no parent directory".to_string()))?;
    let new_path = parent.join(new_name);
    ensure_absent(&new_path)?;

    std::fs::rename(path, &new_path).map_err(|e| map_io_error(e, path))?;

    tracing::info!("renamed {} -> {}", path.display(), new_path.display());
    Ok(new_path)
}

/// Returns `true` if anything (including a dangling symlink) exists at `path`.
pub fn path_exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Returns `true` if the current process may write to `path`.
#[cfg(unix)]
pub fn is_writable(path: &Path) -> bool {
    nix::unistd::access(path, nix::unistd::AccessFlags::W_OK).is_ok()
}

/// Returns `true` if the current process may write to `path`.
#[cfg(not(unix))]
pub fn is_writable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}

/// Checks that a name can be used as a single path component.
pub fn is_valid_filename(name: &str) -> bool {
    if name.trim().is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\0') {
        return false;
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return false;
    }
    true
}

fn ensure_absent(path: &Path) -> CoreResult<()> {
    if path_exists(path) {
        return Err(CoreError::AlreadyExists(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(unix)]
fn is_cross_device(e: &std::io::Error) -> bool {
    e.raw_os_error() == Some(nix::errno::Errno::EXDEV as i32)
}

#[cfg(windows)]
fn is_cross_device(e: &std::io::Error) -> bool {
    // ERROR_NOT_SAME_DEVICE
    e.raw_os_error() == Some(17)
}

#[cfg(not(any(unix, windows)))]
fn is_cross_device(_e: &std::io::Error) -> bool {
    false
}

/// Returns `true` if `path` is `dir` itself or lies beneath it.
///
/// Both sides are compared in canonical form, so symlinked or `..`-laden
/// spellings of the same location are caught. `path` need not exist.
pub fn is_within(dir: &Path, path: &Path) -> bool {
    match std::fs::canonicalize(dir) {
        Ok(dir) => canonical_prefix(path).starts_with(dir),
        Err(_) => path.starts_with(dir),
    }
}

/// Canonicalizes the longest existing prefix of `path` and re-appends the rest.
fn canonical_prefix(path: &Path) -> PathBuf {
    let mut existing = path;
    let mut rest = Vec::new();
    loop {
        if let Ok(canonical) = std::fs::canonicalize(existing) {
            return rest
                .iter()
                .rev()
                .fold(canonical, |acc: PathBuf, name| acc.join(name));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}

fn ensure_not_within(src: &Path, dest: &Path) -> CoreResult<()> {
    if is_within(src, dest) {
        return Err(CoreError::InvalidArgument(format!(
            "cannot place {} inside itself",
            src.display()
        )));
    }
    Ok(())
}

pub(crate) fn map_io_error(e: std::io::Error, path: &Path) -> CoreError {
    match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
        std::io::ErrorKind::AlreadyExists => CoreError::AlreadyExists(path.to_path_buf()),
        _ => CoreError::Io(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_directory_returns_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("file1.txt"), "hello").unwrap();
        fs::write(tmp.path().join("file2.txt"), "world").unwrap();
        fs::create_dir(tmp.path().join("subdir")).unwrap();

        let entries = read_directory(tmp.path()).unwrap();

        assert_eq!(entries.len(), 3);
        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert!(names.contains(&"file1.txt"));
        assert!(names.contains(&"file2.txt"));
        assert!(names.contains(&"subdir"));
    }

    #[test]
    fn read_directory_nonexistent_returns_not_found() {
        let result = read_directory(Path::new("/nonexistent/path/that/does/not/exist"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn read_directory_on_file_returns_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("not_a_dir.txt");
        fs::write(&file_path, "content").unwrap();

        let result = read_directory(&file_path);
        assert!(matches!(result.unwrap_err(), CoreError::NotADirectory(_)));
    }

    #[test]
    fn read_directory_only_lists_top_level() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("subdir")).unwrap();
        fs::write(tmp.path().join("subdir").join("nested.txt"), "").unwrap();
        fs::write(tmp.path().join("top.txt"), "").unwrap();

        let entries = read_directory(tmp.path()).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(entries.len(), 2);
        assert!(!names.contains(&"nested.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn read_directory_follows_directory_symlinks() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("dangling")).unwrap();

        let entries = read_directory(tmp.path()).unwrap();
        let link = entries.iter().find(|e| e.name() == "link").unwrap();

        assert!(link.is_dir());
        assert!(entries.iter().any(|e| e.name() == "dangling" && !e.is_dir()));
    }

    // --- copy_file ---

    #[test]
    fn copy_file_regular() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.txt");
        let dest = tmp.path().join("dest.txt");
        fs::write(&src, "content").unwrap();

        copy_file(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(&src).unwrap(), "content");
        assert_eq!(fs::read_to_string(&dest).unwrap(), "content");
    }

    #[test]
    fn copy_file_directory_recursive() {
        let tmp = TempDir::new().unwrap();
        let src_dir = tmp.path().join("src_dir");
        fs::create_dir(&src_dir).unwrap();
        fs::write(src_dir.join("a.txt"), "aaa").unwrap();
        fs::create_dir(src_dir.join("nested")).unwrap();
        fs::write(src_dir.join("nested").join("b.txt"), "bbb").unwrap();

        let dest_dir = tmp.path().join("dest_dir");
        copy_file(&src_dir, &dest_dir).unwrap();

        assert_eq!(fs::read_to_string(dest_dir.join("a.txt")).unwrap(), "aaa");
        assert_eq!(
            fs::read_to_string(dest_dir.join("nested").join("b.txt")).unwrap(),
            "bbb"
        );
    }

    #[test]
    fn copy_file_refuses_existing_target() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dest, "old").unwrap();

        let err = copy_file(&src, &dest).unwrap_err();

        assert!(matches!(err, CoreError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "old");
    }

    #[test]
    fn copy_file_missing_source() {
        let tmp = TempDir::new().unwrap();
        let err = copy_file(&tmp.path().join("nope"), &tmp.path().join("dest")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn copy_file_keeps_symlinks_as_links() {
        let tmp = TempDir::new().unwrap();
        let src_dir = tmp.path().join("src");
        fs::create_dir(&src_dir).unwrap();
        fs::write(src_dir.join("real.txt"), "data").unwrap();
        std::os::unix::fs::symlink("real.txt", src_dir.join("link.txt")).unwrap();

        let dest_dir = tmp.path().join("dest");
        copy_file(&src_dir, &dest_dir).unwrap();

        let link_meta = fs::symlink_metadata(dest_dir.join("link.txt")).unwrap();
        assert!(link_meta.file_type().is_symlink());
    }

    // --- move_file ---

    #[test]
    fn move_file_renames_in_place() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");
        fs::write(&src, "payload").unwrap();

        move_file(&src, &dest).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "payload");
    }

    #[test]
    fn move_file_refuses_existing_target() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");
        fs::write(&src, "a").unwrap();
        fs::write(&dest, "b").unwrap();

        let err = move_file(&src, &dest).unwrap_err();

        assert!(matches!(err, CoreError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(&src).unwrap(), "a");
        assert_eq!(fs::read_to_string(&dest).unwrap(), "b");
    }

    #[test]
    fn move_file_directory() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("dir");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("inner.txt"), "x").unwrap();
        let dest = tmp.path().join("moved");

        move_file(&src, &dest).unwrap();

        assert!(!src.exists());
        assert!(dest.join("inner.txt").exists());
    }

    fn tree(dir: &Path) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                paths.extend(tree(&path));
            }
            paths.push(path);
        }
        paths.sort();
        paths
    }

    #[test]
    fn move_file_into_own_subtree_is_refused() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("d");
        fs::create_dir_all(src.join("sub")).unwrap();
        fs::write(src.join("f.txt"), "f").unwrap();
        let before = tree(tmp.path());

        let err = move_file(&src, &src.join("sub").join("d")).unwrap_err();

        assert!(err.is_invalid_argument());
        assert_eq!(tree(tmp.path()), before);
    }

    #[test]
    fn copy_file_into_own_subtree_is_refused() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("d");
        fs::create_dir_all(src.join("sub")).unwrap();
        fs::write(src.join("f.txt"), "f").unwrap();
        let before = tree(tmp.path());

        // Same location spelled through `..`.
        let dest = src.join("sub").join("..").join("copy");
        let err = copy_file(&src, &dest).unwrap_err();

        assert!(err.is_invalid_argument());
        assert_eq!(tree(tmp.path()), before);
    }

    #[test]
    fn copy_file_next_to_source_with_shared_prefix() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("d");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("f.txt"), "f").unwrap();

        copy_file(&src, &tmp.path().join("d2")).unwrap();

        assert!(tmp.path().join("d2").join("f.txt").exists());
    }

    #[test]
    fn move_file_failed_rename_does_not_copy() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, "a").unwrap();
        let before = tree(tmp.path());

        let err = move_file(&src, &tmp.path().join("missing").join("a.txt")).unwrap_err();

        assert!(matches!(err, CoreError::NotFound(_)));
        assert_eq!(tree(tmp.path()), before);
        assert_eq!(fs::read_to_string(&src).unwrap(), "a");
    }

    #[test]
    fn is_within_matches_self_and_descendants_only() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("d");
        fs::create_dir(&dir).unwrap();

        assert!(is_within(&dir, &dir));
        assert!(is_within(&dir, &dir.join("new").join("deeper")));
        assert!(!is_within(&dir, &tmp.path().join("d2")));
        assert!(!is_within(&dir, tmp.path()));
    }

    #[cfg(unix)]
    #[test]
    fn is_within_sees_through_symlinks() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("d");
        fs::create_dir(&dir).unwrap();
        std::os::unix::fs::symlink(&dir, tmp.path().join("alias")).unwrap();

        assert!(is_within(&dir, &tmp.path().join("alias").join("x")));
    }

    // --- delete_file ---

    #[test]
    fn delete_file_regular_and_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        let dir = tmp.path().join("d");
        fs::write(&file, "").unwrap();
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("inner"), "").unwrap();

        delete_file(&file).unwrap();
        delete_file(&dir).unwrap();

        assert!(!file.exists());
        assert!(!dir.exists());
    }

    #[test]
    fn delete_file_missing_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = delete_file(&tmp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    // --- rename_file ---

    #[test]
    fn rename_file_returns_new_path() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("notes.txt");
        fs::write(&src, "n").unwrap();

        let new_path = rename_file(&src, "todo.txt").unwrap();

        assert_eq!(new_path, tmp.path().join("todo.txt"));
        assert!(!src.exists());
        assert!(new_path.exists());
    }

    #[test]
    fn rename_file_rejects_bad_names() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, "").unwrap();

        for bad in ["", "  ", ".", "..", "x/y"] {
            let err = rename_file(&src, bad).unwrap_err();
            assert!(matches!(err, CoreError::InvalidName(_)), "accepted {bad:?}");
        }
        assert!(src.exists());
    }

    #[test]
    fn rename_file_refuses_existing_sibling() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, "a").unwrap();
        fs::write(tmp.path().join("b.txt"), "b").unwrap();

        let err = rename_file(&src, "b.txt").unwrap_err();

        assert!(matches!(err, CoreError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(tmp.path().join("b.txt")).unwrap(), "b");
    }

    // --- queries ---

    #[test]
    fn exists_and_writable_on_temp_dir() {
        let tmp = TempDir::new().unwrap();
        let fs_port = LocalFs::new();

        assert!(fs_port.exists(tmp.path()));
        assert!(fs_port.is_writable(tmp.path()));
        assert!(!fs_port.exists(&tmp.path().join("ghost")));
        assert!(!fs_port.is_writable(&tmp.path().join("ghost")));
    }

    #[test]
    fn file_info_reports_size() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("f.bin");
        fs::write(&path, [0u8; 64]).unwrap();

        let info = LocalFs::new().file_info(&path).unwrap();

        assert_eq!(info.size(), 64);
        assert!(info.is_file());
    }

    #[test]
    fn file_info_missing_path() {
        let tmp = TempDir::new().unwrap();
        let err = LocalFs::new()
            .file_info(&tmp.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }
}
