//! Read-only file metadata snapshots shown by the navigator's info overlay.

use std::fmt::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Format used by [`FileMetadata`]'s `Display` impl.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Snapshot of a path's attributes at the moment it was read.
///
/// Never mutated after construction. Timestamps are optional because not
/// every filesystem reports them (creation time in particular).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    path: PathBuf,
    size: u64,
    created: Option<SystemTime>,
    modified: Option<SystemTime>,
    accessed: Option<SystemTime>,
    is_dir: bool,
    is_file: bool,
    permissions: String,
}

impl FileMetadata {
    /// Builds a snapshot from `std::fs::Metadata`.
    pub fn from_std(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        Self {
            path,
            size: metadata.len(),
            created: metadata.created().ok(),
            modified: metadata.modified().ok(),
            accessed: metadata.accessed().ok(),
            is_dir: metadata.is_dir(),
            is_file: metadata.is_file(),
            permissions: permission_string(metadata),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last path component, or the full path for roots.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn created(&self) -> Option<SystemTime> {
        self.created
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    pub fn accessed(&self) -> Option<SystemTime> {
        self.accessed
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }

    /// `rwxr-xr-x` style on Unix, `read-only`/`read-write` elsewhere.
    pub fn permissions(&self) -> &str {
        &self.permissions
    }

    /// `"Directory"` or `"File"`.
    pub fn type_label(&self) -> &'static str {
        if self.is_dir {
            "Directory"
        } else {
            "File"
        }
    }
}

impl fmt::Display for FileMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}B - Created: {} - Modified: {} - Permissions: {}",
            self.name(),
            self.type_label(),
            self.size,
            format_time(self.created, DEFAULT_DATE_FORMAT),
            format_time(self.modified, DEFAULT_DATE_FORMAT),
            self.permissions
        )
    }
}

/// Formats an optional timestamp in local time, `"unknown"` when absent.
///
/// An invalid `format` falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_time(time: Option<SystemTime>, format: &str) -> String {
    let Some(time) = time else {
        return "unknown".to_string();
    };
    let local = DateTime::<Local>::from(time);
    let mut out = String::new();
    if write!(out, "{}", local.format(format)).is_err() {
        return local.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}

#[cfg(unix)]
fn permission_string(metadata: &std::fs::Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode();
    let flags = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];
    flags
        .iter()
        .map(|&(bit, c)| if mode & bit != 0 { c } else { '-' })
        .collect()
}

#[cfg(not(unix))]
fn permission_string(metadata: &std::fs::Metadata) -> String {
    if metadata.permissions().readonly() {
        "read-only".to_string()
    } else {
        "read-write".to_string()
    }
}
