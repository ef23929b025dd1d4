//! The command framework.
//!
//! Every file operation is a [`Command`]: a single filesystem intent that is
//! validated, executed, and (for some kinds) undone. Commands are built by
//! factories in [`crate::dispatch::registry`] from a shared
//! [`CommandContext`] and raw string arguments.
//!
//! | Kind | Undoable | Implementation |
//! |---|---|---|
//! | move | yes | [`transfer::MoveCommand`] |
//! | copy | yes | [`transfer::CopyCommand`] |
//! | rename | yes | [`rename::RenameCommand`] |
//! | delete | no | [`delete::DeleteCommand`] |
//! | compress | no | [`compress::CompressCommand`] |
//! | navigate | no | [`navigate::NavigateCommand`] |

pub mod compress;
pub mod delete;
pub mod navigate;
pub mod rename;
pub mod transfer;

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::config::settings::NavigatorConfig;
use crate::error::{CoreError, CoreResult};
use crate::fs::port::FileOperationPort;
use crate::nav::navigator::SurfaceFactory;

pub use compress::CompressCommand;
pub use delete::DeleteCommand;
pub use navigate::NavigateCommand;
pub use rename::RenameCommand;
pub use transfer::{CopyCommand, MoveCommand};

/// The kinds of command the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Move,
    Copy,
    Rename,
    Delete,
    Compress,
    Navigate,
}

impl CommandKind {
    /// Every kind, in help-text order.
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Move,
        CommandKind::Copy,
        CommandKind::Rename,
        CommandKind::Delete,
        CommandKind::Compress,
        CommandKind::Navigate,
    ];

    /// Lower-case name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Copy => "copy",
            Self::Rename => "rename",
            Self::Delete => "delete",
            Self::Compress => "compress",
            Self::Navigate => "navigate",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Move => "Moves a file or directory to a new location",
            Self::Copy => "Copies a file or directory from source to target location",
            Self::Rename => "Renames a file or directory within its parent directory",
            Self::Delete => "Deletes a file or directory",
            Self::Compress => "Compresses a file or directory into <source>.zip",
            Self::Navigate => "Interactive file navigator",
        }
    }

    /// Positional parameter names, in order.
    pub fn required_parameters(self) -> &'static [&'static str] {
        match self {
            Self::Move | Self::Copy => &["source", "target"],
            Self::Rename => &["source", "newName"],
            Self::Delete | Self::Compress => &["source"],
            Self::Navigate => &[],
        }
    }

    /// Whether a successful execution of this kind can be reversed.
    pub fn is_undoable(self) -> bool {
        matches!(self, Self::Move | Self::Copy | Self::Rename)
    }

    /// `move <source> <target>` style usage line.
    pub fn usage(self) -> String {
        std::iter::once(self.name().to_string())
            .chain(self.required_parameters().iter().map(|p| format!("<{p}>")))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single filesystem intent with a validate → execute → undo lifecycle.
///
/// Contract:
/// - [`validate`](Command::validate) has no side effects and may be called
///   any number of times.
/// - [`execute`](Command::execute) validates first and leaves the filesystem
///   untouched when validation fails. On success it captures whatever undo
///   needs and marks the command executed.
/// - [`undo`](Command::undo) returns `Ok(false)` when there is nothing to
///   reverse (never executed, or the kind is not undoable), `Ok(true)` after
///   reversing the effect, and an error if the reversal itself failed, in
///   which case the command stays executed.
pub trait Command: fmt::Debug {
    fn kind(&self) -> CommandKind;

    /// Checks preconditions, failing with [`CoreError::InvalidArgument`].
    fn validate(&self) -> CoreResult<()>;

    /// Performs the operation, failing with [`CoreError::OperationFailed`]
    /// (or the validation error, unchanged).
    fn execute(&mut self) -> CoreResult<()>;

    fn undo(&mut self) -> CoreResult<bool> {
        Ok(false)
    }

    fn is_executed(&self) -> bool;

    /// Human-readable summary of what the command did or will do.
    fn summary(&self) -> String;

    fn is_undoable(&self) -> bool {
        self.kind().is_undoable()
    }

    fn describe(&self) -> &'static str {
        self.kind().description()
    }

    fn required_parameters(&self) -> &'static [&'static str] {
        self.kind().required_parameters()
    }
}

/// Everything a factory needs to build a command.
#[derive(Clone)]
pub struct CommandContext {
    /// Filesystem the commands act on.
    pub port: Arc<dyn FileOperationPort>,
    /// Directory relative arguments are resolved against.
    pub working_dir: PathBuf,
    /// Settings for the `navigate` command.
    pub navigator: NavigatorConfig,
    /// Opens the terminal for `navigate`; `None` when there is no terminal.
    pub surface_factory: Option<SurfaceFactory>,
}

impl CommandContext {
    pub fn new(port: Arc<dyn FileOperationPort>, working_dir: PathBuf) -> Self {
        Self {
            port,
            working_dir,
            navigator: NavigatorConfig::default(),
            surface_factory: None,
        }
    }

    pub fn with_navigator(self, navigator: NavigatorConfig) -> Self {
        Self { navigator, ..self }
    }

    pub fn with_surface_factory(self, factory: SurfaceFactory) -> Self {
        Self {
            surface_factory: Some(factory),
            ..self
        }
    }

    /// Resolves a command-line path argument against the working directory.
    pub fn resolve(&self, arg: &str) -> PathBuf {
        let path = Path::new(arg);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}

impl fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandContext")
            .field("working_dir", &self.working_dir)
            .field("navigator", &self.navigator)
            .field("has_surface", &self.surface_factory.is_some())
            .finish_non_exhaustive()
    }
}

// Shared precondition checks. Each returns InvalidArgument with a message
// suitable for printing to the user.

pub(crate) fn require_exists(port: &dyn FileOperationPort, path: &Path) -> CoreResult<()> {
    if !port.exists(path) {
        return Err(CoreError::InvalidArgument(format!(
            "source does not exist: {}",
            path.display()
        )));
    }
    Ok(())
}

pub(crate) fn require_absent(port: &dyn FileOperationPort, path: &Path) -> CoreResult<()> {
    if port.exists(path) {
        return Err(CoreError::InvalidArgument(format!(
            "target already exists: {}",
            path.display()
        )));
    }
    Ok(())
}

pub(crate) fn require_writable(port: &dyn FileOperationPort, path: &Path) -> CoreResult<()> {
    if !port.exists(path) {
        return Err(CoreError::InvalidArgument(format!(
            "directory does not exist: {}",
            path.display()
        )));
    }
    if !port.is_writable(path) {
        return Err(CoreError::InvalidArgument(format!(
            "no write permission: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Rejects a target that is the source itself or lies beneath it.
///
/// Compared lexically so it works for any port; `LocalFs` repeats the check
/// on canonical paths.
pub(crate) fn require_outside(source: &Path, target: &Path) -> CoreResult<()> {
    if normalize(target).starts_with(normalize(source)) {
        return Err(CoreError::InvalidArgument(format!(
            "target is inside source: {}",
            target.display()
        )));
    }
    Ok(())
}

/// Drops `.` and folds `..` into its parent without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir if out.file_name().is_some() => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Parent directory used for permission checks; `.` for bare relative names.
pub(crate) fn parent_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
