//! cmdfm core library: file commands, dispatch, and the interactive navigator.
//!
//! `cmdfm-core` holds everything except process setup. The binary crate
//! (`cmdfm-cli`) only wires a terminal, a config file, and logging around
//! a [`Dispatcher`].
//!
//! # Modules
//!
//! - [`fs`]: the [`FileOperationPort`] capability trait and its local implementation [`LocalFs`].
//! - [`command`]: the [`Command`] trait and one struct per command kind.
//! - [`dispatch`]: [`CommandRegistry`], [`Dispatcher`] and the undo history.
//! - [`nav`]: the [`Navigator`] state machine and its ratatui rendering.
//! - [`config`]: TOML-based settings.
//! - [`error`]: unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fs;
pub mod nav;

pub use command::{Command, CommandContext, CommandKind};
pub use config::settings::Config;
pub use dispatch::{CommandRegistry, Dispatcher, Outcome, UndoStack};
pub use error::{CoreError, CoreResult};
pub use fs::entry::FileEntry;
pub use fs::{FileMetadata, FileOperationPort, LocalFs};
pub use nav::navigator::{
    KeySource, NavKey, Navigator, NavigatorExit, Surface, SurfaceFactory, TerminalSurface,
};
