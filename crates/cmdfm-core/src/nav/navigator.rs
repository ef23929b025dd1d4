//! The interactive navigator state machine.
//!
//! The navigator runs a blocking loop over a [`Surface`]: refresh the
//! listing, clamp the scroll window, draw, wait for one key, apply one
//! transition. Nothing happens between keys, so there are no timers and no
//! background work to cancel; reaching [`NavMode::Exited`] ends the loop.
//!
//! ```text
//!            ┌── Up/Down/Enter/Backspace ──┐
//!            ▼                             │
//!        Browsing ─────────────────────────┘
//!         │   ▲ any key
//!       i │   │
//!         ▼   │
//!      ShowingInfo
//!
//!  Browsing ── q/Esc (persist) ──▶ Exited(Quit)
//!  any ── end of input ──────────▶ Exited(EndOfInput)
//! ```

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::config::settings::NavigatorConfig;
use crate::error::CoreResult;
use crate::fs::entry::FileEntry;
use crate::fs::metadata::FileMetadata;
use crate::fs::port::FileOperationPort;
use crate::nav::filter::{filter_hidden, sort_for_listing};
use crate::nav::render;
use crate::nav::state::NavigatorState;

/// Keys the navigator reacts to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Backspace,
    Delete,
    Escape,
    Char(char),
    Other,
    /// The terminal changed size. Triggers a redraw and nothing else.
    Resize,
}

/// Why the navigator stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `q` or Escape; the last directory was persisted.
    Quit,
    /// The key source ran dry; nothing was persisted.
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMode {
    Browsing,
    /// Metadata overlay for one entry; the next key dismisses it.
    ShowingInfo(FileMetadata),
    Exited(ExitReason),
}

/// Where the navigator ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorExit {
    pub last_dir: PathBuf,
    pub reason: ExitReason,
}

/// A terminal the navigator can draw on and read keys from.
pub trait Surface {
    /// Blocks until the next key. `Ok(None)` means input is exhausted.
    fn next_key(&mut self) -> CoreResult<Option<NavKey>>;

    /// Number of rows currently available to the entry list.
    fn viewport_rows(&mut self) -> CoreResult<usize>;

    fn draw(&mut self, navigator: &Navigator) -> CoreResult<()>;
}

/// Opens a [`Surface`]; the surface releases the terminal when dropped.
pub type SurfaceFactory = Arc<dyn Fn() -> CoreResult<Box<dyn Surface>>>;

/// Blocking source of keys for a [`TerminalSurface`].
pub trait KeySource {
    fn next_key(&mut self) -> CoreResult<Option<NavKey>>;
}

/// A fixed queue of keys, exhausted after the last one.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys(VecDeque<NavKey>);

impl From<Vec<NavKey>> for ScriptedKeys {
    fn from(keys: Vec<NavKey>) -> Self {
        Self(keys.into())
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> CoreResult<Option<NavKey>> {
        Ok(self.0.pop_front())
    }
}

/// [`Surface`] over any ratatui backend plus a key source.
pub struct TerminalSurface<B: Backend, K: KeySource> {
    terminal: Terminal<B>,
    keys: K,
}

impl<B: Backend, K: KeySource> TerminalSurface<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K) -> Self {
        Self { terminal, keys }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend, K: KeySource> Surface for TerminalSurface<B, K> {
    fn next_key(&mut self) -> CoreResult<Option<NavKey>> {
        self.keys.next_key()
    }

    fn viewport_rows(&mut self) -> CoreResult<usize> {
        let size = self.terminal.size()?;
        Ok(render::list_rows(size.height))
    }

    fn draw(&mut self, navigator: &Navigator) -> CoreResult<()> {
        self.terminal.draw(|f| render::render(f, navigator))?;
        Ok(())
    }
}

/// Browser over a directory tree, driven one key at a time.
///
/// All transitions consume `self` and return the next navigator.
#[derive(Debug, Clone)]
pub struct Navigator {
    port: Arc<dyn FileOperationPort>,
    state: NavigatorState,
    mode: NavMode,
    config: NavigatorConfig,
    status: Option<String>,
}

impl Navigator {
    /// Starts browsing `start_dir`. An unreadable directory shows as empty.
    pub fn open(
        port: Arc<dyn FileOperationPort>,
        start_dir: PathBuf,
        config: NavigatorConfig,
    ) -> Self {
        let entries = list_entries(port.as_ref(), &start_dir, config.show_hidden);
        Self {
            port,
            state: NavigatorState::new(start_dir, entries),
            mode: NavMode::Browsing,
            config,
            status: None,
        }
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn mode(&self) -> &NavMode {
        &self.mode
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Transient message from the last transition (e.g. a failed lookup).
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Re-reads the current directory so external changes show up.
    pub fn refresh(self) -> Self {
        let entries = list_entries(
            self.port.as_ref(),
            self.state.current_dir(),
            self.config.show_hidden,
        );
        Self {
            state: self.state.with_entries(entries),
            ..self
        }
    }

    /// Clamps the scroll offset to a list window of `rows` lines.
    pub fn with_viewport(self, rows: usize) -> Self {
        Self {
            state: self.state.with_viewport(rows),
            ..self
        }
    }

    /// Applies one key.
    pub fn handle_key(self, key: NavKey) -> Self {
        if key == NavKey::Resize {
            return self;
        }
        let nav = Self {
            status: None,
            ..self
        };
        match nav.mode {
            NavMode::Exited(_) => nav,
            NavMode::ShowingInfo(_) => Self {
                mode: NavMode::Browsing,
                ..nav
            },
            NavMode::Browsing => nav.browse(key),
        }
    }

    /// Input ran out: exit without persisting anything.
    pub fn end_of_input(self) -> Self {
        Self {
            mode: NavMode::Exited(ExitReason::EndOfInput),
            ..self
        }
    }

    fn browse(self, key: NavKey) -> Self {
        match key {
            NavKey::Up => Self {
                state: self.state.move_up(),
                ..self
            },
            NavKey::Down => Self {
                state: self.state.move_down(),
                ..self
            },
            NavKey::Enter => self.enter_selected(),
            NavKey::Backspace | NavKey::Delete => self.go_parent(),
            NavKey::Char('i') => self.show_info(),
            NavKey::Char('q') | NavKey::Escape => self.quit(),
            _ => self,
        }
    }

    fn enter_selected(self) -> Self {
        let target = match self.state.selected_entry() {
            Some(entry) if entry.is_dir() => entry.path().to_path_buf(),
            _ => return self,
        };
        self.change_dir(target)
    }

    fn go_parent(self) -> Self {
        let Some(parent) = self.state.current_dir().parent().map(Path::to_path_buf) else {
            return self;
        };
        self.change_dir(parent)
    }

    fn change_dir(self, path: PathBuf) -> Self {
        tracing::debug!("navigator entering {}", path.display());
        let entries = list_entries(self.port.as_ref(), &path, self.config.show_hidden);
        Self {
            state: self.state.with_directory(path, entries),
            ..self
        }
    }

    fn show_info(self) -> Self {
        let Some(path) = self.state.selected_entry().map(|e| e.path().to_path_buf()) else {
            return self;
        };
        match self.port.file_info(&path) {
            Ok(metadata) => {
                tracing::debug!("info: {metadata}");
                Self {
                    mode: NavMode::ShowingInfo(metadata),
                    ..self
                }
            }
            Err(e) => {
                tracing::warn!("cannot read metadata for {}: {e}", path.display());
                Self {
                    status: Some(format!("cannot read metadata: {e}")),
                    ..self
                }
            }
        }
    }

    fn quit(self) -> Self {
        self.persist_last_dir();
        Self {
            mode: NavMode::Exited(ExitReason::Quit),
            ..self
        }
    }

    /// Writes the current directory to the marker file. Failures are logged.
    fn persist_last_dir(&self) {
        let Some(marker) = self.config.last_dir_path() else {
            return;
        };
        if let Some(parent) = marker.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let contents = self.state.current_dir().to_string_lossy().into_owned();
        if let Err(e) = std::fs::write(&marker, contents) {
            tracing::warn!("failed to save last directory to {}: {e}", marker.display());
        }
    }

    /// Runs the read-key → transition → redraw loop until exit.
    ///
    /// Surface errors (drawing, reading keys) end the loop and are returned.
    pub fn run(self, surface: &mut dyn Surface) -> CoreResult<NavigatorExit> {
        let mut nav = self;
        loop {
            if matches!(nav.mode, NavMode::Browsing) {
                nav = nav.refresh();
            }
            let rows = surface.viewport_rows()?;
            nav = nav.with_viewport(rows);
            surface.draw(&nav)?;

            nav = match surface.next_key()? {
                Some(key) => nav.handle_key(key),
                None => nav.end_of_input(),
            };

            if let NavMode::Exited(reason) = nav.mode {
                return Ok(NavigatorExit {
                    last_dir: nav.state.current_dir().to_path_buf(),
                    reason,
                });
            }
        }
    }
}

fn list_entries(
    port: &dyn FileOperationPort,
    dir: &Path,
    show_hidden: bool,
) -> Vec<FileEntry> {
    match port.list_directory(dir) {
        Ok(entries) => sort_for_listing(&filter_hidden(entries, show_hidden)),
        Err(e) => {
            tracing::warn!("cannot list {}: {e}", dir.display());
            Vec::new()
        }
    }
}
