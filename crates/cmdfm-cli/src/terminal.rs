//! crossterm-backed terminal for the navigator.
//!
//! [`TtySurface`] owns the raw-mode / alternate-screen session; dropping it
//! restores the terminal on every exit path.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;

use cmdfm_core::error::CoreResult;
use cmdfm_core::nav::navigator::{KeySource, NavKey, Navigator, Surface, SurfaceFactory};
use cmdfm_core::TerminalSurface;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Maps a crossterm key event to a navigator key.
///
/// Returns `None` for events the navigator should not see at all
/// (key releases and repeats).
pub fn map_key(key: &KeyEvent) -> Option<NavKey> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let mapped = match key.code {
        KeyCode::Up => NavKey::Up,
        KeyCode::Down => NavKey::Down,
        KeyCode::Enter => NavKey::Enter,
        KeyCode::Backspace => NavKey::Backspace,
        KeyCode::Delete => NavKey::Delete,
        KeyCode::Esc => NavKey::Escape,
        KeyCode::Char('c') if ctrl => NavKey::Escape,
        KeyCode::Char(c) if !ctrl => NavKey::Char(c),
        _ => NavKey::Other,
    };
    Some(mapped)
}

/// Blocking key reader over crossterm's event stream.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> CoreResult<Option<NavKey>> {
        loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e.into()),
            };
            match map_event(&event) {
                Some(Input::Key(key)) => return Ok(Some(key)),
                Some(Input::EndOfInput) => return Ok(None),
                None => {}
            }
        }
    }
}

/// What a terminal event means to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(NavKey),
    EndOfInput,
}

/// Translates one crossterm event; `None` for events to skip.
pub fn map_event(event: &Event) -> Option<Input> {
    match event {
        Event::Key(key) if is_end_of_input(key) => Some(Input::EndOfInput),
        Event::Key(key) => map_key(key).map(Input::Key),
        Event::Resize(_, _) => Some(Input::Key(NavKey::Resize)),
        _ => None,
    }
}

/// Ctrl-D closes the input like end-of-file would.
fn is_end_of_input(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && key.code == KeyCode::Char('d')
}

/// The interactive terminal session used by `navigate`.
pub struct TtySurface {
    inner: TerminalSurface<CrosstermBackend<Stdout>, CrosstermKeys>,
}

impl TtySurface {
    /// Enters raw mode and the alternate screen.
    pub fn open() -> CoreResult<Self> {
        enable_raw_mode()?;
        match Self::enter() {
            Ok(surface) => Ok(surface),
            Err(e) => {
                let _ = disable_raw_mode();
                Err(e)
            }
        }
    }

    fn enter() -> CoreResult<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        Ok(Self {
            inner: TerminalSurface::new(terminal, CrosstermKeys),
        })
    }
}

impl Surface for TtySurface {
    fn next_key(&mut self) -> CoreResult<Option<NavKey>> {
        self.inner.next_key()
    }

    fn viewport_rows(&mut self) -> CoreResult<usize> {
        self.inner.viewport_rows()
    }

    fn draw(&mut self, navigator: &Navigator) -> CoreResult<()> {
        self.inner.draw(navigator)
    }
}

impl Drop for TtySurface {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let terminal = self.inner.terminal_mut();
        let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();
    }
}

/// Factory handed to the dispatcher; each `navigate` opens a fresh session.
pub fn surface_factory() -> SurfaceFactory {
    Arc::new(|| -> CoreResult<Box<dyn Surface>> { Ok(Box::new(TtySurface::open()?)) })
}

/// Installs a panic hook that restores the terminal before printing the panic.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
