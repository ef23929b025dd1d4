//! Last-in-first-out history of executed, undoable commands.

use crate::command::Command;

#[derive(Debug, Default)]
pub struct UndoStack {
    entries: Vec<Box<dyn Command>>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `command` if it is undoable and has executed.
    ///
    /// Returns `false` (and drops the command) otherwise.
    pub fn push(&mut self, command: Box<dyn Command>) -> bool {
        if !command.is_undoable() || !command.is_executed() {
            return false;
        }
        self.entries.push(command);
        true
    }

    pub fn peek_mut(&mut self) -> Option<&mut Box<dyn Command>> {
        self.entries.last_mut()
    }

    pub fn pop(&mut self) -> Option<Box<dyn Command>> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
