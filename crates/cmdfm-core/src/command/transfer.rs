//! `move` and `copy`: commands with a source and a target path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::command::{
    parent_of, require_absent, require_exists, require_outside, require_writable,
};
use crate::command::{Command, CommandKind};
use crate::error::CoreResult;
use crate::fs::port::FileOperationPort;

/// Moves `source` to `target`. Undo moves it back.
#[derive(Debug)]
pub struct MoveCommand {
    port: Arc<dyn FileOperationPort>,
    source: PathBuf,
    target: PathBuf,
    executed: bool,
}

impl MoveCommand {
    pub fn new(port: Arc<dyn FileOperationPort>, source: PathBuf, target: PathBuf) -> Self {
        Self {
            port,
            source,
            target,
            executed: false,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl Command for MoveCommand {
    fn kind(&self) -> CommandKind {
        CommandKind::Move
    }

    fn validate(&self) -> CoreResult<()> {
        let port = self.port.as_ref();
        require_exists(port, &self.source)?;
        require_absent(port, &self.target)?;
        require_outside(&self.source, &self.target)?;
        require_writable(port, &parent_of(&self.source))?;
        require_writable(port, &parent_of(&self.target))
    }

    fn execute(&mut self) -> CoreResult<()> {
        self.validate()?;
        self.port
            .move_file(&self.source, &self.target)
            .map_err(|e| e.during("move"))?;
        self.executed = true;
        Ok(())
    }

    fn undo(&mut self) -> CoreResult<bool> {
        if !self.executed {
            return Ok(false);
        }
        self.port
            .move_file(&self.target, &self.source)
            .map_err(|e| e.during("undo move"))?;
        self.executed = false;
        Ok(true)
    }

    fn is_executed(&self) -> bool {
        self.executed
    }

    fn summary(&self) -> String {
        format!(
            "moved {} -> {}",
            self.source.display(),
            self.target.display()
        )
    }
}

/// Copies `source` to `target`. Undo deletes the copy.
#[derive(Debug)]
pub struct CopyCommand {
    port: Arc<dyn FileOperationPort>,
    source: PathBuf,
    target: PathBuf,
    executed: bool,
}

impl CopyCommand {
    pub fn new(port: Arc<dyn FileOperationPort>, source: PathBuf, target: PathBuf) -> Self {
        Self {
            port,
            source,
            target,
            executed: false,
        }
    }
}

impl Command for CopyCommand {
    fn kind(&self) -> CommandKind {
        CommandKind::Copy
    }

    fn validate(&self) -> CoreResult<()> {
        require_exists(self.port.as_ref(), &self.source)?;
        require_absent(self.port.as_ref(), &self.target)?;
        require_outside(&self.source, &self.target)
    }

    fn execute(&mut self) -> CoreResult<()> {
        self.validate()?;
        self.port
            .copy_file(&self.source, &self.target)
            .map_err(|e| e.during("copy"))?;
        self.executed = true;
        Ok(())
    }

    fn undo(&mut self) -> CoreResult<bool> {
        if !self.executed {
            return Ok(false);
        }
        self.port
            .delete_file(&self.target)
            .map_err(|e| e.during("undo copy"))?;
        self.executed = false;
        Ok(true)
    }

    fn is_executed(&self) -> bool {
        self.executed
    }

    fn summary(&self) -> String {
        format!(
            "copied {} -> {}",
            self.source.display(),
            self.target.display()
        )
    }
}
