//! `compress`: zip a file or directory into `<source>.zip`. Not undoable.

use std::path::PathBuf;
use std::sync::Arc;

use crate::command::{require_absent, require_exists, Command, CommandKind};
use crate::error::CoreResult;
use crate::fs::archive::archive_path_for;
use crate::fs::port::FileOperationPort;

#[derive(Debug)]
pub struct CompressCommand {
    port: Arc<dyn FileOperationPort>,
    source: PathBuf,
    archive: Option<PathBuf>,
}

impl CompressCommand {
    pub fn new(port: Arc<dyn FileOperationPort>, source: PathBuf) -> Self {
        Self {
            port,
            source,
            archive: None,
        }
    }

    /// Path of the written archive, once executed.
    pub fn archive(&self) -> Option<&PathBuf> {
        self.archive.as_ref()
    }
}

impl Command for CompressCommand {
    fn kind(&self) -> CommandKind {
        CommandKind::Compress
    }

    fn validate(&self) -> CoreResult<()> {
        require_exists(self.port.as_ref(), &self.source)?;
        require_absent(self.port.as_ref(), &archive_path_for(&self.source))
    }

    fn execute(&mut self) -> CoreResult<()> {
        self.validate()?;
        let archive = self
            .port
            .compress_file(&self.source)
            .map_err(|e| e.during("compress"))?;
        self.archive = Some(archive);
        Ok(())
    }

    fn is_executed(&self) -> bool {
        self.archive.is_some()
    }

    fn summary(&self) -> String {
        let archive = self
            .archive
            .clone()
            .unwrap_or_else(|| archive_path_for(&self.source));
        format!(
            "compressed {} -> {}",
            self.source.display(),
            archive.display()
        )
    }
}
