//! `rename`: give a file a new name within its parent directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::command::{parent_of, require_absent, require_exists, require_writable};
use crate::command::{Command, CommandKind};
use crate::error::{CoreError, CoreResult};
use crate::fs::ops::is_valid_filename;
use crate::fs::port::FileOperationPort;

/// State captured by a successful rename, consumed by undo.
#[derive(Debug, Clone)]
struct Renamed {
    new_path: PathBuf,
    old_name: String,
}

/// Renames `source` to `new_name` in the same directory.
#[derive(Debug)]
pub struct RenameCommand {
    port: Arc<dyn FileOperationPort>,
    source: PathBuf,
    new_name: String,
    renamed: Option<Renamed>,
}

impl RenameCommand {
    pub fn new(port: Arc<dyn FileOperationPort>, source: PathBuf, new_name: String) -> Self {
        Self {
            port,
            source,
            new_name,
            renamed: None,
        }
    }

    fn sibling(&self) -> PathBuf {
        parent_of(&self.source).join(&self.new_name)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl Command for RenameCommand {
    fn kind(&self) -> CommandKind {
        CommandKind::Rename
    }

    fn validate(&self) -> CoreResult<()> {
        let port = self.port.as_ref();
        require_exists(port, &self.source)?;
        if self.new_name.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "new name must not be blank".to_string(),
            ));
        }
        if !is_valid_filename(&self.new_name) {
            return Err(CoreError::InvalidArgument(format!(
                "not a valid file name: {}",
                self.new_name
            )));
        }
        require_absent(port, &self.sibling())?;
        require_writable(port, &parent_of(&self.source))
    }

    fn execute(&mut self) -> CoreResult<()> {
        self.validate()?;
        let old_name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                CoreError::InvalidArgument(format!("cannot rename {}", self.source.display()))
            })?;
        let new_path = self
            .port
            .rename_file(&self.source, &self.new_name)
            .map_err(|e| e.during("rename"))?;
        self.renamed = Some(Renamed { new_path, old_name });
        Ok(())
    }

    fn undo(&mut self) -> CoreResult<bool> {
        let Some(renamed) = &self.renamed else {
            return Ok(false);
        };
        self.port
            .rename_file(&renamed.new_path, &renamed.old_name)
            .map_err(|e| e.during("undo rename"))?;
        self.renamed = None;
        Ok(true)
    }

    fn is_executed(&self) -> bool {
        self.renamed.is_some()
    }

    fn summary(&self) -> String {
        format!("renamed {} -> {}", self.source.display(), self.new_name)
    }
}
