//! `delete`: remove a file or directory. Not undoable.

use std::path::PathBuf;
use std::sync::Arc;

use crate::command::{require_exists, require_writable, Command, CommandKind};
use crate::error::CoreResult;
use crate::fs::port::FileOperationPort;

#[derive(Debug)]
pub struct DeleteCommand {
    port: Arc<dyn FileOperationPort>,
    source: PathBuf,
    executed: bool,
}

impl DeleteCommand {
    pub fn new(port: Arc<dyn FileOperationPort>, source: PathBuf) -> Self {
        Self {
            port,
            source,
            executed: false,
        }
    }
}

impl Command for DeleteCommand {
    fn kind(&self) -> CommandKind {
        CommandKind::Delete
    }

    fn validate(&self) -> CoreResult<()> {
        require_exists(self.port.as_ref(), &self.source)?;
        require_writable(self.port.as_ref(), &self.source)
    }

    fn execute(&mut self) -> CoreResult<()> {
        self.validate()?;
        self.port
            .delete_file(&self.source)
            .map_err(|e| e.during("delete"))?;
        self.executed = true;
        Ok(())
    }

    fn is_executed(&self) -> bool {
        self.executed
    }

    fn summary(&self) -> String {
        format!("deleted {}", self.source.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::test_support::FlakyFs;
    use crate::fs::LocalFs;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn deletes_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("junk.txt");
        fs::write(&path, "x").unwrap();

        let mut cmd = DeleteCommand::new(Arc::new(LocalFs::new()), path.clone());
        cmd.execute().unwrap();

        assert!(!path.exists());
        assert!(cmd.is_executed());
    }

    #[test]
    fn missing_source_reports_does_not_exist() {
        let tmp = TempDir::new().unwrap();
        let mut cmd =
            DeleteCommand::new(Arc::new(LocalFs::new()), tmp.path().join("missing.txt"));

        let err = cmd.execute().unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn read_only_source_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keep.txt");
        fs::write(&path, "x").unwrap();

        let flaky = Arc::new(FlakyFs::default());
        flaky.deny_write(&path);
        let mut cmd = DeleteCommand::new(flaky, path.clone());

        assert!(cmd.execute().unwrap_err().is_invalid_argument());
        assert!(path.exists());
    }

    #[test]
    fn never_undoable() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gone.txt");
        fs::write(&path, "x").unwrap();

        let mut cmd = DeleteCommand::new(Arc::new(LocalFs::new()), path);
        assert!(!cmd.is_undoable());
        cmd.execute().unwrap();

        assert!(!cmd.is_undoable());
        assert!(!cmd.undo().unwrap());
    }
}
