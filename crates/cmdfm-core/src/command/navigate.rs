//! `navigate`: run the interactive navigator in the working directory.

use std::path::PathBuf;
use std::sync::Arc;

use crate::command::{Command, CommandKind};
use crate::config::settings::NavigatorConfig;
use crate::error::{CoreError, CoreResult};
use crate::fs::port::FileOperationPort;
use crate::nav::navigator::{ExitReason, Navigator, NavigatorExit, SurfaceFactory};

pub struct NavigateCommand {
    port: Arc<dyn FileOperationPort>,
    start_dir: PathBuf,
    config: NavigatorConfig,
    surface_factory: Option<SurfaceFactory>,
    exit: Option<NavigatorExit>,
}

impl NavigateCommand {
    pub fn new(
        port: Arc<dyn FileOperationPort>,
        start_dir: PathBuf,
        config: NavigatorConfig,
        surface_factory: Option<SurfaceFactory>,
    ) -> Self {
        Self {
            port,
            start_dir,
            config,
            surface_factory,
            exit: None,
        }
    }

    /// Where the navigator stopped, once executed.
    pub fn exit(&self) -> Option<&NavigatorExit> {
        self.exit.as_ref()
    }
}

impl std::fmt::Debug for NavigateCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigateCommand")
            .field("start_dir", &self.start_dir)
            .field("has_surface", &self.surface_factory.is_some())
            .field("exit", &self.exit)
            .finish_non_exhaustive()
    }
}

impl Command for NavigateCommand {
    fn kind(&self) -> CommandKind {
        CommandKind::Navigate
    }

    fn validate(&self) -> CoreResult<()> {
        if self.surface_factory.is_none() {
            return Err(CoreError::InvalidArgument(
                "navigate needs an interactive terminal".to_string(),
            ));
        }
        if !self.port.exists(&self.start_dir) {
            return Err(CoreError::InvalidArgument(format!(
                "directory does not exist: {}",
                self.start_dir.display()
            )));
        }
        Ok(())
    }

    fn execute(&mut self) -> CoreResult<()> {
        self.validate()?;
        let Some(factory) = self.surface_factory.as_ref() else {
            return Ok(());
        };

        let mut surface = factory().map_err(|e| e.during("navigate"))?;
        let navigator = Navigator::open(
            Arc::clone(&self.port),
            self.start_dir.clone(),
            self.config.clone(),
        );
        let exit = navigator
            .run(surface.as_mut())
            .map_err(|e| e.during("navigate"))?;

        tracing::info!("navigator exited in {}", exit.last_dir.display());
        self.exit = Some(exit);
        Ok(())
    }

    fn is_executed(&self) -> bool {
        self.exit.is_some()
    }

    fn summary(&self) -> String {
        match &self.exit {
            Some(NavigatorExit {
                last_dir,
                reason: ExitReason::Quit,
            }) => format!("navigator closed in {}", last_dir.display()),
            Some(NavigatorExit { last_dir, .. }) => {
                format!("navigator input ended in {}", last_dir.display())
            }
            None => format!("navigate {}", self.start_dir.display()),
        }
    }
}
