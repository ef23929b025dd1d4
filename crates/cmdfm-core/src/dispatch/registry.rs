//! Registry of every command the dispatcher can build.
//!
//! The table is built once per process ([`CommandRegistry::global`]) and is
//! immutable afterwards. Each [`CommandDescriptor`] carries the static
//! metadata used for help text plus the factory that turns raw arguments
//! into a [`Command`].

use std::sync::{Arc, OnceLock};

use crate::command::{
    Command, CommandContext, CommandKind, CompressCommand, CopyCommand, DeleteCommand,
    MoveCommand, NavigateCommand, RenameCommand,
};
use crate::error::{CoreError, CoreResult};

/// Builds a command from the dispatcher context and its positional arguments.
pub type CommandFactory = fn(&CommandContext, &[String]) -> CoreResult<Box<dyn Command>>;

/// Metadata and factory for one registered command.
#[derive(Clone, Copy)]
pub struct CommandDescriptor {
    pub kind: CommandKind,
    pub factory: CommandFactory,
}

impl std::fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl CommandDescriptor {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    pub fn usage(&self) -> String {
        self.kind.usage()
    }

    /// Fewest positional arguments the command accepts.
    pub fn min_args(&self) -> usize {
        self.kind.required_parameters().len()
    }

    /// Runs the factory after checking the argument count.
    pub fn build(&self, ctx: &CommandContext, args: &[String]) -> CoreResult<Box<dyn Command>> {
        if args.len() < self.min_args() {
            return Err(CoreError::InvalidArgument(format!(
                "expected {} argument(s), got {}; usage: {}",
                self.min_args(),
                args.len(),
                self.usage()
            )));
        }
        (self.factory)(ctx, args)
    }
}

/// Lookup table from command name to descriptor.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    descriptors: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Builds the registry containing every command kind.
    pub fn new() -> Self {
        let descriptors = CommandKind::ALL
            .iter()
            .map(|&kind| CommandDescriptor {
                kind,
                factory: factory_for(kind),
            })
            .collect();
        Self { descriptors }
    }

    /// The process-wide registry.
    pub fn global() -> &'static CommandRegistry {
        static REGISTRY: OnceLock<CommandRegistry> = OnceLock::new();
        REGISTRY.get_or_init(CommandRegistry::new)
    }

    /// Returns all descriptors, in help-text order.
    pub fn all(&self) -> &[CommandDescriptor] {
        &self.descriptors
    }

    /// Case-insensitive lookup by command name.
    pub fn find(&self, name: &str) -> Option<&CommandDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn factory_for(kind: CommandKind) -> CommandFactory {
    match kind {
        CommandKind::Move => build_move,
        CommandKind::Copy => build_copy,
        CommandKind::Rename => build_rename,
        CommandKind::Delete => build_delete,
        CommandKind::Compress => build_compress,
        CommandKind::Navigate => build_navigate,
    }
}

fn arg<'a>(args: &'a [String], index: usize) -> CoreResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| CoreError::InvalidArgument(format!("missing argument #{}", index + 1)))
}

fn build_move(ctx: &CommandContext, args: &[String]) -> CoreResult<Box<dyn Command>> {
    Ok(Box::new(MoveCommand::new(
        Arc::clone(&ctx.port),
        ctx.resolve(arg(args, 0)?),
        ctx.resolve(arg(args, 1)?),
    )))
}

fn build_copy(ctx: &CommandContext, args: &[String]) -> CoreResult<Box<dyn Command>> {
    Ok(Box::new(CopyCommand::new(
        Arc::clone(&ctx.port),
        ctx.resolve(arg(args, 0)?),
        ctx.resolve(arg(args, 1)?),
    )))
}

fn build_rename(ctx: &CommandContext, args: &[String]) -> CoreResult<Box<dyn Command>> {
    // The new name is taken verbatim; it is a name, not a path.
    Ok(Box::new(RenameCommand::new(
        Arc::clone(&ctx.port),
        ctx.resolve(arg(args, 0)?),
        arg(args, 1)?.to_string(),
    )))
}

fn build_delete(ctx: &CommandContext, args: &[String]) -> CoreResult<Box<dyn Command>> {
    Ok(Box::new(DeleteCommand::new(
        Arc::clone(&ctx.port),
        ctx.resolve(arg(args, 0)?),
    )))
}

fn build_compress(ctx: &CommandContext, args: &[String]) -> CoreResult<Box<dyn Command>> {
    Ok(Box::new(CompressCommand::new(
        Arc::clone(&ctx.port),
        ctx.resolve(arg(args, 0)?),
    )))
}

fn build_navigate(ctx: &CommandContext, _args: &[String]) -> CoreResult<Box<dyn Command>> {
    Ok(Box::new(NavigateCommand::new(
        Arc::clone(&ctx.port),
        ctx.working_dir.clone(),
        ctx.navigator.clone(),
        ctx.surface_factory.clone(),
    )))
}
