//! Argument-vector dispatch with an in-memory undo history.

use std::fmt;

use crate::command::CommandContext;
use crate::dispatch::registry::CommandRegistry;
use crate::dispatch::undo::UndoStack;
use crate::error::{CoreError, CoreResult};

const UNDO: &str = "undo";
const HELP: &str = "help";

/// What a successful dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Lower-case name of the command that ran.
    pub command: String,
    /// Human-readable result, possibly several lines (for `help`).
    pub summary: String,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}

/// Resolves argument vectors to commands, runs them, and owns the undo history.
///
/// A failed dispatch never touches the history. Only undoable commands that
/// executed successfully are recorded.
#[derive(Debug)]
pub struct Dispatcher {
    ctx: CommandContext,
    registry: &'static CommandRegistry,
    history: UndoStack,
}

impl Dispatcher {
    pub fn new(ctx: CommandContext) -> Self {
        Self {
            ctx,
            registry: CommandRegistry::global(),
            history: UndoStack::new(),
        }
    }

    /// Number of commands that can currently be undone.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Runs one invocation: `args[0]` is the command name (case-insensitive),
    /// the rest are its arguments.
    pub fn dispatch(&mut self, args: &[String]) -> CoreResult<Outcome> {
        let Some((name, rest)) = args.split_first() else {
            return Err(CoreError::InvalidArgument(
                "no command given; try `help`".to_string(),
            ));
        };

        if name.eq_ignore_ascii_case(UNDO) {
            return self.undo();
        }
        if name.eq_ignore_ascii_case(HELP) {
            return Ok(Outcome {
                command: HELP.to_string(),
                summary: self.help().join("\n"),
            });
        }
        self.run(name, rest)
    }

    fn run(&mut self, name: &str, args: &[String]) -> CoreResult<Outcome> {
        let descriptor = self
            .registry
            .find(name)
            .ok_or_else(|| CoreError::UnknownCommand(name.to_string()))?;

        let mut command = descriptor.build(&self.ctx, args)?;
        command.validate()?;
        if let Err(e) = command.execute() {
            if e.is_invalid_argument() {
                tracing::debug!("{} rejected: {e}", descriptor.name());
            } else {
                tracing::warn!("{} failed: {e}", descriptor.name());
            }
            return Err(e);
        }

        let outcome = Outcome {
            command: descriptor.name().to_string(),
            summary: command.summary(),
        };
        tracing::info!("{}", outcome.summary);

        if command.is_undoable() {
            self.history.push(command);
        }
        Ok(outcome)
    }

    /// Reverses the most recent undoable command.
    ///
    /// The entry is removed only when the reversal succeeds; otherwise it
    /// stays on top so the undo can be retried.
    pub fn undo(&mut self) -> CoreResult<Outcome> {
        let command = self.history.peek_mut().ok_or(CoreError::NothingToUndo)?;
        let name = command.kind().name();
        let summary = command.summary();

        let reason = match command.undo() {
            Ok(true) => {
                self.history.pop();
                tracing::info!("undid: {summary}");
                return Ok(Outcome {
                    command: UNDO.to_string(),
                    summary: format!("undid: {summary}"),
                });
            }
            Ok(false) => "the command has nothing to reverse".to_string(),
            Err(e) => e.to_string(),
        };

        tracing::warn!("undo of {name} failed: {reason}");
        Err(CoreError::UndoFailed {
            command: name.to_string(),
            reason,
        })
    }

    /// Usage lines for every command, including `undo` and `help`.
    pub fn help(&self) -> Vec<String> {
        let mut rows: Vec<(String, &str)> = self
            .registry
            .all()
            .iter()
            .map(|d| (d.usage(), d.description()))
            .collect();
        rows.push((UNDO.to_string(), "Undoes the most recent move, copy or rename"));
        rows.push((HELP.to_string(), "Shows this help"));

        let width = rows.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
        rows.into_iter()
            .map(|(usage, description)| format!("{usage:<width$}  {description}"))
            .collect()
    }
}
