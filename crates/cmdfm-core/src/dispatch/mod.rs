//! Command dispatch.
//!
//! [`registry::CommandRegistry`] maps names to command factories,
//! [`dispatcher::Dispatcher`] runs the validate → execute protocol and
//! records undoable commands on an [`undo::UndoStack`].

pub mod dispatcher;
pub mod registry;
pub mod undo;

pub use dispatcher::{Dispatcher, Outcome};
pub use registry::{CommandDescriptor, CommandRegistry};
pub use undo::UndoStack;
