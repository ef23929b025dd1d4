//! cmdfm: file commands with undo, plus an interactive navigator.
//!
//! This binary loads the config, sets up file logging, builds a
//! [`Dispatcher`] over the local filesystem, and runs each invocation of
//! the argument vector in order. The navigator's terminal session is only
//! opened when `navigate` runs.

mod args;
mod logging;
mod terminal;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use cmdfm_core::{CommandContext, Config, CoreError, Dispatcher, LocalFs};
use crossterm::tty::IsTty;

const USAGE_HINT: &str = "usage: cmdfm <command> [args...] [--then <command> [args...]]...";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let working_dir = std::env::current_dir().context("cannot determine working directory")?;

    let config_path = Config::discover(&working_dir);
    let (config, config_error) = match Config::load_optional(&config_path) {
        Ok(loaded) => (loaded.unwrap_or_default(), None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("warning: logging disabled: {e:#}");
    }
    if let Some(e) = config_error {
        tracing::warn!("ignoring config {}: {e}", config_path.display());
        eprintln!("warning: ignoring config {}: {e}", config_path.display());
    }

    terminal::install_panic_hook();

    let mut ctx = CommandContext::new(Arc::new(LocalFs::new()), working_dir)
        .with_navigator(config.navigator.clone());
    if io::stdout().is_tty() {
        ctx = ctx.with_surface_factory(terminal::surface_factory());
    }
    let mut dispatcher = Dispatcher::new(ctx);

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let invocations = args::split_invocations(&raw);
    if invocations.is_empty() {
        println!("{USAGE_HINT}");
        println!();
        for line in dispatcher.help() {
            println!("  {line}");
        }
        return Ok(ExitCode::FAILURE);
    }

    let mut failed = false;
    for invocation in &invocations {
        tracing::debug!("dispatching {invocation:?}");
        match dispatcher.dispatch(invocation) {
            Ok(outcome) => println!("{outcome}"),
            Err(e) => {
                failed = true;
                eprintln!("{}", describe_error(&e));
            }
        }
    }
    tracing::debug!(
        "exiting; {} undoable command(s) dropped with the history",
        dispatcher.undo_depth()
    );

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// One-line message for a failed invocation.
fn describe_error(err: &CoreError) -> String {
    match err {
        CoreError::UnknownCommand(name) => {
            format!("error: unknown command '{name}'; run `cmdfm help` for a list")
        }
        other => format!("error: {other}"),
    }
}
