//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the data directory every command works in
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, TrainArgs};
use crate::error::Result;
use crate::ui::UserInterface;
use crate::workspace::Workspace;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the process exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use. Failures are returned as errors instead.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Where a command finds its data.
#[derive(Debug, Clone)]
pub struct CommandContext {
    data_dir: PathBuf,
    config: Option<PathBuf>,
}

impl CommandContext {
    /// Create a context for a data directory and an optional settings file.
    pub fn new(data_dir: impl Into<PathBuf>, config: Option<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            config,
        }
    }

    /// Open the workspace for this context.
    pub fn open_workspace(&self) -> Result<Workspace> {
        Workspace::open(&self.data_dir, self.config.as_deref())
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given context.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = self.context.clone();
        match &cli.command {
            Some(Commands::Routines(args)) => {
                super::routines::RoutinesCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Train(args)) => {
                super::train::TrainCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::History(args)) => {
                super::history::HistoryCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Add(args)) => super::add::AddCommand::new(ctx, args.clone()).execute(ui),
            Some(Commands::Edit(args)) => {
                super::edit::EditCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::NewRoutine(args)) => {
                super::new_routine::NewRoutineCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => {
                // Default to an interactive training session
                super::train::TrainCommand::new(ctx, TrainArgs::default()).execute(ui)
            }
        }
    }
}
