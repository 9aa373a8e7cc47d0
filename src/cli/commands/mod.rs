//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command opens its own
//! [`Workspace`](crate::workspace::Workspace) from the shared
//! [`CommandContext`], performs one action and returns.

pub mod add;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod edit;
pub mod history;
pub mod new_routine;
pub mod routines;
pub mod train;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
