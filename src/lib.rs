//! liftlog - Gym routines, training sessions and progress history.
//!
//! liftlog keeps a set of named workout routines in a JSON document, tracks
//! which exercises are done during a training session, and appends every
//! completed exercise to a CSV history log.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional settings file naming the data files
//! - [`error`] - Error types and result aliases
//! - [`history`] - Append-only completion log
//! - [`routine`] - Routine definitions and their durable store
//! - [`session`] - Pending/completed partitions for the current run
//! - [`ui`] - Interactive prompts, tables and terminal output
//! - [`workspace`] - The store, log and session for one data directory
//!
//! # Example
//!
//! ```
//! use liftlog::workspace::Workspace;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut ws = Workspace::open(dir.path(), None).unwrap();
//!
//! let first = ws.store().routine("A").unwrap().exercises[0].clone();
//! ws.complete("A", &first).unwrap();
//!
//! assert_eq!(ws.session().progress("A").unwrap(), (1, 5));
//! assert_eq!(ws.read_history().unwrap()[0].exercise, "Chest Press");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod routine;
pub mod session;
pub mod ui;
pub mod workspace;

pub use error::{LiftlogError, Result};
