//! Workout session state.
//!
//! A session splits each routine into pending and completed exercises for
//! the current run. It lives only in memory.

pub mod tracker;

pub use tracker::{RoutineSession, SessionTracker};
