//! Routine definitions and their durable store.
//!
//! A routine is a named, ordered list of [`Exercise`] records. The
//! [`RoutineStore`] owns every routine, loads them once at startup and
//! persists the full document after each mutation.

pub mod book;
pub mod exercise;
pub mod store;

pub use book::{Routine, RoutineBook};
pub use exercise::{format_weight, Exercise};
pub use store::RoutineStore;
