//! Completion history.
//!
//! Every exercise marked done is appended to the history file as one row.
//! The log is never rewritten; [`HistoryLog::read_all`] reads it back in
//! append order for display.

pub mod csv;
pub mod filter;
pub mod log;
pub mod record;

pub use filter::HistoryFilter;
pub use log::{HistoryLog, HistorySink, HEADER};
pub use record::{HistoryRecord, TIMESTAMP_FORMAT};
