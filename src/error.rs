//! Error types for liftlog operations.
//!
//! This module defines [`LiftlogError`], the error type shared by the routine
//! store, the session tracker, the history log and the CLI, and a [`Result`]
//! alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failed mutation leaves the store and session exactly as they were
//! - Precondition failures get their own variant so the CLI can report them
//! - Use `anyhow::Error` (via `LiftlogError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for liftlog operations.
#[derive(Debug, Error)]
pub enum LiftlogError {
    /// A durable file exists but cannot be parsed.
    #[error("Corrupt data in {path}: {message}")]
    CorruptData { path: PathBuf, message: String },

    /// No routine with this name exists.
    #[error("Unknown routine: {name}")]
    UnknownRoutine { name: String },

    /// Exercise index does not reference a current display position.
    #[error("Routine '{routine}' has no exercise at index {index} (it has {len})")]
    IndexOutOfRange {
        routine: String,
        index: usize,
        len: usize,
    },

    /// A routine with this name already exists.
    #[error("Routine already exists: {name}")]
    DuplicateRoutine { name: String },

    /// Routine names must not be empty or blank.
    #[error("Invalid routine name: '{name}'")]
    InvalidName { name: String },

    /// Weights must be finite and non-negative.
    #[error("Invalid weight: {weight}")]
    InvalidWeight { weight: f64 },

    /// The exercise is not pending in this session.
    #[error("'{exercise}' is not pending in routine '{routine}'")]
    NotPending { routine: String, exercise: String },

    /// The exercise is not completed in this session.
    #[error("'{exercise}' is not completed in routine '{routine}'")]
    NotCompleted { routine: String, exercise: String },

    /// Input from the user could not be used.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for liftlog operations.
pub type Result<T> = std::result::Result<T, LiftlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_data_displays_path_and_message() {
        let err = LiftlogError::CorruptData {
            path: PathBuf::from("/data/rutinas.json"),
            message: "expected a map".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/rutinas.json"));
        assert!(msg.contains("expected a map"));
    }

    #[test]
    fn unknown_routine_displays_name() {
        let err = LiftlogError::UnknownRoutine { name: "Z".into() };
        assert!(err.to_string().contains("Z"));
    }

    #[test]
    fn index_out_of_range_displays_bounds() {
        let err = LiftlogError::IndexOutOfRange {
            routine: "B".into(),
            index: 7,
            len: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("'B'"));
        assert!(msg.contains("7"));
        assert!(msg.contains("5"));
    }

    #[test]
    fn not_pending_displays_exercise_and_routine() {
        let err = LiftlogError::NotPending {
            routine: "A".into(),
            exercise: "Leg Press".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Leg Press"));
        assert!(msg.contains("'A'"));
    }

    #[test]
    fn invalid_weight_displays_value() {
        let err = LiftlogError::InvalidWeight { weight: -3.5 };
        assert!(err.to_string().contains("-3.5"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LiftlogError = io_err.into();
        assert!(matches!(err, LiftlogError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: LiftlogError = anyhow::anyhow!("disk on fire").into();
        assert_eq!(err.to_string(), "disk on fire");
    }
}
