//! Per-routine pending/completed partitions for the current run.

use crate::error::{LiftlogError, Result};
use crate::history::{HistoryRecord, HistorySink};
use crate::routine::{Exercise, RoutineBook};

/// One routine's partition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutineSession {
    pending: Vec<Exercise>,
    completed: Vec<Exercise>,
}

impl RoutineSession {
    /// Start with every exercise pending.
    pub fn new(exercises: &[Exercise]) -> Self {
        Self {
            pending: exercises.to_vec(),
            completed: Vec::new(),
        }
    }

    /// Exercises still to do, in display order.
    pub fn pending(&self) -> &[Exercise] {
        &self.pending
    }

    /// Exercises done this session, in completion order.
    pub fn completed(&self) -> &[Exercise] {
        &self.completed
    }

    /// True when nothing is pending.
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Session state for every routine.
///
/// Seeded from the routine store when a run starts and discarded when it
/// ends. Edits made to the store afterwards are not reflected here.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    routines: Vec<(String, RoutineSession)>,
}

impl SessionTracker {
    /// Seed a partition for every routine with all exercises pending.
    pub fn seed(book: &RoutineBook) -> Self {
        Self {
            routines: book
                .iter()
                .map(|r| (r.name.clone(), RoutineSession::new(&r.exercises)))
                .collect(),
        }
    }

    /// Start tracking a routine that did not exist when the session was seeded.
    ///
    /// An existing partition for the same name is left as it is.
    pub fn track_routine(&mut self, name: &str, exercises: &[Exercise]) {
        if self.get(name).is_none() {
            self.routines
                .push((name.to_string(), RoutineSession::new(exercises)));
        }
    }

    /// Look up a routine's partition.
    pub fn get(&self, routine: &str) -> Option<&RoutineSession> {
        self.routines
            .iter()
            .find(|(name, _)| name == routine)
            .map(|(_, session)| session)
    }

    fn session(&self, routine: &str) -> Result<&RoutineSession> {
        self.get(routine).ok_or_else(|| unknown(routine))
    }

    fn session_mut(&mut self, routine: &str) -> Result<&mut RoutineSession> {
        self.routines
            .iter_mut()
            .find(|(name, _)| name == routine)
            .map(|(_, session)| session)
            .ok_or_else(|| unknown(routine))
    }

    /// Pending exercises for a routine.
    pub fn pending(&self, routine: &str) -> Result<&[Exercise]> {
        Ok(self.session(routine)?.pending())
    }

    /// Completed exercises for a routine.
    pub fn completed(&self, routine: &str) -> Result<&[Exercise]> {
        Ok(self.session(routine)?.completed())
    }

    /// Completed and total exercise counts for a routine.
    pub fn progress(&self, routine: &str) -> Result<(usize, usize)> {
        let session = self.session(routine)?;
        let done = session.completed.len();
        Ok((done, done + session.pending.len()))
    }

    /// True iff nothing is pending for the routine.
    pub fn is_routine_complete(&self, routine: &str) -> Result<bool> {
        Ok(self.session(routine)?.is_complete())
    }

    /// Mark the first pending occurrence of `exercise` as done.
    ///
    /// The completion is recorded in `history` before the partition changes,
    /// so a failed write leaves the session untouched.
    pub fn complete(
        &mut self,
        routine: &str,
        exercise: &Exercise,
        history: &mut dyn HistorySink,
    ) -> Result<()> {
        let session = self.session_mut(routine)?;
        let index = session
            .pending
            .iter()
            .position(|e| e == exercise)
            .ok_or_else(|| LiftlogError::NotPending {
                routine: routine.to_string(),
                exercise: exercise.name.clone(),
            })?;

        history.append(&HistoryRecord::now(routine, exercise))?;

        let done = session.pending.remove(index);
        session.completed.push(done);
        tracing::debug!("Completed '{}' in routine '{}'", exercise.name, routine);
        Ok(())
    }

    /// Move the first completed occurrence of `exercise` back to the end of pending.
    ///
    /// History is left alone.
    pub fn uncomplete(&mut self, routine: &str, exercise: &Exercise) -> Result<()> {
        let session = self.session_mut(routine)?;
        let index = session
            .completed
            .iter()
            .position(|e| e == exercise)
            .ok_or_else(|| LiftlogError::NotCompleted {
                routine: routine.to_string(),
                exercise: exercise.name.clone(),
            })?;

        let undone = session.completed.remove(index);
        session.pending.push(undone);
        tracing::debug!("Reopened '{}' in routine '{}'", exercise.name, routine);
        Ok(())
    }
}

fn unknown(routine: &str) -> LiftlogError {
    LiftlogError::UnknownRoutine {
        name: routine.to_string(),
    }
}
