//! The state a front end works against.
//!
//! A [`Workspace`] owns the routine store, the history log and the session
//! tracker for one data directory. Front ends hold it by reference and call
//! one operation per user action.

use std::path::Path;

use crate::config::{load_settings, Settings};
use crate::error::Result;
use crate::history::{HistoryLog, HistoryRecord};
use crate::routine::{Exercise, RoutineStore};
use crate::session::SessionTracker;

/// Routine store, history log and session for one data directory.
#[derive(Debug)]
pub struct Workspace {
    store: RoutineStore,
    history: HistoryLog,
    session: SessionTracker,
}

impl Workspace {
    /// Open the workspace in `data_dir`, reading `liftlog.yml` or `config_override`.
    pub fn open(data_dir: &Path, config_override: Option<&Path>) -> Result<Self> {
        let settings = load_settings(data_dir, config_override)?;
        Self::with_settings(data_dir, &settings)
    }

    /// Open the workspace with explicit settings.
    pub fn with_settings(data_dir: &Path, settings: &Settings) -> Result<Self> {
        let store = RoutineStore::load(settings.routines_path(data_dir))?;
        let history = HistoryLog::new(settings.history_path(data_dir));
        let session = SessionTracker::seed(store.routines());

        tracing::debug!(
            "Opened workspace in {} ({} routines)",
            data_dir.display(),
            store.routines().len()
        );

        Ok(Self {
            store,
            history,
            session,
        })
    }

    /// Routine definitions.
    pub fn store(&self) -> &RoutineStore {
        &self.store
    }

    /// Completion history.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Current session partitions.
    pub fn session(&self) -> &SessionTracker {
        &self.session
    }

    /// Mark an exercise done and log it.
    pub fn complete(&mut self, routine: &str, exercise: &Exercise) -> Result<()> {
        self.session.complete(routine, exercise, &mut self.history)
    }

    /// Move a done exercise back to pending. The history row stays.
    pub fn uncomplete(&mut self, routine: &str, exercise: &Exercise) -> Result<()> {
        self.session.uncomplete(routine, exercise)
    }

    /// True iff nothing is pending for the routine.
    pub fn is_routine_complete(&self, routine: &str) -> Result<bool> {
        self.session.is_routine_complete(routine)
    }

    /// Append an exercise to a routine.
    ///
    /// The running session for that routine is not updated.
    pub fn add_exercise(&mut self, routine: &str, exercise: Exercise) -> Result<()> {
        self.store.add_exercise(routine, exercise)
    }

    /// Replace the exercise at `index` in a routine.
    ///
    /// The running session for that routine is not updated.
    pub fn edit_exercise(&mut self, routine: &str, index: usize, exercise: Exercise) -> Result<()> {
        self.store.edit_exercise(routine, index, exercise)
    }

    /// Create an empty routine and start tracking it in the session.
    pub fn create_routine(&mut self, name: &str) -> Result<()> {
        self.store.create_routine(name)?;
        self.session.track_routine(name, &[]);
        Ok(())
    }

    /// Every history record in append order.
    pub fn read_history(&self) -> Result<Vec<HistoryRecord>> {
        self.history.read_all()
    }
}
