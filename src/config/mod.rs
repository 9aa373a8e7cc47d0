//! Data directory configuration.
//!
//! Settings come from an optional `liftlog.yml` in the data directory (or a
//! file given with `--config`). Every field has a default, so a missing file
//! means "use `rutinas.json` and `progreso.csv` next to each other".

pub mod loader;

pub use loader::{load_settings, parse_settings, SETTINGS_FILE};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::history::HistoryLog;
use crate::routine::RoutineStore;

/// Where liftlog keeps its files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Routine document, relative to the data directory unless absolute.
    pub routines_file: PathBuf,

    /// History log, relative to the data directory unless absolute.
    pub history_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            routines_file: PathBuf::from(RoutineStore::DEFAULT_FILE),
            history_file: PathBuf::from(HistoryLog::DEFAULT_FILE),
        }
    }
}

impl Settings {
    /// Absolute location of the routine document.
    pub fn routines_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.routines_file)
    }

    /// Absolute location of the history log.
    pub fn history_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.history_file)
    }
}
