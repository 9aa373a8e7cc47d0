//! Durable routine storage.
//!
//! The whole routine document is read once at startup and rewritten in full
//! after every mutation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::{Exercise, Routine, RoutineBook};
use crate::error::{LiftlogError, Result};

/// Routine definitions backed by a JSON document.
#[derive(Debug, Clone)]
pub struct RoutineStore {
    path: PathBuf,
    book: RoutineBook,
    persisted: bool,
}

impl RoutineStore {
    /// Default file name inside the data directory.
    pub const DEFAULT_FILE: &'static str = "rutinas.json";

    /// Load routines from disk.
    ///
    /// A missing file yields the default routines without writing anything;
    /// the first mutation creates the file. An unreadable file is an error,
    /// so it never gets silently replaced.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!("No routine file at {}, using defaults", path.display());
            return Ok(Self {
                path,
                book: RoutineBook::defaults(),
                persisted: false,
            });
        }

        let content = fs::read_to_string(&path)?;
        let book: RoutineBook =
            serde_json::from_str(&content).map_err(|e| {
                tracing::warn!("Routine file {} is unreadable: {}", path.display(), e);
                LiftlogError::CorruptData {
                    path: path.clone(),
                    message: e.to_string(),
                }
            })?;

        tracing::debug!("Loaded {} routines from {}", book.len(), path.display());

        Ok(Self {
            path,
            book,
            persisted: true,
        })
    }

    /// Path of the routine document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the current routines exist on disk.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// All routines in display order.
    pub fn routines(&self) -> &RoutineBook {
        &self.book
    }

    /// Look up a routine by name.
    pub fn routine(&self, name: &str) -> Option<&Routine> {
        self.book.get(name)
    }

    /// Routine names in display order.
    pub fn routine_names(&self) -> Vec<&str> {
        self.book.names()
    }

    /// Save routines to disk using atomic write.
    pub fn save(&mut self) -> Result<()> {
        write_book(&self.path, &self.book)?;
        self.persisted = true;
        Ok(())
    }

    /// Append an exercise to a routine and persist.
    pub fn add_exercise(&mut self, routine: &str, exercise: Exercise) -> Result<()> {
        exercise.validate()?;

        let mut next = self.book.clone();
        next.get_mut(routine)
            .ok_or_else(|| LiftlogError::UnknownRoutine {
                name: routine.to_string(),
            })?
            .exercises
            .push(exercise);

        self.commit(next)?;
        tracing::debug!("Added exercise to routine '{}'", routine);
        Ok(())
    }

    /// Replace the exercise at a display index and persist.
    pub fn edit_exercise(&mut self, routine: &str, index: usize, exercise: Exercise) -> Result<()> {
        exercise.validate()?;

        let mut next = self.book.clone();
        let target = next
            .get_mut(routine)
            .ok_or_else(|| LiftlogError::UnknownRoutine {
                name: routine.to_string(),
            })?;
        let len = target.exercises.len();
        let slot = target
            .exercises
            .get_mut(index)
            .ok_or_else(|| LiftlogError::IndexOutOfRange {
                routine: routine.to_string(),
                index,
                len,
            })?;
        *slot = exercise;

        self.commit(next)?;
        tracing::debug!("Edited exercise {} of routine '{}'", index, routine);
        Ok(())
    }

    /// Create an empty routine and persist.
    pub fn create_routine(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(LiftlogError::InvalidName {
                name: name.to_string(),
            });
        }
        if self.book.contains(name) {
            return Err(LiftlogError::DuplicateRoutine {
                name: name.to_string(),
            });
        }

        let mut next = self.book.clone();
        next.push(Routine::new(name));

        self.commit(next)?;
        tracing::debug!("Created routine '{}'", name);
        Ok(())
    }

    // The in-memory book only changes once the new document is on disk.
    fn commit(&mut self, next: RoutineBook) -> Result<()> {
        write_book(&self.path, &next)?;
        self.book = next;
        self.persisted = true;
        Ok(())
    }
}

/// Write the document to a temp file, then rename it over the original.
fn write_book(path: &Path, book: &RoutineBook) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let mut content = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
    book.serialize(&mut serializer)
        .map_err(|e| anyhow::anyhow!("Failed to serialize routines: {}", e))?;
    content.push(b'\n');

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, &content)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    tracing::debug!("Saved {} routines to {}", book.len(), path.display());
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
