//! Completion records.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::routine::Exercise;

/// Timestamp format used in the history file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One completed exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// When the exercise was marked done, local time, minute precision.
    pub timestamp: NaiveDateTime,

    /// Routine the exercise belongs to.
    pub routine: String,

    /// Exercise name.
    pub exercise: String,

    /// Weight lifted in kilograms.
    pub weight: f64,
}

impl HistoryRecord {
    /// Record completing `exercise` right now.
    pub fn now(routine: &str, exercise: &Exercise) -> Self {
        Self::at(Local::now().naive_local(), routine, exercise)
    }

    /// Record completing `exercise` at a given time, truncated to the minute.
    pub fn at(timestamp: NaiveDateTime, routine: &str, exercise: &Exercise) -> Self {
        Self {
            timestamp: truncate_to_minute(timestamp),
            routine: routine.to_string(),
            exercise: exercise.name.clone(),
            weight: exercise.target_weight,
        }
    }

    /// Timestamp as written to the history file.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

fn truncate_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 17)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn at_copies_exercise_fields() {
        let exercise = Exercise::new("Tríceps Polea", 14.7).with_machine("Maquina 62");
        let record = HistoryRecord::at(ts(18, 5, 0), "A", &exercise);

        assert_eq!(record.routine, "A");
        assert_eq!(record.exercise, "Tríceps Polea");
        assert_eq!(record.weight, 14.7);
    }

    #[test]
    fn at_truncates_seconds() {
        let record = HistoryRecord::at(ts(18, 5, 42), "A", &Exercise::new("x", 1.0));
        assert_eq!(record.timestamp, ts(18, 5, 0));
        assert_eq!(record.formatted_timestamp(), "2026-03-17 18:05");
    }

    #[test]
    fn now_has_no_seconds() {
        let record = HistoryRecord::now("A", &Exercise::new("x", 1.0));
        assert_eq!(record.timestamp.second(), 0);
    }
}
