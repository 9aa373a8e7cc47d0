//! Exercise records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LiftlogError, Result};

/// One exercise within a routine.
///
/// On disk an exercise is a 4-element array `[name, weight, machine, settings]`.
/// Names are not unique, so edits address exercises by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExerciseRow", into = "ExerciseRow")]
pub struct Exercise {
    /// Display name.
    pub name: String,

    /// Target weight in kilograms.
    pub target_weight: f64,

    /// Machine label, may be empty.
    pub machine: String,

    /// Seat, backrest and other adjustment notes, may be empty.
    pub settings: String,
}

#[derive(Serialize, Deserialize)]
struct ExerciseRow(String, f64, String, String);

impl TryFrom<ExerciseRow> for Exercise {
    type Error = String;

    fn try_from(row: ExerciseRow) -> std::result::Result<Self, Self::Error> {
        let ExerciseRow(name, target_weight, machine, settings) = row;
        if !is_valid_weight(target_weight) {
            return Err(format!("invalid weight {} for '{}'", target_weight, name));
        }
        Ok(Self {
            name,
            target_weight,
            machine,
            settings,
        })
    }
}

impl From<Exercise> for ExerciseRow {
    fn from(e: Exercise) -> Self {
        ExerciseRow(e.name, e.target_weight, e.machine, e.settings)
    }
}

impl Exercise {
    /// Create an exercise with no machine or settings notes.
    pub fn new(name: impl Into<String>, target_weight: f64) -> Self {
        Self {
            name: name.into(),
            target_weight,
            machine: String::new(),
            settings: String::new(),
        }
    }

    /// Set the machine label.
    pub fn with_machine(mut self, machine: impl Into<String>) -> Self {
        self.machine = machine.into();
        self
    }

    /// Set the adjustment notes.
    pub fn with_settings(mut self, settings: impl Into<String>) -> Self {
        self.settings = settings.into();
        self
    }

    /// Check that the weight can be stored.
    pub fn validate(&self) -> Result<()> {
        if is_valid_weight(self.target_weight) {
            Ok(())
        } else {
            Err(LiftlogError::InvalidWeight {
                weight: self.target_weight,
            })
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} kg", self.name, format_weight(self.target_weight))
    }
}

fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

/// Text form of a weight for display and the history log.
///
/// `f64`'s `Display` already writes whole numbers without `.0` (`32`) and
/// keeps fractions as written (`14.7`).
pub fn format_weight(weight: f64) -> String {
    weight.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_four_element_array() {
        let e = Exercise::new("Chest Press", 32.0)
            .with_machine("Maquina 20")
            .with_settings("Asiento: 3");
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"["Chest Press",32.0,"Maquina 20","Asiento: 3"]"#);
    }

    #[test]
    fn deserializes_integer_weight() {
        let e: Exercise = serde_json::from_str(r#"["Dip Chin", 32, "", ""]"#).unwrap();
        assert_eq!(e, Exercise::new("Dip Chin", 32.0));
    }

    #[test]
    fn rejects_short_rows() {
        let result: std::result::Result<Exercise, _> =
            serde_json::from_str(r#"["Dip Chin", 32, ""]"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_negative_weight_on_load() {
        let result: std::result::Result<Exercise, _> =
            serde_json::from_str(r#"["Dip Chin", -1, "", ""]"#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_nan_and_negative() {
        assert!(Exercise::new("x", f64::NAN).validate().is_err());
        assert!(Exercise::new("x", -0.5).validate().is_err());
        assert!(Exercise::new("x", 0.0).validate().is_ok());
    }

    #[test]
    fn display_keeps_decimals() {
        assert_eq!(
            Exercise::new("Tríceps Polea", 14.7).to_string(),
            "Tríceps Polea - 14.7 kg"
        );
        assert_eq!(Exercise::new("Leg Press", 63.0).to_string(), "Leg Press - 63 kg");
    }

    #[test]
    fn format_weight_whole_and_fractional() {
        assert_eq!(format_weight(45.0), "45");
        assert_eq!(format_weight(14.7), "14.7");
    }
}
