//! Shared display helpers for exercise and session formatting.
//!
//! These helpers are used by `routines`, `train`, and any other command that
//! needs to render exercises consistently.

use crate::routine::Exercise;
use crate::session::RoutineSession;
use crate::ui::UserInterface;

/// Icon for an exercise still to do.
pub const PENDING_ICON: &str = "○";

/// Icon for an exercise done this session.
pub const DONE_ICON: &str = "✓";

/// Machine and settings notes joined for display, empty when both are blank.
pub fn machine_notes(exercise: &Exercise) -> String {
    [exercise.machine.as_str(), exercise.settings.as_str()]
        .iter()
        .filter(|s| !s.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line description: "Chest Press - 32 kg (Maquina 1, asiento 4)".
pub fn describe_exercise(exercise: &Exercise) -> String {
    let notes = machine_notes(exercise);
    if notes.is_empty() {
        exercise.to_string()
    } else {
        format!("{} ({})", exercise, notes)
    }
}

/// Print the pending and completed partitions of a routine session.
pub fn show_session(ui: &mut dyn UserInterface, session: &RoutineSession) {
    if !session.pending().is_empty() {
        ui.message("Pending:");
        for exercise in session.pending() {
            ui.message(&format!("  {} {}", PENDING_ICON, describe_exercise(exercise)));
        }
    }

    if !session.completed().is_empty() {
        ui.message("Done:");
        for exercise in session.completed() {
            ui.success(&format!("  {} {}", DONE_ICON, exercise));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn machine_notes_skips_blanks() {
        let bare = Exercise::new("Dip Chin", 32.0);
        assert_eq!(machine_notes(&bare), "");

        let machine_only = Exercise::new("Dip Chin", 32.0).with_machine("Maquina 5");
        assert_eq!(machine_notes(&machine_only), "Maquina 5");

        let both = Exercise::new("Chest Press", 32.0)
            .with_machine("Maquina 1")
            .with_settings("asiento 4");
        assert_eq!(machine_notes(&both), "Maquina 1, asiento 4");
    }

    #[test]
    fn describe_exercise_values() {
        let bare = Exercise::new("Dip Chin", 32.0);
        assert_eq!(describe_exercise(&bare), "Dip Chin - 32 kg");

        let noted = Exercise::new("Chest Press", 32.0).with_machine("Maquina 1");
        assert_eq!(describe_exercise(&noted), "Chest Press - 32 kg (Maquina 1)");
    }

    #[test]
    fn show_session_uses_correct_ui_method() {
        let exercises = vec![Exercise::new("Chest Press", 32.0), Exercise::new("Dip Chin", 32.0)];
        let session = RoutineSession::new(&exercises);
        let mut ui = MockUI::new();

        show_session(&mut ui, &session);

        assert!(ui.has_message("○ Chest Press - 32 kg"));
        assert!(ui.has_message("○ Dip Chin - 32 kg"));
        assert!(ui.successes().is_empty());
    }
}
