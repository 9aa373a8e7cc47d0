//! Routines command implementation.
//!
//! The `liftlog routines` command lists every routine with its exercises.

use crate::cli::args::RoutinesArgs;
use crate::error::Result;
use crate::routine::{format_weight, Routine};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The routines command implementation.
pub struct RoutinesCommand {
    context: CommandContext,
    args: RoutinesArgs,
}

impl RoutinesCommand {
    /// Create a new routines command.
    pub fn new(context: CommandContext, args: RoutinesArgs) -> Self {
        Self { context, args }
    }

    fn routine_table(routine: &Routine) -> Table {
        let mut table = Table::new(vec!["#", "Exercise", "Kg", "Machine", "Settings"])
            .align_right(0)
            .align_right(2);
        for (i, exercise) in routine.exercises.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                exercise.name.clone(),
                format_weight(exercise.target_weight),
                exercise.machine.clone(),
                exercise.settings.clone(),
            ]);
        }
        table
    }
}

impl Command for RoutinesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ws = self.context.open_workspace()?;
        let book = ws.store().routines();

        if self.args.json {
            let json = serde_json::to_string_pretty(book).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if !ws.store().is_persisted() && ui.output_mode().shows_details() {
            ui.message(&format!(
                "No routine file at {}, showing the starter routines.",
                ws.store().path().display()
            ));
        }

        for routine in book.iter() {
            ui.show_header(&format!("Routine {}", routine.name));
            if routine.exercises.is_empty() {
                ui.message("  (no exercises)");
            } else {
                ui.message(&Self::routine_table(routine).render());
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use tempfile::TempDir;

    fn command(temp: &TempDir, json: bool) -> RoutinesCommand {
        RoutinesCommand::new(
            CommandContext::new(temp.path(), None),
            RoutinesArgs { json },
        )
    }

    #[test]
    fn lists_starter_routines() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = command(&temp, false).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.headers(), &["Routine A", "Routine B", "Routine C"]);
        assert!(ui.has_message("Chest Press"));
        assert!(ui.has_message("Tríceps Polea"));
        assert!(ui.has_message("14.7"));
    }

    #[test]
    fn listing_does_not_create_files() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        command(&temp, false).execute(&mut ui).unwrap();

        assert!(!temp.path().join("rutinas.json").exists());
    }

    #[test]
    fn verbose_mentions_missing_file() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        command(&temp, false).execute(&mut ui).unwrap();

        assert!(ui.has_message("starter routines"));
    }

    #[test]
    fn empty_routine_is_marked() {
        let temp = TempDir::new().unwrap();
        let mut ws = CommandContext::new(temp.path(), None)
            .open_workspace()
            .unwrap();
        ws.create_routine("Legs").unwrap();
        let mut ui = MockUI::new();

        command(&temp, false).execute(&mut ui).unwrap();

        assert!(ui.headers().iter().any(|h| h == "Routine Legs"));
        assert!(ui.has_message("(no exercises)"));
    }

    #[test]
    fn json_matches_document_shape() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        command(&temp, true).execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        let a = value["A"].as_array().unwrap();
        assert_eq!(a.len(), 5);
        assert_eq!(a[0][0], "Chest Press");
        assert_eq!(a[0][1], 32.0);
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn table_numbers_from_one() {
        let routine = Routine {
            name: "A".to_string(),
            exercises: vec![crate::routine::Exercise::new("Dip Chin", 32.0)],
        };

        let rendered = RoutinesCommand::routine_table(&routine).render();

        assert!(rendered.contains("│ 1 │ Dip Chin"));
    }
}
