//! Edit command implementation.
//!
//! The `liftlog edit` command replaces one exercise of a routine, addressed
//! by its 1-based position in `liftlog routines`.

use crate::cli::args::EditArgs;
use crate::error::{LiftlogError, Result};
use crate::routine::{format_weight, Exercise};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The edit command implementation.
pub struct EditCommand {
    context: CommandContext,
    args: EditArgs,
}

impl EditCommand {
    /// Create a new edit command.
    pub fn new(context: CommandContext, args: EditArgs) -> Self {
        Self { context, args }
    }

    /// Zero-based index for the position argument.
    fn index(&self) -> Result<usize> {
        self.args
            .position
            .checked_sub(1)
            .ok_or_else(|| LiftlogError::InvalidInput {
                message: "exercise positions start at 1".to_string(),
            })
    }

    /// Build the replacement from flags, prompting for the rest when interactive.
    fn replacement(&self, current: &Exercise, ui: &mut dyn UserInterface) -> Result<Exercise> {
        let ask = ui.is_interactive();

        let name = match &self.args.name {
            Some(name) => name.clone(),
            None if ask => ui
                .prompt(&Prompt::input("name", "Exercise name").with_default(&current.name))?
                .as_string(),
            None => current.name.clone(),
        };

        let target_weight = match self.args.weight {
            Some(weight) => weight,
            None if ask => {
                let answer = ui
                    .prompt(
                        &Prompt::input("weight", "Target weight (kg)")
                            .with_default(format_weight(current.target_weight)),
                    )?
                    .as_string();
                parse_weight(&answer)?
            }
            None => current.target_weight,
        };

        let machine = match &self.args.machine {
            Some(machine) => machine.clone(),
            None if ask => ui
                .prompt(
                    &Prompt::input("machine", "Machine")
                        .with_default(&current.machine)
                        .allow_empty(),
                )?
                .as_string(),
            None => current.machine.clone(),
        };

        let settings = match &self.args.settings {
            Some(settings) => settings.clone(),
            None if ask => ui
                .prompt(
                    &Prompt::input("settings", "Settings")
                        .with_default(&current.settings)
                        .allow_empty(),
                )?
                .as_string(),
            None => current.settings.clone(),
        };

        Ok(Exercise {
            name,
            target_weight,
            machine,
            settings,
        })
    }
}

/// Parse a weight typed at a prompt.
fn parse_weight(input: &str) -> Result<f64> {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| LiftlogError::InvalidInput {
            message: format!("'{}' is not a weight in kg", input.trim()),
        })
}

impl Command for EditCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut ws = self.context.open_workspace()?;
        let routine = &self.args.routine;
        let index = self.index()?;

        let exercises = &ws
            .store()
            .routine(routine)
            .ok_or_else(|| LiftlogError::UnknownRoutine {
                name: routine.clone(),
            })?
            .exercises;
        let current = exercises
            .get(index)
            .cloned()
            .ok_or_else(|| LiftlogError::IndexOutOfRange {
                routine: routine.clone(),
                index,
                len: exercises.len(),
            })?;

        let updated = self.replacement(&current, ui)?;
        if updated == current {
            ui.message("Nothing to change.");
            return Ok(CommandResult::success());
        }

        ws.edit_exercise(routine, index, updated.clone())?;

        ui.success(&format!(
            "Updated exercise {} of routine {}: {}",
            self.args.position, routine, updated
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn edit_args(routine: &str, position: usize) -> EditArgs {
        EditArgs {
            routine: routine.to_string(),
            position,
            ..Default::default()
        }
    }

    fn exercise_at(ctx: &CommandContext, routine: &str, index: usize) -> Exercise {
        ctx.open_workspace().unwrap().store().routine(routine).unwrap().exercises[index].clone()
    }

    #[test]
    fn edit_weight_keeps_other_fields() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        let args = EditArgs {
            weight: Some(40.0),
            ..edit_args("B", 3)
        };
        let mut ui = MockUI::new();

        let result = EditCommand::new(ctx.clone(), args).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(
            exercise_at(&ctx, "B", 2),
            Exercise::new("Leg Extension", 40.0).with_machine("Maquina 2")
        );
        assert!(ui.has_success("Updated exercise 3 of routine B"));
    }

    #[test]
    fn edit_without_changes_does_not_write() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        let mut ui = MockUI::new();

        EditCommand::new(ctx, edit_args("A", 1))
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("Nothing to change."));
        assert!(!temp.path().join("rutinas.json").exists());
    }

    #[test]
    fn edit_position_zero_fails() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        let mut ui = MockUI::new();

        let err = EditCommand::new(ctx, edit_args("A", 0))
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, LiftlogError::InvalidInput { .. }));
    }

    #[test]
    fn edit_past_end_fails() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        let args = EditArgs {
            name: Some("Squat".to_string()),
            ..edit_args("A", 6)
        };
        let mut ui = MockUI::new();

        let err = EditCommand::new(ctx, args).execute(&mut ui).unwrap_err();

        assert!(matches!(
            err,
            LiftlogError::IndexOutOfRange {
                index: 5,
                len: 5,
                ..
            }
        ));
    }

    #[test]
    fn edit_unknown_routine_fails() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        let mut ui = MockUI::new();

        let err = EditCommand::new(ctx, edit_args("Z", 1))
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, LiftlogError::UnknownRoutine { .. }));
    }

    #[test]
    fn interactive_edit_prompts_with_current_values() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_prompt_response("weight", "34,5");
        ui.set_prompt_response("settings", "Asiento: 4");

        EditCommand::new(ctx.clone(), edit_args("A", 1))
            .execute(&mut ui)
            .unwrap();

        let keys: Vec<&str> = ui.prompts_shown().iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "weight", "machine", "settings"]);
        assert_eq!(ui.prompts_shown()[1].default.as_deref(), Some("32"));
        assert_eq!(
            exercise_at(&ctx, "A", 0),
            Exercise::new("Chest Press", 34.5)
                .with_machine("Maquina 20")
                .with_settings("Asiento: 4")
        );
    }

    #[test]
    fn interactive_edit_skips_prompts_for_given_flags() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        let args = EditArgs {
            name: Some("Dips".to_string()),
            weight: Some(30.0),
            ..edit_args("A", 5)
        };
        let mut ui = MockUI::new();
        ui.set_interactive(true);

        EditCommand::new(ctx, args).execute(&mut ui).unwrap();

        let keys: Vec<&str> = ui.prompts_shown().iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["machine", "settings"]);
    }

    #[test]
    fn interactive_edit_rejects_bad_weight() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), None);
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_prompt_response("weight", "heavy");

        let err = EditCommand::new(ctx, edit_args("A", 1))
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, LiftlogError::InvalidInput { .. }));
    }

    #[test]
    fn parse_weight_values() {
        assert_eq!(parse_weight("32").unwrap(), 32.0);
        assert_eq!(parse_weight(" 14.7 ").unwrap(), 14.7);
        assert_eq!(parse_weight("14,7").unwrap(), 14.7);
        assert!(parse_weight("").is_err());
    }
}
