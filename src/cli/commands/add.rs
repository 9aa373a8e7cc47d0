//! Add command implementation.
//!
//! The `liftlog add` command appends an exercise to a routine.

use crate::cli::args::AddArgs;
use crate::error::Result;
use crate::routine::Exercise;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The add command implementation.
pub struct AddCommand {
    context: CommandContext,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(context: CommandContext, args: AddArgs) -> Self {
        Self { context, args }
    }

    fn exercise(&self) -> Exercise {
        Exercise::new(self.args.name.clone(), self.args.weight)
            .with_machine(self.args.machine.clone())
            .with_settings(self.args.settings.clone())
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut ws = self.context.open_workspace()?;
        let exercise = self.exercise();

        ws.add_exercise(&self.args.routine, exercise.clone())?;

        ui.success(&format!(
            "Added {} to routine {}",
            exercise, self.args.routine
        ));
        Ok(CommandResult::success())
    }
}
