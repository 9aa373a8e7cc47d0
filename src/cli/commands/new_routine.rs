//! New-routine command implementation.

use crate::cli::args::NewRoutineArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The new-routine command implementation.
pub struct NewRoutineCommand {
    context: CommandContext,
    args: NewRoutineArgs,
}

impl NewRoutineCommand {
    /// Create a new new-routine command.
    pub fn new(context: CommandContext, args: NewRoutineArgs) -> Self {
        Self { context, args }
    }
}

impl Command for NewRoutineCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut ws = self.context.open_workspace()?;
        ws.create_routine(&self.args.name)?;

        ui.success(&format!("Created routine {}", self.args.name));
        Ok(CommandResult::success())
    }
}
