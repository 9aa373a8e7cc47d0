//! Train command implementation.
//!
//! The `liftlog train` command runs a session for one routine. With
//! `--complete` it marks the named exercises done and exits; on a terminal
//! it loops over a select prompt until the user finishes.

use std::str::FromStr;

use crate::cli::args::TrainArgs;
use crate::error::{LiftlogError, Result};
use crate::routine::Exercise;
use crate::ui::{Prompt, PromptOption, UserInterface};
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::display::{describe_exercise, show_session, DONE_ICON, PENDING_ICON};

/// Printed when a routine has nothing left pending.
pub const ROUTINE_COMPLETE: &str = "Routine complete!";

/// The train command implementation.
pub struct TrainCommand {
    context: CommandContext,
    args: TrainArgs,
}

/// One choice in the training loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainAction {
    /// Mark the pending exercise at this position done.
    Done(usize),
    /// Move the completed exercise at this position back to pending.
    Undo(usize),
    /// Leave the loop.
    Finish,
}

impl TrainAction {
    /// Value carried by the select option.
    pub fn value(&self) -> String {
        match self {
            Self::Done(i) => format!("done:{}", i),
            Self::Undo(i) => format!("undo:{}", i),
            Self::Finish => "finish".to_string(),
        }
    }
}

impl FromStr for TrainAction {
    type Err = LiftlogError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LiftlogError::InvalidInput {
            message: format!("unknown action '{}'", s),
        };

        if s == "finish" {
            return Ok(Self::Finish);
        }
        let (kind, index) = s.split_once(':').ok_or_else(invalid)?;
        let index: usize = index.parse().map_err(|_| invalid())?;
        match kind {
            "done" => Ok(Self::Done(index)),
            "undo" => Ok(Self::Undo(index)),
            _ => Err(invalid()),
        }
    }
}

impl TrainCommand {
    /// Create a new train command.
    pub fn new(context: CommandContext, args: TrainArgs) -> Self {
        Self { context, args }
    }

    /// Routine from the arguments, or asked for.
    fn resolve_routine(&self, ws: &Workspace, ui: &mut dyn UserInterface) -> Result<String> {
        if let Some(name) = &self.args.routine {
            return Ok(name.clone());
        }

        let names = ws.store().routine_names();
        let options = names
            .iter()
            .map(|n| PromptOption::new(format!("Routine {}", n), *n))
            .collect();
        let mut prompt = Prompt::select("routine", "Which routine?", options);
        if let Some(first) = names.first() {
            prompt = prompt.with_default(*first);
        }

        Ok(ui.prompt(&prompt)?.as_string())
    }

    /// Mark the first pending exercise called `name` done.
    fn complete_by_name(
        ws: &mut Workspace,
        routine: &str,
        name: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let exercise = ws
            .session()
            .pending(routine)?
            .iter()
            .find(|e| e.name == name)
            .cloned()
            .ok_or_else(|| LiftlogError::NotPending {
                routine: routine.to_string(),
                exercise: name.to_string(),
            })?;

        Self::complete(ws, routine, &exercise, ui)
    }

    fn complete(
        ws: &mut Workspace,
        routine: &str,
        exercise: &Exercise,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        ws.complete(routine, exercise)?;
        ui.success(&format!("Logged {}", exercise));
        if ws.is_routine_complete(routine)? {
            ui.success(ROUTINE_COMPLETE);
        }
        Ok(())
    }

    /// Options for the next loop iteration.
    fn action_options(ws: &Workspace, routine: &str) -> Result<Vec<PromptOption>> {
        let mut options = Vec::new();
        for (i, exercise) in ws.session().pending(routine)?.iter().enumerate() {
            options.push(PromptOption::new(
                format!("{} {}", PENDING_ICON, describe_exercise(exercise)),
                TrainAction::Done(i).value(),
            ));
        }
        for (i, exercise) in ws.session().completed(routine)?.iter().enumerate() {
            options.push(PromptOption::new(
                format!("{} {} (undo)", DONE_ICON, exercise),
                TrainAction::Undo(i).value(),
            ));
        }
        options.push(PromptOption::new("Finish", TrainAction::Finish.value()));
        Ok(options)
    }

    fn run_loop(ws: &mut Workspace, routine: &str, ui: &mut dyn UserInterface) -> Result<()> {
        loop {
            let (done, total) = ws.session().progress(routine)?;
            ui.show_progress(done, total);

            // Suggest the next pending exercise, or finishing once none remain.
            let default = if ws.is_routine_complete(routine)? {
                TrainAction::Finish
            } else {
                TrainAction::Done(0)
            };
            let prompt = Prompt::select("action", "Next", Self::action_options(ws, routine)?)
                .with_default(default.value());

            match ui.prompt(&prompt)?.as_string().parse::<TrainAction>()? {
                TrainAction::Done(i) => {
                    let exercise = Self::pick(ws.session().pending(routine)?, i)?;
                    Self::complete(ws, routine, &exercise, ui)?;
                }
                TrainAction::Undo(i) => {
                    let exercise = Self::pick(ws.session().completed(routine)?, i)?;
                    ws.uncomplete(routine, &exercise)?;
                    ui.message(&format!("Back to pending: {}", exercise));
                }
                TrainAction::Finish => return Ok(()),
            }
        }
    }

    fn pick(exercises: &[Exercise], index: usize) -> Result<Exercise> {
        exercises
            .get(index)
            .cloned()
            .ok_or_else(|| LiftlogError::InvalidInput {
                message: format!("no exercise at position {}", index),
            })
    }
}

impl Command for TrainCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut ws = self.context.open_workspace()?;
        let routine = self.resolve_routine(&ws, ui)?;
        if ws.store().routine(&routine).is_none() {
            return Err(LiftlogError::UnknownRoutine { name: routine });
        }

        tracing::debug!("Training routine {}", routine);
        ui.show_header(&format!("Routine {}", routine));

        if ws.session().progress(&routine)?.1 == 0 {
            ui.message("This routine has no exercises yet. Add one with 'liftlog add'.");
            return Ok(CommandResult::success());
        }

        if !self.args.complete.is_empty() {
            for name in &self.args.complete {
                Self::complete_by_name(&mut ws, &routine, name, ui)?;
            }
        } else if ui.is_interactive() {
            Self::run_loop(&mut ws, &routine, ui)?;
            return Ok(CommandResult::success());
        }

        let (done, total) = ws.session().progress(&routine)?;
        ui.show_progress(done, total);
        if let Some(session) = ws.session().get(&routine) {
            show_session(ui, session);
        }

        Ok(CommandResult::success())
    }
}
