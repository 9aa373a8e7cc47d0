//! History command implementation.
//!
//! The `liftlog history` command shows logged workouts.

use crate::cli::args::HistoryArgs;
use crate::error::Result;
use crate::history::{HistoryFilter, HistoryRecord, HEADER};
use crate::routine::format_weight;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// Shown when the log has no rows at all.
pub const NO_HISTORY: &str = "No workouts logged yet.";

/// The history command implementation.
pub struct HistoryCommand {
    context: CommandContext,
    args: HistoryArgs,
}

impl HistoryCommand {
    /// Create a new history command.
    pub fn new(context: CommandContext, args: HistoryArgs) -> Self {
        Self { context, args }
    }

    fn filter(&self) -> HistoryFilter {
        HistoryFilter {
            routine: self.args.routine.clone(),
            exercise: self.args.exercise.clone(),
            limit: self.args.limit,
        }
    }

    fn history_table(records: &[&HistoryRecord]) -> Table {
        let mut table = Table::new(HEADER.to_vec()).align_right(3);
        for record in records {
            table.add_row(vec![
                record.formatted_timestamp(),
                record.routine.clone(),
                record.exercise.clone(),
                format_weight(record.weight),
            ]);
        }
        table
    }
}

impl Command for HistoryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ws = self.context.open_workspace()?;
        let records = ws.read_history()?;
        let shown = self.filter().apply(&records);

        if self.args.json {
            let json = serde_json::to_string_pretty(&shown).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if records.is_empty() {
            ui.message(NO_HISTORY);
            return Ok(CommandResult::success());
        }

        if shown.is_empty() {
            ui.message("No workouts match the filter.");
            return Ok(CommandResult::success());
        }

        ui.message(&Self::history_table(&shown).render());
        if ui.output_mode().shows_details() {
            ui.message(&format!("{} of {} rows", shown.len(), records.len()));
        }

        Ok(CommandResult::success())
    }
}
