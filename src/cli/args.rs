//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// liftlog - Gym routines, training sessions and progress history.
#[derive(Debug, Parser)]
#[command(name = "liftlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides <DATA_DIR>/liftlog.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the routine and history files
    #[arg(short, long, global = true, env = "LIFTLOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List routines and their exercises
    Routines(RoutinesArgs),

    /// Train a routine (default if no command specified)
    Train(TrainArgs),

    /// Show logged workouts
    History(HistoryArgs),

    /// Add an exercise to a routine
    Add(AddArgs),

    /// Change an exercise in a routine
    Edit(EditArgs),

    /// Create an empty routine
    NewRoutine(NewRoutineArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `routines` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RoutinesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `train` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TrainArgs {
    /// Routine to train (prompted when omitted)
    pub routine: Option<String>,

    /// Mark an exercise done by name, without prompting (repeatable)
    #[arg(long, value_name = "NAME")]
    pub complete: Vec<String>,
}

/// Arguments for the `history` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HistoryArgs {
    /// Filter by routine name
    #[arg(long)]
    pub routine: Option<String>,

    /// Filter by exercise name (case-insensitive substring)
    #[arg(long)]
    pub exercise: Option<String>,

    /// Number of most recent rows to show
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddArgs {
    /// Routine to add to
    pub routine: String,

    /// Exercise name
    pub name: String,

    /// Target weight in kg
    #[arg(short, long, value_name = "KG")]
    pub weight: f64,

    /// Machine identifier
    #[arg(short, long, default_value = "")]
    pub machine: String,

    /// Free-form machine settings
    #[arg(short, long, default_value = "")]
    pub settings: String,
}

/// Arguments for the `edit` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EditArgs {
    /// Routine containing the exercise
    pub routine: String,

    /// Position of the exercise as listed by `liftlog routines` (starting at 1)
    pub position: usize,

    /// New exercise name
    #[arg(long)]
    pub name: Option<String>,

    /// New target weight in kg
    #[arg(short, long, value_name = "KG")]
    pub weight: Option<f64>,

    /// New machine identifier
    #[arg(short, long)]
    pub machine: Option<String>,

    /// New machine settings
    #[arg(short, long)]
    pub settings: Option<String>,
}

/// Arguments for the `new-routine` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NewRoutineArgs {
    /// Name of the routine
    pub name: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_train_with_completions() {
        let cli = Cli::try_parse_from([
            "liftlog",
            "train",
            "A",
            "--complete",
            "Chest Press",
            "--complete",
            "Dip Chin",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Train(args)) => {
                assert_eq!(args.routine.as_deref(), Some("A"));
                assert_eq!(args.complete, vec!["Chest Press", "Dip Chin"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_add_with_defaults() {
        let cli =
            Cli::try_parse_from(["liftlog", "add", "A", "Dip Chin", "--weight", "32"]).unwrap();

        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.routine, "A");
                assert_eq!(args.name, "Dip Chin");
                assert_eq!(args.weight, 32.0);
                assert_eq!(args.machine, "");
                assert_eq!(args.settings, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn add_requires_weight() {
        assert!(Cli::try_parse_from(["liftlog", "add", "A", "Dip Chin"]).is_err());
    }

    #[test]
    fn parses_edit_partial() {
        let cli = Cli::try_parse_from(["liftlog", "edit", "B", "2", "--weight", "41"]).unwrap();

        match cli.command {
            Some(Commands::Edit(args)) => {
                assert_eq!(args.position, 2);
                assert_eq!(args.weight, Some(41.0));
                assert!(args.name.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["liftlog", "history", "--data-dir", "/tmp/gym", "--quiet"])
                .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/gym")));
        assert!(cli.quiet);
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["liftlog"]).unwrap();
        assert!(cli.command.is_none());
    }
}
