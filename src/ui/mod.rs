//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands never write to the terminal directly
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for scripts and pipes
//! - [`MockUI`] for tests
//! - Prompts, tables and the color theme
//!
//! # Example
//!
//! ```
//! use liftlog::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Routine A");
//! ui.success("Routine complete!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, LiftlogTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user. Always shown.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show progress (e.g., "3 of 5 done").
    fn show_progress(&mut self, done: usize, total: usize);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and test responses).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// Free-text prompt.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input { allow_empty: false },
            default: None,
        }
    }

    /// Single choice from a list.
    pub fn select(key: &str, question: &str, options: Vec<PromptOption>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Select { options },
            default: None,
        }
    }

    /// Set the default answer.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Accept an empty answer for an input prompt.
    pub fn allow_empty(mut self) -> Self {
        if let PromptType::Input { allow_empty } = &mut self.prompt_type {
            *allow_empty = true;
        }
        self
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Free-form text input.
    Input { allow_empty: bool },
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

impl PromptOption {
    /// Create an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptResult {
    /// String result from input or select.
    String(String),
}

impl PromptResult {
    /// Get as string.
    pub fn as_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_result_as_string() {
        assert_eq!(PromptResult::String("done:0".into()).as_string(), "done:0");
    }

    #[test]
    fn input_builder_sets_fields() {
        let prompt = Prompt::input("machine", "Machine").with_default("Maquina 20");
        assert_eq!(prompt.key, "machine");
        assert_eq!(prompt.default.as_deref(), Some("Maquina 20"));
        assert!(matches!(
            prompt.prompt_type,
            PromptType::Input { allow_empty: false }
        ));
    }

    #[test]
    fn allow_empty_only_affects_input() {
        let input = Prompt::input("settings", "Settings").allow_empty();
        assert!(matches!(
            input.prompt_type,
            PromptType::Input { allow_empty: true }
        ));

        let select = Prompt::select("routine", "Pick", vec![]).allow_empty();
        assert!(matches!(select.prompt_type, PromptType::Select { .. }));
    }

    #[test]
    fn select_stores_options() {
        let prompt = Prompt::select(
            "routine",
            "Pick a routine",
            vec![PromptOption::new("A", "A"), PromptOption::new("B", "B")],
        );
        if let PromptType::Select { options } = prompt.prompt_type {
            assert_eq!(options.len(), 2);
            assert_eq!(options[1].value, "B");
        } else {
            panic!("Expected Select variant");
        }
    }
}
