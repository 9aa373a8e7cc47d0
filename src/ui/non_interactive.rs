//! Non-interactive UI for scripts and pipes.

use std::collections::HashMap;

use crate::error::{LiftlogError, Result};

use super::theme::LiftlogTheme;
use super::{OutputMode, Prompt, PromptResult, UserInterface};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "LIFTLOG_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `LIFTLOG_PROMPT_<KEY>` environment variables,
/// then from the prompt default. A prompt with neither is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: LiftlogTheme,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self::with_overrides(mode, env_overrides)
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            theme: LiftlogTheme::plain(),
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(PromptResult::String(value.clone()));
        }

        if let Some(default) = &prompt.default {
            return Ok(PromptResult::String(default.clone()));
        }

        Err(LiftlogError::InvalidInput {
            message: format!(
                "Cannot prompt for '{}' in non-interactive mode (no default value)",
                prompt.key
            ),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_progress(&mut self, done: usize, total: usize) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_progress(done, total));
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::input("machine", "Machine").with_default("Maquina 3");

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result, PromptResult::String("Maquina 3".into()));
    }

    #[test]
    fn prompt_prefers_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert("LIFTLOG_PROMPT_ROUTINE".to_string(), "B".to_string());
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt::input("routine", "Routine").with_default("A");

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_string(), "B");
    }

    #[test]
    fn prompt_without_default_fails() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());

        let err = ui.prompt(&Prompt::input("name", "Name")).unwrap_err();
        assert!(matches!(err, LiftlogError::InvalidInput { .. }));
    }

    #[test]
    fn is_never_interactive() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(!ui.is_interactive());
    }
}
