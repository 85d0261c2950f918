//! Terminal prompts for the setup wizard

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use xibugo_core::config::wizard::Prompter;
use xibugo_core::error::{XibugoError, XibugoResult};

/// [`Prompter`] backed by dialoguer, drawing on stderr
pub struct TerminalPrompter {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, message: &str, default: &str) -> XibugoResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }

        input
            .interact_text_on(&self.term)
            .map_err(|e| XibugoError::prompt(format!("input error: {}", e)))
    }

    fn select(
        &mut self,
        message: &str,
        options: Vec<String>,
        default: usize,
    ) -> XibugoResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&options)
            .default(default)
            .interact_on(&self.term)
            .map_err(|e| XibugoError::prompt(format!("selection error: {}", e)))
    }

    fn confirm(&mut self, message: &str, default: bool) -> XibugoResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact_on(&self.term)
            .map_err(|e| XibugoError::prompt(format!("confirmation error: {}", e)))
    }
}
