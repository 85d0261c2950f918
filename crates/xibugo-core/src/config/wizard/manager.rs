//! Setup wizard driver
//!
//! Walks the [`WizardStep`] sequence, asking one question per step through
//! a [`Prompter`], and hands back the document to save. Nothing is written
//! here; see [`save_profile`](super::save_profile).

use super::options::Environment;
use super::prompter::Prompter;
use super::state::{WizardState, WizardStep};
use crate::config::format::FileFormat;
use crate::config::layer::ConfigValues;
use crate::config::model::Config;
use crate::config::store::ConfigStore;
use crate::error::{XibugoError, XibugoResult};
use tracing::debug;

/// Accepted answers of a completed wizard run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardOutcome {
    pub values: ConfigValues,
    pub format: FileFormat,
}

/// Interactive profile setup
#[derive(Debug, Clone)]
pub struct SetupWizard {
    state: WizardState,
    existing_account: String,
    existing_access_token: String,
}

impl SetupWizard {
    /// Create a wizard that offers `existing` credentials as defaults
    pub fn new(existing: &Config) -> Self {
        Self {
            state: WizardState::new(),
            existing_account: existing.account.clone(),
            existing_access_token: existing.access_token.clone(),
        }
    }

    /// Create a wizard seeded from the current configuration
    ///
    /// Missing credentials are fine here; they simply have no default.
    pub fn from_store(store: &ConfigStore) -> XibugoResult<Self> {
        Ok(Self::new(&store.resolve(false)?))
    }

    /// Ask every question and return the answers
    ///
    /// Declining the final confirmation fails with
    /// [`XibugoError::NotConfirmed`].
    pub fn run(mut self, prompter: &mut dyn Prompter) -> XibugoResult<WizardOutcome> {
        while !self.state.is_complete() {
            self.ask(prompter)?;
            debug!("Wizard step '{}' answered", self.state.current_step);
            self.state.advance();
        }

        Ok(WizardOutcome {
            values: self.state.to_values(),
            format: self.state.format,
        })
    }

    fn ask(&mut self, prompter: &mut dyn Prompter) -> XibugoResult<()> {
        let step = self.state.current_step;
        match step {
            WizardStep::Account => {
                self.state.account = prompter.input(step.prompt(), &self.existing_account)?;
            }
            WizardStep::AccessToken => {
                self.state.access_token =
                    prompter.input(step.prompt(), &self.existing_access_token)?;
            }
            WizardStep::Environment => {
                let index = prompter.select(
                    step.prompt(),
                    Environment::labels(),
                    Environment::default().index(),
                )?;
                let environment = Environment::ALL
                    .get(index)
                    .copied()
                    .ok_or_else(|| invalid_choice(step, index))?;
                self.state.set_environment(environment);
            }
            WizardStep::BaseUrl => {
                let base_url = prompter.input(step.prompt(), Environment::default_base_url())?;
                self.state.base_url = Some(base_url);
            }
            WizardStep::FileFormat => {
                let index = prompter.select(step.prompt(), FileFormat::labels(), 0)?;
                self.state.format = FileFormat::ALL
                    .get(index)
                    .copied()
                    .ok_or_else(|| invalid_choice(step, index))?;
            }
            WizardStep::Confirm => {
                if !prompter.confirm(step.prompt(), true)? {
                    return Err(XibugoError::NotConfirmed);
                }
            }
            WizardStep::Complete => {}
        }
        Ok(())
    }
}

fn invalid_choice(step: WizardStep, index: usize) -> XibugoError {
    XibugoError::prompt(format!("invalid choice {} for '{}'", index, step))
}
