//! Setup wizard state
//!
//! Tracks which question is being asked and the answers given so far.

use super::options::Environment;
use crate::config::format::FileFormat;
use crate::config::layer::ConfigValues;

/// Steps of the setup wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    /// Account identifier
    #[default]
    Account,
    /// API access token
    AccessToken,
    /// PROD, SANDBOX or DEV
    Environment,
    /// Custom endpoint (DEV only)
    BaseUrl,
    /// Output file format
    FileFormat,
    /// Save confirmation
    Confirm,
    /// Answers accepted
    Complete,
}

impl WizardStep {
    /// Step that follows this one for the chosen environment
    pub fn next(&self, environment: Environment) -> Option<WizardStep> {
        match self {
            WizardStep::Account => Some(WizardStep::AccessToken),
            WizardStep::AccessToken => Some(WizardStep::Environment),
            WizardStep::Environment if environment.needs_base_url() => Some(WizardStep::BaseUrl),
            WizardStep::Environment => Some(WizardStep::FileFormat),
            WizardStep::BaseUrl => Some(WizardStep::FileFormat),
            WizardStep::FileFormat => Some(WizardStep::Confirm),
            WizardStep::Confirm => Some(WizardStep::Complete),
            WizardStep::Complete => None,
        }
    }

    pub fn is_last(&self) -> bool {
        matches!(self, WizardStep::Complete)
    }

    /// Prompt text shown for this step
    pub fn prompt(&self) -> &'static str {
        match self {
            WizardStep::Account => "Account ID",
            WizardStep::AccessToken => "Access Token",
            WizardStep::Environment => "Environment",
            WizardStep::BaseUrl => "Base URL",
            WizardStep::FileFormat => "File format",
            WizardStep::Confirm => "Do you want to save?",
            WizardStep::Complete => "Setup complete",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prompt())
    }
}

/// Answers collected by the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: WizardStep,
    pub account: String,
    pub access_token: String,
    pub environment: Environment,
    /// Only set when the environment is DEV
    pub base_url: Option<String>,
    pub format: FileFormat,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next step; false once complete
    pub fn advance(&mut self) -> bool {
        match self.current_step.next(self.environment) {
            Some(next) => {
                self.current_step = next;
                true
            }
            None => false,
        }
    }

    /// Record the environment, dropping a base URL that no longer applies
    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
        if !environment.needs_base_url() {
            self.base_url = None;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_step.is_last()
    }

    /// Document to write for these answers
    ///
    /// SANDBOX records `sandbox: true`, DEV records `base-url`, PROD records
    /// neither.
    pub fn to_values(&self) -> ConfigValues {
        ConfigValues {
            account: Some(self.account.clone()),
            access_token: Some(self.access_token.clone()),
            base_url: match self.environment {
                Environment::Dev => self.base_url.clone(),
                _ => None,
            },
            sandbox: match self.environment {
                Environment::Sandbox => Some(true),
                _ => None,
            },
        }
    }
}
