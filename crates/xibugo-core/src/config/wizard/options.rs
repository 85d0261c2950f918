//! Choices offered by the setup wizard

use crate::config::model::PRODUCTION_URL;
use std::fmt;

/// Target environment picked during setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Production endpoint, nothing recorded
    #[default]
    Prod,
    /// Sandbox endpoint, recorded as `sandbox: true`
    Sandbox,
    /// Custom endpoint, recorded as `base-url`
    Dev,
}

impl Environment {
    /// Options in the order they are presented
    pub const ALL: [Environment; 3] = [Environment::Prod, Environment::Sandbox, Environment::Dev];

    pub fn label(&self) -> &'static str {
        match self {
            Environment::Prod => "PROD",
            Environment::Sandbox => "SANDBOX",
            Environment::Dev => "DEV",
        }
    }

    /// Whether this environment asks for an explicit base URL
    pub fn needs_base_url(&self) -> bool {
        matches!(self, Environment::Dev)
    }

    /// Pre-filled answer for the base URL prompt
    pub fn default_base_url() -> &'static str {
        PRODUCTION_URL
    }

    /// Labels for a select prompt
    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|env| env.label().to_string()).collect()
    }

    /// Position of this environment in [`Environment::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|env| env == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_in_presentation_order() {
        assert_eq!(Environment::labels(), vec!["PROD", "SANDBOX", "DEV"]);
        assert_eq!(Environment::default(), Environment::Prod);
        assert_eq!(Environment::Dev.index(), 2);
    }

    #[test]
    fn test_only_dev_needs_base_url() {
        assert!(Environment::Dev.needs_base_url());
        assert!(!Environment::Prod.needs_base_url());
        assert!(!Environment::Sandbox.needs_base_url());
    }
}
