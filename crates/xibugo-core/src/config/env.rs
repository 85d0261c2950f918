//! Environment variable snapshot and the environment layer
//!
//! The process environment is captured once at startup. Everything that
//! looks at environment variables (the locator, the environment layer,
//! the user config directory lookup) reads from the snapshot, which keeps
//! resolution deterministic and lets tests supply their own variables.

use super::layer::ConfigValues;
use super::property::{ConfigProperty, PropertyUpdate, parse_bool};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Explicit configuration file path override
pub const ENV_CONFIG_FILE: &str = "XIBUGO_CONFIG_FILE";

/// Profile name override
pub const ENV_PROFILE: &str = "XIBUGO_PROFILE";

/// Base directory for per-user configuration on XDG systems
pub const ENV_XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";

/// Immutable view of environment variables
#[derive(Debug, Clone, Default)]
pub struct EnvVars {
    vars: HashMap<String, String>,
}

impl EnvVars {
    /// Capture the current process environment
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Look up a variable; empty values count as unset
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for EnvVars
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Build the environment layer from `XIBUGO_<KEY>` variables
///
/// A `XIBUGO_SANDBOX` value that is not a boolean is reported and ignored
/// rather than failing the whole command.
pub fn load_from_env(env: &EnvVars) -> ConfigValues {
    let mut values = ConfigValues::default();

    for property in ConfigProperty::ALL {
        let var_name = property.env_var();
        let Some(raw) = env.get(&var_name) else {
            continue;
        };

        let update = match property {
            ConfigProperty::Account => PropertyUpdate::Account(raw.to_string()),
            ConfigProperty::BaseUrl => PropertyUpdate::BaseUrl(raw.to_string()),
            ConfigProperty::AccessToken => PropertyUpdate::AccessToken(raw.to_string()),
            ConfigProperty::Sandbox => match parse_bool(raw) {
                Some(sandbox) => PropertyUpdate::Sandbox(sandbox),
                None => {
                    warn!("Ignoring {}: '{}' is not a boolean", var_name, raw);
                    continue;
                }
            },
        };

        debug!("{} set from {}", property, var_name);
        values.apply(update);
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_unset() {
        let env: EnvVars = [("XIBUGO_PROFILE", ""), ("XIBUGO_ACCOUNT", "acc")]
            .into_iter()
            .collect();
        assert_eq!(env.get(ENV_PROFILE), None);
        assert_eq!(env.get("XIBUGO_ACCOUNT"), Some("acc"));
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn test_load_from_env_reads_every_key() {
        let env: EnvVars = [
            ("XIBUGO_ACCOUNT", "1010"),
            ("XIBUGO_ACCESS_TOKEN", "env-token"),
            ("XIBUGO_BASE_URL", "http://localhost:4000"),
            ("XIBUGO_SANDBOX", "true"),
        ]
        .into_iter()
        .collect();

        let values = load_from_env(&env);
        assert_eq!(values.account.as_deref(), Some("1010"));
        assert_eq!(values.access_token.as_deref(), Some("env-token"));
        assert_eq!(values.base_url.as_deref(), Some("http://localhost:4000"));
        assert_eq!(values.sandbox, Some(true));
    }

    #[test]
    fn test_load_from_env_ignores_unrelated_variables() {
        let env: EnvVars = [("ACCOUNT", "nope"), ("XIBUGO_TOKEN", "nope")]
            .into_iter()
            .collect();
        assert!(load_from_env(&env).is_empty());
    }

    #[test]
    fn test_invalid_sandbox_is_skipped() {
        let env: EnvVars = [("XIBUGO_SANDBOX", "sometimes"), ("XIBUGO_ACCOUNT", "7")]
            .into_iter()
            .collect();

        let values = load_from_env(&env);
        assert_eq!(values.sandbox, None);
        assert_eq!(values.account.as_deref(), Some("7"));
    }
}
