//! Named configuration properties
//!
//! The four keys a configuration file, an environment variable or
//! `config get`/`config set` can address. Each property owns its parser, so
//! an unknown key can only appear at the string boundary ([`FromStr`]).

use crate::error::{XibugoError, XibugoResult};
use std::fmt;
use std::str::FromStr;

/// Prefix shared by every environment variable the CLI reads
pub const ENV_PREFIX: &str = "XIBUGO";

/// A registered configuration property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigProperty {
    Account,
    BaseUrl,
    AccessToken,
    Sandbox,
}

/// A parsed value ready to be stored under its property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyUpdate {
    Account(String),
    BaseUrl(String),
    AccessToken(String),
    Sandbox(bool),
}

impl ConfigProperty {
    /// Every registered property
    pub const ALL: [ConfigProperty; 4] = [
        ConfigProperty::Account,
        ConfigProperty::BaseUrl,
        ConfigProperty::AccessToken,
        ConfigProperty::Sandbox,
    ];

    /// Key used in files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            ConfigProperty::Account => "account",
            ConfigProperty::BaseUrl => "base-url",
            ConfigProperty::AccessToken => "access-token",
            ConfigProperty::Sandbox => "sandbox",
        }
    }

    /// Environment variable that overrides this property
    pub fn env_var(&self) -> String {
        format!(
            "{}_{}",
            ENV_PREFIX,
            self.key().to_uppercase().replace('-', "_")
        )
    }

    /// Parse a raw string into a typed update for this property
    ///
    /// `account` must be a 64-bit integer; it is stored in its canonical
    /// decimal form so the model keeps a string-typed account.
    pub fn parse(&self, raw: &str) -> XibugoResult<PropertyUpdate> {
        match self {
            ConfigProperty::Account => {
                let id: i64 = raw.trim().parse().map_err(|_| {
                    XibugoError::validation_field(
                        format!("invalid value '{}' for account: not a 64-bit integer", raw),
                        self.key(),
                    )
                })?;
                Ok(PropertyUpdate::Account(id.to_string()))
            }
            ConfigProperty::BaseUrl => Ok(PropertyUpdate::BaseUrl(raw.to_string())),
            ConfigProperty::AccessToken => Ok(PropertyUpdate::AccessToken(raw.to_string())),
            ConfigProperty::Sandbox => parse_bool(raw).map(PropertyUpdate::Sandbox).ok_or_else(|| {
                XibugoError::validation_field(
                    format!("invalid value '{}' for sandbox: not a boolean", raw),
                    self.key(),
                )
            }),
        }
    }
}

impl PropertyUpdate {
    /// Property this update targets
    pub fn property(&self) -> ConfigProperty {
        match self {
            PropertyUpdate::Account(_) => ConfigProperty::Account,
            PropertyUpdate::BaseUrl(_) => ConfigProperty::BaseUrl,
            PropertyUpdate::AccessToken(_) => ConfigProperty::AccessToken,
            PropertyUpdate::Sandbox(_) => ConfigProperty::Sandbox,
        }
    }
}

impl fmt::Display for ConfigProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ConfigProperty {
    type Err = XibugoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigProperty::ALL
            .into_iter()
            .find(|property| property.key() == s)
            .ok_or_else(|| {
                XibugoError::not_found_resource(
                    format!("unknown configuration property '{}'", s),
                    "property",
                )
            })
    }
}

/// Boolean parsing with the same accepted spellings as the flag layer
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
