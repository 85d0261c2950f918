//! Configuration layers
//!
//! Each source of configuration (values set during this run, command-line
//! flags, environment variables, the configuration file) contributes a
//! [`ConfigValues`] record where every field is optional. The resolver
//! merges them from lowest to highest priority.

use super::property::{ConfigProperty, PropertyUpdate, parse_bool};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Priority of a configuration layer (lower number = higher priority)
///
/// The priority order is:
/// 1. Values set with `config set` during this invocation
/// 2. Command-line flags
/// 3. Environment variables
/// 4. Configuration file
/// 5. Built-in defaults (empty string / false)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LayerKind {
    Override = 1,
    Flag = 2,
    Environment = 3,
    File = 4,
    Default = 5,
}

impl LayerKind {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            LayerKind::Override => "override",
            LayerKind::Flag => "command-line flag",
            LayerKind::Environment => "environment variable",
            LayerKind::File => "configuration file",
            LayerKind::Default => "default",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Partial configuration contributed by one layer
///
/// This is also the on-disk document: keys are kebab-case, unset fields
/// are left out when writing and unknown keys are ignored when reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigValues {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_account"
    )]
    pub account: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_sandbox"
    )]
    pub sandbox: Option<bool>,
}

impl ConfigValues {
    /// Value of a property rendered as a string, if this layer sets it
    pub fn get(&self, property: ConfigProperty) -> Option<String> {
        match property {
            ConfigProperty::Account => self.account.clone(),
            ConfigProperty::BaseUrl => self.base_url.clone(),
            ConfigProperty::AccessToken => self.access_token.clone(),
            ConfigProperty::Sandbox => self.sandbox.map(|sandbox| sandbox.to_string()),
        }
    }

    /// Whether this layer sets the property
    pub fn contains(&self, property: ConfigProperty) -> bool {
        match property {
            ConfigProperty::Account => self.account.is_some(),
            ConfigProperty::BaseUrl => self.base_url.is_some(),
            ConfigProperty::AccessToken => self.access_token.is_some(),
            ConfigProperty::Sandbox => self.sandbox.is_some(),
        }
    }

    /// Store a parsed value
    pub fn apply(&mut self, update: PropertyUpdate) {
        match update {
            PropertyUpdate::Account(account) => self.account = Some(account),
            PropertyUpdate::BaseUrl(base_url) => self.base_url = Some(base_url),
            PropertyUpdate::AccessToken(token) => self.access_token = Some(token),
            PropertyUpdate::Sandbox(sandbox) => self.sandbox = Some(sandbox),
        }
    }

    /// Merge a higher-priority layer on top of this one
    pub fn merge(&mut self, higher: &ConfigValues) {
        if higher.account.is_some() {
            self.account.clone_from(&higher.account);
        }
        if higher.access_token.is_some() {
            self.access_token.clone_from(&higher.access_token);
        }
        if higher.base_url.is_some() {
            self.base_url.clone_from(&higher.base_url);
        }
        if higher.sandbox.is_some() {
            self.sandbox = higher.sandbox;
        }
    }

    /// Whether no property is set
    pub fn is_empty(&self) -> bool {
        ConfigProperty::ALL
            .into_iter()
            .all(|property| !self.contains(property))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AccountRepr {
    Number(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SandboxRepr {
    Flag(bool),
    Text(String),
}

/// Accounts written as numbers (as older tooling did) read back as strings
fn deserialize_account<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<AccountRepr>::deserialize(deserializer)?.map(|repr| match repr {
            AccountRepr::Number(id) => id.to_string(),
            AccountRepr::Text(account) => account,
        }),
    )
}

fn deserialize_sandbox<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<SandboxRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(SandboxRepr::Flag(sandbox)) => Ok(Some(sandbox)),
        Some(SandboxRepr::Text(raw)) => parse_bool(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid sandbox value '{}'", raw))),
    }
}
