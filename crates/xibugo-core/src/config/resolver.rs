//! Configuration resolution
//!
//! Merges the configuration layers into one [`Config`], honouring layer
//! priority and the sandbox endpoint override.

use super::layer::{ConfigValues, LayerKind};
use super::model::{Config, PRODUCTION_URL, SANDBOX_URL};
use super::property::ConfigProperty;
use crate::error::XibugoResult;
use tracing::debug;

/// Merges borrowed configuration layers
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver<'a> {
    layers: Vec<(LayerKind, &'a ConfigValues)>,
}

impl<'a> ConfigResolver<'a> {
    /// Create a resolver with no layers (everything defaults)
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Add a layer; the order layers are added in does not matter
    pub fn with_layer(mut self, kind: LayerKind, values: &'a ConfigValues) -> Self {
        self.layers.push((kind, values));
        self.layers.sort_by_key(|(kind, _)| *kind);
        self
    }

    /// All layers merged, without defaults or the sandbox override
    pub fn merged(&self) -> ConfigValues {
        let mut merged = ConfigValues::default();
        for (_, values) in self.layers.iter().rev() {
            merged.merge(values);
        }
        merged
    }

    /// Layer that supplies a property's value
    pub fn origin(&self, property: ConfigProperty) -> LayerKind {
        self.layers
            .iter()
            .find(|(_, values)| values.contains(property))
            .map(|(kind, _)| *kind)
            .unwrap_or(LayerKind::Default)
    }

    /// Build the configuration for this invocation
    ///
    /// With `validate` set, a missing account or access token is an error.
    /// A true `sandbox` always replaces the base URL with the sandbox
    /// endpoint; an empty base URL otherwise becomes the production one.
    pub fn resolve(&self, validate: bool) -> XibugoResult<Config> {
        let merged = self.merged();

        for property in ConfigProperty::ALL {
            debug!("{} resolved from {}", property, self.origin(property));
        }

        let mut config = Config {
            account: merged.account.unwrap_or_default(),
            access_token: merged.access_token.unwrap_or_default(),
            base_url: merged.base_url.unwrap_or_default(),
            sandbox: merged.sandbox.unwrap_or(false),
        };

        if validate {
            config.validate()?;
        }

        if config.sandbox {
            config.base_url = SANDBOX_URL.to_string();
        } else if config.base_url.is_empty() {
            config.base_url = PRODUCTION_URL.to_string();
        }

        Ok(config)
    }
}
