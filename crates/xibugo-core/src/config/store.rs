//! Per-invocation configuration store
//!
//! Built once at startup from the command-line flags, an environment
//! snapshot and whichever file the locator picks, then handed to command
//! handlers by reference.

use super::env::{EnvVars, load_from_env};
use super::file_loader::load_from_file;
use super::layer::{ConfigValues, LayerKind};
use super::locator::{ConfigLocation, ConfigLocator, LocatorOptions};
use super::model::Config;
use super::property::ConfigProperty;
use super::resolver::ConfigResolver;
use crate::error::{XibugoError, XibugoResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Layered configuration state for one command invocation
#[derive(Debug, Clone)]
pub struct ConfigStore {
    pub(crate) location: ConfigLocation,
    pub(crate) overrides: ConfigValues,
    pub(crate) flags: ConfigValues,
    pub(crate) env: ConfigValues,
    pub(crate) file: ConfigValues,
    /// Why an existing file could not be read; blocks writes back to it
    pub(crate) file_error: Option<XibugoError>,
    user_config_dir: Option<PathBuf>,
}

impl ConfigStore {
    /// Locate and read configuration using the standard directories
    pub fn load(flags: ConfigValues, options: &LocatorOptions, env: &EnvVars) -> Self {
        Self::load_with(&ConfigLocator::new(env), flags, options, env)
    }

    /// Locate and read configuration with a custom locator
    ///
    /// A missing file is silently treated as empty. A file that exists but
    /// cannot be read or parsed is reported as a warning and also treated
    /// as empty, so flags and environment variables still apply, but the
    /// failure is kept so `set` will not overwrite the unreadable file.
    pub fn load_with(
        locator: &ConfigLocator<'_>,
        flags: ConfigValues,
        options: &LocatorOptions,
        env: &EnvVars,
    ) -> Self {
        let location = locator.locate(options);

        let (file, file_error) = match &location.file {
            Some(path) => match load_from_file(path) {
                Ok(values) => (values, None),
                Err(e) if e.is_file_not_found() => {
                    debug!("{}", e);
                    (ConfigValues::default(), None)
                }
                Err(e) => {
                    warn!("{}", e);
                    (ConfigValues::default(), Some(e))
                }
            },
            None => (ConfigValues::default(), None),
        };

        Self {
            location,
            overrides: ConfigValues::default(),
            flags,
            env: load_from_env(env),
            file,
            file_error,
            user_config_dir: locator.user_config_dir(),
        }
    }

    /// Build a store from explicit layers without touching the filesystem
    pub fn from_layers(
        location: ConfigLocation,
        flags: ConfigValues,
        env: ConfigValues,
        file: ConfigValues,
    ) -> Self {
        Self {
            location,
            overrides: ConfigValues::default(),
            flags,
            env,
            file,
            file_error: None,
            user_config_dir: None,
        }
    }

    /// Set the directory `config init` writes profiles into
    pub fn with_user_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_config_dir = Some(dir.into());
        self
    }

    /// Where the configuration came from
    pub fn location(&self) -> &ConfigLocation {
        &self.location
    }

    /// Active profile name
    pub fn profile(&self) -> &str {
        &self.location.profile
    }

    /// Per-user configuration directory, if one could be determined
    pub fn user_config_dir(&self) -> Option<&Path> {
        self.user_config_dir.as_deref()
    }

    /// Values read from the configuration file
    pub fn file_values(&self) -> &ConfigValues {
        &self.file
    }

    /// Error from reading the configuration file, if it exists but is unusable
    pub fn file_error(&self) -> Option<&XibugoError> {
        self.file_error.as_ref()
    }

    /// Resolver over every layer in this store
    pub fn resolver(&self) -> ConfigResolver<'_> {
        ConfigResolver::new()
            .with_layer(LayerKind::Override, &self.overrides)
            .with_layer(LayerKind::Flag, &self.flags)
            .with_layer(LayerKind::Environment, &self.env)
            .with_layer(LayerKind::File, &self.file)
    }

    /// Resolve the configuration, optionally requiring credentials
    pub fn resolve(&self, validate: bool) -> XibugoResult<Config> {
        self.resolver().resolve(validate)
    }

    /// Layer that currently supplies a property
    pub fn origin(&self, property: ConfigProperty) -> LayerKind {
        self.resolver().origin(property)
    }
}
