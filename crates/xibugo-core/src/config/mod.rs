//! Configuration management
//!
//! Values come from four layers, highest priority first: values set with
//! `config set` during this run, command-line flags, `XIBUGO_*` environment
//! variables and the profile's configuration file. [`ConfigStore`] holds
//! the layers for one invocation and resolves them into a [`Config`].

pub mod env;
pub mod file_loader;
pub mod format;
pub mod layer;
pub mod locator;
pub mod model;
mod mutator;
pub mod persistence;
pub mod property;
pub mod resolver;
pub mod store;
pub mod wizard;

pub use env::{EnvVars, load_from_env};
pub use file_loader::load_from_file;
pub use format::FileFormat;
pub use layer::{ConfigValues, LayerKind};
pub use locator::{
    ConfigLocation, ConfigLocator, DEFAULT_PROFILE, LocationOrigin, LocatorOptions,
};
pub use model::{Config, PRODUCTION_URL, SANDBOX_URL};
pub use persistence::{write_config_file, write_config_file_as};
pub use property::{ConfigProperty, PropertyUpdate};
pub use resolver::ConfigResolver;
pub use store::ConfigStore;
