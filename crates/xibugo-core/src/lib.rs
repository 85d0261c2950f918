//! Core library for the Xibugo CLI
//!
//! Configuration resolution across flags, environment and profile files,
//! property get/set with persistence, and the interactive setup wizard.

pub mod config;
pub mod error;

pub use config::{Config, ConfigProperty, ConfigStore};
pub use error::{XibugoError, XibugoResult};
