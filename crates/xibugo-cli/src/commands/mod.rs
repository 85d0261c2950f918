//! CLI commands

pub mod config;
pub mod resource;
pub mod version;
pub mod whoami;
