//! Configuration file discovery
//!
//! Decides, before any value is read, which file backs the configuration:
//! 1. `--config-file` on the command line
//! 2. `XIBUGO_CONFIG_FILE` in the environment
//! 3. `<profile>.<ext>` searched in `$XDG_CONFIG_HOME/xibugo` (or the
//!    platform config directory) and then `/etc/xibugo`

use super::env::{ENV_CONFIG_FILE, ENV_PROFILE, ENV_XDG_CONFIG_HOME, EnvVars};
use super::format::FileFormat;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name used under every configuration root
pub const APP_DIR: &str = "xibugo";

/// System-wide fallback directory
pub const SYSTEM_CONFIG_DIR: &str = "/etc/xibugo";

/// Profile used when neither the flag nor the environment names one
pub const DEFAULT_PROFILE: &str = "default";

/// Command-line inputs to file discovery
#[derive(Debug, Clone, Default)]
pub struct LocatorOptions {
    /// Value of `-c/--config-file`
    pub config_file: Option<PathBuf>,
    /// Value of `--profile`
    pub profile: Option<String>,
}

/// How the configuration file was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationOrigin {
    /// `--config-file`
    Flag,
    /// `XIBUGO_CONFIG_FILE`
    Environment,
    /// Found by the profile search
    Discovered,
    /// Profile search found nothing
    Missing,
}

/// Result of file discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    /// Active profile name
    pub profile: String,
    /// File to read from and persist to, if any
    pub file: Option<PathBuf>,
    /// How `file` was chosen
    pub origin: LocationOrigin,
    /// Directories the profile search covers, in order
    pub search_dirs: Vec<PathBuf>,
}

/// Finds the configuration file for an invocation
#[derive(Debug, Clone)]
pub struct ConfigLocator<'a> {
    env: &'a EnvVars,
    system_dir: PathBuf,
}

impl<'a> ConfigLocator<'a> {
    /// Create a locator reading from an environment snapshot
    pub fn new(env: &'a EnvVars) -> Self {
        Self {
            env,
            system_dir: PathBuf::from(SYSTEM_CONFIG_DIR),
        }
    }

    /// Replace the system-wide fallback directory
    pub fn with_system_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.system_dir = dir.into();
        self
    }

    /// Per-user configuration directory (`<config-home>/xibugo`)
    pub fn user_config_dir(&self) -> Option<PathBuf> {
        let base = match self.env.get(ENV_XDG_CONFIG_HOME) {
            Some(xdg) => Some(PathBuf::from(xdg)),
            None => dirs::config_dir(),
        };
        base.map(|dir| dir.join(APP_DIR))
    }

    /// Directories searched for profile files, in order
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::with_capacity(2);
        if let Some(user_dir) = self.user_config_dir() {
            dirs.push(user_dir);
        } else {
            debug!("No user configuration directory available");
        }
        dirs.push(self.system_dir.clone());
        dirs
    }

    /// Profile name: flag, then `XIBUGO_PROFILE`, then `default`
    pub fn resolve_profile(&self, flag: Option<&str>) -> String {
        flag.filter(|profile| !profile.is_empty())
            .or_else(|| self.env.get(ENV_PROFILE))
            .unwrap_or(DEFAULT_PROFILE)
            .to_string()
    }

    /// Decide which file backs this invocation
    pub fn locate(&self, options: &LocatorOptions) -> ConfigLocation {
        let profile = self.resolve_profile(options.profile.as_deref());
        let search_dirs = self.search_dirs();

        let explicit = options
            .config_file
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .map(|path| (path, LocationOrigin::Flag))
            .or_else(|| {
                self.env
                    .get(ENV_CONFIG_FILE)
                    .map(|path| (PathBuf::from(path), LocationOrigin::Environment))
            });

        if let Some((path, origin)) = explicit {
            debug!("Using configuration file {} ({:?})", path.display(), origin);
            return ConfigLocation {
                profile,
                file: Some(path),
                origin,
                search_dirs,
            };
        }

        match find_profile_file(&search_dirs, &profile) {
            Some(path) => {
                debug!("Discovered configuration file {}", path.display());
                ConfigLocation {
                    profile,
                    file: Some(path),
                    origin: LocationOrigin::Discovered,
                    search_dirs,
                }
            }
            None => {
                debug!("No configuration file for profile '{}'", profile);
                ConfigLocation {
                    profile,
                    file: None,
                    origin: LocationOrigin::Missing,
                    search_dirs,
                }
            }
        }
    }
}

/// First existing `<profile>.<ext>` across the search directories
fn find_profile_file(search_dirs: &[PathBuf], profile: &str) -> Option<PathBuf> {
    search_dirs.iter().find_map(|dir| find_in_dir(dir, profile))
}

fn find_in_dir(dir: &Path, profile: &str) -> Option<PathBuf> {
    FileFormat::DISCOVERY_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", profile, ext)))
        .find(|candidate| candidate.is_file())
}
