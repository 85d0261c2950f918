//! Configuration file formats

use super::layer::ConfigValues;
use crate::error::XibugoResult;
use std::fmt;
use std::path::Path;

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl FileFormat {
    /// Formats offered by `config init`, in prompt order
    pub const ALL: [FileFormat; 3] = [FileFormat::Json, FileFormat::Yaml, FileFormat::Toml];

    /// Extensions probed during profile discovery, in order
    pub const DISCOVERY_EXTENSIONS: [&'static str; 4] = ["yaml", "yml", "json", "toml"];

    /// Canonical file extension
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Yaml => "yaml",
            FileFormat::Toml => "toml",
        }
    }

    /// Extensions for a select prompt
    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|f| f.extension().to_string()).collect()
    }

    /// Format implied by a file extension
    ///
    /// Discovery treats configuration files as YAML, so anything that is
    /// not clearly JSON or TOML is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => FileFormat::Json,
            Some("toml") => FileFormat::Toml,
            _ => FileFormat::Yaml,
        }
    }

    /// Encode a configuration document
    pub fn serialize(&self, values: &ConfigValues) -> XibugoResult<String> {
        let mut content = match self {
            FileFormat::Json => serde_json::to_string_pretty(values)?,
            FileFormat::Yaml => serde_yaml::to_string(values)?,
            FileFormat::Toml => toml::to_string(values)?,
        };
        if !content.ends_with('\n') {
            content.push('\n');
        }
        Ok(content)
    }

    /// Decode a configuration document
    pub fn deserialize(&self, content: &str) -> XibugoResult<ConfigValues> {
        if content.trim().is_empty() {
            return Ok(ConfigValues::default());
        }

        let values = match self {
            FileFormat::Json => serde_json::from_str(content)?,
            FileFormat::Yaml => serde_yaml::from_str(content)?,
            FileFormat::Toml => toml::from_str(content)?,
        };
        Ok(values)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
