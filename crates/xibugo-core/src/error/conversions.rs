//! From trait implementations for XibugoError conversions

use super::types::XibugoError;

impl From<std::io::Error> for XibugoError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for XibugoError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization("json", error.to_string())
    }
}

impl From<serde_yaml::Error> for XibugoError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization("yaml", error.to_string())
    }
}

impl From<toml::de::Error> for XibugoError {
    fn from(error: toml::de::Error) -> Self {
        Self::serialization("toml", error.to_string())
    }
}

impl From<toml::ser::Error> for XibugoError {
    fn from(error: toml::ser::Error) -> Self {
        Self::serialization("toml", error.to_string())
    }
}
