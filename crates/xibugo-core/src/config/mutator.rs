//! Property reads and writes for `config show` / `config set`

use super::persistence::write_config_file;
use super::property::ConfigProperty;
use super::store::ConfigStore;
use crate::error::{XibugoError, XibugoResult};
use tracing::debug;

impl ConfigStore {
    /// Current value of a property as a string
    ///
    /// Reads the merged layers before the sandbox endpoint override is
    /// applied. Unset strings read as `""` and an unset sandbox as `"false"`.
    pub fn get(&self, property: ConfigProperty) -> String {
        match self.resolver().merged().get(property) {
            Some(value) => value,
            None if property == ConfigProperty::Sandbox => false.to_string(),
            None => String::new(),
        }
    }

    /// Parse and store a property, then persist the configuration file
    ///
    /// Nothing changes when the value does not parse. Only values that came
    /// from the file, plus the new one, are written back, so a file that
    /// exists but could not be read is left untouched.
    pub fn set(&mut self, property: ConfigProperty, raw: &str) -> XibugoResult<()> {
        let update = property.parse(raw)?;

        let path = self
            .location
            .file
            .clone()
            .ok_or_else(|| XibugoError::io("no configuration file in use"))?;

        if let Some(e) = &self.file_error {
            return Err(XibugoError::config_with_context(
                format!("refusing to overwrite unreadable file {}", path.display()),
                e.to_string(),
            ));
        }

        self.overrides.apply(update.clone());
        self.file.apply(update);
        debug!("Set {} for profile '{}'", property, self.location.profile);

        write_config_file(&path, &self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file_loader::load_from_file;
    use crate::config::layer::{ConfigValues, LayerKind};
    use crate::config::env::EnvVars;
    use crate::config::locator::{ConfigLocation, LocationOrigin, LocatorOptions};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn location(file: Option<PathBuf>) -> ConfigLocation {
        ConfigLocation {
            profile: "default".to_string(),
            origin: if file.is_some() {
                LocationOrigin::Flag
            } else {
                LocationOrigin::Missing
            },
            file,
            search_dirs: Vec::new(),
        }
    }

    fn store_with_file(path: PathBuf, file: ConfigValues) -> ConfigStore {
        ConfigStore::from_layers(
            location(Some(path)),
            ConfigValues::default(),
            ConfigValues::default(),
            file,
        )
    }

    #[test]
    fn test_get_defaults() {
        let store = ConfigStore::from_layers(
            location(None),
            ConfigValues::default(),
            ConfigValues::default(),
            ConfigValues::default(),
        );
        assert_eq!(store.get(ConfigProperty::Account), "");
        assert_eq!(store.get(ConfigProperty::BaseUrl), "");
        assert_eq!(store.get(ConfigProperty::Sandbox), "false");
    }

    #[test]
    fn test_get_ignores_sandbox_override() {
        let file = ConfigValues {
            base_url: Some("http://file".to_string()),
            sandbox: Some(true),
            ..Default::default()
        };
        let store = ConfigStore::from_layers(
            location(None),
            ConfigValues::default(),
            ConfigValues::default(),
            file,
        );
        assert_eq!(store.get(ConfigProperty::BaseUrl), "http://file");
        assert_eq!(store.get(ConfigProperty::Sandbox), "true");
    }

    #[test]
    fn test_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("default.yaml");
        let mut store = store_with_file(path.clone(), ConfigValues::default());

        store.set(ConfigProperty::Sandbox, "true").unwrap();
        assert_eq!(store.get(ConfigProperty::Sandbox), "true");
        assert_eq!(store.origin(ConfigProperty::Sandbox), LayerKind::Override);
        assert_eq!(load_from_file(&path).unwrap().sandbox, Some(true));
    }

    #[test]
    fn test_set_beats_flag_for_rest_of_run() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("default.yaml");
        let flags = ConfigValues {
            base_url: Some("http://flag".to_string()),
            ..Default::default()
        };
        let mut store = ConfigStore::from_layers(
            location(Some(path)),
            flags,
            ConfigValues::default(),
            ConfigValues::default(),
        );

        store.set(ConfigProperty::BaseUrl, "http://set").unwrap();
        assert_eq!(store.get(ConfigProperty::BaseUrl), "http://set");
    }

    #[test]
    fn test_set_invalid_value_changes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("default.yaml");
        fs::write(&path, "account: \"7\"\n").unwrap();
        let mut store = store_with_file(path.clone(), load_from_file(&path).unwrap());

        let err = store.set(ConfigProperty::Sandbox, "maybe").unwrap_err();
        assert!(err.to_string().contains("not a boolean"));

        let err = store.set(ConfigProperty::Account, "abc").unwrap_err();
        assert!(matches!(err, XibugoError::Validation { .. }));
        assert!(err.to_string().contains("not a 64-bit integer"));

        assert_eq!(store.get(ConfigProperty::Account), "7");
        assert_eq!(store.get(ConfigProperty::Sandbox), "false");
        assert_eq!(fs::read_to_string(&path).unwrap(), "account: \"7\"\n");
    }

    #[test]
    fn test_set_keeps_unreadable_file_intact() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("default.yaml");
        let original = "account: \"1010\"\naccess-token: secret-token\nbase-url: [oops\n";
        fs::write(&path, original).unwrap();

        let env = EnvVars::default();
        let options = LocatorOptions {
            config_file: Some(path.clone()),
            profile: None,
        };
        let mut store = ConfigStore::load(ConfigValues::default(), &options, &env);
        assert!(store.file_error().is_some());

        let err = store.set(ConfigProperty::Sandbox, "true").unwrap_err();
        assert!(matches!(err, XibugoError::Config { .. }));
        assert!(err.to_string().contains("refusing to overwrite"));
        assert_eq!(store.get(ConfigProperty::Sandbox), "false");
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_set_account_is_canonical() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("default.json");
        let mut store = store_with_file(path.clone(), ConfigValues::default());

        store.set(ConfigProperty::Account, "0042").unwrap();
        assert_eq!(store.get(ConfigProperty::Account), "42");
        assert_eq!(
            load_from_file(&path).unwrap().account.as_deref(),
            Some("42")
        );
    }

    #[test]
    fn test_set_persists_only_file_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("default.yaml");
        let env = ConfigValues {
            access_token: Some("env-secret".to_string()),
            ..Default::default()
        };
        let file = ConfigValues {
            account: Some("1".to_string()),
            ..Default::default()
        };
        let mut store = ConfigStore::from_layers(
            location(Some(path.clone())),
            ConfigValues::default(),
            env,
            file,
        );

        store.set(ConfigProperty::BaseUrl, "http://localhost").unwrap();

        let written = load_from_file(&path).unwrap();
        assert_eq!(written.account.as_deref(), Some("1"));
        assert_eq!(written.base_url.as_deref(), Some("http://localhost"));
        assert_eq!(written.access_token, None);
    }

    #[test]
    fn test_set_without_file_fails() {
        let mut store = ConfigStore::from_layers(
            location(None),
            ConfigValues::default(),
            ConfigValues::default(),
            ConfigValues::default(),
        );

        let err = store.set(ConfigProperty::BaseUrl, "http://x").unwrap_err();
        assert_eq!(err, XibugoError::io("no configuration file in use"));
        assert_eq!(err.error_code(), "XIBUGO_IO");
        assert_eq!(store.get(ConfigProperty::BaseUrl), "");
    }
}
