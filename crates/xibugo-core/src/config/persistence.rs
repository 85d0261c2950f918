//! Configuration persistence
//!
//! Writes a configuration document in the format its extension implies.
//! The document is serialized in full before anything touches the disk and
//! then written in one call.

use super::format::FileFormat;
use super::layer::ConfigValues;
use crate::error::{XibugoError, XibugoResult};
use std::fs;
use std::path::Path;
use tracing::info;

/// Write a configuration document to `path`
///
/// Missing parent directories are created. An existing file is replaced.
pub fn write_config_file(path: &Path, values: &ConfigValues) -> XibugoResult<()> {
    write_config_file_as(path, FileFormat::from_path(path), values)
}

/// Write a configuration document using an explicit format
pub fn write_config_file_as(
    path: &Path,
    format: FileFormat,
    values: &ConfigValues,
) -> XibugoResult<()> {
    let content = format.serialize(values)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            XibugoError::io_with_path(
                format!("Failed to create config directory: {}", e),
                parent,
            )
        })?;
    }

    fs::write(path, content).map_err(|e| {
        XibugoError::io_with_path(format!("Failed to write config file: {}", e), path)
    })?;

    info!("Saved {} configuration to {}", format, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file_loader::load_from_file;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("xibugo").join("default.yaml");
        let values = ConfigValues {
            account: Some("1".to_string()),
            ..Default::default()
        };

        write_config_file(&path, &values).unwrap();
        assert_eq!(load_from_file(&path).unwrap(), values);
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("default.json");
        fs::write(&path, "{\"account\": \"old\", \"sandbox\": true}").unwrap();

        let values = ConfigValues {
            account: Some("new".to_string()),
            ..Default::default()
        };
        write_config_file(&path, &values).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("new"));
        assert!(!content.contains("sandbox"));
    }

    #[test]
    fn test_write_into_unwritable_location_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_config_file(&blocker.join("default.yaml"), &ConfigValues::default())
            .unwrap_err();
        assert!(matches!(err, XibugoError::Io { path: Some(_), .. }));
    }
}
