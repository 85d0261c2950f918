//! File-based configuration loading

use super::format::FileFormat;
use super::layer::ConfigValues;
use crate::error::{XibugoError, XibugoResult};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load the file layer from a configuration file
///
/// The format follows the file extension. A missing file yields
/// [`XibugoError::FileNotFound`] so callers can tell "nothing there" apart
/// from "something there but broken".
pub fn load_from_file(path: &Path) -> XibugoResult<ConfigValues> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => XibugoError::file_not_found(path),
        _ => XibugoError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        ),
    })?;

    let format = FileFormat::from_path(path);
    format.deserialize(&content).map_err(|e| {
        XibugoError::config_with_context(
            format!("Failed to parse {} config: {}", format, e),
            format!("Deserializing configuration from '{}'", path.display()),
        )
    })
}
