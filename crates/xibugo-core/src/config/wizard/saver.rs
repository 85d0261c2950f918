//! Profile saving for the setup wizard

use super::manager::WizardOutcome;
use crate::config::format::FileFormat;
use crate::config::persistence::write_config_file_as;
use crate::error::XibugoResult;
use std::path::{Path, PathBuf};
use tracing::info;

/// File a profile is saved to: `<dir>/<profile>.<ext>`
pub fn profile_path(dir: &Path, profile: &str, format: FileFormat) -> PathBuf {
    dir.join(format!("{}.{}", profile, format.extension()))
}

/// Write the wizard's answers as a profile file, replacing any existing one
///
/// Returns the path written.
pub fn save_profile(dir: &Path, profile: &str, outcome: &WizardOutcome) -> XibugoResult<PathBuf> {
    let path = profile_path(dir, profile, outcome.format);
    write_config_file_as(&path, outcome.format, &outcome.values)?;
    info!("Saved profile '{}' to {}", profile, path.display());
    Ok(path)
}
