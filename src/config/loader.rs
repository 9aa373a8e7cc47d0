//! Settings file discovery and loading.

use std::fs;
use std::path::Path;

use super::Settings;
use crate::error::{LiftlogError, Result};

/// Settings file name looked up in the data directory.
pub const SETTINGS_FILE: &str = "liftlog.yml";

/// Load settings for a data directory.
///
/// If `override_path` is given that file must exist. Otherwise
/// `<data_dir>/liftlog.yml` is used when present and defaults apply when not.
pub fn load_settings(data_dir: &Path, override_path: Option<&Path>) -> Result<Settings> {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => {
            let path = data_dir.join(SETTINGS_FILE);
            if !path.exists() {
                tracing::debug!("No {} in {}, using defaults", SETTINGS_FILE, data_dir.display());
                return Ok(Settings::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)?;
    parse_settings(&content, &path)
}

/// Parse YAML content into settings.
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| LiftlogError::CorruptData {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
