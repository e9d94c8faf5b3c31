//! Settings file loading and initialization

use std::path::{Path, PathBuf};

use ptracker_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "promise-tracker";
const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable overriding `[api] base_url`
pub const API_URL_ENV_VAR: &str = "PTRACKER_API_URL";

const DEFAULT_CONFIG: &str = r#"# Promise Tracker Configuration

[api]
base_url = "http://localhost:8000"   # Tracker backend
api_prefix = "/api/v1"
timeout_secs = 10
fetch_limit = 100                    # Promises requested per page

[ui]
page_size = 10                       # Rows per page in the promise table
top_promises = 4                     # Promises shown on the scorecard
date_format = "%B %-d, %Y"

[behavior]
journalist = false                   # Start with edit controls enabled
# default_candidate = 1              # Candidate shown on the home screen
"#;

/// `<config_dir>/promise-tracker/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
/// [`API_URL_ENV_VAR`] is applied on top either way.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let mut settings = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(config_path) => read_settings(&config_path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    };
    apply_env_overrides(&mut settings);
    settings
}

fn read_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(url) = std::env::var(API_URL_ENV_VAR) {
        let url = url.trim();
        if !url.is_empty() {
            debug!("Using API base URL from {}", API_URL_ENV_VAR);
            settings.api.base_url = url.to_string();
        }
    }
}

/// Write the commented default config to `path` (or the default location).
///
/// Never overwrites an existing file. Returns the path that now holds the
/// config.
pub fn init_config(path: Option<&Path>) -> Result<PathBuf> {
    let config_path = path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .ok_or_else(|| Error::config("No config directory available on this platform"))?;

    if config_path.exists() {
        info!("Config already exists at {:?}, leaving it untouched", config_path);
        return Ok(config_path);
    }

    let dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let temp_path = dir.join(".config.toml.tmp");

    // Atomic write: write to temp, then rename
    std::fs::write(&temp_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(config_path)
}
