use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::debug;

use crate::CliResult;

pub const DEFAULT_CONFIG_DIR: &str = ".vellum";

pub const DEFAULT_CONFIG_NAME: &str = "vellum.toml";

pub const VELLUM_ENV_SETTINGS_PATH: &str = "VELLUM_CONFIG_PATH";

/// Persisted defaults the CLI falls back to when a flag is not supplied.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Settings {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub organization: Option<u64>,
}

/// Resolves the settings file location. The `VELLUM_CONFIG_PATH` environment
/// variable takes precedence over the platform config directory.
pub fn settings_path() -> PathBuf {
    if let Ok(path) = env::var(VELLUM_ENV_SETTINGS_PATH) {
        return PathBuf::from(path);
    }

    get_global_settings_dir().join(DEFAULT_CONFIG_NAME)
}

fn get_global_settings_dir() -> PathBuf {
    ProjectDirs::from("io", "vellum", "vellum")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR))
}

/// A missing file yields default settings; anything else propagates.
pub fn load(path: &Path) -> CliResult<Settings> {
    debug!("loading settings from {}", path.display());
    match fs::read_to_string(path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => Err(e.into()),
    }
}

pub fn save(settings: &Settings, path: &Path) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string(settings)?)?;
    Ok(())
}
