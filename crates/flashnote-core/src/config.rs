use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use flashnote_bridge::FlashConfig;

/// Errors that can occur while loading or saving the flash configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to determine the user's configuration directory. This usually
    /// occurs when required environment variables are missing (e.g., `$HOME`
    /// on Unix or `%APPDATA%` on Windows).
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// An I/O error occurred while reading or writing the configuration file.
    #[error("failed to read config: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid TOML.
    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize the configuration to TOML (e.g., when writing the
    /// defaults or saving changes).
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Resolves `config.toml` inside the user's configuration directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    match ProjectDirs::from("dev", "flashnote", "flashnote") {
        Some(dirs) => Ok(dirs.config_dir().join("config.toml")),
        None => Err(ConfigError::DirectoriesNotFound),
    }
}

/// Loads the configuration from the user's configuration directory.
pub fn load_config() -> Result<FlashConfig, ConfigError> {
    load_config_from(&default_config_path()?)
}

/// Loads the configuration stored at `path`. When the file does not exist
/// yet, the defaults are written there and returned.
pub fn load_config_from(path: &Path) -> Result<FlashConfig, ConfigError> {
    log::info!("Loading configuration from {path:?}");
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        return Ok(toml::from_str(&contents)?);
    }

    let config = FlashConfig::default();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(&config)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;

    Ok(config)
}

/// Saves `config` to `path` as pretty-printed TOML, overwriting any existing
/// file.
pub fn save_config_to(config: &FlashConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let contents = toml::to_string_pretty(config)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;

    Ok(())
}
