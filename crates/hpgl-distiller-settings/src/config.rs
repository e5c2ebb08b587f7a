//! Persisted distiller settings
//!
//! Settings files hold the defaults for a particular cutter so they need
//! not be repeated on every command line. TOML and JSON are both accepted,
//! chosen by file extension.

use crate::error::{SettingsError, SettingsResult};
use hpgl_distiller_core::{DistillerConfig, DEFAULT_INIT_STRING};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the directory under the platform config dir.
pub const APP_DIR_NAME: &str = "hpgl-distiller";

/// Name of the settings file inside [`APP_DIR_NAME`].
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Settings as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sent before any distilled command.
    pub init_string: String,
    /// Pacing delay per unit of head travel, in milliseconds.
    pub slew_ms: u64,
    /// Normalize the plot to the origin.
    pub bounding_box: bool,
    /// Added to every X coordinate.
    pub x_offset: i64,
    /// Added to every Y coordinate.
    pub y_offset: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            init_string: DEFAULT_INIT_STRING.to_string(),
            slew_ms: 0,
            bounding_box: false,
            x_offset: 0,
            y_offset: 0,
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the settings file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Load settings from the default location.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load_default() -> SettingsResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from file (JSON or TOML).
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let settings: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML).
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate settings.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.init_string.contains(['\n', '\r']) {
            return Err(SettingsError::InvalidSetting {
                key: "init_string".to_string(),
                reason: "must be a single line".to_string(),
            });
        }

        if self.slew_ms.checked_mul(1000).is_none() {
            return Err(SettingsError::InvalidSetting {
                key: "slew_ms".to_string(),
                reason: format!("{} is too large", self.slew_ms),
            });
        }

        Ok(())
    }

    /// Build the immutable run configuration.
    pub fn to_distiller_config(&self) -> DistillerConfig {
        DistillerConfig::new()
            .with_init_string(self.init_string.clone())
            .with_slew_ms(self.slew_ms)
            .with_normalize(self.bounding_box)
            .with_offsets(self.x_offset, self.y_offset)
    }
}
