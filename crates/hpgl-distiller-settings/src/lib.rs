//! HPGL Distiller Settings
//!
//! Handles the optional settings file that supplies per-cutter defaults.

pub mod config;
pub mod error;

pub use config::{Settings, APP_DIR_NAME, SETTINGS_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
