//! Durable storage for [`PersistentConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BootError, Result};

use super::PersistentConfig;

/// Environment variable overriding the settings file location.
pub const SETTINGS_ENV: &str = "FXBOOT_SETTINGS";

/// Reads and writes the settings file.
#[derive(Debug, Clone)]
pub struct PathStore {
    file: PathBuf,
}

impl PathStore {
    /// Store backed by an explicit file.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    /// Default settings file: `<config dir>/fxboot/boot.properties`.
    pub fn default_file() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fxboot")
            .join("boot.properties")
    }

    /// Store at the default location.
    pub fn at_default_location() -> Self {
        Self::new(Self::default_file())
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Load the settings. Missing, unreadable or corrupt files load as empty.
    pub fn load(&self) -> PersistentConfig {
        if !self.file.exists() {
            tracing::debug!("No settings at {}", self.file.display());
            return PersistentConfig::default();
        }

        match fs::read_to_string(&self.file) {
            Ok(content) => {
                let config = PersistentConfig::parse(&content);
                tracing::debug!(
                    "Loaded {} settings from {}",
                    config.len(),
                    self.file.display()
                );
                config
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable settings at {}: {}",
                    self.file.display(),
                    e
                );
                PersistentConfig::default()
            }
        }
    }

    /// Save the settings to disk using atomic write.
    ///
    /// Uses the write-to-temp-then-rename pattern so a crash mid-write never
    /// leaves a truncated settings file behind.
    pub fn save(&self, config: &PersistentConfig) -> Result<()> {
        self.write(config).map_err(|e| BootError::PersistFailed {
            path: self.file.clone(),
            message: e.to_string(),
        })
    }

    fn write(&self, config: &PersistentConfig) -> std::io::Result<()> {
        if let Some(dir) = self.file.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let temp_path = self.file.with_extension("properties.tmp");
        fs::write(&temp_path, config.render())?;
        fs::rename(&temp_path, &self.file)?;

        tracing::debug!("Saved settings to {}", self.file.display());
        Ok(())
    }
}
