pub mod models;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, DataFileConfigItem, FileLoggingConfigItem, PercentConfigItem,
};
use crate::core::attendance::Thresholds;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    EligibilityThreshold,
    WarningThreshold,
    DataFile,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "PercentConfigItem::eligibility")]
    pub eligibility_threshold: PercentConfigItem,
    #[serde(default = "PercentConfigItem::warning")]
    pub warning_threshold: PercentConfigItem,
    #[serde(default)]
    pub data_file: DataFileConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            eligibility_threshold: PercentConfigItem::eligibility(),
            warning_threshold: PercentConfigItem::warning(),
            data_file: DataFileConfigItem::default(),
            file_logging_enabled: FileLoggingConfigItem::default(),
        }
    }
}

impl ConfigFile {
    fn thresholds(&self) -> Result<Thresholds> {
        Thresholds::try_new(
            *self.eligibility_threshold.get_value(),
            *self.warning_threshold.get_value(),
        )
    }

    fn set_item(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        match key {
            ConfigKey::EligibilityThreshold => self.eligibility_threshold.set_value(new_value),
            ConfigKey::WarningThreshold => self.warning_threshold.set_value(new_value),
            ConfigKey::DataFile => self.data_file.set_value(new_value),
            ConfigKey::FileLoggingEnabled => self.file_logging_enabled.set_value(new_value),
        }
    }

    fn item(&self, key: ConfigKey) -> (&str, String) {
        match key {
            ConfigKey::EligibilityThreshold => (
                self.eligibility_threshold.description(),
                self.eligibility_threshold.get_value().to_string(),
            ),
            ConfigKey::WarningThreshold => (
                self.warning_threshold.description(),
                self.warning_threshold.get_value().to_string(),
            ),
            ConfigKey::DataFile => (
                self.data_file.description(),
                self.data_file.get_value().display().to_string(),
            ),
            ConfigKey::FileLoggingEnabled => (
                self.file_logging_enabled.description(),
                self.file_logging_enabled.get_value().to_string(),
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    thresholds: Thresholds,
    pub last_change: Option<(String, String, String)>,
}

impl Config {
    /// Load `path`, falling back to defaults when the file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self::with_defaults(path));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        let thresholds = data.thresholds()?;
        Ok(Self {
            path,
            data,
            thresholds,
            last_change: None,
        })
    }

    pub fn with_defaults(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: ConfigFile::default(),
            thresholds: Thresholds::default(),
            last_change: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn data_file(&self) -> &Path {
        self.data.data_file.get_value()
    }

    pub fn file_logging_enabled(&self) -> bool {
        *self.data.file_logging_enabled.get_value()
    }

    /// `(KEY, description, value)` per config key, in declaration order.
    pub fn rows(&self) -> Vec<(String, String, String)> {
        ConfigKey::iter()
            .map(|key| {
                let (desc, value) = self.data.item(key);
                (key.to_string(), desc.to_string(), value)
            })
            .collect()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = parse_key(key_str)?;
        let old = self.data.item(key).1;
        self.edit(|cfg| cfg.set_item(key, new_value))?;
        let new = self.data.item(key).1;
        self.last_change = Some((key.to_string(), old, new));
        Ok(())
    }

    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    /// Apply `f` to a copy, validate it, then commit and write to disk.
    /// A failed edit leaves the loaded config untouched.
    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        let mut draft = self.data.clone();
        f(&mut draft)?;
        let thresholds = draft.thresholds()?;
        self.data = draft;
        self.thresholds = thresholds;
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}

fn parse_key(key_str: &str) -> Result<ConfigKey> {
    ConfigKey::from_str(key_str.trim()).map_err(|_| {
        Error::config(format!(
            "Unknown configuration key '{}'. Valid keys: {}",
            key_str.trim(),
            valid_keys()
        ))
    })
}

fn valid_keys() -> String {
    ConfigKey::iter()
        .map(|k| k.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}
