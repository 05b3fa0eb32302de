use crate::core::attendance::{DEFAULT_ELIGIBILITY_PERCENT, DEFAULT_WARNING_PERCENT};
use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "attendance.txt";

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentConfigItem {
    pub value: f64,
    pub description: String,
}

impl PercentConfigItem {
    pub fn eligibility() -> Self {
        Self {
            value: DEFAULT_ELIGIBILITY_PERCENT,
            description: "Minimum attendance percentage for exam eligibility.".into(),
        }
    }

    pub fn warning() -> Self {
        Self {
            value: DEFAULT_WARNING_PERCENT,
            description: "Lowest percentage still reported as WARNING rather than CRITICAL."
                .into(),
        }
    }
}

impl ConfigItem<f64> for PercentConfigItem {
    fn get_value(&self) -> &f64 {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let raw = new_value.trim().trim_end_matches('%');
        let parsed = raw
            .parse::<f64>()
            .map_err(|_| Error::parse(format!("'{}' is not a percentage.", new_value.trim())))?;
        self.value = parsed;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFileConfigItem {
    pub value: PathBuf,
    pub description: String,
}

impl Default for DataFileConfigItem {
    fn default() -> Self {
        Self {
            value: PathBuf::from(DEFAULT_DATA_FILE),
            description: "File the course list is loaded from and saved to.".into(),
        }
    }
}

impl ConfigItem<PathBuf> for DataFileConfigItem {
    fn get_value(&self) -> &PathBuf {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let trimmed = new_value.trim();
        if trimmed.is_empty() {
            return Err(Error::parse("Data file path cannot be empty."));
        }
        self.value = PathBuf::from(trimmed);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: true,
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = match new_value.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => true,
            "false" | "no" | "off" | "0" => false,
            other => {
                return Err(Error::parse(format!(
                    "'{other}' is not a boolean. Use true or false."
                )));
            }
        };
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
