use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "minutize.conf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_raw_file")]
    pub raw_file: String,
    #[serde(default = "default_clean_file")]
    pub clean_file: String,
    #[serde(default = "default_minutes_file")]
    pub minutes_file: String,
    /// Consume the first line of the raw log without parsing it.
    #[serde(default)]
    pub skip_raw_header: bool,
    /// Zero-pad month and day in the normalized log.
    #[serde(default)]
    pub pad_dates: bool,
}

fn default_raw_file() -> String {
    "data_raw.csv".to_string()
}
fn default_clean_file() -> String {
    "data_clean.csv".to_string()
}
fn default_minutes_file() -> String {
    "data_minutes.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            raw_file: default_raw_file(),
            clean_file: default_clean_file(),
            minutes_file: default_minutes_file(),
            skip_raw_header: false,
            pad_dates: false,
        }
    }
}

impl Config {
    /// Config file looked up in the working directory, next to the data files
    pub fn config_file() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// Load configuration from `path`. A missing file yields the defaults,
    /// an unreadable or invalid one is an error.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty file deserializes to a unit value, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration to `path`.
    /// An existing file is kept unless `force` is set.
    pub fn init_file(path: &Path, force: bool) -> AppResult<Self> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "'{}' already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let config = Self::default();
        let yaml = config.to_yaml()?;
        let mut file = fs::File::create(path).map_err(|e| AppError::resource(path, e))?;
        file.write_all(yaml.as_bytes())
            .map_err(AppError::ConfigSave)?;

        Ok(config)
    }

    pub fn raw_path(&self) -> PathBuf {
        expand_tilde(&self.raw_file)
    }

    pub fn clean_path(&self) -> PathBuf {
        expand_tilde(&self.clean_file)
    }

    pub fn minutes_path(&self) -> PathBuf {
        expand_tilde(&self.minutes_file)
    }
}
