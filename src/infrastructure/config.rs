//! Configuration management

use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_DATA_FILE: &str = "journal.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CSV data file path, relative to the journal root
    pub data_file: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            data_file: DEFAULT_DATA_FILE.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodlog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(".moodlog");
        let config_path = moodlog_dir.join("config.toml");

        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
