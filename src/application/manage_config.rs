//! Config management use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "data_file" => Ok(config.data_file.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: data_file, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "data_file" => {
                config.data_file = value.to_string();
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: data_file",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
