//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid mood tag: '{0}'")]
    InvalidMood(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidMood(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::InvalidMood(tag) => {
                format!(
                    "Invalid mood tag: '{}'\n\n\
                    Valid moods: happy, sad, angry, anxious, neutral\n\
                    Omit --mood to let the classifier tag the entry from its text.\n\n\
                    Examples:\n\
                    moodlog add \"Great day at the lake\" --mood happy\n\
                    moodlog add \"Great day at the lake\"",
                    tag
                )
            }
            MoodlogError::Config(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
