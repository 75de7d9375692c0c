//! Error types for moodjour

use thiserror::Error;

/// Main error type for moodjour
#[derive(Debug, Error)]
pub enum MoodjourError {
    #[error("Entry text is empty")]
    EmptyInput,

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("No entry id available after {0}")]
    IdsExhausted(u64),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MoodjourError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodjourError::EmptyInput => 2,
            MoodjourError::InvalidMood(_) => 3,
            MoodjourError::Export(_)
            | MoodjourError::TomlDeserialize(_)
            | MoodjourError::Json(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodjourError::EmptyInput => "Entry text is empty\n\n\
                Suggestions:\n\
                • Type something with 'write <text>' before 'add'\n\
                • Or add in one step: add Had a great day"
                .to_string(),
            MoodjourError::InvalidMood(name) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods: happy, sad, stressed, neutral\n\
                    Example: mood happy",
                    name
                )
            }
            MoodjourError::InvalidCommand(line) => {
                format!(
                    "Invalid command: '{}'\n\n\
                    Type 'help' to see available commands",
                    line
                )
            }
            MoodjourError::Export(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that the file was produced by 'export'\n\
                    • Supported formats: toml, json",
                    msg
                )
            }
            MoodjourError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: moodjour config trend_window 7",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodjourError
pub type Result<T> = std::result::Result<T, MoodjourError>;
