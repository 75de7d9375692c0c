//! Configuration management

use crate::domain::classifier::MIN_TEXT_LENGTH;
use crate::domain::insights::STREAK_INSIGHT_THRESHOLD;
use crate::domain::stats::TREND_WINDOW;
use crate::domain::{InsightGenerator, Lexicon, MoodCategory, MoodClassifier};
use crate::error::{MoodjourError, Result};
use crate::infrastructure::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the config file looked up from the current directory upwards
pub const CONFIG_FILE_NAME: &str = ".moodjour.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "MOODJOUR_CONFIG";

/// Valid keys for `get`/`set`
pub const CONFIG_KEYS: &[&str] = &[
    "min_text_length",
    "trend_window",
    "streak_insight_threshold",
    "default_mood",
    "export_format",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub min_text_length: usize,
    pub trend_window: usize,
    pub streak_insight_threshold: usize,
    pub default_mood: MoodCategory,
    pub export_format: ExportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_text_length: MIN_TEXT_LENGTH,
            trend_window: TREND_WINDOW,
            streak_insight_threshold: STREAK_INSIGHT_THRESHOLD,
            default_mood: MoodCategory::default(),
            export_format: ExportFormat::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file; missing keys take their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodjourError::Config(format!("Config file not found: {}", path.display()))
            } else {
                MoodjourError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            MoodjourError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate().map_err(|e| match e {
            MoodjourError::Config(msg) => {
                MoodjourError::Config(format!("{} (in {})", msg, path.display()))
            }
            other => other,
        })?;
        Ok(config)
    }

    /// Check numeric keys against the same minimums `set` enforces
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("min_text_length", self.min_text_length),
            ("trend_window", self.trend_window),
            ("streak_insight_threshold", self.streak_insight_threshold),
        ] {
            let min = min_count(key);
            if value < min {
                return Err(invalid_count(key, &value.to_string(), min));
            }
        }
        Ok(())
    }

    /// Save config to a TOML file, creating parent directories if needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodjourError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, contents)?;
        Ok(())
    }

    pub fn classifier(&self) -> MoodClassifier<'static> {
        MoodClassifier::new(Lexicon::builtin(), self.min_text_length)
    }

    pub fn insight_generator(&self) -> InsightGenerator {
        InsightGenerator {
            trend_window: self.trend_window,
            streak_threshold: self.streak_insight_threshold,
        }
    }

    /// Read a single key as display text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "min_text_length" => Ok(self.min_text_length.to_string()),
            "trend_window" => Ok(self.trend_window.to_string()),
            "streak_insight_threshold" => Ok(self.streak_insight_threshold.to_string()),
            "default_mood" => Ok(self.default_mood.to_string()),
            "export_format" => Ok(self.export_format.extension().to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Parse and assign a single key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "min_text_length" => self.min_text_length = parse_count(key, value)?,
            "trend_window" => self.trend_window = parse_count(key, value)?,
            "streak_insight_threshold" => self.streak_insight_threshold = parse_count(key, value)?,
            "default_mood" => {
                self.default_mood = MoodCategory::from_str(value)
                    .map_err(MoodjourError::InvalidMood)?
            }
            "export_format" => {
                self.export_format = ExportFormat::from_str(value).map_err(MoodjourError::Config)?
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// `(key, value)` pairs in a stable order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn unknown_key(key: &str) -> MoodjourError {
    MoodjourError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

/// Smallest accepted value for a numeric key
fn min_count(key: &str) -> usize {
    match key {
        "trend_window" | "streak_insight_threshold" => 1,
        _ => 0,
    }
}

fn invalid_count(key: &str, value: &str, min: usize) -> MoodjourError {
    MoodjourError::Config(format!(
        "Invalid value for {}: '{}' (expected an integer >= {})",
        key, value, min
    ))
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    let min = min_count(key);
    match value.trim().parse::<usize>() {
        Ok(n) if n >= min => Ok(n),
        _ => Err(invalid_count(key, value, min)),
    }
}

/// A config together with the file it came from, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Resolve configuration: explicit path, then `MOODJOUR_CONFIG`, then
    /// `.moodjour.toml` walking up from the current directory, then defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match std::env::var(CONFIG_ENV_VAR) {
            Ok(env_path) if env_path.trim().is_empty() => {
                log::warn!("{} is set but empty, ignoring it", CONFIG_ENV_VAR);
            }
            Ok(env_path) => {
                log::debug!("using {} from {}", env_path, CONFIG_ENV_VAR);
                return Self::load(Path::new(&env_path));
            }
            Err(_) => {}
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` looking for `.moodjour.toml`
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = Some(start);
        while let Some(dir) = current {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Self::load(&candidate);
            }
            current = dir.parent();
        }

        log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
        Ok(ResolvedConfig {
            config: Config::default(),
            path: None,
        })
    }

    fn load(path: &Path) -> Result<Self> {
        let config = Config::load_from_file(path)?;
        log::debug!("loaded config from {}", path.display());
        Ok(ResolvedConfig {
            config,
            path: Some(path.to_path_buf()),
        })
    }
}
