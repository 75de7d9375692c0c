//! Export document writing and parsing
//!
//! An export is a complete, order-preserving dump of every entry field.
//! TOML writes one `[[entries]]` table per entry; JSON writes a bare array.

use crate::domain::Entry;
use crate::error::{MoodjourError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Toml,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Toml => "toml",
            ExportFormat::Json => "json",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ExportFormat::from_str(ext).ok())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "toml" => Ok(ExportFormat::Toml),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Invalid export format: '{}'. Valid formats are: toml, json",
                s
            )),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlDocument {
    #[serde(default)]
    entries: Vec<Entry>,
}

/// Serialize entries in the given order
pub fn export_entries(entries: &[Entry], format: ExportFormat) -> Result<String> {
    let document = match format {
        ExportFormat::Toml => toml::to_string_pretty(&TomlDocument {
            entries: entries.to_vec(),
        })?,
        ExportFormat::Json => serde_json::to_string_pretty(entries)?,
    };
    log::debug!(
        "exported {} entries as {} ({} bytes)",
        entries.len(),
        format.extension(),
        document.len()
    );
    Ok(document)
}

/// Parse an export document back into entries, in document order
pub fn parse_export(document: &str, format: ExportFormat) -> Result<Vec<Entry>> {
    let entries = match format {
        ExportFormat::Toml => {
            toml::from_str::<TomlDocument>(document)
                .map_err(|e| MoodjourError::Export(format!("Failed to parse TOML export: {}", e)))?
                .entries
        }
        ExportFormat::Json => serde_json::from_str::<Vec<Entry>>(document)
            .map_err(|e| MoodjourError::Export(format!("Failed to parse JSON export: {}", e)))?,
    };

    validate(&entries)?;
    log::debug!("parsed {} entries from {} export", entries.len(), format.extension());
    Ok(entries)
}

/// Largest id both formats can carry (TOML integers are signed 64-bit)
const MAX_ENTRY_ID: u64 = i64::MAX as u64;

fn validate(entries: &[Entry]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.id.0 > MAX_ENTRY_ID {
            return Err(MoodjourError::Export(format!(
                "Entry id {} is out of range (maximum {})",
                entry.id, MAX_ENTRY_ID
            )));
        }
        if !seen.insert(entry.id) {
            return Err(MoodjourError::Export(format!(
                "Duplicate entry id: {}",
                entry.id
            )));
        }
        if entry.text.trim().is_empty() {
            return Err(MoodjourError::Export(format!(
                "Entry {} has empty text",
                entry.id
            )));
        }
    }
    Ok(())
}
