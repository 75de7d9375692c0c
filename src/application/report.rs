//! Report use case: summarize a previously exported journal

use crate::application::journal::{JournalView, MoodJournal};
use crate::error::{MoodjourError, Result};
use crate::infrastructure::{parse_export, Config, ExportFormat, InMemoryStore};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// Service for loading an export document and computing its view
pub struct ReportService {
    config: Config,
}

impl ReportService {
    pub fn new(config: Config) -> Self {
        ReportService { config }
    }

    /// Pick the document format: explicit, then file extension, then config
    pub fn resolve_format(&self, path: &Path, format: Option<ExportFormat>) -> ExportFormat {
        format
            .or_else(|| ExportFormat::from_path(path))
            .unwrap_or(self.config.export_format)
    }

    pub fn execute(
        &self,
        path: &Path,
        format: Option<ExportFormat>,
        now: DateTime<Local>,
    ) -> Result<JournalView> {
        let document = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodjourError::Export(format!("Export file not found: {}", path.display()))
            } else {
                MoodjourError::Io(e)
            }
        })?;

        let format = self.resolve_format(path, format);
        let entries = parse_export(&document, format)?;
        let journal = MoodJournal::new(InMemoryStore::from_entries(entries), self.config.clone());
        Ok(journal.view(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MoodCategory;
    use crate::infrastructure::{export_entries, EntryRepository};
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 17, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_report_from_json_export() {
        let temp = TempDir::new().unwrap();
        let mut store = InMemoryStore::new();
        store
            .add("sad one", MoodCategory::Sad, now() - Duration::days(1))
            .unwrap();
        store.add("sad two", MoodCategory::Sad, now()).unwrap();
        let path = temp.path().join("mood-data.json");
        fs::write(&path, export_entries(&store.all(), ExportFormat::Json).unwrap()).unwrap();

        let view = ReportService::new(Config::default())
            .execute(&path, None, now())
            .unwrap();
        assert_eq!(view.entries, store.all());
        assert_eq!(view.stats.current_streak, 2);
        assert_eq!(view.stats.dominant_mood, Some(MoodCategory::Sad));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ReportService::new(Config::default())
            .execute(&temp.path().join("gone.toml"), None, now())
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_resolve_format() {
        let mut config = Config::default();
        config.export_format = ExportFormat::Json;
        let service = ReportService::new(config);
        assert_eq!(
            service.resolve_format(Path::new("a.toml"), None),
            ExportFormat::Toml
        );
        assert_eq!(
            service.resolve_format(Path::new("a.toml"), Some(ExportFormat::Json)),
            ExportFormat::Json
        );
        assert_eq!(
            service.resolve_format(Path::new("backup"), None),
            ExportFormat::Json
        );
    }
}
