//! Application layer - Use cases and orchestration

pub mod journal;
pub mod manage_config;
pub mod report;

pub use journal::{JournalView, MoodJournal};
pub use manage_config::ConfigService;
pub use report::ReportService;
