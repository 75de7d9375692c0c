//! Infrastructure layer - Entry storage, export documents, and configuration

pub mod config;
pub mod export;
pub mod store;

pub use config::{Config, ResolvedConfig};
pub use export::{export_entries, parse_export, ExportFormat};
pub use store::{EntryRepository, InMemoryStore};
