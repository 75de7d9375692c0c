//! Domain layer - Mood classification, entries, and derived statistics

pub mod classifier;
pub mod draft;
pub mod entry;
pub mod insights;
pub mod lexicon;
pub mod mood;
pub mod stats;
pub mod timeline;

pub use classifier::{classify, MoodClassifier};
pub use draft::Draft;
pub use entry::{Entry, EntryId};
pub use insights::{generate_insights, Insight, InsightGenerator, InsightKind};
pub use lexicon::Lexicon;
pub use mood::{MoodCategory, MoodCounts};
pub use stats::{aggregate, MoodStats, Trend};
pub use timeline::TimelineFilter;
