//! Journal session use case
//!
//! Owns the entry store, the draft being composed, and the configuration.
//! Every read goes through a snapshot so a renderer never sees a live view.

use crate::domain::{
    aggregate, Draft, Entry, EntryId, Insight, MoodCategory, MoodClassifier, MoodStats,
    TimelineFilter,
};
use crate::error::Result;
use crate::infrastructure::{export_entries, Config, EntryRepository, ExportFormat, InMemoryStore};
use chrono::{DateTime, Local};

/// Everything a renderer needs after a state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalView {
    pub entries: Vec<Entry>,
    pub stats: MoodStats,
    pub insights: Vec<Insight>,
}

/// Service tying the draft, store, aggregator and insight generator together
pub struct MoodJournal<R: EntryRepository = InMemoryStore> {
    store: R,
    draft: Draft,
    classifier: MoodClassifier<'static>,
    config: Config,
}

impl MoodJournal<InMemoryStore> {
    /// Empty in-memory journal
    pub fn in_memory(config: Config) -> Self {
        MoodJournal::new(InMemoryStore::new(), config)
    }
}

impl<R: EntryRepository> MoodJournal<R> {
    pub fn new(store: R, config: Config) -> Self {
        MoodJournal {
            store,
            draft: Draft::new(config.default_mood),
            classifier: config.classifier(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Replace the draft text; returns the classifier's suggestion
    pub fn write(&mut self, text: &str) -> Option<MoodCategory> {
        self.draft.update_text(text, &self.classifier)
    }

    /// Override the mood for the pending entry
    pub fn select_mood(&mut self, mood: MoodCategory) {
        self.draft.select(mood);
    }

    /// Store the draft as a new entry and reset it.
    ///
    /// A blank draft is rejected and left untouched.
    pub fn submit(&mut self, now: DateTime<Local>) -> Result<Entry> {
        let entry = self
            .store
            .add(self.draft.text(), self.draft.selected(), now)?;
        self.draft.reset();
        Ok(entry)
    }

    /// Delete an entry; unknown ids are ignored
    pub fn delete(&mut self, id: EntryId) -> bool {
        self.store.remove(id)
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.store.all()
    }

    pub fn timeline(&self, filter: TimelineFilter, now: DateTime<Local>) -> Vec<Entry> {
        filter.apply(&self.store.all(), now)
    }

    pub fn stats(&self, now: DateTime<Local>) -> MoodStats {
        aggregate(&self.store.all(), now)
    }

    pub fn insights(&self, now: DateTime<Local>) -> Vec<Insight> {
        self.view(now).insights
    }

    /// Recompute everything from one snapshot of the store
    pub fn view(&self, now: DateTime<Local>) -> JournalView {
        let entries = self.store.all();
        let stats = aggregate(&entries, now);
        let insights = self
            .config
            .insight_generator()
            .generate(&entries, stats.current_streak);
        JournalView {
            entries,
            stats,
            insights,
        }
    }

    pub fn export(&self, format: ExportFormat) -> Result<String> {
        export_entries(&self.store.all(), format)
    }
}
