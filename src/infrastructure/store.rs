//! In-memory entry store

use crate::domain::{Entry, EntryId, MoodCategory};
use crate::error::{MoodjourError, Result};
use chrono::{DateTime, Duration, Local};

/// Abstract store for journal entries
pub trait EntryRepository {
    /// Create an entry from trimmed `text` and put it first.
    ///
    /// Fails with `EmptyInput` when `text` is blank; nothing is stored then.
    fn add(&mut self, text: &str, mood: MoodCategory, now: DateTime<Local>) -> Result<Entry>;

    /// Delete the entry with `id`. Returns whether anything was removed.
    fn remove(&mut self, id: EntryId) -> bool;

    /// Snapshot of all entries, most recent first
    fn all(&self) -> Vec<Entry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Session-lifetime store; nothing outlives the process
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    /// Most recent first
    entries: Vec<Entry>,
    last_id: Option<u64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with already-ordered entries (most recent first)
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let last_id = entries.iter().map(|e| e.id.0).max();
        InMemoryStore { entries, last_id }
    }

    /// Two demonstration entries from the previous two days
    pub fn with_sample_entries(now: DateTime<Local>) -> Self {
        Self::from_entries(vec![
            Entry::new(
                EntryId(1),
                "Had a great day at work! Finished all my tasks and got positive feedback from my manager.".to_string(),
                MoodCategory::Happy,
                now - Duration::days(1),
            ),
            Entry::new(
                EntryId(2),
                "Feeling overwhelmed with all the deadlines coming up. Need to manage my time better.".to_string(),
                MoodCategory::Stressed,
                now - Duration::days(2),
            ),
        ])
    }

    /// Millisecond timestamp of `now`, bumped past any id already handed out
    fn next_id(&mut self, now: DateTime<Local>) -> Result<EntryId> {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = match self.last_id {
            Some(last) if last >= millis => last
                .checked_add(1)
                .ok_or(MoodjourError::IdsExhausted(last))?,
            _ => millis,
        };
        self.last_id = Some(id);
        Ok(EntryId(id))
    }
}

impl EntryRepository for InMemoryStore {
    fn add(&mut self, text: &str, mood: MoodCategory, now: DateTime<Local>) -> Result<Entry> {
        let text = text.trim();
        if text.is_empty() {
            log::debug!("rejected blank entry");
            return Err(MoodjourError::EmptyInput);
        }

        let entry = Entry::new(self.next_id(now)?, text.to_string(), mood, now);
        self.entries.insert(0, entry.clone());
        log::debug!("added entry {} ({})", entry.id, entry.mood);
        Ok(entry)
    }

    fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            log::debug!("removed entry {}", id);
        } else {
            log::trace!("remove ignored unknown entry {}", id);
        }
        removed
    }

    fn all(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
