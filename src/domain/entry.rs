//! Journal entries

use super::MoodCategory;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Session-unique entry identifier, derived from the creation time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EntryId)
    }
}

/// One immutable journal submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub text: String,
    pub mood: MoodCategory,
    pub created_at: DateTime<Local>,
}

impl Entry {
    pub fn new(id: EntryId, text: String, mood: MoodCategory, created_at: DateTime<Local>) -> Self {
        Entry {
            id,
            text,
            mood,
            created_at,
        }
    }
}
