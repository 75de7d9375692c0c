//! Statistics derived from a snapshot of entries
//!
//! Every function here is pure: it reads a slice of entries (most recent
//! first, as the store hands them out) and never fails.

use super::{Entry, MoodCategory, MoodCounts};
use chrono::{DateTime, Duration, Local};

/// Default number of recent entries considered by [`recent_trend`]
pub const TREND_WINDOW: usize = 5;

/// A negative trend needs more sad entries than this in the window
const NEGATIVE_TREND_MIN_SAD: usize = 2;

/// Direction of the most recent entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

/// Aggregate figures shown alongside the timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodStats {
    pub counts_by_mood: MoodCounts,
    pub total_count: usize,
    pub current_streak: usize,
    pub dominant_mood: Option<MoodCategory>,
}

/// One segment of the mood distribution chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSlice {
    pub mood: MoodCategory,
    pub count: usize,
}

impl ChartSlice {
    pub fn label(&self) -> &'static str {
        self.mood.label()
    }

    pub fn color(&self) -> &'static str {
        self.mood.color()
    }
}

pub fn counts_by_mood(entries: &[Entry]) -> MoodCounts {
    entries.iter().map(|e| e.mood).collect()
}

pub fn total_count(entries: &[Entry]) -> usize {
    entries.len()
}

/// Consecutive calendar days with an entry, walking back from `now`'s day.
///
/// Entries are sorted newest first and the i-th entry must fall exactly on
/// today minus i days; the first mismatch ends the streak. Two entries on
/// the same day therefore end the streak at the second one.
pub fn current_streak(entries: &[Entry], now: DateTime<Local>) -> usize {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let today = now.date_naive();
    let mut streak = 0;
    for (i, entry) in sorted.iter().enumerate() {
        let expected = today - Duration::days(i as i64);
        if entry.created_at.date_naive() != expected {
            break;
        }
        streak += 1;
    }
    streak
}

/// Most frequent mood, ties broken by priority order
pub fn dominant_mood(entries: &[Entry]) -> Option<MoodCategory> {
    counts_by_mood(entries).leader()
}

/// Compare happy and sad counts among the `window` most recent entries
pub fn recent_trend(entries: &[Entry], window: usize) -> Trend {
    let recent = &entries[..entries.len().min(window)];
    let counts = counts_by_mood(recent);
    let happy = counts.get(MoodCategory::Happy);
    let sad = counts.get(MoodCategory::Sad);

    if happy > sad {
        Trend::Positive
    } else if sad > happy && sad > NEGATIVE_TREND_MIN_SAD {
        Trend::Negative
    } else {
        Trend::Neutral
    }
}

pub fn aggregate(entries: &[Entry], now: DateTime<Local>) -> MoodStats {
    let counts_by_mood = counts_by_mood(entries);
    MoodStats {
        counts_by_mood,
        total_count: total_count(entries),
        current_streak: current_streak(entries, now),
        dominant_mood: counts_by_mood.leader(),
    }
}

/// Chart segments in fixed mood order
pub fn chart_slices(counts: &MoodCounts) -> Vec<ChartSlice> {
    counts
        .iter()
        .map(|(mood, count)| ChartSlice { mood, count })
        .collect()
}
