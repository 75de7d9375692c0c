//! Timeline period filtering

use super::Entry;
use chrono::{DateTime, Duration, Local};
use std::str::FromStr;

/// Which slice of the timeline to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineFilter {
    #[default]
    All,
    /// Entries on the current calendar day
    Today,
    /// The last 7 calendar days, today included
    Week,
    /// The last 30 calendar days, today included
    Month,
}

impl TimelineFilter {
    /// Number of calendar days covered, `None` for unbounded
    fn span_days(self) -> Option<i64> {
        match self {
            TimelineFilter::All => None,
            TimelineFilter::Today => Some(1),
            TimelineFilter::Week => Some(7),
            TimelineFilter::Month => Some(30),
        }
    }

    pub fn matches(self, entry: &Entry, now: DateTime<Local>) -> bool {
        let Some(span) = self.span_days() else {
            return true;
        };
        let today = now.date_naive();
        let earliest = today - Duration::days(span - 1);
        let day = entry.created_at.date_naive();
        day >= earliest && day <= today
    }

    /// Keep matching entries, preserving order
    pub fn apply(self, entries: &[Entry], now: DateTime<Local>) -> Vec<Entry> {
        entries
            .iter()
            .filter(|e| self.matches(e, now))
            .cloned()
            .collect()
    }
}

impl FromStr for TimelineFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TimelineFilter::All),
            "today" => Ok(TimelineFilter::Today),
            "week" => Ok(TimelineFilter::Week),
            "month" => Ok(TimelineFilter::Month),
            _ => Err(format!(
                "Invalid period: '{}'. Valid periods are: all, today, week, month",
                s
            )),
        }
    }
}
