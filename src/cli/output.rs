//! Output formatting utilities

use crate::domain::stats::chart_slices;
use crate::domain::{Entry, Insight, MoodCategory, MoodCounts, MoodStats};

/// Width of a full chart bar in characters
const CHART_WIDTH: usize = 30;

/// Format the classifier's suggestion for display
pub fn format_suggestion(suggestion: Option<MoodCategory>) -> String {
    match suggestion {
        Some(mood) => format!("{} {}", mood.label(), mood.emoji()),
        None => "No suggestion".to_string(),
    }
}

/// Format entries as a timeline, most recent first
pub fn format_timeline(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries yet. Start tracking your mood above!".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{} {}  [{}]  {}\n",
            entry.mood.emoji(),
            entry.created_at.format("%d-%m-%Y %H:%M"),
            entry.id,
            entry.text
        ));
    }
    output
}

pub fn format_stats(stats: &MoodStats) -> String {
    let mut output = format!(
        "Total entries: {}\nCurrent streak: {} day{}\n",
        stats.total_count,
        stats.current_streak,
        if stats.current_streak == 1 { "" } else { "s" }
    );
    for (mood, count) in stats.counts_by_mood.iter() {
        output.push_str(&format!("{} {:<9}{}\n", mood.emoji(), mood.label(), count));
    }
    if let Some(mood) = stats.dominant_mood {
        output.push_str(&format!("Dominant mood: {}\n", mood.label()));
    }
    output
}

/// Horizontal bar chart of the mood distribution
pub fn format_chart(counts: &MoodCounts) -> String {
    let total = counts.total();
    let mut output = String::new();
    for slice in chart_slices(counts) {
        let width = if total == 0 {
            0
        } else {
            (slice.count * CHART_WIDTH + total / 2) / total
        };
        output.push_str(&format!(
            "{:<9}{} {}  {}\n",
            slice.label(),
            "█".repeat(width),
            slice.count,
            slice.color()
        ));
    }
    output
}

pub fn format_insights(insights: &[Insight]) -> String {
    let mut output = String::new();
    for insight in insights {
        output.push_str(&format!(
            "[{}] {}\n    {}\n",
            insight.kind.as_str(),
            insight.title,
            insight.description
        ));
    }
    output
}
