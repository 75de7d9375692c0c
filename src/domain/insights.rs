//! Advisory messages derived from aggregate statistics

use super::stats::{counts_by_mood, recent_trend, Trend, TREND_WINDOW};
use super::{Entry, MoodCategory};

/// Minimum streak that earns the consistency insight
pub const STREAK_INSIGHT_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Info,
    Positive,
    Negative,
    Warning,
}

impl InsightKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InsightKind::Info => "info",
            InsightKind::Positive => "positive",
            InsightKind::Negative => "negative",
            InsightKind::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

impl Insight {
    fn new(kind: InsightKind, title: &str, description: String) -> Self {
        Insight {
            kind,
            title: title.to_string(),
            description,
        }
    }
}

/// Builds insights; thresholds are configurable
#[derive(Debug, Clone, Copy)]
pub struct InsightGenerator {
    pub trend_window: usize,
    pub streak_threshold: usize,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        InsightGenerator {
            trend_window: TREND_WINDOW,
            streak_threshold: STREAK_INSIGHT_THRESHOLD,
        }
    }
}

impl InsightGenerator {
    /// Produce insights in fixed order: dominant mood, trend, consistency.
    ///
    /// An empty journal yields a single onboarding insight.
    pub fn generate(&self, entries: &[Entry], streak: usize) -> Vec<Insight> {
        if entries.is_empty() {
            return vec![Insight::new(
                InsightKind::Info,
                "Start Your Journey",
                "Add your first mood entry to begin receiving personalized insights about your emotional patterns.".to_string(),
            )];
        }

        let mut insights = Vec::new();

        let counts = counts_by_mood(entries);
        if let Some(mood) = counts.leader() {
            let kind = match mood {
                MoodCategory::Happy => InsightKind::Positive,
                MoodCategory::Sad => InsightKind::Negative,
                _ => InsightKind::Warning,
            };
            let share = (counts.get(mood) as f64 / entries.len() as f64 * 100.0).round();
            insights.push(Insight::new(
                kind,
                "Dominant Emotion Pattern",
                format!(
                    "Your most frequent emotion is {}. This represents {}% of your recent entries.",
                    mood.noun(),
                    share as u32
                ),
            ));
        }

        match recent_trend(entries, self.trend_window) {
            Trend::Positive => insights.push(Insight::new(
                InsightKind::Positive,
                "Positive Trend Detected",
                "Your recent entries show more positive emotions. Keep up the good work and continue focusing on what makes you happy!".to_string(),
            )),
            Trend::Negative => insights.push(Insight::new(
                InsightKind::Negative,
                "Consider Self-Care",
                "You've had several difficult days recently. Remember to take care of yourself and reach out for support when needed.".to_string(),
            )),
            Trend::Neutral => {}
        }

        if streak >= self.streak_threshold {
            insights.push(Insight::new(
                InsightKind::Positive,
                "Great Consistency!",
                format!(
                    "You've been tracking your mood for {} consecutive days. Consistent tracking leads to better self-awareness.",
                    streak
                ),
            ));
        }

        insights
    }
}

/// Generate insights with the default thresholds
pub fn generate_insights(entries: &[Entry], streak: usize) -> Vec<Insight> {
    InsightGenerator::default().generate(entries, streak)
}
