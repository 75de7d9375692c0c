//! Mood categories and their display attributes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of moods an entry can carry.
///
/// Declaration order is the tie-break priority used by the classifier
/// and by dominant-mood selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Happy,
    Sad,
    Stressed,
    #[default]
    Neutral,
}

impl MoodCategory {
    /// All categories in priority order
    pub const ALL: [MoodCategory; 4] = [
        MoodCategory::Happy,
        MoodCategory::Sad,
        MoodCategory::Stressed,
        MoodCategory::Neutral,
    ];

    /// Position in priority order (also the index into per-mood arrays)
    pub fn index(self) -> usize {
        match self {
            MoodCategory::Happy => 0,
            MoodCategory::Sad => 1,
            MoodCategory::Stressed => 2,
            MoodCategory::Neutral => 3,
        }
    }

    /// Lowercase identifier used in exports and commands
    pub fn as_str(self) -> &'static str {
        match self {
            MoodCategory::Happy => "happy",
            MoodCategory::Sad => "sad",
            MoodCategory::Stressed => "stressed",
            MoodCategory::Neutral => "neutral",
        }
    }

    /// Capitalized label for display
    pub fn label(self) -> &'static str {
        match self {
            MoodCategory::Happy => "Happy",
            MoodCategory::Sad => "Sad",
            MoodCategory::Stressed => "Stressed",
            MoodCategory::Neutral => "Neutral",
        }
    }

    /// Noun used in insight sentences ("Your most frequent emotion is ...")
    pub fn noun(self) -> &'static str {
        match self {
            MoodCategory::Happy => "happiness",
            MoodCategory::Sad => "sadness",
            MoodCategory::Stressed => "stress",
            MoodCategory::Neutral => "neutrality",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodCategory::Happy => "😊",
            MoodCategory::Sad => "😢",
            MoodCategory::Stressed => "😰",
            MoodCategory::Neutral => "😐",
        }
    }

    /// Chart colour as a hex string
    pub fn color(self) -> &'static str {
        match self {
            MoodCategory::Happy => "#4ade80",
            MoodCategory::Sad => "#f87171",
            MoodCategory::Stressed => "#fbbf24",
            MoodCategory::Neutral => "#94a3b8",
        }
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(MoodCategory::Happy),
            "sad" => Ok(MoodCategory::Sad),
            "stressed" => Ok(MoodCategory::Stressed),
            "neutral" => Ok(MoodCategory::Neutral),
            _ => Err(s.to_string()),
        }
    }
}

/// A per-mood tally indexed in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoodCounts([usize; 4]);

impl MoodCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, mood: MoodCategory) -> usize {
        self.0[mood.index()]
    }

    pub fn add(&mut self, mood: MoodCategory, n: usize) {
        self.0[mood.index()] += n;
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Iterate `(mood, count)` pairs in priority order
    pub fn iter(&self) -> impl Iterator<Item = (MoodCategory, usize)> + '_ {
        MoodCategory::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// The mood with the highest non-zero count.
    ///
    /// Ties go to the mood earliest in priority order; an all-zero tally has no leader.
    pub fn leader(&self) -> Option<MoodCategory> {
        let mut best: Option<(MoodCategory, usize)> = None;
        for (mood, count) in self.iter() {
            if count == 0 {
                continue;
            }
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((mood, count)),
            }
        }
        best.map(|(mood, _)| mood)
    }
}

impl FromIterator<MoodCategory> for MoodCounts {
    fn from_iter<I: IntoIterator<Item = MoodCategory>>(iter: I) -> Self {
        let mut counts = MoodCounts::new();
        for mood in iter {
            counts.add(mood, 1);
        }
        counts
    }
}
