//! Keyword-based mood classification

use super::lexicon::tokenize;
use super::{Lexicon, MoodCategory, MoodCounts};

/// Texts shorter than this (in characters) get no suggestion
pub const MIN_TEXT_LENGTH: usize = 10;

/// Scores free text against a lexicon and suggests a mood
#[derive(Debug, Clone, Copy)]
pub struct MoodClassifier<'a> {
    lexicon: &'a Lexicon,
    min_text_length: usize,
}

impl Default for MoodClassifier<'static> {
    fn default() -> Self {
        MoodClassifier::new(Lexicon::builtin(), MIN_TEXT_LENGTH)
    }
}

impl<'a> MoodClassifier<'a> {
    pub fn new(lexicon: &'a Lexicon, min_text_length: usize) -> Self {
        MoodClassifier {
            lexicon,
            min_text_length,
        }
    }

    /// Count whole-word phrase occurrences per mood
    pub fn scores(&self, text: &str) -> MoodCounts {
        let tokens = tokenize(text);
        let mut scores = MoodCounts::new();
        for start in 0..tokens.len() {
            for mood in self.lexicon.matches_at(&tokens[start..]) {
                scores.add(mood, 1);
            }
        }
        scores
    }

    /// Suggest the mood with the strictly highest score.
    ///
    /// Returns `None` for short text or when nothing in the lexicon matched.
    pub fn classify(&self, text: &str) -> Option<MoodCategory> {
        let length = text.chars().count();
        if length < self.min_text_length {
            return None;
        }

        let scores = self.scores(text);
        let suggestion = scores.leader();
        log::debug!(
            "classified {} chars: scores={:?} suggestion={:?}",
            length,
            scores,
            suggestion
        );
        suggestion
    }
}

/// Classify with the built-in lexicon and default threshold
pub fn classify(text: &str) -> Option<MoodCategory> {
    MoodClassifier::default().classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_has_no_suggestion() {
        assert_eq!(classify("happy"), None);
        assert_eq!(classify("so happy!"), None); // 9 chars
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_ten_chars_is_long_enough() {
        assert_eq!(classify("happy now!"), Some(MoodCategory::Happy));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 9 chars, 24 bytes
        assert_eq!(classify("sad 😢😢😢😢😢"), None);
        assert_eq!(classify("sad 😢😢😢😢😢😢"), Some(MoodCategory::Sad));
    }

    #[test]
    fn test_no_keywords_has_no_suggestion() {
        assert_eq!(classify("went to the store for bread"), None);
    }

    #[test]
    fn test_single_category() {
        assert_eq!(
            classify("Feeling lonely and hopeless tonight"),
            Some(MoodCategory::Sad)
        );
        assert_eq!(
            classify("so much pressure, deadline tomorrow"),
            Some(MoodCategory::Stressed)
        );
        assert_eq!(
            classify("a calm and quiet evening"),
            Some(MoodCategory::Neutral)
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify("AMAZING DAY AT THE BEACH"),
            Some(MoodCategory::Happy)
        );
    }

    #[test]
    fn test_whole_words_only() {
        // "goodbye" must not count as "good", "mankind" not as "man"
        assert_eq!(classify("goodbye to all mankind"), None);
    }

    #[test]
    fn test_repeated_keyword_counts_each_occurrence() {
        let scores = MoodClassifier::default().scores("sad sad sad but happy");
        assert_eq!(scores.get(MoodCategory::Sad), 3);
        assert_eq!(scores.get(MoodCategory::Happy), 1);
    }

    #[test]
    fn test_phrase_and_contained_word_both_score() {
        let scores = MoodClassifier::default().scores("what the fuck is this");
        assert_eq!(scores.get(MoodCategory::Stressed), 2);
    }

    #[test]
    fn test_highest_score_wins() {
        assert_eq!(
            classify("good morning, but tired and busy and anxious"),
            Some(MoodCategory::Stressed)
        );
    }

    #[test]
    fn test_tie_goes_to_priority_order() {
        assert_eq!(
            classify("happy yet sad at once"),
            Some(MoodCategory::Happy)
        );
        assert_eq!(
            classify("tired but fine overall"),
            Some(MoodCategory::Stressed)
        );
        assert_eq!(classify("sad and tired today"), Some(MoodCategory::Sad));
    }

    #[test]
    fn test_custom_threshold() {
        let classifier = MoodClassifier::new(Lexicon::builtin(), 3);
        assert_eq!(classifier.classify("sad"), Some(MoodCategory::Sad));
    }
}
