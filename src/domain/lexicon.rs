//! Trigger-word lexicon used for mood classification

use super::MoodCategory;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

const HAPPY_WORDS: &[&str] = &[
    "happy",
    "joy",
    "excited",
    "great",
    "awesome",
    "amazing",
    "wonderful",
    "fantastic",
    "good",
    "smile",
    "laugh",
    "love",
    "perfect",
    "brilliant",
    "excellent",
];

const SAD_WORDS: &[&str] = &[
    "sad",
    "depressed",
    "down",
    "upset",
    "cry",
    "tears",
    "hurt",
    "pain",
    "lonely",
    "empty",
    "hopeless",
    "disappointed",
    "grief",
    "sorrow",
    "devastated",
    "die",
    "suicidal",
    "suicide",
];

const STRESSED_WORDS: &[&str] = &[
    "stress",
    "anxious",
    "worried",
    "overwhelmed",
    "panic",
    "nervous",
    "tense",
    "pressure",
    "busy",
    "exhausted",
    "tired",
    "deadline",
    "workload",
    "burnout",
    "chaos",
    "fuck",
    "what the fuck",
    "wtf",
    "grinding",
    "overload",
    "freaking out",
    "idk",
    "man",
];

const NEUTRAL_WORDS: &[&str] = &[
    "okay", "fine", "normal", "regular", "usual", "calm", "peaceful", "quiet", "steady",
    "balanced",
];

/// Word tokens: runs of word characters, matching `\b` boundaries
fn word_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\w+").unwrap())
}

/// Split text into lowercase word tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A trigger phrase, pre-split into tokens
#[derive(Debug, Clone, PartialEq, Eq)]
struct Phrase {
    tokens: Vec<String>,
    mood: MoodCategory,
}

/// Read-only mapping of mood -> trigger phrases.
///
/// Phrases are indexed by their first token so that a single pass over the
/// tokenized input can find every occurrence.
#[derive(Debug, Clone)]
pub struct Lexicon {
    by_first_token: HashMap<String, Vec<Phrase>>,
    phrase_count: usize,
}

impl Lexicon {
    /// Build a lexicon from `(mood, phrases)` pairs
    pub fn new<'a, I>(table: I) -> Self
    where
        I: IntoIterator<Item = (MoodCategory, &'a [&'a str])>,
    {
        let mut by_first_token: HashMap<String, Vec<Phrase>> = HashMap::new();
        let mut phrase_count = 0;

        for (mood, phrases) in table {
            for phrase in phrases {
                let tokens = tokenize(phrase);
                let Some(first) = tokens.first().cloned() else {
                    continue;
                };
                by_first_token
                    .entry(first)
                    .or_default()
                    .push(Phrase { tokens, mood });
                phrase_count += 1;
            }
        }

        Lexicon {
            by_first_token,
            phrase_count,
        }
    }

    /// The built-in English lexicon
    pub fn builtin() -> &'static Lexicon {
        static LEXICON: OnceLock<Lexicon> = OnceLock::new();
        LEXICON.get_or_init(|| {
            Lexicon::new([
                (MoodCategory::Happy, HAPPY_WORDS),
                (MoodCategory::Sad, SAD_WORDS),
                (MoodCategory::Stressed, STRESSED_WORDS),
                (MoodCategory::Neutral, NEUTRAL_WORDS),
            ])
        })
    }

    /// Number of phrases in the lexicon
    pub fn len(&self) -> usize {
        self.phrase_count
    }

    pub fn is_empty(&self) -> bool {
        self.phrase_count == 0
    }

    /// Moods of every phrase occurrence starting at `tokens[0]`
    pub(crate) fn matches_at<'s>(
        &'s self,
        tokens: &'s [String],
    ) -> impl Iterator<Item = MoodCategory> + 's {
        tokens
            .first()
            .and_then(|first| self.by_first_token.get(first))
            .into_iter()
            .flatten()
            .filter(move |phrase| tokens.starts_with(&phrase.tokens))
            .map(|phrase| phrase.mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Great day! WTF, man..."),
            vec!["great", "day", "wtf", "man"]
        );
    }

    #[test]
    fn test_tokenize_splits_on_apostrophe() {
        assert_eq!(tokenize("don't"), vec!["don", "t"]);
    }

    #[test]
    fn test_builtin_size() {
        let lexicon = Lexicon::builtin();
        assert_eq!(
            lexicon.len(),
            HAPPY_WORDS.len() + SAD_WORDS.len() + STRESSED_WORDS.len() + NEUTRAL_WORDS.len()
        );
        assert!(!lexicon.is_empty());
    }

    #[test]
    fn test_multi_word_phrase_and_its_parts_both_match() {
        let lexicon = Lexicon::builtin();
        let tokens = tokenize("what the fuck");
        let at_start: Vec<MoodCategory> = lexicon.matches_at(&tokens).collect();
        assert_eq!(at_start, vec![MoodCategory::Stressed]);
        let at_last: Vec<MoodCategory> = lexicon.matches_at(&tokens[2..]).collect();
        assert_eq!(at_last, vec![MoodCategory::Stressed]);
    }

    #[test]
    fn test_partial_phrase_does_not_match() {
        let lexicon = Lexicon::builtin();
        let tokens = tokenize("freaking");
        assert_eq!(lexicon.matches_at(&tokens).count(), 0);
    }

    #[test]
    fn test_custom_lexicon() {
        let words: &[&str] = &["sunny", "blue sky"];
        let lexicon = Lexicon::new([(MoodCategory::Happy, words)]);
        assert_eq!(lexicon.len(), 2);
        let tokens = tokenize("blue sky");
        assert_eq!(
            lexicon.matches_at(&tokens).collect::<Vec<_>>(),
            vec![MoodCategory::Happy]
        );
    }
}
