//! The entry being composed and its currently selected mood

use super::{MoodCategory, MoodClassifier};

/// Text typed so far plus the mood that will be attached on submit.
///
/// The classifier only ever moves the selection when it has a suggestion;
/// an explicit [`Draft::select`] overrides it until the text changes again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    text: String,
    selected: MoodCategory,
    default_mood: MoodCategory,
}

impl Default for Draft {
    fn default() -> Self {
        Draft::new(MoodCategory::default())
    }
}

impl Draft {
    pub fn new(default_mood: MoodCategory) -> Self {
        Draft {
            text: String::new(),
            selected: default_mood,
            default_mood,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selected(&self) -> MoodCategory {
        self.selected
    }

    /// Replace the text and apply the classifier's suggestion, if any
    pub fn update_text(
        &mut self,
        text: &str,
        classifier: &MoodClassifier<'_>,
    ) -> Option<MoodCategory> {
        self.text = text.to_string();
        let suggestion = classifier.classify(text);
        if let Some(mood) = suggestion {
            self.selected = mood;
        }
        suggestion
    }

    /// User override of the selected mood
    pub fn select(&mut self, mood: MoodCategory) {
        self.selected = mood;
    }

    /// Clear text and go back to the default mood
    pub fn reset(&mut self) {
        self.text.clear();
        self.selected = self.default_mood;
    }
}
