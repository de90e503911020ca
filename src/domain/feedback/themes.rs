//! Theme Classifier - topical labels, optionally qualified by sentiment.
//!
//! A category activates when any of its terms occurs in the text. Categories
//! are evaluated in declaration order and each contributes at most once.

use super::lexicon::{Lexicon, FALLBACK_THEME, LEXICON};
use super::sentiment::Sentiment;
use super::text::NormalizedText;

/// Labels produced by a [`ThemeClassifier`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTags {
    pub themes: Vec<String>,
    /// `<category>_issue` labels for negative feedback.
    pub reason_tags: Vec<String>,
    /// `good_<category>` labels for positive feedback.
    pub positive_tags: Vec<String>,
}

/// Strategy that maps text (and its sentiment) to topical labels.
pub trait ThemeClassifier: Send + Sync {
    fn classify(&self, text: &NormalizedText, sentiment: Sentiment) -> ThemeTags;
}

/// Coarse themes reported independently of sentiment, never empty.
#[derive(Debug, Clone, Copy)]
pub struct UnconditionalThemes {
    lexicon: &'static Lexicon,
}

impl UnconditionalThemes {
    pub fn new() -> Self {
        Self { lexicon: &LEXICON }
    }
}

impl Default for UnconditionalThemes {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeClassifier for UnconditionalThemes {
    fn classify(&self, text: &NormalizedText, _sentiment: Sentiment) -> ThemeTags {
        let mut themes: Vec<String> = self
            .lexicon
            .themes()
            .iter()
            .filter(|category| category.matches(text))
            .map(|category| category.label.to_string())
            .collect();

        if themes.is_empty() {
            themes.push(FALLBACK_THEME.to_string());
        }

        ThemeTags {
            themes,
            ..ThemeTags::default()
        }
    }
}

/// Issue tags for negative feedback, good tags for positive feedback,
/// nothing for neutral feedback.
#[derive(Debug, Clone, Copy)]
pub struct SentimentConditionedTags {
    lexicon: &'static Lexicon,
}

impl SentimentConditionedTags {
    pub fn new() -> Self {
        Self { lexicon: &LEXICON }
    }
}

impl Default for SentimentConditionedTags {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeClassifier for SentimentConditionedTags {
    fn classify(&self, text: &NormalizedText, sentiment: Sentiment) -> ThemeTags {
        let mut tags = ThemeTags::default();
        if sentiment == Sentiment::Neutral {
            return tags;
        }

        for category in self.lexicon.domains() {
            if !category.matches(text) {
                continue;
            }
            match sentiment {
                Sentiment::Negative => tags.reason_tags.push(format!("{}_issue", category.name)),
                Sentiment::Positive => tags.positive_tags.push(format!("good_{}", category.name)),
                Sentiment::Neutral => continue,
            }
            tags.themes.push(category.label.to_string());
        }

        tags
    }
}
