//! Text normalization - lower-casing and word tokenization.

/// Lower-cased feedback text plus its word tokens.
///
/// Tokens are maximal runs of alphanumeric characters or `_`; every other
/// character (punctuation, apostrophes, hyphens, whitespace) separates tokens
/// and is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    lowered: String,
    tokens: Vec<String>,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let tokens = lowered
            .split(|c: char| !is_word_char(c))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        Self { lowered, tokens }
    }

    /// The whole text, lower-cased.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns true when the text holds no word at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns true if some token starts with `prefix`.
    pub fn has_token_starting_with(&self, prefix: &str) -> bool {
        self.tokens.iter().any(|token| token.starts_with(prefix))
    }
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
