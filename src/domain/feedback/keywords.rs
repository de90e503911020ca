//! Keyword extraction - salient words of a feedback text.

use super::lexicon::Lexicon;
use super::text::NormalizedText;

/// Maximum number of keywords reported per text.
pub const MAX_KEYWORDS: usize = 5;

/// Words need more than this many characters to count as keywords.
const MIN_KEYWORD_CHARS: usize = 3;

/// Returns up to [`MAX_KEYWORDS`] distinct non-stop-word tokens longer than
/// three characters, in first-occurrence order.
pub fn extract_keywords(text: &NormalizedText, lexicon: &Lexicon) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);
    for token in text.tokens() {
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
        if token.chars().count() <= MIN_KEYWORD_CHARS || lexicon.is_stop_word(token) {
            continue;
        }
        if !keywords.contains(token) {
            keywords.push(token.clone());
        }
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::lexicon::LEXICON;

    fn keywords(text: &str) -> Vec<String> {
        extract_keywords(&NormalizedText::new(text), &LEXICON)
    }

    #[test]
    fn skips_short_and_stop_words() {
        assert_eq!(
            keywords("Le lit était dur mais la vue superbe"),
            vec!["superbe"]
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        // "déçu" is four characters but five bytes
        assert_eq!(keywords("été déçu"), vec!["déçu"]);
    }

    #[test]
    fn deduplicates_in_first_occurrence_order() {
        assert_eq!(
            keywords("Chambre propre, chambre calme, personnel chambre"),
            vec!["chambre", "propre", "calme", "personnel"]
        );
    }

    #[test]
    fn truncates_to_five() {
        assert_eq!(
            keywords("alpha bravo charlie delta foxtrot hotel india"),
            vec!["alpha", "bravo", "charlie", "delta", "foxtrot"]
        );
    }

    #[test]
    fn empty_text_has_no_keywords() {
        assert!(keywords("").is_empty());
    }
}
