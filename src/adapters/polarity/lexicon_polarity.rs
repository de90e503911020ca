//! Lexicon-based polarity estimator.
//!
//! Averages per-word (polarity, subjectivity) weights over the words the
//! lexicon knows. An intensifier scales the word right after it; a negator
//! flips and halves the next known word within a short window.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::feedback::NormalizedText;
use crate::ports::{PolarityEstimator, PolarityReading};

/// Tokens a negator stays in effect for.
const NEGATION_WINDOW: usize = 3;

/// Multiplier applied to a negated word's polarity.
const NEGATION_FACTOR: f64 = -0.5;

const NEGATORS: &[&str] = &[
    "ne", "n", "pas", "aucun", "aucune", "sans", "ni", "not", "no", "never", "without",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("très", 1.3),
    ("trop", 1.3),
    ("vraiment", 1.3),
    ("tellement", 1.3),
    ("extrêmement", 1.5),
    ("totalement", 1.4),
    ("absolument", 1.4),
    ("assez", 0.8),
    ("plutôt", 0.8),
    ("peu", 0.5),
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("quite", 0.8),
];

/// (word, polarity, subjectivity)
const WEIGHTS: &[(&str, f64, f64)] = &[
    // French, positive
    ("excellent", 1.0, 1.0),
    ("excellente", 1.0, 1.0),
    ("parfait", 1.0, 1.0),
    ("parfaite", 1.0, 1.0),
    ("incroyable", 0.8, 0.9),
    ("merci", 0.4, 0.3),
    ("adore", 0.8, 0.9),
    ("top", 0.6, 0.6),
    ("super", 0.7, 0.7),
    ("superbe", 0.8, 0.8),
    ("génial", 0.8, 0.9),
    ("géniale", 0.8, 0.9),
    ("bon", 0.5, 0.6),
    ("bonne", 0.5, 0.6),
    ("rapide", 0.4, 0.4),
    ("efficace", 0.5, 0.5),
    ("propre", 0.5, 0.5),
    ("agréable", 0.6, 0.7),
    ("aimable", 0.6, 0.6),
    ("poli", 0.4, 0.5),
    ("polie", 0.4, 0.5),
    ("calme", 0.3, 0.4),
    ("confortable", 0.5, 0.6),
    ("chaleureux", 0.6, 0.7),
    ("accueillant", 0.5, 0.6),
    ("recommande", 0.6, 0.5),
    ("impeccable", 0.9, 0.8),
    // French, negative
    ("déçu", -0.6, 0.7),
    ("déçue", -0.6, 0.7),
    ("problème", -0.4, 0.4),
    ("lent", -0.4, 0.5),
    ("lente", -0.4, 0.5),
    ("mauvais", -0.7, 0.67),
    ("mauvaise", -0.7, 0.67),
    ("horrible", -1.0, 1.0),
    ("cher", -0.3, 0.5),
    ("chère", -0.3, 0.5),
    ("jamais", -0.5, 0.5),
    ("pire", -0.9, 0.9),
    ("sale", -0.7, 0.8),
    ("bruit", -0.3, 0.3),
    ("bruyant", -0.5, 0.6),
    ("froid", -0.3, 0.4),
    ("froide", -0.3, 0.4),
    ("attente", -0.3, 0.3),
    ("odeur", -0.4, 0.5),
    ("rude", -0.6, 0.7),
    ("agressif", -0.7, 0.8),
    ("inadmissible", -0.9, 0.9),
    ("catastrophique", -1.0, 1.0),
    ("décevant", -0.6, 0.7),
    ("inconfortable", -0.5, 0.6),
    // English
    ("great", 0.8, 0.75),
    ("good", 0.7, 0.6),
    ("perfect", 1.0, 1.0),
    ("nice", 0.6, 1.0),
    ("amazing", 0.6, 0.9),
    ("clean", 0.4, 0.5),
    ("friendly", 0.4, 0.5),
    ("comfortable", 0.4, 0.6),
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("dirty", -0.6, 0.8),
    ("slow", -0.3, 0.4),
    ("noisy", -0.5, 0.6),
    ("expensive", -0.5, 0.7),
    ("disappointed", -0.75, 0.75),
];

static WEIGHT_TABLE: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    WEIGHTS
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect()
});

/// Deterministic stand-in for an opaque sentiment model.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconPolarityEstimator;

impl LexiconPolarityEstimator {
    pub const MODEL_VERSION: &'static str = "lexicon-polarity-v1";

    pub fn new() -> Self {
        Self
    }

    fn intensity_of(token: &str) -> Option<f64> {
        INTENSIFIERS
            .iter()
            .find(|(word, _)| *word == token)
            .map(|(_, factor)| *factor)
    }
}

impl PolarityEstimator for LexiconPolarityEstimator {
    fn polarity_and_subjectivity(&self, text: &str) -> PolarityReading {
        let normalized = NormalizedText::new(text);

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut matched = 0u32;
        let mut intensity = 1.0;
        let mut negation_left = 0usize;

        for token in normalized.tokens() {
            let token = token.as_str();
            if NEGATORS.contains(&token) {
                negation_left = NEGATION_WINDOW;
                continue;
            }
            if let Some(factor) = Self::intensity_of(token) {
                intensity *= factor;
                continue;
            }

            match WEIGHT_TABLE.get(token) {
                Some(&(polarity, subjectivity)) => {
                    let mut polarity = polarity * intensity;
                    if negation_left > 0 {
                        polarity *= NEGATION_FACTOR;
                        negation_left = 0;
                    }
                    polarity_sum += polarity.clamp(-1.0, 1.0);
                    subjectivity_sum += (subjectivity * intensity).clamp(0.0, 1.0);
                    matched += 1;
                }
                None => negation_left = negation_left.saturating_sub(1),
            }
            intensity = 1.0;
        }

        if matched == 0 {
            return PolarityReading::NEUTRAL;
        }

        let count = f64::from(matched);
        PolarityReading {
            polarity: (polarity_sum / count).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / count).clamp(0.0, 1.0),
        }
    }

    fn model_version(&self) -> &str {
        Self::MODEL_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> PolarityReading {
        LexiconPolarityEstimator::new().polarity_and_subjectivity(text)
    }

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn unknown_words_give_neutral_reading() {
        assert_eq!(read("Le petit-déjeuner était servi à 9h."), PolarityReading::NEUTRAL);
        assert_eq!(read(""), PolarityReading::NEUTRAL);
    }

    #[test]
    fn averages_known_words() {
        let reading = read("Chambre sale, mauvaise odeur, jamais revenir.");
        approx(reading.polarity, -0.575);
        approx(reading.subjectivity, 0.6175);
    }

    #[test]
    fn intensifier_scales_next_word() {
        let reading = read("Le service était excellent et le personnel très poli.");
        approx(reading.polarity, 0.76);
        approx(reading.subjectivity, 0.825);
    }

    #[test]
    fn intensified_values_stay_in_range() {
        let reading = read("extrêmement horrible");
        approx(reading.polarity, -1.0);
        approx(reading.subjectivity, 1.0);
    }

    #[test]
    fn negator_flips_and_halves() {
        let reading = read("L'accueil n'était pas top");
        approx(reading.polarity, -0.3);
    }

    #[test]
    fn negation_expires_after_window() {
        let reading = read("pas de souci avec le lit, parfait");
        approx(reading.polarity, 1.0);
    }

    #[test]
    fn reports_model_version() {
        assert_eq!(
            LexiconPolarityEstimator::new().model_version(),
            "lexicon-polarity-v1"
        );
    }
}
