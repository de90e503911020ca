//! Lexicon Store - static word tables shared by every analysis.
//!
//! The tables are built once on first access through [`LEXICON`] and are
//! never mutated afterwards, so any number of analyses can read them
//! concurrently without locking.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::text::{is_word_char, NormalizedText};

/// Words counted as positive by the discrete strategy (exact token match).
const POSITIVE_WORDS: &[&str] = &[
    "excellent", "excellente", "parfait", "parfaite", "incroyable", "merci", "adore", "top",
    "super", "génial", "géniale", "bon", "bonne", "rapide", "efficace", "propre",
];

/// Words counted as negative by the discrete strategy (exact token match).
const NEGATIVE_WORDS: &[&str] = &[
    "déçu", "déçue", "problème", "lent", "lente", "mauvais", "mauvaise", "horrible", "cher",
    "chère", "jamais", "pire", "sale", "bruit", "froid", "froide", "attente",
];

/// Coarse themes reported regardless of sentiment.
const THEMES: &[Category] = &[
    Category::new("accommodation", "Hébergement", &["chambre", "lit", "vue", "propreté"]),
    Category::new(
        "dining",
        "Restauration",
        &["repas", "manger", "restaurant", "diner", "dîner"],
    ),
    Category::new(
        "customer_service",
        "Service Client",
        &["service", "accueil", "personnel", "staff"],
    ),
    Category::new("pricing", "Tarification", &["prix", "tarif", "facture", "argent"]),
];

/// Label reported when no coarse theme matched.
pub const FALLBACK_THEME: &str = "Général";

/// Fine-grained categories used for sentiment-conditioned tags.
const DOMAINS: &[Category] = &[
    Category::new("wifi", "wifi", &["wifi", "connexion", "internet", "réseau", "signal"]),
    Category::new(
        "noise",
        "noise",
        &["bruit", "noise", "musique", "voisins", "sonore", "calme"],
    ),
    Category::new(
        "cleanliness",
        "cleanliness",
        &["propre", "sale", "dirty", "clean", "ménage", "poussière", "cheveux", "tache"],
    ),
    Category::new(
        "staff",
        "staff",
        &["personnel", "staff", "accueil", "réception", "service", "rude", "aimable", "poli"],
    ),
    Category::new("comfort", "comfort", &["lit", "bed", "confort", "oreiller", "matelas"]),
    Category::new(
        "price",
        "price",
        &["prix", "tarif", "cher", "expensive", "solde", "rapport"],
    ),
    Category::new(
        "location",
        "location",
        &["emplacement", "location", "centre", "vue", "plage", "métro"],
    ),
];

/// Hard-failure terms that escalate negative feedback.
const CRITICAL_KEYWORDS: &[&str] = &[
    "dirty", "sale", "rude", "agressif", "smell", "odeur", "punaises", "bedbugs", "vol", "thief",
    "payment", "débité",
];

/// Filler words never reported as keywords.
const STOP_WORDS: &[&str] = &[
    "the", "and", "was", "for", "that", "with", "this", "have", "from", "were", "les", "des",
    "une", "pour", "mais", "pas", "dans", "très", "est", "était", "avec", "sont", "nous", "vous",
    "elle", "leur", "tout", "aussi", "plus",
];

/// Single-word terms up to this many characters only match with an
/// inflectional ending, so `vol` stays clear of `volume`.
const SHORT_TERM_CHARS: usize = 4;

/// Endings a short term may carry: plural, feminine, participle, `-té` noun.
const SHORT_TERM_ENDINGS: &[&str] = &["", "s", "x", "e", "es", "é", "ée", "és", "ées", "té", "tés"];

/// Process-wide read-only lexicon.
pub static LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::builtin);

/// A named group of trigger terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub label: &'static str,
    pub terms: &'static [&'static str],
}

impl Category {
    pub const fn new(
        name: &'static str,
        label: &'static str,
        terms: &'static [&'static str],
    ) -> Self {
        Self { name, label, terms }
    }

    /// Returns true if any of this category's terms occurs in the text.
    pub fn matches(&self, text: &NormalizedText) -> bool {
        self.terms.iter().any(|term| term_occurs(term, text))
    }
}

/// Static word tables for polarity, categories, critical terms and stop words.
#[derive(Debug)]
pub struct Lexicon {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    themes: &'static [Category],
    domains: &'static [Category],
    critical: &'static [&'static str],
    stop_words: HashSet<&'static str>,
}

impl Lexicon {
    /// Builds the built-in French/English hospitality lexicon.
    pub fn builtin() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
            themes: THEMES,
            domains: DOMAINS,
            critical: CRITICAL_KEYWORDS,
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Coarse themes in declaration order.
    pub fn themes(&self) -> &[Category] {
        self.themes
    }

    /// Fine-grained domain categories in declaration order.
    pub fn domains(&self) -> &[Category] {
        self.domains
    }

    pub fn has_critical_keyword(&self, text: &NormalizedText) -> bool {
        self.critical.iter().any(|term| term_occurs(term, text))
    }
}

/// Single-word terms match any token they prefix (short ones only when the
/// rest is an inflection); compound terms match as substrings of the lowered
/// text.
fn term_occurs(term: &str, text: &NormalizedText) -> bool {
    if !term.chars().all(is_word_char) {
        return text.lowered().contains(term);
    }
    if term.chars().count() > SHORT_TERM_CHARS {
        return text.has_token_starting_with(term);
    }
    text.tokens().iter().any(|token| {
        token
            .strip_prefix(term)
            .is_some_and(|rest| SHORT_TERM_ENDINGS.contains(&rest))
    })
}
