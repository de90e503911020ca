//! Polarity estimator adapters.

mod lexicon_polarity;

pub use lexicon_polarity::LexiconPolarityEstimator;
