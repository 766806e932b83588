//! Sentiment provider collaborators.
//!
//! The responder never talks to a sentiment source directly; it consumes
//! measurements produced behind the [`SentimentProvider`] seam. This module
//! defines the trait and an offline, deterministic lexicon-based provider.
//! The HTTP-backed provider lives in [`crate::gradio`].

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::measurement::{Assessment, SentimentMeasurement};

/// A source of sentiment measurements.
///
/// Implementations are injected into the conversation layer; failures are
/// reported as errors and converted to an absent measurement by the caller.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Short name of the provider, for logging.
    fn name(&self) -> &str;

    /// Analyze one text and return its measurement.
    async fn analyze(&self, text: &str) -> Result<SentimentMeasurement>;
}

#[async_trait]
impl<P> SentimentProvider for Box<P>
where
    P: SentimentProvider + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn analyze(&self, text: &str) -> Result<SentimentMeasurement> {
        (**self).analyze(text).await
    }
}

/// Polarity above which an assessment is positive, below the negation of
/// which it is negative.
const NEUTRAL_BAND: f64 = 0.1;

/// Scale from subjective-marker density to a subjectivity score.
const SUBJECTIVITY_SCALE: f64 = 1.5;

/// How much a negated sentiment word keeps of its flipped weight.
const NEGATION_DAMPING: f64 = 0.5;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("love", 0.8),
    ("loved", 0.8),
    ("like", 0.4),
    ("great", 0.7),
    ("wonderful", 0.8),
    ("amazing", 0.9),
    ("excellent", 0.8),
    ("outstanding", 0.9),
    ("fantastic", 0.9),
    ("awesome", 0.8),
    ("perfect", 0.8),
    ("happy", 0.7),
    ("glad", 0.6),
    ("excited", 0.8),
    ("thrilled", 0.9),
    ("enjoy", 0.6),
    ("good", 0.5),
    ("nice", 0.4),
    ("best", 0.7),
    ("better", 0.4),
    ("success", 0.6),
    ("win", 0.6),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("hate", -0.8),
    ("terrible", -0.9),
    ("awful", -0.9),
    ("horrible", -0.9),
    ("worst", -0.9),
    ("frustrated", -0.7),
    ("frustrating", -0.7),
    ("angry", -0.8),
    ("sad", -0.6),
    ("worried", -0.5),
    ("worry", -0.5),
    ("disappointed", -0.7),
    ("disappointing", -0.7),
    ("bad", -0.5),
    ("annoying", -0.6),
    ("upset", -0.6),
    ("fear", -0.6),
    ("afraid", -0.6),
    ("problem", -0.4),
    ("broken", -0.5),
    ("fail", -0.7),
    ("failed", -0.7),
    ("wrong", -0.4),
    ("confusing", -0.5),
    ("stress", -0.6),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.4),
    ("extremely", 2.0),
    ("absolutely", 1.8),
    ("so", 1.3),
    ("totally", 1.5),
    ("quite", 1.2),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "isn't", "aren't", "can't", "won't", "wasn't",
];

/// First-person and opinion words counted as subjective markers.
const SUBJECTIVE_MARKERS: &[&str] = &[
    "i", "me", "my", "mine", "we", "our", "feel", "feeling", "think", "believe", "hope", "wish",
    "want",
];

/// Offline dictionary-based sentiment provider.
///
/// Deterministic: identical input always yields identical polarity,
/// subjectivity and assessment. Never errors; text without any lexicon hit
/// comes back neutral.
pub struct LexiconProvider {
    positive_words: HashMap<&'static str, f64>,
    negative_words: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconProvider {
    pub fn new() -> Self {
        Self {
            positive_words: POSITIVE_WORDS.iter().copied().collect(),
            negative_words: NEGATIVE_WORDS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Score a text. Synchronous; the trait impl wraps this.
    pub fn score(&self, text: &str) -> SentimentMeasurement {
        let words: Vec<String> = text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        let mut total_score = 0.0;
        let mut matched = 0usize;
        let mut subjective_hits = 0usize;
        let mut negation_active = false;
        let mut intensifier = 1.0;

        for word in &words {
            let word = word.as_str();

            if NEGATIONS.contains(&word) {
                negation_active = true;
                continue;
            }

            if let Some(&boost) = self.intensifiers.get(word) {
                intensifier = boost;
                subjective_hits += 1;
                continue;
            }

            if SUBJECTIVE_MARKERS.contains(&word) {
                subjective_hits += 1;
            }

            let weight = self
                .positive_words
                .get(word)
                .or_else(|| self.negative_words.get(word))
                .copied();

            if let Some(weight) = weight {
                let mut score = weight * intensifier;
                if negation_active {
                    score = -score * NEGATION_DAMPING;
                }
                total_score += score;
                matched += 1;
                subjective_hits += 1;
            }

            // Modifiers apply to the next sentiment word only
            negation_active = false;
            intensifier = 1.0;
        }

        let polarity = if matched == 0 {
            0.0
        } else {
            (total_score / matched as f64).clamp(-1.0, 1.0)
        };

        let subjectivity = if words.is_empty() {
            0.0
        } else {
            (subjective_hits as f64 / words.len() as f64 * SUBJECTIVITY_SCALE).clamp(0.0, 1.0)
        };

        let assessment = if polarity > NEUTRAL_BAND {
            Assessment::Positive
        } else if polarity < -NEUTRAL_BAND {
            Assessment::Negative
        } else {
            Assessment::Neutral
        };

        debug!(
            polarity,
            subjectivity,
            %assessment,
            "lexicon scored text"
        );

        SentimentMeasurement::new(text, polarity, subjectivity, assessment)
    }
}

#[async_trait]
impl SentimentProvider for LexiconProvider {
    fn name(&self) -> &str {
        "lexicon"
    }

    async fn analyze(&self, text: &str) -> Result<SentimentMeasurement> {
        Ok(self.score(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let provider = LexiconProvider::new();
        let m = provider.score("I absolutely love this new technology!");

        assert_eq!(m.assessment, Assessment::Positive);
        assert!(m.polarity > 0.3);
        assert!(m.subjectivity > 0.5);
    }

    #[test]
    fn test_negative_text() {
        let provider = LexiconProvider::new();
        let m = provider.score("This is terrible and so frustrating.");

        assert_eq!(m.assessment, Assessment::Negative);
        assert!(m.polarity < -0.3);
    }

    #[test]
    fn test_neutral_text() {
        let provider = LexiconProvider::new();
        let m = provider.score("The weather is okay today.");

        assert_eq!(m.assessment, Assessment::Neutral);
        assert_eq!(m.polarity, 0.0);
        assert!(m.subjectivity < 0.3);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let provider = LexiconProvider::new();
        let m = provider.score("");

        assert_eq!(m.assessment, Assessment::Neutral);
        assert_eq!(m.polarity, 0.0);
        assert_eq!(m.subjectivity, 0.0);
    }

    #[test]
    fn test_negation_flips_and_dampens() {
        let provider = LexiconProvider::new();
        let plain = provider.score("This is good.");
        let negated = provider.score("This is not good.");

        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < plain.polarity);
        assert!(negated.polarity < 0.0);
    }

    #[test]
    fn test_intensifier_amplifies() {
        let provider = LexiconProvider::new();
        let plain = provider.score("happy");
        let boosted = provider.score("extremely happy");

        assert!(boosted.polarity > plain.polarity);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let provider = LexiconProvider::new();
        let a = provider.score("I'm worried about the future.");
        let b = provider.score("I'm worried about the future.");

        assert_eq!(a.polarity, b.polarity);
        assert_eq!(a.subjectivity, b.subjectivity);
        assert_eq!(a.assessment, b.assessment);
    }

    #[tokio::test]
    async fn test_trait_impl_never_errors() {
        let provider = LexiconProvider::new();
        let result = provider.analyze("anything at all").await;
        assert!(result.is_ok());
    }
}
