//! Keyword-signal classifier.
//!
//! Signal tiers are checked in order against the lowercased text; the first
//! tier with a substring hit decides the class. When no tier matches, a single
//! uniform draw picks the class instead.

use serde::Serialize;
use tracing::debug;

use super::classification::Classification;
use super::random::RandomSource;

/// Tier 1: distress signals
const EMERGENCY_SIGNALS: &[&str] = &["help", "fire", "injured", "blood", "trapped"];

/// Tier 2: spam and scam signals
const FAKE_SIGNALS: &[&str] = &["scam", "winner", "buy", "click here"];

/// Draws above this value fall back to `Fake`.
const FALLBACK_FAKE_ABOVE: f64 = 0.8;

/// Draws above this value (and not above the fake cut) fall back to `Emergency`.
const FALLBACK_EMERGENCY_ABOVE: f64 = 0.6;

/// What produced a classification decision
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Signal {
    /// A tier keyword was found in the text
    Keyword {
        tier: usize,
        keyword: &'static str,
    },
    /// No keyword matched; the class came from this uniform draw
    RandomFallback { draw: f64 },
}

/// Classification together with the signal behind it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierDecision {
    pub classification: Classification,
    pub signal: Signal,
}

/// Ordered keyword set for one tier
struct SignalTier {
    classification: Classification,
    keywords: &'static [&'static str],
}

/// Rule-based triage classifier
pub struct KeywordClassifier {
    tiers: Vec<SignalTier>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordClassifier {
    /// Create the classifier with emergency signals ahead of spam signals
    pub fn new() -> Self {
        let tiers = vec![
            SignalTier {
                classification: Classification::Emergency,
                keywords: EMERGENCY_SIGNALS,
            },
            SignalTier {
                classification: Classification::Fake,
                keywords: FAKE_SIGNALS,
            },
        ];

        Self { tiers }
    }

    /// Classify `text`. Only the no-signal path reads from `rng`.
    ///
    /// Callers must reject blank text beforehand; see
    /// [`TriageAnalyzer::analyze_input`](super::analyzer::TriageAnalyzer::analyze_input).
    pub fn classify<R: RandomSource + ?Sized>(&self, text: &str, rng: &mut R) -> Classification {
        self.classify_with_signal(text, rng).classification
    }

    /// Classify `text` and report which signal decided it.
    pub fn classify_with_signal<R: RandomSource + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
    ) -> ClassifierDecision {
        let lowered = text.to_lowercase();

        if let Some(decision) = self.match_tiers(&lowered) {
            debug!(
                classification = %decision.classification,
                signal = ?decision.signal,
                "Keyword signal matched"
            );
            return decision;
        }

        let draw = rng.next_uniform();
        let classification = fallback_class(draw);
        debug!(%classification, draw, "No keyword signal, using random fallback");

        ClassifierDecision {
            classification,
            signal: Signal::RandomFallback { draw },
        }
    }

    fn match_tiers(&self, lowered: &str) -> Option<ClassifierDecision> {
        self.tiers.iter().enumerate().find_map(|(index, tier)| {
            tier.keywords
                .iter()
                .copied()
                .find(|keyword| lowered.contains(*keyword))
                .map(|keyword| ClassifierDecision {
                    classification: tier.classification,
                    signal: Signal::Keyword {
                        tier: index + 1,
                        keyword,
                    },
                })
        })
    }
}

fn fallback_class(draw: f64) -> Classification {
    if draw > FALLBACK_FAKE_ABOVE {
        Classification::Fake
    } else if draw > FALLBACK_EMERGENCY_ABOVE {
        Classification::Emergency
    } else {
        Classification::NotEmergency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::random::SequenceRandom;

    fn fixed(value: f64) -> SequenceRandom {
        SequenceRandom::new(vec![value]).expect("valid sequence")
    }

    #[test]
    fn test_emergency_keywords() {
        let classifier = KeywordClassifier::new();
        let mut rng = fixed(0.99);

        for text in ["Please HELP us", "There is a Fire", "two injured", "Blood everywhere", "we are trapped"] {
            assert_eq!(
                classifier.classify(text, &mut rng),
                Classification::Emergency,
                "Expected Emergency for '{}'",
                text
            );
        }
        assert_eq!(rng.draws(), 0, "Keyword matches must not consume randomness");
    }

    #[test]
    fn test_fake_keywords() {
        let classifier = KeywordClassifier::new();
        let mut rng = fixed(0.0);

        for text in ["This is a SCAM", "You are a Winner", "buy now", "Click Here to claim"] {
            assert_eq!(
                classifier.classify(text, &mut rng),
                Classification::Fake,
                "Expected Fake for '{}'",
                text
            );
        }
        assert_eq!(rng.draws(), 0, "Keyword matches must not consume randomness");
    }

    #[test]
    fn test_emergency_preempts_fake() {
        let classifier = KeywordClassifier::new();
        let mut rng = fixed(0.5);

        let decision = classifier.classify_with_signal("help, this is not a scam", &mut rng);
        assert_eq!(decision.classification, Classification::Emergency);
        assert_eq!(
            decision.signal,
            Signal::Keyword {
                tier: 1,
                keyword: "help"
            }
        );
    }

    #[test]
    fn test_substring_matching() {
        let classifier = KeywordClassifier::new();
        let mut rng = fixed(0.0);

        // "helpful" contains "help", "buyer" contains "buy"
        assert_eq!(classifier.classify("a helpful note", &mut rng), Classification::Emergency);
        assert_eq!(classifier.classify("dear buyer", &mut rng), Classification::Fake);
    }

    #[test]
    fn test_fallback_thresholds() {
        let classifier = KeywordClassifier::new();
        let text = "the weather is calm today";

        let cases = [
            (0.0, Classification::NotEmergency),
            (0.6, Classification::NotEmergency),
            (0.61, Classification::Emergency),
            (0.8, Classification::Emergency),
            (0.81, Classification::Fake),
            (0.999, Classification::Fake),
        ];

        for (draw, expected) in cases {
            let mut rng = fixed(draw);
            let decision = classifier.classify_with_signal(text, &mut rng);
            assert_eq!(decision.classification, expected, "draw {}", draw);
            assert_eq!(decision.signal, Signal::RandomFallback { draw });
            assert_eq!(rng.draws(), 1);
        }
    }
}
