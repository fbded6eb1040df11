//! # Triage Module
//!
//! Rule-based triage of free-form messages into emergency, not-emergency, or
//! fake/spam, with a probability per class and a short list of entities.
//!
//! ## Components
//! - `classifier`: ordered keyword tiers, random fallback
//! - `probability`: dominance-first probability synthesis
//! - `entities`: capitalized-token entity extraction
//! - `random`: injectable random sources
//! - `input` / `result`: data in and out
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod classification;
pub mod classifier;
pub mod entities;
pub mod input;
pub mod probability;
pub mod random;
pub mod result;

pub use analyzer::TriageAnalyzer;
pub use classification::Classification;
pub use classifier::{ClassifierDecision, KeywordClassifier, Signal};
pub use entities::{extract_entities, EntityExtractor, MAX_ENTITIES};
pub use input::{AnalysisInput, BLANK_INPUT_MESSAGE};
pub use probability::{synthesize, ProbabilityRow, ProbabilityVector, SUM_TOLERANCE};
pub use random::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use result::{AnalysisResult, EntityDisplay, NO_ENTITIES_MESSAGE};

/// Classify `text` with the default keyword tiers.
pub fn classify<R: RandomSource + ?Sized>(text: &str, rng: &mut R) -> Classification {
    KeywordClassifier::new().classify(text, rng)
}
