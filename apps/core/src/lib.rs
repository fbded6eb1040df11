//! Triage core: classify free-form messages as emergency, not-emergency or
//! fake/spam, attach a probability per class, and pull out a few entities.
//!
//! ```rust
//! use triage_core::{Classification, SequenceRandom, TriageAnalyzer};
//!
//! let analyzer = TriageAnalyzer::new();
//! let mut rng = SequenceRandom::new(vec![0.5]).unwrap();
//! let result = analyzer.analyze("Fire at Pine Street, people trapped", &mut rng);
//!
//! assert_eq!(result.classification, Classification::Emergency);
//! assert_eq!(result.entities, vec!["Fire", "Pine", "Street"]);
//! ```

pub mod config;
pub mod error;
pub mod telemetry;
pub mod triage;

pub use config::{LogFormat, TriageConfig};
pub use error::AppError;
pub use telemetry::init_tracing;
pub use triage::{
    classify, extract_entities, synthesize, AnalysisInput, AnalysisResult, Classification,
    ClassifierDecision, EntityDisplay, EntityExtractor, KeywordClassifier, ProbabilityRow,
    ProbabilityVector, RandomSource, SeededRandom, SequenceRandom, Signal, ThreadRandom,
    TriageAnalyzer,
};

#[cfg(test)]
mod tests;
