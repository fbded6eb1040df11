//! Triage Analyzer - Main orchestrator for the triage module.
//!
//! Runs the keyword classifier, feeds its decision to the probability
//! synthesizer, and extracts entities from the same text:
//! 1. Classify (keyword tiers, random fallback)
//! 2. Synthesize probabilities for the chosen class
//! 3. Extract entity candidates from the original casing

use std::time::Instant;
use tracing::{debug, info};
use validator::Validate;

use super::classifier::KeywordClassifier;
use super::entities::EntityExtractor;
use super::input::AnalysisInput;
use super::probability::synthesize;
use super::random::{RandomSource, ThreadRandom};
use super::result::AnalysisResult;
use crate::error::AppError;

/// Stateless triage analyzer. Share it freely; each call brings its own random source.
pub struct TriageAnalyzer {
    classifier: KeywordClassifier,
    extractor: EntityExtractor,
}

impl Default for TriageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TriageAnalyzer {
    /// Create a new analyzer with default settings
    pub fn new() -> Self {
        Self {
            classifier: KeywordClassifier::new(),
            extractor: EntityExtractor::new(),
        }
    }

    /// Analyze non-blank text.
    ///
    /// Blank text is a caller error and is not checked here; use
    /// [`analyze_input`](Self::analyze_input) to validate first.
    pub fn analyze<R: RandomSource + ?Sized>(&self, text: &str, rng: &mut R) -> AnalysisResult {
        let start = Instant::now();

        let decision = self.classifier.classify_with_signal(text, rng);
        let probabilities = synthesize(decision.classification, rng);
        let entities = self.extractor.extract(text);

        let result = AnalysisResult {
            classification: decision.classification,
            probabilities,
            entities,
        };

        debug!(signal = ?decision.signal, chars = text.chars().count(), "Triage decision");
        info!(
            elapsed_us = start.elapsed().as_micros() as u64,
            "{}",
            result.summary()
        );

        result
    }

    /// Validate `input` and analyze it.
    ///
    /// # Errors
    ///
    /// [`AppError::Validation`] with the user-facing blank-input message when
    /// the text is empty or whitespace only.
    pub fn analyze_input<R: RandomSource + ?Sized>(
        &self,
        input: &AnalysisInput,
        rng: &mut R,
    ) -> Result<AnalysisResult, AppError> {
        input.validate()?;
        Ok(self.analyze(&input.text, rng))
    }

    /// Validate and analyze using the thread-local random generator.
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisResult, AppError> {
        self.analyze_input(&AnalysisInput::new(text), &mut ThreadRandom::new())
    }
}
