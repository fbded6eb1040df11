//! Analysis Result - Output structure for triage analysis.

use serde::{Deserialize, Serialize};

use super::classification::Classification;
use super::probability::ProbabilityVector;
use crate::error::AppError;

/// Shown in place of the entity list when nothing was detected
pub const NO_ENTITIES_MESSAGE: &str = "No entities detected";

/// Complete result of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Triage label
    pub classification: Classification,

    /// Per-class probabilities, dominated by `classification`
    pub probabilities: ProbabilityVector,

    /// Up to five distinct entity candidates, in source order
    pub entities: Vec<String>,
}

/// Entity list as the presentation layer shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityDisplay<'a> {
    Entities(&'a [String]),
    Empty(&'static str),
}

impl AnalysisResult {
    pub fn is_emergency(&self) -> bool {
        self.classification == Classification::Emergency
    }

    /// Entities, or the empty-state message
    pub fn entity_display(&self) -> EntityDisplay<'_> {
        if self.entities.is_empty() {
            EntityDisplay::Empty(NO_ENTITIES_MESSAGE)
        } else {
            EntityDisplay::Entities(&self.entities)
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a result and check its probabilities against its classification.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let result: Self = serde_json::from_str(json)?;
        result.probabilities.check(result.classification)?;
        Ok(result)
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Classification: {} (emergency {}%, not_emergency {}%, fake {}%), Entities: {}",
            self.classification,
            self.probabilities.percent(Classification::Emergency),
            self.probabilities.percent(Classification::NotEmergency),
            self.probabilities.percent(Classification::Fake),
            self.entities.len()
        )
    }
}
