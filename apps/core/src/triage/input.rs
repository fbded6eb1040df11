//! Analysis input and its validation.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Message shown to the user when nothing was entered or uploaded
pub const BLANK_INPUT_MESSAGE: &str = "Please enter text or upload a file first.";

/// Text handed to the analyzer, typed or decoded from an upload by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalysisInput {
    /// Raw text; original casing is kept for entity extraction.
    #[validate(custom(function = "validate_not_blank"))]
    pub text: String,
}

impl AnalysisInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for AnalysisInput {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for AnalysisInput {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

fn validate_not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut error = ValidationError::new("blank_input");
        error.message = Some(Cow::Borrowed(BLANK_INPUT_MESSAGE));
        return Err(error);
    }
    Ok(())
}
