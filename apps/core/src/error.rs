use thiserror::Error;

/// Crate-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Represents input validation errors (e.g., blank text submitted for analysis).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message suitable for showing to an end user, without the category prefix.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Validation(s) | AppError::Config(s) | AppError::Internal(s) => s,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        // Surface the first custom message if one exists; it is the user-facing text.
        let message = err
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()));

        match message {
            Some(m) => AppError::Validation(m),
            None => AppError::Validation(format!("Validation errors: {}", err)),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::Config(format!("Environment variable error: {}", err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for AppError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        AppError::Config(format!("Invalid log filter: {}", err))
    }
}
