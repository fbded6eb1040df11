//! Runtime configuration read from the environment (and `.env`, if present).
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `TRIAGE_SEED` | seed for a reproducible random source | unset (thread RNG) |
//! | `TRIAGE_LOG_FORMAT` | `pretty`, `json` or `bunyan` | `pretty` |
//! | `RUST_LOG` | `tracing` filter directive | `info` |

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;
use crate::triage::random::{RandomSource, SeededRandom, ThreadRandom};

pub const SEED_VAR: &str = "TRIAGE_SEED";
pub const LOG_FORMAT_VAR: &str = "TRIAGE_LOG_FORMAT";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!(
                "{} must be one of pretty, json, bunyan (got '{}')",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

/// Settings for the triage core
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TriageConfig {
    /// Seed for deterministic runs
    pub seed: Option<u64>,
    pub log_format: LogFormat,
    /// `EnvFilter` directive
    #[validate(length(min = 1))]
    pub log_filter: String,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_format: LogFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TriageConfig {
    /// Load `.env` (if any) and then read the process environment.
    pub fn load() -> Result<Self, AppError> {
        // A missing .env file is normal
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Read settings from the process environment only.
    pub fn from_env() -> Result<Self, AppError> {
        let seed = match read_var(SEED_VAR)? {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!("{} must be an unsigned integer: {}", SEED_VAR, e))
            })?),
            None => None,
        };

        let log_format = read_var(LOG_FORMAT_VAR)?
            .map(|raw| raw.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        let log_filter =
            read_var(LOG_FILTER_VAR)?.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let config = Self {
            seed,
            log_format,
            log_filter,
        };
        config
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }

    /// Random source honoring `seed`
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom::new()),
        }
    }
}

/// Non-empty value of `name`, or `None` when unset or blank.
fn read_var(name: &str) -> Result<Option<String>, AppError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
