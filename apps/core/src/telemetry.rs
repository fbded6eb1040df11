//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; whoever embeds it decides whether
//! to install this subscriber or their own.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, TriageConfig};
use crate::error::AppError;

const SERVICE_NAME: &str = "triage-core";

/// Install a global subscriber for `config`.
///
/// Returns `Ok(false)` when another subscriber was already installed, which
/// makes repeated calls (e.g. from several tests) harmless.
pub fn init_tracing(config: &TriageConfig) -> Result<bool, AppError> {
    let filter = EnvFilter::try_new(&config.log_filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .is_ok(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .is_ok(),
        LogFormat::Bunyan => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                SERVICE_NAME.to_string(),
                std::io::stdout,
            ))
            .try_init()
            .is_ok(),
    };

    Ok(installed)
}
