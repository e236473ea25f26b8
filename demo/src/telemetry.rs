//! Log subscriber setup for the demo binary.

use tracing_subscriber::EnvFilter;

/// Errors encountered while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter expression did not parse.
    #[error("invalid log filter `{filter}`: {message}")]
    Filter {
        /// Expression that was rejected
        filter: String,
        /// Parser diagnostic
        message: String,
    },
    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over `fallback_filter` when it is set.
///
/// # Errors
///
/// Returns [`TelemetryError`] if the filter is invalid or a subscriber is
/// already in place.
pub fn initialise(fallback_filter: &str) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback_filter).map_err(|error| TelemetryError::Filter {
            filter: fallback_filter.to_owned(),
            message: error.to_string(),
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| TelemetryError::Install(error.to_string()))
}
