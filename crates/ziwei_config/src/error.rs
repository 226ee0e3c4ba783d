use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or installing the subscriber.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid guidance table: {0}")]
    Guidance(#[from] ziwei_base::ZiweiError),
    #[error("tracing has already been initialised")]
    TracingAlreadyInitialised,
    #[error("invalid log filter '{filter}': {message}")]
    Filter { filter: String, message: String },
}
