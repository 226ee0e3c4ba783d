use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;
use crate::error::ConfigError;

/// Environment variable whose directives override the configured filter.
pub const LOG_ENV_VAR: &str = "ZIWEI_LOG";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Install the global subscriber: `EnvFilter` plus a fmt layer on stderr.
pub fn init_tracing(config: &LogConfig) -> Result<(), ConfigError> {
    let filter = build_filter(config)?;
    INITIALISED
        .set(())
        .map_err(|_| ConfigError::TracingAlreadyInitialised)?;

    let ansi = config
        .ansi
        .unwrap_or_else(|| std::io::stderr().is_terminal());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(std::io::stderr);
    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|_| ConfigError::TracingAlreadyInitialised)
}

fn build_filter(config: &LogConfig) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.filter).map_err(|e| ConfigError::Filter {
        filter: config.filter.clone(),
        message: e.to_string(),
    })
}
