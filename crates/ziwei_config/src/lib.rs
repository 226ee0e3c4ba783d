//! Configuration and logging setup for the ziwei chart engine.
//!
//! - [`ZiweiConfig`]: TOML file with `[chart]`, `[log]` and `[[explanations]]`
//! - [`init_tracing`]: once-only global subscriber writing to stderr

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CONFIG_FILE_NAME, LogConfig, ZiweiConfig, load, load_or_default};
pub use error::ConfigError;
pub use logging::{LOG_ENV_VAR, init_tracing};
