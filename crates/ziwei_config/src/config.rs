//! TOML configuration file.
//!
//! ```toml
//! [chart]
//! apply_natal_transformations = true
//! taichi = "from_natal"       # or "compose"
//! annual_anchor = "epoch1900" # or "cyclic_label"
//!
//! [log]
//! filter = "ziwei_base=debug"
//!
//! [[explanations]]
//! stem = "甲"
//! kind = "祿"
//! house = "財帛宮"
//! phenomenon = "..."
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};
use ziwei_base::{ChartOptions, GuidanceRow, GuidanceTable};

use crate::error::ConfigError;

/// Default file name looked up by front ends.
pub const CONFIG_FILE_NAME: &str = "ziwei.toml";

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives used when the environment sets none.
    pub filter: String,
    /// Force ANSI colours on or off; unset means "only on a terminal".
    pub ansi: Option<bool>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ZiweiConfig {
    pub chart: ChartOptions,
    pub log: LogConfig,
    pub explanations: Vec<GuidanceRow>,
}

impl ZiweiConfig {
    /// Parse TOML text, returning the config and every ignored key path.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::de::Deserializer::new(text);
        let config: Self = serde_ignored::deserialize(deserializer, |p| {
            ignored.push(p.to_string());
        })
        .map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok((config, ignored))
    }

    /// Guidance rows as a lookup table.
    pub fn guidance_table(&self) -> Result<GuidanceTable, ConfigError> {
        Ok(GuidanceTable::from_rows(&self.explanations)?)
    }
}

/// Read and parse a config file. Unknown keys are logged and skipped.
pub fn load(path: &Path) -> Result<ZiweiConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (config, ignored) = ZiweiConfig::from_toml_str(&text, path)?;
    for key in &ignored {
        warn!(path = %path.display(), key = key.as_str(), "unknown config key ignored");
    }
    debug!(
        path = %path.display(),
        explanations = config.explanations.len(),
        "config loaded"
    );
    Ok(config)
}

/// Load `path` if given and present, otherwise use defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<ZiweiConfig, ConfigError> {
    match path {
        Some(p) if p.exists() => load(p),
        Some(p) => {
            debug!(path = %p.display(), "config file absent, using defaults");
            Ok(ZiweiConfig::default())
        }
        None => Ok(ZiweiConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use ziwei_base::{
        AnnualAnchor, ExplanationLookup, HouseName, Stem, TaichiMode, Transformation,
    };

    fn p() -> PathBuf {
        PathBuf::from("test.toml")
    }

    #[test]
    fn empty_text_is_default() {
        let (c, ignored) = ZiweiConfig::from_toml_str("", &p()).unwrap();
        assert_eq!(c, ZiweiConfig::default());
        assert!(ignored.is_empty());
        assert_eq!(c.log.filter, "info");
        assert!(c.chart.apply_natal_transformations);
    }

    #[test]
    fn sections_parse() {
        let text = r#"
[chart]
taichi = "compose"
annual_anchor = "cyclic_label"

[log]
filter = "ziwei_base=debug"
ansi = false

[[explanations]]
stem = "甲"
kind = "化祿"
house = "財帛宮"
phenomenon = "財源廣進"
"#;
        let (c, _) = ZiweiConfig::from_toml_str(text, &p()).unwrap();
        assert_eq!(c.chart.taichi, TaichiMode::Compose);
        assert_eq!(c.chart.annual_anchor, AnnualAnchor::CyclicLabel);
        assert_eq!(c.log.ansi, Some(false));
        let table = c.guidance_table().unwrap();
        let g = table
            .lookup(Stem::Jia, Transformation::Lu, HouseName::Wealth)
            .unwrap();
        assert_eq!(g.phenomenon, "財源廣進");
    }

    #[test]
    fn unknown_keys_are_reported_not_fatal() {
        let text = "[chart]\ncolour = \"red\"\n[extra]\nx = 1\n";
        let (_, ignored) = ZiweiConfig::from_toml_str(text, &p()).unwrap();
        assert_eq!(ignored, vec!["chart.colour".to_string(), "extra".to_string()]);
    }

    #[test]
    fn bad_value_is_parse_error() {
        let text = "[chart]\ntaichi = \"sideways\"\n";
        let err = ZiweiConfig::from_toml_str(text, &p()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_falls_back() {
        let c = load_or_default(Some(Path::new("/nonexistent/ziwei.toml"))).unwrap();
        assert_eq!(c, ZiweiConfig::default());
        assert!(matches!(
            load(Path::new("/nonexistent/ziwei.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
