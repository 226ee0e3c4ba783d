//! Engine options shared by the builder, the chart session and config files.

use serde::{Deserialize, Serialize};

/// How [`Chart::taichi`](crate::chart::Chart::taichi) picks the ring to rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaichiMode {
    /// Always rotate a fresh copy of the natal ring.
    #[default]
    FromNatal,
    /// Rotate the working ring, so successive rotations compose.
    Compose,
}

/// Which rule fixes the branch of an annual fortune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnualAnchor {
    /// `(year - 1900) mod 12` counted from 子.
    #[default]
    Epoch1900,
    /// The branch of a sexagenary label supplied with the request.
    CyclicLabel,
}

/// Chart construction and session options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Tag the natal year stem's four transformations during `build`.
    pub apply_natal_transformations: bool,
    pub taichi: TaichiMode,
    pub annual_anchor: AnnualAnchor,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            apply_natal_transformations: true,
            taichi: TaichiMode::FromNatal,
            annual_anchor: AnnualAnchor::Epoch1900,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = ChartOptions::default();
        assert!(o.apply_natal_transformations);
        assert_eq!(o.taichi, TaichiMode::FromNatal);
        assert_eq!(o.annual_anchor, AnnualAnchor::Epoch1900);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let o: ChartOptions = serde_json::from_str(r#"{"taichi":"compose"}"#).unwrap();
        assert_eq!(o.taichi, TaichiMode::Compose);
        assert!(o.apply_natal_transformations);
    }
}
