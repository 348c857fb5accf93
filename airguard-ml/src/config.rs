//! Predictor configuration
//!
//! ```json
//! {
//!   "classifier": "artifacts/forest.json",
//!   "decoder": "artifacts/labels.json",
//!   "regions": "artifacts/regions.json",
//!   "enforce_limits": true,
//!   "limits": { "so2": { "min": 0, "max": 200 } }
//! }
//! ```
//!
//! Only `classifier` and `decoder` are required. Omitted limits fall back
//! to [`ReadingLimits::default`] per metric. Relative paths in a file
//! loaded with [`PredictorConfig::from_path`] are resolved against the
//! file's directory.

use std::path::{Path, PathBuf};

use airguard_core::ReadingLimits;
use serde::{Deserialize, Serialize};

use crate::{loader::read_json, ArtifactResult};

/// Everything needed to build a predictor at start-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Classifier artifact
    pub classifier: PathBuf,
    /// Label decoder artifact
    pub decoder: PathBuf,
    /// Optional region profile table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<PathBuf>,
    /// Declared valid range per metric
    #[serde(default)]
    pub limits: ReadingLimits,
    /// Reject out-of-range readings before classification
    #[serde(default)]
    pub enforce_limits: bool,
}

impl PredictorConfig {
    /// Configuration with the two required artifacts and default limits
    pub fn new(classifier: impl Into<PathBuf>, decoder: impl Into<PathBuf>) -> Self {
        Self {
            classifier: classifier.into(),
            decoder: decoder.into(),
            regions: None,
            limits: ReadingLimits::default(),
            enforce_limits: false,
        }
    }

    /// Parse from JSON; paths are used as written
    pub fn from_json_str(json: &str) -> ArtifactResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from disk, resolving relative paths against the file's directory
    pub fn from_path(path: impl AsRef<Path>) -> ArtifactResult<Self> {
        let path = path.as_ref();
        let config: Self = read_json(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_against(base))
    }

    /// Prefix relative artifact paths with `base`
    pub fn resolve_against(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.classifier = resolve(self.classifier);
        self.decoder = resolve(self.decoder);
        self.regions = self.regions.map(resolve);
        self
    }

    /// Set the region table
    pub fn with_regions(mut self, path: impl Into<PathBuf>) -> Self {
        self.regions = Some(path.into());
        self
    }

    /// Set the valid ranges
    pub fn with_limits(mut self, limits: ReadingLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Turn range enforcement on or off
    pub fn enforce_limits(mut self, enforce: bool) -> Self {
        self.enforce_limits = enforce;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArtifactError;
    use airguard_core::{Metric, ValidRange};

    #[test]
    fn minimal_config_uses_defaults() {
        let config =
            PredictorConfig::from_json_str(r#"{"classifier":"m.json","decoder":"l.json"}"#).unwrap();
        assert_eq!(config, PredictorConfig::new("m.json", "l.json"));
        assert!(!config.enforce_limits);
    }

    #[test]
    fn partial_limits_keep_other_defaults() {
        let config = PredictorConfig::from_json_str(
            r#"{"classifier":"m.json","decoder":"l.json","limits":{"co":{"min":0,"max":410}}}"#,
        )
        .unwrap();
        assert_eq!(config.limits.range(Metric::Co), ValidRange::new(0.0, 410.0));
        assert_eq!(config.limits.range(Metric::So2), ReadingLimits::default().so2);
    }

    #[test]
    fn inverted_limit_fails_to_load() {
        let result = PredictorConfig::from_json_str(
            r#"{"classifier":"m.json","decoder":"l.json","limits":{"so2":{"min":200,"max":0}}}"#,
        );
        assert!(matches!(result, Err(ArtifactError::Json(_))));
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let config = PredictorConfig::new("m.json", "/abs/l.json")
            .with_regions("r.json")
            .resolve_against(Path::new("/etc/airguard"));
        assert_eq!(config.classifier, PathBuf::from("/etc/airguard/m.json"));
        assert_eq!(config.decoder, PathBuf::from("/abs/l.json"));
        assert_eq!(config.regions, Some(PathBuf::from("/etc/airguard/r.json")));
    }
}
