use super::defaults::DefaultsConfig;
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use ssbond::engine::config::PairScan;
use std::path::Path;
use tracing::debug;

/// Geometric thresholds as written in a config file. Bands are `[lo, hi]` arrays.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileThresholdsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_ci: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_ci: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileQualityConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_b_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_plddt: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileOutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_ci: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv: Option<String>,
}

/// The TOML configuration file. Every key is optional.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    /// `auto`, `experimental` or `predicted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_markers: Option<Vec<String>>,
    /// `canonical` or `full-matrix`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair_scan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<FileThresholdsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<FileQualityConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The built-in defaults expressed as a complete config file.
    pub fn from_defaults(defaults: &DefaultsConfig) -> Self {
        Self {
            origin: Some(
                defaults
                    .origin
                    .map_or_else(|| "auto".to_string(), |o| o.to_string()),
            ),
            prediction_markers: Some(defaults.prediction_markers.clone()),
            pair_scan: Some(
                match defaults.pair_scan {
                    PairScan::Canonical => "canonical",
                    PairScan::FullMatrix => "full-matrix",
                }
                .to_string(),
            ),
            thresholds: Some(FileThresholdsConfig {
                distance: Some([defaults.distance.lo, defaults.distance.hi]),
                angle: Some([defaults.angle.lo, defaults.angle.hi]),
                distance_ci: Some(defaults.distance_ci),
                angle_ci: Some(defaults.angle_ci),
            }),
            quality: Some(FileQualityConfig {
                max_b_factor: Some(defaults.quality.max_b_factor),
                min_plddt: Some(defaults.quality.min_plddt),
            }),
            output: Some(FileOutputConfig {
                directory: None,
                show_ci: Some(defaults.show_ci),
                csv: None,
            }),
        }
    }

    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_a_partial_file() {
        let config = FileConfig::from_toml_str(
            r#"
            origin = "predicted"

            [thresholds]
            distance = [1.4, 2.7]
            angle-ci = 7.5
            "#,
        )
        .unwrap();

        assert_eq!(config.origin.as_deref(), Some("predicted"));
        let thresholds = config.thresholds.unwrap();
        assert_eq!(thresholds.distance, Some([1.4, 2.7]));
        assert_eq!(thresholds.angle_ci, Some(7.5));
        assert_eq!(thresholds.angle, None);
        assert!(config.quality.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml_str("[thresholds]\ndistnace = [1.0, 2.0]\n").is_err());
        assert!(FileConfig::from_toml_str("verbose = true\n").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[quality]\nmax-b-factor = \"high\"\n").unwrap();

        match FileConfig::from_file(&path) {
            Err(CliError::FileParsing { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a parsing error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_render_as_a_readable_file() {
        let rendered = FileConfig::from_defaults(&DefaultsConfig::default())
            .to_toml_string()
            .unwrap();
        let parsed = FileConfig::from_toml_str(&rendered).unwrap();

        assert_eq!(parsed.pair_scan.as_deref(), Some("canonical"));
        assert_eq!(parsed.origin.as_deref(), Some("auto"));
        assert_eq!(
            parsed.thresholds.as_ref().and_then(|t| t.distance),
            Some([1.5, 2.5])
        );
        assert_eq!(
            parsed.quality.as_ref().and_then(|q| q.max_b_factor),
            Some(30.0)
        );
        assert!(rendered.contains("[thresholds]"));
    }
}
