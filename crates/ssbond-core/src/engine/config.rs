use crate::engine::bond::Tier;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Slack applied to band edges so values computed at a boundary are not lost to rounding.
///
/// Measured values are products of `sqrt` and `atan2` over coordinates with
/// three decimals, so anything closer than this to an edge is already below
/// the precision of the input.
pub const BOUND_TOLERANCE: f64 = 1e-9;

pub const DEFAULT_DISTANCE_BAND: Band = Band { lo: 1.5, hi: 2.5 };
pub const DEFAULT_ANGLE_BAND: Band = Band { lo: 84.0, hi: 96.0 };
pub const DEFAULT_DISTANCE_CI: f64 = 0.1;
pub const DEFAULT_ANGLE_CI: f64 = 5.0;
pub const DEFAULT_MAX_B_FACTOR: f64 = 30.0;
pub const DEFAULT_MIN_PLDDT: f64 = 50.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Parameter '{name}' must be a finite number (got {value})")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Lower bound of '{name}' exceeds its upper bound ({lo} > {hi})")]
    InvertedBand { name: &'static str, lo: f64, hi: f64 },

    #[error("Confidence-interval half-width '{name}' must not be negative (got {value})")]
    NegativeHalfWidth { name: &'static str, value: f64 },

    #[error("Distances cannot be negative: '{name}' starts at {lo}")]
    NegativeDistance { name: &'static str, lo: f64 },
}

/// A closed interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub lo: f64,
    pub hi: f64,
}

impl Band {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Whether `value` lies in the band, edges included (within [`BOUND_TOLERANCE`]).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo - BOUND_TOLERANCE && value <= self.hi + BOUND_TOLERANCE
    }

    /// The band grown by `half_width` on both sides.
    pub fn widened(&self, half_width: f64) -> Band {
        Band {
            lo: self.lo - half_width,
            hi: self.hi + half_width,
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        for value in [self.lo, self.hi] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if self.lo > self.hi {
            return Err(ConfigError::InvertedBand {
                name,
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Per-origin cutoffs on a residue's mean atomic quality score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityThresholds {
    /// Experimental structures keep residues whose mean B-factor is at most this.
    pub max_b_factor: f64,
    /// Predicted structures keep residues whose mean confidence is at least this.
    pub min_plddt: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            max_b_factor: DEFAULT_MAX_B_FACTOR,
            min_plddt: DEFAULT_MIN_PLDDT,
        }
    }
}

/// How residue pairs are enumerated during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairScan {
    /// Each unordered pair once, `i < j`. Every pair is measured exactly once.
    #[default]
    Canonical,
    /// The full ordered product including self-pairs. Each bond is found in
    /// both directions and collapsed by deduplication.
    FullMatrix,
}

/// Immutable parameters of a detection run.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionConfig {
    pub distance: Band,
    pub angle: Band,
    pub distance_ci: f64,
    pub angle_ci: f64,
    pub quality: QualityThresholds,
    pub pair_scan: PairScan,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE_BAND,
            angle: DEFAULT_ANGLE_BAND,
            distance_ci: DEFAULT_DISTANCE_CI,
            angle_ci: DEFAULT_ANGLE_CI,
            quality: QualityThresholds::default(),
            pair_scan: PairScan::default(),
        }
    }
}

impl DetectionConfig {
    /// The distance band widened by the distance confidence interval.
    pub fn widened_distance(&self) -> Band {
        self.distance.widened(self.distance_ci)
    }

    /// The angle band widened by the angle confidence interval.
    pub fn widened_angle(&self) -> Band {
        self.angle.widened(self.angle_ci)
    }

    /// Assigns a measured pair to a tier, if any.
    ///
    /// The strict bands are checked first; the widened bands are only
    /// consulted for pairs that fail them, so a pair lands in at most one tier.
    pub fn classify(&self, distance: f64, angle: f64) -> Option<Tier> {
        if self.distance.contains(distance) && self.angle.contains(angle) {
            Some(Tier::Strict)
        } else if self.widened_distance().contains(distance) && self.widened_angle().contains(angle)
        {
            Some(Tier::ConfidenceInterval)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.distance.validate("distance")?;
        self.angle.validate("angle")?;
        for (name, value) in [
            ("distance-ci", self.distance_ci),
            ("angle-ci", self.angle_ci),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeHalfWidth { name, value });
            }
        }
        for (name, value) in [
            ("max-b-factor", self.quality.max_b_factor),
            ("min-plddt", self.quality.min_plddt),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if self.distance.lo < 0.0 {
            return Err(ConfigError::NegativeDistance {
                name: "distance",
                lo: self.distance.lo,
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct DetectionConfigBuilder {
    distance: Option<Band>,
    angle: Option<Band>,
    distance_ci: Option<f64>,
    angle_ci: Option<f64>,
    quality: Option<QualityThresholds>,
    pair_scan: Option<PairScan>,
}

impl DetectionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance(mut self, band: Band) -> Self {
        self.distance = Some(band);
        self
    }
    pub fn angle(mut self, band: Band) -> Self {
        self.angle = Some(band);
        self
    }
    pub fn distance_ci(mut self, half_width: f64) -> Self {
        self.distance_ci = Some(half_width);
        self
    }
    pub fn angle_ci(mut self, half_width: f64) -> Self {
        self.angle_ci = Some(half_width);
        self
    }
    pub fn quality(mut self, thresholds: QualityThresholds) -> Self {
        self.quality = Some(thresholds);
        self
    }
    pub fn pair_scan(mut self, scan: PairScan) -> Self {
        self.pair_scan = Some(scan);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// Geometric bands are required; quality thresholds and the pair scan
    /// fall back to their defaults.
    pub fn build(self) -> Result<DetectionConfig, ConfigError> {
        let config = DetectionConfig {
            distance: self
                .distance
                .ok_or(ConfigError::MissingParameter("distance"))?,
            angle: self.angle.ok_or(ConfigError::MissingParameter("angle"))?,
            distance_ci: self
                .distance_ci
                .ok_or(ConfigError::MissingParameter("distance_ci"))?,
            angle_ci: self
                .angle_ci
                .ok_or(ConfigError::MissingParameter("angle_ci"))?,
            quality: self.quality.unwrap_or_default(),
            pair_scan: self.pair_scan.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
