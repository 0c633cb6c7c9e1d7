use ssbond::core::models::origin::{DEFAULT_PREDICTION_MARKERS, StructureOrigin};
use ssbond::engine::config::{
    Band, DEFAULT_ANGLE_BAND, DEFAULT_ANGLE_CI, DEFAULT_DISTANCE_BAND, DEFAULT_DISTANCE_CI,
    PairScan, QualityThresholds,
};

/// Lowest-precedence configuration layer.
pub struct DefaultsConfig {
    pub distance: Band,
    pub angle: Band,
    pub distance_ci: f64,
    pub angle_ci: f64,
    pub quality: QualityThresholds,
    pub pair_scan: PairScan,
    pub show_ci: bool,
    /// `None` detects the origin from the file header.
    pub origin: Option<StructureOrigin>,
    pub prediction_markers: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE_BAND,
            angle: DEFAULT_ANGLE_BAND,
            distance_ci: DEFAULT_DISTANCE_CI,
            angle_ci: DEFAULT_ANGLE_CI,
            quality: QualityThresholds::default(),
            pair_scan: PairScan::default(),
            show_ci: false,
            origin: None,
            prediction_markers: DEFAULT_PREDICTION_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}
