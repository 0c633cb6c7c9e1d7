use ssbond::core::models::origin::StructureOrigin;
use ssbond::engine::config::DetectionConfig;
use std::path::PathBuf;

/// Fully resolved settings for one `detect` run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_path: PathBuf,
    /// Directory for the PyMOL script; empty means the current directory.
    pub output_dir: PathBuf,
    pub csv_path: Option<PathBuf>,
    pub show_ci: bool,
    /// Forced origin; `None` detects it from the header.
    pub origin: Option<StructureOrigin>,
    pub prediction_markers: Vec<String>,
    pub detection: DetectionConfig,
}
