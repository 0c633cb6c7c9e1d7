use crate::cli::DetectArgs;
use crate::config::builder::build_config;
use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use crate::report;
use crate::utils::progress::CliProgressHandler;
use ssbond::{
    core::io::{
        pdb::PdbFile,
        pymol::{PymolScript, script_output_path},
        report::write_csv,
        traits::MolecularFile,
    },
    engine::progress::ProgressReporter,
    workflows::{self, detect::DetectionResult},
};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub fn run(args: DetectArgs) -> Result<()> {
    info!("Resolving configuration...");
    let config = build_config(&args)?;

    let result = detect(&config, CliProgressHandler::new())?;

    println!("{}", report::render_result(&result));

    let script_path = write_script(&config, &result)?;
    println!("\nPyMOL script written to: {}", script_path.display());

    if let Some(csv_path) = &config.csv_path {
        write_report_csv(csv_path, &result)?;
        println!("Bond tables written to: {}", csv_path.display());
    }

    Ok(())
}

/// Reads the structure and runs the detection workflow.
pub fn detect(config: &AppConfig, progress: CliProgressHandler) -> Result<DetectionResult> {
    info!("Loading input structure from {:?}", &config.input_path);
    let (system, metadata) =
        PdbFile::read_from_path(&config.input_path).map_err(|e| CliError::FileParsing {
            path: config.input_path.clone(),
            source: e.into(),
        })?;

    let origin = config
        .origin
        .unwrap_or_else(|| metadata.detect_origin(config.prediction_markers.as_slice()));
    info!(
        atoms = system.atom_count(),
        %origin,
        "Structure loaded."
    );
    if metadata.models_seen > 1 {
        warn!("Only the first of several models is analysed.");
    }

    let reporter = ProgressReporter::with_callback(progress.get_callback());
    let result = workflows::detect::run(&system, origin, &config.detection, &reporter)?;

    info!(
        strict = result.strict.len(),
        confidence_interval = result.confidence_interval.len(),
        "Detection finished."
    );
    Ok(result)
}

/// Writes the PyMOL script next to the other outputs and returns its path.
pub fn write_script(config: &AppConfig, result: &DetectionResult) -> Result<PathBuf> {
    let structure_path = std::path::absolute(&config.input_path)?;
    let script = PymolScript::generate(&structure_path, &result.visualized_bonds(config.show_ci));

    let script_path = script_output_path(&config.output_dir, &config.input_path)?;
    info!("Writing PyMOL script to {:?}", &script_path);
    script
        .write_to_path(&script_path)
        .map_err(|e| CliError::Output {
            path: script_path.clone(),
            source: e.into(),
        })?;
    Ok(script_path)
}

pub fn write_report_csv(path: &Path, result: &DetectionResult) -> Result<()> {
    info!("Writing bond tables to {:?}", path);
    let file = File::create(path).map_err(|e| CliError::Output {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    write_csv(file, &result.strict, &result.confidence_interval).map_err(|e| CliError::Output {
        path: path.to_path_buf(),
        source: e.into(),
    })
}
