use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::{DetectArgs, OriginArg};
use crate::error::{CliError, Result};
use crate::utils::parser;
use ssbond::core::models::origin::StructureOrigin;
use ssbond::engine::config::{Band, DetectionConfigBuilder, PairScan, QualityThresholds};
use std::path::PathBuf;

pub fn build_config(args: &DetectArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let thresholds_file = file_config.thresholds.take().unwrap_or_default();
    let distance = args
        .distance
        .or(thresholds_file.distance.map(band_from_pair))
        .unwrap_or(defaults.distance);
    let angle = args
        .angle
        .or(thresholds_file.angle.map(band_from_pair))
        .unwrap_or(defaults.angle);
    let distance_ci = args
        .distance_ci
        .or(thresholds_file.distance_ci)
        .unwrap_or(defaults.distance_ci);
    let angle_ci = args
        .angle_ci
        .or(thresholds_file.angle_ci)
        .unwrap_or(defaults.angle_ci);

    let quality_file = file_config.quality.take().unwrap_or_default();
    let quality = QualityThresholds {
        max_b_factor: args
            .max_b_factor
            .or(quality_file.max_b_factor)
            .unwrap_or(defaults.quality.max_b_factor),
        min_plddt: args
            .min_plddt
            .or(quality_file.min_plddt)
            .unwrap_or(defaults.quality.min_plddt),
    };

    let pair_scan = if args.full_matrix {
        PairScan::FullMatrix
    } else {
        match file_config.pair_scan.as_deref() {
            Some(value) => parser::parse_pair_scan(value).map_err(argument_error)?,
            None => defaults.pair_scan,
        }
    };

    let origin = match args.origin {
        Some(arg) => origin_from_arg(arg),
        None => match file_config.origin.as_deref() {
            Some(value) => parser::parse_origin(value).map_err(argument_error)?,
            None => defaults.origin,
        },
    };

    let output_file = file_config.output.take().unwrap_or_default();
    let show_ci = args.show_ci || output_file.show_ci.unwrap_or(defaults.show_ci);
    let output_dir = args
        .output
        .clone()
        .or(output_file.directory.map(PathBuf::from))
        .unwrap_or_default();
    let csv_path = args.csv.clone().or(output_file.csv.map(PathBuf::from));

    let prediction_markers = file_config
        .prediction_markers
        .take()
        .unwrap_or(defaults.prediction_markers);

    let detection = DetectionConfigBuilder::new()
        .distance(distance)
        .angle(angle)
        .distance_ci(distance_ci)
        .angle_ci(angle_ci)
        .quality(quality)
        .pair_scan(pair_scan)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_dir,
        csv_path,
        show_ci,
        origin,
        prediction_markers,
        detection,
    })
}

fn band_from_pair([lo, hi]: [f64; 2]) -> Band {
    Band::new(lo, hi)
}

fn origin_from_arg(arg: OriginArg) -> Option<StructureOrigin> {
    match arg {
        OriginArg::Auto => None,
        OriginArg::Experimental => Some(StructureOrigin::Experimental),
        OriginArg::Predicted => Some(StructureOrigin::Predicted),
    }
}

fn argument_error(e: parser::ParseError) -> CliError {
    CliError::Argument(e.to_string())
}

fn parse_float(key: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid float value for {}: {}", key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key.trim() {
            "origin" => {
                parser::parse_origin(value_str).map_err(argument_error)?;
                config.origin = Some(value_str.trim().to_string());
            }
            "pair-scan" => {
                parser::parse_pair_scan(value_str).map_err(argument_error)?;
                config.pair_scan = Some(value_str.trim().to_string());
            }
            "prediction-markers" => {
                config.prediction_markers = Some(
                    value_str
                        .split(',')
                        .map(str::trim)
                        .filter(|m| !m.is_empty())
                        .map(String::from)
                        .collect(),
                );
            }
            "thresholds.distance" => {
                let band = parser::parse_band(value_str).map_err(argument_error)?;
                config
                    .thresholds
                    .get_or_insert_with(Default::default)
                    .distance = Some([band.lo, band.hi]);
            }
            "thresholds.angle" => {
                let band = parser::parse_band(value_str).map_err(argument_error)?;
                config.thresholds.get_or_insert_with(Default::default).angle =
                    Some([band.lo, band.hi]);
            }
            "thresholds.distance-ci" => {
                config
                    .thresholds
                    .get_or_insert_with(Default::default)
                    .distance_ci = Some(parse_float(key, value_str)?);
            }
            "thresholds.angle-ci" => {
                config
                    .thresholds
                    .get_or_insert_with(Default::default)
                    .angle_ci = Some(parse_float(key, value_str)?);
            }
            "quality.max-b-factor" => {
                config
                    .quality
                    .get_or_insert_with(Default::default)
                    .max_b_factor = Some(parse_float(key, value_str)?);
            }
            "quality.min-plddt" => {
                config.quality.get_or_insert_with(Default::default).min_plddt =
                    Some(parse_float(key, value_str)?);
            }
            "output.directory" => {
                config.output.get_or_insert_with(Default::default).directory =
                    Some(value_str.to_string());
            }
            "output.csv" => {
                config.output.get_or_insert_with(Default::default).csv = Some(value_str.to_string());
            }
            "output.show-ci" => {
                config.output.get_or_insert_with(Default::default).show_ci =
                    Some(parser::parse_bool(value_str).map_err(argument_error)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
