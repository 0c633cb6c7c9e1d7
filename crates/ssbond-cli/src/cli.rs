use crate::utils::parser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ssbond::engine::config::Band;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "SSBond Developers",
    version,
    about = "SSBond CLI - Detect potential disulfide bonds between cysteine residues in protein structures and visualize them in PyMOL.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect potential disulfide bonds in a PDB structure and write a PyMOL script.
    Detect(DetectArgs),
    /// Print the built-in default configuration as TOML.
    Defaults,
}

/// Where the structure's origin comes from.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OriginArg {
    /// Detect from the PDB header (AlphaFold models are treated as predicted).
    #[default]
    Auto,
    /// Treat the quality column as B-factors.
    Experimental,
    /// Treat the quality column as predicted confidence (pLDDT).
    Predicted,
}

/// Arguments for the `detect` subcommand.
#[derive(Args, Debug)]
pub struct DetectArgs {
    // --- Core Arguments ---
    /// Path to the input PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Directory for the generated PyMOL script (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write both bond tables to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    // --- Threshold Overrides ---
    /// Strict S-S distance band in Å, e.g. "(1.5,2.5)".
    #[arg(short, long, value_name = "(MIN,MAX)", value_parser = parser::parse_band, allow_hyphen_values = true)]
    pub distance: Option<Band>,

    /// Strict C_β-S_γ-S_γ-C_β dihedral band in degrees, e.g. "(84,96)".
    #[arg(short, long, value_name = "(MIN,MAX)", value_parser = parser::parse_band, allow_hyphen_values = true)]
    pub angle: Option<Band>,

    /// Confidence interval added below and above the distance band, in Å.
    #[arg(short = 'D', long, value_name = "FLOAT")]
    pub distance_ci: Option<f64>,

    /// Confidence interval added below and above the angle band, in degrees.
    #[arg(short = 'A', long, value_name = "FLOAT")]
    pub angle_ci: Option<f64>,

    // --- Quality Overrides ---
    /// Highest mean B-factor a cysteine of an experimental structure may have.
    #[arg(long, value_name = "FLOAT")]
    pub max_b_factor: Option<f64>,

    /// Lowest mean pLDDT a cysteine of a predicted structure may have.
    #[arg(long, value_name = "FLOAT")]
    pub min_plddt: Option<f64>,

    /// How to decide whether the structure is experimental or predicted.
    #[arg(long, value_enum, value_name = "ORIGIN")]
    pub origin: Option<OriginArg>,

    // --- Output Overrides ---
    /// Include confidence-interval bonds in the PyMOL script.
    #[arg(long)]
    pub show_ci: bool,

    /// Scan the full ordered pair matrix instead of each unordered pair once.
    #[arg(long)]
    pub full_matrix: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S thresholds.angle-ci=7.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
