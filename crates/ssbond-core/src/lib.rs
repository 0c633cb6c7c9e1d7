//! # SSBond Core Library
//!
//! Detection of candidate disulfide bonds in protein structures from the
//! geometry of cysteine side chains.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so each concern can be
//! tested on its own.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MolecularSystem`),
//!   coordinate geometry, PDB reading, PyMOL script generation and report datasets.
//!
//! - **[`engine`]: The Logic Core.** Detection thresholds, bond types and the
//!   pipeline stages: cysteine selection, quality filtering, pairwise
//!   classification into strict and confidence-interval tiers, deduplication.
//!
//! - **[`workflows`]: The Public API.** The [`workflows::detect`] workflow runs
//!   the stages in order over one structure and returns both bond sets.
//!
//! ## Example
//!
//! ```ignore
//! use ssbond::core::io::pdb::PdbFile;
//! use ssbond::core::io::traits::MolecularFile;
//! use ssbond::core::models::origin::DEFAULT_PREDICTION_MARKERS;
//! use ssbond::engine::config::DetectionConfig;
//! use ssbond::engine::progress::ProgressReporter;
//! use ssbond::workflows::detect;
//!
//! let (system, metadata) = PdbFile::read_from_path("1abc.pdb")?;
//! let origin = metadata.detect_origin(DEFAULT_PREDICTION_MARKERS);
//! let result = detect::run(&system, origin, &DetectionConfig::default(), &ProgressReporter::new())?;
//! for bond in &result.strict {
//!     println!("{} - {}: {:.3} Å", bond.cys1.key, bond.cys2.key, bond.distance);
//! }
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
