//! # Core Module
//!
//! Stateless building blocks: the structure data model, file and script I/O,
//! and coordinate geometry.
//!
//! - **Structure Representation** ([`models`]) - Atoms, residues, chains and systems
//! - **File I/O** ([`io`]) - PDB reading, visualization scripts and report datasets
//! - **Geometry** ([`utils`]) - Distances and torsion angles

pub mod io;
pub mod models;
pub mod utils;
