//! Input and output for the detection pipeline.
//!
//! Structures come in through the [`traits::MolecularFile`] interface
//! ([`pdb`] implements it for PDB and mmCIF files). Results go out as PyMOL scripts
//! ([`pymol`]) and tabular report datasets ([`report`]).

pub mod pdb;
pub mod pymol;
pub mod report;
pub mod traits;
