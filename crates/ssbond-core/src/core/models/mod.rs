//! # Core Models Module
//!
//! Data structures describing a protein structure as read from disk.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atoms with coordinates and a per-atom quality score
//! - [`residue`] - Residues, atom-name lookup and the printable [`residue::ResidueKey`]
//! - [`chain`] - Ordered residue lists per chain
//! - [`system`] - The arena-backed [`system::MolecularSystem`]
//! - [`builder`] - Sequential construction used by file readers
//! - [`origin`] - Experimental versus predicted structures
//! - [`ids`] - Typed slot-map keys for atoms, residues and chains
//!
//! ## Usage
//!
//! ```ignore
//! use ssbond::core::models::{atom::Atom, system::MolecularSystem};
//!
//! let mut system = MolecularSystem::new();
//! let chain_id = system.add_chain('A');
//! let residue_id = system.add_residue(chain_id, 1, None, "CYS").unwrap();
//! system.add_atom_to_residue(residue_id, Atom::new("SG", residue_id, Point3::origin()));
//! ```

pub mod atom;
pub mod builder;
pub mod chain;
pub mod ids;
pub mod origin;
pub mod residue;
pub mod system;
