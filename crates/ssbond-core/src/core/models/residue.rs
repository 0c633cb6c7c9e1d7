use super::ids::{AtomId, ChainId};
use std::collections::HashMap;
use std::fmt;

/// Three-letter residue code that marks a residue as a cysteine.
pub const CYSTEINE_CODE: &str = "CYS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub residue_number: isize,                   // Residue sequence number from source file
    pub insertion_code: Option<char>,            // PDB insertion code, if any
    pub name: String,                            // Name of the residue (e.g., "CYS", "GLY")
    pub chain_id: ChainId,                       // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>,               // Atoms belonging to this residue, in file order
    atom_name_map: HashMap<String, Vec<AtomId>>, // Atom name to every atom carrying it
}

impl Residue {
    pub(crate) fn new(
        residue_number: isize,
        insertion_code: Option<char>,
        name: &str,
        chain_id: ChainId,
    ) -> Self {
        Self {
            residue_number,
            insertion_code,
            name: name.to_string(),
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.push(atom_id);
        self.atom_name_map
            .entry(atom_name.to_string())
            .or_default()
            .push(atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn is_cysteine(&self) -> bool {
        self.name == CYSTEINE_CODE
    }

    /// Returns every atom of this residue carrying `name`.
    ///
    /// A well-formed residue has at most one atom per name, but duplicated
    /// records do occur in real files, so callers that need exactly one atom
    /// should check the length of the returned slice.
    pub fn atom_ids_by_name(&self, name: &str) -> &[AtomId] {
        self.atom_name_map
            .get(name)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_atom_named(&self, name: &str) -> bool {
        !self.atom_ids_by_name(name).is_empty()
    }
}

/// Stable, human-readable identity of a residue: chain, sequence number and
/// insertion code.
///
/// Unlike [`super::ids::ResidueId`], which is only meaningful for the system
/// that issued it, a `ResidueKey` can be compared, hashed, sorted and printed
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueKey {
    pub chain_id: char,
    pub residue_number: isize,
    pub insertion_code: Option<char>,
}

impl ResidueKey {
    pub fn new(chain_id: char, residue_number: isize) -> Self {
        Self {
            chain_id,
            residue_number,
            insertion_code: None,
        }
    }

    /// The residue number as written in a `resi` selector (e.g. `52` or `52A`).
    pub fn resi(&self) -> String {
        match self.insertion_code {
            Some(code) => format!("{}{}", self.residue_number, code),
            None => self.residue_number.to_string(),
        }
    }

    pub fn has_chain(&self) -> bool {
        !self.chain_id.is_whitespace()
    }
}

impl fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_chain() {
            write!(f, "{}:{}", self.chain_id, self.resi())
        } else {
            write!(f, "{}", self.resi())
        }
    }
}
