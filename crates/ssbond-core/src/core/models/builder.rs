use super::atom::Atom;
use super::ids::{AtomId, ChainId, ResidueId};
use super::system::MolecularSystem;
use nalgebra::Point3;

/// Sequential construction of a [`MolecularSystem`], in the order a
/// structure file is read: start a chain, start a residue, add its atoms.
#[derive(Debug, Default)]
pub struct MolecularSystemBuilder {
    system: MolecularSystem,
    current_chain: Option<ChainId>,
    current_residue: Option<ResidueId>,
}

/// Per-atom fields a reader hands to [`MolecularSystemBuilder::add_atom`].
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord<'a> {
    pub serial: usize,
    pub name: &'a str,
    pub position: Point3<f64>,
    pub occupancy: f64,
    pub quality: f64,
    pub element: &'a str,
}

impl MolecularSystemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_chain(&mut self, id: char) -> &mut Self {
        self.current_chain = Some(self.system.add_chain(id));
        self.current_residue = None;
        self
    }

    /// Starts (or resumes) a residue in the current chain.
    ///
    /// Returns `None` if no chain has been started.
    pub fn start_residue(
        &mut self,
        residue_number: isize,
        insertion_code: Option<char>,
        name: &str,
    ) -> Option<ResidueId> {
        let chain_id = self.current_chain?;
        let residue_id =
            self.system
                .add_residue(chain_id, residue_number, insertion_code, name)?;
        self.current_residue = Some(residue_id);
        Some(residue_id)
    }

    /// Returns `true` if the current residue already holds an atom called `name`.
    pub fn current_residue_has_atom(&self, name: &str) -> bool {
        self.current_residue
            .and_then(|id| self.system.residue(id))
            .is_some_and(|residue| residue.has_atom_named(name))
    }

    /// Adds an atom to the current residue.
    ///
    /// Returns `None` if no residue has been started.
    pub fn add_atom(&mut self, record: AtomRecord<'_>) -> Option<AtomId> {
        let residue_id = self.current_residue?;
        let atom = Atom {
            serial: record.serial,
            name: record.name.to_string(),
            residue_id,
            position: record.position,
            occupancy: record.occupancy,
            quality: record.quality,
            element: record.element.to_string(),
        };
        self.system.add_atom_to_residue(residue_id, atom)
    }

    pub fn build(self) -> MolecularSystem {
        self.system
    }
}
