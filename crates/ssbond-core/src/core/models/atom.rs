use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents a single atom read from a structure file.
///
/// Besides its identity and coordinates, every atom carries the per-atom
/// quality score stored in the temperature-factor column of the source file.
/// For experimentally determined structures this is the crystallographic
/// B-factor; for predicted models it is the per-residue confidence (pLDDT)
/// replicated across the residue's atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Serial number from the source file.
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "CB", "SG").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Occupancy of this conformer (1.0 when the file omits it).
    pub occupancy: f64,
    /// B-factor or predicted confidence, depending on the structure origin.
    pub quality: f64,
    /// Element symbol, empty when the file does not provide one.
    pub element: String,
}

impl Atom {
    /// Creates a new `Atom` with a zero quality score and full occupancy.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            serial: 0,
            name: name.to_string(),
            residue_id,
            position,
            occupancy: 1.0,
            quality: 0.0,
            element: String::new(),
        }
    }

    /// Returns the atom with its quality score replaced.
    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = quality;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ids::ResidueId;
    use nalgebra::Point3;

    #[test]
    fn new_atom_has_expected_default_fields() {
        let residue_id = ResidueId::default();
        let atom = Atom::new("SG", residue_id, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.name, "SG");
        assert_eq!(atom.residue_id, residue_id);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.serial, 0);
        assert_eq!(atom.occupancy, 1.0);
        assert_eq!(atom.quality, 0.0);
        assert!(atom.element.is_empty());
    }

    #[test]
    fn with_quality_overrides_only_the_quality_score() {
        let atom = Atom::new("CB", ResidueId::default(), Point3::origin()).with_quality(42.5);
        assert_eq!(atom.quality, 42.5);
        assert_eq!(atom.name, "CB");
        assert_eq!(atom.occupancy, 1.0);
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let mut atom1 = Atom::new("CA", ResidueId::default(), Point3::new(0.0, 0.0, 0.0));
        atom1.element = "C".to_string();
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
