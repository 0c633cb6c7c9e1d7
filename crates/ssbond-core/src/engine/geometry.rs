//! Disulfide geometry for a pair of cysteine residues.

use crate::core::models::ids::{AtomId, ResidueId};
use crate::core::models::residue::ResidueKey;
use crate::core::models::system::MolecularSystem;
use crate::core::utils::geometry;
use crate::engine::error::EngineError;
use nalgebra::Point3;

pub const BETA_CARBON: &str = "CB";
pub const GAMMA_SULFUR: &str = "SG";
pub const ALPHA_CARBON: &str = "CA";

/// The side-chain atoms of one cysteine that take part in a disulfide bond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CysteineAtoms {
    pub residue_id: ResidueId,
    pub key: ResidueKey,
    pub beta_carbon: Point3<f64>,
    pub gamma_sulfur: Point3<f64>,
}

/// Distance and torsion measured for one residue pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisulfideGeometry {
    /// S_γ1–S_γ2 distance in Å.
    pub distance: f64,
    /// Unsigned C_β1–S_γ1–S_γ2–C_β2 torsion in degrees.
    pub dihedral_angle: f64,
}

impl CysteineAtoms {
    /// Locates C_β and S_γ of a cysteine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StructureIntegrity`] unless the residue holds
    /// exactly one atom of each name.
    pub fn resolve(system: &MolecularSystem, residue_id: ResidueId) -> Result<Self, EngineError> {
        let key = system.residue_key(residue_id).ok_or_else(|| {
            EngineError::Internal(format!("residue {:?} is not part of the system", residue_id))
        })?;
        let beta_carbon = unique_atom_position(system, residue_id, key, BETA_CARBON)?;
        let gamma_sulfur = unique_atom_position(system, residue_id, key, GAMMA_SULFUR)?;
        Ok(Self {
            residue_id,
            key,
            beta_carbon,
            gamma_sulfur,
        })
    }

    /// Measures the pair in the fixed atom order (C_β1, S_γ1, S_γ2, C_β2).
    pub fn measure(&self, other: &CysteineAtoms) -> DisulfideGeometry {
        DisulfideGeometry {
            distance: geometry::distance(&self.gamma_sulfur, &other.gamma_sulfur),
            dihedral_angle: geometry::unsigned_dihedral_angle(
                &self.beta_carbon,
                &self.gamma_sulfur,
                &other.gamma_sulfur,
                &other.beta_carbon,
            ),
        }
    }
}

fn unique_atom_position(
    system: &MolecularSystem,
    residue_id: ResidueId,
    key: ResidueKey,
    name: &str,
) -> Result<Point3<f64>, EngineError> {
    let residue = system
        .residue(residue_id)
        .ok_or_else(|| EngineError::Internal(format!("residue {} vanished", key)))?;
    let atom_id: AtomId = match residue.atom_ids_by_name(name) {
        [only] => *only,
        [] => {
            return Err(EngineError::StructureIntegrity {
                residue: key,
                reason: format!("no {} atom", name),
            });
        }
        many => {
            return Err(EngineError::StructureIntegrity {
                residue: key,
                reason: format!("{} {} atoms, expected exactly one", many.len(), name),
            });
        }
    };
    system
        .atom(atom_id)
        .map(|atom| atom.position)
        .ok_or_else(|| EngineError::Internal(format!("atom {} of {} vanished", name, key)))
}

/// Unsigned C_β1–S_γ1–S_γ2–C_β2 torsion of two cysteines, in degrees.
pub fn dihedral(
    system: &MolecularSystem,
    cys1: ResidueId,
    cys2: ResidueId,
) -> Result<f64, EngineError> {
    let a = CysteineAtoms::resolve(system, cys1)?;
    let b = CysteineAtoms::resolve(system, cys2)?;
    Ok(a.measure(&b).dihedral_angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;

    fn add_residue(
        system: &mut MolecularSystem,
        number: isize,
        atoms: &[(&str, Point3<f64>)],
    ) -> ResidueId {
        let chain_id = system.add_chain('A');
        let residue_id = system.add_residue(chain_id, number, None, "CYS").unwrap();
        for (name, position) in atoms {
            system
                .add_atom_to_residue(residue_id, Atom::new(name, residue_id, *position))
                .unwrap();
        }
        residue_id
    }

    fn disulfide_pair(distance: f64, theta_degrees: f64) -> (MolecularSystem, ResidueId, ResidueId) {
        let theta = theta_degrees.to_radians();
        let mut system = MolecularSystem::new();
        let a = add_residue(
            &mut system,
            1,
            &[
                (BETA_CARBON, Point3::new(0.0, 1.8, 0.0)),
                (GAMMA_SULFUR, Point3::new(0.0, 0.0, 0.0)),
            ],
        );
        let b = add_residue(
            &mut system,
            2,
            &[
                (BETA_CARBON, Point3::new(distance, 1.8 * theta.cos(), 1.8 * theta.sin())),
                (GAMMA_SULFUR, Point3::new(distance, 0.0, 0.0)),
            ],
        );
        (system, a, b)
    }

    #[test]
    fn measure_reports_sulfur_distance_and_torsion() {
        let (system, a, b) = disulfide_pair(2.04, 92.0);
        let atoms_a = CysteineAtoms::resolve(&system, a).unwrap();
        let atoms_b = CysteineAtoms::resolve(&system, b).unwrap();
        let g = atoms_a.measure(&atoms_b);
        assert!((g.distance - 2.04).abs() < 1e-12);
        assert!((g.dihedral_angle - 92.0).abs() < 1e-9);
    }

    #[test]
    fn measurement_is_direction_independent() {
        let (system, a, b) = disulfide_pair(2.1, 97.3);
        let atoms_a = CysteineAtoms::resolve(&system, a).unwrap();
        let atoms_b = CysteineAtoms::resolve(&system, b).unwrap();
        let forward = atoms_a.measure(&atoms_b);
        let backward = atoms_b.measure(&atoms_a);
        assert_eq!(forward.distance, backward.distance);
        assert!((forward.dihedral_angle - backward.dihedral_angle).abs() < 1e-9);
    }

    #[test]
    fn dihedral_is_unsigned_and_in_range() {
        for theta in [-150.0, -90.0, -20.0, 0.0, 45.0, 135.0, 180.0] {
            let (system, a, b) = disulfide_pair(2.0, theta);
            let angle = dihedral(&system, a, b).unwrap();
            assert!((0.0..=180.0).contains(&angle));
            assert!((angle - f64::abs(theta)).abs() < 1e-6);
        }
    }

    #[test]
    fn missing_sulfur_is_an_integrity_error() {
        let mut system = MolecularSystem::new();
        let residue = add_residue(&mut system, 7, &[(BETA_CARBON, Point3::origin())]);
        let err = CysteineAtoms::resolve(&system, residue).unwrap_err();
        match err {
            EngineError::StructureIntegrity { residue, reason } => {
                assert_eq!(residue, ResidueKey::new('A', 7));
                assert!(reason.contains("SG"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicated_beta_carbon_is_an_integrity_error() {
        let mut system = MolecularSystem::new();
        let residue = add_residue(
            &mut system,
            9,
            &[
                (BETA_CARBON, Point3::origin()),
                (BETA_CARBON, Point3::new(0.1, 0.0, 0.0)),
                (GAMMA_SULFUR, Point3::new(1.8, 0.0, 0.0)),
            ],
        );
        let err = CysteineAtoms::resolve(&system, residue).unwrap_err();
        assert!(matches!(err, EngineError::StructureIntegrity { .. }));
        assert!(err.to_string().contains("2 CB atoms"));
    }
}
