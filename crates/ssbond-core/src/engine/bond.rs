use crate::core::models::ids::ResidueId;
use crate::core::models::residue::ResidueKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold band a candidate bond satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Inside both strict bands.
    Strict,
    /// Outside the strict bands but inside the widened ones; worth a manual look.
    ConfidenceInterval,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Strict => write!(f, "strict"),
            Tier::ConfidenceInterval => write!(f, "confidence-interval"),
        }
    }
}

/// Non-owning reference to a cysteine in the analysed system.
///
/// Carries the slot-map ID for lookups and the printable key for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CysteineRef {
    pub id: ResidueId,
    pub key: ResidueKey,
}

/// One potential disulfide bond between two cysteines.
///
/// `distance` is the S_γ–S_γ distance in Å and `dihedral_angle` the unsigned
/// C_β1–S_γ1–S_γ2–C_β2 torsion in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondCandidate {
    pub cys1: CysteineRef,
    pub cys2: CysteineRef,
    pub distance: f64,
    pub dihedral_angle: f64,
    pub tier: Tier,
}

impl BondCandidate {
    /// Order-independent identity of the residue pair.
    pub fn canonical_key(&self) -> (ResidueKey, ResidueKey) {
        let (a, b) = (self.cys1.key, self.cys2.key);
        if a <= b { (a, b) } else { (b, a) }
    }
}

/// Bonds of one tier with no residue pair repeated.
///
/// Only produced by deduplication, which is what upholds the invariant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BondSet {
    bonds: Vec<BondCandidate>,
}

impl BondSet {
    pub(crate) fn from_unique(bonds: Vec<BondCandidate>) -> Self {
        Self { bonds }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BondCandidate> {
        self.bonds.iter()
    }

    pub fn as_slice(&self) -> &[BondCandidate] {
        &self.bonds
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    /// Whether the set holds a bond between `a` and `b`, in either order.
    pub fn contains_pair(&self, a: &ResidueKey, b: &ResidueKey) -> bool {
        let wanted = if a <= b { (*a, *b) } else { (*b, *a) };
        self.bonds.iter().any(|bond| bond.canonical_key() == wanted)
    }
}

impl<'a> IntoIterator for &'a BondSet {
    type Item = &'a BondCandidate;
    type IntoIter = std::slice::Iter<'a, BondCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.bonds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn cys(n: u64, number: isize) -> CysteineRef {
        CysteineRef {
            id: ResidueId::from(KeyData::from_ffi(n)),
            key: ResidueKey::new('A', number),
        }
    }

    fn candidate(a: CysteineRef, b: CysteineRef) -> BondCandidate {
        BondCandidate {
            cys1: a,
            cys2: b,
            distance: 2.0,
            dihedral_angle: 90.0,
            tier: Tier::Strict,
        }
    }

    #[test]
    fn canonical_key_ignores_direction() {
        let (a, b) = (cys(1, 30), cys(2, 8));
        assert_eq!(
            candidate(a, b).canonical_key(),
            candidate(b, a).canonical_key()
        );
        assert_eq!(
            candidate(a, b).canonical_key(),
            (ResidueKey::new('A', 8), ResidueKey::new('A', 30))
        );
    }


    #[test]
    fn contains_pair_accepts_either_order() {
        let set = BondSet::from_unique(vec![candidate(cys(1, 3), cys(2, 40))]);
        assert!(set.contains_pair(&ResidueKey::new('A', 40), &ResidueKey::new('A', 3)));
        assert!(!set.contains_pair(&ResidueKey::new('A', 3), &ResidueKey::new('A', 41)));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn tier_display_is_kebab_case() {
        assert_eq!(Tier::Strict.to_string(), "strict");
        assert_eq!(Tier::ConfidenceInterval.to_string(), "confidence-interval");
    }
}
