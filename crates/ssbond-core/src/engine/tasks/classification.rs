use crate::core::models::ids::ResidueId;
use crate::core::models::system::MolecularSystem;
use crate::engine::bond::{BondCandidate, CysteineRef, Tier};
use crate::engine::config::{DetectionConfig, PairScan};
use crate::engine::error::EngineError;
use crate::engine::geometry::CysteineAtoms;
use crate::engine::progress::{Progress, ProgressReporter};
use itertools::Itertools;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Candidates found by the pairwise scan, split by tier, in enumeration order.
///
/// Under [`PairScan::FullMatrix`] both directions of a pair are present;
/// run deduplication before reporting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub strict: Vec<BondCandidate>,
    pub confidence_interval: Vec<BondCandidate>,
}

/// The fixed pair enumeration for a scan, as index pairs into the cysteine list.
///
/// Self-pairs never appear: a residue cannot bond to itself.
pub fn pair_indices(count: usize, scan: PairScan) -> Vec<(usize, usize)> {
    match scan {
        PairScan::Canonical => (0..count).tuple_combinations().collect(),
        PairScan::FullMatrix => (0..count)
            .cartesian_product(0..count)
            .filter(|(i, j)| i != j)
            .collect(),
    }
}

/// Measures every pair of the retained cysteines and sorts the hits into tiers.
///
/// All cysteines are resolved up front, so a residue lacking its C_β or S_γ
/// aborts the run before any pair is measured.
#[instrument(skip_all, name = "bond_classification_task", fields(cysteines = cysteines.len()))]
pub fn run(
    system: &MolecularSystem,
    cysteines: &[ResidueId],
    config: &DetectionConfig,
    reporter: &ProgressReporter,
) -> Result<Classification, EngineError> {
    let resolved = cysteines
        .iter()
        .map(|&residue_id| CysteineAtoms::resolve(system, residue_id))
        .collect::<Result<Vec<_>, _>>()?;

    let pairs = pair_indices(resolved.len(), config.pair_scan);
    info!(
        pairs = pairs.len(),
        scan = ?config.pair_scan,
        "Scanning cysteine pairs."
    );

    if pairs.is_empty() {
        return Ok(Classification::default());
    }

    reporter.report(Progress::TaskStart {
        total_steps: pairs.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = pairs.iter();

    #[cfg(feature = "parallel")]
    let iterator = pairs.par_iter();

    let candidates: Vec<BondCandidate> = iterator
        .filter_map(|&(i, j)| {
            let candidate = evaluate_pair(&resolved[i], &resolved[j], config);
            reporter.report(Progress::TaskIncrement);
            candidate
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let (strict, confidence_interval): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|candidate| candidate.tier == Tier::Strict);

    debug!(
        strict = strict.len(),
        confidence_interval = confidence_interval.len(),
        "Pair scan complete."
    );

    Ok(Classification {
        strict,
        confidence_interval,
    })
}

fn evaluate_pair(
    first: &CysteineAtoms,
    second: &CysteineAtoms,
    config: &DetectionConfig,
) -> Option<BondCandidate> {
    let geometry = first.measure(second);
    let tier = config.classify(geometry.distance, geometry.dihedral_angle)?;
    Some(BondCandidate {
        cys1: CysteineRef {
            id: first.residue_id,
            key: first.key,
        },
        cys2: CysteineRef {
            id: second.residue_id,
            key: second.key,
        },
        distance: geometry.distance,
        dihedral_angle: geometry.dihedral_angle,
        tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::ResidueKey;
    use crate::engine::config::{Band, DetectionConfigBuilder};
    use crate::engine::tasks::test_support::{add_cysteine, add_cysteine_pair};
    use nalgebra::{Point3, Vector3};
    use std::sync::Mutex;

    fn scan(system: &MolecularSystem, config: &DetectionConfig) -> Classification {
        let cysteines = crate::engine::tasks::selection::run(system);
        run(system, &cysteines, config, &ProgressReporter::new()).unwrap()
    }

    #[test]
    fn canonical_enumeration_is_upper_triangle() {
        assert_eq!(
            pair_indices(3, PairScan::Canonical),
            vec![(0, 1), (0, 2), (1, 2)]
        );
        assert!(pair_indices(1, PairScan::Canonical).is_empty());
        assert!(pair_indices(0, PairScan::Canonical).is_empty());
    }

    #[test]
    fn full_matrix_enumeration_skips_self_pairs() {
        assert_eq!(
            pair_indices(3, PairScan::FullMatrix),
            vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn ideal_geometry_is_strict() {
        let mut system = MolecularSystem::new();
        add_cysteine_pair(&mut system, 3, 40, 2.0, 90.0);

        let result = scan(&system, &DetectionConfig::default());
        assert_eq!(result.strict.len(), 1);
        assert!(result.confidence_interval.is_empty());

        let bond = result.strict[0];
        assert_eq!(bond.cys1.key, ResidueKey::new('A', 3));
        assert_eq!(bond.cys2.key, ResidueKey::new('A', 40));
        assert!((bond.distance - 2.0).abs() < 1e-9);
        assert!((bond.dihedral_angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn slightly_long_bond_falls_into_confidence_interval() {
        let mut system = MolecularSystem::new();
        add_cysteine_pair(&mut system, 3, 40, 2.6, 90.0);

        let result = scan(&system, &DetectionConfig::default());
        assert!(result.strict.is_empty());
        assert_eq!(result.confidence_interval.len(), 1);
        assert_eq!(result.confidence_interval[0].tier, Tier::ConfidenceInterval);
    }

    #[test]
    fn skewed_angle_inside_widened_band_is_confidence_interval() {
        let mut system = MolecularSystem::new();
        add_cysteine_pair(&mut system, 1, 2, 2.05, 99.0);

        let result = scan(&system, &DetectionConfig::default());
        assert!(result.strict.is_empty());
        assert_eq!(result.confidence_interval.len(), 1);
    }

    #[test]
    fn far_apart_pair_is_rejected() {
        let mut system = MolecularSystem::new();
        add_cysteine_pair(&mut system, 1, 2, 4.2, 90.0);
        assert_eq!(
            scan(&system, &DetectionConfig::default()),
            Classification::default()
        );
    }

    #[test]
    fn full_matrix_sees_each_bond_twice() {
        let mut system = MolecularSystem::new();
        add_cysteine_pair(&mut system, 1, 2, 2.0, 90.0);
        let config = DetectionConfig {
            pair_scan: PairScan::FullMatrix,
            ..DetectionConfig::default()
        };

        let result = scan(&system, &config);
        assert_eq!(result.strict.len(), 2);
        assert_eq!(
            result.strict[0].canonical_key(),
            result.strict[1].canonical_key()
        );
        assert_eq!(result.strict[0].cys1.key, result.strict[1].cys2.key);
    }

    #[test]
    fn missing_sulfur_aborts_the_scan() {
        let mut system = MolecularSystem::new();
        add_cysteine_pair(&mut system, 1, 2, 2.0, 90.0);
        let chain = system.find_chain_by_id('A').unwrap();
        system.add_residue(chain, 7, None, "CYS").unwrap();

        let cysteines = crate::engine::tasks::selection::run(&system);
        let err = run(
            &system,
            &cysteines,
            &DetectionConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::StructureIntegrity { residue, .. } if residue == ResidueKey::new('A', 7)
        ));
    }

    #[test]
    fn strict_hits_never_reappear_in_confidence_interval() {
        let mut system = MolecularSystem::new();
        let sulfurs = [
            (Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)),
            (Point3::new(2.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
            (Point3::new(2.0, 2.55, 0.0), Vector3::new(1.0, 0.0, 0.0)),
            (Point3::new(-2.4, 0.3, 0.2), Vector3::new(0.0, 0.3, 1.0)),
            (Point3::new(0.1, -2.1, 1.1), Vector3::new(1.0, 1.0, 0.0)),
        ];
        for (n, (sulfur, dir)) in sulfurs.into_iter().enumerate() {
            add_cysteine(&mut system, 'A', n as isize + 1, sulfur, dir, 5.0);
        }

        let config = DetectionConfigBuilder::new()
            .distance(Band::new(1.5, 2.5))
            .angle(Band::new(60.0, 120.0))
            .distance_ci(1.0)
            .angle_ci(60.0)
            .build()
            .unwrap();
        let result = scan(&system, &config);

        for strict in &result.strict {
            assert!(
                !result
                    .confidence_interval
                    .iter()
                    .any(|ci| ci.canonical_key() == strict.canonical_key())
            );
        }
    }

    #[test]
    fn reports_one_increment_per_pair() {
        let mut system = MolecularSystem::new();
        for n in 0..4 {
            add_cysteine(
                &mut system,
                'A',
                n,
                Point3::new(n as f64 * 10.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                5.0,
            );
        }
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        let cysteines = crate::engine::tasks::selection::run(&system);
        run(&system, &cysteines, &DetectionConfig::default(), &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.first(), Some(&Progress::TaskStart { total_steps: 6 }));
        assert_eq!(
            events
                .iter()
                .filter(|e| **e == Progress::TaskIncrement)
                .count(),
            6
        );
        assert_eq!(events.last(), Some(&Progress::TaskFinish));
    }
}
