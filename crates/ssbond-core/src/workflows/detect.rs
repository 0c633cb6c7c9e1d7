use crate::core::models::origin::StructureOrigin;
use crate::core::models::system::MolecularSystem;
use crate::engine::bond::{BondCandidate, BondSet};
use crate::engine::config::DetectionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks;
use tracing::{info, instrument, warn};

/// Outcome of a detection run.
///
/// Finding no bonds is a valid result; both sets are simply empty.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    pub origin: StructureOrigin,
    /// Cysteines present in the structure.
    pub cysteines_found: usize,
    /// Cysteines that passed the quality gate.
    pub cysteines_retained: usize,
    pub strict: BondSet,
    pub confidence_interval: BondSet,
}

impl DetectionResult {
    /// Bonds to draw in a visualization script.
    ///
    /// Strict bonds always come first; confidence-interval bonds follow when
    /// `include_confidence_interval` is set.
    pub fn visualized_bonds(&self, include_confidence_interval: bool) -> Vec<BondCandidate> {
        let mut bonds = self.strict.as_slice().to_vec();
        if include_confidence_interval {
            bonds.extend(self.confidence_interval.iter().copied());
        }
        bonds
    }

    pub fn has_bonds(&self) -> bool {
        !self.strict.is_empty() || !self.confidence_interval.is_empty()
    }
}

/// Runs the detection pipeline over `system`.
///
/// # Errors
///
/// Fails on an invalid configuration before touching the structure, on a
/// cysteine without atoms, or on a retained cysteine lacking a unique C_β or S_γ.
#[instrument(skip_all, name = "detection_workflow", fields(origin = %origin))]
pub fn run(
    system: &MolecularSystem,
    origin: StructureOrigin,
    config: &DetectionConfig,
    reporter: &ProgressReporter,
) -> Result<DetectionResult, EngineError> {
    config.validate()?;

    // === Phase 1: Cysteine selection and quality gate ===
    reporter.report(Progress::PhaseStart {
        name: "Cysteine Selection",
    });
    let cysteines = tasks::selection::run(system);
    let retained = tasks::quality::run(system, &cysteines, origin, &config.quality)?;
    info!(
        found = cysteines.len(),
        retained = retained.len(),
        "Cysteine selection complete."
    );
    if retained.len() < cysteines.len() {
        reporter.report(Progress::Message(format!(
            "{} of {} cysteines rejected by the quality gate",
            cysteines.len() - retained.len(),
            cysteines.len()
        )));
    }
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Pairwise geometric screening ===
    reporter.report(Progress::PhaseStart {
        name: "Bond Classification",
    });
    let classification = tasks::classification::run(system, &retained, config, reporter)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Per-tier deduplication ===
    // A full-matrix scan measures each pair twice; if the two directions land
    // in different tiers at a band edge, the strict verdict stands.
    let strict = tasks::deduplication::run(classification.strict);
    let (conflicting, remaining): (Vec<_>, Vec<_>) = classification
        .confidence_interval
        .into_iter()
        .partition(|bond| strict.contains_pair(&bond.cys1.key, &bond.cys2.key));
    if !conflicting.is_empty() {
        warn!(
            count = conflicting.len(),
            "Dropping confidence-interval candidates already accepted as strict."
        );
    }
    let confidence_interval = tasks::deduplication::run(remaining);

    info!(
        strict = strict.len(),
        confidence_interval = confidence_interval.len(),
        "Disulfide detection complete."
    );

    Ok(DetectionResult {
        origin,
        cysteines_found: cysteines.len(),
        cysteines_retained: retained.len(),
        strict,
        confidence_interval,
    })
}
