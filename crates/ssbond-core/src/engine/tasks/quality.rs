use crate::core::models::ids::ResidueId;
use crate::core::models::origin::StructureOrigin;
use crate::core::models::system::MolecularSystem;
use crate::engine::config::QualityThresholds;
use crate::engine::error::EngineError;
use tracing::{debug, instrument, trace};

/// Unweighted mean of the quality scores of a residue's atoms.
///
/// # Errors
///
/// Returns [`EngineError::EmptyResidue`] for a residue without atoms.
pub fn mean_quality(system: &MolecularSystem, residue_id: ResidueId) -> Result<f64, EngineError> {
    let key = system.residue_key(residue_id).ok_or_else(|| {
        EngineError::Internal(format!("residue {:?} is not part of the system", residue_id))
    })?;

    let (sum, count) = system
        .residue_atoms(residue_id)
        .fold((0.0, 0usize), |(sum, count), atom| (sum + atom.quality, count + 1));

    if count == 0 {
        return Err(EngineError::EmptyResidue { residue: key });
    }
    Ok(sum / count as f64)
}

/// Whether a residue with this mean quality is reliable enough to measure.
///
/// B-factors (experimental) must not exceed the cutoff; predicted
/// confidences must reach it.
pub fn passes(mean: f64, origin: StructureOrigin, thresholds: &QualityThresholds) -> bool {
    match origin {
        StructureOrigin::Experimental => mean <= thresholds.max_b_factor,
        StructureOrigin::Predicted => mean >= thresholds.min_plddt,
    }
}

/// Keeps the cysteines whose mean atomic quality passes the gate for `origin`.
///
/// Input order is preserved.
#[instrument(skip_all, name = "quality_filter_task", fields(origin = %origin))]
pub fn run(
    system: &MolecularSystem,
    cysteines: &[ResidueId],
    origin: StructureOrigin,
    thresholds: &QualityThresholds,
) -> Result<Vec<ResidueId>, EngineError> {
    let mut retained = Vec::with_capacity(cysteines.len());
    for &residue_id in cysteines {
        let mean = mean_quality(system, residue_id)?;
        if passes(mean, origin, thresholds) {
            retained.push(residue_id);
        } else {
            trace!(residue = ?system.residue_key(residue_id), mean, "Residue rejected by quality gate.");
        }
    }

    debug!(
        total = cysteines.len(),
        retained = retained.len(),
        "Quality filter applied."
    );
    Ok(retained)
}
