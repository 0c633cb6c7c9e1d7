use crate::core::models::ids::ResidueId;
use crate::core::models::system::MolecularSystem;
use tracing::{debug, instrument};

/// Collects every cysteine in the system.
///
/// Chains are visited in file order and residues in chain order; no quality
/// filtering happens here.
#[instrument(skip_all, name = "cysteine_selection_task")]
pub fn run(system: &MolecularSystem) -> Vec<ResidueId> {
    let cysteines: Vec<ResidueId> = system
        .chains_iter()
        .flat_map(|(_, chain)| chain.residues().iter().copied())
        .filter(|&residue_id| {
            system
                .residue(residue_id)
                .is_some_and(|residue| residue.is_cysteine())
        })
        .collect();

    debug!(count = cysteines.len(), "Selected cysteine residues.");
    cysteines
}
