use crate::engine::bond::{BondCandidate, BondSet};
use std::collections::HashSet;
use tracing::{instrument, trace};

/// Collapses candidates that name the same residue pair.
///
/// Iterates in input order and keeps the first candidate seen for each
/// canonical key, so the output follows first-seen order rather than key order.
#[instrument(skip_all, name = "deduplication_task", fields(candidates = candidates.len()))]
pub fn run(candidates: Vec<BondCandidate>) -> BondSet {
    let mut seen = HashSet::with_capacity(candidates.len());
    let unique: Vec<BondCandidate> = candidates
        .into_iter()
        .filter(|candidate| {
            let fresh = seen.insert(candidate.canonical_key());
            if !fresh {
                trace!(cys1 = %candidate.cys1.key, cys2 = %candidate.cys2.key, "Dropping repeated pair.");
            }
            fresh
        })
        .collect();
    BondSet::from_unique(unique)
}
