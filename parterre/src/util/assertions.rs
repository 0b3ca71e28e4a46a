use itertools::Itertools;
use log::error;

use crate::entities::{Candidate, Manifest};
use crate::geometry::geo_traits::Region;
use crate::geometry::Shape;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn all_candidates_scored(candidates: &[Candidate]) -> bool {
    candidates.iter().all(|c| c.is_scored())
}

/// Checks whether the candidate places exactly the items the manifest asks for, with the correct radii.
pub fn candidate_matches_manifest(candidate: &Candidate, manifest: &Manifest) -> bool {
    if candidate.n_genes() != manifest.total_item_count() {
        error!(
            "candidate has {} genes, manifest requests {}",
            candidate.n_genes(),
            manifest.total_item_count()
        );
        return false;
    }
    let counts = candidate.genes().iter().counts_by(|g| g.kind_id());
    let quantities_match = manifest
        .kinds()
        .iter()
        .all(|k| counts.get(&k.id).copied().unwrap_or(0) == k.quantity);
    let radii_match = candidate
        .genes()
        .iter()
        .all(|g| g.radius() == manifest.kind(g.kind_id()).clearance_radius);

    quantities_match && radii_match
}

/// Checks whether every gene of the candidate lies inside the domain.
pub fn all_genes_contained(candidate: &Candidate, shape: &Shape) -> bool {
    candidate
        .genes()
        .iter()
        .all(|g| shape.contains(g.position()))
}
