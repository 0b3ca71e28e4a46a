use crate::entities::{Candidate, Instance};
use crate::io::ext_repr::{ExtPlacedItem, ExtPlacement};

/// Exports a candidate, resolving the category and variety of every gene through the instance's manifest.
pub fn export_candidate(instance: &Instance, candidate: &Candidate) -> ExtPlacement {
    let items = candidate
        .genes()
        .iter()
        .map(|gene| {
            let kind = instance.manifest.kind(gene.kind_id());
            let (x, y) = gene.position().into();
            ExtPlacedItem {
                x,
                y,
                clearance_radius: gene.radius(),
                category: kind.category.clone(),
                variety_id: kind.variety_id,
                variety_name: kind.variety_name.clone(),
            }
        })
        .collect();

    ExtPlacement {
        items,
        fitness: candidate.fitness(),
    }
}
