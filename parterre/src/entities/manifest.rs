use itertools::Itertools;

use crate::entities::ItemKind;
use crate::error::{InputError, InputResult};

/// The requested mix of items: every kind together with its demanded quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct Manifest {
    kinds: Vec<ItemKind>,
}

impl Manifest {
    pub fn try_new(kinds: Vec<ItemKind>) -> InputResult<Self> {
        if !kinds.iter().enumerate().all(|(i, kind)| kind.id == i) {
            return Err(InputError::Constraint(format!(
                "item kinds should have consecutive ids starting from 0, ids: {:?}",
                kinds.iter().map(|k| k.id).collect_vec()
            )));
        }
        let manifest = Self { kinds };
        if manifest.total_item_count() == 0 {
            return Err(InputError::Constraint(
                "manifest does not request any items".to_string(),
            ));
        }
        Ok(manifest)
    }

    pub fn kinds(&self) -> &[ItemKind] {
        &self.kinds
    }

    pub fn kind(&self, id: usize) -> &ItemKind {
        &self.kinds[id]
    }

    /// Total number of items over all kinds, i.e. the length of every candidate.
    pub fn total_item_count(&self) -> usize {
        self.kinds.iter().map(|k| k.quantity).sum()
    }

    /// The kind of every gene in a candidate, in order: each kind repeated `quantity` times.
    pub fn gene_template(&self) -> impl Iterator<Item = &ItemKind> {
        self.kinds
            .iter()
            .flat_map(|kind| std::iter::repeat_n(kind, kind.quantity))
    }

    /// Combined area of the clearance discs of all requested items
    pub fn total_clearance_area(&self) -> f64 {
        self.kinds
            .iter()
            .map(|k| std::f64::consts::PI * k.clearance_radius.powi(2) * k.quantity as f64)
            .sum()
    }
}
