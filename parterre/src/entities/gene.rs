use crate::entities::ItemKind;
use crate::geometry::primitives::Point;

/// A single placed item inside a [`Candidate`](crate::entities::Candidate).
///
/// Genes are never edited in place: moving an item produces a new gene via [`Gene::relocated`].
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Gene {
    position: Point,
    radius: f64,
    kind_id: usize,
}

impl Gene {
    pub fn new(position: Point, kind: &ItemKind) -> Self {
        Self {
            position,
            radius: kind.clearance_radius,
            kind_id: kind.id,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Clearance radius, copied from the item kind
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Id of the [`ItemKind`] this gene places
    pub fn kind_id(&self) -> usize {
        self.kind_id
    }

    /// The same item, placed at `position`
    pub fn relocated(&self, position: Point) -> Self {
        Self { position, ..*self }
    }
}
